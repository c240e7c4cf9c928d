use crate::render;
use airqual_client::{ServiceConfig, Transport, ops};
use anyhow::Result;

pub fn handle(
    config: &ServiceConfig,
    transport: &dyn Transport,
    date: Option<String>,
) -> Result<()> {
    let features = ops::stations(config, transport, date)?;
    print!("{}", render::stations::report(&features)?);
    Ok(())
}
