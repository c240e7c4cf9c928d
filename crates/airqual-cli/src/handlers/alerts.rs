use crate::render;
use airqual_client::{QueryParams, ServiceConfig, Transport, ops};
use anyhow::Result;

pub fn handle(
    config: &ServiceConfig,
    transport: &dyn Transport,
    params: QueryParams,
) -> Result<()> {
    let features = ops::alerts(config, transport, params)?;
    print!("{}", render::alerts::report(&features)?);
    Ok(())
}
