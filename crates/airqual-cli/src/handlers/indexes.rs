use crate::render;
use airqual_client::{QueryParams, ServiceConfig, Transport, ops};
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn handle(
    config: &ServiceConfig,
    transport: &dyn Transport,
    params: QueryParams,
) -> Result<()> {
    let features = ops::indexes(config, transport, params)?;
    let colored = std::io::stdout().is_terminal();
    print!("{}", render::indexes::report(&features, colored)?);
    Ok(())
}
