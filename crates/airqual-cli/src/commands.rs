use crate::args::{Cli, Commands};
use crate::handlers;
use crate::types::LogLevel;
use airqual_client::{HttpTransport, QueryParams, ServiceConfig};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let config = ServiceConfig::from_env();
    let transport = HttpTransport::new()?;

    match cli.command {
        Commands::Stations { date } => handlers::stations::handle(&config, &transport, date),

        Commands::Indexes {
            date,
            datemin,
            datemax,
            station,
            pollutant,
        } => {
            let params = QueryParams {
                date,
                date_min: datemin,
                date_max: datemax,
                station,
                pollutant,
            };
            handlers::indexes::handle(&config, &transport, params)
        }

        Commands::Alerts {
            date,
            datemin,
            datemax,
            station,
            pollutant,
        } => {
            let params = QueryParams {
                date,
                date_min: datemin,
                date_max: datemax,
                station,
                pollutant,
            };
            handlers::alerts::handle(&config, &transport, params)
        }
    }
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(level.as_tracing_level())
        .with_writer(std::io::stderr)
        .init();
}
