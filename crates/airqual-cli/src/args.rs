use crate::types::LogLevel;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "airqual")]
#[command(about = "Query Portuguese air quality data (qualar.apambiente.pt)", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List air quality measurement stations
    Stations {
        /// Date the listing should cover (YYYY-MM-DD, defaults to yesterday)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show air quality indexes measured at the stations
    Indexes {
        /// Exact date of the data (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Minimum date of the data (YYYY-MM-DD)
        #[arg(long)]
        datemin: Option<String>,

        /// Maximum date of the data (YYYY-MM-DD)
        #[arg(long)]
        datemax: Option<String>,

        /// ID of the station
        #[arg(long)]
        station: Option<String>,

        /// Pollutant abbreviation (e.g. NO2, PM10, O3)
        #[arg(long)]
        pollutant: Option<String>,
    },

    /// Show threshold-exceedance alerts
    Alerts {
        /// Exact date of the data (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Minimum date of the data (YYYY-MM-DD)
        #[arg(long)]
        datemin: Option<String>,

        /// Maximum date of the data (YYYY-MM-DD)
        #[arg(long)]
        datemax: Option<String>,

        /// ID of the station
        #[arg(long)]
        station: Option<String>,

        /// Pollutant abbreviation (e.g. NO2, PM10, O3)
        #[arg(long)]
        pollutant: Option<String>,
    },
}
