mod cli;
mod error;
mod fetch;
mod reading;
mod tide;

use anyhow::{Error, Result};
use clap::Parser;
use cli::command::ReportConfig;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Conditions { station } => match command::conditions(station).await {
            Ok(report) => println!("{}", report),
            Err(e) => eprintln!("Error fetching current conditions: {}", e),
        },
        Commands::Waves { station, readings } => match command::waves(station, *readings).await {
            Ok(report) => println!("{}", report),
            Err(e) => eprintln!("Error fetching recent wave data: {}", e),
        },
        Commands::Tides { station } => match command::tides(station).await {
            Ok(report) => println!("{}", report),
            Err(e) => eprintln!("Error fetching tide data: {}", e),
        },
        Commands::Report {
            station,
            readings,
            tides,
            tide_station,
        } => {
            let config = ReportConfig {
                station_id: station.clone(),
                max_readings: *readings,
                include_tides: *tides || tide_station.is_some(),
                tide_station_id: tide_station.clone(),
            };
            match command::report(&config).await {
                Ok(report) => println!("{}", report),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Commands::Stations {} => println!("{}", command::stations()),
    }

    Ok(())
}
