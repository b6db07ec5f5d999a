use anyhow::Context;
use clap::{Parser, Subcommand};
use companion_core::provider::openweather::OpenWeatherProvider;
use companion_core::{Companion, Config, Coordinates};

use crate::host::{FixedLocation, StdoutMessenger};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "companion",
    version,
    about = "Clothing-recommendation companion host"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Run one fetch-and-recommend cycle for a fixed position.
    Run {
        /// Latitude in decimal degrees.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => {
                let mut config = Config::load()?;

                let api_key = inquire::Password::new("OpenWeather API key:")
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API key")?;

                config.set_api_key(api_key);
                config.save()?;

                println!("API key saved to {}", Config::config_file_path()?.display());
            }
            Command::Run { lat, lon } => {
                let config = Config::load()?;
                let api_key = config.api_key()?.to_owned();

                let companion = Companion::new(
                    Box::new(FixedLocation::new(Coordinates {
                        latitude: lat,
                        longitude: lon,
                    })),
                    Box::new(OpenWeatherProvider::new(api_key)),
                    Box::new(StdoutMessenger),
                );

                // Same cycle the watch would trigger on startup.
                companion.on_ready().await;
            }
        }

        Ok(())
    }
}
