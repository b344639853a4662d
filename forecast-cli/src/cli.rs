use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{Config, ForecastFetcher};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "OpenWeather forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show the upcoming forecast for a city.
    Show {
        /// City or location name, e.g. "Paris".
        city: String,

        /// Print the JSON payload instead of formatted lines.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(&city, json).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    // Edit the file-backed config only; an env override stays in the env.
    let mut config = Config::load_file()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.api_key = Some(api_key);
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let fetcher = ForecastFetcher::new(&config)?;
    let entries = fetcher.fetch_forecast(city).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No forecast entries returned for {city}.");
        return Ok(());
    }

    println!("Forecast for {}:", entries[0].city);
    for entry in &entries {
        println!(
            "  {:<10} {:>4}°F  wind {:>2} mph  humidity {:>3}%  {}",
            entry.date, entry.temp_f, entry.wind_speed, entry.humidity, entry.icon_description
        );
    }

    Ok(())
}
