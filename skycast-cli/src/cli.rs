use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use skycast_core::{
    CityWeatherData, Config, SyntheticProvider, WeatherProvider, WeatherRequest,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Synthetic weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions and the next hours.
    Now {
        /// City name; falls back to the configured default.
        city: Option<String>,

        /// Reference instant, e.g. "2025-04-15T12:00". Defaults to now.
        #[arg(long, value_name = "YYYY-MM-DDTHH:MM")]
        at: Option<String>,

        /// Print the full dataset as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },

    /// Show the 7-day forecast.
    Week {
        city: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DDTHH:MM")]
        at: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show the day's temperature, wind, humidity and UV series.
    Stats {
        city: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DDTHH:MM")]
        at: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// List configured cities.
    Cities,

    /// Interactively pick cities and the default.
    Configure,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Now { city, at, json } => {
                let data = fetch(city, at)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                } else {
                    print_current(&data);
                }
            }
            Command::Week { city, at, json } => {
                let data = fetch(city, at)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&data.weekly_forecast)?);
                } else {
                    print_week(&data);
                }
            }
            Command::Stats { city, at, json } => {
                let data = fetch(city, at)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                } else {
                    print_stats(&data);
                }
            }
            Command::Cities => {
                print_cities(&Config::load()?);
            }
            Command::Configure => {
                configure()?;
            }
        }

        Ok(())
    }
}

/// Resolve the city (argument or configured default) and generate its data.
fn fetch(city: Option<String>, at: Option<String>) -> Result<CityWeatherData> {
    let city = match city {
        Some(city) => city,
        None => Config::load()?.default_city()?.to_string(),
    };

    let request = match at {
        Some(raw) => {
            let at = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M")
                .with_context(|| format!("Invalid --at value '{raw}', expected YYYY-MM-DDTHH:MM"))?;
            WeatherRequest::at(city, at)
        }
        None => WeatherRequest::new(city),
    };

    SyntheticProvider::new().fetch(&request)
}

fn print_current(data: &CityWeatherData) {
    println!(
        "{} — {}, {}°C (feels like {}°C)",
        data.city, data.condition, data.temperature, data.feels_like
    );
    println!(
        "wind {} km/h · humidity {}% · UV {} · pressure {} hPa",
        data.wind, data.humidity, data.uv_index, data.pressure
    );
    println!();
    println!("Next hours:");
    for entry in &data.hourly_forecast {
        println!("  {:>4}  {:>3}°  {}", entry.time, entry.temperature, entry.condition);
    }
}

fn print_week(data: &CityWeatherData) {
    println!("7-day forecast for {}:", data.city);
    for day in &data.weekly_forecast {
        println!(
            "  {:<9} {:<7} {:>3}° / {:<3}°  {:<14} rain {:>3}%  humidity {:>3}%  wind {:>2} km/h",
            day.day,
            day.date,
            day.min_temp,
            day.max_temp,
            day.condition.to_string(),
            day.precipitation,
            day.humidity,
            day.wind
        );
    }
}

fn print_stats(data: &CityWeatherData) {
    println!("Day series for {}:", data.city);

    println!("  Temperature (°C):");
    for p in &data.temperature_series {
        println!("    {:>4}  {:>3}", p.time, p.temp);
    }

    println!("  Wind (km/h):");
    for p in &data.wind_series {
        println!("    {:>4}  {:>3}", p.time, p.speed);
    }

    println!("  Humidity (%):");
    for p in &data.humidity_series {
        println!("    {:>4}  {:>3}", p.time, p.humidity);
    }

    println!("  UV index:");
    for p in &data.uv_series {
        println!("    {:>4}  {:>3}", p.time, p.index);
    }
}

fn print_cities(config: &Config) {
    if config.cities.is_empty() {
        println!("No cities configured yet.");
        println!("Hint: run `skycast configure` to pick some.");
        return;
    }

    for city in &config.cities {
        let marker = if Some(city.as_str()) == config.default_city.as_deref() { "*" } else { " " };
        println!("{marker} {city}");
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;
    if config.cities.is_empty() {
        config = Config::with_starter_cities();
    }

    let added = inquire::Text::new("Add a city (leave empty to keep the current list):")
        .prompt()
        .context("Configuration aborted")?;
    let added = added.trim();
    if !added.is_empty() {
        config.add_city(added);
    }

    let default = inquire::Select::new("Default city:", config.cities.clone())
        .prompt()
        .context("Configuration aborted")?;
    config.set_default_city(&default);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
