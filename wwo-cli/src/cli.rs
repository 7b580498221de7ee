use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::info;
use wwo_core::{Config, WeatherClient, WeatherQuery, codes};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wwo", version, about = "World Weather Online CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key, default location and request timeout.
    Configure,

    /// Show current conditions and the daily outlook for a location.
    Show {
        /// Location name; falls back to the configured default.
        location: Option<String>,

        /// API key to use instead of the configured one.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Describe a weather condition code.
    Describe {
        /// Numeric code as sent in `weatherCode`, e.g. 296.
        code: i32,
    },

    /// List every known condition code.
    Codes,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { location, api_key } => show(location, api_key).await?,
            Command::Describe { code } => {
                let (description, category) = codes::describe(code);
                println!("{code}: {description} ({category})");
            }
            Command::Codes => {
                for (code, description, category) in codes::all() {
                    println!("{code:>4}  {category:<8} {description}");
                }
            }
        }

        Ok(())
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("World Weather Online API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);

    let location = Text::new("Default location:")
        .with_initial_value(config.default_location.as_deref().unwrap_or_default())
        .with_help_message("Clear the line to always pass a location to `wwo show`")
        .prompt()?;
    config.set_default_location(Some(location));

    let current_timeout = config.timeout_secs.map(|t| t.to_string()).unwrap_or_default();
    let timeout = Text::new("Request timeout in seconds:")
        .with_initial_value(&current_timeout)
        .with_help_message("Clear the line for no timeout")
        .prompt()?;
    config.timeout_secs = parse_timeout(&timeout)?;

    config.save()?;
    info!(path = %Config::config_file_path()?.display(), "configuration saved");
    println!("Configuration saved.");

    Ok(())
}

/// Empty input means no timeout.
fn parse_timeout(input: &str) -> Result<Option<u64>> {
    match input.trim() {
        "" => Ok(None),
        secs => Ok(Some(secs.parse().with_context(|| format!("Invalid timeout: {secs}"))?)),
    }
}

async fn show(location: Option<String>, api_key: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let location = config.resolve_location(location.as_deref())?;
    let api_key = match api_key {
        Some(key) => key,
        None => config.api_key()?.to_owned(),
    };

    let client = WeatherClient::from_config(&config)?;
    let report = client
        .get_weather(&WeatherQuery::new(location.as_str(), api_key))
        .await
        .with_context(|| format!("Failed to get weather for '{location}'"))?;

    print!("{}", render::report(&report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_timeout_means_none() {
        assert_eq!(parse_timeout("").unwrap(), None);
        assert_eq!(parse_timeout("   ").unwrap(), None);
        assert_eq!(parse_timeout(" 10 ").unwrap(), Some(10));
    }

    #[test]
    fn invalid_timeout_is_an_error() {
        let err = parse_timeout("soon").unwrap_err();
        assert!(err.to_string().contains("Invalid timeout: soon"));
    }

    #[test]
    fn cleared_location_removes_default() {
        let mut config = Config::default();
        config.set_default_location(Some("London".into()));

        config.set_default_location(Some(String::new()));
        assert_eq!(config.default_location, None);
    }
}
