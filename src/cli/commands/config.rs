//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{print_formatted, print_success, OutputFormat};
use crate::config::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Store the OpenWeather API key in the config file
    SetKey {
        /// API key from your OpenWeather account
        key: String,
    },
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

pub fn run(command: ConfigCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(format),
        ConfigCommands::Path => path(format),
        ConfigCommands::SetKey { key } => set_key(&key, quiet),
    }
}

fn show(format: OutputFormat) -> Result<()> {
    let config = redacted(Config::load()?);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let toml = toml::to_string_pretty(&config)?;
            println!("{}", toml);
        }
    }

    Ok(())
}

/// Hide the API key from printed output
fn redacted(mut config: Config) -> Config {
    if let Some(key) = config.api.key.as_mut() {
        *key = "********".to_string();
    }
    config
}

fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let result = ConfigPathResult {
        path: path.to_string_lossy().to_string(),
        exists: path.exists(),
    };

    print_formatted(&result, format, |r| {
        if r.exists {
            r.path.clone()
        } else {
            format!("{} (not created yet)", r.path)
        }
    });

    Ok(())
}

fn set_key(key: &str, quiet: bool) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("API key must not be blank");
    }

    let mut config = Config::load()?;
    config.api.key = Some(key.to_string());
    config.save()?;

    print_success("API key saved", quiet);
    Ok(())
}
