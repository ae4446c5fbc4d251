//! CLI module for Breezy
//!
//! Headless commands sharing the dashboard's weather client and theme slot.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::print_error;
use output::OutputFormat;

/// Breezy - weather dashboard
#[derive(Parser, Debug)]
#[command(name = "breezy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    /// Run a command instead of opening the dashboard
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show current conditions for a city
    Current {
        /// City name, e.g. "London"
        city: String,
        /// ISO 3166 country code, e.g. "GB"
        country: String,
    },

    /// Show the five-day forecast for a city
    Forecast {
        /// City name, e.g. "London"
        city: String,
        /// ISO 3166 country code, e.g. "GB"
        country: String,
        /// Only print the first N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Light/dark theme preference
    Theme {
        #[command(subcommand)]
        command: commands::theme::ThemeCommands,
    },

    /// List known countries
    Countries {
        /// Only show countries whose name or code contains this text
        filter: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run the CLI command
pub async fn run(command: Commands, options: &OutputOptions) -> anyhow::Result<()> {
    let format = options.format();
    let quiet = options.quiet;

    match command {
        Commands::Current { city, country } => {
            commands::weather::current(&city, &country, format).await
        }
        Commands::Forecast {
            city,
            country,
            limit,
        } => commands::weather::forecast(&city, &country, limit, format).await,
        Commands::Theme { command } => commands::theme::run(command, format, quiet),
        Commands::Countries { filter } => commands::countries::run(filter.as_deref(), format),
        Commands::Config { command } => commands::config::run(command, format, quiet),
    }
}
