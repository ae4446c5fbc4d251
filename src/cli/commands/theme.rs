//! Theme preference commands

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::{print_output, print_success, OutputFormat};
use crate::prefs::FilePreferences;
use crate::state::{ThemeController, ThemePreference};

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show the saved theme
    Show,

    /// Switch between light and dark
    Toggle,
}

pub fn run(command: ThemeCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    let prefs = FilePreferences::open()?;

    match command {
        ThemeCommands::Show => print_output(&ThemePreference::read(&prefs), format),
        ThemeCommands::Toggle => {
            let preference = ThemeController::load(Box::new(prefs)).toggle();
            match format {
                OutputFormat::Json => print_output(&preference, format),
                OutputFormat::Text => {
                    print_success(&format!("Switched to {} mode", preference), quiet)
                }
            }
        }
    }

    Ok(())
}
