//! CLI subcommand implementations

pub mod config;
pub mod countries;
pub mod theme;
pub mod weather;
