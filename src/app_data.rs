//! Application data embedded from TOML/JSON files at compile time.
//!
//! This module provides access to application-level constants that are:
//! - Embedded at compile time via `include_str!`
//! - Parsed lazily on first access via `OnceLock`
//! - Immutable at runtime (not user-configurable)
//!
//! This is distinct from `config.rs` which handles user choices (API key, window size)
//! and `prefs.rs` which persists the theme preference.
//!
//! Data files are located in `embedded/`:
//! - `app.toml` - OpenWeather endpoints, card messages, forecast pager breakpoints
//! - `countries.json` - ISO 3166 country names and alpha-2 codes

use serde::Deserialize;
use std::sync::OnceLock;

// Embed data files at compile time
const APP_TOML: &str = include_str!("../embedded/app.toml");
const COUNTRIES_JSON: &str = include_str!("../embedded/countries.json");

/// Fixed application data
#[derive(Debug, Deserialize)]
pub struct AppData {
    pub api: ApiData,
    pub messages: MessagesData,
    pub forecast: ForecastData,
}

/// OpenWeather endpoint layout
#[derive(Debug, Deserialize)]
pub struct ApiData {
    pub default_base_url: String,
    pub current_path: String,
    pub forecast_path: String,
    pub units: String,
}

/// User-facing fixed sentences
#[derive(Debug, Deserialize)]
pub struct MessagesData {
    pub current_error: String,
    pub forecast_error: String,
    pub prompt: String,
    pub about: String,
}

/// Forecast pager layout
#[derive(Debug, Deserialize)]
pub struct ForecastData {
    pub default_visible: usize,
    pub breakpoints: Vec<Breakpoint>,
}

/// Minimum width at which `visible` slides are shown
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Breakpoint {
    pub min_width: f32,
    pub visible: usize,
}

/// Get application data (lazy-loaded)
pub fn app_data() -> &'static AppData {
    static DATA: OnceLock<AppData> = OnceLock::new();
    DATA.get_or_init(|| {
        toml::from_str(APP_TOML).unwrap_or_else(|e| {
            panic!("Failed to parse app.toml: {}", e);
        })
    })
}

/// Country entry (from embedded JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmbeddedCountry {
    pub name: String,
    pub code: String,
}

/// Raw embedded country list, in display order.
pub fn embedded_countries() -> &'static Vec<EmbeddedCountry> {
    static COUNTRIES: OnceLock<Vec<EmbeddedCountry>> = OnceLock::new();
    COUNTRIES.get_or_init(|| {
        serde_json::from_str(COUNTRIES_JSON).unwrap_or_else(|e| {
            panic!("Failed to parse countries.json: {}", e);
        })
    })
}
