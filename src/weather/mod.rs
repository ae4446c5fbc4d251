//! OpenWeather integration.
//!
//! This module provides:
//!
//! - `WeatherClient`: HTTP client for the current-weather and forecast endpoints
//! - `CurrentConditions` and `ForecastEntry`: flattened payloads the cards render
//! - `Condition`: icon lookup keyed by condition label
//! - `WeatherError`: typed failures, logged but never shown verbatim to the user

mod client;
mod condition;
mod error;
mod types;

pub use client::WeatherClient;
pub use condition::Condition;
pub use error::WeatherError;
pub use types::{CurrentConditions, ForecastEntry, SearchQuery};
