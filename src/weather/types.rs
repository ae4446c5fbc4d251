//! Weather payloads: wire structs from OpenWeather and the flattened values
//! the cards render.

use serde::{Deserialize, Serialize};

use super::condition::Condition;

/// A committed (city, country) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub city: String,
    pub country_code: String,
}

impl SearchQuery {
    pub fn new(city: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country_code: country_code.into(),
        }
    }

    /// Value of the `q` query parameter, e.g. "London,GB"
    pub fn location_param(&self) -> String {
        format!("{},{}", self.city, self.country_code)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country_code)
    }
}

/// Current conditions for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub location: String,
    pub country: String,
    /// Primary condition label, e.g. "Rain"
    pub label: String,
    pub description: String,
    /// Degrees Celsius
    pub temperature: f64,
    pub feels_like: f64,
    /// Metres per second
    pub wind_speed: f64,
    pub humidity: u8,
    /// Unix seconds
    pub sunrise: i64,
    pub sunset: i64,
}

impl CurrentConditions {
    pub fn condition(&self) -> Condition {
        Condition::from_label(&self.label)
    }

    /// Heading text, e.g. "London, GB"
    pub fn heading(&self) -> String {
        format!("{}, {}", self.location, self.country)
    }
}

/// One three-hour forecast step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
    /// Unix seconds
    pub timestamp: i64,
    pub temperature: f64,
    pub label: String,
    pub description: String,
}

impl ForecastEntry {
    pub fn condition(&self) -> Condition {
        Condition::from_label(&self.label)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwSummary {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwSys {
    #[serde(default)]
    country: String,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwCurrentMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    #[serde(default)]
    weather: Vec<OwSummary>,
    main: OwCurrentMain,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastItem {
    dt: i64,
    main: OwForecastMain,
    #[serde(default)]
    weather: Vec<OwSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastResponse {
    list: Vec<OwForecastItem>,
}

fn first_summary(weather: Vec<OwSummary>) -> OwSummary {
    weather.into_iter().next().unwrap_or_default()
}

impl From<OwCurrentResponse> for CurrentConditions {
    fn from(raw: OwCurrentResponse) -> Self {
        let summary = first_summary(raw.weather);
        Self {
            location: raw.name,
            country: raw.sys.country,
            label: summary.main,
            description: summary.description,
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like,
            wind_speed: raw.wind.speed,
            humidity: raw.main.humidity,
            sunrise: raw.sys.sunrise,
            sunset: raw.sys.sunset,
        }
    }
}

impl From<OwForecastItem> for ForecastEntry {
    fn from(raw: OwForecastItem) -> Self {
        let summary = first_summary(raw.weather);
        Self {
            timestamp: raw.dt,
            temperature: raw.main.temp,
            label: summary.main,
            description: summary.description,
        }
    }
}

impl OwForecastResponse {
    /// Entries in response order (chronological)
    pub(crate) fn into_entries(self) -> Vec<ForecastEntry> {
        self.list.into_iter().map(ForecastEntry::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_param() {
        let query = SearchQuery::new("London", "GB");
        assert_eq!(query.location_param(), "London,GB");
        assert_eq!(query.to_string(), "London, GB");
    }

    #[test]
    fn test_current_from_wire() {
        let raw: OwCurrentResponse = serde_json::from_value(serde_json::json!({
            "name": "London",
            "sys": {"country": "GB", "sunrise": 1700000000, "sunset": 1700030000},
            "weather": [{"main": "Rain", "description": "light rain"}],
            "main": {"temp": 11.37, "feels_like": 10.5, "humidity": 87},
            "wind": {"speed": 4.12}
        }))
        .unwrap();

        let current = CurrentConditions::from(raw);
        assert_eq!(current.heading(), "London, GB");
        assert_eq!(current.label, "Rain");
        assert_eq!(current.description, "light rain");
        assert_eq!(current.temperature, 11.37);
        assert_eq!(current.humidity, 87);
        assert_eq!(current.sunrise, 1700000000);
        assert_eq!(current.condition(), Condition::Rain);
    }

    #[test]
    fn test_current_without_weather_summary() {
        let raw: OwCurrentResponse = serde_json::from_value(serde_json::json!({
            "name": "Nowhere",
            "sys": {"country": "XX"},
            "weather": [],
            "main": {"temp": 0.0, "feels_like": -2.0, "humidity": 50},
            "wind": {"speed": 0.0}
        }))
        .unwrap();

        let current = CurrentConditions::from(raw);
        assert_eq!(current.label, "");
        assert_eq!(current.condition(), Condition::Clear);
    }

    #[test]
    fn test_forecast_entries_keep_order() {
        let raw: OwForecastResponse = serde_json::from_value(serde_json::json!({
            "list": [
                {"dt": 100, "main": {"temp": 1.0}, "weather": [{"main": "Snow", "description": "snow"}]},
                {"dt": 200, "main": {"temp": 2.5}, "weather": [{"main": "Mist", "description": "mist"}]}
            ]
        }))
        .unwrap();

        let entries = raw.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, 100);
        assert_eq!(entries[1].temperature, 2.5);
        assert_eq!(entries[1].condition(), Condition::Fog);
    }
}
