//! OpenWeather HTTP client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::app_data::app_data;
use crate::config::ApiConfig;

use super::error::WeatherError;
use super::types::{
    CurrentConditions, ForecastEntry, OwCurrentResponse, OwForecastResponse, SearchQuery,
};

/// User agent for API requests
const USER_AGENT: &str = concat!("Breezy/", env!("CARGO_PKG_VERSION"));

/// Maximum length of an error body kept for logs
const MAX_ERROR_BODY: usize = 200;

/// OpenWeather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WeatherClient {
    /// Create a client for `base_url` (no trailing slash required)
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(api: &ApiConfig) -> Result<Self, WeatherError> {
        Self::new(
            &api.base_url,
            &api.api_key(),
            Duration::from_secs(api.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch current conditions for a location
    #[instrument(skip_all, fields(query = %query), level = "debug")]
    pub async fn current(&self, query: &SearchQuery) -> Result<CurrentConditions, WeatherError> {
        let raw: OwCurrentResponse = self.get_json(&app_data().api.current_path, query).await?;
        Ok(raw.into())
    }

    /// Fetch the five-day / three-hour forecast for a location
    #[instrument(skip_all, fields(query = %query), level = "debug")]
    pub async fn forecast(&self, query: &SearchQuery) -> Result<Vec<ForecastEntry>, WeatherError> {
        let raw: OwForecastResponse = self.get_json(&app_data().api.forecast_path, query).await?;
        Ok(raw.into_entries())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &SearchQuery,
    ) -> Result<T, WeatherError> {
        let start = std::time::Instant::now();
        let url = format!("{}{}", self.base_url, path);
        let location = query.location_param();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", app_data().api.units.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("{} for {} returned {}", path, location, status);
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed = serde_json::from_str(&body)?;
        tracing::debug!(
            "Fetched {} for {} in {:.2}s",
            path,
            location,
            start.elapsed().as_secs_f32()
        );
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WeatherClient {
        WeatherClient::new(&server.uri(), "test_key", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_current_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London,GB"))
            .and(query_param("appid", "test_key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "London",
                "sys": {"country": "GB", "sunrise": 1700000000, "sunset": 1700030000},
                "weather": [{"main": "Clouds", "description": "broken clouds"}],
                "main": {"temp": 12.34, "feels_like": 11.2, "humidity": 71},
                "wind": {"speed": 5.1}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let current = client
            .current(&SearchQuery::new("London", "GB"))
            .await
            .unwrap();

        assert_eq!(current.heading(), "London, GB");
        assert_eq!(current.temperature, 12.34);
        assert_eq!(current.wind_speed, 5.1);
        assert_eq!(current.label, "Clouds");
    }

    #[tokio::test]
    async fn test_current_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "cod": "404",
                "message": "city not found"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.current(&SearchQuery::new("Zzzzz", "XX")).await;

        let err = result.unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, WeatherError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_current_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.current(&SearchQuery::new("London", "GB")).await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[tokio::test]
    async fn test_forecast_success() {
        let mock_server = MockServer::start().await;

        let list: Vec<_> = (0..40)
            .map(|i| {
                serde_json::json!({
                    "dt": 1700000000 + i * 10800,
                    "main": {"temp": i as f64 / 2.0},
                    "weather": [{"main": "Rain", "description": "light rain"}]
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .and(query_param("q", "Paris,FR"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": list })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let entries = client
            .forecast(&SearchQuery::new("Paris", "FR"))
            .await
            .unwrap();

        assert_eq!(entries.len(), 40);
        assert!(entries.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(entries[3].temperature, 1.5);
    }

    #[tokio::test]
    async fn test_unauthorized_without_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .and(query_param("appid", ""))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = WeatherClient::new(&mock_server.uri(), "", Duration::from_secs(5)).unwrap();
        let result = client.forecast(&SearchQuery::new("Paris", "FR")).await;

        assert_eq!(result.unwrap_err().status(), Some(401));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client =
            WeatherClient::new("http://localhost:1234/", "k", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        let long = "é".repeat(150);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_ERROR_BODY + 3);
    }
}
