//! Current conditions and forecast commands

use anyhow::{Context, Result};

use crate::cli::output::{print_formatted, OutputFormat};
use crate::config::Config;
use crate::util::{
    format_humidity, format_temperature, format_wind, local_clock_time, local_slot,
};
use crate::weather::{CurrentConditions, ForecastEntry, SearchQuery, WeatherClient};

fn client() -> Result<WeatherClient> {
    let config = Config::load()?;
    WeatherClient::from_config(&config.api).context("Failed to create weather client")
}

fn query(city: &str, country: &str) -> Result<SearchQuery> {
    let city = city.trim();
    let country = country.trim();
    if city.is_empty() || country.is_empty() {
        anyhow::bail!("City and country code must not be blank");
    }
    Ok(SearchQuery::new(city, country))
}

pub async fn current(city: &str, country: &str, format: OutputFormat) -> Result<()> {
    let query = query(city, country)?;
    let conditions = client()?
        .current(&query)
        .await
        .with_context(|| format!("Failed to fetch current weather for {}", query))?;

    print_formatted(&conditions, format, format_current);
    Ok(())
}

pub async fn forecast(
    city: &str,
    country: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let query = query(city, country)?;
    let mut entries = client()?
        .forecast(&query)
        .await
        .with_context(|| format!("Failed to fetch forecast for {}", query))?;

    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    print_formatted(entries.as_slice(), format, format_forecast);
    Ok(())
}

fn format_current(c: &CurrentConditions) -> String {
    [
        c.heading(),
        format!("{} - {}", c.label, c.description),
        format!(
            "Temperature: {} (feels like {})",
            format_temperature(c.temperature),
            format_temperature(c.feels_like)
        ),
        format!("Wind:        {}", format_wind(c.wind_speed)),
        format!("Humidity:    {}", format_humidity(c.humidity)),
        format!("Sunrise:     {}", local_clock_time(c.sunrise)),
        format!("Sunset:      {}", local_clock_time(c.sunset)),
    ]
    .join("\n")
}

fn format_forecast(entries: &[ForecastEntry]) -> String {
    if entries.is_empty() {
        return "No forecast entries.".to_string();
    }

    entries
        .iter()
        .map(|e| {
            let (weekday, time) = local_slot(e.timestamp);
            format!(
                "{} {}  {:>9}  {}",
                weekday,
                time,
                format_temperature(e.temperature),
                e.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_trims_and_rejects_blank() {
        assert_eq!(
            query(" London ", " GB").unwrap(),
            SearchQuery::new("London", "GB")
        );
        assert!(query("   ", "GB").is_err());
        assert!(query("London", "").is_err());
    }

    #[test]
    fn test_format_current() {
        let c = CurrentConditions {
            location: "London".to_string(),
            country: "GB".to_string(),
            label: "Rain".to_string(),
            description: "light rain".to_string(),
            temperature: 9.87,
            feels_like: 7.5,
            wind_speed: 4.1,
            humidity: 81,
            sunrise: 1_700_000_000,
            sunset: 1_700_030_000,
        };
        let text = format_current(&c);
        assert!(text.starts_with("London, GB\nRain - light rain\n"));
        assert!(text.contains("9.87°C (feels like 7.5°C)"));
        assert!(text.contains("4.1 m/s"));
        assert!(text.contains("81%"));
    }

    #[test]
    fn test_format_forecast_empty() {
        assert_eq!(format_forecast(&[]), "No forecast entries.");
    }

    #[test]
    fn test_format_forecast_one_line_per_entry() {
        let entries: Vec<_> = (0..3)
            .map(|i| ForecastEntry {
                timestamp: 1_700_000_000 + i * 10_800,
                temperature: 10.0,
                label: "Clear".to_string(),
                description: "clear sky".to_string(),
            })
            .collect();
        let text = format_forecast(&entries);
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.ends_with("clear sky")));
    }
}
