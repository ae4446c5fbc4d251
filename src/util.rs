//! Display formatting for weather values

use chrono::{DateTime, Local, TimeZone, Utc};

/// Placeholder for timestamps that cannot be represented
const INVALID_TIME: &str = "--";

/// Temperature with unit, number printed as received (e.g. "12.34°C")
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", celsius)
}

/// Wind speed with unit (metric responses report metres per second)
pub fn format_wind(speed: f64) -> String {
    format!("{} m/s", speed)
}

pub fn format_humidity(percent: u8) -> String {
    format!("{}%", percent)
}

/// Unix seconds as a local `DateTime`
pub fn to_local(timestamp: i64) -> Option<DateTime<Local>> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).map(|dt| dt.with_timezone(&Local))
}

/// Clock time with seconds, e.g. "06:42:17"
pub fn clock_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M:%S").to_string()
}

/// Hour and minute, e.g. "15:00"
pub fn hour_minute<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// Short weekday, e.g. "Tue"
pub fn short_weekday<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%a").to_string()
}

/// Local clock time for a unix timestamp (sunrise/sunset)
pub fn local_clock_time(timestamp: i64) -> String {
    to_local(timestamp)
        .map(|dt| clock_time(&dt))
        .unwrap_or_else(|| INVALID_TIME.to_string())
}

/// Local weekday and hour:minute for a forecast slot
pub fn local_slot(timestamp: i64) -> (String, String) {
    match to_local(timestamp) {
        Some(dt) => (short_weekday(&dt), hour_minute(&dt)),
        None => (INVALID_TIME.to_string(), INVALID_TIME.to_string()),
    }
}
