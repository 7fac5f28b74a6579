//! Selection of the daytime hours shown on the timeline.

use chrono::{DateTime, NaiveDateTime, Timelike};
use tracing::{debug, warn};

use crate::{icon::WeatherIcon, model::DisplayItem, model::HourlyForecast};

/// Offsets visited from the start of the series, roughly the first day.
pub const FIRST_DAY_OFFSETS: usize = 24;

/// First clock hour shown, inclusive.
pub const DAYTIME_START: u32 = 5;

/// Last clock hour shown, inclusive.
pub const DAYTIME_END: u32 = 20;

pub fn is_daytime(hour: u32) -> bool {
    (DAYTIME_START..=DAYTIME_END).contains(&hour)
}

/// Extract the local clock hour from an Open-Meteo timestamp.
///
/// Accepts `2026-01-03T05:00`, the same with seconds, and RFC 3339. Offsets in
/// RFC 3339 input are kept as given rather than converted.
pub fn clock_hour(timestamp: &str) -> Option<u32> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M") {
        return Some(dt.hour());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.hour());
    }

    DateTime::parse_from_rfc3339(timestamp).ok().map(|dt| dt.hour())
}

/// Round half away from zero. `-0.4` becomes `0`, never `-0`.
pub fn round_temperature(celsius: f64) -> i32 {
    celsius.round() as i32
}

/// Build the display items for the daytime hours among the first
/// [`FIRST_DAY_OFFSETS`] offsets, in source order.
///
/// Offsets past the shortest series are not visited.
pub fn daytime_items(hourly: &HourlyForecast) -> Vec<DisplayItem> {
    if !hourly.is_aligned() {
        warn!(
            time = hourly.time.len(),
            temperature = hourly.temperature_2m.len(),
            precipitation = hourly.precipitation_probability.len(),
            weathercode = hourly.weathercode.len(),
            "Hourly series have different lengths; using the shortest"
        );
    }

    let end = FIRST_DAY_OFFSETS.min(hourly.len());
    let mut items = Vec::new();

    for i in 0..end {
        let Some(hour) = clock_hour(&hourly.time[i]) else {
            debug!(offset = i, time = %hourly.time[i], "Skipping unparseable timestamp");
            continue;
        };

        if !is_daytime(hour) {
            continue;
        }

        let (Some(temperature), Some(precipitation), Some(code)) = (
            hourly.temperature_2m[i],
            hourly.precipitation_probability[i],
            hourly.weathercode[i],
        ) else {
            debug!(offset = i, hour, "Skipping hour with missing values");
            continue;
        };

        items.push(DisplayItem {
            hour,
            icon: WeatherIcon::from_wmo_code(code),
            temperature_c: round_temperature(temperature),
            precipitation_pct: precipitation,
        });
    }

    items
}
