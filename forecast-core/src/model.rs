use serde::{Deserialize, Serialize};

use crate::icon::WeatherIcon;

/// Geographic point a forecast is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const ROME: Coordinates = Coordinates { latitude: 41.9028, longitude: 12.4964 };
}

/// Hourly series requested from the forecast endpoint.
pub const HOURLY_VARIABLES: &str = "temperature_2m,precipitation_probability,weathercode";

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub coordinates: Coordinates,
    pub timezone: &'static str,
    pub forecast_days: u8,
}

impl ForecastQuery {
    pub const fn rome() -> Self {
        Self { coordinates: Coordinates::ROME, timezone: "Europe/Rome", forecast_days: 2 }
    }
}

/// Parallel hourly series, indexed by hour offset from the start of the forecast.
///
/// Open-Meteo emits `null` for values it cannot provide, hence the `Option`s.
/// Absent series decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyForecast {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<u8>>,
    pub weathercode: Vec<Option<i32>>,
}

impl HourlyForecast {
    /// Number of offsets present in every series.
    pub fn len(&self) -> usize {
        self.time
            .len()
            .min(self.temperature_2m.len())
            .min(self.precipitation_probability.len())
            .min(self.weathercode.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_aligned(&self) -> bool {
        let n = self.time.len();
        self.temperature_2m.len() == n
            && self.precipitation_probability.len() == n
            && self.weathercode.len() == n
    }
}

/// One rendered hour of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub hour: u32,
    pub icon: WeatherIcon,
    pub temperature_c: i32,
    pub precipitation_pct: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_is_shortest_series() {
        let hourly = HourlyForecast {
            time: vec!["2026-01-03T00:00".into(), "2026-01-03T01:00".into()],
            temperature_2m: vec![Some(1.0), Some(2.0)],
            precipitation_probability: vec![Some(0)],
            weathercode: vec![Some(0), Some(0)],
        };

        assert_eq!(hourly.len(), 1);
        assert!(!hourly.is_aligned());
        assert!(!hourly.is_empty());
    }

    #[test]
    fn absent_series_decode_empty() {
        let hourly: HourlyForecast = serde_json::from_str("{}").unwrap();
        assert!(hourly.is_empty());

        let hourly: HourlyForecast =
            serde_json::from_str(r#"{"time": ["2026-01-03T05:00"]}"#).unwrap();
        assert_eq!(hourly.time.len(), 1);
        assert!(hourly.is_empty());
        assert!(!hourly.is_aligned());
    }

    #[test]
    fn default_is_empty() {
        let hourly = HourlyForecast::default();
        assert!(hourly.is_empty());
        assert!(hourly.is_aligned());
    }
}
