use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config, ForecastError,
    model::{ForecastQuery, HourlyForecast},
    provider::open_meteo::OpenMeteoProvider,
};

pub mod open_meteo;

/// Source of hourly forecasts.
///
/// `Ok(None)` means the service answered but carried no hourly series.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_hourly(
        &self,
        query: &ForecastQuery,
    ) -> Result<Option<HourlyForecast>, ForecastError>;
}

/// Construct the Open-Meteo provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn ForecastProvider>, ForecastError> {
    Ok(Box::new(OpenMeteoProvider::from_config(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_default_config() {
        let provider = provider_from_config(&Config::default());
        assert!(provider.is_ok());
    }
}
