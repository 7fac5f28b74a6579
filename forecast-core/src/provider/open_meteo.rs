use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    Config, ForecastError,
    model::{ForecastQuery, HOURLY_VARIABLES, HourlyForecast},
};

use super::ForecastProvider;

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    /// `base_url` is the API root, e.g. `https://api.open-meteo.com/v1`.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ForecastError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { base_url: base_url.into(), http: builder.build()? })
    }

    pub fn from_config(config: &Config) -> Result<Self, ForecastError> {
        Self::new(config.api_base_url.clone(), config.timeout())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    #[serde(default)]
    hourly: Option<HourlyForecast>,
    /// Set on `{"error": true, "reason": ...}` answers.
    #[serde(default)]
    reason: Option<String>,
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    #[instrument(
        skip(self),
        fields(lat = %query.coordinates.latitude, lon = %query.coordinates.longitude)
    )]
    async fn fetch_hourly(
        &self,
        query: &ForecastQuery,
    ) -> Result<Option<HourlyForecast>, ForecastError> {
        let url = self.forecast_url();
        debug!(url = %url, "Fetching hourly forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", query.coordinates.latitude.to_string()),
                ("longitude", query.coordinates.longitude.to_string()),
                ("hourly", HOURLY_VARIABLES.to_string()),
                ("timezone", query.timezone.to_string()),
                ("forecast_days", query.forecast_days.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            // a JSON answer without `hourly` is missing data, whatever the status
            return match serde_json::from_str::<Option<OmResponse>>(&body) {
                Ok(parsed) => {
                    let reason = parsed.as_ref().and_then(|r| r.reason.as_deref());
                    debug!(%status, reason, "Forecast service answered with an error");
                    Ok(parsed.and_then(|r| r.hourly))
                }
                Err(_) => Err(ForecastError::Status { status, body: truncate_body(&body) }),
            };
        }

        // a literal `null` body decodes to `None` as well
        let parsed: Option<OmResponse> = serde_json::from_str(&body)?;
        let hourly = parsed.and_then(|r| r.hourly);

        debug!(offsets = hourly.as_ref().map(HourlyForecast::len), "Decoded hourly forecast");

        Ok(hourly)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
