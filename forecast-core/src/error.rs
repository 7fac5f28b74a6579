use thiserror::Error;

/// Failure while fetching or decoding a forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Failed to reach the forecast service: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status and a non-JSON body.
    #[error("Forecast request failed with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    /// The body was not JSON, or the hourly series had an unexpected shape.
    #[error("Failed to parse forecast JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
