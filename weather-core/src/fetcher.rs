use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::WeatherResult;

pub mod weatherapi;

pub use weatherapi::WeatherApiFetcher;

/// Why a fetch failed. The widget shows one message for all of these;
/// the variants exist for logs and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No WeatherAPI key configured")]
    MissingApiKey,

    #[error("Request to WeatherAPI failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("WeatherAPI request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse WeatherAPI response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    /// Current conditions for `location`, passed through as typed.
    async fn fetch_weather(&self, location: &str) -> Result<WeatherResult, FetchError>;
}
