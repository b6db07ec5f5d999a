use crate::model::{Coordinates, WeatherReading};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to reach the weather service: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse weather response: {0}")]
    Parse(String),
}

/// Source of current weather observations for a position.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, coordinates: &Coordinates) -> Result<WeatherReading, ProviderError>;
}
