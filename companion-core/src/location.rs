//! Geolocation collaborator seam. The host runtime owns the actual
//! positioning capability; the core only consumes it through this trait.

use crate::model::Coordinates;
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

/// Options passed with every location request.
#[derive(Debug, Clone, Copy)]
pub struct LocateOptions {
    /// Give up if no position arrives within this window.
    pub timeout: Duration,
    /// A cached position no older than this is acceptable.
    pub max_age: Duration,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(15_000),
            max_age: Duration::from_millis(60_000),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location request timed out")]
    Timeout,
    #[error("location service unavailable")]
    Unavailable,
    #[error("location error: {0}")]
    Other(String),
}

#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    async fn locate(&self, options: &LocateOptions) -> Result<Coordinates, LocationError>;
}
