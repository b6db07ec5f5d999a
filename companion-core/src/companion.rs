//! Orchestrator: runs one locate → fetch → classify → deliver cycle per
//! host event. Cycles are independent; nothing is cached or retried, and a
//! failed cycle never affects the next one.

use crate::classify;
use crate::location::{LocateOptions, LocationError, LocationSource};
use crate::messenger::{AppMessenger, DeliveryError};
use crate::model::OutboundMessage;
use crate::provider::{ProviderError, WeatherProvider};

#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("location request failed: {0}")]
    Location(#[from] LocationError),

    #[error("weather fetch failed: {0}")]
    Weather(#[from] ProviderError),

    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

#[derive(Debug)]
pub struct Companion {
    location: Box<dyn LocationSource>,
    provider: Box<dyn WeatherProvider>,
    messenger: Box<dyn AppMessenger>,
    locate_options: LocateOptions,
}

impl Companion {
    pub fn new(
        location: Box<dyn LocationSource>,
        provider: Box<dyn WeatherProvider>,
        messenger: Box<dyn AppMessenger>,
    ) -> Self {
        Self {
            location,
            provider,
            messenger,
            locate_options: LocateOptions::default(),
        }
    }

    /// Host event: the watch app has started.
    pub async fn on_ready(&self) {
        tracing::info!("companion ready");
        self.run_logged().await;
    }

    /// Host event: the watch sent a message (e.g. a manual refresh).
    pub async fn on_app_message(&self) {
        tracing::info!("app message received");
        self.run_logged().await;
    }

    async fn run_logged(&self) {
        if let Err(err) = self.run_cycle().await {
            tracing::warn!("cycle ended early: {err}");
        }
    }

    /// One full cycle. Steps run strictly in order; every failure is
    /// terminal for this cycle only, and nothing reaches the watch on a
    /// location or fetch failure.
    pub async fn run_cycle(&self) -> Result<(), CycleError> {
        let coordinates = self.location.locate(&self.locate_options).await?;
        tracing::debug!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "position acquired"
        );

        let reading = self.provider.current(&coordinates).await?;
        let temperature = reading.temperature_f();
        tracing::info!(temperature, condition = %reading.condition, "current weather");

        let recommendation = classify::recommend(temperature, &reading.condition);
        let message = OutboundMessage::new(temperature, &reading.condition, recommendation);

        self.messenger.send(&message).await?;
        tracing::info!("recommendation sent to the watch");

        Ok(())
    }
}
