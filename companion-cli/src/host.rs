//! Desktop stand-ins for the wearable host's collaborator capabilities.

use async_trait::async_trait;
use companion_core::{
    AppMessenger, Coordinates, DeliveryError, LocateOptions, LocationError, LocationSource,
    OutboundMessage,
};

/// Location source that always reports the same position.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    coordinates: Coordinates,
}

impl FixedLocation {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl LocationSource for FixedLocation {
    async fn locate(&self, _options: &LocateOptions) -> Result<Coordinates, LocationError> {
        Ok(self.coordinates)
    }
}

/// Prints the outbound dictionary as JSON in place of a watch transport.
#[derive(Debug)]
pub struct StdoutMessenger;

#[async_trait]
impl AppMessenger for StdoutMessenger {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        let json = serde_json::to_string_pretty(message)
            .map_err(|e| DeliveryError::Rejected(e.to_string()))?;
        println!("{json}");
        Ok(())
    }
}
