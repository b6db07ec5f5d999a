//! Device messaging collaborator seam. The host runtime owns the transport
//! to the paired watch; the core hands it one dictionary per cycle.

use crate::model::OutboundMessage;
use async_trait::async_trait;
use std::fmt::Debug;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("device rejected the message: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait AppMessenger: Send + Sync + Debug {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DeliveryError>;
}
