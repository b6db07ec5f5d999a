//! Core library for the wearable clothing-recommendation companion.
//!
//! This crate defines:
//! - The clothing classifier (temperature + condition → clothing codes)
//! - The weather provider abstraction and its OpenWeather implementation
//! - Collaborator traits for the host's geolocation and device messaging
//! - The orchestrator that runs one event cycle end to end
//!
//! It is used by `companion-cli`, but can be embedded in any host runtime
//! that implements the collaborator traits.

pub mod classify;
pub mod companion;
pub mod config;
pub mod location;
pub mod messenger;
pub mod model;
pub mod provider;

pub use companion::{Companion, CycleError};
pub use config::Config;
pub use location::{LocateOptions, LocationError, LocationSource};
pub use messenger::{AppMessenger, DeliveryError};
pub use model::{Coordinates, OutboundMessage, Recommendation, WeatherReading};
pub use provider::{ProviderError, WeatherProvider};
