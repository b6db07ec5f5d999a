use serde::{Deserialize, Serialize};

/// Position reported by the host's geolocation capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Normalized weather observation: the provider's temperature (Kelvin) and
/// its primary condition label, verbatim (e.g. "Rain", "Snow", "Clear").
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_k: f64,
    pub condition: String,
}

impl WeatherReading {
    /// Temperature in Fahrenheit, rounded to the nearest degree.
    pub fn temperature_f(&self) -> i32 {
        ((self.temperature_k - 273.15) * 1.8 + 32.0).round() as i32
    }
}

/// Headwear codes as the watch app expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Head {
    Hat = 1,
    None = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Chest {
    Coat = 1,
    RainJacket = 2,
    Sweater = 3,
    LongSleeve = 4,
    ShortSleeve = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Legs {
    PantsShoes = 1,
    PantsBoots = 2,
    ShortsShoes = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Umbrella {
    Umbrella = 1,
    None = 2,
}

impl Head {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Chest {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Legs {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Umbrella {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The four-field clothing suggestion, computed fresh every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub head: Head,
    pub chest: Chest,
    pub legs: Legs,
    pub umbrella: Umbrella,
}

/// Dictionary handed to the device messenger. The field names are the exact
/// keys the watch app reads; changing them breaks device-side decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    #[serde(rename = "KEY_TEMPERATURE")]
    pub temperature: i32,
    #[serde(rename = "KEY_CONDITIONS")]
    pub conditions: String,
    #[serde(rename = "KEY_HEAD")]
    pub head: u8,
    #[serde(rename = "KEY_CHEST")]
    pub chest: u8,
    #[serde(rename = "KEY_LEGS")]
    pub legs: u8,
    #[serde(rename = "KEY_UMBRELLA")]
    pub umbrella: u8,
}

impl OutboundMessage {
    /// Assemble the device dictionary; the condition label is upper-cased
    /// for display on the watch.
    pub fn new(temperature: i32, condition: &str, recommendation: Recommendation) -> Self {
        Self {
            temperature,
            conditions: condition.to_uppercase(),
            head: recommendation.head.code(),
            chest: recommendation.chest.code(),
            legs: recommendation.legs.code(),
            umbrella: recommendation.umbrella.code(),
        }
    }
}
