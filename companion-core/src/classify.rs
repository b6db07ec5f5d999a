//! Clothing classifier: four pure functions mapping temperature (°F) and a
//! condition label onto the watch's clothing codes.
//!
//! Condition labels are lower-cased before every comparison; labels outside
//! the known vocabulary fall through to each function's default branch, so
//! classification never fails.

use crate::model::{Chest, Head, Legs, Recommendation, Umbrella};

pub fn head_for(temperature_f: i32, condition: &str) -> Head {
    let weather = condition.to_lowercase();
    if temperature_f <= 42 || weather == "snow" || weather == "rain" {
        Head::Hat
    } else {
        Head::None
    }
}

pub fn chest_for(temperature_f: i32, condition: &str) -> Chest {
    let weather = condition.to_lowercase();
    if weather == "snow" || temperature_f <= 42 {
        Chest::Coat
    } else if weather == "rain" {
        Chest::RainJacket
    } else if temperature_f <= 50 {
        Chest::Sweater
    } else if temperature_f <= 60 {
        Chest::LongSleeve
    } else {
        Chest::ShortSleeve
    }
}

pub fn legs_for(temperature_f: i32, condition: &str) -> Legs {
    let weather = condition.to_lowercase();
    if temperature_f >= 60 && weather != "snow" && weather != "rain" {
        Legs::PantsShoes
    } else if weather == "snow" || weather == "rain" {
        Legs::PantsBoots
    } else {
        Legs::ShortsShoes
    }
}

/// Rain is the one condition worth carrying an umbrella for.
pub fn umbrella_for(condition: &str) -> Umbrella {
    let weather = condition.to_lowercase();
    if weather == "rain" {
        Umbrella::Umbrella
    } else {
        Umbrella::None
    }
}

/// Run all four classifiers against one observation.
pub fn recommend(temperature_f: i32, condition: &str) -> Recommendation {
    Recommendation {
        head: head_for(temperature_f, condition),
        chest: chest_for(temperature_f, condition),
        legs: legs_for(temperature_f, condition),
        umbrella: umbrella_for(condition),
    }
}
