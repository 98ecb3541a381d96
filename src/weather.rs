//! Pure weather transforms. Fetching provider data is the host's job;
//! this module only maps already-fetched shapes onto the engine's
//! condition buckets and supplies a clock-based fallback when no
//! provider data exists.

use serde::{Deserialize, Serialize};

use crate::signal::WeatherCondition;

/// Shape handed over by the host's weather collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub condition: WeatherCondition,
    pub temperature: i32,
    pub description: String,
    pub location: String,
}

/// Rough night window used for condition bucketing.
pub fn is_night(hour: u32) -> bool {
    hour >= 20 || hour < 6
}

/// Late-night window for the device-usage flag.
pub fn is_late_night(hour: u32) -> bool {
    hour >= 22 || hour < 6
}

/// Maps a provider's main-condition string onto our buckets. Night
/// overrides everything; unrecognized conditions land on cloudy.
pub fn map_provider_condition(main: &str, hour: u32) -> WeatherCondition {
    if is_night(hour) {
        return WeatherCondition::Night;
    }
    match main.to_lowercase().as_str() {
        "rain" | "drizzle" => WeatherCondition::Rain,
        "clear" => WeatherCondition::Sunny,
        "clouds" => WeatherCondition::Cloudy,
        "snow" => WeatherCondition::Snow,
        "mist" | "fog" | "haze" => WeatherCondition::Fog,
        _ => WeatherCondition::Cloudy,
    }
}

/// Fallback reading when the provider is unavailable or unconfigured.
pub fn default_reading(hour: u32) -> WeatherReading {
    let night = is_night(hour);
    WeatherReading {
        condition: if night {
            WeatherCondition::Night
        } else {
            WeatherCondition::Sunny
        },
        temperature: 22,
        description: if night { "Clear night" } else { "Clear sky" }.to_string(),
        location: "Unknown".to_string(),
    }
}
