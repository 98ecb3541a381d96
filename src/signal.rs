use serde::{Deserialize, Serialize};

/// Weather condition buckets the engine knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Rain,
    Sunny,
    Cloudy,
    Snow,
    Night,
    Fog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingPattern {
    /// Overall sentiment, -1.0 (negative) to 1.0 (positive).
    pub sentiment: f32,
    /// Approximated words-per-minute, 0-100.
    pub speed: f32,
    pub backspaces: u32,
    /// Raw word-list sentiment before clamping, -1.0 to 1.0.
    pub word_sentiment: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPattern {
    pub tab_switches: u32,
    /// Minutes spent on social media since the last detection.
    pub time_on_social_media: u32,
    /// Minutes spent reading since the last detection.
    pub reading_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUsage {
    pub late_night_usage: bool,
    /// 0-100, 50 is baseline.
    pub activity_level: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSignal {
    pub condition: WeatherCondition,
    /// Signed mood impact for the condition, -1.0 to 1.0.
    pub impact: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceTone {
    pub energy: f32,
    pub sentiment: f32,
}

/// One bundle of independently-sourced readings for a single inference
/// call. Every field is optional: an absent field contributes nothing,
/// while a present field always applies its formula, even with neutral
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typing_pattern: Option<TypingPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_pattern: Option<ActivityPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_usage: Option<DeviceUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<VoiceTone>,
}

impl SignalBundle {
    /// Number of present signal fields, 0-5. Feeds the confidence bonus.
    pub fn signal_count(&self) -> usize {
        [
            self.typing_pattern.is_some(),
            self.activity_pattern.is_some(),
            self.device_usage.is_some(),
            self.weather.is_some(),
            self.voice_tone.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.signal_count() == 0
    }
}
