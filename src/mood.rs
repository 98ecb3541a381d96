use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signal::SignalBundle;

/// Closed set of emotional-state labels the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Energetic,
    Sad,
    Stressed,
    Calm,
    Overwhelmed,
    Neutral,
}

impl MoodCategory {
    /// Catalog declaration order. Cross-mood lookups iterate in this
    /// order so secondary picks stay stable.
    pub const ALL: [MoodCategory; 7] = [
        MoodCategory::Happy,
        MoodCategory::Energetic,
        MoodCategory::Sad,
        MoodCategory::Stressed,
        MoodCategory::Calm,
        MoodCategory::Overwhelmed,
        MoodCategory::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "happy",
            MoodCategory::Energetic => "energetic",
            MoodCategory::Sad => "sad",
            MoodCategory::Stressed => "stressed",
            MoodCategory::Calm => "calm",
            MoodCategory::Overwhelmed => "overwhelmed",
            MoodCategory::Neutral => "neutral",
        }
    }
}

/// Output of one inference call. Immutable once created; the caller owns
/// any history it gets appended to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodClassification {
    pub category: MoodCategory,
    /// Rounded overall score, 0-100.
    pub score: u8,
    /// 0.0-0.95. A coverage measure, not a probability: it grows with
    /// the number of independent signal types that contributed.
    pub confidence: f32,
    pub timestamp: DateTime<Utc>,
    /// The input bundle echoed back for auditability.
    pub signals: SignalBundle,
}
