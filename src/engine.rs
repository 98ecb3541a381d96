use chrono::{DateTime, Utc};
use tracing::debug;

use crate::mood::{MoodCategory, MoodClassification};
use crate::signal::SignalBundle;

/// Maps a clamped (but unrounded) score to its category and base
/// confidence. Bands are contiguous, first match wins, and deliberately
/// asymmetric: the middle bands are wide to bias toward conservative
/// labels, the extremes are narrow.
pub fn categorize(score: f32) -> (MoodCategory, f32) {
    if score >= 80.0 {
        (MoodCategory::Happy, 0.8)
    } else if score >= 65.0 {
        (MoodCategory::Energetic, 0.7)
    } else if score >= 55.0 {
        (MoodCategory::Calm, 0.6)
    } else if score >= 45.0 {
        (MoodCategory::Neutral, 0.5)
    } else if score >= 35.0 {
        (MoodCategory::Sad, 0.7)
    } else if score >= 25.0 {
        (MoodCategory::Stressed, 0.8)
    } else {
        (MoodCategory::Overwhelmed, 0.9)
    }
}

/// Pure inference: additive scoring from a neutral base of 50, one term
/// group per present signal field. No I/O, no failure modes; any
/// well-typed bundle produces a classification.
pub fn classify(signals: SignalBundle, now: DateTime<Utc>) -> MoodClassification {
    let mut score = 50.0f32;

    if let Some(typing) = &signals.typing_pattern {
        score += typing.sentiment * 20.0;
        score += if typing.word_sentiment > 0.0 { 10.0 } else { -10.0 };
        // Heavy correction suggests stress, very slow typing tiredness.
        if typing.backspaces > 5 {
            score -= 15.0;
        }
        if typing.speed < 20.0 {
            score -= 10.0;
        }
    }

    if let Some(activity) = &signals.activity_pattern {
        if activity.tab_switches > 10 {
            score -= 15.0;
        }
        if activity.reading_time > 5 {
            score += 10.0;
        }
        if activity.time_on_social_media > 30 {
            score -= 10.0;
        }
    }

    if let Some(device) = &signals.device_usage {
        if device.late_night_usage {
            score -= 10.0;
        }
        score += (device.activity_level - 50.0) * 0.2;
    }

    if let Some(weather) = &signals.weather {
        score += weather.impact * 10.0;
    }

    if let Some(voice) = &signals.voice_tone {
        score += voice.energy * 15.0;
        score += voice.sentiment * 15.0;
    }

    let score = score.clamp(0.0, 100.0);
    let (category, base_confidence) = categorize(score);

    // Each extra independent signal type raises confidence by 0.1, capped
    // well below certainty.
    let signal_count = signals.signal_count();
    let confidence =
        (base_confidence + signal_count.saturating_sub(1) as f32 * 0.1).min(0.95);

    debug!(
        category = category.as_str(),
        score,
        confidence,
        signal_count,
        "classified mood"
    );

    MoodClassification {
        category,
        score: score.round() as u8,
        confidence,
        timestamp: now,
        signals,
    }
}
