use crate::signal::{
    ActivityPattern, DeviceUsage, SignalBundle, TypingPattern, VoiceTone, WeatherCondition,
    WeatherSignal,
};

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "great",
    "awesome",
    "amazing",
    "wonderful",
    "excellent",
    "good",
    "nice",
    "love",
    "like",
    "enjoy",
    "fun",
    "excited",
    "joy",
    "pleasure",
    "delight",
    "fantastic",
    "brilliant",
    "perfect",
    "beautiful",
    "glad",
    "pleased",
    "grateful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "terrible",
    "awful",
    "hate",
    "angry",
    "frustrated",
    "stressed",
    "worried",
    "anxious",
    "depressed",
    "tired",
    "exhausted",
    "overwhelmed",
    "upset",
    "disappointed",
    "hurt",
    "pain",
    "suffering",
    "difficult",
    "hard",
    "struggle",
];

/// Word-list sentiment over free text. Tokens are matched by substring
/// containment, so "happiest" counts as positive and a single token can
/// count toward both lists.
pub fn analyze_typing(text: &str, backspaces: u32) -> TypingPattern {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut positive_hits = 0i32;
    let mut negative_hits = 0i32;
    for token in &tokens {
        if POSITIVE_WORDS.iter().any(|w| token.contains(w)) {
            positive_hits += 1;
        }
        if NEGATIVE_WORDS.iter().any(|w| token.contains(w)) {
            negative_hits += 1;
        }
    }

    let word_sentiment = if tokens.is_empty() {
        0.0
    } else {
        (positive_hits - negative_hits) as f32 / tokens.len() as f32
    };

    // Speed is approximated from token count, not measured.
    let speed = if tokens.is_empty() {
        50.0
    } else {
        (tokens.len() as f32 * 2.0).min(100.0)
    };

    TypingPattern {
        sentiment: word_sentiment.clamp(-1.0, 1.0),
        speed,
        backspaces,
        word_sentiment,
    }
}

/// Fixed condition → signed mood impact lookup.
pub fn weather_impact(condition: WeatherCondition) -> f32 {
    match condition {
        WeatherCondition::Rain => -0.2,
        WeatherCondition::Sunny => 0.3,
        WeatherCondition::Cloudy => -0.1,
        WeatherCondition::Snow => 0.1,
        WeatherCondition::Night => -0.1,
        WeatherCondition::Fog => -0.15,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    TabSwitch,
    SocialMedia,
    Reading,
}

/// Mutable collection state for one detection cycle. The calling layer
/// owns it, feeds it between inferences, and resets it afterwards; the
/// engine itself stays stateless.
#[derive(Debug, Clone, Default)]
pub struct SignalAccumulator {
    typed_text: String,
    backspaces: u32,
    tab_switches: u32,
    social_media_minutes: u32,
    reading_minutes: u32,
    device_usage: Option<DeviceUsage>,
    weather: Option<WeatherSignal>,
    voice_tone: Option<VoiceTone>,
}

impl SignalAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_typing(&mut self, text: &str, backspaces: u32) {
        self.typed_text.push_str(text);
        self.backspaces += backspaces;
    }

    pub fn track_activity(&mut self, kind: ActivityKind, amount: u32) {
        match kind {
            ActivityKind::TabSwitch => self.tab_switches += amount,
            ActivityKind::SocialMedia => self.social_media_minutes += amount,
            ActivityKind::Reading => self.reading_minutes += amount,
        }
    }

    pub fn note_device_usage(&mut self, late_night_usage: bool, activity_level: f32) {
        self.device_usage = Some(DeviceUsage {
            late_night_usage,
            activity_level,
        });
    }

    /// Records a weather signal, deriving its impact from the fixed table.
    pub fn set_weather(&mut self, condition: WeatherCondition) {
        self.weather = Some(WeatherSignal {
            condition,
            impact: weather_impact(condition),
        });
    }

    pub fn set_voice_tone(&mut self, energy: f32, sentiment: f32) {
        self.voice_tone = Some(VoiceTone { energy, sentiment });
    }

    /// Assembles the bundle for one inference. Typing and activity fields
    /// are only present when something was actually collected; absence
    /// means "no contribution", not "neutral contribution".
    pub fn bundle(&self) -> SignalBundle {
        let typing_pattern = if self.typed_text.is_empty() {
            None
        } else {
            Some(analyze_typing(&self.typed_text, self.backspaces))
        };

        let activity_pattern = if self.tab_switches > 0 {
            Some(ActivityPattern {
                tab_switches: self.tab_switches,
                time_on_social_media: self.social_media_minutes,
                reading_time: self.reading_minutes,
            })
        } else {
            None
        };

        SignalBundle {
            typing_pattern,
            activity_pattern,
            device_usage: self.device_usage.clone(),
            weather: self.weather.clone(),
            voice_tone: self.voice_tone.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
