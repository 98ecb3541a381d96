//! Static recommendation catalog: an immutable mood → items map and one
//! micro-habit per mood, both built once at first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::mood::MoodCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Music,
    Video,
    Activity,
    Movie,
    Meditation,
    Wallpaper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Youtube,
    Spotify,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    /// Catalog-unique, stable across releases.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    pub description: String,
    /// Moods this item is relevant to; the first is the authored mood,
    /// the rest cross-list it into other moods' pools.
    pub mood_target: Vec<MoodCategory>,
    /// Seconds, for timed activities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ContentSource>,
}

fn item(
    id: &str,
    kind: ContentKind,
    title: &str,
    description: &str,
    mood_target: &[MoodCategory],
) -> RecommendationItem {
    RecommendationItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        mood_target: mood_target.to_vec(),
        duration: None,
        url: None,
        thumbnail: None,
        preview_url: None,
        source: None,
    }
}

fn habit(
    id: &str,
    title: &str,
    description: &str,
    mood: MoodCategory,
    duration: Option<u32>,
) -> RecommendationItem {
    RecommendationItem {
        duration,
        ..item(id, ContentKind::Activity, title, description, &[mood])
    }
}

use ContentKind::{Activity, Meditation, Music, Video};
use MoodCategory::{Calm, Energetic, Happy, Neutral, Overwhelmed, Sad, Stressed};

static CATALOG: Lazy<HashMap<MoodCategory, Vec<RecommendationItem>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        Happy,
        vec![
            item(
                "happy-1",
                Music,
                "Upbeat Pop Mix",
                "Keep the good vibes going with energetic pop hits",
                &[Happy, Energetic],
            ),
            item(
                "happy-2",
                Video,
                "Funny Compilation",
                "Laugh out loud with hilarious moments",
                &[Happy],
            ),
            item(
                "happy-3",
                Activity,
                "Creative Challenge",
                "Channel your positive energy into something creative",
                &[Happy, Energetic],
            ),
        ],
    );
    map.insert(
        Energetic,
        vec![
            item(
                "energetic-1",
                Music,
                "Workout Playlist",
                "High-energy tracks to fuel your productivity",
                &[Energetic, Happy],
            ),
            item(
                "energetic-2",
                Activity,
                "Productivity Burst",
                "Tackle that task you've been putting off",
                &[Energetic],
            ),
            item(
                "energetic-3",
                Video,
                "Motivational Shorts",
                "Get inspired and stay motivated",
                &[Energetic],
            ),
        ],
    );
    map.insert(
        Sad,
        vec![
            item(
                "sad-1",
                Music,
                "Comforting Melodies",
                "Gentle, soothing sounds to help you feel better",
                &[Sad, Calm],
            ),
            item(
                "sad-2",
                Activity,
                "Gratitude Journal",
                "Write down three things you're grateful for",
                &[Sad],
            ),
            item(
                "sad-3",
                Meditation,
                "5-Minute Breathing",
                "A quick breathing exercise to center yourself",
                &[Sad, Stressed],
            ),
            item(
                "sad-4",
                Video,
                "Uplifting Stories",
                "Heartwarming content to lift your spirits",
                &[Sad],
            ),
        ],
    );
    map.insert(
        Stressed,
        vec![
            item(
                "stressed-1",
                Meditation,
                "Stress Relief Meditation",
                "A guided session to help you unwind",
                &[Stressed, Overwhelmed],
            ),
            item(
                "stressed-2",
                Activity,
                "2-Minute Breathing",
                "Quick breathing exercise to reduce stress",
                &[Stressed],
            ),
            item(
                "stressed-3",
                Music,
                "Calming Ambient Sounds",
                "Peaceful sounds to help you relax",
                &[Stressed, Calm],
            ),
            item(
                "stressed-4",
                Activity,
                "Take a Walk",
                "A short walk can do wonders for stress",
                &[Stressed, Overwhelmed],
            ),
        ],
    );
    map.insert(
        Calm,
        vec![
            item(
                "calm-1",
                Music,
                "Peaceful Instrumentals",
                "Maintain your zen with tranquil melodies",
                &[Calm],
            ),
            item(
                "calm-2",
                Activity,
                "Mindful Reading",
                "Dive into a good book or article",
                &[Calm],
            ),
            item(
                "calm-3",
                Meditation,
                "Extended Meditation",
                "Deepen your calm with a longer session",
                &[Calm],
            ),
        ],
    );
    map.insert(
        Overwhelmed,
        vec![
            item(
                "overwhelmed-1",
                Meditation,
                "Emergency Calm Session",
                "A quick reset when everything feels too much",
                &[Overwhelmed, Stressed],
            ),
            item(
                "overwhelmed-2",
                Activity,
                "Break It Down",
                "Let's break your tasks into smaller steps",
                &[Overwhelmed],
            ),
            item(
                "overwhelmed-3",
                Music,
                "Soothing Sounds",
                "Gentle music to help you recenter",
                &[Overwhelmed, Calm],
            ),
            item(
                "overwhelmed-4",
                Activity,
                "Talk It Out",
                "Chat with your AI companion about what's on your mind",
                &[Overwhelmed],
            ),
        ],
    );
    map.insert(
        Neutral,
        vec![
            item(
                "neutral-1",
                Music,
                "Chill Vibes",
                "A balanced mix to match your mood",
                &[Neutral, Calm],
            ),
            item(
                "neutral-2",
                Activity,
                "Explore Something New",
                "Try a new hobby or learn something interesting",
                &[Neutral],
            ),
            item(
                "neutral-3",
                Video,
                "Interesting Content",
                "Discover something fascinating",
                &[Neutral],
            ),
        ],
    );
    map
});

static MICRO_HABITS: Lazy<HashMap<MoodCategory, RecommendationItem>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        Stressed,
        habit(
            "habit-stressed",
            "2-Minute Breathing",
            "Take a moment to breathe and reset",
            Stressed,
            Some(120),
        ),
    );
    map.insert(
        Sad,
        habit(
            "habit-sad",
            "Gratitude Moment",
            "Write down one thing you're grateful for",
            Sad,
            Some(60),
        ),
    );
    map.insert(
        Energetic,
        habit(
            "habit-energetic",
            "Productivity Burst",
            "Channel your energy into a quick task",
            Energetic,
            Some(300),
        ),
    );
    map.insert(
        Happy,
        habit(
            "habit-happy",
            "Share the Joy",
            "Spread positivity by doing something kind",
            Happy,
            None,
        ),
    );
    map.insert(
        Calm,
        habit(
            "habit-calm",
            "Mindful Moment",
            "Take a moment to appreciate the present",
            Calm,
            Some(60),
        ),
    );
    map.insert(
        Overwhelmed,
        habit(
            "habit-overwhelmed",
            "Priority Check",
            "Identify the one most important thing right now",
            Overwhelmed,
            Some(120),
        ),
    );
    map.insert(
        Neutral,
        habit(
            "habit-neutral",
            "Small Win",
            "Complete one small task to build momentum",
            Neutral,
            None,
        ),
    );
    map
});

/// Items authored for a mood, falling back to the neutral pool. The
/// fallback only matters if a mood ever ships without entries; today the
/// map covers the full enum.
pub fn items_for(category: MoodCategory) -> &'static [RecommendationItem] {
    CATALOG
        .get(&category)
        .or_else(|| CATALOG.get(&Neutral))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The single canonical micro-habit for a mood, neutral as fallback.
pub fn habit_for(category: MoodCategory) -> &'static RecommendationItem {
    MICRO_HABITS
        .get(&category)
        .or_else(|| MICRO_HABITS.get(&Neutral))
        .expect("micro-habit table covers neutral")
}
