pub mod analyzer;
pub mod api;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod history;
pub mod mood;
pub mod recommend;
pub mod signal;
pub mod weather;

pub use api::{DetectionOutcome, MindwaveCore};
pub use catalog::RecommendationItem;
pub use engine::classify;
pub use error::CoreError;
pub use mood::{MoodCategory, MoodClassification};
pub use recommend::{micro_habit, recommend, recommend_with};
pub use signal::{SignalBundle, WeatherCondition};
