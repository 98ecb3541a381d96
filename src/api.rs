use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::analyzer::{ActivityKind, SignalAccumulator};
use crate::catalog::RecommendationItem;
use crate::engine;
use crate::error::CoreError;
use crate::history::{CompletionCounter, MemoryStore, MoodHistory, Store};
use crate::mood::MoodClassification;
use crate::recommend;
use crate::signal::WeatherCondition;

const HISTORY_STORE_KEY: &str = "mindwave_mood_history";

/// Everything one detection cycle produces for the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOutcome {
    pub classification: MoodClassification,
    pub recommendations: Vec<RecommendationItem>,
    pub micro_habit: RecommendationItem,
}

/// Host-facing facade. Owns the per-session signal accumulators, the
/// mood history and the habit counters; inference and selection
/// underneath stay pure. Cloning shares state.
#[derive(Clone)]
pub struct MindwaveCore {
    sessions: Arc<Mutex<HashMap<String, SignalAccumulator>>>,
    history: Arc<Mutex<MoodHistory>>,
    completions: Arc<Mutex<CompletionCounter>>,
    store: Arc<dyn Store + Send + Sync>,
    recommend_count: usize,
}

impl MindwaveCore {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn Store + Send + Sync>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            history: Arc::new(Mutex::new(MoodHistory::new())),
            completions: Arc::new(Mutex::new(CompletionCounter::new())),
            store,
            recommend_count: 6,
        }
    }

    /// How many recommendations each detection returns. Hosts set this
    /// from UI configuration; the default matches the web dashboard.
    pub fn with_recommend_count(mut self, count: usize) -> Self {
        self.recommend_count = count;
        self
    }

    pub fn start_session(&self) -> Result<String, CoreError> {
        let id = Uuid::new_v4().to_string();
        self.lock_sessions()?
            .insert(id.clone(), SignalAccumulator::new());
        Ok(id)
    }

    pub fn track_typing(
        &self,
        session_id: &str,
        text: &str,
        backspaces: u32,
    ) -> Result<(), CoreError> {
        self.with_session(session_id, |acc| acc.track_typing(text, backspaces))
    }

    pub fn track_activity(
        &self,
        session_id: &str,
        kind: ActivityKind,
        amount: u32,
    ) -> Result<(), CoreError> {
        self.with_session(session_id, |acc| acc.track_activity(kind, amount))
    }

    pub fn note_device_usage(
        &self,
        session_id: &str,
        late_night_usage: bool,
        activity_level: f32,
    ) -> Result<(), CoreError> {
        self.with_session(session_id, |acc| {
            acc.note_device_usage(late_night_usage, activity_level)
        })
    }

    pub fn set_weather(
        &self,
        session_id: &str,
        condition: WeatherCondition,
    ) -> Result<(), CoreError> {
        self.with_session(session_id, |acc| acc.set_weather(condition))
    }

    pub fn set_voice_tone(
        &self,
        session_id: &str,
        energy: f32,
        sentiment: f32,
    ) -> Result<(), CoreError> {
        self.with_session(session_id, |acc| acc.set_voice_tone(energy, sentiment))
    }

    /// Non-destructive preview: classifies what has accumulated so far
    /// without resetting the session or touching history.
    pub fn peek(&self, session_id: &str) -> Result<MoodClassification, CoreError> {
        let sessions = self.lock_sessions()?;
        let acc = sessions
            .get(session_id)
            .ok_or_else(|| CoreError::SessionNotFound(session_id.to_string()))?;
        Ok(engine::classify(acc.bundle(), Utc::now()))
    }

    /// Runs one full detection cycle with ambient time and randomness.
    pub fn detect(&self, session_id: &str) -> Result<DetectionOutcome, CoreError> {
        self.detect_with(session_id, Utc::now(), &mut rand::thread_rng())
    }

    /// Detection with injected clock and RNG, for deterministic hosts
    /// and tests. Classifies the accumulated bundle, selects content,
    /// appends to history, persists best-effort, then resets the
    /// session's accumulator.
    pub fn detect_with<R: Rng + ?Sized>(
        &self,
        session_id: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<DetectionOutcome, CoreError> {
        let bundle = {
            let mut sessions = self.lock_sessions()?;
            let acc = sessions
                .get_mut(session_id)
                .ok_or_else(|| CoreError::SessionNotFound(session_id.to_string()))?;
            let bundle = acc.bundle();
            acc.reset();
            bundle
        };

        let classification = engine::classify(bundle, now);
        let recommendations =
            recommend::recommend_with(classification.category, self.recommend_count, rng);
        let micro_habit = recommend::micro_habit(classification.category).clone();

        {
            let mut history = self.history.lock().map_err(|_| CoreError::LockPoisoned)?;
            history.push(classification.clone());
            self.persist_history(&history);
        }

        Ok(DetectionOutcome {
            classification,
            recommendations,
            micro_habit,
        })
    }

    /// Most-recent-first copy of the retained history.
    pub fn history(&self) -> Result<Vec<MoodClassification>, CoreError> {
        let history = self.history.lock().map_err(|_| CoreError::LockPoisoned)?;
        Ok(history.to_vec())
    }

    pub fn complete_habit(&self, habit_id: &str) -> Result<(), CoreError> {
        let mut completions = self
            .completions
            .lock()
            .map_err(|_| CoreError::LockPoisoned)?;
        completions.increment(habit_id);
        Ok(())
    }

    pub fn habit_completions(&self) -> Result<HashMap<String, u32>, CoreError> {
        let completions = self
            .completions
            .lock()
            .map_err(|_| CoreError::LockPoisoned)?;
        Ok(completions.counts().clone())
    }

    pub fn end_session(&self, session_id: &str) -> Result<(), CoreError> {
        self.lock_sessions()?
            .remove(session_id)
            .map(|_| ())
            .ok_or_else(|| CoreError::SessionNotFound(session_id.to_string()))
    }

    /// Best-effort: storage trouble is logged, never surfaced to the
    /// detection caller.
    fn persist_history(&self, history: &MoodHistory) {
        let payload = match serde_json::to_string(&history.to_vec()) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to serialize mood history");
                return;
            }
        };
        if let Err(err) = self.store.put(HISTORY_STORE_KEY, &payload) {
            warn!(error = %err, "failed to persist mood history");
        }
    }

    fn lock_sessions(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<String, SignalAccumulator>>, CoreError> {
        self.sessions.lock().map_err(|_| CoreError::LockPoisoned)
    }

    fn with_session<F>(&self, session_id: &str, f: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut SignalAccumulator),
    {
        let mut sessions = self.lock_sessions()?;
        let acc = sessions
            .get_mut(session_id)
            .ok_or_else(|| CoreError::SessionNotFound(session_id.to_string()))?;
        f(acc);
        Ok(())
    }
}

impl Default for MindwaveCore {
    fn default() -> Self {
        Self::new()
    }
}
