use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::CoreError;
use crate::mood::MoodClassification;

/// Retained classifications per user; older entries roll off.
pub const HISTORY_CAP: usize = 100;

/// Capped, most-recent-first record of classifications. Caller-owned:
/// the engine never touches it, the facade appends after each detection.
#[derive(Debug, Default)]
pub struct MoodHistory {
    entries: VecDeque<MoodClassification>,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, classification: MoodClassification) {
        self.entries.push_front(classification);
        self.entries.truncate(HISTORY_CAP);
    }

    pub fn latest(&self) -> Option<&MoodClassification> {
        self.entries.front()
    }

    /// Most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &MoodClassification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<MoodClassification> {
        self.entries.iter().cloned().collect()
    }
}

/// Per-habit completion tally keyed by item id.
#[derive(Debug, Default)]
pub struct CompletionCounter {
    counts: HashMap<String, u32>,
}

impl CompletionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, habit_id: &str) {
        *self.counts.entry(habit_id.to_string()).or_insert(0) += 1;
    }

    pub fn count_for(&self, habit_id: &str) -> u32 {
        self.counts.get(habit_id).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &HashMap<String, u32> {
        &self.counts
    }
}

/// Key-value seam for best-effort persistence. Hosts back this with
/// whatever storage they have; failures are logged by the facade, never
/// propagated into a detection cycle.
pub trait Store {
    fn put(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
}

/// In-memory store, also the test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn put(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut inner = self.inner.lock().map_err(|_| CoreError::LockPoisoned)?;
        inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let inner = self.inner.lock().map_err(|_| CoreError::LockPoisoned)?;
        Ok(inner.get(key).cloned())
    }
}
