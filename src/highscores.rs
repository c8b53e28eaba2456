//! Best score tracking
//!
//! A single integer persisted under a fixed key. Missing or unparsable values read as 0.

use crate::persistence::KeyValueStore;

/// Highest final score across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore {
    value: i64,
}

impl BestScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "highScore";

    /// Read the persisted best score
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let value = match store.get(Self::STORAGE_KEY) {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                log::warn!("Unparsable best score {:?}, using 0", raw);
                0
            }),
            None => 0,
        };
        log::info!("Loaded best score {}", value);
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Record a finished run. Persists and returns true only for a new best.
    pub fn record<S: KeyValueStore + ?Sized>(&mut self, score: i64, store: &mut S) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        store.set(Self::STORAGE_KEY, &score.to_string());
        log::info!("New best score {}", score);
        true
    }
}
