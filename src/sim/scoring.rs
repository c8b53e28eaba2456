//! Point and miss accounting, difficulty progression

use super::entity::ItemKind;
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Per-run score, misses and difficulty
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    /// May go negative
    pub score: i64,
    /// Never decreases within a run
    pub misses: u32,
    /// Starts at 1.0, only increases
    pub difficulty: f32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            misses: 0,
            difficulty: 1.0,
        }
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a caught item's effects
    pub fn record_catch(
        &mut self,
        id: u32,
        kind: ItemKind,
        tuning: &Tuning,
        events: &mut Vec<GameEvent>,
    ) {
        self.score += kind.points();
        events.push(GameEvent::ItemCaught { id, kind });
        events.push(GameEvent::ScoreChanged(self.score));

        if kind.counts_as_miss() {
            self.misses += 1;
            events.push(GameEvent::MissesChanged(self.misses));
        }

        self.increase_difficulty(tuning, events);
    }

    /// Apply an item falling out of the playfield
    pub fn record_miss(&mut self, id: u32, events: &mut Vec<GameEvent>) {
        self.misses += 1;
        events.push(GameEvent::ItemMissed { id });
        events.push(GameEvent::MissesChanged(self.misses));
    }

    /// Bump difficulty when the score sits on a positive multiple of the interval.
    /// Re-evaluated after every catch, not once per threshold.
    pub fn increase_difficulty(&mut self, tuning: &Tuning, events: &mut Vec<GameEvent>) {
        let interval = tuning.difficulty_score_interval;
        if interval > 0 && self.score > 0 && self.score % interval == 0 {
            self.difficulty += tuning.difficulty_step;
            events.push(GameEvent::DifficultyIncreased(self.difficulty));
        }
    }

    /// Miss budget used up
    pub fn is_exhausted(&self, tuning: &Tuning) -> bool {
        self.misses >= tuning.max_misses
    }
}
