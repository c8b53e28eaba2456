//! UI model
//!
//! Which surface is visible and what the three HUD counters show. Hosts mirror
//! this into the DOM; nothing here touches the platform.

use crate::sim::GameEvent;

/// Visible top-level surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Preset buttons shown, no run yet
    DifficultySelect,
    Playing,
    /// End-of-run surface with restart button
    GameOver,
}

/// HUD counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: i64,
    pub misses: u32,
    pub high_score: i64,
}

#[derive(Debug, Clone)]
pub struct Ui {
    pub screen: Screen,
    pub hud: Hud,
}

impl Ui {
    pub fn new(high_score: i64) -> Self {
        Self {
            screen: Screen::DifficultySelect,
            hud: Hud {
                high_score,
                ..Hud::default()
            },
        }
    }

    /// Enter a fresh run
    pub fn begin_run(&mut self) {
        self.screen = Screen::Playing;
        self.hud.score = 0;
        self.hud.misses = 0;
    }

    /// Show the end-of-run surface with the (possibly updated) best score
    pub fn end_run(&mut self, high_score: i64) {
        self.screen = Screen::GameOver;
        self.hud.high_score = high_score;
    }

    /// Fold a simulation event into the counters
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ScoreChanged(score) => self.hud.score = *score,
            GameEvent::MissesChanged(misses) => self.hud.misses = *misses,
            _ => {}
        }
    }

    pub fn show_difficulty_select(&self) -> bool {
        self.screen == Screen::DifficultySelect
    }

    pub fn show_game_over(&self) -> bool {
        self.screen == Screen::GameOver
    }
}
