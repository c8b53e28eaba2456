//! Catchfall - A single-screen arcade catching game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, scoring, tick)
//! - `game`: Session host around the simulation (runs, restarts, best score, cues)
//! - `renderer`: Draw-list projection of the simulation, canvas 2D backend on web
//! - `platform`: Browser/native input mapping
//! - `persistence`: Key/value storage gateways (LocalStorage, JSON file, memory)
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{Frame, Game};
pub use highscores::BestScore;
pub use settings::{DifficultyPreset, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units)
    pub const PLAYFIELD_WIDTH: f32 = 500.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between paddle bottom and playfield bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Paddle movement per command at the Easy preset
    pub const PADDLE_BASE_SPEED: f32 = 5.0;

    /// Falling items are square
    pub const ITEM_SIZE: f32 = 30.0;

    /// Per-tick spawn probability
    pub const SPAWN_CHANCE: f32 = 0.03;
    /// Variant roll below this is Golden
    pub const GOLDEN_THRESHOLD: f32 = 0.1;
    /// Variant roll below this (and not Golden) is a Bomb
    pub const BOMB_THRESHOLD: f32 = 0.2;
    /// Fall speed factor range, [min, max)
    pub const FALL_FACTOR_MIN: f32 = 2.0;
    pub const FALL_FACTOR_MAX: f32 = 4.0;

    /// Misses allowed before the run ends
    pub const MAX_MISSES: u32 = 5;
    /// Difficulty multiplier bump
    pub const DIFFICULTY_STEP: f32 = 0.2;
    /// Difficulty bumps when score is a positive multiple of this
    pub const DIFFICULTY_SCORE_INTERVAL: i64 = 5;
}
