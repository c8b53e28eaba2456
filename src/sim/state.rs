//! Run state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{FallingItem, ItemKind, Paddle};
use super::scoring::Scoreboard;
use crate::settings::DifficultyPreset;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticking
    Running,
    /// Run ended (one-way)
    Terminal,
}

/// Paddle movement commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ItemSpawned { id: u32, kind: ItemKind },
    ItemCaught { id: u32, kind: ItemKind },
    ItemMissed { id: u32 },
    ScoreChanged(i64),
    MissesChanged(u32),
    DifficultyIncreased(f32),
    GameOver { score: i64 },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub preset: DifficultyPreset,
    pub phase: GamePhase,
    /// Ticks processed while running
    pub time_ticks: u64,
    pub paddle: Paddle,
    /// Live items (resolution order is irrelevant)
    pub items: Vec<FallingItem>,
    pub scoreboard: Scoreboard,
    next_id: u32,
}

impl GameState {
    /// New run with default tuning
    pub fn new(preset: DifficultyPreset, seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), preset, seed)
    }

    pub fn with_tuning(tuning: Tuning, preset: DifficultyPreset, seed: u64) -> Self {
        let paddle = Paddle::new(&tuning, preset.multiplier());
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            preset,
            phase: GamePhase::Running,
            time_ticks: 0,
            paddle,
            items: Vec::new(),
            scoreboard: Scoreboard::new(),
            next_id: 1,
        }
    }

    /// Preset multiplier fixed at run start
    pub fn speed_scale(&self) -> f32 {
        self.preset.multiplier()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply a movement command immediately (ignored once terminal)
    pub fn apply(&mut self, command: Command) {
        if !self.is_running() {
            return;
        }
        match command {
            Command::MoveLeft => self.paddle.move_left(),
            Command::MoveRight => self.paddle.move_right(),
        }
    }
}
