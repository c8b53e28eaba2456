//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Resolution, is_caught, is_out_of_bounds, resolve};
pub use entity::{FallingItem, ItemKind, Paddle, Rect};
pub use scoring::Scoreboard;
pub use state::{Command, GameEvent, GamePhase, GameState};
pub use tick::tick;
