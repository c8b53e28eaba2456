//! Idle/demo mode - AI plays the game
//!
//! Chases the lowest falling item that is worth catching and ignores bombs.

use super::entity::ItemKind;
use super::state::{Command, GameState};

/// Pick the movement command that brings the paddle toward the next catch
pub fn suggest(state: &GameState) -> Option<Command> {
    if !state.is_running() {
        return None;
    }

    let target = state
        .items
        .iter()
        .filter(|item| item.kind != ItemKind::Bomb)
        .filter(|item| item.pos.y <= state.paddle.y)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let target_x = target.pos.x + target.size / 2.0;
    let delta = target_x - state.paddle.center_x();
    let dead_zone = state.paddle.speed / 2.0;

    if delta < -dead_zone {
        Some(Command::MoveLeft)
    } else if delta > dead_zone {
        Some(Command::MoveRight)
    } else {
        None
    }
}
