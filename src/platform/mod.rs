//! Platform abstraction layer
//!
//! Maps host input to simulation commands. Only the two arrow keys matter;
//! everything else is ignored.

use crate::sim::Command;

/// Command for a `KeyboardEvent.key` value
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" => Some(Command::MoveLeft),
        "ArrowRight" => Some(Command::MoveRight),
        _ => None,
    }
}
