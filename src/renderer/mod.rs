//! Rendering module
//!
//! Rendering is a pure projection of the run state into a draw list: a full clear
//! followed by one filled rectangle per entity. Backends only execute the list.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{GameState, ItemKind, Rect};

/// Fill colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Gold,
    Black,
}

impl Color {
    /// CSS colour name
    pub fn css(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Gold => "gold",
            Color::Black => "black",
        }
    }
}

/// Paddle colour
pub const PADDLE_COLOR: Color = Color::Green;

/// Fill colour for an item variant
pub fn item_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Normal => Color::Red,
        ItemKind::Golden => Color::Gold,
        ItemKind::Bomb => Color::Black,
    }
}

/// A single surface operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRect { rect: Rect, color: Color },
}

/// Project the run state into draw commands (clear, paddle, items)
pub fn draw_frame(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.items.len() + 2);
    commands.push(DrawCommand::Clear {
        width: state.tuning.playfield_width,
        height: state.tuning.playfield_height,
    });
    commands.push(DrawCommand::FillRect {
        rect: state.paddle.rect(),
        color: PADDLE_COLOR,
    });
    commands.extend(state.items.iter().map(|item| DrawCommand::FillRect {
        rect: item.rect(),
        color: item_color(item.kind),
    }));
    commands
}
