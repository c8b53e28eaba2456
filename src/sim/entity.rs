//! Paddle and falling item entities

use glam::Vec2;

use crate::tuning::Tuning;

/// Axis-aligned rectangle addressed by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Half-open horizontal overlap (touching edges do not overlap)
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed for the run)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal shift per move command
    pub speed: f32,
    /// Rightmost legal x
    max_x: f32,
}

impl Paddle {
    /// Centred paddle with speed scaled by the run's preset multiplier
    pub fn new(tuning: &Tuning, speed_scale: f32) -> Self {
        let max_x = tuning.paddle_max_x();
        Self {
            x: max_x / 2.0,
            y: tuning.paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_base_speed * speed_scale,
            max_x,
        }
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - self.speed).max(0.0);
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + self.speed).min(self.max_x);
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Falling item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Normal,
    Golden,
    Bomb,
}

impl ItemKind {
    /// Score delta when caught
    pub fn points(&self) -> i64 {
        match self {
            ItemKind::Normal => 1,
            ItemKind::Golden => 5,
            ItemKind::Bomb => -3,
        }
    }

    /// Catching this item also costs a miss
    pub fn counts_as_miss(&self) -> bool {
        matches!(self, ItemKind::Bomb)
    }

    /// Whether spawn speed follows the run's difficulty multiplier
    pub fn scales_with_difficulty(&self) -> bool {
        matches!(self, ItemKind::Normal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Normal => "normal",
            ItemKind::Golden => "golden",
            ItemKind::Bomb => "bomb",
        }
    }
}

/// A falling item
#[derive(Debug, Clone)]
pub struct FallingItem {
    pub id: u32,
    pub kind: ItemKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical distance per tick
    pub speed: f32,
    /// Side length
    pub size: f32,
}

impl FallingItem {
    pub fn new(id: u32, kind: ItemKind, pos: Vec2, speed: f32, size: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            speed,
            size,
        }
    }

    /// Fall one tick
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}
