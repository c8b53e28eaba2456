//! Paddle-vs-item and out-of-bounds tests

use super::entity::{FallingItem, Paddle};

/// Outcome of resolving one item for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Caught,
    Missed,
    Falling,
}

/// Item bottom has reached the paddle top and the two overlap horizontally
pub fn is_caught(item: &FallingItem, paddle: &Paddle) -> bool {
    let item_rect = item.rect();
    item_rect.bottom() >= paddle.y && item_rect.overlaps_horizontally(&paddle.rect())
}

/// Item top is below the playfield
pub fn is_out_of_bounds(item: &FallingItem, playfield_height: f32) -> bool {
    item.pos.y > playfield_height
}

/// Classify an item. Caught takes priority over out-of-bounds.
pub fn resolve(item: &FallingItem, paddle: &Paddle, playfield_height: f32) -> Resolution {
    if is_caught(item, paddle) {
        Resolution::Caught
    } else if is_out_of_bounds(item, playfield_height) {
        Resolution::Missed
    } else {
        Resolution::Falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::ItemKind;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn paddle() -> Paddle {
        // x = 210, y = 570, 80 x 20
        Paddle::new(&Tuning::default(), 1.0)
    }

    fn item_at(x: f32, y: f32) -> FallingItem {
        FallingItem::new(1, ItemKind::Normal, Vec2::new(x, y), 3.0, 30.0)
    }

    #[test]
    fn test_caught_when_bottom_reaches_paddle() {
        let paddle = paddle();
        assert_eq!(resolve(&item_at(235.0, 539.0), &paddle, 600.0), Resolution::Falling);
        assert_eq!(resolve(&item_at(235.0, 540.0), &paddle, 600.0), Resolution::Caught);
        assert_eq!(resolve(&item_at(235.0, 560.0), &paddle, 600.0), Resolution::Caught);
    }

    #[test]
    fn test_no_catch_without_overlap() {
        let paddle = paddle();
        // Right edge touches paddle left edge
        assert!(!is_caught(&item_at(180.0, 560.0), &paddle));
        // Left edge touches paddle right edge
        assert!(!is_caught(&item_at(290.0, 560.0), &paddle));
        assert!(is_caught(&item_at(181.0, 560.0), &paddle));
    }

    #[test]
    fn test_out_of_bounds_is_strict() {
        assert!(!is_out_of_bounds(&item_at(0.0, 600.0), 600.0));
        assert!(is_out_of_bounds(&item_at(0.0, 600.5), 600.0));
        assert_eq!(resolve(&item_at(0.0, 601.0), &paddle(), 600.0), Resolution::Missed);
    }

    #[test]
    fn test_caught_wins_over_out_of_bounds() {
        let paddle = paddle();
        let item = item_at(240.0, 605.0);
        assert!(is_caught(&item, &paddle));
        assert!(is_out_of_bounds(&item, 600.0));
        assert_eq!(resolve(&item, &paddle, 600.0), Resolution::Caught);
    }
}
