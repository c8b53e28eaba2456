//! Probabilistic item spawning
//!
//! Draw order per tick: spawn chance, variant, speed factor, horizontal position.

use glam::Vec2;
use rand::Rng;

use super::entity::{FallingItem, ItemKind};
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Map a uniform roll in [0, 1) to a variant
pub fn roll_kind(roll: f32, tuning: &Tuning) -> ItemKind {
    if roll < tuning.golden_threshold {
        ItemKind::Golden
    } else if roll < tuning.bomb_threshold {
        ItemKind::Bomb
    } else {
        ItemKind::Normal
    }
}

/// Fall speed for a variant given the random factor
pub fn fall_speed(kind: ItemKind, factor: f32, speed_scale: f32, difficulty: f32) -> f32 {
    if kind.scales_with_difficulty() {
        speed_scale * difficulty * factor
    } else {
        speed_scale * factor
    }
}

/// Build an item of the given kind just above the visible area
pub fn spawn_item<R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
    id: u32,
    kind: ItemKind,
    speed_scale: f32,
    difficulty: f32,
) -> FallingItem {
    let factor = rng.random_range(tuning.fall_factor_min..tuning.fall_factor_max);
    let speed = fall_speed(kind, factor, speed_scale, difficulty);
    let x = rng.random::<f32>() * tuning.item_max_x();
    FallingItem::new(id, kind, Vec2::new(x, -tuning.item_size), speed, tuning.item_size)
}

/// Attempt this tick's spawn. Returns the new item's id.
pub fn maybe_spawn(state: &mut GameState, events: &mut Vec<GameEvent>) -> Option<u32> {
    if !state.is_running() {
        return None;
    }
    if state.rng.random::<f32>() >= state.tuning.spawn_chance {
        return None;
    }

    let kind = roll_kind(state.rng.random::<f32>(), &state.tuning);
    let id = state.next_entity_id();
    let speed_scale = state.speed_scale();
    let difficulty = state.scoreboard.difficulty;
    let item = spawn_item(&mut state.rng, &state.tuning, id, kind, speed_scale, difficulty);

    log::trace!("spawned {} item {} (speed {:.2})", kind.as_str(), id, item.speed);
    state.items.push(item);
    events.push(GameEvent::ItemSpawned { id, kind });
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DifficultyPreset;
    use crate::sim::state::GamePhase;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_roll_kind_thresholds() {
        let tuning = Tuning::default();
        assert_eq!(roll_kind(0.0, &tuning), ItemKind::Golden);
        assert_eq!(roll_kind(0.099, &tuning), ItemKind::Golden);
        assert_eq!(roll_kind(0.1, &tuning), ItemKind::Bomb);
        assert_eq!(roll_kind(0.199, &tuning), ItemKind::Bomb);
        assert_eq!(roll_kind(0.2, &tuning), ItemKind::Normal);
        assert_eq!(roll_kind(0.999, &tuning), ItemKind::Normal);
    }

    #[test]
    fn test_only_normal_speed_scales_with_difficulty() {
        assert_eq!(fall_speed(ItemKind::Normal, 3.0, 1.5, 2.0), 9.0);
        assert_eq!(fall_speed(ItemKind::Golden, 3.0, 1.5, 2.0), 4.5);
        assert_eq!(fall_speed(ItemKind::Bomb, 3.0, 1.5, 2.0), 4.5);
    }

    #[test]
    fn test_spawn_guaranteed_with_full_chance() {
        let tuning = Tuning {
            spawn_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = GameState::with_tuning(tuning, DifficultyPreset::Easy, 3);
        let mut events = Vec::new();
        let id = maybe_spawn(&mut state, &mut events).unwrap();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, id);
        assert_eq!(state.items[0].pos.y, -30.0);
        assert!(matches!(events[0], GameEvent::ItemSpawned { .. }));
    }

    #[test]
    fn test_no_spawn_with_zero_chance_or_terminal() {
        let tuning = Tuning {
            spawn_chance: 0.0,
            ..Tuning::default()
        };
        let mut state = GameState::with_tuning(tuning, DifficultyPreset::Easy, 3);
        let mut events = Vec::new();
        for _ in 0..100 {
            assert!(maybe_spawn(&mut state, &mut events).is_none());
        }

        let tuning = Tuning {
            spawn_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = GameState::with_tuning(tuning, DifficultyPreset::Easy, 3);
        state.phase = GamePhase::Terminal;
        assert!(maybe_spawn(&mut state, &mut events).is_none());
        assert!(state.items.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_spawn_draw_order() {
        let tuning = Tuning {
            spawn_chance: 1.0,
            ..Tuning::default()
        };
        for seed in [0, 7, 99, 12345] {
            let mut state = GameState::with_tuning(tuning.clone(), DifficultyPreset::Medium, seed);
            state.scoreboard.difficulty = 1.4;
            let mut events = Vec::new();
            maybe_spawn(&mut state, &mut events).unwrap();
            let item = &state.items[0];

            // Same stream replayed by hand: chance, variant, speed factor, x
            let mut rng = Pcg32::seed_from_u64(seed);
            let chance = rng.random::<f32>();
            assert!(chance < tuning.spawn_chance);
            let kind = roll_kind(rng.random::<f32>(), &tuning);
            let factor = rng.random_range(tuning.fall_factor_min..tuning.fall_factor_max);
            let x = rng.random::<f32>() * tuning.item_max_x();

            assert_eq!(item.kind, kind, "seed {seed}");
            assert_eq!(item.speed, fall_speed(kind, factor, 1.5, 1.4), "seed {seed}");
            assert_eq!(item.pos.x, x, "seed {seed}");
            // Nothing else consumed the stream
            assert_eq!(state.rng.random::<u32>(), rng.random::<u32>());
        }
    }

    #[test]
    fn test_variant_mix_roughly_matches_weights() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut golden = 0;
        let mut bomb = 0;
        let n = 10_000;
        for _ in 0..n {
            match roll_kind(rng.random::<f32>(), &tuning) {
                ItemKind::Golden => golden += 1,
                ItemKind::Bomb => bomb += 1,
                ItemKind::Normal => {}
            }
        }
        assert!((800..1200).contains(&golden), "golden = {golden}");
        assert!((800..1200).contains(&bomb), "bomb = {bomb}");
    }

    proptest! {
        #[test]
        fn prop_spawn_within_bounds(seed in any::<u64>(), difficulty in 1.0f32..5.0) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            for kind in [ItemKind::Normal, ItemKind::Golden, ItemKind::Bomb] {
                let item = spawn_item(&mut rng, &tuning, 1, kind, 2.0, difficulty);
                prop_assert!(item.pos.x >= 0.0);
                prop_assert!(item.pos.x <= tuning.item_max_x());
                prop_assert_eq!(item.pos.y, -tuning.item_size);
                let scale = if kind == ItemKind::Normal { 2.0 * difficulty } else { 2.0 };
                prop_assert!(item.speed >= 2.0 * scale - 1e-4);
                prop_assert!(item.speed < 4.0 * scale + 1e-4);
            }
        }
    }
}
