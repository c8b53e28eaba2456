//! Per-frame simulation tick
//!
//! Core game loop step: terminal check, advance, resolve, spawn. Rendering is a
//! projection of the resulting state (see `renderer::draw_frame`).

use super::collision::{Resolution, resolve};
use super::spawner;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the run by one tick and report what happened
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::Terminal {
        return events;
    }

    if state.scoreboard.is_exhausted(&state.tuning) {
        end_run(state, &mut events);
        return events;
    }

    state.time_ticks += 1;

    for item in &mut state.items {
        item.advance();
    }

    // Single pass over a drained list: every item is resolved exactly once
    let items = std::mem::take(&mut state.items);
    let mut survivors = Vec::with_capacity(items.len());
    for item in items {
        match resolve(&item, &state.paddle, state.tuning.playfield_height) {
            Resolution::Caught => {
                state
                    .scoreboard
                    .record_catch(item.id, item.kind, &state.tuning, &mut events);
            }
            Resolution::Missed => state.scoreboard.record_miss(item.id, &mut events),
            Resolution::Falling => survivors.push(item),
        }
    }
    state.items = survivors;

    // The miss that fills the budget ends the run in the same tick
    if state.scoreboard.is_exhausted(&state.tuning) {
        end_run(state, &mut events);
        return events;
    }

    spawner::maybe_spawn(state, &mut events);

    events
}

fn end_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::Terminal;
    log::info!(
        "Run over after {} ticks: score {}, misses {}",
        state.time_ticks,
        state.scoreboard.score,
        state.scoreboard.misses
    );
    events.push(GameEvent::GameOver {
        score: state.scoreboard.score,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DifficultyPreset;
    use crate::sim::entity::{FallingItem, ItemKind};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn quiet_state(preset: DifficultyPreset) -> GameState {
        let tuning = Tuning {
            spawn_chance: 0.0,
            ..Tuning::default()
        };
        GameState::with_tuning(tuning, preset, 12345)
    }

    fn drop_item(state: &mut GameState, kind: ItemKind, x: f32, y: f32, speed: f32) -> u32 {
        let id = state.next_entity_id();
        state
            .items
            .push(FallingItem::new(id, kind, Vec2::new(x, y), speed, 30.0));
        id
    }

    #[test]
    fn test_normal_item_caught_above_paddle() {
        let mut state = quiet_state(DifficultyPreset::Easy);
        // Paddle spans 210..290; item centred over it
        drop_item(&mut state, ItemKind::Normal, 235.0, -30.0, 3.0);

        for _ in 0..189 {
            tick(&mut state);
            assert_eq!(state.scoreboard.score, 0);
        }
        let events = tick(&mut state);
        assert!(events.contains(&GameEvent::ScoreChanged(1)));
        assert_eq!(state.scoreboard.score, 1);
        assert_eq!(state.scoreboard.misses, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_item_missing_paddle_counts_a_miss() {
        let mut state = quiet_state(DifficultyPreset::Easy);
        drop_item(&mut state, ItemKind::Normal, 0.0, 590.0, 4.0);
        tick(&mut state); // y = 594
        assert_eq!(state.scoreboard.misses, 0);
        tick(&mut state); // y = 598
        tick(&mut state); // y = 602
        assert_eq!(state.scoreboard.misses, 1);
        assert_eq!(state.scoreboard.score, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_bomb_fifth_miss_ends_run_immediately() {
        let mut state = quiet_state(DifficultyPreset::Easy);
        state.scoreboard.misses = 4;
        drop_item(&mut state, ItemKind::Bomb, 235.0, 537.0, 3.0);

        let events = tick(&mut state);
        assert_eq!(state.scoreboard.score, -3);
        assert_eq!(state.scoreboard.misses, 5);
        assert_eq!(state.phase, GamePhase::Terminal);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: -3 }));

        // No further ticks are processed
        let ticks = state.time_ticks;
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_exhausted_budget_ends_at_tick_start() {
        let mut state = quiet_state(DifficultyPreset::Easy);
        state.scoreboard.misses = 5;
        drop_item(&mut state, ItemKind::Normal, 0.0, 0.0, 3.0);
        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::GameOver { score: 0 }]);
        assert_eq!(state.items[0].pos.y, 0.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_every_item_resolved_once_per_tick() {
        let mut state = quiet_state(DifficultyPreset::Easy);
        // Three adjacent items all leave the playfield this tick
        drop_item(&mut state, ItemKind::Normal, 0.0, 599.0, 3.0);
        drop_item(&mut state, ItemKind::Normal, 40.0, 599.0, 3.0);
        drop_item(&mut state, ItemKind::Golden, 80.0, 599.0, 3.0);
        drop_item(&mut state, ItemKind::Normal, 400.0, 100.0, 3.0);

        tick(&mut state);
        assert_eq!(state.scoreboard.misses, 3);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].pos.y, 103.0);
    }

    #[test]
    fn test_miss_count_monotonic_and_terminal_at_five() {
        let mut state = quiet_state(DifficultyPreset::Hard);
        let mut last_misses = 0;
        for i in 0..5 {
            drop_item(&mut state, ItemKind::Normal, 0.0, 598.0, 4.0);
            assert_eq!(state.phase, GamePhase::Running, "iteration {i}");
            tick(&mut state);
            assert!(state.scoreboard.misses >= last_misses);
            last_misses = state.scoreboard.misses;
        }
        assert_eq!(state.scoreboard.misses, 5);
        assert_eq!(state.phase, GamePhase::Terminal);
    }

    #[test]
    fn test_difficulty_never_decreases_over_long_run() {
        let mut state = GameState::new(DifficultyPreset::Medium, 2024);
        let mut last = state.scoreboard.difficulty;
        while state.is_running() && state.time_ticks < 20_000 {
            if let Some(cmd) = crate::sim::autopilot::suggest(&state) {
                state.apply(cmd);
            }
            tick(&mut state);
            let now = state.scoreboard.difficulty;
            assert!(now >= last);
            let steps = (now - 1.0) / state.tuning.difficulty_step;
            assert!((steps - steps.round()).abs() < 1e-3);
            last = now;
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(DifficultyPreset::Easy, 99999);
        let mut state2 = GameState::new(DifficultyPreset::Easy, 99999);

        for _ in 0..2_000 {
            let e1 = tick(&mut state1);
            let e2 = tick(&mut state2);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.items.len(), state2.items.len());
        assert_eq!(state1.scoreboard, state2.scoreboard);
    }
}
