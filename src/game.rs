//! Game session
//!
//! Host-facing half of the game loop: starts and restarts runs, applies input,
//! ticks once per frame, folds events into the HUD and sound cues, and records
//! the best score when a run ends. Hosts call [`Game::frame`] once per display
//! refresh and execute the returned draw list and cues.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::SoundEffect;
use crate::highscores::BestScore;
use crate::persistence::KeyValueStore;
use crate::renderer::{DrawCommand, draw_frame};
use crate::settings::{DifficultyPreset, Settings};
use crate::sim::{Command, GameEvent, GameState, tick};
use crate::tuning::Tuning;
use crate::ui::Ui;

/// Output of one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Empty when no tick ran
    pub draw: Vec<DrawCommand>,
    pub cues: Vec<SoundEffect>,
    pub events: Vec<GameEvent>,
    /// Set on the frame where the run ended with a new best score
    pub new_best: bool,
}

/// A play session: any number of runs sharing one best score
pub struct Game<S: KeyValueStore> {
    store: S,
    best: BestScore,
    pub settings: Settings,
    tuning: Tuning,
    ui: Ui,
    /// Current or just-ended run
    state: Option<GameState>,
    /// Preset of the last started run
    last_preset: Option<DifficultyPreset>,
    seeder: Pcg32,
}

impl<S: KeyValueStore> Game<S> {
    /// Load the best score and wait for a preset
    pub fn new(store: S, tuning: Tuning, seed: u64) -> Self {
        let best = BestScore::load(&store);
        Self {
            store,
            best,
            settings: Settings::default(),
            tuning,
            ui: Ui::new(best.value()),
            state: None,
            last_preset: None,
            seeder: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a new run at a preset
    pub fn start(&mut self, preset: DifficultyPreset) {
        let seed = self.seeder.next_u64();
        self.state = Some(GameState::with_tuning(self.tuning.clone(), preset, seed));
        self.last_preset = Some(preset);
        self.settings.difficulty = preset;
        self.ui.begin_run();
        log::info!("Started {} run with seed {}", preset.as_str(), seed);
    }

    /// Start again at the preset of the last run
    pub fn restart(&mut self) -> bool {
        match self.last_preset {
            Some(preset) => {
                self.start(preset);
                true
            }
            None => {
                log::warn!("Restart requested before any run was started");
                false
            }
        }
    }

    /// Apply a movement command immediately
    pub fn command(&mut self, command: Command) {
        if let Some(state) = self.state.as_mut() {
            state.apply(command);
        }
    }

    /// Run one tick and project the result
    pub fn frame(&mut self) -> Frame {
        let Some(state) = self.state.as_mut() else {
            return Frame::default();
        };
        if !state.is_running() {
            return Frame::default();
        }

        let events = tick(state);
        let draw = draw_frame(state);

        let mut frame = Frame {
            draw,
            cues: Vec::new(),
            events: Vec::new(),
            new_best: false,
        };

        for event in &events {
            self.ui.apply(event);
            if let Some(cue) = SoundEffect::for_event(event) {
                frame.cues.push(cue);
            }
            if let GameEvent::GameOver { score } = event {
                frame.new_best = self.best.record(*score, &mut self.store);
                self.ui.end_run(self.best.value());
            }
        }

        frame.events = events;
        frame
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    pub fn best_score(&self) -> i64 {
        self.best.value()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
