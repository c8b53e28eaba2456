//! Catchfall entry point
//!
//! Web: wires the canvas, buttons, keyboard and audio to a [`catchfall::Game`] and
//! ticks once per animation frame.
//! Native: headless runner that plays runs with the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use catchfall::audio::AudioManager;
    use catchfall::persistence::LocalStore;
    use catchfall::platform::command_for_key;
    use catchfall::renderer::CanvasRenderer;
    use catchfall::sim::autopilot;
    use catchfall::{DifficultyPreset, Game, Tuning};

    /// Game instance holding all host state
    struct WebGame {
        game: Game<LocalStore>,
        renderer: CanvasRenderer,
        audio: AudioManager,
        idle_mode: bool,
    }

    impl WebGame {
        /// Tick, draw and play cues
        fn update(&mut self) {
            if self.idle_mode {
                if let Some(cmd) = self.game.state().and_then(autopilot::suggest) {
                    self.game.command(cmd);
                }
            }

            let frame = self.game.frame();
            if !frame.draw.is_empty() {
                self.renderer.present(&frame.draw);
            }
            for cue in frame.cues {
                self.audio.play(cue);
            }
            if frame.new_best {
                log::info!("New best score: {}", self.game.best_score());
            }
        }

        /// Mirror the UI model into the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let ui = self.game.ui();

            let set_text = |id: &str, value: String| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(&value));
                }
            };
            set_text("score", ui.hud.score.to_string());
            set_text("misses", ui.hud.misses.to_string());
            set_text("high-score", ui.hud.high_score.to_string());
            set_text("final-high-score", ui.hud.high_score.to_string());

            let set_visible = |id: &str, visible: bool| {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
                }
            };
            set_visible("difficulty-selection", ui.show_difficulty_select());
            set_visible("game-over-screen", ui.show_game_over());
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Catchfall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::default();
        let renderer = CanvasRenderer::new(
            &canvas,
            tuning.playfield_width,
            tuning.playfield_height,
        )
        .expect("no 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(LocalStore::new(), tuning, seed);
        let audio = AudioManager::new(&game.settings);
        let web_game = Rc::new(RefCell::new(WebGame {
            game,
            renderer,
            audio,
            idle_mode: false,
        }));

        web_game.borrow().update_hud();

        setup_keyboard(web_game.clone());
        setup_difficulty_buttons(web_game.clone());
        setup_restart_button(web_game.clone());

        // Start game loop
        request_animation_frame(web_game);

        log::info!("Catchfall running!");
    }

    fn setup_keyboard(web_game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = web_game.borrow_mut();
            let key = event.key();
            if let Some(cmd) = command_for_key(&key) {
                // Applied immediately, not queued for the next tick
                g.game.command(cmd);
            } else if key == "i" || key == "I" {
                g.idle_mode = !g.idle_mode;
                log::info!("Idle mode: {}", g.idle_mode);
            } else {
                let g = &mut *g;
                let settings = &mut g.game.settings;
                match key.as_str() {
                    "m" | "M" => settings.muted = !settings.muted,
                    "-" => settings.set_master_volume(settings.master_volume - 0.1),
                    "+" | "=" => settings.set_master_volume(settings.master_volume + 0.1),
                    "[" => settings.set_sfx_volume(settings.sfx_volume - 0.1),
                    "]" => settings.set_sfx_volume(settings.sfx_volume + 0.1),
                    _ => return,
                }
                g.audio.apply_settings(&g.game.settings);
                log::info!(
                    "Audio: master {:.1}, sfx {:.1}, muted {}",
                    g.game.settings.master_volume,
                    g.game.settings.sfx_volume,
                    g.game.settings.muted
                );
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_difficulty_buttons(web_game: Rc<RefCell<WebGame>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for (id, preset) in [
            ("easy-button", DifficultyPreset::Easy),
            ("medium-button", DifficultyPreset::Medium),
            ("hard-button", DifficultyPreset::Hard),
        ] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let web_game = web_game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = web_game.borrow_mut();
                g.game.start(preset);
                g.update_hud();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(web_game: Rc<RefCell<WebGame>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = web_game.borrow_mut();
                if g.game.restart() {
                    g.update_hud();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(web_game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(web_game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(web_game: Rc<RefCell<WebGame>>) {
        {
            let mut g = web_game.borrow_mut();
            g.update();
            g.update_hud();
        }

        request_animation_frame(web_game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use catchfall::persistence::{FileStore, KeyValueStore, MemoryStore};
    use catchfall::sim::autopilot;
    use catchfall::{DifficultyPreset, Game, Tuning};

    /// Play Catchfall runs headlessly with the autopilot
    #[derive(Debug, Parser)]
    #[command(name = "catchfall", version, about)]
    pub struct Args {
        /// Difficulty preset (easy, medium, hard)
        #[arg(short, long, default_value = "easy")]
        pub difficulty: DifficultyPreset,

        /// Number of runs to play
        #[arg(short, long, default_value_t = 1)]
        pub runs: u32,

        /// Session seed (random if omitted)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Give up on a run after this many ticks
        #[arg(long, default_value_t = 100_000)]
        pub max_ticks: u64,

        /// JSON file keeping the best score (in-memory if omitted)
        #[arg(long)]
        pub store: Option<PathBuf>,

        /// JSON tuning overrides
        #[arg(long)]
        pub tuning: Option<PathBuf>,
    }

    pub fn run(args: Args) -> anyhow::Result<()> {
        let tuning = match &args.tuning {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading tuning file {}", path.display()))?;
                Tuning::from_json(&json)
                    .with_context(|| format!("parsing tuning file {}", path.display()))?
            }
            None => Tuning::default(),
        };
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("Session seed {}", seed);

        match &args.store {
            Some(path) => play(Game::new(FileStore::open(path), tuning, seed), &args),
            None => play(Game::new(MemoryStore::new(), tuning, seed), &args),
        }
        Ok(())
    }

    fn play<S: KeyValueStore>(mut game: Game<S>, args: &Args) {
        println!(
            "Catchfall ({}), best score so far: {}",
            args.difficulty.as_str(),
            game.best_score()
        );

        for run in 1..=args.runs {
            if run == 1 {
                game.start(args.difficulty);
            } else {
                game.restart();
            }

            let mut ticks = 0;
            while game.state().is_some_and(|s| s.is_running()) && ticks < args.max_ticks {
                if let Some(cmd) = game.state().and_then(autopilot::suggest) {
                    game.command(cmd);
                }
                let frame = game.frame();
                if frame.new_best {
                    println!("  new best score!");
                }
                ticks += 1;
            }

            let Some(state) = game.state() else { break };
            if state.is_running() {
                log::warn!("Run {} hit the {} tick limit", run, args.max_ticks);
            }
            println!(
                "Run {}: score {}, misses {}, difficulty {:.1}, ticks {}",
                run,
                state.scoreboard.score,
                state.scoreboard.misses,
                state.scoreboard.difficulty,
                state.time_ticks
            );
        }

        println!("Best score: {}", game.best_score());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    headless::run(headless::Args::parse())
}
