//! Desert Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

    use desert_drop::audio::MusicPlayer;
    use desert_drop::consts::*;
    use desert_drop::platform::{KeyCommand, assets, map_key};
    use desert_drop::renderer::{SpriteSheet, draw_frame};
    use desert_drop::sim::{Banner, GamePhase, GameState, Transition, advance_frame, handle_input};
    use desert_drop::{HighScores, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        ctx: CanvasRenderingContext2d,
        sprites: SpriteSheet<HtmlImageElement>,
        music: MusicPlayer,
        settings: Settings,
        high_scores: HighScores,
    }

    impl Game {
        /// Advance, draw, and report whether to schedule another frame
        fn frame(&mut self, time: f64) -> bool {
            let phase_before = self.state.phase();
            let Some(outcome) = advance_frame(&mut self.state, time) else {
                return false;
            };

            draw_frame(&mut self.ctx, &self.sprites, &self.state);
            self.music.play(self.state.song());

            match outcome.transition {
                Transition::GameOver => {
                    if let Some(Banner::GameOver { score }) = self.state.banner {
                        self.record_run(score, phase_before);
                    }
                }
                Transition::Win => self.record_run(self.state.score, GamePhase::Win),
                _ => {}
            }

            outcome.rearm
        }

        fn record_run(&mut self, score: u64, reached: GamePhase) {
            if let Some(rank) = self
                .high_scores
                .add_score(score, reached, js_sys::Date::now())
            {
                log::info!("New high score #{}: {}", rank, score);
                self.high_scores.save();
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Desert Drop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(GAME_WIDTH as u32);
        canvas.set_height(GAME_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let sprites = assets::load_sprites().expect("Failed to create image elements");

        let seed = js_sys::Date::now() as u64;
        let state = match GameState::new(seed) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Invalid level configuration: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game {
            state,
            ctx,
            sprites,
            music: MusicPlayer::new(&settings),
            settings,
            high_scores: HighScores::load(),
        }));

        setup_input_handlers(game.clone());
        setup_focus_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Desert Drop running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let handler_game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let Some(command) = map_key(&event.key()) else {
                return;
            };
            // Arrow keys and space would otherwise scroll the page
            event.prevent_default();

            let schedule = {
                let mut guard = handler_game.borrow_mut();
                let g = &mut *guard;
                match command {
                    KeyCommand::Game(action) => {
                        // First key press unlocks audio
                        g.music.resume();
                        handle_input(&mut g.state, action)
                    }
                    KeyCommand::ToggleMute => {
                        g.settings.toggle_mute();
                        g.settings.save();
                        g.music.apply_settings(&g.settings);
                        log::info!("Muted: {}", g.settings.muted);
                        false
                    }
                }
            };

            if schedule {
                request_animation_frame(handler_game.clone());
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Window blur (click outside, tab switch)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let g = game.borrow();
                if g.settings.mute_on_blur {
                    g.music.pause();
                    log::info!("Music paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let g = game.borrow();
                if g.settings.mute_on_blur {
                    g.music.resume();
                }
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let rearm = game.borrow_mut().frame(time);

        // Game over and win halt here until the player presses space
        if rearm {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Desert Drop (native) starting...");
    log::info!("Native mode runs a headless autoplay - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    match autoplay::run(seed, autoplay::MAX_FRAMES) {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            log::error!("Invalid level configuration: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Seeded headless run with a simple lane-dodging bot
#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use desert_drop::HighScores;
    use desert_drop::consts::*;
    use desert_drop::sim::{
        Banner, ConfigError, Direction, GameState, InputAction, Transition, advance_frame,
        handle_input,
    };

    /// Twenty simulated minutes at 60 fps
    pub const MAX_FRAMES: u64 = 60 * 60 * 20;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Something is falling toward the player's box in lane `x`
    fn threatened(state: &GameState, x: f32) -> bool {
        let player_bottom = state.player.pos.y + PLAYER_HEIGHT;
        state
            .enemies
            .iter()
            .any(|e| e.pos.x == x && e.bottom() > 0.0 && e.pos.y < player_bottom)
            || state.bosses.iter().any(|b| {
                x >= b.pos.x && x < b.pos.x + BOSS_WIDTH && b.bottom() > 0.0 && b.pos.y < player_bottom
            })
    }

    fn pick_move(state: &GameState) -> Option<Direction> {
        let x = state.player.pos.x;
        if !threatened(state, x) {
            return None;
        }
        [(Direction::Left, x - PLAYER_WIDTH), (Direction::Right, x + PLAYER_WIDTH)]
            .into_iter()
            .find(|&(_, nx)| (0.0..=GAME_WIDTH - PLAYER_WIDTH).contains(&nx) && !threatened(state, nx))
            .map(|(dir, _)| dir)
    }

    pub fn run(seed: u64, max_frames: u64) -> Result<String, ConfigError> {
        let mut state = GameState::new(seed)?;
        let mut high_scores = HighScores::new();
        let mut now = 0.0;

        for _ in 0..max_frames {
            if let Some(direction) = pick_move(&state) {
                handle_input(&mut state, InputAction::Move(direction));
            }

            now += FRAME_MS;
            let phase_before = state.phase();
            let Some(outcome) = advance_frame(&mut state, now) else {
                break;
            };

            match outcome.transition {
                Transition::GameOver => {
                    let score = match state.banner {
                        Some(Banner::GameOver { score }) => score,
                        _ => 0,
                    };
                    high_scores.add_score(score, phase_before, now);
                    break;
                }
                Transition::Win => {
                    high_scores.add_score(state.score, state.phase(), now);
                    break;
                }
                _ => {}
            }
        }

        let best = high_scores.top_score().unwrap_or(state.score);
        Ok(format!(
            "seed {seed}: {} frames, reached {}, score {}",
            state.frames,
            state.phase().as_str(),
            best
        ))
    }
}
