//! Boost Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use boost_dodge::consts::*;
    use boost_dodge::platform::FrameClock;
    use boost_dodge::renderer::{Canvas2d, Scene, prepare};
    use boost_dodge::sim::input::passes_through;
    use boost_dodge::sim::{GameEvent, GameState, InputState, tick};
    use boost_dodge::{HighScore, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        settings: Settings,
        clock: FrameClock,
        canvas: Canvas2d,
    }

    impl Game {
        fn new(canvas: Canvas2d, settings: Settings, high_score: HighScore) -> Self {
            Self {
                state: GameState::new(high_score.score),
                input: InputState::new(),
                settings,
                clock: FrameClock::start(js_sys::Date::now()),
                canvas,
            }
        }

        /// Run one simulation step and act on its events
        fn update(&mut self, dt: f32) {
            for event in tick(&mut self.state, &self.input, dt) {
                match event {
                    GameEvent::NewHighScore(score) => {
                        log::info!("New high score: {}", score);
                        HighScore::new(score).save();
                    }
                    GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
                    other => log::debug!("{:?}", other),
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let fps = self.settings.show_fps.then(|| self.clock.fps());
            Scene::new(&self.state, &self.input, &self.settings)
                .with_fps(fps)
                .render(&mut self.canvas);
        }

        /// Pause a running game when the page loses focus
        fn suspend(&mut self, reason: &str) {
            if !self.settings.pause_on_blur {
                return;
            }
            if let Some(event) = self.state.suspend() {
                log::info!("Auto-paused ({}): {:?}", reason, event);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Boost Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector(".game-canvas")
            .ok()
            .flatten()
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);

        let mut ctx = Canvas2d::from_canvas(&canvas).expect("no 2d context");
        let settings = Settings::load();
        // Write back so a fresh install has an editable entry
        settings.save();
        prepare(&mut ctx, &settings);

        let game = Rc::new(RefCell::new(Game::new(ctx, settings, HighScore::load())));

        setup_input_handlers(game.clone());
        setup_auto_pause(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Boost Dodge running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if !passes_through(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().input.key_down(&key);
            });
            let _ = window.add_event_listener_with_callback_and_bool(
                "keydown",
                closure.as_ref().unchecked_ref(),
                true,
            );
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if !passes_through(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().input.key_up(&key);
            });
            let _ = window.add_event_listener_with_callback_and_bool(
                "keyup",
                closure.as_ref().unchecked_ref(),
                true,
            );
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().suspend("tab hidden");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().suspend("window blur");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let dt = g.clock.advance(js_sys::Date::now());
            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
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

    log::info!("Boost Dodge (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one unattended session at a fixed 60 Hz step and report the result
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use boost_dodge::HighScore;
    use boost_dodge::platform::FrameClock;
    use boost_dodge::sim::{GameEvent, GamePhase, GameState, InputState, Key, tick};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 120;

    let mut high = HighScore::load();
    let mut state = GameState::new(high.score);
    let mut input = InputState::new();
    let mut clock = FrameClock::start(0.0);
    let mut now = 0.0;

    let mut step = |state: &mut GameState, input: &InputState| {
        now += FRAME_MS;
        let dt = clock.advance(now);
        tick(state, input, dt)
    };

    // Tap space to leave the title screen
    input.press(Key::Space);
    step(&mut state, &input);
    input.release(Key::Space);
    step(&mut state, &input);

    let mut frames = 0;
    while state.phase == GamePhase::Play && frames < MAX_FRAMES {
        for event in step(&mut state, &input) {
            if let GameEvent::GameOver { score } = event {
                log::info!("Hit after {} frames, score {}", frames, score);
            }
        }
        frames += 1;
    }

    if state.phase == GamePhase::GameOver {
        input.press(Key::Space);
        step(&mut state, &input);
        input.release(Key::Space);
        for event in step(&mut state, &input) {
            if let GameEvent::NewHighScore(score) = event {
                high = HighScore::new(score);
                high.save();
            }
        }
    }

    println!(
        "Headless run: score {} in {} frames (high score {})",
        state.score, frames, high.score
    );
}
