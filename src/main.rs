//! Sky Raider entry point
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

    use sky_raider::error::{GameError, Result};
    use sky_raider::renderer::CanvasSurface;
    use sky_raider::sim::{Arena, GamePhase};
    use sky_raider::ui::DomHud;
    use sky_raider::{Game, Tuning};

    const CANVAS_ID: &str = "gameCanvas";
    const START_BUTTON_ID: &str = "startButton";
    const RESTART_BUTTON_ID: &str = "restartButton";

    /// Game plus the browser collaborators it draws into
    struct App {
        game: Game,
        surface: CanvasSurface,
        hud: DomHud,
        /// True while an animation frame is scheduled
        running: bool,
    }

    impl App {
        /// Start from the start screen, or restart after game over
        fn begin(&mut self) -> bool {
            match self.game.phase() {
                GamePhase::NotStarted => self.game.start(&mut self.hud),
                GamePhase::Ended => self.game.restart(&mut self.hud),
                GamePhase::Active => return false,
            }
            true
        }
    }

    pub fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Sky Raider starting...");

        let window = web_sys::window().ok_or(GameError::MissingElement("window"))?;
        let document = window
            .document()
            .ok_or(GameError::MissingElement("document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or(GameError::MissingElement("gameCanvas"))?
            .dyn_into()
            .map_err(|_| GameError::Js("#gameCanvas is not a canvas".into()))?;

        let arena = Arena::new(canvas.width() as f32, canvas.height() as f32);
        let tuning = Tuning::load_from_page();
        let seed = js_sys::Date::now() as u64;

        let app = Rc::new(RefCell::new(App {
            game: Game::new(arena, tuning, seed),
            surface: CanvasSurface::new(&canvas)?,
            hud: DomHud::new(document),
            running: false,
        }));

        log::info!("Game initialized with seed: {}", seed);

        // Paint the start screen backdrop once
        {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            a.game.frame(0.0, &mut a.surface, &mut a.hud);
        }

        setup_input_handlers(app.clone());
        setup_button(START_BUTTON_ID, app.clone());
        setup_button(RESTART_BUTTON_ID, app);

        log::info!("Sky Raider ready");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "Enter" {
                    begin(&app);
                    return;
                }
                if app.borrow_mut().game.input.set_key(&key, true) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input.set_key(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyups sent elsewhere never arrive, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().game.input.clear();
                log::debug!("Input released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_button(id: &str, app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                begin(&app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Button #{} not found", id);
        }
    }

    /// Start or restart, then make sure exactly one frame loop is running
    fn begin(app: &Rc<RefCell<App>>) {
        let arm = {
            let mut a = app.borrow_mut();
            let began = a.begin();
            let arm = began && !a.running;
            if arm {
                a.running = true;
            }
            arm
        };
        if arm {
            request_animation_frame(app.clone());
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_running = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            let active = a.game.frame(time, &mut a.surface, &mut a.hud);
            a.running = active;
            active
        };

        if keep_running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), sky_raider::GameError> {
    env_logger::init();
    log::info!("Sky Raider (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => sky_raider::Tuning::load_file(&path)?,
        None => sky_raider::Tuning::default(),
    };

    println!("\nRunning headless autopilot session...");
    autopilot(tuning);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one session with a simple bot: track the nearest enemy's height and
/// keep firing.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(tuning: sky_raider::Tuning) {
    use sky_raider::consts::SIM_DT_MS;
    use sky_raider::sim::{Arena, GameEvent, GameState, tick};
    use sky_raider::{Action, InputState};

    const MAX_TICKS: u64 = 60 * 60 * 5;

    let mut state = GameState::new(Arena::default(), tuning, 0x5eed);
    let mut input = InputState::new();
    let mut kills = 0u32;
    state.start();

    while state.is_active() && state.time_ticks < MAX_TICKS {
        input.clear();
        input.press(Action::Fire);

        let player_mid = state.player.center().y;
        let target = state
            .enemies
            .iter()
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
            .map(|e| e.center().y);
        if let Some(y) = target {
            if y < player_mid - 4.0 {
                input.press(Action::Up);
            } else if y > player_mid + 4.0 {
                input.press(Action::Down);
            }
        }

        tick(&mut state, &input, SIM_DT_MS);

        for event in &state.events {
            match event {
                GameEvent::EnemyKilled { .. } => kills += 1,
                GameEvent::LevelUp { level } => println!("  level {}", level),
                GameEvent::PlayerHit { lives_left } => println!("  hit, {} lives left", lives_left),
                _ => {}
            }
        }
    }

    println!(
        "✓ {:.0}s simulated: score {}, level {}, {} kills, {} lives left",
        state.time_ms / 1000.0,
        state.score,
        state.level,
        kills,
        state.lives
    );
}
