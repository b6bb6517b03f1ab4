//! Frame driver
//!
//! Turns host animation frames into fixed simulation ticks, renders, and
//! keeps the HUD in sync. Platform wiring lives in `main.rs`.

use crate::consts::*;
use crate::input::InputState;
use crate::renderer::{Surface, render};
use crate::sim::{Arena, GameEvent, GamePhase, GameState, tick};
use crate::tuning::Tuning;
use crate::ui::Hud;

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    accumulator: f64,
    last_time: Option<f64>,
}

impl Game {
    pub fn new(arena: Arena, tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(arena, tuning, seed),
            input: InputState::default(),
            accumulator: 0.0,
            last_time: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Reset the world and enter active play
    pub fn start(&mut self, hud: &mut impl Hud) {
        self.state.start();
        self.accumulator = 0.0;
        self.last_time = None;
        hud.set_start_screen_visible(false);
        hud.show_game_over(None);
        self.update_hud(hud);
    }

    /// Dismiss the game-over panel and start over
    pub fn restart(&mut self, hud: &mut impl Hud) {
        hud.show_game_over(None);
        self.input.clear();
        self.start(hud);
        log::info!("Game restarted");
    }

    /// Run one host frame. Returns true while the host should keep
    /// scheduling frames.
    pub fn frame(&mut self, time_ms: f64, surface: &mut impl Surface, hud: &mut impl Hud) -> bool {
        let dt = match self.last_time {
            Some(last) => (time_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => SIM_DT_MS,
        };
        self.last_time = Some(time_ms);

        self.update(dt, hud);
        render(&self.state, surface, time_ms);
        self.update_hud(hud);

        self.state.is_active()
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f64, hud: &mut impl Hud) {
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT_MS);
            self.accumulator -= SIM_DT_MS;
            substeps += 1;

            self.handle_events(hud);
            if !self.state.is_active() {
                self.accumulator = 0.0;
                break;
            }
        }

        // Drop backlog we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT_MS);
        }
    }

    fn handle_events(&self, hud: &mut impl Hud) {
        for event in &self.state.events {
            match event {
                GameEvent::EnemyKilled { kind, points } => {
                    log::debug!("{:?} enemy destroyed (+{})", kind, points);
                }
                GameEvent::EnemyEscaped => log::debug!("Enemy escaped"),
                GameEvent::PlayerHit { lives_left } => {
                    log::info!("Player hit, {} lives left", lives_left);
                }
                GameEvent::LevelUp { .. } => {}
                GameEvent::GameOver { final_score } => {
                    hud.show_game_over(Some(*final_score));
                }
            }
        }
    }

    fn update_hud(&self, hud: &mut impl Hud) {
        hud.set_counters(self.state.score, self.state.lives, self.state.level);
    }
}
