//! Game state and session lifecycle
//!
//! Everything the simulation step mutates and the render step reads lives
//! in one owned `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::enemy::{Enemy, EnemyKind};
use super::explosion::Explosion;
use super::player::Player;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::tuning::Tuning;

/// Visible play area in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen showing, nothing simulated yet
    NotStarted,
    /// Active gameplay
    Active,
    /// Lives exhausted
    Ended,
}

/// Notable things that happened during a tick (consumed by the driver)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EnemyKilled { kind: EnemyKind, points: u64 },
    EnemyEscaped,
    PlayerHit { lives_left: u32 },
    LevelUp { level: u32 },
    GameOver { final_score: u64 },
}

/// Complete world state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub arena: Arena,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// 1-based
    pub level: u32,
    /// Difficulty scalar, grows each level
    pub game_speed: f32,
    /// Simulation clock (ms), advanced by each tick
    pub time_ms: f64,
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Fresh state on the start screen
    pub fn new(arena: Arena, tuning: Tuning, seed: u64) -> Self {
        Self {
            player: Player::new(&arena, &tuning),
            phase: GamePhase::NotStarted,
            score: 0,
            lives: tuning.starting_lives,
            level: 1,
            game_speed: tuning.base_game_speed,
            time_ms: 0.0,
            time_ticks: 0,
            enemies: Vec::new(),
            explosions: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            arena,
        }
    }

    /// Reset score, lives, level and all entities (phase is untouched)
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.level = 1;
        self.game_speed = self.tuning.base_game_speed;
        self.time_ms = 0.0;
        self.time_ticks = 0;
        self.player = Player::new(&self.arena, &self.tuning);
        self.enemies.clear();
        self.explosions.clear();
        self.events.clear();
    }

    /// Reset and enter active play (start and restart)
    pub fn start(&mut self) {
        self.reset();
        self.phase = GamePhase::Active;
        log::info!(
            "Session started: {}x{} arena, {} lives",
            self.arena.width,
            self.arena.height,
            self.lives
        );
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Difficulty multiplier relative to level 1
    pub fn speed_multiplier(&self) -> f32 {
        self.game_speed / self.tuning.base_game_speed
    }

    /// Take one life; ends the session the first time lives hit zero
    pub(crate) fn lose_life(&mut self) {
        if self.lives == 0 {
            return;
        }
        self.lives -= 1;
        self.events.push(GameEvent::PlayerHit { lives_left: self.lives });
        if self.lives == 0 {
            self.phase = GamePhase::Ended;
            self.events.push(GameEvent::GameOver { final_score: self.score });
            log::info!("Game over: score {} at level {}", self.score, self.level);
        }
    }

    /// Add an enemy of the given kind at `pos`, rolled from the session RNG
    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2) {
        let multiplier = self.speed_multiplier();
        let enemy = Enemy::new(kind, pos, &mut self.rng, &self.tuning, multiplier);
        log::trace!("Spawned {:?} enemy at y={:.0}", kind, pos.y);
        self.enemies.push(enemy);
    }

    /// Start a particle burst centered on `at`
    pub fn spawn_explosion(&mut self, at: Vec2) {
        let burst = Explosion::new(at, &mut self.rng);
        self.explosions.push(burst);
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
