//! Sky Raider - A side-scrolling UFO arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (actors, projectiles, explosions, collisions, game state)
//! - `renderer`: 2D canvas rendering through the `Surface` trait
//! - `game`: Frame driver (fixed timestep, HUD refresh, start/restart)
//! - `input`: Held-key state read once per tick
//! - `ui`: HUD counters and overlays
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::GameError;
pub use game::Game;
pub use input::{Action, InputState};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const SIM_DT_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta fed into the accumulator (tab switches etc.)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Default arena size (the canvas overrides it in the browser)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player craft
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_START_X: f32 = 50.0;
    /// Spawn height measured up from the bottom edge
    pub const PLAYER_START_BOTTOM_OFFSET: f32 = 100.0;
    /// Animation phase gained per tick while moving
    pub const PLAYER_ANIMATION_SPEED: f32 = 0.2;
    /// Ticks the shooting pose is held after a shot
    pub const SHOOT_ANIMATION_TICKS: u32 = 10;
    /// Muzzle flash is drawn while the shooting timer is above this
    pub const MUZZLE_FLASH_TICKS: u32 = 5;

    /// Projectiles
    pub const PROJECTILE_WIDTH: f32 = 8.0;
    pub const PROJECTILE_HEIGHT: f32 = 4.0;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 35.0;
    /// Enemies hold fire until they are this far inside the right edge
    pub const ENEMY_FIRE_MARGIN: f32 = 100.0;
    /// Enemy muzzle offset to the left of the body
    pub const ENEMY_MUZZLE_OFFSET: f32 = 10.0;
    /// Wave pattern: y += sin(t * WAVE_FREQUENCY + phase) * WAVE_AMPLITUDE
    pub const WAVE_FREQUENCY: f64 = 0.003;
    pub const WAVE_AMPLITUDE: f32 = 2.0;
    /// Spawn band keeps this much clearance from top and bottom
    pub const SPAWN_MARGIN: f32 = 50.0;
}
