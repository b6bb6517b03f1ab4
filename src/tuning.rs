//! Data-driven game balance
//!
//! Defaults reproduce the classic arcade feel. A page (or the native
//! binary) can override any subset of fields with JSON.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Lives at session start
    pub starting_lives: u32,
    /// Pixels per tick in each held direction
    pub player_speed: f32,
    /// Minimum time between player shots (ms)
    pub player_shoot_cooldown_ms: f64,

    // === Projectiles ===
    /// Pixels per tick, both sides
    pub projectile_speed: f32,

    // === Enemies ===
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub enemy_cooldown_min_ms: f64,
    pub enemy_cooldown_max_ms: f64,
    /// Chance that a spawn is a strong enemy
    pub strong_enemy_chance: f64,

    // === Difficulty ===
    /// Per-tick spawn probability at level 0
    pub spawn_base_rate: f64,
    /// Added to the spawn probability per level
    pub spawn_rate_per_level: f64,
    /// Level N ends once score exceeds N * threshold
    pub level_score_threshold: u64,
    /// Game speed at level 1
    pub base_game_speed: f32,
    /// Game speed gained per level
    pub game_speed_per_level: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            player_speed: 5.0,
            player_shoot_cooldown_ms: 200.0,

            projectile_speed: 8.0,

            enemy_speed_min: 0.5,
            enemy_speed_max: 1.5,
            enemy_cooldown_min_ms: 1500.0,
            enemy_cooldown_max_ms: 4000.0,
            strong_enemy_chance: 0.2,

            spawn_base_rate: 0.02,
            spawn_rate_per_level: 0.005,
            level_score_threshold: 1000,
            base_game_speed: 2.0,
            game_speed_per_level: 0.5,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check ranges and probabilities
    pub fn validate(&self) -> Result<()> {
        if self.starting_lives == 0 {
            return Err(GameError::InvalidTuning("starting_lives must be at least 1".into()));
        }
        if !(self.enemy_speed_min > 0.0 && self.enemy_speed_min <= self.enemy_speed_max) {
            return Err(GameError::InvalidTuning(format!(
                "enemy speed range {}..{} is empty or non-positive",
                self.enemy_speed_min, self.enemy_speed_max
            )));
        }
        if !(self.enemy_cooldown_min_ms >= 0.0
            && self.enemy_cooldown_min_ms <= self.enemy_cooldown_max_ms)
        {
            return Err(GameError::InvalidTuning(format!(
                "enemy cooldown range {}..{} is empty",
                self.enemy_cooldown_min_ms, self.enemy_cooldown_max_ms
            )));
        }
        for (name, p) in [
            ("strong_enemy_chance", self.strong_enemy_chance),
            ("spawn_base_rate", self.spawn_base_rate),
            ("spawn_rate_per_level", self.spawn_rate_per_level),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GameError::InvalidTuning(format!("{name} must be in 0..=1, got {p}")));
            }
        }
        if self.level_score_threshold == 0 {
            return Err(GameError::InvalidTuning("level_score_threshold must be positive".into()));
        }
        if !(self.game_speed_per_level >= 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "game_speed_per_level must be non-negative, got {}",
                self.game_speed_per_level
            )));
        }
        if self.player_speed <= 0.0 || self.projectile_speed <= 0.0 || self.base_game_speed <= 0.0 {
            return Err(GameError::InvalidTuning("speeds must be positive".into()));
        }
        Ok(())
    }

    /// Per-tick spawn probability at the given level (capped at 1)
    pub fn spawn_chance(&self, level: u32) -> f64 {
        (self.spawn_base_rate + level as f64 * self.spawn_rate_per_level).min(1.0)
    }

    /// Read and parse a tuning file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path);
        Ok(tuning)
    }

    /// Read an inline `<script id="tuning" type="application/json">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_page() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from page");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring page tuning: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
