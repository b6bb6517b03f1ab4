//! The player's craft

use glam::Vec2;

use super::collision::Rect;
use super::projectile::{Owner, Projectile};
use super::state::Arena;
use crate::consts::*;
use crate::input::{Action, InputState};
use crate::tuning::Tuning;

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1 for right, -1 for left
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub facing: Facing,
    /// Sim time of the last shot (ms); None until the first shot
    pub last_shot_ms: Option<f64>,
    pub shoot_cooldown_ms: f64,
    /// Owned projectiles in fire order
    pub bullets: Vec<Projectile>,
    /// Monotonic animation phase, advances only while moving
    pub animation_frame: f32,
    pub is_moving: bool,
    /// Ticks left in the shooting pose
    pub shoot_timer: u32,
}

impl Player {
    pub fn new(arena: &Arena, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, arena.height - PLAYER_START_BOTTOM_OFFSET),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: tuning.player_speed,
            facing: Facing::Right,
            last_shot_ms: None,
            shoot_cooldown_ms: tuning.player_shoot_cooldown_ms,
            bullets: Vec::new(),
            animation_frame: 0.0,
            is_moving: false,
            shoot_timer: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn is_shooting(&self) -> bool {
        self.shoot_timer > 0
    }

    /// Muzzle flash shows during the first half of the shooting pose
    pub fn muzzle_flash(&self) -> bool {
        self.shoot_timer > MUZZLE_FLASH_TICKS
    }

    /// One tick: movement, firing, animation, projectile upkeep
    pub fn update(&mut self, input: &InputState, arena: &Arena, now_ms: f64, projectile_speed: f32) {
        self.apply_movement(input, arena);

        if input.is_held(Action::Fire) && self.can_fire(now_ms) {
            self.fire(now_ms, projectile_speed);
        }

        if self.is_moving {
            self.animation_frame += PLAYER_ANIMATION_SPEED;
        }
        self.shoot_timer = self.shoot_timer.saturating_sub(1);

        for bullet in &mut self.bullets {
            bullet.advance();
        }
        self.bullets.retain(|b| !b.is_out_of_bounds(arena.width));
    }

    fn apply_movement(&mut self, input: &InputState, arena: &Arena) {
        let max_x = (arena.width - self.size.x).max(0.0);
        let max_y = (arena.height - self.size.y).max(0.0);

        if input.is_held(Action::Up) {
            self.pos.y -= self.speed;
        }
        if input.is_held(Action::Down) {
            self.pos.y += self.speed;
        }
        if input.is_held(Action::Left) {
            self.pos.x -= self.speed;
            self.facing = Facing::Left;
        }
        if input.is_held(Action::Right) {
            self.pos.x += self.speed;
            self.facing = Facing::Right;
        }

        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
        self.is_moving = input.any_direction();
    }

    fn can_fire(&self, now_ms: f64) -> bool {
        match self.last_shot_ms {
            Some(last) => now_ms - last > self.shoot_cooldown_ms,
            None => true,
        }
    }

    /// Muzzle position for the current facing
    pub fn muzzle(&self) -> Vec2 {
        let x = match self.facing {
            Facing::Right => self.pos.x + self.size.x,
            Facing::Left => self.pos.x - PROJECTILE_WIDTH,
        };
        Vec2::new(x, self.pos.y + self.size.y / 2.0)
    }

    fn fire(&mut self, now_ms: f64, projectile_speed: f32) {
        self.bullets.push(Projectile::new(
            self.muzzle(),
            self.facing.sign(),
            projectile_speed,
            Owner::Player,
        ));
        self.last_shot_ms = Some(now_ms);
        self.shoot_timer = SHOOT_ANIMATION_TICKS;
    }
}
