//! Straight-flying shots fired by the player and by enemies

use glam::Vec2;

use super::collision::Rect;
use crate::consts::{PROJECTILE_HEIGHT, PROJECTILE_WIDTH};

/// Which side fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

impl Owner {
    /// Body color
    pub fn color(&self) -> &'static str {
        match self {
            Owner::Player => "#ffff00",
            Owner::Enemy => "#ff0000",
        }
    }

    /// Trail color drawn behind the body
    pub fn trail_color(&self) -> &'static str {
        match self {
            Owner::Player => "rgba(255, 255, 0, 0.5)",
            Owner::Enemy => "rgba(255, 0, 0, 0.5)",
        }
    }
}

/// A projectile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Signed pixels per tick (negative = leftward)
    pub vel_x: f32,
    pub owner: Owner,
}

impl Projectile {
    /// `direction` is +1 for rightward, -1 for leftward
    pub fn new(pos: Vec2, direction: f32, speed: f32, owner: Owner) -> Self {
        Self {
            pos,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            vel_x: direction.signum() * speed,
            owner,
        }
    }

    /// Move one tick
    pub fn advance(&mut self) {
        self.pos.x += self.vel_x;
    }

    /// True once fully past either horizontal edge
    pub fn is_out_of_bounds(&self, arena_width: f32) -> bool {
        self.pos.x + self.size.x <= 0.0 || self.pos.x >= arena_width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}
