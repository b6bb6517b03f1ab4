//! Particle bursts for kills and player hits
//!
//! A burst is purely decorative: nothing in the simulation reads it back.

use glam::Vec2;
use rand::Rng;

/// Burst lifetime in ticks
pub const EXPLOSION_LIFE: u32 = 40;

pub const PRIMARY_COUNT: usize = 15;
pub const SPARKLE_COUNT: usize = 10;
pub const RING_COUNT: usize = 8;

const PRIMARY_LIFE: u32 = 40;
const SPARKLE_LIFE: u32 = 30;
const RING_LIFE: u32 = 25;

/// Downward pull on primary particles (px/tick²)
const GRAVITY: f32 = 0.2;
const RING_SPEED: f32 = 12.0;

const PALETTE: [&str; 15] = [
    "#FF0000", "#FF4500", "#FFD700", "#FFFF00", "#FF69B4", "#00FF00", "#00FFFF", "#0080FF",
    "#8A2BE2", "#FF1493", "#FFA500", "#FF6347", "#32CD32", "#1E90FF", "#DA70D6",
];

/// Physics/drawing profile of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Heavy debris: drag plus gravity, drawn as a square
    Primary,
    /// Light glints: mild drag, drawn as a plus
    Sparkle,
    /// Shock ring: strong drag, drawn as a hollow circle
    Ring,
}

impl ParticleKind {
    /// Velocity multiplier applied every tick
    pub fn drag(&self) -> f32 {
        match self {
            ParticleKind::Primary => 0.95,
            ParticleKind::Sparkle => 0.98,
            ParticleKind::Ring => 0.92,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub color: &'static str,
    pub size: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// Opacity, 1.0 when fresh and 0.0 when spent
    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }

    fn advance(&mut self) {
        self.pos += self.vel;
        self.vel *= self.kind.drag();
        if self.kind == ParticleKind::Primary {
            self.vel.y += GRAVITY;
        }
        self.life = self.life.saturating_sub(1);
    }
}

/// An explosion: a fixed set of particles sharing one lifetime counter
#[derive(Debug, Clone)]
pub struct Explosion {
    pub origin: Vec2,
    pub life: u32,
    pub particles: Vec<Particle>,
}

impl Explosion {
    pub fn new(origin: Vec2, rng: &mut impl Rng) -> Self {
        let mut particles = Vec::with_capacity(PRIMARY_COUNT + SPARKLE_COUNT + RING_COUNT);

        for _ in 0..PRIMARY_COUNT {
            particles.push(Particle {
                pos: origin,
                vel: Vec2::new(spread(rng, 15.0), spread(rng, 15.0)),
                life: PRIMARY_LIFE,
                max_life: PRIMARY_LIFE,
                color: random_color(rng),
                size: rng.random_range(2.0..8.0),
                kind: ParticleKind::Primary,
            });
        }

        for _ in 0..SPARKLE_COUNT {
            particles.push(Particle {
                pos: origin + Vec2::new(spread(rng, 20.0), spread(rng, 20.0)),
                vel: Vec2::new(spread(rng, 8.0), spread(rng, 8.0)),
                life: SPARKLE_LIFE,
                max_life: SPARKLE_LIFE,
                color: "#FFFFFF",
                size: rng.random_range(1.0..4.0),
                kind: ParticleKind::Sparkle,
            });
        }

        for i in 0..RING_COUNT {
            let angle = i as f32 / RING_COUNT as f32 * std::f32::consts::TAU;
            particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * RING_SPEED,
                life: RING_LIFE,
                max_life: RING_LIFE,
                color: random_color(rng),
                size: 4.0,
                kind: ParticleKind::Ring,
            });
        }

        Self {
            origin,
            life: EXPLOSION_LIFE,
            particles,
        }
    }

    /// Step every particle one tick and drop spent ones
    pub fn advance(&mut self) {
        self.life = self.life.saturating_sub(1);
        for particle in &mut self.particles {
            particle.advance();
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn is_expired(&self) -> bool {
        self.life == 0
    }
}

/// Uniform sample in [-width/2, width/2)
fn spread(rng: &mut impl Rng, width: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * width
}

fn random_color(rng: &mut impl Rng) -> &'static str {
    PALETTE[rng.random_range(0..PALETTE.len())]
}
