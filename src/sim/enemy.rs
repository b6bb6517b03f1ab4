//! Enemy craft entering from the right edge

use glam::Vec2;
use rand::Rng;
use rand::distr::uniform::SampleUniform;

use super::collision::Rect;
use super::projectile::{Owner, Projectile};
use super::state::Arena;
use crate::consts::*;
use crate::tuning::Tuning;

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyKind {
    #[default]
    Basic,
    Strong,
}

impl EnemyKind {
    pub fn max_health(&self) -> u32 {
        match self {
            EnemyKind::Basic => 1,
            EnemyKind::Strong => 3,
        }
    }

    /// Score for destroying one
    pub fn points(&self) -> u64 {
        match self {
            EnemyKind::Basic => 100,
            EnemyKind::Strong => 300,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EnemyKind::Basic => "#ff4444",
            EnemyKind::Strong => "#ff8800",
        }
    }
}

/// Movement patterns
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovePattern {
    Straight,
    /// Sinusoidal bob with a per-enemy phase (radians)
    Wave { phase: f32 },
}

#[derive(Debug, Clone)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick, leftward
    pub speed: f32,
    pub kind: EnemyKind,
    pub health: u32,
    pub max_health: u32,
    pub pattern: MovePattern,
    /// Sim time of the last shot (ms); None until the first shot
    pub last_shot_ms: Option<f64>,
    pub shoot_cooldown_ms: f64,
    pub bullets: Vec<Projectile>,
}

impl Enemy {
    /// Roll a new enemy. `speed_multiplier` scales the sampled speed with difficulty.
    pub fn new(
        kind: EnemyKind,
        pos: Vec2,
        rng: &mut impl Rng,
        tuning: &Tuning,
        speed_multiplier: f32,
    ) -> Self {
        let speed = sample_span(rng, tuning.enemy_speed_min, tuning.enemy_speed_max) * speed_multiplier;
        let shoot_cooldown_ms =
            sample_span(rng, tuning.enemy_cooldown_min_ms, tuning.enemy_cooldown_max_ms);
        let pattern = if rng.random_bool(0.5) {
            MovePattern::Straight
        } else {
            MovePattern::Wave {
                phase: rng.random_range(0.0..std::f32::consts::TAU),
            }
        };

        Self {
            pos,
            size: Vec2::splat(ENEMY_SIZE),
            speed,
            kind,
            health: kind.max_health(),
            max_health: kind.max_health(),
            pattern,
            last_shot_ms: None,
            shoot_cooldown_ms,
            bullets: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn points(&self) -> u64 {
        self.kind.points()
    }

    /// Multi-hit enemies get a health bar
    pub fn shows_health_bar(&self) -> bool {
        self.max_health > 1
    }

    /// Fraction of health left, 0..=1
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Fully past the left edge
    pub fn has_escaped(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }

    /// Lose one health point. Returns true if the enemy is now destroyed.
    pub fn take_damage(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    /// One tick: movement, firing, projectile upkeep
    pub fn update(&mut self, arena: &Arena, now_ms: f64, projectile_speed: f32) {
        self.pos.x -= self.speed;
        if let MovePattern::Wave { phase } = self.pattern {
            let bob = (now_ms * WAVE_FREQUENCY + phase as f64).sin() as f32;
            self.pos.y += bob * WAVE_AMPLITUDE;
        }
        self.pos.y = self.pos.y.clamp(0.0, (arena.height - self.size.y).max(0.0));

        if self.can_fire(now_ms) && self.pos.x < arena.width - ENEMY_FIRE_MARGIN {
            self.fire(projectile_speed);
            self.last_shot_ms = Some(now_ms);
        }

        for bullet in &mut self.bullets {
            bullet.advance();
        }
        self.bullets.retain(|b| !b.is_out_of_bounds(arena.width));
    }

    fn can_fire(&self, now_ms: f64) -> bool {
        match self.last_shot_ms {
            Some(last) => now_ms - last > self.shoot_cooldown_ms,
            None => true,
        }
    }

    fn fire(&mut self, projectile_speed: f32) {
        let muzzle = Vec2::new(
            self.pos.x - ENEMY_MUZZLE_OFFSET,
            self.pos.y + self.size.y / 2.0,
        );
        self.bullets.push(Projectile::new(muzzle, -1.0, projectile_speed, Owner::Enemy));
    }
}

/// Uniform sample in [min, max); a collapsed range yields `min`
fn sample_span<T: SampleUniform + PartialOrd + Copy>(rng: &mut impl Rng, min: T, max: T) -> T {
    if min < max { rng.random_range(min..max) } else { min }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy(kind: EnemyKind, x: f32, y: f32) -> Enemy {
        let mut rng = Pcg32::seed_from_u64(42);
        Enemy::new(kind, Vec2::new(x, y), &mut rng, &Tuning::default(), 1.0)
    }

    #[test]
    fn test_kind_stats() {
        let basic = enemy(EnemyKind::Basic, 800.0, 100.0);
        let strong = enemy(EnemyKind::Strong, 800.0, 100.0);
        assert_eq!(basic.health, 1);
        assert_eq!(strong.health, 3);
        assert_eq!(basic.points(), 100);
        assert_eq!(strong.points(), 300);
        assert!(!basic.shows_health_bar());
        assert!(strong.shows_health_bar());
    }

    #[test]
    fn test_rolls_within_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut saw_wave = false;
        let mut saw_straight = false;
        for _ in 0..200 {
            let e = Enemy::new(EnemyKind::Basic, Vec2::ZERO, &mut rng, &tuning, 1.0);
            assert!((0.5..1.5).contains(&e.speed));
            assert!((1500.0..4000.0).contains(&e.shoot_cooldown_ms));
            match e.pattern {
                MovePattern::Straight => saw_straight = true,
                MovePattern::Wave { phase } => {
                    saw_wave = true;
                    assert!((0.0..std::f32::consts::TAU).contains(&phase));
                }
            }
        }
        assert!(saw_wave && saw_straight);
    }

    #[test]
    fn test_fixed_ranges_roll_their_minimum() {
        let tuning = Tuning {
            enemy_speed_min: 1.0,
            enemy_speed_max: 1.0,
            enemy_cooldown_min_ms: 2000.0,
            enemy_cooldown_max_ms: 2000.0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let e = Enemy::new(EnemyKind::Basic, Vec2::ZERO, &mut rng, &tuning, 1.0);
        assert_eq!(e.speed, 1.0);
        assert_eq!(e.shoot_cooldown_ms, 2000.0);
    }

    proptest! {
        #[test]
        fn rolls_exclude_upper_bound(seed: u64, lo in 0.1f32..5.0, width in 0.001f32..5.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let hi = lo + width;
            prop_assume!(lo < hi);
            let v = sample_span(&mut rng, lo, hi);
            prop_assert!(v >= lo && v < hi);
        }
    }

    #[test]
    fn test_speed_multiplier() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(9);
        let mut b = Pcg32::seed_from_u64(9);
        let slow = Enemy::new(EnemyKind::Basic, Vec2::ZERO, &mut a, &tuning, 1.0);
        let fast = Enemy::new(EnemyKind::Basic, Vec2::ZERO, &mut b, &tuning, 1.5);
        assert!((fast.speed - slow.speed * 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_take_damage_strong() {
        let mut e = enemy(EnemyKind::Strong, 400.0, 100.0);
        assert!(!e.take_damage());
        assert!(!e.take_damage());
        assert!(e.take_damage());
        assert_eq!(e.health, 0);
        // Saturates instead of underflowing
        assert!(e.take_damage());
        assert_eq!(e.health, 0);
    }

    #[test]
    fn test_holds_fire_near_right_edge() {
        let arena = Arena::default();
        let mut e = enemy(EnemyKind::Basic, arena.width, 100.0);
        e.update(&arena, 10_000.0, 8.0);
        assert!(e.bullets.is_empty());

        e.pos.x = arena.width - 200.0;
        e.update(&arena, 10_016.0, 8.0);
        assert_eq!(e.bullets.len(), 1);
        let b = &e.bullets[0];
        assert_eq!(b.owner, Owner::Enemy);
        assert!(b.vel_x < 0.0);

        // Cooldown blocks the next shot
        e.update(&arena, 10_032.0, 8.0);
        assert_eq!(e.bullets.len(), 1);
        e.update(&arena, 10_032.0 + e.shoot_cooldown_ms + 1.0, 8.0);
        assert_eq!(e.bullets.len(), 2);
    }

    #[test]
    fn test_moves_left_and_escapes() {
        let arena = Arena::default();
        let mut e = enemy(EnemyKind::Basic, 0.0, 100.0);
        e.pattern = MovePattern::Straight;
        e.speed = 1.0;
        let y = e.pos.y;
        e.update(&arena, 0.0, 8.0);
        assert_eq!(e.pos.x, -1.0);
        assert_eq!(e.pos.y, y);
        assert!(!e.has_escaped());
        e.pos.x = -ENEMY_SIZE + 0.5;
        e.update(&arena, 16.0, 8.0);
        assert!(e.has_escaped());
    }

    #[test]
    fn test_wave_clamped_to_arena() {
        let arena = Arena::default();
        let mut e = enemy(EnemyKind::Basic, 400.0, 0.0);
        e.pattern = MovePattern::Wave { phase: -std::f32::consts::FRAC_PI_2 };
        // sin(0 * f - pi/2) = -1, pushing upward past the top
        e.update(&arena, 0.0, 8.0);
        assert_eq!(e.pos.y, 0.0);

        e.pos.y = arena.height - ENEMY_SIZE;
        e.pattern = MovePattern::Wave { phase: std::f32::consts::FRAC_PI_2 };
        e.update(&arena, 0.0, 8.0);
        assert_eq!(e.pos.y, arena.height - ENEMY_SIZE);
    }

    #[test]
    fn test_enemy_bullets_pruned_off_left() {
        let arena = Arena::default();
        let mut e = enemy(EnemyKind::Basic, 900.0, 100.0);
        e.bullets.push(Projectile::new(Vec2::new(-2.0, 10.0), -1.0, 8.0, Owner::Enemy));
        e.update(&arena, 0.0, 8.0);
        assert!(e.bullets.is_empty());
    }

    proptest! {
        #[test]
        fn health_never_increases(hits in 0usize..10, strong: bool) {
            let kind = if strong { EnemyKind::Strong } else { EnemyKind::Basic };
            let mut e = enemy(kind, 400.0, 100.0);
            let mut prev = e.health;
            for _ in 0..hits {
                let destroyed = e.take_damage();
                prop_assert!(e.health <= prev);
                prop_assert!(e.health <= e.max_health);
                prop_assert_eq!(destroyed, e.health == 0);
                prev = e.health;
            }
        }
    }
}
