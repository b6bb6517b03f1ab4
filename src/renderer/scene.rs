//! Scene drawing for the 2D surface
//!
//! Pure reads of simulation state; every function takes the surface it
//! paints on.

use super::Surface;
use crate::sim::{Arena, Enemy, Explosion, Facing, ParticleKind, Player, Projectile};

const SKY: &str = "#87CEEB";
const GROUND: &str = "#228B22";
const CLOUD: &str = "rgba(255, 255, 255, 0.8)";
pub const CLOUD_COUNT: usize = 5;

const UFO_LIGHTS: [&str; 5] = ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"];

/// Sky gradient plus drifting clouds. Cloud offsets are a function of
/// `time_ms` alone, so nothing needs to be stored between frames.
pub fn draw_background(surface: &mut impl Surface, arena: &Arena, time_ms: f64) {
    surface.clear(arena.width, arena.height);
    surface.set_fill_vertical_gradient(0.0, arena.height, &[(0.0, SKY), (1.0, GROUND)]);
    surface.fill_rect(0.0, 0.0, arena.width, arena.height);

    surface.set_fill_color(CLOUD);
    for i in 0..CLOUD_COUNT {
        let (x, y) = cloud_position(arena, time_ms, i);
        surface.begin_path();
        surface.circle(x, y, 20.0);
        surface.circle(x + 20.0, y, 30.0);
        surface.circle(x + 40.0, y, 20.0);
        surface.fill();
    }
}

/// Position of cloud `i` at `time_ms`
pub fn cloud_position(arena: &Arena, time_ms: f64, i: usize) -> (f32, f32) {
    let span = arena.width as f64 + 100.0;
    let x = (time_ms * 0.02 + i as f64 * 200.0).rem_euclid(span);
    (x as f32, 50.0 + i as f32 * 30.0)
}

pub fn draw_projectile(surface: &mut impl Surface, projectile: &Projectile) {
    let Projectile { pos, size, owner, .. } = projectile;
    surface.set_fill_color(owner.color());
    surface.fill_rect(pos.x, pos.y, size.x, size.y);

    surface.set_fill_color(owner.trail_color());
    surface.fill_rect(pos.x - 5.0, pos.y + 1.0, 5.0, 2.0);
}

/// UFO with a seated pilot, muzzle flash and owned projectiles
pub fn draw_player(surface: &mut impl Surface, player: &Player) {
    draw_ufo(surface, player);

    if player.muzzle_flash() {
        let flash_x = match player.facing {
            Facing::Right => player.pos.x + player.size.x + 5.0,
            Facing::Left => player.pos.x - 10.0,
        };
        let mid_y = player.pos.y + player.size.y / 2.0;
        surface.set_fill_color("#FFFF00");
        surface.fill_rect(flash_x, mid_y - 2.0, 8.0, 4.0);
        surface.set_fill_color("#FF8800");
        surface.fill_rect(flash_x + 2.0, mid_y - 1.0, 4.0, 2.0);
    }

    for bullet in &player.bullets {
        draw_projectile(surface, bullet);
    }
}

fn draw_ufo(surface: &mut impl Surface, player: &Player) {
    let x = player.pos.x;
    let frame = player.animation_frame;
    let y = player.pos.y + (frame * 0.3).sin() * 3.0;

    surface.save();
    if player.facing == Facing::Left {
        surface.scale(-1.0, 1.0);
        surface.translate(-(x + player.size.x / 2.0) * 2.0, 0.0);
    }

    // Saucer disc and dome
    surface.set_fill_color("#C0C0C0");
    surface.fill_rect(x - 8.0, y + 25.0, 48.0, 8.0);
    surface.set_fill_color("#E6E6FA");
    surface.fill_rect(x + 4.0, y + 15.0, 24.0, 10.0);
    surface.fill_rect(x + 8.0, y + 10.0, 16.0, 5.0);

    // Running lights cycle with the animation phase
    let offset = (frame * 0.5).floor() as usize;
    for i in 0..UFO_LIGHTS.len() {
        surface.set_fill_color(UFO_LIGHTS[(offset + i) % UFO_LIGHTS.len()]);
        surface.fill_rect(x - 4.0 + i as f32 * 8.0, y + 28.0, 4.0, 2.0);
    }

    // Pilot: head, hair, eyes, uniform
    surface.set_fill_color("#FDBCB4");
    surface.fill_rect(x + 12.0, y + 5.0, 8.0, 8.0);
    surface.set_fill_color("#8B4513");
    surface.fill_rect(x + 10.0, y + 3.0, 12.0, 4.0);
    surface.set_fill_color("#000");
    surface.fill_rect(x + 13.0, y + 7.0, 1.0, 1.0);
    surface.fill_rect(x + 17.0, y + 7.0, 1.0, 1.0);
    surface.set_fill_color("#228B22");
    surface.fill_rect(x + 10.0, y + 13.0, 12.0, 12.0);

    surface.set_fill_color("#FDBCB4");
    if player.is_shooting() {
        surface.fill_rect(x + 22.0, y + 15.0, 6.0, 3.0);
        surface.fill_rect(x + 28.0, y + 14.0, 4.0, 5.0);
        surface.fill_rect(x + 4.0, y + 16.0, 3.0, 5.0);
    } else {
        surface.fill_rect(x + 22.0, y + 16.0, 3.0, 5.0);
        surface.fill_rect(x + 7.0, y + 16.0, 3.0, 5.0);
    }

    if player.is_moving {
        surface.set_fill_color("rgba(0, 255, 255, 0.3)");
        surface.fill_rect(x + 8.0, y + 33.0, 16.0, 8.0);
        surface.set_fill_color("rgba(255, 255, 255, 0.5)");
        surface.fill_rect(x + 12.0, y + 35.0, 8.0, 4.0);
    }

    surface.restore();
}

/// Hull, eyes, optional health bar, projectiles
pub fn draw_enemy(surface: &mut impl Surface, enemy: &Enemy) {
    let (x, y) = (enemy.pos.x, enemy.pos.y);
    let w = enemy.size.x;

    surface.set_fill_color(enemy.kind.color());
    surface.fill_rect(x, y, w, enemy.size.y);

    surface.set_fill_color("#000");
    surface.fill_rect(x + 5.0, y + 5.0, 8.0, 8.0);
    surface.fill_rect(x + 22.0, y + 5.0, 8.0, 8.0);

    if enemy.shows_health_bar() {
        surface.set_fill_color("#ff0000");
        surface.fill_rect(x, y - 8.0, w, 4.0);
        surface.set_fill_color("#00ff00");
        surface.fill_rect(x, y - 8.0, enemy.health_fraction() * w, 4.0);
    }

    for bullet in &enemy.bullets {
        draw_projectile(surface, bullet);
    }
}

/// Particles fade with remaining life
pub fn draw_explosion(surface: &mut impl Surface, explosion: &Explosion) {
    for p in &explosion.particles {
        let alpha = p.alpha();
        surface.set_global_alpha(alpha);

        match p.kind {
            ParticleKind::Sparkle => {
                let arm = p.size * alpha;
                surface.set_fill_color(p.color);
                surface.fill_rect(p.pos.x - arm / 2.0, p.pos.y - 1.0, arm, 2.0);
                surface.fill_rect(p.pos.x - 1.0, p.pos.y - arm / 2.0, 2.0, arm);
            }
            ParticleKind::Ring => {
                surface.set_stroke(p.color, 2.0);
                surface.begin_path();
                surface.circle(p.pos.x, p.pos.y, p.size * alpha * 2.0);
                surface.stroke();
            }
            ParticleKind::Primary => {
                surface.set_fill_color(p.color);
                surface.fill_rect(p.pos.x - p.size / 2.0, p.pos.y - p.size / 2.0, p.size, p.size);
            }
        }
    }
    surface.set_global_alpha(1.0);
}
