//! 2D rendering module
//!
//! The scene is painted through the `Surface` trait, which mirrors the
//! subset of the canvas 2D API the game needs. The browser build implements
//! it over `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sim::GameState;

/// Immediate-mode 2D drawing target (arena pixel coordinates)
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn set_fill_color(&mut self, color: &str);
    /// Fill with a top-to-bottom gradient; stops are (offset 0..=1, color)
    fn set_fill_vertical_gradient(&mut self, top: f32, bottom: f32, stops: &[(f32, &str)]);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_stroke(&mut self, color: &str, line_width: f32);
    fn begin_path(&mut self);
    /// Add a full circle to the current path
    fn circle(&mut self, x: f32, y: f32, radius: f32);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_global_alpha(&mut self, alpha: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn scale(&mut self, x: f32, y: f32);
    fn translate(&mut self, x: f32, y: f32);
}

/// Paint one frame. Entities are only drawn while a session is active;
/// the start and game-over screens show the bare background.
pub fn render(state: &GameState, surface: &mut impl Surface, time_ms: f64) {
    scene::draw_background(surface, &state.arena, time_ms);

    if !state.is_active() {
        return;
    }

    scene::draw_player(surface, &state.player);
    for enemy in &state.enemies {
        scene::draw_enemy(surface, enemy);
    }
    for explosion in &state.explosions {
        scene::draw_explosion(surface, explosion);
    }
}
