//! HUD counters and overlay panels
//!
//! The page owns the markup; the game only pushes numbers and toggles
//! visibility through the `Hud` trait.

/// External score/lives/level display and start/game-over overlays
pub trait Hud {
    fn set_counters(&mut self, score: u64, lives: u32, level: u32);
    fn set_start_screen_visible(&mut self, visible: bool);
    /// `Some(score)` shows the game-over panel with the final score, `None` hides it
    fn show_game_over(&mut self, final_score: Option<u64>);
}

/// HUD backed by DOM elements (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct DomHud {
    document: web_sys::Document,
    /// Last values written, to skip redundant DOM writes
    last_counters: Option<(u64, u32, u32)>,
}

#[cfg(target_arch = "wasm32")]
impl DomHud {
    pub const SCORE_ID: &'static str = "score";
    pub const LIVES_ID: &'static str = "lives";
    pub const LEVEL_ID: &'static str = "level";
    pub const START_SCREEN_ID: &'static str = "startScreen";
    pub const GAME_OVER_ID: &'static str = "gameOver";
    pub const FINAL_SCORE_ID: &'static str = "finalScore";

    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            last_counters: None,
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.document.get_element_by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::debug!("HUD element #{} not found", id),
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", !visible);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Hud for DomHud {
    fn set_counters(&mut self, score: u64, lives: u32, level: u32) {
        if self.last_counters == Some((score, lives, level)) {
            return;
        }
        self.set_text(Self::SCORE_ID, &score.to_string());
        self.set_text(Self::LIVES_ID, &lives.to_string());
        self.set_text(Self::LEVEL_ID, &level.to_string());
        self.last_counters = Some((score, lives, level));
    }

    fn set_start_screen_visible(&mut self, visible: bool) {
        self.set_visible(Self::START_SCREEN_ID, visible);
    }

    fn show_game_over(&mut self, final_score: Option<u64>) {
        if let Some(score) = final_score {
            self.set_text(Self::FINAL_SCORE_ID, &score.to_string());
        }
        self.set_visible(Self::GAME_OVER_ID, final_score.is_some());
    }
}
