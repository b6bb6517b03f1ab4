//! Held-key input state
//!
//! The host flips keys on and off as keyboard events arrive; the simulation
//! only reads the snapshot at the top of each player update.

use std::collections::HashSet;

/// Logical input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Action {
    pub const DIRECTIONS: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Map a key identifier (case-insensitive) to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "up" | "w" | "arrowup" => Some(Action::Up),
            "down" | "s" | "arrowdown" => Some(Action::Down),
            "left" | "a" | "arrowleft" => Some(Action::Left),
            "right" | "d" | "arrowright" => Some(Action::Right),
            "fire" | "space" | " " => Some(Action::Fire),
            _ => None,
        }
    }
}

/// Set of currently held actions
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press/release. Returns true if the key maps to an action.
    pub fn set_key(&mut self, key: &str, held: bool) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.set(action, held);
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, action: Action, held: bool) {
        if held {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// True if any of up/down/left/right is held
    pub fn any_direction(&self) -> bool {
        Action::DIRECTIONS.iter().any(|a| self.is_held(*a))
    }

    /// Release everything (focus loss, restart)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
