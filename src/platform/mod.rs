//! Platform input boundary
//!
//! Hosts forward raw key and pointer events here as they arrive; the game
//! samples one [`TickInput`] per tick. Held keys and the pointer persist
//! between samples, the restart request is one-shot.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Space: restart after game over
    Action,
}

impl Key {
    /// Map a DOM-style key name (`KeyboardEvent.key`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " | "Space" | "Spacebar" => Some(Key::Action),
            _ => None,
        }
    }
}

/// Current input state, written by event handlers and sampled once per tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pointer_x: Option<f32>,
    restart_requested: bool,
    /// Ignore pointer motion (settings)
    pub pointer_disabled: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Key repeat must not re-arm the restart
        if self.held.insert(key) && key == Key::Action {
            self.restart_requested = true;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Convenience for hosts that deliver key names
    pub fn key_event(&mut self, name: &str, pressed: bool) {
        if let Some(key) = Key::from_name(name) {
            if pressed {
                self.key_down(key);
            } else {
                self.key_up(key);
            }
        }
    }

    /// Pointer moved; `x` in field coordinates
    pub fn pointer_moved(&mut self, x: f32) {
        if !self.pointer_disabled && x > 0.0 {
            self.pointer_x = Some(x);
        }
    }

    /// Pointer left the field; keys take over again
    pub fn pointer_left(&mut self) {
        self.pointer_x = None;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Sample the input for one tick and clear one-shot requests
    pub fn sample(&mut self, idle_mode: bool) -> TickInput {
        let input = TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            pointer_x: self.pointer_x,
            restart: self.restart_requested,
            idle_mode,
        };
        self.restart_requested = false;
        input
    }
}
