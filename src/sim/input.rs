//! Keyboard state and edge detection
//!
//! `InputState` mirrors which keys are currently held. `EdgeLatch` turns
//! that level signal into one-shot press/release edges. A key's latch only
//! changes when it is polled, so a phase that never polls a key never
//! consumes its edges.

use std::collections::HashSet;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Shift,
}

impl Key {
    /// Map a `KeyboardEvent.key` value to a game key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Space),
            "Escape" | "Esc" => Some(Key::Escape),
            "Shift" => Some(Key::Shift),
            _ => None,
        }
    }
}

/// Keys whose browser default behavior is left alone
const PASS_THROUGH: [&str; 4] = ["Meta", "OS", "Control", "Shift"];

/// Whether a key event should keep its default browser action
pub fn passes_through(name: &str) -> bool {
    PASS_THROUGH.contains(&name)
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    down: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    /// Apply a raw key-down event; unknown keys are ignored
    pub fn key_down(&mut self, name: &str) {
        if let Some(key) = Key::from_key_name(name) {
            self.press(key);
        }
    }

    /// Apply a raw key-up event; unknown keys are ignored
    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_key_name(name) {
            self.release(key);
        }
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}

/// A detected transition of a polled key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Per-key "already handled" latch
#[derive(Debug, Clone, Default)]
pub struct EdgeLatch {
    latched: HashSet<Key>,
}

impl EdgeLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll `key` against the current input, returning the edge seen (if any)
    pub fn poll(&mut self, key: Key, input: &InputState) -> Option<Edge> {
        let down = input.is_down(key);
        let latched = self.latched.contains(&key);

        if down && !latched {
            self.latched.insert(key);
            Some(Edge::Pressed)
        } else if !down && latched {
            self.latched.remove(&key);
            Some(Edge::Released)
        } else {
            None
        }
    }

    /// Poll `key` and report only the down→up transition
    pub fn released(&mut self, key: Key, input: &InputState) -> bool {
        self.poll(key, input) == Some(Edge::Released)
    }

    pub fn is_latched(&self, key: Key) -> bool {
        self.latched.contains(&key)
    }
}
