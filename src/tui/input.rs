// Input handling for action keys
//
// Every key on the page is an action (toggle, copy, focus, quit), so each one
// triggers once per press. Terminals that never send Release events would
// otherwise turn a held or bouncing key into a burst of toggles; repeats of
// a still-pressed key only count once the debounce window has passed.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a key that was never released
pub const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Tracks the state of a single key
#[derive(Debug, Clone, Copy)]
struct KeyState {
    is_pressed: bool,
    last_triggered: Instant,
}

/// Press/release tracker for action keys
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    debounce: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_debounce(ACTION_DEBOUNCE)
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            key_states: HashMap::new(),
            debounce,
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        match self.key_states.get_mut(&key) {
            Some(state) if state.is_pressed => {
                if now.duration_since(state.last_triggered) >= self.debounce {
                    state.last_triggered = now;
                    true
                } else {
                    false
                }
            }
            _ => {
                // New key press - always trigger
                self.key_states.insert(
                    key,
                    KeyState {
                        is_pressed: true,
                        last_triggered: now,
                    },
                );
                true
            }
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.is_pressed = false;
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
