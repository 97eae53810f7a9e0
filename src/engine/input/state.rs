// Held state and press edges of every bound action between two ticks

use super::action::Action;
use std::collections::HashSet;

/// Which actions are held, and which went down since the last tick consumed input
///
/// Edges accumulate across however many window events arrive between ticks,
/// so a tap shorter than one tick still registers as a press.
#[derive(Debug, Default)]
pub struct ActionState {
    held: HashSet<Action>,
    pressed_since_tick: HashSet<Action>,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Went down since the last tick
    pub fn pressed(&self, action: Action) -> bool {
        self.pressed_since_tick.contains(&action)
    }

    /// Key repeats of an already held action are not new presses
    pub(crate) fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            self.pressed_since_tick.insert(action);
        }
    }

    pub(crate) fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    /// A tick consumed the presses; held actions carry over
    pub(crate) fn end_tick(&mut self) {
        self.pressed_since_tick.clear();
    }

    /// Forget everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
        self.end_tick();
    }

    /// Key axis in [-1, 1]; holding both directions cancels out
    pub fn horizontal_axis(&self) -> f32 {
        let left = if self.is_held(Action::MoveLeft) { 1.0 } else { 0.0 };
        let right = if self.is_held(Action::MoveRight) { 1.0 } else { 0.0 };
        right - left
    }
}
