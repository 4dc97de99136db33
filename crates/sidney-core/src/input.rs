#![forbid(unsafe_code)]

//! Input-polling collaborator interface.
//!
//! The surface controller polls the pointer and the clock once per frame
//! through [`InputSource`]. Discrete button and key events are delivered
//! separately as [`InputEvent`](crate::event::InputEvent)s.

use crate::event::{Modifiers, MouseButton};

/// Current state of the input devices.
pub trait InputSource {
    /// Pointer position in screen pixels.
    fn pointer(&self) -> (f32, f32);

    /// Monotonic clock in milliseconds.
    fn milliseconds(&self) -> u64;

    /// Whether a mouse button is currently held down.
    fn is_button_held(&self, button: MouseButton) -> bool;

    /// Modifier keys currently held.
    fn modifiers(&self) -> Modifiers;
}

/// Plain input snapshot, filled in by the caller each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    /// Pointer x.
    pub x: f32,
    /// Pointer y.
    pub y: f32,
    /// Clock in milliseconds.
    pub now_ms: u64,
    /// Left button held.
    pub left_held: bool,
    /// Right button held.
    pub right_held: bool,
    /// Held modifier keys.
    pub modifiers: Modifiers,
}

impl InputState {
    /// Snapshot with the pointer at `(x, y)` and the clock at `now_ms`.
    #[must_use]
    pub fn at(x: f32, y: f32, now_ms: u64) -> Self {
        Self {
            x,
            y,
            now_ms,
            ..Self::default()
        }
    }

    /// Set whether the left button is held.
    #[must_use]
    pub fn with_left_held(mut self, held: bool) -> Self {
        self.left_held = held;
        self
    }

    /// Set held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl InputSource for InputState {
    fn pointer(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn milliseconds(&self) -> u64 {
        self.now_ms
    }

    fn is_button_held(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left_held,
            MouseButton::Right => self.right_held,
            MouseButton::Middle => false,
        }
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
