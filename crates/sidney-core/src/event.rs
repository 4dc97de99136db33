#![forbid(unsafe_code)]

//! Event names, event arguments and raw input vocabulary.
//!
//! Element events are identified by snake_case names (see [`names`]). Raw
//! input arriving from the windowing layer is expressed as [`InputEvent`]
//! and translated into element events by the surface controller.
//!
//! # Design Notes
//!
//! - Pointer coordinates are real-valued screen pixels
//! - `Modifiers` use bitflags for easy combination
//! - Text entry and key presses are separate: printable input arrives as
//!   [`InputEvent::Text`], editing keys as [`InputEvent::Key`]

use bitflags::bitflags;

use crate::value::Value;

/// Conventional event names published on elements and the history.
pub mod names {
    /// Pointer entered the element.
    pub const ENTER: &str = "enter";
    /// Pointer left the element.
    pub const LEAVE: &str = "leave";
    /// Pointer is over the element (every frame).
    pub const HOVER: &str = "hover";
    /// Left button pressed over the element.
    pub const LEFT_MOUSE_BUTTON: &str = "left_mouse_button";
    /// Left button released over the element.
    pub const RELEASED_LEFT_MOUSE_BUTTON: &str = "released_left_mouse_button";
    /// Left button pressed and released over the same element.
    pub const CLICKED_LEFT_MOUSE_BUTTON: &str = "clicked_left_mouse_button";
    /// Left button held and the pointer moved since the press.
    pub const HOLDING_LEFT_MOUSE_BUTTON: &str = "holding_left_mouse_button";
    /// Right button pressed over the element.
    pub const RIGHT_MOUSE_BUTTON: &str = "right_mouse_button";
    /// Right button released over the element.
    pub const RELEASED_RIGHT_MOUSE_BUTTON: &str = "released_right_mouse_button";
    /// Right button pressed and released over the same element.
    pub const CLICKED_RIGHT_MOUSE_BUTTON: &str = "clicked_right_mouse_button";
    /// Wheel scrolled up over the element.
    pub const MOUSE_WHEEL_UP: &str = "mouse_wheel_up";
    /// Wheel scrolled down over the element.
    pub const MOUSE_WHEEL_DOWN: &str = "mouse_wheel_down";
    /// The element's value changed.
    pub const CHANGED: &str = "changed";
    /// A menu item was chosen.
    pub const SELECTED: &str = "selected";
    /// A radio button became checked.
    pub const CHECKED: &str = "checked";
    /// A radio button became unchecked.
    pub const UNCHECKED: &str = "unchecked";
    /// The element gained keyboard focus.
    pub const FOCUS: &str = "focus";
    /// The element lost keyboard focus.
    pub const BLUR: &str = "blur";
}

/// Arguments accompanying an element event.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventArgs {
    /// No arguments.
    #[default]
    None,
    /// Pointer position at the time of the event.
    Pointer {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// A value (selection result, new slider value, toggle state).
    Value(Value),
}

impl EventArgs {
    /// Pointer position, if this is a pointer event.
    #[must_use]
    pub const fn pointer(&self) -> Option<(f32, f32)> {
        match self {
            EventArgs::Pointer { x, y } => Some((*x, *y)),
            _ => None,
        }
    }

    /// The carried value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            EventArgs::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for EventArgs {
    fn from(v: Value) -> Self {
        EventArgs::Value(v)
    }
}

/// Raw input delivered to the surface controller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A mouse button went down.
    ButtonDown(MouseButton),
    /// A mouse button went up.
    ButtonUp(MouseButton),
    /// Wheel scrolled up.
    WheelUp,
    /// Wheel scrolled down.
    WheelDown,
    /// Printable text was entered.
    Text(String),
    /// An editing key was pressed.
    Key(KeyEvent),
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event without modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Editing keys understood by text widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key, used with modifiers for shortcuts.
    Char(char),
    /// Enter/Return.
    Enter,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Tab.
    Tab,
}

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}
