#![forbid(unsafe_code)]

//! Editor-side object handling: selecting, dragging and copying.
//!
//! Editor objects are owned by the editor's scene, not by this module.
//! Both [`Selection`] and [`Clipboard`] work on *handles*: cheap, cloneable
//! references (an `Rc<RefCell<_>>` wrapper, an index) that implement
//! [`Selectable`]. Two handles are equal when they refer to the same object.

pub mod clipboard;
pub mod selection;

pub use clipboard::{Clipboard, Duplicate};
pub use selection::{MoveAction, Selection};

use sidney_core::geometry::Rect;

/// A handle to an editor object that can be selected and moved.
pub trait Selectable: Clone + PartialEq {
    /// Top-left corner of the object.
    fn position(&self) -> (f32, f32);

    /// Move the object so its top-left corner is at `(x, y)`.
    fn set_position(&mut self, x: f32, y: f32);

    /// Bounds of the object.
    fn rect(&self) -> Rect;
}
