#![forbid(unsafe_code)]

//! Runtime services for the Sidney editor.
//!
//! # Role in Sidney
//! `sidney-runtime` holds the editor-side machinery that sits beside the
//! widget tree: the bounded undo/redo history and the selection, drag and
//! clipboard helpers used by scene editing.
//!
//! # Primary responsibilities
//! - **History**: linear undo/redo over boxed [`undo::Action`]s with a
//!   bounded length and in-place amendment of the latest action.
//! - **Selection**: an ordered set of editor objects that can be dragged
//!   as a group, producing an undoable move.
//! - **Clipboard**: duplicates copied objects and places them around a
//!   point on paste.

pub mod editor;
pub mod undo;

pub use editor::{Clipboard, Duplicate, MoveAction, Selectable, Selection};
pub use undo::{
    Action, ActionBatch, FnAction, History, HistoryConfig, HistoryError, HistoryResult,
};
