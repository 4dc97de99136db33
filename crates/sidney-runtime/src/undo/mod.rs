#![forbid(unsafe_code)]

//! Undo/redo history.
//!
//! Editor operations are expressed as [`Action`]s and performed through a
//! [`History`], which keeps them in a single list with a cursor:
//!
//! ```text
//! execute(A), execute(B), execute(C)
//!   actions: [A, B, C]   cursor -> C
//!
//! undo() x2
//!   actions: [A, B, C]   cursor -> A      (B and C can be redone)
//!
//! execute(D)            <-- new branch, B and C are dropped
//!   actions: [A, D]      cursor -> D
//! ```
//!
//! # Continuous gestures
//!
//! Dragging a slider or live-editing a value would flood the history with
//! one entry per frame. [`History::replace_last`] undoes the latest action
//! and performs its replacement in the same slot instead.
//!
//! # Module Structure
//!
//! - [`action`]: the `Action` trait, closures as actions, and batches
//! - [`history`]: the bounded history and its configuration

pub mod action;
pub mod history;

pub use action::{Action, ActionBatch, FnAction};
pub use history::{History, HistoryConfig, HistoryError, HistoryResult};
