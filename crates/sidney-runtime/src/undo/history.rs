#![forbid(unsafe_code)]

//! Bounded, linear undo/redo history.
//!
//! # Invariants
//!
//! 1. `actions.len() <= config.max_size` after every operation.
//! 2. `cursor` is `None` (nothing done) or an index into `actions`.
//! 3. Everything after `cursor` is undone and can be redone; performing a
//!    new action drops it permanently.
//! 4. `changed` is published after every successful mutation, never after
//!    a failed one.

use std::fmt;

use sidney_core::channel::{EventChannel, Publisher, PublisherHandler};
use sidney_core::event::names;

use super::action::Action;

/// Result alias for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Misuse of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// `undo` with no action done.
    NothingToUndo,
    /// `redo` with no action undone.
    NothingToRedo,
    /// `replace_last` with no action done.
    NothingToReplace,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToUndo => write!(f, "can't undo unless there are actions in the past"),
            Self::NothingToRedo => write!(f, "can't redo if there are no actions in the future"),
            Self::NothingToReplace => write!(f, "can't replace the last action before any is done"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Configuration for a [`History`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HistoryConfig {
    /// Maximum number of retained actions. The oldest is evicted first.
    /// Zero behaves like one.
    pub max_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_size: 250 }
    }
}

impl HistoryConfig {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Linear history of performed actions.
///
/// Publishes [`names::CHANGED`] after every successful `execute`, `undo`,
/// `redo`, `replace_last` or `clear`, so menus can refresh their
/// undo/redo entries.
pub struct History {
    actions: Vec<Box<dyn Action>>,
    /// Index of the last performed action.
    cursor: Option<usize>,
    config: HistoryConfig,
    channel: EventChannel<PublisherHandler<History>>,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.actions.len())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl Publisher for History {
    type Args = ();

    fn channel(&self) -> &EventChannel<PublisherHandler<Self>> {
        &self.channel
    }

    fn channel_mut(&mut self) -> &mut EventChannel<PublisherHandler<Self>> {
        &mut self.channel
    }
}

impl History {
    #[must_use]
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            actions: Vec::new(),
            cursor: None,
            config,
            channel: EventChannel::new(),
        }
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Perform `action` and record it.
    ///
    /// Undone actions are dropped and can no longer be redone. When the
    /// history is full the oldest action is evicted.
    pub fn execute(&mut self, mut action: Box<dyn Action>) {
        let kept = self.cursor.map_or(0, |c| c + 1);
        if kept < self.actions.len() {
            tracing::debug!(
                message = "history.truncate",
                dropped = self.actions.len() - kept
            );
            self.actions.truncate(kept);
        }

        if self.actions.len() >= self.config.max_size.max(1) {
            let evicted = self.actions.remove(0);
            tracing::debug!(message = "history.evict", action = evicted.description());
        }

        tracing::debug!(message = "history.execute", action = action.description());
        action.execute();
        self.actions.push(action);
        self.cursor = Some(self.actions.len() - 1);
        self.publish(names::CHANGED, &());
    }

    /// Undo the action replaced in place by `action`, then perform `action`.
    ///
    /// Used for continuously amended gestures so that one gesture occupies
    /// one history entry.
    pub fn replace_last(&mut self, mut action: Box<dyn Action>) -> HistoryResult<()> {
        let cursor = self.cursor.ok_or(HistoryError::NothingToReplace)?;
        let last = &mut self.actions[cursor];
        last.undo();
        tracing::debug!(
            message = "history.replace",
            old = last.description(),
            new = action.description()
        );
        action.execute();
        *last = action;
        self.publish(names::CHANGED, &());
        Ok(())
    }

    /// Undo the last performed action.
    pub fn undo(&mut self) -> HistoryResult<()> {
        let cursor = self.cursor.ok_or(HistoryError::NothingToUndo)?;
        let action = &mut self.actions[cursor];
        tracing::debug!(message = "history.undo", action = action.description());
        action.undo();
        self.cursor = cursor.checked_sub(1);
        self.publish(names::CHANGED, &());
        Ok(())
    }

    /// Redo the most recently undone action.
    pub fn redo(&mut self) -> HistoryResult<()> {
        if !self.can_redo() {
            return Err(HistoryError::NothingToRedo);
        }
        let next = self.cursor.map_or(0, |c| c + 1);
        let action = &mut self.actions[next];
        tracing::debug!(message = "history.redo", action = action.description());
        action.execute();
        self.cursor = Some(next);
        self.publish(names::CHANGED, &());
        Ok(())
    }

    /// Is there an action that can be undone?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Is there an undone action that can be redone?
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.actions.len()
    }

    // ========================================================================
    // Info
    // ========================================================================

    /// Number of retained actions, done and undone.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Index of the last performed action.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Descriptions of undoable actions, most recent first.
    pub fn undo_descriptions(&self, limit: usize) -> Vec<&str> {
        let done = self.cursor.map_or(0, |c| c + 1);
        self.actions[..done]
            .iter()
            .rev()
            .take(limit)
            .map(|a| a.description())
            .collect()
    }

    /// Descriptions of redoable actions, next redo first.
    pub fn redo_descriptions(&self, limit: usize) -> Vec<&str> {
        let done = self.cursor.map_or(0, |c| c + 1);
        self.actions[done..]
            .iter()
            .take(limit)
            .map(|a| a.description())
            .collect()
    }

    #[must_use]
    pub fn next_undo_description(&self) -> Option<&str> {
        self.cursor.map(|c| self.actions[c].description())
    }

    #[must_use]
    pub fn next_redo_description(&self) -> Option<&str> {
        let next = self.cursor.map_or(0, |c| c + 1);
        self.actions.get(next).map(|a| a.description())
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Forget every action without undoing any.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.cursor = None;
        tracing::debug!(message = "history.clear");
        self.publish(names::CHANGED, &());
    }
}

// ============================================================================
// Tests
// ============================================================================
