#![forbid(unsafe_code)]

//! Reversible units of work.

use std::fmt;

use smallvec::SmallVec;

/// An undoable, redoable unit of work.
///
/// `execute` is called when the action is first performed and again on
/// redo; `undo` reverses it. Actions own whatever they need to do both,
/// usually shared handles to editor objects.
pub trait Action {
    /// Apply the action's effect.
    fn execute(&mut self);

    /// Reverse the action's effect.
    fn undo(&mut self);

    /// Human-readable description for menus and logs.
    fn description(&self) -> &str {
        "Action"
    }
}

impl fmt::Debug for dyn Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Action").field(&self.description()).finish()
    }
}

// ============================================================================
// FnAction
// ============================================================================

/// An action built from a pair of closures.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use sidney_runtime::undo::{Action, FnAction};
///
/// let zoom = Rc::new(Cell::new(1.0));
/// let (a, b) = (zoom.clone(), zoom.clone());
/// let mut action = FnAction::new("Zoom", move || a.set(2.0), move || b.set(1.0));
///
/// action.execute();
/// assert_eq!(zoom.get(), 2.0);
/// action.undo();
/// assert_eq!(zoom.get(), 1.0);
/// ```
pub struct FnAction<E, U> {
    description: String,
    execute: E,
    undo: U,
}

impl<E, U> FnAction<E, U>
where
    E: FnMut(),
    U: FnMut(),
{
    #[must_use]
    pub fn new(description: impl Into<String>, execute: E, undo: U) -> Self {
        Self {
            description: description.into(),
            execute,
            undo,
        }
    }
}

impl<E, U> fmt::Debug for FnAction<E, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAction")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<E, U> Action for FnAction<E, U>
where
    E: FnMut(),
    U: FnMut(),
{
    fn execute(&mut self) {
        (self.execute)();
    }

    fn undo(&mut self) {
        (self.undo)();
    }

    fn description(&self) -> &str {
        &self.description
    }
}

// ============================================================================
// ActionBatch
// ============================================================================

/// Several actions performed and reversed as one history entry.
///
/// Actions execute in insertion order and undo in reverse order.
pub struct ActionBatch {
    description: String,
    actions: SmallVec<[Box<dyn Action>; 4]>,
}

impl fmt::Debug for ActionBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionBatch")
            .field("description", &self.description)
            .field("actions", &self.actions.len())
            .finish()
    }
}

impl ActionBatch {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: SmallVec::new(),
        }
    }

    /// Append an action to the batch.
    pub fn push(&mut self, action: Box<dyn Action>) {
        self.actions.push(action);
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Action for ActionBatch {
    fn execute(&mut self) {
        for action in &mut self.actions {
            action.execute();
        }
    }

    fn undo(&mut self) {
        for action in self.actions.iter_mut().rev() {
            action.undo();
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn logged(log: &Rc<RefCell<Vec<String>>>, name: &'static str) -> impl Action + 'static {
        let (a, b) = (log.clone(), log.clone());
        FnAction::new(
            name,
            move || a.borrow_mut().push(format!("do {name}")),
            move || b.borrow_mut().push(format!("undo {name}")),
        )
    }

    #[test]
    fn default_description() {
        struct Nop;
        impl Action for Nop {
            fn execute(&mut self) {}
            fn undo(&mut self) {}
        }
        assert_eq!(Nop.description(), "Action");
    }

    #[test]
    fn batch_undoes_in_reverse() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut batch = ActionBatch::new("Paste")
            .with(logged(&log, "a"))
            .with(logged(&log, "b"));
        batch.push(Box::new(logged(&log, "c")));
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.description(), "Paste");

        batch.execute();
        batch.undo();
        assert_eq!(
            *log.borrow(),
            vec!["do a", "do b", "do c", "undo c", "undo b", "undo a"]
        );
    }

    #[test]
    fn empty_batch_is_harmless() {
        let mut batch = ActionBatch::new("Nothing");
        assert!(batch.is_empty());
        batch.execute();
        batch.undo();
    }

    #[test]
    fn debug_shows_description() {
        let action: Box<dyn Action> = Box::new(FnAction::new("Move", || {}, || {}));
        assert_eq!(format!("{action:?}"), "Action(\"Move\")");
    }
}
