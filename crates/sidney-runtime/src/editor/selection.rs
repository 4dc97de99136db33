#![forbid(unsafe_code)]

//! Selected objects and group dragging.
//!
//! A drag starts from a pointer position, moves every selected object by
//! the pointer's offset each frame, and ends either by committing (yielding
//! an undoable [`MoveAction`]) or by resetting every object to where it
//! started, e.g. on Escape or on release outside the editing area.

use std::fmt;

use sidney_core::geometry::Rect;

use super::Selectable;
use crate::undo::Action;

#[derive(Debug, Clone)]
struct Drag {
    start_x: f32,
    start_y: f32,
    /// Position of each selected object when the drag began.
    origins: Vec<(f32, f32)>,
}

/// Ordered set of selected objects.
pub struct Selection<T> {
    items: Vec<T>,
    drag: Option<Drag>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            drag: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("items", &self.items)
            .field("dragging", &self.drag.is_some())
            .finish()
    }
}

impl<T: Selectable> Selection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object. Adding one already selected does nothing.
    pub fn add(&mut self, item: T) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    /// Remove an object. Returns `false` if it was not selected.
    pub fn remove(&mut self, item: &T) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i != item);
        self.items.len() != before
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.drag = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Smallest rectangle holding every selected object.
    #[must_use]
    pub fn bounding_rect(&self) -> Option<Rect> {
        let rects: Vec<Rect> = self.items.iter().map(Selectable::rect).collect();
        Rect::union_all(&rects)
    }

    // ------------------------------------------------------------------------
    // Dragging
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start dragging the selection from the pointer position.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        let origins = self.items.iter().map(Selectable::position).collect();
        self.drag = Some(Drag {
            start_x: x,
            start_y: y,
            origins,
        });
        tracing::debug!(message = "selection.drag.begin", items = self.items.len(), x, y);
    }

    /// Move every selected object by the pointer's offset from the start.
    pub fn update_drag(&mut self, x: f32, y: f32) {
        let Some(drag) = &self.drag else {
            return;
        };
        let (dx, dy) = (x - drag.start_x, y - drag.start_y);
        for (item, &(ox, oy)) in self.items.iter_mut().zip(&drag.origins) {
            item.set_position(ox + dx, oy + dy);
        }
    }

    /// Finish the drag, keeping objects where they are.
    ///
    /// The returned action has already been applied; recording it in a
    /// [`History`](crate::undo::History) re-applies the same positions.
    pub fn end_drag(&mut self) -> Option<MoveAction<T>> {
        let drag = self.drag.take()?;
        let moves = self
            .items
            .iter()
            .zip(drag.origins)
            .map(|(item, from)| (item.clone(), from, item.position()))
            .collect();
        tracing::debug!(message = "selection.drag.end", items = self.items.len());
        Some(MoveAction { moves })
    }

    /// Abandon the drag, putting every object back where it started.
    pub fn reset_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        for (item, (ox, oy)) in self.items.iter_mut().zip(drag.origins) {
            item.set_position(ox, oy);
        }
        tracing::debug!(message = "selection.drag.reset", items = self.items.len());
    }
}

impl<'a, T> IntoIterator for &'a Selection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// MoveAction
// ============================================================================

/// Undoable move of several objects.
#[derive(Debug, Clone)]
pub struct MoveAction<T> {
    /// Object, position before, position after.
    moves: Vec<(T, (f32, f32), (f32, f32))>,
}

impl<T> MoveAction<T> {
    /// Number of objects moved.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// `true` if no object actually changed position.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.moves.iter().all(|(_, from, to)| from == to)
    }
}

impl<T: Selectable> Action for MoveAction<T> {
    fn execute(&mut self) {
        for (item, _, (x, y)) in &mut self.moves {
            item.set_position(*x, *y);
        }
    }

    fn undo(&mut self) {
        for (item, (x, y), _) in &mut self.moves {
            item.set_position(*x, *y);
        }
    }

    fn description(&self) -> &str {
        "Move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::test_support::Sprite;
    use crate::undo::History;

    fn pair() -> (Sprite, Sprite, Selection<Sprite>) {
        let a = Sprite::new(0.0, 0.0, 10.0, 10.0);
        let b = Sprite::new(20.0, 5.0, 10.0, 10.0);
        let mut selection = Selection::new();
        selection.add(a.clone());
        selection.add(b.clone());
        (a, b, selection)
    }

    #[test]
    fn add_ignores_duplicates() {
        let (a, b, mut selection) = pair();
        selection.add(a.clone());
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.get(1), Some(&b));

        assert!(selection.remove(&a));
        assert!(!selection.remove(&a));
        assert!(!selection.contains(&a));
        assert_eq!(selection.iter().count(), 1);
    }

    #[test]
    fn bounding_rect_covers_all() {
        let (_, _, selection) = pair();
        assert_eq!(
            selection.bounding_rect(),
            Some(Rect::new(0.0, 0.0, 30.0, 15.0))
        );
        assert_eq!(Selection::<Sprite>::new().bounding_rect(), None);
    }

    #[test]
    fn drag_moves_by_pointer_offset() {
        let (a, b, mut selection) = pair();
        selection.begin_drag(100.0, 100.0);
        selection.update_drag(103.0, 98.0);
        selection.update_drag(110.0, 104.0);
        assert_eq!(a.position(), (10.0, 4.0));
        assert_eq!(b.position(), (30.0, 9.0));
    }

    #[test]
    fn reset_restores_start_positions() {
        let (a, b, mut selection) = pair();
        selection.begin_drag(0.0, 0.0);
        selection.update_drag(50.0, 50.0);
        selection.reset_drag();
        assert!(!selection.is_dragging());
        assert_eq!(a.position(), (0.0, 0.0));
        assert_eq!(b.position(), (20.0, 5.0));
    }

    #[test]
    fn update_without_drag_does_nothing() {
        let (a, _, mut selection) = pair();
        selection.update_drag(50.0, 50.0);
        assert_eq!(a.position(), (0.0, 0.0));
        assert!(selection.end_drag().is_none());
    }

    #[test]
    fn committed_drag_is_undoable() {
        let (a, b, mut selection) = pair();
        selection.begin_drag(0.0, 0.0);
        selection.update_drag(5.0, 5.0);
        let moved = selection.end_drag().unwrap();
        assert_eq!(moved.len(), 2);
        assert!(!moved.is_noop());

        let mut history = History::default();
        history.execute(Box::new(moved));
        assert_eq!(a.position(), (5.0, 5.0));

        history.undo().unwrap();
        assert_eq!(a.position(), (0.0, 0.0));
        assert_eq!(b.position(), (20.0, 5.0));
        history.redo().unwrap();
        assert_eq!(b.position(), (25.0, 10.0));
        assert_eq!(history.next_undo_description(), Some("Move"));
    }

    #[test]
    fn clear_abandons_drag_state() {
        let (_, _, mut selection) = pair();
        selection.begin_drag(0.0, 0.0);
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.is_dragging());
    }
}
