#![forbid(unsafe_code)]

//! Copy and paste of editor objects.

use sidney_core::geometry::Rect;

use super::{Selectable, Selection};

/// Objects that can produce an independent copy of themselves.
///
/// Unlike `Clone` on a handle, which shares the object, a duplicate is a
/// new object that can be moved without affecting the original.
pub trait Duplicate {
    #[must_use]
    fn duplicate(&self) -> Self;
}

/// Holds duplicates of copied objects.
///
/// Copying snapshots the objects, so later edits to the originals do not
/// change what gets pasted.
#[derive(Debug)]
pub struct Clipboard<T> {
    items: Vec<T>,
}

impl<T> Default for Clipboard<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Selectable + Duplicate> Clipboard<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with duplicates of the selection.
    pub fn copy(&mut self, selection: &Selection<T>) {
        self.items = selection.iter().map(Duplicate::duplicate).collect();
        tracing::debug!(message = "clipboard.copy", items = self.items.len());
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Fresh duplicates of the contents, moved so that the centre of their
    /// bounding box lands on `(x, y)`.
    ///
    /// The offset is rounded to whole units so pasted objects stay on the
    /// pixel grid. Pasting repeatedly yields independent objects each time.
    pub fn paste_at(&self, x: f32, y: f32) -> Vec<T> {
        let rects: Vec<Rect> = self.items.iter().map(Selectable::rect).collect();
        let Some(bounds) = Rect::union_all(&rects) else {
            return Vec::new();
        };
        let (cx, cy) = bounds.center();
        let (dx, dy) = ((x - cx).round(), (y - cy).round());
        tracing::debug!(message = "clipboard.paste", items = self.items.len(), dx, dy);

        self.items
            .iter()
            .map(|item| {
                let mut copy = item.duplicate();
                let (px, py) = copy.position();
                copy.set_position(px + dx, py + dy);
                copy
            })
            .collect()
    }
}
