#![forbid(unsafe_code)]

//! Child placement strategies for containers.

use crate::element::ElementId;
use crate::gui::Gui;

/// How a container places its children and derives its size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Packing {
    /// Children keep their own positions. The container grows to the
    /// furthest child extent measured from its origin.
    #[default]
    Free,
    /// Children are stacked top to bottom inside the padding.
    Vertical { spacing: f32 },
    /// Children are placed left to right inside the padding.
    Horizontal { spacing: f32 },
}

impl Packing {
    /// Vertical stacking with the given gap between children.
    #[must_use]
    pub const fn vertical(spacing: f32) -> Self {
        Packing::Vertical { spacing }
    }

    /// Horizontal placement with the given gap between children.
    #[must_use]
    pub const fn horizontal(spacing: f32) -> Self {
        Packing::Horizontal { spacing }
    }
}

impl Gui {
    pub(crate) fn layout_packed(&mut self, id: ElementId, packing: Packing) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let origin = node.core.rect;
        let (pad_x, pad_y) = (node.core.padding_x, node.core.padding_y);
        let (min_w, min_h) = (node.core.min_width, node.core.min_height);
        let children: Vec<ElementId> = node
            .children
            .iter()
            .copied()
            .filter(|c| self.nodes.get(*c).is_some_and(|n| n.core.visible))
            .collect();

        let (width, height) = match packing {
            Packing::Free => {
                let mut width = 0.0f32;
                let mut height = 0.0f32;
                for child in &children {
                    if let Some(r) = self.rect(*child) {
                        width = width.max(r.right() - origin.x);
                        height = height.max(r.bottom() - origin.y);
                    }
                }
                (width, height)
            }
            Packing::Vertical { spacing } => {
                let mut cursor = origin.y + pad_y;
                let mut widest = 0.0f32;
                for (i, child) in children.iter().enumerate() {
                    let Some(r) = self.rect(*child) else { continue };
                    if i > 0 {
                        cursor += spacing;
                    }
                    self.translate_subtree(*child, origin.x + pad_x - r.x, cursor - r.y);
                    cursor += r.height;
                    widest = widest.max(r.width);
                }
                (widest + pad_x * 2.0, cursor - origin.y + pad_y)
            }
            Packing::Horizontal { spacing } => {
                let mut cursor = origin.x + pad_x;
                let mut tallest = 0.0f32;
                for (i, child) in children.iter().enumerate() {
                    let Some(r) = self.rect(*child) else { continue };
                    if i > 0 {
                        cursor += spacing;
                    }
                    self.translate_subtree(*child, cursor - r.x, origin.y + pad_y - r.y);
                    cursor += r.width;
                    tallest = tallest.max(r.height);
                }
                (cursor - origin.x + pad_x, tallest + pad_y * 2.0)
            }
        };

        if let Some(node) = self.nodes.get_mut(id) {
            node.core.rect.width = width.max(min_w);
            node.core.rect.height = height.max(min_h);
        }
    }
}
