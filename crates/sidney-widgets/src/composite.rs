#![forbid(unsafe_code)]

//! Widgets assembled from a private inner container.
//!
//! A composite presents as a single element while delegating its content to
//! one inner container. Its size always mirrors the inner container's size,
//! moving the composite moves the inner container by the same delta, and
//! hit testing and updates are forwarded to the inner container.

use crate::element::{Defaults, ElementId, ElementOptions, Widget};
use crate::error::GuiResult;
use crate::gui::Gui;
use crate::packer::Packing;

impl Gui {
    /// Create a generic composite whose inner container uses `inner_packing`.
    ///
    /// The requested size becomes the inner container's minimum size.
    /// Content is added to [`Gui::composite_inner`].
    pub fn composite(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        inner_packing: Packing,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let inner = self.spawn_inner(inner_packing, &options);
        let core = options.core(
            &self.config,
            Defaults {
                padding: Some((0.0, 0.0)),
                ..Defaults::default()
            },
        );
        let id = self.insert_raw(core, Widget::Composite { inner });
        self.adopt(id, inner);
        self.post_init(id, parent)?;
        Ok(id)
    }

    /// Raw inner container placed at the composite's position.
    pub(crate) fn spawn_inner(&mut self, packing: Packing, options: &ElementOptions) -> ElementId {
        let inner_options = ElementOptions {
            x: options.x,
            y: options.y,
            width: options.width,
            height: options.height,
            z: options.z,
            ..ElementOptions::default()
        };
        let core = inner_options.core(
            &self.config,
            Defaults {
                padding: Some((0.0, 0.0)),
                ..Defaults::default()
            },
        );
        let inner = self.insert_raw(core, Widget::Container(packing));
        self.layout_packed(inner, packing);
        inner
    }

    /// The inner container of a composite or menu pane.
    pub fn composite_inner(&self, id: ElementId) -> GuiResult<ElementId> {
        match self.node(id)?.widget {
            Widget::Composite { inner } | Widget::MenuPane { inner } => Ok(inner),
            _ => Err(self.wrong_widget(id, "Composite")),
        }
    }

    pub(crate) fn layout_composite(&mut self, id: ElementId, inner: ElementId) {
        let Some(size) = self.rect(inner) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(id) {
            node.core.rect.set_size(size.width, size.height);
        }
    }
}
