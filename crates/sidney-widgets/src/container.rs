#![forbid(unsafe_code)]

//! Ordered child collections and z-ordered hit testing.
//!
//! Insertion order is draw order, back to front. Hit testing walks children
//! in reverse so the most recently added element under the pointer wins at
//! any nesting depth; z values are never consulted.

use crate::element::{Defaults, ElementId, ElementOptions, Widget};
use crate::error::{GuiError, GuiResult};
use crate::gui::Gui;
use crate::packer::Packing;

impl Gui {
    /// Create a container that leaves its children where they are.
    pub fn container(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        self.packed_container(parent, Packing::Free, options)
    }

    /// Create a container stacking its children top to bottom.
    pub fn vertical_packer(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        spacing: f32,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        self.packed_container(parent, Packing::vertical(spacing), options)
    }

    /// Create a container placing its children left to right.
    pub fn horizontal_packer(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        spacing: f32,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        self.packed_container(parent, Packing::horizontal(spacing), options)
    }

    /// Create a container with the given packing.
    pub fn packed_container(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        packing: Packing,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let defaults = match packing {
            Packing::Free => Defaults {
                padding: Some((0.0, 0.0)),
                ..Defaults::default()
            },
            _ => Defaults::default(),
        };
        let core = options.core(&self.config, defaults);
        let id = self.insert_raw(core, Widget::Container(packing));
        self.post_init(id, parent)?;
        Ok(id)
    }

    /// Append `element` to `parent`, detaching it from any previous parent.
    pub fn add(&mut self, parent: ElementId, element: ElementId) -> GuiResult<()> {
        if !self.node(parent)?.widget.accepts_children() {
            return Err(GuiError::NotAContainer(parent));
        }
        self.node(element)?;
        if element == parent || self.is_descendant(parent, element) {
            return Err(GuiError::AlreadyAttached(element));
        }
        if let Some(previous) = self.parent(element) {
            self.remove(previous, element)?;
        }

        if let Some(node) = self.nodes.get_mut(element) {
            node.core.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(element);
        }
        self.recalc(parent)
    }

    /// Detach `element` from `parent`. The element stays alive.
    pub fn remove(&mut self, parent: ElementId, element: ElementId) -> GuiResult<()> {
        let node = self.node_mut(parent)?;
        let Some(index) = node.children.iter().position(|c| *c == element) else {
            return Err(GuiError::NotAChild {
                parent,
                child: element,
            });
        };
        node.children.remove(index);
        if let Some(child) = self.nodes.get_mut(element) {
            child.core.parent = None;
        }
        self.recalc(parent)
    }

    /// Detach every child of `parent`.
    pub fn clear(&mut self, parent: ElementId) -> GuiResult<()> {
        if !self.node(parent)?.widget.accepts_children() {
            return Err(GuiError::NotAContainer(parent));
        }
        let children = std::mem::take(&mut self.node_mut(parent)?.children);
        for child in children {
            if let Some(node) = self.nodes.get_mut(child) {
                node.core.parent = None;
            }
        }
        self.recalc(parent)
    }

    /// Children in draw order.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn child_count(&self, id: ElementId) -> usize {
        self.children(id).len()
    }

    /// The containing element, if attached.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id).and_then(|n| n.core.parent)
    }

    /// Parent, grandparent, and so on up to the root.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// Whether `id` lies strictly inside `ancestor`.
    #[must_use]
    pub fn is_descendant(&self, id: ElementId, ancestor: ElementId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// The deepest, most recently added element under the point.
    ///
    /// Containers are not hit themselves; their children are searched in
    /// reverse order. Hidden elements and the tooltip are skipped.
    #[must_use]
    pub fn hit_element(&self, id: ElementId, x: f32, y: f32) -> Option<ElementId> {
        let node = self.nodes.get(id)?;
        if let Widget::Slider(slider) = &node.widget {
            return (self.hit(slider.handle, x, y) || self.hit(id, x, y)).then_some(id);
        }
        for &child in node.children.iter().rev() {
            let Some(child_node) = self.nodes.get(child) else {
                continue;
            };
            if !child_node.core.visible || matches!(child_node.widget, Widget::ToolTip(_)) {
                continue;
            }
            if child_node.widget.is_group() {
                if let Some(hit) = self.hit_element(child, x, y) {
                    return Some(hit);
                }
            } else if child_node.core.rect.contains(x, y) {
                return Some(child);
            }
        }
        None
    }

    /// Detach the element and free it together with everything inside it.
    ///
    /// Radio buttons leave their group, combo boxes take their menu with
    /// them. Destroying the root or the content container destroys their
    /// children instead.
    pub fn destroy(&mut self, id: ElementId) -> GuiResult<()> {
        self.node(id)?;
        if id == self.root() || id == self.content() {
            for child in self.children(id).to_vec() {
                self.destroy(child)?;
            }
            return Ok(());
        }

        let mut doomed = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            if doomed.contains(&current) {
                continue;
            }
            doomed.push(current);
            stack.extend(node.children.iter().copied());
            if let Widget::ComboBox(combo) = &node.widget {
                stack.push(combo.menu);
            }
        }

        let mut relayout = Vec::new();
        for &current in &doomed {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            let parent = node.core.parent;
            let group = match &node.widget {
                Widget::RadioButton(radio) => Some(radio.group),
                _ => None,
            };
            if let Some(parent) = parent
                && !doomed.contains(&parent)
                && let Some(parent_node) = self.nodes.get_mut(parent)
            {
                parent_node.children.retain(|c| *c != current);
                relayout.push(parent);
            }
            if let Some(group) = group
                && !doomed.contains(&group)
            {
                self.leave_radio_group(group, current);
            }
        }

        self.surface.forget(&doomed);
        for current in &doomed {
            self.nodes.remove(*current);
        }
        tracing::debug!(message = "gui.element.destroyed", id = ?id, freed = doomed.len());

        for parent in relayout {
            if self.contains(parent) {
                self.recalc(parent)?;
            }
        }
        Ok(())
    }
}
