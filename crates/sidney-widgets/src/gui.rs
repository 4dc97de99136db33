#![forbid(unsafe_code)]

//! The element arena.
//!
//! [`Gui`] owns every element of one surface. Ownership is tree shaped:
//! containers list their children, children point back at their parent
//! through a non-owning [`ElementId`]. Removing an element detaches it;
//! [`Gui::destroy`] frees it.

use std::fmt;
use std::rc::Rc;

use sidney_core::channel::{EventName, SubscriptionId};
use sidney_core::event::EventArgs;
use sidney_core::render::FontMetrics;
use slotmap::SlotMap;

use crate::config::GuiConfig;
use crate::element::{Defaults, ElementCore, ElementHandler, ElementId, Node, Widget};
use crate::error::{GuiError, GuiResult};
use crate::gui_state::Surface;
use crate::packer::Packing;

/// Arena of elements plus the surface controller state.
pub struct Gui {
    pub(crate) nodes: SlotMap<ElementId, Node>,
    pub(crate) config: GuiConfig,
    pub(crate) metrics: Rc<dyn FontMetrics>,
    pub(crate) surface: Surface,
    root: ElementId,
    content: ElementId,
}

impl fmt::Debug for Gui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gui")
            .field("elements", &self.nodes.len())
            .field("config", &self.config)
            .field("surface", &self.surface)
            .finish()
    }
}

impl Gui {
    /// Create an empty surface.
    ///
    /// Builds the outer root container (which also holds the active menu
    /// and the tooltip) and the content container for application widgets.
    pub fn new(config: GuiConfig, metrics: impl FontMetrics + 'static) -> Self {
        let mut nodes = SlotMap::with_key();
        let root_core = ElementCore {
            padding_x: 0.0,
            padding_y: 0.0,
            ..crate::element::ElementOptions::new().core(&config, Defaults::default())
        };
        let root = nodes.insert(Node::new(root_core.clone(), Widget::Container(Packing::Free)));
        let content = nodes.insert(Node::new(
            ElementCore {
                parent: Some(root),
                ..root_core
            },
            Widget::Container(Packing::Free),
        ));
        if let Some(node) = nodes.get_mut(root) {
            node.children.push(content);
        }
        Self {
            nodes,
            config,
            metrics: Rc::new(metrics),
            surface: Surface::default(),
            root,
            content,
        }
    }

    /// Outer container: content, active menu and tooltip.
    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Container for application widgets.
    #[must_use]
    pub fn content(&self) -> ElementId {
        self.content
    }

    #[must_use]
    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// Text measurement used for layout.
    #[must_use]
    pub fn metrics(&self) -> &dyn FontMetrics {
        self.metrics.as_ref()
    }

    /// Whether the id names a live element.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live elements, including the root and content containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, id: ElementId) -> GuiResult<&Node> {
        self.nodes.get(id).ok_or(GuiError::UnknownElement(id))
    }

    pub(crate) fn node_mut(&mut self, id: ElementId) -> GuiResult<&mut Node> {
        self.nodes.get_mut(id).ok_or(GuiError::UnknownElement(id))
    }

    pub(crate) fn wrong_widget(&self, id: ElementId, expected: &'static str) -> GuiError {
        match self.nodes.get(id) {
            Some(node) => GuiError::WrongWidget {
                id,
                expected,
                found: node.widget.kind(),
            },
            None => GuiError::UnknownElement(id),
        }
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Fail before anything is inserted if `parent` cannot take children.
    pub(crate) fn check_parent(&self, parent: Option<ElementId>) -> GuiResult<()> {
        if let Some(parent) = parent
            && !self.node(parent)?.widget.accepts_children()
        {
            return Err(GuiError::NotAContainer(parent));
        }
        Ok(())
    }

    /// First construction phase: store the raw fields.
    pub(crate) fn insert_raw(&mut self, core: ElementCore, widget: Widget) -> ElementId {
        self.nodes.insert(Node::new(core, widget))
    }

    /// Second construction phase: lay out, then attach to the parent.
    pub(crate) fn post_init(&mut self, id: ElementId, parent: Option<ElementId>) -> GuiResult<()> {
        self.recalc(id)?;
        if let Some(parent) = parent {
            self.add(parent, id)?;
        }
        tracing::trace!(
            message = "gui.element.created",
            id = ?id,
            kind = self.kind(id).unwrap_or("?")
        );
        Ok(())
    }

    /// Attach an internal child (composite inner container, slider handle).
    pub(crate) fn adopt(&mut self, parent: ElementId, child: ElementId) {
        if let Some(node) = self.nodes.get_mut(child) {
            node.core.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Subscribe a handler to an element event.
    ///
    /// Handlers run in subscription order, before the element's built-in
    /// behaviour.
    pub fn subscribe<F>(
        &mut self,
        id: ElementId,
        event: impl Into<EventName>,
        handler: F,
    ) -> GuiResult<SubscriptionId>
    where
        F: Fn(&mut Gui, ElementId, &EventArgs) + 'static,
    {
        let node = self.node_mut(id)?;
        Ok(node.channel.subscribe(event, Rc::new(handler)))
    }

    /// Remove a subscription. Returns `false` if it did not exist.
    pub fn unsubscribe(&mut self, id: ElementId, subscription: SubscriptionId) -> bool {
        self.nodes
            .get_mut(id)
            .is_some_and(|n| n.channel.unsubscribe(subscription))
    }

    pub(crate) fn set_default_handler(
        &mut self,
        id: ElementId,
        event: &'static str,
        handler: fn(&mut Gui, ElementId, &EventArgs),
    ) {
        if let Some(node) = self.nodes.get_mut(id) {
            let handler: ElementHandler = Rc::new(handler);
            node.channel.set_default(event, handler);
        }
    }

    /// Invoke every handler for `event` on the element.
    ///
    /// Publishing to a missing element, or an event nobody handles, is a
    /// no-op. Returns the number of handlers run.
    pub fn publish(&mut self, id: ElementId, event: &str, args: &EventArgs) -> usize {
        let Some(node) = self.nodes.get(id) else {
            return 0;
        };
        let handlers = node.channel.handlers(event);
        for handler in &handlers {
            handler(self, id, args);
        }
        handlers.len()
    }

    /// Number of explicit subscribers to `event` on the element.
    #[must_use]
    pub fn subscriber_count(&self, id: ElementId, event: &str) -> usize {
        self.nodes
            .get(id)
            .map_or(0, |n| n.channel.subscriber_count(event))
    }
}
