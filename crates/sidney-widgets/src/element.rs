#![forbid(unsafe_code)]

//! The element contract shared by every widget.
//!
//! Every widget is a [`Node`] in the [`Gui`] arena: common attributes live in
//! [`ElementCore`], widget-specific state in [`Widget`], and the node's
//! handlers in its [`EventChannel`].
//!
//! # Layout protocol
//!
//! `layout` recomputes one element's own size from its content (containers
//! also place their children). `recalc` runs `layout` and, if the size
//! changed, continues with the parent. That upward walk is the only size
//! propagation mechanism.
//!
//! # Construction protocol
//!
//! Each factory on [`Gui`] inserts the raw node, registers the widget's
//! default handlers, then runs `post_init`: first `recalc`, then attach to
//! the parent if one was given. A parent never sees a child that has not
//! been laid out.

use std::rc::Rc;

use sidney_core::channel::EventChannel;
use sidney_core::event::EventArgs;
use sidney_core::geometry::Rect;
use sidney_core::render::{Color, Renderer};
use slotmap::new_key_type;

use crate::button::{ButtonState, button_colors};
use crate::combo_box::ComboState;
use crate::config::GuiConfig;
use crate::error::{GuiError, GuiResult};
use crate::gui::Gui;
use crate::label::{Icon, LabelContent};
use crate::menu_pane::MenuItemState;
use crate::packer::Packing;
use crate::radio_button::{RadioGroupState, RadioState};
use crate::slider::SliderState;
use crate::text_area::TextAreaState;
use crate::toggle_button::ToggleState;

new_key_type! {
    /// Stable handle to an element in a [`Gui`].
    ///
    /// Ids are generational: an id of a destroyed element never aliases a
    /// newer element.
    pub struct ElementId;
}

/// Handler attached to an element event.
///
/// Receives the arena, the publishing element, and the event arguments.
pub type ElementHandler = Rc<dyn Fn(&mut Gui, ElementId, &EventArgs)>;

/// Outline colour for containers when layout debugging is on.
pub const DEBUG_CONTAINER_COLOR: Color = Color::rgba(0, 0, 255, 100);
/// Outline colour for composites when layout debugging is on.
pub const DEBUG_COMPOSITE_COLOR: Color = Color::rgba(0, 255, 0, 100);

/// Attributes every element has.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementCore {
    /// Bounds in screen coordinates.
    pub rect: Rect,
    /// Draw order hint, higher on top. Not used to break hit-test ties.
    pub z: f32,
    /// Horizontal padding.
    pub padding_x: f32,
    /// Vertical padding.
    pub padding_y: f32,
    /// Tip text shown after hovering.
    pub tip: String,
    /// Whether the element reacts to input.
    pub enabled: bool,
    /// Whether the element is drawn and hit-tested.
    pub visible: bool,
    /// Font size for text content.
    pub font_size: f32,
    /// Fill colour.
    pub background_color: Color,
    /// Border colour.
    pub border_color: Color,
    /// Foreground (text) colour.
    pub color: Color,
    /// Non-owning back-reference to the containing element.
    pub parent: Option<ElementId>,
    /// Requested width; content-sized widgets never shrink below it.
    pub min_width: f32,
    /// Requested height; content-sized widgets never shrink below it.
    pub min_height: f32,
}

/// Per-widget default attribute values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Defaults {
    pub background_color: Color,
    pub border_color: Color,
    pub color: Color,
    pub padding: Option<(f32, f32)>,
    pub z: f32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            background_color: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            color: Color::WHITE,
            padding: None,
            z: 0.0,
        }
    }
}

/// Common construction options for every widget factory.
///
/// Unset attributes fall back to the widget's defaults and then to the
/// [`GuiConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementOptions {
    pub x: f32,
    pub y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub z: Option<f32>,
    pub padding_x: Option<f32>,
    pub padding_y: Option<f32>,
    pub tip: String,
    pub font_size: Option<f32>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub color: Option<Color>,
    pub enabled: Option<bool>,
    pub icon: Option<Icon>,
}

impl ElementOptions {
    /// Options with every attribute at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Requested size. Content-sized widgets treat it as a minimum.
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, x: f32, y: f32) -> Self {
        self.padding_x = Some(x);
        self.padding_y = Some(y);
        self
    }

    #[must_use]
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Icon drawn to the left of the text of label-like widgets.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub(crate) fn core(&self, config: &GuiConfig, defaults: Defaults) -> ElementCore {
        let (default_px, default_py) = defaults
            .padding
            .unwrap_or((config.padding_x, config.padding_y));
        let width = self.width.unwrap_or(0.0).max(0.0);
        let height = self.height.unwrap_or(0.0).max(0.0);
        ElementCore {
            rect: Rect::new(self.x, self.y, width, height),
            z: self.z.unwrap_or(defaults.z),
            padding_x: self.padding_x.unwrap_or(default_px),
            padding_y: self.padding_y.unwrap_or(default_py),
            tip: self.tip.clone(),
            enabled: self.enabled.unwrap_or(true),
            visible: true,
            font_size: self.font_size.unwrap_or(config.font_size),
            background_color: self.background_color.unwrap_or(defaults.background_color),
            border_color: self.border_color.unwrap_or(defaults.border_color),
            color: self.color.unwrap_or(defaults.color),
            parent: None,
            min_width: width,
            min_height: height,
        }
    }
}

/// Widget-specific state of a node.
#[derive(Debug, Clone)]
pub enum Widget {
    /// Plain container of children.
    Container(Packing),
    /// Container governing radio buttons below it.
    RadioGroup(RadioGroupState),
    /// Element delegating to one private inner container.
    Composite { inner: ElementId },
    /// Popup menu: a composite over a vertical packer of items.
    MenuPane { inner: ElementId },
    /// Static text and/or icon.
    Label(LabelContent),
    /// Hover tip owned by the surface.
    ToolTip(LabelContent),
    Button(ButtonState),
    ToggleButton(ToggleState),
    RadioButton(RadioState),
    ComboBox(ComboState),
    /// Menu entry or separator.
    MenuItem(MenuItemState),
    Slider(SliderState),
    /// Draggable knob inside a slider.
    SliderHandle,
    TextArea(Box<TextAreaState>),
}

impl Widget {
    /// Human-readable widget kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Widget::Container(_) => "Container",
            Widget::RadioGroup(_) => "RadioGroup",
            Widget::Composite { .. } => "Composite",
            Widget::MenuPane { .. } => "MenuPane",
            Widget::Label(_) => "Label",
            Widget::ToolTip(_) => "ToolTip",
            Widget::Button(_) => "Button",
            Widget::ToggleButton(_) => "ToggleButton",
            Widget::RadioButton(_) => "RadioButton",
            Widget::ComboBox(_) => "ComboBox",
            Widget::MenuItem(_) => "MenuItem",
            Widget::Slider(_) => "Slider",
            Widget::SliderHandle => "SliderHandle",
            Widget::TextArea(_) => "TextArea",
        }
    }

    /// Whether callers may add children to this widget.
    #[must_use]
    pub const fn accepts_children(&self) -> bool {
        matches!(self, Widget::Container(_) | Widget::RadioGroup(_))
    }

    /// Whether hit testing descends into this widget's children.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(
            self,
            Widget::Container(_)
                | Widget::RadioGroup(_)
                | Widget::Composite { .. }
                | Widget::MenuPane { .. }
                | Widget::Slider(_)
        )
    }

    pub(crate) fn label(&self) -> Option<&LabelContent> {
        match self {
            Widget::Label(l) | Widget::ToolTip(l) => Some(l),
            _ => self.button().map(|b| &b.label),
        }
    }

    pub(crate) fn label_mut(&mut self) -> Option<&mut LabelContent> {
        match self {
            Widget::Label(l) | Widget::ToolTip(l) => Some(l),
            _ => self.button_mut().map(|b| &mut b.label),
        }
    }

    pub(crate) fn button(&self) -> Option<&ButtonState> {
        match self {
            Widget::Button(b) => Some(b),
            Widget::ToggleButton(t) => Some(&t.button),
            Widget::RadioButton(r) => Some(&r.button),
            Widget::ComboBox(c) => Some(&c.button),
            Widget::MenuItem(m) => Some(&m.button),
            _ => None,
        }
    }

    pub(crate) fn button_mut(&mut self) -> Option<&mut ButtonState> {
        match self {
            Widget::Button(b) => Some(b),
            Widget::ToggleButton(t) => Some(&mut t.button),
            Widget::RadioButton(r) => Some(&mut r.button),
            Widget::ComboBox(c) => Some(&mut c.button),
            Widget::MenuItem(m) => Some(&mut m.button),
            _ => None,
        }
    }
}

/// One element in the arena.
pub struct Node {
    pub(crate) core: ElementCore,
    pub(crate) children: Vec<ElementId>,
    pub(crate) widget: Widget,
    pub(crate) channel: EventChannel<ElementHandler>,
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.widget.kind())
            .field("rect", &self.core.rect)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Node {
    pub(crate) fn new(core: ElementCore, widget: Widget) -> Self {
        Self {
            core,
            children: Vec::new(),
            widget,
            channel: EventChannel::new(),
        }
    }

    /// Common attributes.
    #[must_use]
    pub fn core(&self) -> &ElementCore {
        &self.core
    }

    /// Widget-specific state.
    #[must_use]
    pub fn widget(&self) -> &Widget {
        &self.widget
    }
}

// =============================================================================
// Element contract
// =============================================================================

impl Gui {
    /// Re-run layout and propagate size changes upwards.
    pub fn recalc(&mut self, id: ElementId) -> GuiResult<()> {
        self.node(id)?;
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(before) = self.nodes.get(id).map(|n| n.core.rect) else {
                break;
            };
            self.layout(id);
            let Some(node) = self.nodes.get(id) else {
                break;
            };
            let after = node.core.rect;
            current = if after.width != before.width || after.height != before.height {
                node.core.parent
            } else {
                None
            };
        }
        Ok(())
    }

    fn layout(&mut self, id: ElementId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        match &node.widget {
            Widget::Container(packing) => {
                let packing = *packing;
                self.layout_packed(id, packing);
            }
            Widget::RadioGroup(group) => {
                let packing = group.packing;
                self.layout_packed(id, packing);
            }
            Widget::Composite { inner } => {
                let inner = *inner;
                self.layout_composite(id, inner);
            }
            Widget::MenuPane { inner } => {
                let inner = *inner;
                self.layout_menu_pane(id, inner);
            }
            Widget::Label(_)
            | Widget::ToolTip(_)
            | Widget::Button(_)
            | Widget::ToggleButton(_)
            | Widget::RadioButton(_) => self.layout_label(id),
            Widget::ComboBox(_) => self.layout_combo_box(id),
            Widget::MenuItem(_) => self.layout_menu_item(id),
            Widget::Slider(_) | Widget::SliderHandle => self.layout_fixed(id),
            Widget::TextArea(_) => self.layout_text_area(id),
        }
    }

    /// Size equals the requested size; content does not affect it.
    pub(crate) fn layout_fixed(&mut self, id: ElementId) {
        if let Some(node) = self.nodes.get_mut(id) {
            let (width, height) = (node.core.min_width, node.core.min_height);
            node.core.rect.set_size(width, height);
        }
    }

    /// Whether the point lies within the element. Hidden elements are never hit.
    #[must_use]
    pub fn hit(&self, id: ElementId, x: f32, y: f32) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|n| n.core.visible && n.core.rect.contains(x, y))
    }

    /// Bounds of the element.
    #[must_use]
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.nodes.get(id).map(|n| n.core.rect)
    }

    /// Common attributes of the element.
    #[must_use]
    pub fn core(&self, id: ElementId) -> Option<&ElementCore> {
        self.nodes.get(id).map(|n| &n.core)
    }

    /// Widget state of the element.
    #[must_use]
    pub fn widget(&self, id: ElementId) -> Option<&Widget> {
        self.nodes.get(id).map(|n| &n.widget)
    }

    /// Widget kind name, e.g. `"Button"`.
    #[must_use]
    pub fn kind(&self, id: ElementId) -> Option<&'static str> {
        self.nodes.get(id).map(|n| n.widget.kind())
    }

    /// Move the element (and everything inside it) to a new position.
    pub fn set_position(&mut self, id: ElementId, x: f32, y: f32) -> GuiResult<()> {
        let rect = self.node(id)?.core.rect;
        self.translate_subtree(id, x - rect.x, y - rect.y);
        Ok(())
    }

    pub fn set_x(&mut self, id: ElementId, x: f32) -> GuiResult<()> {
        let rect = self.node(id)?.core.rect;
        self.set_position(id, x, rect.y)
    }

    pub fn set_y(&mut self, id: ElementId, y: f32) -> GuiResult<()> {
        let rect = self.node(id)?.core.rect;
        self.set_position(id, rect.x, y)
    }

    pub(crate) fn translate_subtree(&mut self, id: ElementId, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current) {
                node.core.rect = node.core.rect.translate(dx, dy);
                stack.extend(node.children.iter().copied());
            }
        }
    }

    /// Enable or disable the element.
    pub fn set_enabled(&mut self, id: ElementId, enabled: bool) -> GuiResult<()> {
        self.node_mut(id)?.core.enabled = enabled;
        Ok(())
    }

    #[must_use]
    pub fn is_enabled(&self, id: ElementId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.core.enabled)
    }

    /// Show or hide the element. Hidden elements are neither drawn nor hit.
    pub fn set_visible(&mut self, id: ElementId, visible: bool) -> GuiResult<()> {
        self.node_mut(id)?.core.visible = visible;
        Ok(())
    }

    #[must_use]
    pub fn is_visible(&self, id: ElementId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.core.visible)
    }

    pub fn set_tip(&mut self, id: ElementId, tip: impl Into<String>) -> GuiResult<()> {
        self.node_mut(id)?.core.tip = tip.into();
        Ok(())
    }

    /// Tip text as displayed. Sliders append their current value.
    #[must_use]
    pub fn tip(&self, id: ElementId) -> String {
        let Some(node) = self.nodes.get(id) else {
            return String::new();
        };
        match &node.widget {
            Widget::Slider(slider) => slider.tip(&node.core.tip),
            _ => node.core.tip.clone(),
        }
    }

    /// Display text of label-like widgets or the contents of a text area.
    #[must_use]
    pub fn text(&self, id: ElementId) -> Option<String> {
        let node = self.nodes.get(id)?;
        match &node.widget {
            Widget::TextArea(area) => Some(area.text().to_owned()),
            widget => widget.label().map(|l| l.text.clone()),
        }
    }

    /// Replace the display text and re-run layout.
    ///
    /// Text areas may reject text that does not fit; see
    /// [`Gui::set_text_area_text`].
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> GuiResult<()> {
        let text = text.into();
        let node = self.node_mut(id)?;
        if let Widget::TextArea(_) = node.widget {
            self.set_text_area_text(id, text)?;
            return Ok(());
        }
        let found = node.widget.kind();
        let Some(label) = node.widget.label_mut() else {
            return Err(GuiError::WrongWidget {
                id,
                expected: "Label",
                found,
            });
        };
        label.text = text;
        self.recalc(id)?;
        // Rows share one width, so the whole menu is re-laid out.
        if let Some(menu) = self.menu_item(id).map(|item| item.menu) {
            self.recalc(menu)?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------------

    /// Per-frame logic for the element and everything inside it.
    pub fn update_element(&mut self, id: ElementId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            stack.extend(node.children.iter().rev().copied());
            if let Widget::TextArea(_) = node.widget {
                self.update_text_area(current);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Draw the element and everything inside it, back to front.
    pub fn draw_element(&self, id: ElementId, renderer: &mut dyn Renderer) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.core.visible {
            return;
        }
        match &node.widget {
            Widget::TextArea(area) => {
                self.draw_text_area(&node.core, area, renderer);
                return;
            }
            Widget::Button(b) | Widget::ComboBox(ComboState { button: b, .. }) => {
                let (background, color) = button_colors(&node.core, b);
                draw_background(&node.core, background, node.core.border_color, renderer);
                self.draw_label_content(&node.core, &b.label, color, renderer);
            }
            Widget::ToggleButton(t) => {
                let (background, color) = button_colors(&node.core, &t.button);
                draw_background(&node.core, background, node.core.border_color, renderer);
                self.draw_label_content(&node.core, &t.button.label, color, renderer);
            }
            Widget::RadioButton(r) => {
                let (background, color) = button_colors(&node.core, &r.button);
                draw_background(&node.core, background, r.border_color(), renderer);
                self.draw_label_content(&node.core, &r.button.label, color, renderer);
            }
            Widget::MenuItem(item) => self.draw_menu_item(&node.core, item, renderer),
            Widget::Label(label) | Widget::ToolTip(label) => {
                draw_background(
                    &node.core,
                    node.core.background_color,
                    node.core.border_color,
                    renderer,
                );
                self.draw_label_content(&node.core, label, node.core.color, renderer);
            }
            Widget::Slider(slider) => {
                draw_background(
                    &node.core,
                    node.core.background_color,
                    node.core.border_color,
                    renderer,
                );
                slider.draw_groove(&node.core, renderer);
            }
            Widget::SliderHandle
            | Widget::Container(_)
            | Widget::RadioGroup(_)
            | Widget::Composite { .. }
            | Widget::MenuPane { .. } => {
                draw_background(
                    &node.core,
                    node.core.background_color,
                    node.core.border_color,
                    renderer,
                );
            }
        }

        for &child in &node.children {
            self.draw_element(child, renderer);
        }

        if self.config.debug_layout && node.widget.is_group() {
            let color = match node.widget {
                Widget::Composite { .. } | Widget::MenuPane { .. } => DEBUG_COMPOSITE_COLOR,
                _ => DEBUG_CONTAINER_COLOR,
            };
            let r = node.core.rect;
            renderer.draw_frame(r.x, r.y, r.width, r.height, node.core.z, color);
            renderer.draw_text(
                node.widget.kind(),
                r.x,
                r.y,
                node.core.z,
                node.core.font_size,
                color,
            );
        }
    }
}

/// Fill then outline the element's rect, skipping transparent colours.
pub(crate) fn draw_background(
    core: &ElementCore,
    background: Color,
    border: Color,
    renderer: &mut dyn Renderer,
) {
    let r = core.rect;
    if !background.is_transparent() {
        renderer.draw_rect(r.x, r.y, r.width, r.height, core.z, background);
    }
    if !border.is_transparent() {
        renderer.draw_frame(r.x, r.y, r.width, r.height, core.z, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidney_core::render::{DrawCommand, DrawList, MonospaceMetrics};

    fn gui() -> Gui {
        Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5))
    }

    #[test]
    fn options_fall_back_to_config() {
        let config = GuiConfig::default().with_padding(2.0, 3.0);
        let core = ElementOptions::new()
            .with_size(10.0, 20.0)
            .core(&config, Defaults::default());
        assert_eq!((core.padding_x, core.padding_y), (2.0, 3.0));
        assert_eq!(core.font_size, 15.0);
        assert_eq!((core.min_width, core.min_height), (10.0, 20.0));
        assert!(core.enabled && core.visible);
    }

    #[test]
    fn set_position_moves_descendants() {
        let mut gui = gui();
        let outer = gui
            .container(gui.content(), ElementOptions::new().with_position(10.0, 10.0))
            .unwrap();
        let label = gui
            .label(outer, "hi", ElementOptions::new().with_position(15.0, 12.0))
            .unwrap();

        gui.set_position(outer, 110.0, 60.0).unwrap();

        assert_eq!(gui.rect(outer).unwrap().x, 110.0);
        let moved = gui.rect(label).unwrap();
        assert_eq!((moved.x, moved.y), (115.0, 62.0));
    }

    #[test]
    fn hidden_elements_are_not_hit() {
        let mut gui = gui();
        let label = gui
            .label(gui.content(), "x", ElementOptions::new().with_size(50.0, 50.0))
            .unwrap();
        assert!(gui.hit(label, 5.0, 5.0));
        gui.set_visible(label, false).unwrap();
        assert!(!gui.hit(label, 5.0, 5.0));
    }

    #[test]
    fn transparent_background_draws_nothing() {
        let mut gui = gui();
        let container = gui.container(gui.content(), ElementOptions::new()).unwrap();
        let mut list = DrawList::new();
        gui.draw_element(container, &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn debug_layout_outlines_containers() {
        let mut gui = Gui::new(
            GuiConfig::default().with_debug_layout(true),
            MonospaceMetrics::default(),
        );
        let container = gui.container(gui.content(), ElementOptions::new()).unwrap();
        let mut list = DrawList::new();
        gui.draw_element(container, &mut list);
        assert!(matches!(
            list.commands()[0],
            DrawCommand::Frame {
                color: DEBUG_CONTAINER_COLOR,
                ..
            }
        ));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Container"]);
    }

    #[test]
    fn set_text_on_container_is_wrong_widget() {
        let mut gui = gui();
        let content = gui.content();
        assert!(matches!(
            gui.set_text(content, "x"),
            Err(GuiError::WrongWidget { .. })
        ));
    }
}
