#![forbid(unsafe_code)]

//! Popup menus.
//!
//! A menu pane is a composite over a vertical packer of items. It is never
//! parented by the caller: the surface attaches it to the root while it is
//! shown (see [`Gui::show_menu`]). Pressing an enabled item with either
//! button publishes `selected` with the item's value on the menu, then hides
//! the menu if it is the active one.

use sidney_core::event::{EventArgs, names};
use sidney_core::render::{Color, Renderer};
use sidney_core::value::Value;

use crate::button::{ButtonState, button_colors, button_defaults};
use crate::element::{Defaults, ElementCore, ElementId, ElementOptions, Widget, draw_background};
use crate::error::{GuiError, GuiResult};
use crate::gui::Gui;
use crate::label::{Icon, LabelContent};
use crate::packer::Packing;

pub const DEFAULT_BACKGROUND_COLOR: Color = Color::rgb(50, 50, 50);
pub const DEFAULT_SEPARATOR_HEIGHT: f32 = 1.0;

/// State of a menu entry or separator.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemState {
    pub button: ButtonState,
    pub value: Value,
    /// Right-aligned shortcut hint; empty for none.
    pub shortcut: String,
    /// Row height when this item is a separator.
    pub separator: Option<f32>,
    /// Owning menu pane.
    pub menu: ElementId,
}

/// Options for [`Gui::menu_add_item`].
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemOptions {
    pub text: String,
    pub shortcut: String,
    pub enabled: bool,
    pub icon: Option<Icon>,
    pub tip: String,
}

impl Default for MenuItemOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            shortcut: String::new(),
            enabled: true,
            icon: None,
            tip: String::new(),
        }
    }
}

impl MenuItemOptions {
    /// Item showing `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = shortcut.into();
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }
}

fn on_item_pressed(gui: &mut Gui, id: ElementId, _: &EventArgs) {
    let Some(node) = gui.nodes.get(id) else {
        return;
    };
    let Widget::MenuItem(item) = &node.widget else {
        return;
    };
    if !node.core.enabled || item.separator.is_some() {
        return;
    }
    let menu = item.menu;
    let value = item.value.clone();
    tracing::debug!(message = "gui.menu.selected", menu = ?menu, item = ?id);
    gui.publish(menu, names::SELECTED, &EventArgs::Value(value));
    if gui.active_menu() == Some(menu) {
        gui.hide_menu();
    }
}

impl Gui {
    /// Create an unparented menu pane drawn above everything else.
    pub fn menu_pane(&mut self, options: ElementOptions) -> GuiResult<ElementId> {
        let packing = Packing::vertical(0.0);
        let inner = self.spawn_inner(packing, &options);
        let core = options.core(
            &self.config,
            Defaults {
                background_color: DEFAULT_BACKGROUND_COLOR,
                padding: Some((0.0, 0.0)),
                z: f32::INFINITY,
                ..Defaults::default()
            },
        );
        let id = self.insert_raw(core, Widget::MenuPane { inner });
        self.adopt(id, inner);
        self.post_init(id, None)?;
        Ok(id)
    }

    fn menu_inner(&self, menu: ElementId) -> GuiResult<ElementId> {
        match self.node(menu)?.widget {
            Widget::MenuPane { inner } => Ok(inner),
            _ => Err(self.wrong_widget(menu, "MenuPane")),
        }
    }

    /// Append an item carrying `value`.
    pub fn menu_add_item(
        &mut self,
        menu: ElementId,
        value: impl Into<Value>,
        options: MenuItemOptions,
    ) -> GuiResult<ElementId> {
        self.add_menu_entry(menu, value.into(), options, None)
    }

    /// Append a thin, disabled separator row.
    pub fn menu_add_separator(&mut self, menu: ElementId) -> GuiResult<ElementId> {
        self.add_menu_entry(
            menu,
            Value::None,
            MenuItemOptions::default().with_enabled(false),
            Some(DEFAULT_SEPARATOR_HEIGHT),
        )
    }

    fn add_menu_entry(
        &mut self,
        menu: ElementId,
        value: Value,
        options: MenuItemOptions,
        separator: Option<f32>,
    ) -> GuiResult<ElementId> {
        let inner = self.menu_inner(menu)?;
        let z = self.node(menu)?.core.z;
        let element_options = ElementOptions {
            z: Some(z),
            tip: options.tip,
            enabled: Some(options.enabled),
            ..ElementOptions::default()
        };
        let core = element_options.core(
            &self.config,
            Defaults {
                border_color: Color::TRANSPARENT,
                ..button_defaults()
            },
        );
        let state = MenuItemState {
            button: ButtonState::new(LabelContent::new(options.text, options.icon)),
            value,
            shortcut: options.shortcut,
            separator,
            menu,
        };
        let id = self.insert_raw(core, Widget::MenuItem(state));
        self.register_button_handlers(id);
        self.set_default_handler(id, names::LEFT_MOUSE_BUTTON, on_item_pressed);
        self.set_default_handler(id, names::RIGHT_MOUSE_BUTTON, on_item_pressed);
        self.post_init(id, Some(inner))?;
        Ok(id)
    }

    /// Items and separators in display order.
    pub fn menu_items(&self, menu: ElementId) -> GuiResult<&[ElementId]> {
        Ok(self.children(self.menu_inner(menu)?))
    }

    /// Number of rows, separators included.
    pub fn menu_len(&self, menu: ElementId) -> GuiResult<usize> {
        Ok(self.menu_items(menu)?.len())
    }

    /// Row at `index`.
    pub fn menu_item_at(&self, menu: ElementId, index: usize) -> GuiResult<ElementId> {
        let items = self.menu_items(menu)?;
        items
            .get(index)
            .copied()
            .ok_or(GuiError::IndexOutOfRange {
                index,
                len: items.len(),
            })
    }

    /// First selectable item carrying `value`.
    pub fn menu_find(&self, menu: ElementId, value: &Value) -> GuiResult<Option<ElementId>> {
        Ok(self
            .menu_items(menu)?
            .iter()
            .copied()
            .find(|item| self.menu_item(*item).is_some_and(|s| s.separator.is_none() && s.value == *value)))
    }

    /// Row index of the first selectable item carrying `value`.
    pub fn menu_index_of(&self, menu: ElementId, value: &Value) -> GuiResult<Option<usize>> {
        let Some(item) = self.menu_find(menu, value)? else {
            return Ok(None);
        };
        Ok(self.menu_items(menu)?.iter().position(|i| *i == item))
    }

    /// Value of a menu item.
    #[must_use]
    pub fn menu_item_value(&self, item: ElementId) -> Option<&Value> {
        self.menu_item(item).map(|s| &s.value)
    }

    /// Whether a menu row is a separator.
    #[must_use]
    pub fn is_separator(&self, item: ElementId) -> bool {
        self.menu_item(item).is_some_and(|s| s.separator.is_some())
    }

    pub(crate) fn menu_item(&self, item: ElementId) -> Option<&MenuItemState> {
        match self.widget(item)? {
            Widget::MenuItem(state) => Some(state),
            _ => None,
        }
    }

    /// Size every row naturally, widen them all to the widest, repack.
    pub(crate) fn layout_menu_pane(&mut self, id: ElementId, inner: ElementId) {
        let rows = self.children(inner).to_vec();
        for row in &rows {
            self.layout_menu_item(*row);
        }
        let widest = rows
            .iter()
            .filter_map(|r| self.rect(*r))
            .map(|r| r.width)
            .fold(0.0f32, f32::max);
        for row in rows {
            if let Some(node) = self.nodes.get_mut(row) {
                node.core.rect.width = widest;
            }
        }
        if let Some(Widget::Container(packing)) = self.widget(inner) {
            let packing = *packing;
            self.layout_packed(inner, packing);
        }
        self.layout_composite(id, inner);
    }

    /// Label layout, plus room for the shortcut. Separators are one thin row.
    pub(crate) fn layout_menu_item(&mut self, id: ElementId) {
        self.layout_label(id);
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let Widget::MenuItem(item) = &node.widget else {
            return;
        };
        let extra = if item.shortcut.is_empty() {
            0.0
        } else {
            self.metrics
                .text_width(&format!("  {}", item.shortcut), node.core.font_size)
        };
        let separator = item.separator;
        if let Some(node) = self.nodes.get_mut(id) {
            node.core.rect.width += extra;
            if let Some(height) = separator {
                node.core.rect.height = height;
            }
        }
    }

    pub(crate) fn draw_menu_item(
        &self,
        core: &ElementCore,
        item: &MenuItemState,
        renderer: &mut dyn Renderer,
    ) {
        let (background, color) = button_colors(core, &item.button);
        draw_background(core, background, core.border_color, renderer);
        if item.separator.is_some() {
            return;
        }
        self.draw_label_content(core, &item.button.label, color, renderer);
        if !item.shortcut.is_empty() {
            let width = self.metrics.text_width(&item.shortcut, core.font_size);
            let line_height = self.metrics.line_height(core.font_size);
            let r = core.rect;
            renderer.draw_text(
                &item.shortcut,
                r.right() - core.padding_x - width,
                r.y + ((r.height - line_height) / 2.0).floor(),
                core.z,
                core.font_size,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GuiConfig;
    use sidney_core::render::{DrawList, MonospaceMetrics};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn gui() -> Gui {
        Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5))
    }

    fn file_menu(gui: &mut Gui) -> (ElementId, Vec<ElementId>) {
        let menu = gui.menu_pane(ElementOptions::new()).unwrap();
        let open = gui
            .menu_add_item(menu, "open", MenuItemOptions::new("Open").with_shortcut("Ctrl+O"))
            .unwrap();
        let sep = gui.menu_add_separator(menu).unwrap();
        let quit = gui
            .menu_add_item(menu, "quit", MenuItemOptions::new("Quit everything"))
            .unwrap();
        (menu, vec![open, sep, quit])
    }

    #[test]
    fn rows_share_the_widest_width() {
        let mut gui = gui();
        let (menu, rows) = file_menu(&mut gui);
        let widths: Vec<f32> = rows.iter().map(|r| gui.rect(*r).unwrap().width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert_eq!(gui.rect(menu).unwrap().width, widths[0]);
        assert_eq!(gui.rect(rows[1]).unwrap().height, DEFAULT_SEPARATOR_HEIGHT);
        assert_eq!(gui.core(menu).unwrap().z, f32::INFINITY);
        assert_eq!(gui.core(rows[0]).unwrap().z, f32::INFINITY);
    }

    #[test]
    fn shortcut_widens_item() {
        let mut gui = gui();
        let menu = gui.menu_pane(ElementOptions::new()).unwrap();
        let item = gui
            .menu_add_item(menu, 1, MenuItemOptions::new("ab").with_shortcut("X"))
            .unwrap();
        assert_eq!(gui.rect(item).unwrap().width, 8.0 + 15.0 + 3.0 * 7.5);

        let mut list = DrawList::new();
        gui.draw_element(item, &mut list);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["ab", "X"]);
    }

    #[test]
    fn lookup_by_value_and_index() {
        let mut gui = gui();
        let (menu, rows) = file_menu(&mut gui);
        assert_eq!(gui.menu_len(menu).unwrap(), 3);
        assert_eq!(gui.menu_find(menu, &Value::from("quit")).unwrap(), Some(rows[2]));
        assert_eq!(gui.menu_index_of(menu, &Value::from("quit")).unwrap(), Some(2));
        assert_eq!(gui.menu_find(menu, &Value::None).unwrap(), None);
        assert_eq!(gui.menu_item_at(menu, 1).unwrap(), rows[1]);
        assert!(gui.is_separator(rows[1]));
        assert_eq!(
            gui.menu_item_at(menu, 3),
            Err(GuiError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn left_or_right_press_selects() {
        let mut gui = gui();
        let (menu, rows) = file_menu(&mut gui);
        let picked = Rc::new(RefCell::new(Vec::new()));
        let log = picked.clone();
        gui.subscribe(menu, names::SELECTED, move |_, _, args| {
            log.borrow_mut().push(args.value().cloned());
        })
        .unwrap();

        gui.publish(rows[0], names::LEFT_MOUSE_BUTTON, &EventArgs::None);
        gui.publish(rows[2], names::RIGHT_MOUSE_BUTTON, &EventArgs::None);
        gui.publish(rows[1], names::LEFT_MOUSE_BUTTON, &EventArgs::None);
        assert_eq!(
            *picked.borrow(),
            vec![Some(Value::from("open")), Some(Value::from("quit"))]
        );
    }

    #[test]
    fn disabled_items_never_select() {
        let mut gui = gui();
        let menu = gui.menu_pane(ElementOptions::new()).unwrap();
        let item = gui
            .menu_add_item(menu, 1, MenuItemOptions::new("x").with_enabled(false))
            .unwrap();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        gui.subscribe(menu, names::SELECTED, move |_, _, _| *c.borrow_mut() += 1)
            .unwrap();
        gui.publish(item, names::LEFT_MOUSE_BUTTON, &EventArgs::None);
        assert_eq!(*count.borrow(), 0);
    }
}
