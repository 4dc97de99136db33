#![forbid(unsafe_code)]

//! Drop-down selector: a button that opens a menu of values below itself.

use sidney_core::event::{EventArgs, names};
use sidney_core::render::Color;
use sidney_core::value::Value;

use crate::button::{ButtonState, button_defaults};
use crate::element::{Defaults, ElementId, ElementOptions, Widget};
use crate::error::{GuiError, GuiResult};
use crate::gui::Gui;
use crate::label::LabelContent;
use crate::menu_pane::MenuItemOptions;

pub const DEFAULT_BORDER_COLOR: Color = Color::rgb(255, 255, 255);
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::rgb(100, 100, 100);

/// Combo box state. The display text is the selected item's text.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboState {
    pub button: ButtonState,
    pub value: Value,
    /// Private menu listing the choices.
    pub menu: ElementId,
}

fn on_clicked(gui: &mut Gui, id: ElementId, _: &EventArgs) {
    if !gui.is_enabled(id) {
        return;
    }
    let Some(ComboState { menu, .. }) = gui.combo_state(id) else {
        return;
    };
    let menu = *menu;
    let Some(r) = gui.rect(id) else {
        return;
    };
    if let Err(err) = gui.set_position(menu, r.x, r.bottom() + 1.0) {
        tracing::debug!(message = "gui.combo.error", id = ?id, error = %err);
        return;
    }
    gui.show_menu(menu);
}

impl Gui {
    /// Create a combo box currently holding `value`.
    ///
    /// The value need not match an item yet; the text updates once an item
    /// carrying it is added.
    pub fn combo_box(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        value: impl Into<Value>,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let menu = self.menu_pane(ElementOptions::new())?;
        let core = options.core(
            &self.config,
            Defaults {
                background_color: DEFAULT_BACKGROUND_COLOR,
                border_color: DEFAULT_BORDER_COLOR,
                ..button_defaults()
            },
        );
        let state = ComboState {
            button: ButtonState::new(LabelContent::new(String::new(), options.icon)),
            value: value.into(),
            menu,
        };
        let id = self.insert_raw(core, Widget::ComboBox(state));
        self.register_button_handlers(id);
        self.set_default_handler(id, names::CLICKED_LEFT_MOUSE_BUTTON, on_clicked);
        self.subscribe(menu, names::SELECTED, move |gui, _, args| {
            let Some(value) = args.value() else {
                return;
            };
            if let Err(err) = gui.set_combo_value(id, value.clone()) {
                tracing::debug!(message = "gui.combo.error", id = ?id, error = %err);
            }
        })?;
        self.post_init(id, parent)?;
        Ok(id)
    }

    fn combo_state(&self, id: ElementId) -> Option<&ComboState> {
        match self.widget(id)? {
            Widget::ComboBox(state) => Some(state),
            _ => None,
        }
    }

    fn expect_combo(&self, id: ElementId) -> GuiResult<&ComboState> {
        self.node(id)?;
        self.combo_state(id)
            .ok_or_else(|| self.wrong_widget(id, "ComboBox"))
    }

    /// The menu listing the choices.
    pub fn combo_menu(&self, id: ElementId) -> GuiResult<ElementId> {
        Ok(self.expect_combo(id)?.menu)
    }

    /// Append a choice. If it carries the current value, it becomes the
    /// displayed text.
    pub fn combo_add_item(
        &mut self,
        id: ElementId,
        value: impl Into<Value>,
        options: MenuItemOptions,
    ) -> GuiResult<ElementId> {
        let value = value.into();
        let combo = self.expect_combo(id)?;
        let (menu, matches) = (combo.menu, combo.value == value);
        let text = options.text.clone();
        let item = self.menu_add_item(menu, value, options)?;
        if matches {
            self.set_combo_text(id, text)?;
        }
        Ok(item)
    }

    /// Current value.
    pub fn combo_value(&self, id: ElementId) -> GuiResult<&Value> {
        Ok(&self.expect_combo(id)?.value)
    }

    /// Select the item carrying `value`.
    ///
    /// Publishes `changed` only when the value differs from the current one.
    pub fn set_combo_value(&mut self, id: ElementId, value: impl Into<Value>) -> GuiResult<()> {
        let value = value.into();
        let combo = self.expect_combo(id)?;
        if combo.value == value {
            return Ok(());
        }
        let menu = combo.menu;
        let Some(item) = self.menu_find(menu, &value)? else {
            return Err(GuiError::NoSuchMenuValue(value.to_string()));
        };
        let text = self.text(item).unwrap_or_default();
        if let Some(Widget::ComboBox(state)) = self.nodes.get_mut(id).map(|n| &mut n.widget) {
            state.value = value.clone();
        }
        self.set_combo_text(id, text)?;
        tracing::debug!(message = "gui.combo.changed", id = ?id, value = %value);
        self.publish(id, names::CHANGED, &EventArgs::Value(value));
        Ok(())
    }

    /// Row index of the current value in the menu, if an item carries it.
    pub fn combo_index(&self, id: ElementId) -> GuiResult<Option<usize>> {
        let combo = self.expect_combo(id)?;
        self.menu_index_of(combo.menu, &combo.value)
    }

    /// Select the row at `index`. Indices past the end and separators are
    /// ignored.
    pub fn set_combo_index(&mut self, id: ElementId, index: usize) -> GuiResult<()> {
        let menu = self.expect_combo(id)?.menu;
        let Some(&item) = self.menu_items(menu)?.get(index) else {
            return Ok(());
        };
        if self.is_separator(item) {
            return Ok(());
        }
        let Some(value) = self.menu_item_value(item).cloned() else {
            return Ok(());
        };
        self.set_combo_value(id, value)
    }

    fn set_combo_text(&mut self, id: ElementId, text: String) -> GuiResult<()> {
        if let Some(label) = self.node_mut(id)?.widget.label_mut() {
            label.text = text;
        }
        self.recalc(id)
    }

    /// Label layout with room for at least four characters.
    pub(crate) fn layout_combo_box(&mut self, id: ElementId) {
        self.layout_label(id);
        if let Some(node) = self.nodes.get_mut(id) {
            let core = &mut node.core;
            core.rect.height = core.rect.height.max(core.font_size + core.padding_y * 2.0);
            core.rect.width = core
                .rect
                .width
                .max(core.font_size * 4.0 + core.padding_x * 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GuiConfig;
    use sidney_core::render::MonospaceMetrics;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn gui() -> Gui {
        Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5))
    }

    fn colours(gui: &mut Gui) -> ElementId {
        let combo = gui
            .combo_box(gui.content(), "green", ElementOptions::new())
            .unwrap();
        for (value, text) in [("red", "Red"), ("green", "Green"), ("blue", "Blue")] {
            gui.combo_add_item(combo, value, MenuItemOptions::new(text))
                .unwrap();
        }
        combo
    }

    #[test]
    fn text_follows_matching_item() {
        let mut gui = gui();
        let combo = colours(&mut gui);
        assert_eq!(gui.text(combo).as_deref(), Some("Green"));
        assert_eq!(gui.combo_index(combo).unwrap(), Some(1));
        assert_eq!(gui.menu_len(gui.combo_menu(combo).unwrap()).unwrap(), 3);
    }

    #[test]
    fn minimum_size_fits_four_characters() {
        let mut gui = gui();
        let combo = gui.combo_box(gui.content(), 0, ElementOptions::new()).unwrap();
        let r = gui.rect(combo).unwrap();
        assert_eq!(r.width, 15.0 * 4.0 + 8.0);
        assert_eq!(r.height, 15.0 + 8.0);
    }

    #[test]
    fn set_value_publishes_only_on_change() {
        let mut gui = gui();
        let combo = colours(&mut gui);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        gui.subscribe(combo, names::CHANGED, move |_, _, args| {
            log.borrow_mut().push(args.value().cloned());
        })
        .unwrap();

        gui.set_combo_value(combo, "green").unwrap();
        gui.set_combo_value(combo, "blue").unwrap();
        assert_eq!(*seen.borrow(), vec![Some(Value::from("blue"))]);
        assert_eq!(gui.text(combo).as_deref(), Some("Blue"));
        assert_eq!(
            gui.set_combo_value(combo, "mauve"),
            Err(GuiError::NoSuchMenuValue("mauve".into()))
        );
        assert_eq!(gui.combo_value(combo).unwrap(), &Value::from("blue"));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut gui = gui();
        let combo = colours(&mut gui);
        gui.set_combo_index(combo, 0).unwrap();
        assert_eq!(gui.combo_value(combo).unwrap(), &Value::from("red"));
        gui.set_combo_index(combo, 9).unwrap();
        assert_eq!(gui.combo_value(combo).unwrap(), &Value::from("red"));
    }

    #[test]
    fn menu_selection_sets_value() {
        let mut gui = gui();
        let combo = colours(&mut gui);
        let menu = gui.combo_menu(combo).unwrap();
        let blue = gui.menu_item_at(menu, 2).unwrap();
        gui.publish(blue, names::LEFT_MOUSE_BUTTON, &EventArgs::None);
        assert_eq!(gui.combo_value(combo).unwrap(), &Value::from("blue"));
    }

    #[test]
    fn destroying_combo_frees_its_menu() {
        let mut gui = gui();
        let combo = colours(&mut gui);
        let menu = gui.combo_menu(combo).unwrap();
        gui.destroy(combo).unwrap();
        assert!(!gui.contains(menu));
    }
}
