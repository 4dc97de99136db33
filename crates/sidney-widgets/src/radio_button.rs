#![forbid(unsafe_code)]

//! Mutually exclusive buttons governed by a group.
//!
//! A group holds at most one checked button. Checking a button unchecks the
//! previous selection (publishing `unchecked` on it), then the group
//! publishes `changed` with the new value and the button publishes
//! `checked`.

use sidney_core::event::{EventArgs, names};
use sidney_core::render::Color;
use sidney_core::value::Value;

use crate::button::{ButtonState, button_defaults};
use crate::element::{Defaults, ElementId, ElementOptions, Widget};
use crate::error::{GuiError, GuiResult};
use crate::gui::Gui;
use crate::label::LabelContent;
use crate::packer::Packing;

pub const DEFAULT_BORDER_COLOR_CHECKED: Color = Color::rgb(255, 0, 255);
pub const DEFAULT_BORDER_COLOR_UNCHECKED: Color = Color::rgb(50, 50, 50);

/// State of a radio group container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadioGroupState {
    pub packing: Packing,
    pub selected: Option<ElementId>,
    /// Member buttons in registration order.
    pub buttons: Vec<ElementId>,
}

/// State of one radio button.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioState {
    pub button: ButtonState,
    pub value: Value,
    pub checked: bool,
    pub group: ElementId,
    pub border_color_checked: Color,
    pub border_color_unchecked: Color,
}

impl RadioState {
    pub(crate) fn border_color(&self) -> Color {
        if self.checked {
            self.border_color_checked
        } else {
            self.border_color_unchecked
        }
    }
}

/// Radio-specific options for [`Gui::radio_button`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadioOptions {
    pub checked: bool,
    /// Governing group. Found among the ancestors when not given.
    pub group: Option<ElementId>,
    pub border_color_checked: Option<Color>,
    pub border_color_unchecked: Option<Color>,
}

impl RadioOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: ElementId) -> Self {
        self.group = Some(group);
        self
    }

    #[must_use]
    pub fn with_border_colors(mut self, checked: Color, unchecked: Color) -> Self {
        self.border_color_checked = Some(checked);
        self.border_color_unchecked = Some(unchecked);
        self
    }
}

fn on_clicked(gui: &mut Gui, id: ElementId, _: &EventArgs) {
    if !gui.is_enabled(id) {
        return;
    }
    if let Err(err) = gui.check(id) {
        tracing::debug!(message = "gui.radio.error", id = ?id, error = %err);
    }
}

impl Gui {
    /// Create a container governing the radio buttons placed inside it.
    pub fn radio_group(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        packing: Packing,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let core = options.core(
            &self.config,
            Defaults {
                padding: Some((0.0, 0.0)),
                ..Defaults::default()
            },
        );
        let state = RadioGroupState {
            packing,
            ..RadioGroupState::default()
        };
        let id = self.insert_raw(core, Widget::RadioGroup(state));
        self.post_init(id, parent)?;
        Ok(id)
    }

    /// Create a radio button carrying `value`.
    ///
    /// The group is taken from `radio.group`, or else the nearest radio
    /// group among `parent` and its ancestors. Having neither is an error.
    pub fn radio_button(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        value: impl Into<Value>,
        text: impl Into<String>,
        options: ElementOptions,
        radio: RadioOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let group = self.resolve_radio_group(parent, radio.group)?;

        let mut core = options.core(&self.config, button_defaults());
        let state = RadioState {
            button: ButtonState::new(LabelContent::new(text, options.icon)),
            value: value.into(),
            checked: false,
            group,
            border_color_checked: radio
                .border_color_checked
                .unwrap_or(DEFAULT_BORDER_COLOR_CHECKED),
            border_color_unchecked: radio
                .border_color_unchecked
                .unwrap_or(DEFAULT_BORDER_COLOR_UNCHECKED),
        };
        core.border_color = state.border_color();
        let id = self.insert_raw(core, Widget::RadioButton(state));
        self.register_button_handlers(id);
        self.set_default_handler(id, names::CLICKED_LEFT_MOUSE_BUTTON, on_clicked);
        self.post_init(id, parent)?;

        if let Some(Widget::RadioGroup(state)) = self.nodes.get_mut(group).map(|n| &mut n.widget) {
            state.buttons.push(id);
        }
        if radio.checked {
            self.check(id)?;
        }
        Ok(id)
    }

    fn resolve_radio_group(
        &self,
        parent: Option<ElementId>,
        explicit: Option<ElementId>,
    ) -> GuiResult<ElementId> {
        if let Some(group) = explicit {
            return match self.node(group)?.widget {
                Widget::RadioGroup(_) => Ok(group),
                _ => Err(self.wrong_widget(group, "RadioGroup")),
            };
        }
        let parent = parent.ok_or(GuiError::RadioButtonOutsideGroup)?;
        std::iter::once(parent)
            .chain(self.ancestors(parent))
            .find(|id| matches!(self.widget(*id), Some(Widget::RadioGroup(_))))
            .ok_or(GuiError::RadioButtonOutsideGroup)
    }

    fn radio(&self, id: ElementId) -> GuiResult<&RadioState> {
        match &self.node(id)?.widget {
            Widget::RadioButton(radio) => Ok(radio),
            _ => Err(self.wrong_widget(id, "RadioButton")),
        }
    }

    fn radio_group_state(&self, id: ElementId) -> GuiResult<&RadioGroupState> {
        match &self.node(id)?.widget {
            Widget::RadioGroup(group) => Ok(group),
            _ => Err(self.wrong_widget(id, "RadioGroup")),
        }
    }

    fn set_radio_checked(&mut self, id: ElementId, checked: bool) {
        if let Some(node) = self.nodes.get_mut(id)
            && let Widget::RadioButton(radio) = &mut node.widget
        {
            radio.checked = checked;
            node.core.border_color = radio.border_color();
        }
    }

    /// Check a radio button, unchecking the group's previous selection.
    ///
    /// Checking an already checked button does nothing.
    pub fn check(&mut self, id: ElementId) -> GuiResult<()> {
        let radio = self.radio(id)?;
        if radio.checked {
            return Ok(());
        }
        let group = radio.group;
        let value = radio.value.clone();

        let previous = self.radio_group_state(group)?.selected;
        if let Some(previous) = previous {
            self.set_radio_checked(previous, false);
            self.publish(previous, names::UNCHECKED, &EventArgs::None);
        }

        self.set_radio_checked(id, true);
        if let Some(Widget::RadioGroup(state)) = self.nodes.get_mut(group).map(|n| &mut n.widget) {
            state.selected = Some(id);
        }
        tracing::debug!(message = "gui.radio.checked", group = ?group, button = ?id);
        self.publish(group, names::CHANGED, &EventArgs::Value(value));
        self.publish(id, names::CHECKED, &EventArgs::None);
        Ok(())
    }

    #[must_use]
    pub fn is_checked(&self, id: ElementId) -> bool {
        self.radio(id).is_ok_and(|r| r.checked)
    }

    /// Value carried by a radio button.
    pub fn radio_value(&self, id: ElementId) -> GuiResult<Value> {
        Ok(self.radio(id)?.value.clone())
    }

    /// Governing group of a radio button.
    pub fn radio_group_of(&self, id: ElementId) -> GuiResult<ElementId> {
        Ok(self.radio(id)?.group)
    }

    /// Currently checked button of a group.
    pub fn radio_group_selected(&self, group: ElementId) -> GuiResult<Option<ElementId>> {
        Ok(self.radio_group_state(group)?.selected)
    }

    /// Member buttons of a group in registration order.
    pub fn radio_group_buttons(&self, group: ElementId) -> GuiResult<&[ElementId]> {
        Ok(self.radio_group_state(group)?.buttons.as_slice())
    }

    /// Value of the checked button, or [`Value::None`] when nothing is checked.
    pub fn radio_group_value(&self, group: ElementId) -> GuiResult<Value> {
        match self.radio_group_state(group)?.selected {
            Some(selected) => self.radio_value(selected),
            None => Ok(Value::None),
        }
    }

    /// Check the group's button carrying `value`.
    pub fn set_radio_group_value(
        &mut self,
        group: ElementId,
        value: impl Into<Value>,
    ) -> GuiResult<ElementId> {
        let value = value.into();
        let button = self
            .radio_group_state(group)?
            .buttons
            .iter()
            .copied()
            .find(|b| self.radio(*b).is_ok_and(|r| r.value == value))
            .ok_or_else(|| GuiError::NoSuchRadioValue(format!("{value:?}")))?;
        self.check(button)?;
        Ok(button)
    }

    pub(crate) fn leave_radio_group(&mut self, group: ElementId, button: ElementId) {
        if let Some(Widget::RadioGroup(state)) = self.nodes.get_mut(group).map(|n| &mut n.widget) {
            state.buttons.retain(|b| *b != button);
            if state.selected == Some(button) {
                state.selected = None;
            }
        }
    }
}
