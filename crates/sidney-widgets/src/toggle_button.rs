#![forbid(unsafe_code)]

//! Two-state button. Each state has its own presentation.

use sidney_core::event::{EventArgs, names};
use sidney_core::render::Color;
use sidney_core::value::Value;

use crate::button::{ButtonState, button_defaults};
use crate::element::{ElementId, ElementOptions, Widget};
use crate::error::GuiResult;
use crate::gui::Gui;
use crate::label::{Icon, LabelContent};

pub const DEFAULT_BORDER_COLOR_ON: Color = Color::rgb(255, 255, 0);
pub const DEFAULT_BORDER_COLOR_OFF: Color = Color::rgb(100, 100, 0);

/// Presentation for one state of a toggle button.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleFace {
    pub text: String,
    pub icon: Option<Icon>,
    pub tip: String,
    pub border_color: Color,
}

/// Toggle button state.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleState {
    pub button: ButtonState,
    pub on: bool,
    pub on_face: ToggleFace,
    pub off_face: ToggleFace,
}

/// Per-state overrides for [`Gui::toggle_button`].
///
/// Unset text, icon and tip fall back to the common options; unset borders
/// fall back to the common border colour, then to yellow/dark yellow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToggleOptions {
    pub on: bool,
    pub text_on: Option<String>,
    pub text_off: Option<String>,
    pub icon_on: Option<Icon>,
    pub icon_off: Option<Icon>,
    pub tip_on: Option<String>,
    pub tip_off: Option<String>,
    pub border_color_on: Option<Color>,
    pub border_color_off: Option<Color>,
}

impl ToggleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state.
    #[must_use]
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    #[must_use]
    pub fn with_texts(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        self.text_on = Some(on.into());
        self.text_off = Some(off.into());
        self
    }

    #[must_use]
    pub fn with_icons(mut self, on: Icon, off: Icon) -> Self {
        self.icon_on = Some(on);
        self.icon_off = Some(off);
        self
    }

    #[must_use]
    pub fn with_tips(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        self.tip_on = Some(on.into());
        self.tip_off = Some(off.into());
        self
    }

    #[must_use]
    pub fn with_border_colors(mut self, on: Color, off: Color) -> Self {
        self.border_color_on = Some(on);
        self.border_color_off = Some(off);
        self
    }
}

fn on_clicked(gui: &mut Gui, id: ElementId, _: &EventArgs) {
    if !gui.is_enabled(id) {
        return;
    }
    let on = gui.is_toggle_on(id);
    if let Err(err) = gui.set_toggle_on(id, !on) {
        tracing::debug!(message = "gui.toggle.error", id = ?id, error = %err);
    }
}

impl Gui {
    /// Create a toggle button.
    pub fn toggle_button(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        text: impl Into<String>,
        options: ElementOptions,
        toggle: ToggleOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let text = text.into();
        let core = options.core(&self.config, button_defaults());
        let common_border = options.border_color;

        let on_face = ToggleFace {
            text: toggle.text_on.unwrap_or_else(|| text.clone()),
            icon: toggle.icon_on.or(options.icon),
            tip: toggle.tip_on.unwrap_or_else(|| core.tip.clone()),
            border_color: toggle
                .border_color_on
                .or(common_border)
                .unwrap_or(DEFAULT_BORDER_COLOR_ON),
        };
        let off_face = ToggleFace {
            text: toggle.text_off.unwrap_or(text),
            icon: toggle.icon_off.or(options.icon),
            tip: toggle.tip_off.unwrap_or_else(|| core.tip.clone()),
            border_color: toggle
                .border_color_off
                .or(common_border)
                .unwrap_or(DEFAULT_BORDER_COLOR_OFF),
        };

        let state = ToggleState {
            button: ButtonState::new(LabelContent::default()),
            on: toggle.on,
            on_face,
            off_face,
        };
        let id = self.insert_raw(core, Widget::ToggleButton(state));
        self.apply_toggle_face(id);
        self.register_button_handlers(id);
        self.set_default_handler(id, names::CLICKED_LEFT_MOUSE_BUTTON, on_clicked);
        self.post_init(id, parent)?;
        Ok(id)
    }

    /// Current state of a toggle button (`false` for other widgets).
    #[must_use]
    pub fn is_toggle_on(&self, id: ElementId) -> bool {
        matches!(
            self.nodes.get(id).map(|n| &n.widget),
            Some(Widget::ToggleButton(ToggleState { on: true, .. }))
        )
    }

    /// Switch state, swapping the whole presentation.
    ///
    /// Publishes `changed` with the new state when it actually changes.
    pub fn set_toggle_on(&mut self, id: ElementId, on: bool) -> GuiResult<()> {
        let node = self.node_mut(id)?;
        let Widget::ToggleButton(state) = &mut node.widget else {
            return Err(self.wrong_widget(id, "ToggleButton"));
        };
        if state.on == on {
            return Ok(());
        }
        state.on = on;
        self.apply_toggle_face(id);
        self.recalc(id)?;
        tracing::debug!(message = "gui.toggle.changed", id = ?id, on);
        self.publish(id, names::CHANGED, &EventArgs::Value(Value::Bool(on)));
        Ok(())
    }

    fn apply_toggle_face(&mut self, id: ElementId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let Widget::ToggleButton(state) = &mut node.widget else {
            return;
        };
        let face = if state.on {
            &state.on_face
        } else {
            &state.off_face
        };
        state.button.label = LabelContent::new(face.text.clone(), face.icon);
        node.core.tip = face.tip.clone();
        node.core.border_color = face.border_color;
    }
}
