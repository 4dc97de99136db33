#![forbid(unsafe_code)]

//! Push button: a label that highlights while hovered.

use sidney_core::event::{EventArgs, names};
use sidney_core::render::Color;

use crate::element::{Defaults, ElementCore, ElementId, ElementOptions, Widget};
use crate::error::GuiResult;
use crate::gui::Gui;
use crate::label::LabelContent;

pub const DEFAULT_BACKGROUND_COLOR: Color = Color::rgb(100, 100, 100);
pub const DEFAULT_BORDER_COLOR: Color = Color::rgb(150, 150, 150);
pub const DEFAULT_COLOR: Color = Color::rgb(255, 255, 255);
pub const HOVER_COLOR: Color = Color::rgb(150, 150, 150);
pub const DISABLED_COLOR: Color = Color::rgb(150, 150, 150);

/// State shared by every button-like widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonState {
    pub label: LabelContent,
    /// Pointer is over the button.
    pub hovered: bool,
}

impl ButtonState {
    pub(crate) fn new(label: LabelContent) -> Self {
        Self {
            label,
            hovered: false,
        }
    }
}

/// Background and text colour for the button's current state.
///
/// Hover highlights only enabled buttons; disabled buttons grey their text.
#[must_use]
pub fn button_colors(core: &ElementCore, button: &ButtonState) -> (Color, Color) {
    let background = if button.hovered && core.enabled {
        HOVER_COLOR
    } else {
        core.background_color
    };
    let text = if core.enabled {
        core.color
    } else {
        DISABLED_COLOR
    };
    (background, text)
}

pub(crate) fn button_defaults() -> Defaults {
    Defaults {
        background_color: DEFAULT_BACKGROUND_COLOR,
        border_color: DEFAULT_BORDER_COLOR,
        color: DEFAULT_COLOR,
        ..Defaults::default()
    }
}

fn on_enter(gui: &mut Gui, id: ElementId, _: &EventArgs) {
    if let Some(button) = gui.nodes.get_mut(id).and_then(|n| n.widget.button_mut()) {
        button.hovered = true;
    }
}

fn on_leave(gui: &mut Gui, id: ElementId, _: &EventArgs) {
    if let Some(button) = gui.nodes.get_mut(id).and_then(|n| n.widget.button_mut()) {
        button.hovered = false;
    }
}

impl Gui {
    /// Create a push button.
    pub fn button(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        text: impl Into<String>,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let core = options.core(&self.config, button_defaults());
        let state = ButtonState::new(LabelContent::new(text, options.icon));
        let id = self.insert_raw(core, Widget::Button(state));
        self.register_button_handlers(id);
        self.post_init(id, parent)?;
        Ok(id)
    }

    pub(crate) fn register_button_handlers(&mut self, id: ElementId) {
        self.set_default_handler(id, names::ENTER, on_enter);
        self.set_default_handler(id, names::LEAVE, on_leave);
    }

    /// Whether the pointer is over a button-like widget.
    #[must_use]
    pub fn is_hovered(&self, id: ElementId) -> bool {
        self.nodes
            .get(id)
            .and_then(|n| n.widget.button())
            .is_some_and(|b| b.hovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GuiConfig;
    use sidney_core::render::{DrawCommand, DrawList, MonospaceMetrics};

    fn gui() -> Gui {
        Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5))
    }

    fn first_fill(list: &DrawList) -> Option<Color> {
        list.commands().iter().find_map(|c| match c {
            DrawCommand::Rect { color, .. } => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn hover_follows_enter_and_leave() {
        let mut gui = gui();
        let button = gui.button(gui.content(), "OK", ElementOptions::new()).unwrap();
        gui.publish(button, names::ENTER, &EventArgs::None);
        assert!(gui.is_hovered(button));
        gui.publish(button, names::LEAVE, &EventArgs::None);
        assert!(!gui.is_hovered(button));
    }

    #[test]
    fn colors_depend_on_hover_and_enabled() {
        let mut gui = gui();
        let button = gui.button(gui.content(), "OK", ElementOptions::new()).unwrap();

        let mut list = DrawList::new();
        gui.draw_element(button, &mut list);
        assert_eq!(first_fill(&list), Some(DEFAULT_BACKGROUND_COLOR));

        gui.publish(button, names::ENTER, &EventArgs::None);
        list.clear();
        gui.draw_element(button, &mut list);
        assert_eq!(first_fill(&list), Some(HOVER_COLOR));

        gui.set_enabled(button, false).unwrap();
        list.clear();
        gui.draw_element(button, &mut list);
        assert_eq!(first_fill(&list), Some(DEFAULT_BACKGROUND_COLOR));
        assert!(list.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Text { color, .. } if *color == DISABLED_COLOR
        )));
    }

    #[test]
    fn color_function_is_pure() {
        let core = ElementOptions::new().core(&GuiConfig::default(), button_defaults());
        let hovered = ButtonState {
            hovered: true,
            ..ButtonState::default()
        };
        assert_eq!(button_colors(&core, &hovered), (HOVER_COLOR, DEFAULT_COLOR));
        assert_eq!(
            button_colors(&core, &ButtonState::default()),
            (DEFAULT_BACKGROUND_COLOR, DEFAULT_COLOR)
        );
        let disabled = ElementCore {
            enabled: false,
            ..core
        };
        assert_eq!(
            button_colors(&disabled, &hovered),
            (DEFAULT_BACKGROUND_COLOR, DISABLED_COLOR)
        );
    }

    #[test]
    fn explicit_subscribers_run_before_built_in_hover() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut gui = gui();
        let button = gui.button(gui.content(), "OK", ElementOptions::new()).unwrap();
        let seen = Rc::new(Cell::new(None));
        let probe = seen.clone();
        gui.subscribe(button, names::ENTER, move |gui, id, _| {
            probe.set(Some(gui.is_hovered(id)));
        })
        .unwrap();

        assert_eq!(gui.publish(button, names::ENTER, &EventArgs::None), 2);
        assert_eq!(seen.get(), Some(false));
        assert!(gui.is_hovered(button));
    }
}
