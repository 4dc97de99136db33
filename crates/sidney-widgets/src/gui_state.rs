#![forbid(unsafe_code)]

//! The surface controller.
//!
//! Once per frame, [`Gui::update`] hit-tests the pointer against the root,
//! dispatches hover transitions, runs the tooltip timer and updates every
//! element. Discrete input arrives through [`Gui::handle_event`].
//!
//! # Click arming
//!
//! A press remembers the element under the pointer. The following release
//! publishes a click only if it lands on that same element, so dragging off
//! a button never clicks it.
//!
//! # Menus
//!
//! At most one menu is attached to the root at a time. A press or release
//! outside the active menu dismisses it.

use sidney_core::event::{EventArgs, InputEvent, KeyEvent, MouseButton, names};
use sidney_core::input::InputSource;
use sidney_core::render::Renderer;

use crate::element::ElementId;
use crate::gui::Gui;

/// Interaction state of one surface.
#[derive(Debug, Default)]
pub(crate) struct Surface {
    /// Element under the pointer as of the last update.
    pub hovered: Option<ElementId>,
    /// Target of the last left press.
    pub armed_left: Option<ElementId>,
    /// Target of the last right press.
    pub armed_right: Option<ElementId>,
    pub focus: Option<ElementId>,
    /// Active modal menu.
    pub menu: Option<ElementId>,
    pub tool_tip: Option<ElementId>,
    /// Element receiving typed text.
    pub text_input: Option<ElementId>,
    /// Pointer position as of the last update.
    pub mouse: Option<(f32, f32)>,
    pub mouse_moved_at: u64,
    pub now_ms: u64,
}

impl Surface {
    /// Drop every reference to elements about to be freed.
    pub(crate) fn forget(&mut self, doomed: &[ElementId]) {
        for slot in [
            &mut self.hovered,
            &mut self.armed_left,
            &mut self.armed_right,
            &mut self.focus,
            &mut self.menu,
            &mut self.tool_tip,
            &mut self.text_input,
        ] {
            if slot.is_some_and(|id| doomed.contains(&id)) {
                *slot = None;
            }
        }
    }
}

impl Gui {
    // -------------------------------------------------------------------------
    // Frame
    // -------------------------------------------------------------------------

    /// Per-frame update: hover transitions, tooltip timer, drag events, then
    /// every element's own update.
    pub fn update(&mut self, input: &dyn InputSource) {
        let (x, y) = input.pointer();
        let now = input.milliseconds();
        self.surface.now_ms = now;
        let moved = self.surface.mouse != Some((x, y));
        let pointer = EventArgs::Pointer { x, y };

        let hit = self.hit_element(self.root(), x, y);
        let previous = self.surface.hovered;
        if hit != previous {
            tracing::trace!(message = "gui.hover", from = ?previous, to = ?hit);
            if let Some(old) = previous {
                self.publish(old, names::LEAVE, &EventArgs::None);
            }
            if let Some(new) = hit {
                self.publish(new, names::ENTER, &EventArgs::None);
            }
        }
        if let Some(new) = hit {
            self.publish(new, names::HOVER, &pointer);
        }
        self.surface.hovered = hit;

        if !moved && self.surface.menu.is_none() {
            let waited = now.saturating_sub(self.surface.mouse_moved_at);
            if let Some(hovered) = hit
                && waited > self.config.tool_tip_delay_ms
            {
                let tip = self.tip(hovered);
                if tip.is_empty() {
                    self.clear_tool_tip();
                } else if let Err(err) =
                    self.show_tool_tip(&tip, x, y + self.config.cursor_height)
                {
                    tracing::debug!(message = "gui.tool_tip.error", error = %err);
                }
            }
        } else {
            self.clear_tool_tip();
        }

        if moved
            && input.is_button_held(MouseButton::Left)
            && let Some(armed) = self.surface.armed_left
        {
            self.publish(armed, names::HOLDING_LEFT_MOUSE_BUTTON, &pointer);
        }

        self.surface.mouse = Some((x, y));
        self.update_element(self.root());
    }

    /// Draw the whole surface: content, then the active menu and tooltip.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.draw_element(self.root(), renderer);
    }

    /// Dispatch one discrete input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::ButtonDown(MouseButton::Left) => self.left_mouse_button(),
            InputEvent::ButtonUp(MouseButton::Left) => self.released_left_mouse_button(),
            InputEvent::ButtonDown(MouseButton::Right) => self.right_mouse_button(),
            InputEvent::ButtonUp(MouseButton::Right) => self.released_right_mouse_button(),
            InputEvent::ButtonDown(MouseButton::Middle) | InputEvent::ButtonUp(MouseButton::Middle) => {}
            InputEvent::WheelUp => self.mouse_wheel(true),
            InputEvent::WheelDown => self.mouse_wheel(false),
            InputEvent::Text(text) => self.text_entered(text),
            InputEvent::Key(key) => self.key_pressed(*key),
        }
    }

    // -------------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------------

    fn pointer_args(&self) -> EventArgs {
        let (x, y) = self.surface.mouse.unwrap_or_default();
        EventArgs::Pointer { x, y }
    }

    /// Hide the active menu unless `target` is the menu or inside it.
    fn dismiss_menu_unless_over(&mut self, target: Option<ElementId>) {
        let Some(menu) = self.surface.menu else {
            return;
        };
        let inside = target.is_some_and(|t| t == menu || self.is_descendant(t, menu));
        if !inside {
            tracing::debug!(message = "gui.menu.dismiss", menu = ?menu);
            self.hide_menu();
        }
    }

    pub fn left_mouse_button(&mut self) {
        let target = self.surface.hovered;
        self.dismiss_menu_unless_over(target);

        if let Some(focus) = self.surface.focus
            && target != Some(focus)
            && let Err(err) = self.blur_element(focus)
        {
            tracing::debug!(message = "gui.focus.error", error = %err);
        }

        let args = self.pointer_args();
        if let Some(target) = target {
            tracing::trace!(message = "gui.press", button = "left", target = ?target);
            self.publish(target, names::LEFT_MOUSE_BUTTON, &args);
        }
        self.surface.armed_left = target;
    }

    pub fn released_left_mouse_button(&mut self) {
        let target = self.surface.hovered;
        self.dismiss_menu_unless_over(target);

        let args = self.pointer_args();
        let armed = self.surface.armed_left.take();
        // A drag released off the slider still ends the drag.
        if let Some(armed) = armed
            && Some(armed) != target
        {
            self.slider_reset_drag(armed);
        }
        if let Some(target) = target {
            tracing::trace!(message = "gui.release", button = "left", target = ?target);
            self.publish(target, names::RELEASED_LEFT_MOUSE_BUTTON, &args);
            if armed == Some(target) {
                self.publish(target, names::CLICKED_LEFT_MOUSE_BUTTON, &args);
            }
        }
    }

    pub fn right_mouse_button(&mut self) {
        let target = self.surface.hovered;
        self.dismiss_menu_unless_over(target);

        let args = self.pointer_args();
        if let Some(target) = target {
            tracing::trace!(message = "gui.press", button = "right", target = ?target);
            self.publish(target, names::RIGHT_MOUSE_BUTTON, &args);
        }
        self.surface.armed_right = target;
    }

    pub fn released_right_mouse_button(&mut self) {
        let target = self.surface.hovered;
        self.dismiss_menu_unless_over(target);

        let args = self.pointer_args();
        let armed = self.surface.armed_right.take();
        if let Some(target) = target {
            tracing::trace!(message = "gui.release", button = "right", target = ?target);
            self.publish(target, names::RELEASED_RIGHT_MOUSE_BUTTON, &args);
            if armed == Some(target) {
                self.publish(target, names::CLICKED_RIGHT_MOUSE_BUTTON, &args);
            }
        }
    }

    /// Wheel events go to the hovered element.
    pub fn mouse_wheel(&mut self, up: bool) {
        let Some(target) = self.surface.hovered else {
            return;
        };
        let event = if up {
            names::MOUSE_WHEEL_UP
        } else {
            names::MOUSE_WHEEL_DOWN
        };
        let args = self.pointer_args();
        self.publish(target, event, &args);
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    /// Typed text goes to the owner of the text-input slot, if any.
    pub fn text_entered(&mut self, text: &str) {
        if let Some(owner) = self.surface.text_input {
            self.text_area_insert(owner, text);
        }
    }

    /// Editing keys go to the owner of the text-input slot, if any.
    pub fn key_pressed(&mut self, key: KeyEvent) {
        if let Some(owner) = self.surface.text_input {
            self.text_area_key(owner, key);
        }
    }

    // -------------------------------------------------------------------------
    // Menus and focus
    // -------------------------------------------------------------------------

    /// Attach `menu` to the root as the active menu, hiding any other first.
    pub fn show_menu(&mut self, menu: ElementId) {
        if self.surface.menu.is_some() {
            self.hide_menu();
        }
        let root = self.root();
        if let Err(err) = self.add(root, menu) {
            tracing::debug!(message = "gui.menu.error", menu = ?menu, error = %err);
            return;
        }
        self.surface.menu = Some(menu);
        self.clear_tool_tip();
        tracing::debug!(message = "gui.menu.show", menu = ?menu);
    }

    /// Detach the active menu, if any.
    pub fn hide_menu(&mut self) {
        let Some(menu) = self.surface.menu.take() else {
            return;
        };
        if let Some(parent) = self.parent(menu)
            && let Err(err) = self.remove(parent, menu)
        {
            tracing::debug!(message = "gui.menu.error", menu = ?menu, error = %err);
        }
        tracing::debug!(message = "gui.menu.hide", menu = ?menu);
    }

    #[must_use]
    pub fn active_menu(&self) -> Option<ElementId> {
        self.surface.menu
    }

    /// Element holding keyboard focus.
    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.surface.focus
    }

    /// Move focus to `target`, or clear it.
    pub fn set_focus(&mut self, target: Option<ElementId>) -> crate::GuiResult<()> {
        match target {
            Some(id) => self.focus_element(id),
            None => match self.surface.focus {
                Some(current) => self.blur_element(current),
                None => Ok(()),
            },
        }
    }

    /// Element under the pointer as of the last update.
    #[must_use]
    pub fn hovered(&self) -> Option<ElementId> {
        self.surface.hovered
    }

    /// Element a left press is waiting to be released on.
    #[must_use]
    pub fn armed(&self) -> Option<ElementId> {
        self.surface.armed_left
    }

    #[must_use]
    pub fn text_input_owner(&self) -> Option<ElementId> {
        self.surface.text_input
    }
}

#[cfg(test)]
mod tests {
    use crate::menu_pane::MenuItemOptions;
    use crate::{ElementOptions, Gui, GuiConfig};
    use sidney_core::input::InputState;
    use sidney_core::render::MonospaceMetrics;
    use tracing_test::traced_test;

    fn gui() -> Gui {
        Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5))
    }

    #[test]
    fn forget_clears_matching_slots() {
        let mut gui = gui();
        let a = gui.label(gui.content(), "a", ElementOptions::new()).unwrap();
        gui.surface.hovered = Some(a);
        gui.surface.armed_left = Some(a);
        gui.surface.menu = Some(gui.content());
        gui.surface.forget(&[a]);
        assert_eq!(gui.surface.hovered, None);
        assert_eq!(gui.surface.armed_left, None);
        assert_eq!(gui.surface.menu, Some(gui.content()));
    }

    #[test]
    fn showing_a_menu_replaces_the_active_one() {
        let mut gui = gui();
        let first = gui.menu_pane(ElementOptions::new()).unwrap();
        let second = gui.menu_pane(ElementOptions::new()).unwrap();
        gui.show_menu(first);
        gui.show_menu(second);
        assert_eq!(gui.active_menu(), Some(second));
        assert_eq!(gui.parent(first), None);
        assert_eq!(gui.parent(second), Some(gui.root()));
        gui.hide_menu();
        assert_eq!(gui.active_menu(), None);
        assert_eq!(gui.parent(second), None);
    }

    #[traced_test]
    #[test]
    fn press_outside_menu_dismisses_it() {
        let mut gui = gui();
        let menu = gui
            .menu_pane(ElementOptions::new().with_position(100.0, 100.0))
            .unwrap();
        gui.menu_add_item(menu, 1, MenuItemOptions::new("One"))
            .unwrap();
        gui.show_menu(menu);

        gui.update(&InputState::at(5.0, 5.0, 0));
        gui.left_mouse_button();

        assert_eq!(gui.active_menu(), None);
        assert!(logs_contain("gui.menu.dismiss"));
    }
}
