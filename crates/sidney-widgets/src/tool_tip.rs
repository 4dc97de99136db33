#![forbid(unsafe_code)]

//! Hover tips. One tooltip element per surface, created on first use and
//! attached to the root only while shown. It is never hit-tested.

use sidney_core::render::Color;

use crate::element::{Defaults, ElementId, ElementOptions, Widget};
use crate::error::GuiResult;
use crate::gui::Gui;
use crate::label::LabelContent;

pub const DEFAULT_BACKGROUND_COLOR: Color = Color::rgb(50, 50, 50);
pub const DEFAULT_BORDER_COLOR: Color = Color::rgb(150, 150, 150);
pub const DEFAULT_COLOR: Color = Color::rgb(255, 255, 255);

impl Gui {
    fn tool_tip_element(&mut self) -> GuiResult<ElementId> {
        if let Some(id) = self.surface.tool_tip
            && self.contains(id)
        {
            return Ok(id);
        }
        let core = ElementOptions::new().with_z(f32::INFINITY).core(
            &self.config,
            Defaults {
                background_color: DEFAULT_BACKGROUND_COLOR,
                border_color: DEFAULT_BORDER_COLOR,
                color: DEFAULT_COLOR,
                ..Defaults::default()
            },
        );
        let id = self.insert_raw(core, Widget::ToolTip(LabelContent::default()));
        self.post_init(id, None)?;
        self.surface.tool_tip = Some(id);
        Ok(id)
    }

    /// Show `text` with the tip's top-left corner at the given point.
    pub(crate) fn show_tool_tip(&mut self, text: &str, x: f32, y: f32) -> GuiResult<()> {
        let id = self.tool_tip_element()?;
        let changed = self.text(id).as_deref() != Some(text);
        if changed {
            self.set_text(id, text)?;
        }
        self.set_position(id, x, y)?;
        if self.parent(id).is_none() {
            let root = self.root();
            self.add(root, id)?;
            tracing::debug!(message = "gui.tool_tip.show", text);
        }
        Ok(())
    }

    /// Detach the tooltip if shown and restart the hover timer.
    pub(crate) fn clear_tool_tip(&mut self) {
        if let Some(id) = self.surface.tool_tip
            && let Some(parent) = self.parent(id)
        {
            if let Err(err) = self.remove(parent, id) {
                tracing::debug!(message = "gui.tool_tip.error", error = %err);
            }
            tracing::debug!(message = "gui.tool_tip.clear");
        }
        self.surface.mouse_moved_at = self.surface.now_ms;
    }

    /// Text of the tooltip currently shown.
    #[must_use]
    pub fn tool_tip_text(&self) -> Option<String> {
        let id = self.surface.tool_tip?;
        self.parent(id)?;
        self.text(id)
    }
}
