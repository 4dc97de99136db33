#![forbid(unsafe_code)]

//! Static text with an optional icon; the base of every button.

use sidney_core::render::{Color, ImageId, Renderer};

use crate::element::{Defaults, ElementCore, ElementId, ElementOptions, Widget};
use crate::error::GuiResult;
use crate::gui::Gui;

/// Image shown to the left of a label's text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Icon {
    pub image: ImageId,
    pub width: f32,
    pub height: f32,
}

impl Icon {
    #[must_use]
    pub const fn new(image: ImageId, width: f32, height: f32) -> Self {
        Self {
            image,
            width,
            height,
        }
    }
}

/// Text and icon of a label-like widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelContent {
    pub text: String,
    pub icon: Option<Icon>,
}

impl LabelContent {
    pub(crate) fn new(text: impl Into<String>, icon: Option<Icon>) -> Self {
        Self {
            text: text.into(),
            icon,
        }
    }
}

impl Gui {
    /// Create a label.
    pub fn label(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        text: impl Into<String>,
        options: ElementOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let core = options.core(&self.config, Defaults::default());
        let content = LabelContent::new(text, options.icon);
        let id = self.insert_raw(core, Widget::Label(content));
        self.post_init(id, parent)?;
        Ok(id)
    }

    /// Content size plus padding, never below the requested size.
    pub(crate) fn layout_label(&mut self, id: ElementId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let Some(content) = node.widget.label() else {
            return;
        };
        let (width, height) = self.label_size(&node.core, content);
        if let Some(node) = self.nodes.get_mut(id) {
            node.core.rect.width = width.max(node.core.min_width);
            node.core.rect.height = height.max(node.core.min_height);
        }
    }

    pub(crate) fn label_size(&self, core: &ElementCore, content: &LabelContent) -> (f32, f32) {
        let text_width = if content.text.is_empty() {
            0.0
        } else {
            self.metrics.text_width(&content.text, core.font_size)
        };
        let line_height = self.metrics.line_height(core.font_size);
        let (width, height) = match content.icon {
            Some(icon) if content.text.is_empty() => (icon.width, icon.height),
            Some(icon) => (
                icon.width + core.padding_x + text_width,
                icon.height.max(line_height),
            ),
            None => (text_width, line_height),
        };
        (width + core.padding_x * 2.0, height + core.padding_y * 2.0)
    }

    /// Icon at the left, text after it, both centred vertically.
    pub(crate) fn draw_label_content(
        &self,
        core: &ElementCore,
        content: &LabelContent,
        color: Color,
        renderer: &mut dyn Renderer,
    ) {
        let r = core.rect;
        let mut text_x = r.x + core.padding_x;
        if let Some(icon) = content.icon {
            let icon_y = r.y + ((r.height - icon.height) / 2.0).floor();
            renderer.draw_image(icon.image, text_x, icon_y, core.z);
            text_x += icon.width + core.padding_x;
        }
        if !content.text.is_empty() {
            let line_height = self.metrics.line_height(core.font_size);
            let text_y = r.y + ((r.height - line_height) / 2.0).floor();
            renderer.draw_text(&content.text, text_x, text_y, core.z, core.font_size, color);
        }
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

    #[test]
    fn label_sizes_to_text_plus_padding() {
        let mut gui = gui();
        let label = gui.label(gui.content(), "abcd", ElementOptions::new()).unwrap();
        let r = gui.rect(label).unwrap();
        assert_eq!(r.width, 4.0 * 7.5 + 8.0);
        assert_eq!(r.height, 15.0 + 8.0);
    }

    #[test]
    fn requested_size_is_a_minimum() {
        let mut gui = gui();
        let label = gui
            .label(gui.content(), "ab", ElementOptions::new().with_size(100.0, 5.0))
            .unwrap();
        let r = gui.rect(label).unwrap();
        assert_eq!((r.width, r.height), (100.0, 23.0));
    }

    #[test]
    fn icon_adds_to_width() {
        let mut gui = gui();
        let icon = Icon::new(ImageId(7), 16.0, 30.0);
        let label = gui
            .label(gui.content(), "ab", ElementOptions::new().with_icon(icon))
            .unwrap();
        let r = gui.rect(label).unwrap();
        assert_eq!(r.width, 16.0 + 4.0 + 15.0 + 8.0);
        assert_eq!(r.height, 30.0 + 8.0);

        let mut list = DrawList::new();
        gui.draw_element(label, &mut list);
        assert!(
            list.commands()
                .iter()
                .any(|c| matches!(c, DrawCommand::Image { image: ImageId(7), .. }))
        );
    }

    #[test]
    fn set_text_grows_parent() {
        let mut gui = gui();
        let holder = gui.container(gui.content(), ElementOptions::new()).unwrap();
        let label = gui.label(holder, "a", ElementOptions::new()).unwrap();
        let before = gui.rect(holder).unwrap().width;
        gui.set_text(label, "a much longer text").unwrap();
        assert!(gui.rect(holder).unwrap().width > before);
        assert_eq!(gui.text(label).as_deref(), Some("a much longer text"));
    }
}
