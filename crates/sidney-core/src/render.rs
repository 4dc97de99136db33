#![forbid(unsafe_code)]

//! Rendering collaborator interfaces.
//!
//! The widget framework never rasterizes anything itself. It emits
//! primitive draw calls through [`Renderer`] and measures text through
//! [`FontMetrics`]. Backends implement both; tests use the recording
//! [`DrawList`] and the fixed-advance [`MonospaceMetrics`].

use unicode_segmentation::UnicodeSegmentation;

/// RGBA colour, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (0 = fully transparent).
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour with alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether drawing with this colour would have no visible effect.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Handle to an image owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageId(pub u32);

/// Primitive drawing operations provided by the backend.
///
/// Coordinates are screen pixels; `z` orders primitives (higher on top).
pub trait Renderer {
    /// Fill a rectangle.
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, z: f32, color: Color);

    /// Draw a one-pixel unfilled border.
    fn draw_frame(&mut self, x: f32, y: f32, width: f32, height: f32, z: f32, color: Color) {
        self.draw_rect(x, y, width, 1.0, z, color);
        self.draw_rect(x, y + height - 1.0, width, 1.0, z, color);
        self.draw_rect(x, y + 1.0, 1.0, height - 2.0, z, color);
        self.draw_rect(x + width - 1.0, y + 1.0, 1.0, height - 2.0, z, color);
    }

    /// Draw an image with its top-left corner at `(x, y)`.
    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, z: f32);

    /// Draw a line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, z: f32, font_size: f32, color: Color);
}

/// Text measurement for the bitmap font used by widgets.
pub trait FontMetrics {
    /// Width in pixels of `text` rendered at `font_size`.
    fn text_width(&self, text: &str, font_size: f32) -> f32;

    /// Height in pixels of one line at `font_size`.
    fn line_height(&self, font_size: f32) -> f32 {
        font_size
    }
}

/// Fixed-advance metrics: every grapheme is `font_size * advance_ratio` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of one grapheme relative to the font size.
    pub advance_ratio: f32,
}

impl MonospaceMetrics {
    /// Metrics with the given advance ratio.
    #[must_use]
    pub const fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl FontMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.graphemes(true).count() as f32 * font_size * self.advance_ratio
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        z: f32,
        color: Color,
    },
    /// Unfilled border.
    Frame {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        z: f32,
        color: Color,
    },
    /// Image.
    Image { image: ImageId, x: f32, y: f32, z: f32 },
    /// Text.
    Text {
        text: String,
        x: f32,
        y: f32,
        z: f32,
        font_size: f32,
        color: Color,
    },
}

/// A [`Renderer`] that records every call.
///
/// Used headless and in tests to assert what a widget tree would draw.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text of every recorded text command, in call order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget every recorded command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for DrawList {
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, z: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            z,
            color,
        });
    }

    fn draw_frame(&mut self, x: f32, y: f32, width: f32, height: f32, z: f32, color: Color) {
        self.commands.push(DrawCommand::Frame {
            x,
            y,
            width,
            height,
            z,
            color,
        });
    }

    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, z: f32) {
        self.commands.push(DrawCommand::Image { image, x, y, z });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, z: f32, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            z,
            font_size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting(usize);

    impl Renderer for Counting {
        fn draw_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: Color) {
            self.0 += 1;
        }
        fn draw_image(&mut self, _: ImageId, _: f32, _: f32, _: f32) {}
        fn draw_text(&mut self, _: &str, _: f32, _: f32, _: f32, _: f32, _: Color) {}
    }

    #[test]
    fn default_frame_is_four_rects() {
        let mut r = Counting(0);
        r.draw_frame(0.0, 0.0, 10.0, 10.0, 0.0, Color::WHITE);
        assert_eq!(r.0, 4);
    }

    #[test]
    fn monospace_counts_graphemes() {
        let m = MonospaceMetrics::new(0.5);
        assert_eq!(m.text_width("abcd", 10.0), 20.0);
        assert_eq!(m.text_width("e\u{301}", 10.0), 5.0);
        assert_eq!(m.text_width("", 10.0), 0.0);
        assert_eq!(m.line_height(15.0), 15.0);
    }

    #[test]
    fn draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.draw_rect(0.0, 0.0, 1.0, 1.0, 0.0, Color::BLACK);
        list.draw_text("hi", 0.0, 0.0, 0.0, 15.0, Color::WHITE);
        assert_eq!(list.len(), 2);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["hi"]);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn transparency() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::rgb(1, 2, 3).is_transparent());
    }
}
