#![forbid(unsafe_code)]

//! Tunable constants of the widget framework.
//!
//! One [`GuiConfig`] is owned by each [`Gui`](crate::Gui) and threaded to
//! every widget through it, so there is no hidden global state (font cache
//! or debug flag).

/// Configuration for a widget tree and its surface controller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuiConfig {
    /// Time the pointer must rest on an element before its tip shows.
    pub tool_tip_delay_ms: u64,
    /// Half-period of the text caret blink.
    pub caret_period_ms: u64,
    /// Default font size for new elements.
    pub font_size: f32,
    /// Default horizontal padding for new elements.
    pub padding_x: f32,
    /// Default vertical padding for new elements.
    pub padding_y: f32,
    /// Height of the pointer image; tooltips are placed beneath it.
    pub cursor_height: f32,
    /// Outline every container and label it with its kind.
    pub debug_layout: bool,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            tool_tip_delay_ms: 500,
            caret_period_ms: 500,
            font_size: 15.0,
            padding_x: 4.0,
            padding_y: 4.0,
            cursor_height: 16.0,
            debug_layout: false,
        }
    }
}

impl GuiConfig {
    /// Set the tooltip delay.
    #[must_use]
    pub fn with_tool_tip_delay_ms(mut self, ms: u64) -> Self {
        self.tool_tip_delay_ms = ms;
        self
    }

    /// Set the caret blink half-period.
    #[must_use]
    pub fn with_caret_period_ms(mut self, ms: u64) -> Self {
        self.caret_period_ms = ms;
        self
    }

    /// Set the default font size.
    #[must_use]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set both default paddings.
    #[must_use]
    pub fn with_padding(mut self, x: f32, y: f32) -> Self {
        self.padding_x = x;
        self.padding_y = y;
        self
    }

    /// Set the pointer height used to place tooltips.
    #[must_use]
    pub fn with_cursor_height(mut self, height: f32) -> Self {
        self.cursor_height = height;
        self
    }

    /// Enable or disable layout debugging outlines.
    #[must_use]
    pub fn with_debug_layout(mut self, enabled: bool) -> Self {
        self.debug_layout = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::GuiConfig;

    #[test]
    fn defaults_match_editor_constants() {
        let config = GuiConfig::default();
        assert_eq!(config.tool_tip_delay_ms, 500);
        assert_eq!(config.caret_period_ms, 500);
        assert_eq!(config.font_size, 15.0);
        assert_eq!((config.padding_x, config.padding_y), (4.0, 4.0));
        assert!(!config.debug_layout);
    }

    #[test]
    fn builders_override() {
        let config = GuiConfig::default()
            .with_tool_tip_delay_ms(10)
            .with_padding(1.0, 2.0)
            .with_debug_layout(true);
        assert_eq!(config.tool_tip_delay_ms, 10);
        assert_eq!((config.padding_x, config.padding_y), (1.0, 2.0));
        assert!(config.debug_layout);
    }
}
