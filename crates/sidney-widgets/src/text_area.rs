#![forbid(unsafe_code)]

//! Multi-line text field with greedy word wrap.
//!
//! Caret positions count grapheme clusters, not bytes. Every layout re-wraps
//! the whole text; an edit that would make the area taller than its maximum
//! height is rolled back to the last accepted text, caret and selection.

use std::ops::Range;
use std::rc::Rc;

use sidney_core::event::{EventArgs, KeyCode, KeyEvent, names};
use sidney_core::render::{Color, Renderer};
use unicode_segmentation::UnicodeSegmentation;

use crate::element::{Defaults, ElementCore, ElementId, ElementOptions, Widget, draw_background};
use crate::error::{GuiError, GuiResult};
use crate::gui::Gui;

pub const FOCUS_BORDER_COLOR: Color = Color::rgb(0, 255, 255);
pub const BLUR_BORDER_COLOR: Color = Color::rgb(255, 255, 255);
pub const CARET_COLOR: Color = Color::rgb(255, 0, 0);
pub const SELECTION_COLOR: Color = Color::rgb(100, 100, 100);
pub const BACKGROUND_COLOR: Color = Color::rgb(0, 0, 0);

/// Where a caret index sits, relative to the text origin.
///
/// `width` is the advance of the grapheme just before the caret.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CaretSpot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Options for [`Gui::text_area`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextAreaOptions {
    pub text: String,
    pub editable: bool,
    /// Fixes both the minimum and the maximum height.
    pub height: Option<f32>,
    pub min_height: Option<f32>,
    /// Unbounded when unset.
    pub max_height: Option<f32>,
    /// Extra gap between lines.
    pub line_spacing: f32,
}

impl TextAreaOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }
}

/// Text, caret and selection as last accepted by layout.
#[derive(Debug, Clone, Default, PartialEq)]
struct Accepted {
    text: String,
    caret: usize,
    selection_start: usize,
}

/// Text area state.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaState {
    text: String,
    caret: usize,
    selection_start: usize,
    editable: bool,
    min_height: f32,
    max_height: f32,
    line_spacing: f32,
    lines: Vec<String>,
    spots: Vec<CaretSpot>,
    accepted: Accepted,
    focused: bool,
    caret_visible: bool,
}

impl TextAreaState {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of grapheme clusters in the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn caret_position(&self) -> usize {
        self.caret
    }

    /// Graphemes between the selection anchor and the caret.
    #[must_use]
    pub fn selection_range(&self) -> Range<usize> {
        self.selection_start.min(self.caret)..self.selection_start.max(self.caret)
    }

    #[must_use]
    pub fn selection_text(&self) -> String {
        let range = self.selection_range();
        self.text
            .graphemes(true)
            .skip(range.start)
            .take(range.len())
            .collect()
    }

    /// Wrapped lines as laid out.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Position of every caret index, `len() + 1` entries.
    #[must_use]
    pub fn caret_spots(&self) -> &[CaretSpot] {
        &self.spots
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    #[must_use]
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    #[must_use]
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    #[must_use]
    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn replace(&mut self, range: Range<usize>, replacement: &str) {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.text.replace_range(start..end, replacement);
        // Inserted text may merge with the grapheme before it.
        self.caret = self.text[..start + replacement.len()].graphemes(true).count();
        self.selection_start = self.caret;
    }

    fn insert(&mut self, text: &str) {
        self.replace(self.selection_range(), text);
    }

    fn delete_backward(&mut self) -> bool {
        let range = self.selection_range();
        if !range.is_empty() {
            self.replace(range, "");
        } else if self.caret > 0 {
            self.replace(self.caret - 1..self.caret, "");
        } else {
            return false;
        }
        true
    }

    fn delete_forward(&mut self) -> bool {
        let range = self.selection_range();
        if !range.is_empty() {
            self.replace(range, "");
        } else if self.caret < self.len() {
            self.replace(self.caret..self.caret + 1, "");
        } else {
            return false;
        }
        true
    }

    fn move_caret(&mut self, position: usize, extend: bool) {
        self.caret = position.min(self.len());
        if !extend {
            self.selection_start = self.caret;
        }
    }

    /// Caret moves that do not touch the text are always acceptable.
    fn remember_caret(&mut self) {
        if self.text == self.accepted.text {
            self.accepted.caret = self.caret;
            self.accepted.selection_start = self.selection_start;
        }
    }

    fn accept(&mut self) {
        self.accepted = Accepted {
            text: self.text.clone(),
            caret: self.caret,
            selection_start: self.selection_start,
        };
    }

    fn roll_back(&mut self) {
        self.text.clone_from(&self.accepted.text);
        self.caret = self.accepted.caret;
        self.selection_start = self.accepted.selection_start;
    }
}

// =============================================================================
// Word wrap
// =============================================================================

/// Result of wrapping a text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Wrapped {
    pub lines: Vec<String>,
    pub spots: Vec<CaretSpot>,
}

fn is_newline(grapheme: &str) -> bool {
    grapheme == "\n" || grapheme == "\r\n"
}

fn place_word(
    word: &str,
    mut line_width: f32,
    y: f32,
    spots: &mut Vec<CaretSpot>,
    width_of: &impl Fn(&str) -> f32,
) -> f32 {
    for grapheme in word.graphemes(true) {
        let width = width_of(grapheme);
        line_width += width;
        spots.push(CaretSpot {
            x: line_width,
            y,
            width,
        });
    }
    line_width
}

/// Greedy word wrap.
///
/// Graphemes collect into a word; a space or newline commits the word to the
/// current line. When the next grapheme would overflow `max_width` the line
/// is committed first, or, if the line is empty, the word itself is split
/// with a trailing hyphen. A trailing newline opens an empty last line.
pub(crate) fn wrap_text(
    text: &str,
    max_width: f32,
    line_advance: f32,
    width_of: impl Fn(&str) -> f32,
) -> Wrapped {
    let space_width = width_of(" ");
    let y_at = |line: usize| line as f32 * line_advance;

    let mut lines: Vec<String> = Vec::new();
    let mut spots = vec![CaretSpot::default()];
    let mut line = String::new();
    let mut line_width = 0.0f32;
    let mut word = String::new();
    let mut word_width = 0.0f32;

    for grapheme in text.graphemes(true) {
        let newline = is_newline(grapheme);
        let char_width = if newline { 0.0 } else { width_of(grapheme) };
        let gap = if line_width == 0.0 { 0.0 } else { space_width };
        let overall = line_width + gap + word_width + char_width;
        let space_after_word = grapheme == " " && !word.is_empty();

        if !newline && overall > max_width && !space_after_word {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0.0;
            } else if !word.is_empty() {
                place_word(&word, line_width, y_at(lines.len()), &mut spots, &width_of);
                line_width = 0.0;
                lines.push(format!("{word}-"));
                word.clear();
                word_width = 0.0;
            }
        }

        if newline {
            place_word(&word, line_width, y_at(lines.len()), &mut spots, &width_of);
            line.push_str(&word);
            lines.push(std::mem::take(&mut line));
            spots.push(CaretSpot {
                x: 0.0,
                y: y_at(lines.len()),
                width: 0.0,
            });
            word.clear();
            word_width = 0.0;
            line_width = 0.0;
        } else if grapheme == " " {
            line_width = place_word(&word, line_width, y_at(lines.len()), &mut spots, &width_of);
            line.push_str(&word);
            line.push(' ');
            line_width += space_width;
            spots.push(CaretSpot {
                x: line_width,
                y: y_at(lines.len()),
                width: space_width,
            });
            word.clear();
            word_width = 0.0;
        } else {
            // A word starting a fresh line pulls the caret before it along.
            if line.is_empty()
                && let Some(last) = spots.last_mut()
            {
                last.x = 0.0;
                last.y = y_at(lines.len());
            }
            word.push_str(grapheme);
            word_width += char_width;
        }
    }

    if !word.is_empty() {
        place_word(&word, line_width, y_at(lines.len()), &mut spots, &width_of);
        line.push_str(&word);
    }
    let ends_with_newline = text.graphemes(true).next_back().is_some_and(is_newline);
    if lines.is_empty() || !line.is_empty() || ends_with_newline {
        lines.push(line);
    }

    Wrapped { lines, spots }
}

// =============================================================================
// Widget
// =============================================================================

fn on_clicked(gui: &mut Gui, id: ElementId, args: &EventArgs) {
    if !gui.is_enabled(id) {
        return;
    }
    if let Err(err) = gui.focus_element(id) {
        tracing::debug!(message = "gui.text_area.error", id = ?id, error = %err);
        return;
    }
    if let Some((x, y)) = args.pointer() {
        gui.place_caret_at(id, x, y);
    }
}

impl Gui {
    /// Create a text area. Give it a width; the height follows the text.
    pub fn text_area(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        options: ElementOptions,
        area: TextAreaOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let height = area.height.or(options.height);
        let options = ElementOptions {
            height: None,
            ..options
        };
        let core = options.core(
            &self.config,
            Defaults {
                background_color: BACKGROUND_COLOR,
                border_color: BLUR_BORDER_COLOR,
                ..Defaults::default()
            },
        );

        let content_min = core.padding_y * 2.0 + self.metrics.line_height(core.font_size);
        let (min_height, max_height) = match height {
            Some(h) => (h.max(content_min), h.max(content_min)),
            None => (
                area.min_height.unwrap_or(content_min).max(content_min),
                area.max_height.unwrap_or(f32::INFINITY).max(content_min),
            ),
        };

        let caret = area.text.graphemes(true).count();
        let state = TextAreaState {
            text: area.text,
            caret,
            selection_start: caret,
            editable: area.editable,
            min_height,
            max_height,
            line_spacing: area.line_spacing,
            lines: vec![String::new()],
            spots: vec![CaretSpot::default()],
            accepted: Accepted::default(),
            focused: false,
            caret_visible: false,
        };
        let id = self.insert_raw(core, Widget::TextArea(Box::new(state)));
        self.set_default_handler(id, names::CLICKED_LEFT_MOUSE_BUTTON, on_clicked);
        self.post_init(id, parent)?;
        Ok(id)
    }

    /// Full state of a text area.
    pub fn text_area_state(&self, id: ElementId) -> GuiResult<&TextAreaState> {
        match &self.node(id)?.widget {
            Widget::TextArea(area) => Ok(&**area),
            _ => Err(self.wrong_widget(id, "TextArea")),
        }
    }

    fn text_area_state_mut(&mut self, id: ElementId) -> GuiResult<&mut TextAreaState> {
        if !matches!(self.node(id)?.widget, Widget::TextArea(_)) {
            return Err(self.wrong_widget(id, "TextArea"));
        }
        match &mut self.node_mut(id)?.widget {
            Widget::TextArea(area) => Ok(&mut **area),
            _ => Err(GuiError::UnknownElement(id)),
        }
    }

    pub fn text_area_text(&self, id: ElementId) -> GuiResult<&str> {
        Ok(self.text_area_state(id)?.text())
    }

    /// Replace the text and move the caret to its end.
    ///
    /// Returns the text actually kept: the previous text if the new one
    /// would not fit within the maximum height.
    pub fn set_text_area_text(
        &mut self,
        id: ElementId,
        text: impl Into<String>,
    ) -> GuiResult<String> {
        let area = self.text_area_state_mut(id)?;
        area.text = text.into();
        let end = area.len();
        area.caret = end;
        area.selection_start = end;
        self.recalc(id)?;
        Ok(self.text_area_state(id)?.text.clone())
    }

    pub fn caret_position(&self, id: ElementId) -> GuiResult<usize> {
        Ok(self.text_area_state(id)?.caret)
    }

    /// Move the caret and collapse the selection onto it.
    pub fn set_caret_position(&mut self, id: ElementId, position: usize) -> GuiResult<()> {
        self.set_selection(id, position, position)
    }

    /// Select from `anchor` to `caret`, both grapheme indices.
    pub fn set_selection(&mut self, id: ElementId, anchor: usize, caret: usize) -> GuiResult<()> {
        let area = self.text_area_state_mut(id)?;
        let len = area.len();
        for position in [anchor, caret] {
            if position > len {
                return Err(GuiError::CaretOutOfRange { position, len });
            }
        }
        area.selection_start = anchor;
        area.caret = caret;
        area.remember_caret();
        Ok(())
    }

    pub fn selection_range(&self, id: ElementId) -> GuiResult<Range<usize>> {
        Ok(self.text_area_state(id)?.selection_range())
    }

    pub fn selection_text(&self, id: ElementId) -> GuiResult<String> {
        Ok(self.text_area_state(id)?.selection_text())
    }

    pub fn text_area_lines(&self, id: ElementId) -> GuiResult<&[String]> {
        Ok(self.text_area_state(id)?.lines())
    }

    pub fn set_editable(&mut self, id: ElementId, editable: bool) -> GuiResult<()> {
        self.text_area_state_mut(id)?.editable = editable;
        Ok(())
    }

    #[must_use]
    pub fn is_focused(&self, id: ElementId) -> bool {
        self.text_area_state(id).is_ok_and(TextAreaState::is_focused)
    }

    /// Give the text area focus and the text-input slot.
    ///
    /// Blurs whatever held focus before. Publishes `focus`.
    pub fn focus_element(&mut self, id: ElementId) -> GuiResult<()> {
        if self.text_area_state(id)?.focused {
            return Ok(());
        }
        if let Some(previous) = self.surface.focus
            && previous != id
        {
            self.blur_element(previous)?;
        }
        self.text_area_state_mut(id)?.focused = true;
        self.surface.focus = Some(id);
        self.surface.text_input = Some(id);
        tracing::debug!(message = "gui.focus", id = ?id);
        self.publish(id, names::FOCUS, &EventArgs::None);
        Ok(())
    }

    /// Drop focus and release the text-input slot. Publishes `blur`.
    pub fn blur_element(&mut self, id: ElementId) -> GuiResult<()> {
        let area = self.text_area_state_mut(id)?;
        if !area.focused {
            return Ok(());
        }
        area.focused = false;
        area.caret_visible = false;
        if self.surface.focus == Some(id) {
            self.surface.focus = None;
        }
        if self.surface.text_input == Some(id) {
            self.surface.text_input = None;
        }
        tracing::debug!(message = "gui.blur", id = ?id);
        self.publish(id, names::BLUR, &EventArgs::None);
        Ok(())
    }

    /// Typed text, replacing the selection. Ignored unless editable.
    pub(crate) fn text_area_insert(&mut self, id: ElementId, text: &str) {
        let Ok(area) = self.text_area_state_mut(id) else {
            return;
        };
        if !area.editable || text.is_empty() {
            return;
        }
        area.remember_caret();
        area.insert(text);
        self.relayout_text_area(id);
    }

    /// Caret movement always works; edits need an editable area.
    pub(crate) fn text_area_key(&mut self, id: ElementId, key: KeyEvent) {
        let Ok(area) = self.text_area_state_mut(id) else {
            return;
        };
        area.remember_caret();
        let extend = key.shift();
        let editable = area.editable;
        let edited = match key.code {
            KeyCode::Left => {
                area.move_caret(area.caret.saturating_sub(1), extend);
                false
            }
            KeyCode::Right => {
                area.move_caret(area.caret + 1, extend);
                false
            }
            KeyCode::Home => {
                area.move_caret(0, extend);
                false
            }
            KeyCode::End => {
                area.move_caret(area.len(), extend);
                false
            }
            KeyCode::Backspace if editable => area.delete_backward(),
            KeyCode::Delete if editable => area.delete_forward(),
            KeyCode::Enter if editable => {
                area.insert("\n");
                true
            }
            _ => false,
        };
        if edited {
            self.relayout_text_area(id);
        } else if let Ok(area) = self.text_area_state_mut(id) {
            area.remember_caret();
        }
    }

    fn relayout_text_area(&mut self, id: ElementId) {
        if let Err(err) = self.recalc(id) {
            tracing::debug!(message = "gui.text_area.error", id = ?id, error = %err);
        }
    }

    /// Put the caret on the boundary nearest to a screen point.
    fn place_caret_at(&mut self, id: ElementId, x: f32, y: f32) {
        let metrics = Rc::clone(&self.metrics);
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let Widget::TextArea(area) = &mut node.widget else {
            return;
        };
        let core = &node.core;
        let advance = metrics.line_height(core.font_size) + area.line_spacing;
        let local_x = x - core.rect.x - core.padding_x;
        let local_y = y - core.rect.y - core.padding_y;
        let last_line = area.lines.len().saturating_sub(1);
        let line = if advance > 0.0 {
            ((local_y / advance).floor().max(0.0) as usize).min(last_line)
        } else {
            0
        };
        let line_y = line as f32 * advance;
        let nearest = area
            .spots
            .iter()
            .enumerate()
            .filter(|(_, spot)| (spot.y - line_y).abs() < 0.5)
            .min_by(|(_, a), (_, b)| (a.x - local_x).abs().total_cmp(&(b.x - local_x).abs()))
            .map(|(index, _)| index);
        if let Some(index) = nearest {
            area.caret = index;
            area.selection_start = index;
            area.remember_caret();
        }
    }

    /// Re-wrap; accept the result or roll the edit back.
    pub(crate) fn layout_text_area(&mut self, id: ElementId) {
        let metrics = Rc::clone(&self.metrics);
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let Widget::TextArea(area) = &mut node.widget else {
            return;
        };
        let core = &mut node.core;
        core.rect.width = core.min_width;

        let font_size = core.font_size;
        let advance = metrics.line_height(font_size) + area.line_spacing;
        let max_width = core.rect.width - core.padding_x * 2.0 - metrics.text_width(" ", font_size);
        let wrapped = wrap_text(&area.text, max_width, advance, |g| {
            metrics.text_width(g, font_size)
        });
        let height = core.padding_y * 2.0 + advance * wrapped.lines.len() as f32;

        if height > area.max_height && area.text != area.accepted.text {
            tracing::debug!(
                message = "gui.text_area.rollback",
                id = ?id,
                lines = wrapped.lines.len(),
                max_height = area.max_height
            );
            area.roll_back();
            return;
        }
        area.lines = wrapped.lines;
        area.spots = wrapped.spots;
        area.accept();
        core.rect.height = height.max(area.min_height);
    }

    pub(crate) fn update_text_area(&mut self, id: ElementId) {
        let now = self.surface.now_ms;
        let period = self.config.caret_period_ms;
        if let Ok(area) = self.text_area_state_mut(id) {
            area.caret_visible = area.focused && (period == 0 || (now / period) % 2 == 0);
        }
    }

    pub(crate) fn draw_text_area(
        &self,
        core: &ElementCore,
        area: &TextAreaState,
        renderer: &mut dyn Renderer,
    ) {
        let border = if area.focused {
            FOCUS_BORDER_COLOR
        } else {
            core.border_color
        };
        draw_background(core, core.background_color, border, renderer);

        let line_height = self.metrics.line_height(core.font_size);
        let advance = line_height + area.line_spacing;
        let left = core.rect.x + core.padding_x;
        let top = core.rect.y + core.padding_y;

        let range = area.selection_range();
        for (grapheme, spot) in area
            .text
            .graphemes(true)
            .zip(&area.spots)
            .skip(range.start)
            .take(range.len())
        {
            if is_newline(grapheme) {
                continue;
            }
            let width = self.metrics.text_width(grapheme, core.font_size);
            renderer.draw_rect(
                left + spot.x,
                top + spot.y,
                width,
                line_height,
                core.z,
                SELECTION_COLOR,
            );
        }

        for (index, line) in area.lines.iter().enumerate() {
            if !line.is_empty() {
                let y = top + advance * index as f32;
                renderer.draw_text(line, left, y, core.z, core.font_size, core.color);
            }
        }

        if area.focused
            && area.caret_visible
            && let Some(spot) = area.spots.get(area.caret)
        {
            renderer.draw_rect(
                left + spot.x,
                top + spot.y,
                1.0,
                line_height,
                core.z,
                CARET_COLOR,
            );
        }
    }
}
