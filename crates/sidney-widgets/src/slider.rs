#![forbid(unsafe_code)]

//! Horizontal value slider with a draggable handle.
//!
//! Pressing anywhere on the slider jumps the handle to the pointer; holding
//! the left button keeps dragging until release. The handle travels across
//! the usable width, which is the slider's inner width minus the handle.

use sidney_core::event::{EventArgs, names};
use sidney_core::render::{Color, Renderer};
use sidney_core::value::Value;

use crate::element::{Defaults, ElementCore, ElementId, ElementOptions, Widget};
use crate::error::{GuiError, GuiResult};
use crate::gui::Gui;

pub const DEFAULT_HEIGHT: f32 = 25.0;
pub const DEFAULT_WIDTH: f32 = 100.0;
pub const DEFAULT_GROOVE_COLOR: Color = Color::rgb(200, 200, 200);
pub const DEFAULT_HANDLE_COLOR: Color = Color::rgb(255, 0, 0);

/// Range and initial value of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderOptions {
    pub min: f64,
    pub max: f64,
    /// Initial value; the minimum when unset.
    pub value: Option<f64>,
    pub groove_color: Color,
    pub handle_color: Color,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            value: None,
            groove_color: DEFAULT_GROOVE_COLOR,
            handle_color: DEFAULT_HANDLE_COLOR,
        }
    }
}

impl SliderOptions {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_groove_color(mut self, color: Color) -> Self {
        self.groove_color = color;
        self
    }

    #[must_use]
    pub fn with_handle_color(mut self, color: Color) -> Self {
        self.handle_color = color;
        self
    }
}

/// Slider state.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub handle: ElementId,
    /// A press started on the slider and the button is still held.
    pub dragging: bool,
    pub groove_color: Color,
}

impl SliderState {
    /// Tip text with the current value appended.
    #[must_use]
    pub fn tip(&self, tip: &str) -> String {
        format!("{tip}: {:.2}", self.value)
    }

    fn fraction(&self) -> f64 {
        (self.value - self.min) / (self.max - self.min)
    }

    pub(crate) fn draw_groove(&self, core: &ElementCore, renderer: &mut dyn Renderer) {
        let r = core.rect;
        let height = (r.height - core.padding_y * 4.0).max(0.0);
        renderer.draw_rect(
            r.x + core.padding_x,
            r.y + core.padding_y * 2.0,
            (r.width - core.padding_x * 2.0).max(0.0),
            height,
            core.z,
            self.groove_color,
        );
    }
}

fn on_pressed(gui: &mut Gui, id: ElementId, args: &EventArgs) {
    if !gui.is_enabled(id) {
        return;
    }
    if let Some((x, _)) = args.pointer() {
        gui.drag_slider_to(id, x);
    }
    if let Some(Widget::Slider(slider)) = gui.nodes.get_mut(id).map(|n| &mut n.widget) {
        slider.dragging = true;
    }
}

fn on_holding(gui: &mut Gui, id: ElementId, args: &EventArgs) {
    let dragging = matches!(
        gui.widget(id),
        Some(Widget::Slider(SliderState { dragging: true, .. }))
    );
    if let (true, Some((x, _))) = (dragging, args.pointer()) {
        gui.drag_slider_to(id, x);
    }
}

fn on_released(gui: &mut Gui, id: ElementId, _: &EventArgs) {
    gui.slider_reset_drag(id);
}

impl Gui {
    /// Create a slider. Width defaults to 100 and height to 25.
    pub fn slider(
        &mut self,
        parent: impl Into<Option<ElementId>>,
        options: ElementOptions,
        slider: SliderOptions,
    ) -> GuiResult<ElementId> {
        let parent = parent.into();
        self.check_parent(parent)?;
        let (min, max) = (slider.min, slider.max);
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GuiError::InvalidSliderRange { min, max });
        }
        let value = slider.value.unwrap_or(min);
        if !(min..=max).contains(&value) {
            return Err(GuiError::SliderValueOutOfRange { value, min, max });
        }

        let options = ElementOptions {
            width: options.width.or(Some(DEFAULT_WIDTH)),
            height: options.height.or(Some(DEFAULT_HEIGHT)),
            ..options
        };
        let core = options.core(&self.config, Defaults::default());

        let handle_options = ElementOptions {
            x: core.rect.x,
            y: core.rect.y + core.padding_y,
            width: Some((core.rect.height / 2.0 - core.padding_x).max(0.0)),
            height: Some((core.rect.height - core.padding_y * 2.0).max(0.0)),
            z: Some(core.z),
            ..ElementOptions::default()
        };
        let handle_core = handle_options.core(
            &self.config,
            Defaults {
                background_color: slider.handle_color,
                ..Defaults::default()
            },
        );
        let handle = self.insert_raw(handle_core, Widget::SliderHandle);
        self.recalc(handle)?;

        let state = SliderState {
            min,
            max,
            value,
            handle,
            dragging: false,
            groove_color: slider.groove_color,
        };
        let id = self.insert_raw(core, Widget::Slider(state));
        self.adopt(id, handle);
        self.set_default_handler(id, names::LEFT_MOUSE_BUTTON, on_pressed);
        self.set_default_handler(id, names::HOLDING_LEFT_MOUSE_BUTTON, on_holding);
        self.set_default_handler(id, names::RELEASED_LEFT_MOUSE_BUTTON, on_released);
        self.post_init(id, parent)?;
        self.place_slider_handle(id);
        Ok(id)
    }

    fn slider_state(&self, id: ElementId) -> GuiResult<&SliderState> {
        match &self.node(id)?.widget {
            Widget::Slider(state) => Ok(state),
            _ => Err(self.wrong_widget(id, "Slider")),
        }
    }

    pub fn slider_value(&self, id: ElementId) -> GuiResult<f64> {
        Ok(self.slider_state(id)?.value)
    }

    /// `(min, max)` of the slider.
    pub fn slider_range(&self, id: ElementId) -> GuiResult<(f64, f64)> {
        let state = self.slider_state(id)?;
        Ok((state.min, state.max))
    }

    /// The slider's handle element.
    pub fn slider_handle(&self, id: ElementId) -> GuiResult<ElementId> {
        Ok(self.slider_state(id)?.handle)
    }

    #[must_use]
    pub fn is_slider_dragging(&self, id: ElementId) -> bool {
        matches!(
            self.widget(id),
            Some(Widget::Slider(SliderState { dragging: true, .. }))
        )
    }

    /// Set the value and move the handle.
    ///
    /// Values outside the range are rejected. Publishes `changed` only when
    /// the value actually changes.
    pub fn set_slider_value(&mut self, id: ElementId, value: f64) -> GuiResult<()> {
        let state = self.slider_state(id)?;
        let (min, max) = (state.min, state.max);
        if !(min..=max).contains(&value) {
            return Err(GuiError::SliderValueOutOfRange { value, min, max });
        }
        if state.value == value {
            return Ok(());
        }
        if let Some(Widget::Slider(state)) = self.nodes.get_mut(id).map(|n| &mut n.widget) {
            state.value = value;
        }
        self.place_slider_handle(id);
        tracing::trace!(message = "gui.slider.changed", id = ?id, value);
        self.publish(id, names::CHANGED, &EventArgs::Value(Value::Float(value)));
        Ok(())
    }

    /// Stop dragging without changing the value.
    pub fn slider_reset_drag(&mut self, id: ElementId) {
        if let Some(Widget::Slider(slider)) = self.nodes.get_mut(id).map(|n| &mut n.widget) {
            slider.dragging = false;
        }
    }

    /// Inner width minus the handle: the distance the handle can travel.
    fn slider_track(&self, id: ElementId) -> Option<(f32, f32, f32)> {
        let node = self.nodes.get(id)?;
        let Widget::Slider(slider) = &node.widget else {
            return None;
        };
        let handle_width = self.rect(slider.handle)?.width;
        let start = node.core.rect.x + node.core.padding_x;
        let usable = (node.core.rect.width - node.core.padding_x * 2.0 - handle_width).max(0.0);
        Some((start, usable, handle_width))
    }

    /// Map a pointer x onto the range, clamped, centring the handle on it.
    fn drag_slider_to(&mut self, id: ElementId, x: f32) {
        let Some((start, usable, handle_width)) = self.slider_track(id) else {
            return;
        };
        let Ok(state) = self.slider_state(id) else {
            return;
        };
        let fraction = if usable > 0.0 {
            f64::from(((x - start - handle_width / 2.0) / usable).clamp(0.0, 1.0))
        } else {
            0.0
        };
        let value = (state.min + fraction * (state.max - state.min)).clamp(state.min, state.max);
        if let Err(err) = self.set_slider_value(id, value) {
            tracing::debug!(message = "gui.slider.error", id = ?id, error = %err);
        }
    }

    fn place_slider_handle(&mut self, id: ElementId) {
        let Some((start, usable, _)) = self.slider_track(id) else {
            return;
        };
        let Ok(state) = self.slider_state(id) else {
            return;
        };
        let handle = state.handle;
        let x = start + (usable * state.fraction() as f32).round();
        let y = self.rect(handle).map_or(0.0, |r| r.y);
        if let Err(err) = self.set_position(handle, x, y) {
            tracing::debug!(message = "gui.slider.error", id = ?id, error = %err);
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

    // 100 wide, padding 4, handle 25/2 - 4 = 8.5 wide: usable width 83.5.
    fn slider(gui: &mut Gui, value: f64) -> ElementId {
        gui.slider(
            gui.content(),
            ElementOptions::new().with_tip("Zoom"),
            SliderOptions::new(0.0, 10.0).with_value(value),
        )
        .unwrap()
    }

    #[test]
    fn defaults_and_handle_geometry() {
        let mut gui = gui();
        let s = slider(&mut gui, 0.0);
        let r = gui.rect(s).unwrap();
        assert_eq!((r.width, r.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let handle = gui.rect(gui.slider_handle(s).unwrap()).unwrap();
        assert_eq!((handle.x, handle.y), (4.0, 4.0));
        assert_eq!((handle.width, handle.height), (8.5, 17.0));
    }

    #[test]
    fn value_moves_handle_across_usable_width() {
        let mut gui = gui();
        let s = slider(&mut gui, 10.0);
        let handle = gui.slider_handle(s).unwrap();
        assert_eq!(gui.rect(handle).unwrap().x, 4.0 + 84.0);
        gui.set_slider_value(s, 5.0).unwrap();
        assert_eq!(gui.rect(handle).unwrap().x, 4.0 + 42.0);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let mut gui = gui();
        let content = gui.content();
        assert_eq!(
            gui.slider(content, ElementOptions::new(), SliderOptions::new(1.0, 1.0)),
            Err(GuiError::InvalidSliderRange { min: 1.0, max: 1.0 })
        );
        assert!(matches!(
            gui.slider(
                content,
                ElementOptions::new(),
                SliderOptions::new(0.0, 1.0).with_value(2.0)
            ),
            Err(GuiError::SliderValueOutOfRange { .. })
        ));
        let s = slider(&mut gui, 0.0);
        assert!(gui.set_slider_value(s, 11.0).is_err());
        assert!(gui.set_slider_value(s, f64::NAN).is_err());
        assert_eq!(gui.slider_value(s).unwrap(), 0.0);
    }

    #[test]
    fn press_maps_pointer_and_clamps() {
        let mut gui = gui();
        let s = slider(&mut gui, 0.0);
        gui.publish(s, names::LEFT_MOUSE_BUTTON, &EventArgs::Pointer { x: 500.0, y: 5.0 });
        assert_eq!(gui.slider_value(s).unwrap(), 10.0);
        assert!(gui.is_slider_dragging(s));

        gui.publish(s, names::HOLDING_LEFT_MOUSE_BUTTON, &EventArgs::Pointer { x: -50.0, y: 5.0 });
        assert_eq!(gui.slider_value(s).unwrap(), 0.0);

        gui.publish(s, names::RELEASED_LEFT_MOUSE_BUTTON, &EventArgs::None);
        gui.publish(s, names::HOLDING_LEFT_MOUSE_BUTTON, &EventArgs::Pointer { x: 500.0, y: 5.0 });
        assert_eq!(gui.slider_value(s).unwrap(), 0.0);
    }

    #[test]
    fn changed_fires_only_on_change() {
        let mut gui = gui();
        let s = slider(&mut gui, 3.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        gui.subscribe(s, names::CHANGED, move |_, _, args| {
            log.borrow_mut().push(args.value().and_then(Value::as_float));
        })
        .unwrap();
        gui.set_slider_value(s, 3.0).unwrap();
        gui.set_slider_value(s, 4.0).unwrap();
        assert_eq!(*seen.borrow(), vec![Some(4.0)]);
    }

    #[test]
    fn tip_appends_value() {
        let mut gui = gui();
        let s = slider(&mut gui, 2.5);
        assert_eq!(gui.tip(s), "Zoom: 2.50");
    }

    #[test]
    fn handle_or_body_hits_the_slider() {
        let mut gui = gui();
        let s = slider(&mut gui, 0.0);
        assert_eq!(gui.hit_element(gui.root(), 6.0, 10.0), Some(s));
        assert_eq!(gui.hit_element(gui.root(), 90.0, 2.0), Some(s));
        assert_eq!(gui.hit_element(gui.root(), 150.0, 10.0), None);
    }
}
