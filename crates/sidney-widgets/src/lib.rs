#![forbid(unsafe_code)]

//! Retained-mode widgets for the Sidney editor.
//!
//! # Role in Sidney
//! `sidney-widgets` owns the element tree, every concrete widget, and the
//! surface controller that turns polled input into element events.
//!
//! # Primary responsibilities
//! - **Gui**: an arena of elements keyed by [`ElementId`], with explicit
//!   per-widget factories (`gui.button(parent, text, options)`).
//! - **Layout**: upward size propagation through `recalc`; free, vertical
//!   and horizontal packing.
//! - **Widgets**: label, button, toggle button, radio button and group,
//!   combo box, menu pane, slider, text area, tooltip.
//! - **Surface**: hover and tooltip timing, click arming, focus, the modal
//!   menu overlay and text-input routing.
//!
//! # Example
//! ```
//! use sidney_core::event::{InputEvent, MouseButton, names};
//! use sidney_core::input::InputState;
//! use sidney_core::render::MonospaceMetrics;
//! use sidney_widgets::{ElementOptions, Gui, GuiConfig};
//!
//! let mut gui = Gui::new(GuiConfig::default(), MonospaceMetrics::default());
//! let ok = gui.button(gui.content(), "OK", ElementOptions::new()).unwrap();
//! gui.subscribe(ok, names::CLICKED_LEFT_MOUSE_BUTTON, |_, _, _| println!("clicked"))
//!     .unwrap();
//!
//! gui.update(&InputState::at(5.0, 5.0, 0));
//! gui.handle_event(&InputEvent::ButtonDown(MouseButton::Left));
//! gui.handle_event(&InputEvent::ButtonUp(MouseButton::Left));
//! ```

pub mod button;
pub mod combo_box;
pub mod composite;
pub mod config;
pub mod container;
pub mod element;
pub mod error;
pub mod gui;
pub mod gui_state;
pub mod label;
pub mod menu_pane;
pub mod packer;
pub mod radio_button;
pub mod slider;
pub mod text_area;
pub mod tool_tip;
pub mod toggle_button;

pub use button::ButtonState;
pub use combo_box::ComboState;
pub use config::GuiConfig;
pub use element::{ElementCore, ElementHandler, ElementId, ElementOptions, Node, Widget};
pub use error::{GuiError, GuiResult};
pub use gui::Gui;
pub use label::{Icon, LabelContent};
pub use menu_pane::{MenuItemOptions, MenuItemState};
pub use packer::Packing;
pub use radio_button::{RadioGroupState, RadioOptions, RadioState};
pub use slider::{SliderOptions, SliderState};
pub use text_area::{CaretSpot, TextAreaOptions, TextAreaState};
pub use toggle_button::{ToggleFace, ToggleOptions, ToggleState};
