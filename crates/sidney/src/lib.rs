#![forbid(unsafe_code)]

//! Sidney GUI public facade crate.
//!
//! Re-exports the widget tree, the core vocabulary and the history from
//! the internal crates, and adds what an application needs at startup:
//! configuration loading, logging and a unified error type.
//!
//! ```
//! use sidney::prelude::*;
//!
//! let config = SidneyConfig::default();
//! let mut gui = Gui::new(config.gui.clone(), MonospaceMetrics::default());
//! let mut history = History::new(config.history.clone());
//!
//! let zoom = gui
//!     .slider(gui.content(), ElementOptions::new(), SliderOptions::new(1.0, 4.0))
//!     .unwrap();
//! assert_eq!(gui.slider_value(zoom).unwrap(), 1.0);
//! assert!(!history.can_undo());
//! # let _ = &mut history;
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;

// --- Core re-exports -------------------------------------------------------

pub use sidney_core::event::names;
pub use sidney_core::{
    Color, DrawCommand, DrawList, EventArgs, FontMetrics, ImageId, InputEvent, InputSource,
    InputState, KeyCode, KeyEvent, Modifiers, MonospaceMetrics, MouseButton, Publisher, Rect,
    Renderer, Value,
};

// --- Widget re-exports -----------------------------------------------------

pub use sidney_widgets::{
    ElementId, ElementOptions, Gui, GuiConfig, GuiError, GuiResult, Icon, MenuItemOptions,
    Packing, RadioOptions, SliderOptions, TextAreaOptions, ToggleFace, ToggleOptions,
};

// --- Runtime re-exports ----------------------------------------------------

pub use sidney_runtime::{
    Action, ActionBatch, Clipboard, Duplicate, FnAction, History, HistoryConfig, HistoryError,
    MoveAction, Selectable, Selection,
};

pub use config::{ConfigError, SidneyConfig};
pub use error::{Error, Result};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Action, Color, ElementId, ElementOptions, Error, EventArgs, FnAction, Gui, GuiConfig,
        History, HistoryConfig, InputEvent, InputState, KeyCode, KeyEvent, MenuItemOptions,
        MonospaceMetrics, MouseButton, Packing, RadioOptions, Rect, Result, SidneyConfig,
        SliderOptions, TextAreaOptions, ToggleOptions, Value, names,
    };

    pub use crate::{core, runtime, widgets};
}

pub use sidney_core as core;
pub use sidney_runtime as runtime;
pub use sidney_widgets as widgets;
