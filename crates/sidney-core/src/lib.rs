#![forbid(unsafe_code)]

//! Core: geometry, event channels, values, and collaborator interfaces.
//!
//! # Role in Sidney
//! `sidney-core` is the leaf layer. It owns the rectangle primitive, the
//! per-object publish/subscribe channel, the event vocabulary, and the
//! narrow interfaces through which the framework reaches its external
//! collaborators (rendering, text measurement, input polling).
//!
//! # Primary responsibilities
//! - **Rect**: containment, union and bounding boxes.
//! - **EventChannel / Publisher**: ordered subscribe/publish with explicit
//!   default handlers.
//! - **Event**: event names, event arguments, raw input events, modifiers.
//! - **Renderer / FontMetrics / InputSource**: backend-facing traits.
//!
//! # How it fits in the system
//! The widget layer (`sidney-widgets`) builds the element tree and the
//! surface controller on top of these types. The history layer
//! (`sidney-runtime`) uses the channel to announce changes.

pub mod channel;
pub mod event;
pub mod geometry;
pub mod input;
pub mod render;
pub mod value;

pub use channel::{EventChannel, EventName, Publisher, PublisherHandler, SubscriptionId};
pub use event::{EventArgs, InputEvent, KeyCode, KeyEvent, Modifiers, MouseButton};
pub use geometry::Rect;
pub use input::{InputSource, InputState};
pub use render::{Color, DrawCommand, DrawList, FontMetrics, ImageId, MonospaceMetrics, Renderer};
pub use value::Value;
