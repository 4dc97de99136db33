#![forbid(unsafe_code)]

//! Usage errors raised by the widget tree.

use std::fmt;

use crate::element::ElementId;

/// Result alias for widget operations.
pub type GuiResult<T> = Result<T, GuiError>;

/// Programmer mistakes detected by the widget tree.
///
/// These are returned to the immediate caller and never caught inside the
/// framework.
#[derive(Debug, Clone, PartialEq)]
pub enum GuiError {
    /// The id does not name a live element.
    UnknownElement(ElementId),
    /// Children were added to an element that cannot hold them.
    NotAContainer(ElementId),
    /// The element is not a child of the given container.
    NotAChild { parent: ElementId, child: ElementId },
    /// The operation needs a different kind of widget.
    WrongWidget {
        id: ElementId,
        expected: &'static str,
        found: &'static str,
    },
    /// A radio button has no group, neither passed in nor among its ancestors.
    RadioButtonOutsideGroup,
    /// No radio button in the group carries the value.
    NoSuchRadioValue(String),
    /// No menu item carries the value.
    NoSuchMenuValue(String),
    /// A slider value lies outside the slider's range.
    SliderValueOutOfRange { value: f64, min: f64, max: f64 },
    /// A slider was configured with `min >= max` or a non-finite bound.
    InvalidSliderRange { min: f64, max: f64 },
    /// A caret position lies outside `0..=len`.
    CaretOutOfRange { position: usize, len: usize },
    /// An element cannot be attached under itself or its own descendant.
    AlreadyAttached(ElementId),
    /// An index lies outside a collection.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(id) => write!(f, "element {id:?} does not exist"),
            Self::NotAContainer(id) => write!(f, "element {id:?} cannot hold children"),
            Self::NotAChild { parent, child } => {
                write!(f, "element {child:?} is not a child of {parent:?}")
            }
            Self::WrongWidget {
                id,
                expected,
                found,
            } => write!(f, "element {id:?} is a {found}, expected a {expected}"),
            Self::RadioButtonOutsideGroup => {
                write!(f, "radio button must be placed inside a radio group")
            }
            Self::NoSuchRadioValue(value) => {
                write!(f, "group does not contain a radio button with value {value:?}")
            }
            Self::NoSuchMenuValue(value) => {
                write!(f, "menu does not contain an item with value {value:?}")
            }
            Self::SliderValueOutOfRange { value, min, max } => {
                write!(f, "slider value {value} must be within {min}..={max}")
            }
            Self::InvalidSliderRange { min, max } => {
                write!(f, "invalid slider range {min}..={max}")
            }
            Self::CaretOutOfRange { position, len } => write!(
                f,
                "caret position {position} must be in the range 0 to {len} (inclusive)"
            ),
            Self::AlreadyAttached(id) => {
                write!(f, "element {id:?} cannot be attached inside itself")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for GuiError {}
