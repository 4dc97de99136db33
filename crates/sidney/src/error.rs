#![forbid(unsafe_code)]

//! Unified error type.
//!
//! Each subsystem keeps its own typed error so callers can match on what
//! matters. [`Error`] wraps them for code that drives several subsystems
//! and just wants `?` to work.

use std::fmt;

use sidney_runtime::HistoryError;
use sidney_widgets::GuiError;

use crate::config::ConfigError;

/// Top-level error type for Sidney applications.
#[derive(Debug)]
pub enum Error {
    /// Widget tree misuse.
    Gui(GuiError),
    /// Undo/redo misuse.
    History(HistoryError),
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for Sidney APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for logs.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Gui(_) => "gui",
            Self::History(_) => "history",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gui(err) => write!(f, "{err}"),
            Self::History(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gui(err) => Some(err),
            Self::History(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<GuiError> for Error {
    fn from(err: GuiError) -> Self {
        Self::Gui(err)
    }
}

impl From<HistoryError> for Error {
    fn from(err: HistoryError) -> Self {
        Self::History(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
