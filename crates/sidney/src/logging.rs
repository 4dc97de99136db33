#![forbid(unsafe_code)]

//! Logging setup.
//!
//! Every Sidney crate logs through `tracing` with a dotted `message` key
//! (`gui.menu.show`, `history.undo`). This module installs a compact `fmt`
//! subscriber so those events reach stderr. `RUST_LOG` directives are
//! appended to the filter passed in, so they can override it per target.

use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Filter used when the caller passes none: Sidney crates at info,
/// everything else at warn.
pub const DEFAULT_FILTER: &str =
    "warn,sidney=info,sidney_core=info,sidney_widgets=info,sidney_runtime=info";

/// Install the global subscriber, replacing nothing if one is already set.
///
/// Returns `false` if another subscriber was installed first.
pub fn try_init(filter: Option<&str>) -> bool {
    let mut directives = filter.unwrap_or(DEFAULT_FILTER).to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        directives.push(',');
        directives.push_str(&env_filter);
    }

    let layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr);
    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(directives))
        .with(layer)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(message = "logging.init");
    }
    installed
}

/// Install the global subscriber, ignoring an already installed one.
pub fn init(filter: Option<&str>) {
    let _ = try_init(filter);
}
