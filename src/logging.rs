// SPDX-License-Identifier: MPL-2.0
//! Log output setup.
//!
//! The filter is read from `ICED_TEMPO_LOG` (same syntax as `RUST_LOG`).
//! Without it, the crate logs at `info`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_LOG_FILTER: &str = "ICED_TEMPO_LOG";

/// Default directive when the environment variable is absent.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "iced_tempo=debug"
    } else {
        "iced_tempo=info"
    }
}

/// Builds the filter from the environment, falling back to the default.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(false)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(verbose, "logging initialized");
    }
}
