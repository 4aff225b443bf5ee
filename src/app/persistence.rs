// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Volume, mute, loop and the last committed speed are written back to the
//! `[playback]` section whenever they change.

use crate::config::{self, Config};
use crate::error::Result;
use crate::player::Preferences;

/// Records `prefs` in `config` and writes it to disk.
///
/// Guarded during tests to keep isolation: the in-memory config is still
/// updated so callers can assert on it.
///
/// # Errors
///
/// Returns an error if the settings file cannot be written.
pub fn persist_preferences(config: &mut Config, prefs: &Preferences) -> Result<()> {
    config.apply_preferences(prefs);

    if cfg!(test) {
        return Ok(());
    }

    config::save(config)?;
    tracing::debug!(
        volume = prefs.volume.value(),
        muted = prefs.muted,
        loop_enabled = prefs.loop_enabled,
        speed = prefs.speed.value(),
        "preferences saved"
    );
    Ok(())
}
