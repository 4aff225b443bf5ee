// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI-related values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Controls hide delay bounds (1 to 30 seconds).
pub mod dwell_bounds {
    /// Minimum hide delay in seconds.
    pub const MIN: u32 = 1;
    /// Maximum hide delay in seconds.
    pub const MAX: u32 = 30;
    /// Default hide delay in seconds.
    pub const DEFAULT: u32 = 3;
}

// =============================================================================
// DwellWindow
// =============================================================================

/// Inactivity period after which the floating controls hide while playing.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–30 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwellWindow(u32);

impl DwellWindow {
    /// Creates a new dwell window, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(dwell_bounds::MIN, dwell_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= dwell_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= dwell_bounds::MAX
    }
}

impl Default for DwellWindow {
    fn default() -> Self {
        Self(dwell_bounds::DEFAULT)
    }
}
