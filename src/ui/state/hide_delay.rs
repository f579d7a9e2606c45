// SPDX-License-Identifier: MPL-2.0
//! Toolbar hide delay domain type.
//!
//! This module provides a type-safe wrapper for the time the toolbar stays
//! visible after the last pointer motion, in milliseconds.

use crate::config::{
    DEFAULT_TOOLBAR_HIDE_DELAY_MS, MAX_TOOLBAR_HIDE_DELAY_MS, MIN_TOOLBAR_HIDE_DELAY_MS,
};
use std::time::Duration;

/// Toolbar hide delay in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500–10000 ms).
///
/// # Example
///
/// ```
/// use glimpse::ui::state::ToolbarHideDelay;
///
/// let delay = ToolbarHideDelay::new(2000);
/// assert_eq!(delay.millis(), 2000);
///
/// // Values outside range are clamped
/// let too_short = ToolbarHideDelay::new(10);
/// assert_eq!(too_short.millis(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarHideDelay(u64);

impl ToolbarHideDelay {
    /// Creates a new hide delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TOOLBAR_HIDE_DELAY_MS, MAX_TOOLBAR_HIDE_DELAY_MS))
    }

    /// Builds the delay from an optional configured value.
    #[must_use]
    pub fn from_config(millis: Option<u64>) -> Self {
        millis.map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToolbarHideDelay {
    fn default() -> Self {
        Self(DEFAULT_TOOLBAR_HIDE_DELAY_MS)
    }
}
