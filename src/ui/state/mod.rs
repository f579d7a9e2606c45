// SPDX-License-Identifier: MPL-2.0
//! UI state value types
//!
//! Small validated types shared between configuration and the window state.

pub mod hide_delay;

pub use hide_delay::ToolbarHideDelay;
