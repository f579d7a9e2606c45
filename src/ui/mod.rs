// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The UI is a single borderless window following the Elm-style
//! "state down, messages up" pattern.
//!
//! # Window
//!
//! - [`viewer_window`] - Stage, image actor, toolbar actor and their wiring
//! - [`toolbar`] - Previous / zoom / next toolbar widget
//! - [`toolbar_fade`] - Pointer-driven fade state machine for the toolbar
//!
//! # Shared Infrastructure
//!
//! - [`layout`] - Constraints and the window fit policy
//! - [`animation`] - Tweens and one-shot timers run on the UI loop
//! - [`state`] - Validated value types
//! - [`styles`] - Centralized styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Toolbar icons

pub mod animation;
pub mod design_tokens;
pub mod icons;
pub mod layout;
pub mod state;
pub mod styles;
pub mod toolbar;
pub mod toolbar_fade;
pub mod viewer_window;
