// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the numbers that
//! shape the viewer window: size bounds, toolbar placement and the timings
//! of the toolbar fade.
//!
//! # Categories
//!
//! - **Window**: Fit bounds and padding around the image
//! - **Stage**: Background of the compositing surface
//! - **Toolbar**: Overlay size, placement and opacity
//! - **Fade**: Animation and debounce timings

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Smallest content box the window is ever sized to (both axes).
pub const VIEW_MIN: f32 = 400.0;

/// Largest image width shown without downscaling.
pub const VIEW_MAX_WIDTH: f32 = 800.0;

/// Largest image height shown without downscaling.
pub const VIEW_MAX_HEIGHT: f32 = 600.0;

/// Horizontal padding added around the image.
pub const VIEW_PADDING_X: f32 = 4.0;

/// Vertical padding added around the image (room for the toolbar).
pub const VIEW_PADDING_Y: f32 = 28.0;

/// Vertical alignment factor of the image inside the stage.
pub const IMAGE_ALIGN_Y: f32 = 0.92;

// ==========================================================================
// Stage Defaults
// ==========================================================================

/// Stage background opacity (out of 255).
pub const STAGE_OPACITY: u8 = 221;

// ==========================================================================
// Toolbar Defaults
// ==========================================================================

pub const TOOLBAR_WIDTH: f32 = 100.0;
pub const TOOLBAR_HEIGHT: f32 = 40.0;

/// Distance between the toolbar's top edge and the stage's bottom edge.
pub const TOOLBAR_BOTTOM_OFFSET: f32 = 52.0;

/// Opacity the toolbar fades in to (out of 255).
pub const TOOLBAR_VISIBLE_OPACITY: u8 = 200;

// ==========================================================================
// Fade Defaults
// ==========================================================================

pub const FADE_IN_MS: u64 = 100;
pub const FADE_OUT_MS: u64 = 250;

/// Default delay without pointer motion before the toolbar fades out.
pub const DEFAULT_TOOLBAR_HIDE_DELAY_MS: u64 = 1500;

/// Minimum configurable hide delay.
pub const MIN_TOOLBAR_HIDE_DELAY_MS: u64 = 500;

/// Maximum configurable hide delay.
pub const MAX_TOOLBAR_HIDE_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(VIEW_MIN <= VIEW_MAX_WIDTH);
    assert!(VIEW_MIN <= VIEW_MAX_HEIGHT);
    assert!(TOOLBAR_BOTTOM_OFFSET > TOOLBAR_HEIGHT);
    assert!(MIN_TOOLBAR_HIDE_DELAY_MS <= DEFAULT_TOOLBAR_HIDE_DELAY_MS);
    assert!(DEFAULT_TOOLBAR_HIDE_DELAY_MS <= MAX_TOOLBAR_HIDE_DELAY_MS);
    assert!(FADE_IN_MS < FADE_OUT_MS);
};
