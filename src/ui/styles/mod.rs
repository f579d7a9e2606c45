// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the window's widgets.

pub mod button;
pub mod container;

pub use button::toolbar as button_toolbar;
