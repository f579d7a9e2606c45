// SPDX-License-Identifier: MPL-2.0
//! `glimpse` is a borderless, translucent single-image viewer built with iced.
//!
//! The window sizes itself around the picture and shows a small toolbar
//! (previous, zoom, next) that fades in while the pointer moves over the
//! image and fades out shortly after it stops.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod navigation;
pub mod ui;
