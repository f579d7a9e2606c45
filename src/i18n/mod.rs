// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Tooltips and error messages are localized with the Fluent localization
//! system. Translation files are embedded in the binary.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Plural-aware formatting with numeric arguments
//! - Fallback to `en-US` when a locale or message is missing

pub mod fluent;
