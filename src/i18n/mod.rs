// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every visible string, including artwork titles, locations and years, is a
//! Fluent message looked up at render time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
