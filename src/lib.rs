// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small art gallery viewer built with the Iced GUI framework.
//!
//! It cycles through a fixed set of artworks with Previous/Next buttons that
//! wrap around at both ends. Labels are localized with Fluent and a few user
//! preferences are read from a `settings.toml` file.

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
