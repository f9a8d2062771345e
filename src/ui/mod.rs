// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`gallery`] - The gallery screen (artwork frame, caption, navigation buttons)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
