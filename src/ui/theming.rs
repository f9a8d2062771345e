// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for the gallery screen.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub frame_background: Color,
    pub caption_background: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            frame_background: palette::WHITE,
            caption_background: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            frame_background: palette::GRAY_800,
            caption_background: palette::GRAY_800,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Replaces `System` with the desktop's current Light or Dark mode.
    ///
    /// Detection may block (D-Bus on Linux), so call this once at startup
    /// and keep the result.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => ThemeMode::Light,
                // Default to dark on detection error
                _ => ThemeMode::Dark,
            },
            explicit => explicit,
        }
    }

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.resolve() == ThemeMode::Dark
    }

    /// Returns the Iced theme matching the effective mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
