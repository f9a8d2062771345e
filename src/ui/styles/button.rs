// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style for the Previous/Next navigation buttons.
pub fn navigation(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::SM),
        button::Status::Pressed => (palette::PRIMARY_700, palette::PRIMARY_700, shadow::NONE),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: elevation,
        snap: true,
    }
}
