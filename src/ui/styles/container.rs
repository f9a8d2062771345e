// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Elevated frame around the artwork image.
pub fn artwork_frame(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::FRAME,
        ..Default::default()
    }
}

/// Flat box behind the title, location and year.
pub fn caption(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window background.
pub fn screen(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}
