// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::gallery::{self, ViewContext};
use iced::Element;

/// Renders the gallery screen for the current artwork.
pub fn view(app: &App) -> Element<'_, Message> {
    gallery::view(ViewContext {
        i18n: &app.i18n,
        artwork: app.controller.current(),
        colors: &app.colors,
        notice: app.notice.as_deref(),
    })
    .map(Message::Gallery)
}
