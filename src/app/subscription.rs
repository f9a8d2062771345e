// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Left/Right arrow keys mirror the Previous/Next buttons. Keys already
//! captured by a widget are ignored.

use super::Message;
use crate::ui::gallery;
use iced::{event, keyboard, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match status {
        event::Status::Ignored => keyboard_navigation(&event),
        event::Status::Captured => None,
    })
}

/// Maps a raw event to a gallery navigation message.
pub(crate) fn keyboard_navigation(event: &Event) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            Some(Message::Gallery(gallery::Message::Previous))
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            Some(Message::Gallery(gallery::Message::Next))
        }
        _ => None,
    }
}
