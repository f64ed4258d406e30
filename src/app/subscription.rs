// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard events that no widget captured are mapped to gallery
//! shortcuts. Whether a shortcut applies to the current view is decided by
//! the gallery itself. Window resizes are always forwarded.

use super::message::Shortcut;
use super::Message;
use iced::{event, keyboard, window, Subscription};

/// Creates the keyboard shortcut and window size subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized {
                height: size.height,
            });
        }

        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_for(&key, modifiers).map(Message::Shortcut)
            }
            _ => None,
        }
    })
}

/// Maps a pressed key to a shortcut. Chords with Ctrl, Alt or Logo are left
/// to the platform.
pub fn shortcut_for(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Shortcut::PreviousPage),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Shortcut::NextPage),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("g") => Some(Shortcut::ShowGrid),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("l") => Some(Shortcut::ShowList),
        _ => None,
    }
}
