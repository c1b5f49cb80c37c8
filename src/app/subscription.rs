// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions.
//!
//! Timers only exist while a request is in flight, so an idle window does no
//! periodic work.

use super::Message;
use crate::app::config::defaults::SPINNER_TICK_MS;
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// File drops are accepted anywhere on the window, in every state.
pub fn create_file_drop_subscription() -> Subscription<Message> {
    event::listen_with(file_drop)
}

fn file_drop(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

/// Status rotation and spinner ticks, active only while loading.
pub fn create_loading_subscription(loading: bool, status_interval: Duration) -> Subscription<Message> {
    if !loading {
        return Subscription::none();
    }

    Subscription::batch([
        time::every(status_interval).map(|_| Message::StatusTick),
        time::every(Duration::from_millis(SPINNER_TICK_MS)).map(|_| Message::SpinnerTick),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn dropped_files_become_messages() {
        let event = Event::Window(window::Event::FileDropped(PathBuf::from("/tmp/a.png")));
        let message = file_drop(event, event::Status::Ignored, window::Id::unique());
        assert!(matches!(message, Some(Message::FileDropped(path)) if path.ends_with("a.png")));
    }

    #[test]
    fn other_window_events_are_ignored() {
        let event = Event::Window(window::Event::FilesHoveredLeft);
        assert!(file_drop(event, event::Status::Ignored, window::Id::unique()).is_none());
    }
}
