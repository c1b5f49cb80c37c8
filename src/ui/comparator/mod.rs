// SPDX-License-Identifier: MPL-2.0
//! Before/after comparator with a draggable split line.
//!
//! The original image is visible left of the split and the enhanced image
//! right of it. Dragging is tracked globally: once the handle is grabbed a
//! window-wide pointer subscription follows the cursor (or finger) until it
//! is released, even outside the widget.
//!
//! Leaving the window also ends the drag. A button released outside the
//! window is never delivered, so the split stays where the cursor crossed
//! the window edge and the next press starts a fresh drag.
//!
//! ```text
//! Idle ──PointerPressed{bounds}──► Dragging{bounds}
//!  ▲                                  │ PointerMoved(x) → position
//!  └──PointerReleased (or CursorLeft)─┘
//! ```

mod preview;
mod split;
mod view;

pub use preview::ImagePreview;
pub use view::{view, ViewContext};

use crate::domain::ui::SliderPosition;
use iced::{event, mouse, touch, window, Event, Rectangle, Subscription};

/// Messages emitted by the comparator and its pointer subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The handle layer was pressed; `bounds` are the widget's window bounds.
    PointerPressed { bounds: Rectangle },
    /// Horizontal pointer position in window coordinates.
    PointerMoved(f32),
    PointerReleased,
}

/// Result of handling a message, for the parent to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    PositionChanged(SliderPosition),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging {
        bounds: Rectangle,
    },
}

#[derive(Debug, Clone, Default)]
pub struct State {
    interaction: Interaction,
    position: SliderPosition,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::PointerPressed { bounds } => {
                self.interaction = Interaction::Dragging { bounds };
                Effect::None
            }
            Message::PointerMoved(x) => {
                let Interaction::Dragging { bounds } = self.interaction else {
                    return Effect::None;
                };
                match SliderPosition::from_pointer(x, bounds.x, bounds.width) {
                    Some(position) if position != self.position => {
                        self.position = position;
                        Effect::PositionChanged(position)
                    }
                    _ => Effect::None,
                }
            }
            Message::PointerReleased => {
                self.interaction = Interaction::Idle;
                Effect::None
            }
        }
    }

    /// Centers the split and ends any drag. Called for every new comparison.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn position(&self) -> SliderPosition {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging { .. })
    }

    /// Window-wide pointer tracking, active only while dragging.
    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_dragging() {
            event::listen_with(pointer_event)
        } else {
            Subscription::none()
        }
    }
}

fn pointer_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position })
        | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft)
        | Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn bounds() -> Rectangle {
        Rectangle {
            x: 100.0,
            y: 50.0,
            width: 200.0,
            height: 100.0,
        }
    }

    fn dragging() -> State {
        let mut state = State::new();
        state.handle(Message::PointerPressed { bounds: bounds() });
        state
    }

    #[test]
    fn starts_centered_and_idle() {
        let state = State::new();
        assert_eq!(state.position().value(), 50.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_starts_drag_without_moving() {
        let state = dragging();
        assert!(state.is_dragging());
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn move_while_dragging_updates_position() {
        let mut state = dragging();
        let effect = state.handle(Message::PointerMoved(150.0));
        assert_eq!(state.position().value(), 25.0);
        assert_eq!(effect, Effect::PositionChanged(state.position()));
    }

    #[test]
    fn move_when_idle_is_ignored() {
        let mut state = State::new();
        assert_eq!(state.handle(Message::PointerMoved(150.0)), Effect::None);
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn pointer_far_outside_pins_to_edges() {
        let mut state = dragging();
        state.handle(Message::PointerMoved(-5_000.0));
        assert_eq!(state.position().value(), 0.0);
        state.handle(Message::PointerMoved(5_000.0));
        assert_eq!(state.position().value(), 100.0);
    }

    #[test]
    fn zero_width_bounds_keep_position() {
        let mut state = State::new();
        state.handle(Message::PointerPressed {
            bounds: Rectangle {
                width: 0.0,
                ..bounds()
            },
        });
        assert_eq!(state.handle(Message::PointerMoved(10.0)), Effect::None);
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn release_ends_drag_and_keeps_position() {
        let mut state = dragging();
        state.handle(Message::PointerMoved(250.0));
        state.handle(Message::PointerReleased);
        assert!(!state.is_dragging());
        assert_eq!(state.position().value(), 75.0);

        state.handle(Message::PointerMoved(100.0));
        assert_eq!(state.position().value(), 75.0);
    }

    #[test]
    fn reset_recenters_and_stops_drag() {
        let mut state = dragging();
        state.handle(Message::PointerMoved(120.0));
        state.reset();
        assert!(!state.is_dragging());
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn global_events_map_to_pointer_messages() {
        let id = window::Id::unique();
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(42.0, 7.0),
        });
        assert_eq!(
            pointer_event(moved, event::Status::Ignored, id),
            Some(Message::PointerMoved(42.0))
        );

        let released = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            pointer_event(released, event::Status::Captured, id),
            Some(Message::PointerReleased)
        );

        let right = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right));
        assert_eq!(pointer_event(right, event::Status::Ignored, id), None);
    }

    #[test]
    fn leaving_the_window_ends_the_drag_in_place() {
        let id = window::Id::unique();
        let mut state = State::new();
        state.handle(Message::PointerPressed {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(200.0, 50.0)),
        });
        state.handle(Message::PointerMoved(190.0));

        let left = pointer_event(Event::Mouse(mouse::Event::CursorLeft), event::Status::Ignored, id)
            .expect("cursor leaving maps to a message");
        state.handle(left);

        assert!(!state.is_dragging());
        assert_eq!(state.position().value(), 95.0);
        state.handle(Message::PointerMoved(20.0));
        assert_eq!(state.position().value(), 95.0);
    }
}
