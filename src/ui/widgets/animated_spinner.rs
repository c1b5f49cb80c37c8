// SPDX-License-Identifier: MPL-2.0
//! Spinning arc drawn on a canvas.
//!
//! The widget is stateless: the caller owns the rotation angle and advances
//! it on a timer, so the spinner only animates while something drives it.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Arc length of the moving segment, in radians.
const ARC_SWEEP: f32 = PI * 1.25;
const ARC_SEGMENTS: u16 = 36;
const STROKE_WIDTH: f32 = 4.0;

/// Advances `rotation` by one animation step and wraps it into `[0, TAU)`.
#[must_use]
pub fn advance(rotation: f32, step: f32) -> f32 {
    (rotation + step).rem_euclid(TAU)
}

pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.2, ..self.color }),
        );

        // Start at 12 o'clock
        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            for i in 0..=ARC_SEGMENTS {
                let angle = start + ARC_SWEEP * f32::from(i) / f32::from(ARC_SEGMENTS);
                let point = Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                );
                if i == 0 {
                    builder.move_to(point);
                } else {
                    builder.line_to(point);
                }
            }
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let rotation = advance(TAU - 0.1, 0.2);
        assert!((rotation - 0.1).abs() < 1e-4);
    }

    #[test]
    fn advance_stays_in_range() {
        let mut rotation = 0.0;
        for _ in 0..1000 {
            rotation = advance(rotation, 0.37);
            assert!((0.0..TAU).contains(&rotation));
        }
    }
}
