// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing both images around the split line.
//!
//! Both images share one contain-fit rectangle so that their pixels line up;
//! the original is clipped to the left of the split and the enhanced image to
//! the right of it.

use super::Message;
use crate::domain::ui::SliderPosition;
use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::image::Handle;
use iced::widget::Action;
use iced::{mouse, touch, Color, Point, Rectangle, Renderer, Size, Theme};

pub struct SplitView {
    pub original: Handle,
    pub enhanced: Handle,
    /// Pixel size of the original, used for both layers.
    pub image_size: Option<Size>,
    pub position: SliderPosition,
    pub dragging: bool,
}

impl canvas::Program<Message> for SplitView {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let pressed = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.is_over(bounds)
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                bounds.contains(*position)
            }
            _ => false,
        };

        pressed.then(|| Action::publish(Message::PointerPressed { bounds }).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let area = Rectangle::with_size(frame.size());
        let picture = self
            .image_size
            .map_or(area, |size| contain(size, area.size()));
        let split_x = area.width * self.position.as_fraction();

        let left = Rectangle {
            width: split_x,
            ..area
        };
        let right = Rectangle {
            x: split_x,
            width: area.width - split_x,
            ..area
        };

        frame.with_clip(right, |frame| {
            // Clipped frames use local coordinates.
            let shifted = Rectangle {
                x: picture.x - split_x,
                ..picture
            };
            frame.draw_image(shifted, canvas::Image::new(self.enhanced.clone()));
        });
        frame.with_clip(left, |frame| {
            frame.draw_image(picture, canvas::Image::new(self.original.clone()));
        });

        draw_handle(&mut frame, split_x, self.dragging);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging || cursor.is_over(bounds) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

fn draw_handle(frame: &mut Frame, x: f32, dragging: bool) {
    let height = frame.height();
    let center = Point::new(x, height / 2.0);
    let radius = sizing::COMPARATOR_KNOB / 2.0;

    frame.stroke(
        &Path::line(Point::new(x, 0.0), Point::new(x, height)),
        Stroke::default()
            .with_width(sizing::COMPARATOR_DIVIDER)
            .with_color(palette::WHITE),
    );

    let knob = Path::circle(center, radius);
    let fill = if dragging {
        palette::PRIMARY_500
    } else {
        Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::WHITE
        }
    };
    frame.fill(&knob, fill);
    frame.stroke(
        &knob,
        Stroke::default()
            .with_width(sizing::COMPARATOR_DIVIDER)
            .with_color(palette::WHITE),
    );

    let arrow = radius * 0.35;
    let chevrons = Path::new(|builder| {
        for direction in [-1.0_f32, 1.0] {
            let tip = center.x + direction * radius * 0.6;
            let back = tip - direction * arrow;
            builder.move_to(Point::new(back, center.y - arrow));
            builder.line_to(Point::new(tip, center.y));
            builder.line_to(Point::new(back, center.y + arrow));
        }
    });
    frame.stroke(
        &chevrons,
        Stroke::default()
            .with_width(2.0)
            .with_color(if dragging {
                palette::WHITE
            } else {
                palette::GRAY_700
            })
            .with_line_cap(canvas::LineCap::Round),
    );
}

/// Largest rectangle with the image's aspect ratio that fits in `area`,
/// centered.
fn contain(image: Size, area: Size) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rectangle::with_size(area);
    }

    let scale = (area.width / image.width).min(area.height / image.height);
    let size = Size::new(image.width * scale, image.height * scale);

    Rectangle {
        x: (area.width - size.width) / 2.0,
        y: (area.height - size.height) / 2.0,
        width: size.width,
        height: size.height,
    }
}
