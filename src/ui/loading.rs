// SPDX-License-Identifier: MPL-2.0
//! Loading block: spinner plus the rotating status message.
//!
//! Which message is shown is decided by the controller; this module only
//! owns the spinner angle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::widget::{column, container, text};
use iced::{alignment, Element, Length};

/// Radians advanced per spinner tick.
pub const ROTATION_STEP: f32 = 0.15;

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    rotation: f32,
}

impl State {
    pub fn tick(&mut self) {
        self.rotation = animated_spinner::advance(self.rotation, ROTATION_STEP);
    }

    pub fn reset(&mut self) {
        self.rotation = 0.0;
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status_key: &'a str,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let content = column![
        AnimatedSpinner::new(palette::PRIMARY_400, state.rotation()).into_element(),
        text(ctx.i18n.tr(ctx.status_key))
            .size(typography::BODY_LG)
            .color(palette::PRIMARY_200),
    ]
    .spacing(spacing::MD)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_rotation() {
        let mut state = State::default();
        state.tick();
        state.tick();
        assert!((state.rotation() - 2.0 * ROTATION_STEP).abs() < 1e-6);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut state = State::default();
        state.tick();
        state.reset();
        assert_eq!(state.rotation(), 0.0);
    }
}
