// SPDX-License-Identifier: MPL-2.0
//! Page header with the application title.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{column, text};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    column![
        text(i18n.tr("app-title"))
            .size(typography::DISPLAY)
            .color(palette::PRIMARY_400),
        text(i18n.tr("app-subtitle"))
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    ]
    .spacing(spacing::XS)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}
