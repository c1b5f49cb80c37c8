// SPDX-License-Identifier: MPL-2.0
//! Empty-state panel asking for a photo.
//!
//! Files can be picked through the native dialog or dropped anywhere on the
//! window; the drop itself is handled by the application subscription.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenDialog,
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let open = button(text(i18n.tr("upload-button")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenDialog);

    let content = column![
        text(i18n.tr("upload-heading")).size(typography::TITLE_MD),
        text(i18n.tr("upload-hint"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
        open,
        text(i18n.tr("upload-drop-hint"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    ]
    .spacing(spacing::MD)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .padding(spacing::XXL)
        .center_x(Length::Fixed(sizing::UPLOAD_PANEL_WIDTH))
        .style(styles::container::placeholder)
        .into()
}
