// SPDX-License-Identifier: MPL-2.0
//! Row of enhancement mode cards.

use crate::domain::enhancement::EnhancementMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text, Row};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected: Option<EnhancementMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Selected(EnhancementMode),
}

/// One card per mode, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Card {
    mode: EnhancementMode,
    highlighted: bool,
    on_press: Message,
}

fn cards(selected: Option<EnhancementMode>) -> impl Iterator<Item = Card> {
    EnhancementMode::ALL.into_iter().map(move |mode| Card {
        mode,
        highlighted: selected == Some(mode),
        on_press: Message::Selected(mode),
    })
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cards = cards(ctx.selected).fold(Row::new().spacing(spacing::MD), |row, model| {
        row.push(card(ctx.i18n, model))
    });

    column![
        text(ctx.i18n.tr("mode-selector-heading")).size(typography::TITLE_MD),
        cards,
    ]
    .spacing(spacing::MD)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn card<'a>(i18n: &I18n, model: Card) -> Element<'a, Message> {
    let Card {
        mode,
        highlighted,
        on_press,
    } = model;
    let title_color = if highlighted {
        palette::PRIMARY_400
    } else {
        palette::GRAY_200
    };

    let body = column![
        text(i18n.tr(mode.title_key()))
            .size(typography::TITLE_SM)
            .color(title_color),
        text(i18n.tr(mode.description_key()))
            .size(typography::BODY_SM)
            .color(palette::GRAY_400),
    ]
    .spacing(spacing::XS);

    button(
        container(body)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::mode_card(highlighted)),
    )
    .padding(0)
    .width(Length::Fixed(sizing::MODE_CARD_WIDTH))
    .style(styles::button::card)
    .on_press(on_press)
    .into()
}
