// SPDX-License-Identifier: MPL-2.0
//! Start Over, Enhance and Download buttons.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, row, text, Space};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub can_enhance: bool,
    pub can_download: bool,
    pub is_loading: bool,
    /// An image is loaded but no mode has been chosen yet.
    pub needs_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    StartOver,
    Enhance,
    Download,
}

/// Press message and label of each button. `None` disables the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Buttons {
    start_over: Option<Message>,
    enhance: Option<Message>,
    enhance_label_key: &'static str,
    download: Option<Message>,
    show_mode_hint: bool,
}

impl Buttons {
    fn from_context(ctx: &ViewContext<'_>) -> Self {
        Self {
            // Always available, even mid-request; the late response is dropped.
            start_over: Some(Message::StartOver),
            enhance: (ctx.can_enhance && !ctx.is_loading).then_some(Message::Enhance),
            enhance_label_key: if ctx.is_loading {
                "action-enhancing"
            } else {
                "action-enhance"
            },
            download: (ctx.can_download && !ctx.is_loading).then_some(Message::Download),
            show_mode_hint: ctx.needs_mode && !ctx.is_loading,
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = Buttons::from_context(&ctx);

    let start_over = button(text(ctx.i18n.tr("action-start-over")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press_maybe(state.start_over);

    let enhance = button(text(ctx.i18n.tr(state.enhance_label_key)))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(state.enhance);

    let download = button(text(ctx.i18n.tr("action-download")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::success)
        .on_press_maybe(state.download);

    let buttons = row![
        start_over,
        Space::new().width(Length::Fill),
        enhance,
        download
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center);

    let mut content = column![buttons].spacing(spacing::XS);
    if state.show_mode_hint {
        content = content.push(
            text(ctx.i18n.tr("action-enhance-needs-mode"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    content.width(Length::Fill).into()
}
