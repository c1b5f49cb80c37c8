// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A single page: header, then either the upload panel or the working area
//! (actions, error banner, mode cards, loading block and comparator).

use super::controller::Controller;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::comparator::{self, ImagePreview};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::{action_panel, error_banner, header, loading, mode_selector, upload};
use iced::widget::{column, container, scrollable, Column};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a Controller,
    pub comparator: &'a comparator::State,
    pub loading: &'a loading::State,
    pub original: &'a ImagePreview,
    pub enhanced: &'a ImagePreview,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(header::view(ctx.i18n));

    if let Some(key) = ctx.notice {
        page = page.push(error_banner::warning(ctx.i18n, key, Message::DismissNotice));
    }

    page = if ctx.controller.original().is_some() {
        page.push(workspace(&ctx))
    } else {
        page.push(upload::view(ctx.i18n).map(Message::Upload))
    };

    scrollable(
        container(page)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn workspace<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controller = ctx.controller;
    let mut content = column![action_panel::view(action_panel::ViewContext {
        i18n: ctx.i18n,
        can_enhance: controller.can_enhance(),
        can_download: controller.can_download(),
        is_loading: controller.is_loading(),
        needs_mode: controller.mode().is_none(),
    })
    .map(Message::Actions)]
    .spacing(spacing::LG)
    .width(Length::Fill);

    if let Some(failure) = controller.error() {
        content = content.push(error_banner::view(ctx.i18n, failure));
    }

    if !controller.is_loading() && controller.result().is_none() {
        content = content.push(
            mode_selector::view(mode_selector::ViewContext {
                i18n: ctx.i18n,
                selected: controller.mode(),
            })
            .map(Message::ModeSelector),
        );
    }

    if controller.is_loading() {
        content = content.push(loading::view(
            loading::ViewContext {
                i18n: ctx.i18n,
                status_key: controller.status_key(),
            },
            ctx.loading,
        ));
    }

    let comparison = comparator::view(
        comparator::ViewContext {
            i18n: ctx.i18n,
            original: ctx.original,
            enhanced: ctx.enhanced,
        },
        ctx.comparator,
    );
    if let Some(comparison) = comparison {
        content = content.push(comparison.map(Message::Comparator));
    }

    content.into()
}
