// SPDX-License-Identifier: MPL-2.0
//! Comparator layout: split view once a result exists, side-by-side panes
//! before that.

use super::split::SplitView;
use super::{ImagePreview, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{canvas, column, container, image, row, stack, text, Space};
use iced::{ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub original: &'a ImagePreview,
    pub enhanced: &'a ImagePreview,
}

/// Renders the comparator, or nothing when no image has been uploaded.
pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Option<Element<'a, Message>> {
    let original = ctx.original.handle()?.clone();
    let original_label = ctx.i18n.tr("comparator-original");
    let enhanced_label = ctx.i18n.tr("comparator-enhanced");

    let Some(enhanced) = ctx.enhanced.handle().cloned() else {
        let placeholder = container(
            text(ctx.i18n.tr("comparator-placeholder")).size(typography::BODY_LG),
        )
        .center(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::placeholder);

        let panes = row![
            titled_pane(
                original_label,
                image(original)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Contain)
                    .into(),
            ),
            titled_pane(enhanced_label, placeholder.into()),
        ]
        .spacing(spacing::LG)
        .height(Length::Fixed(sizing::COMPARATOR_HEIGHT));

        return Some(panes.into());
    };

    let split = canvas(SplitView {
        original,
        enhanced,
        image_size: ctx.original.dimensions(),
        position: state.position(),
        dragging: state.is_dragging(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let labels = row![
        badge(original_label),
        Space::new().width(Length::Fill),
        badge(enhanced_label),
    ]
    .padding(spacing::SM);

    Some(
        container(stack![split, labels])
            .width(Length::Fill)
            .height(Length::Fixed(sizing::COMPARATOR_HEIGHT))
            .style(styles::container::panel)
            .clip(true)
            .into(),
    )
}

fn titled_pane<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    column![
        text(title).size(typography::TITLE_SM),
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::panel),
    ]
    .spacing(spacing::XS)
    .width(Length::FillPortion(1))
    .into()
}

fn badge<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::label_badge)
        .into()
}
