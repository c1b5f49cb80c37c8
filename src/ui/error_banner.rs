// SPDX-License-Identifier: MPL-2.0
//! Banners for enhancement failures and startup warnings.

use crate::app::controller::Failure;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, row, text, Space};
use iced::{alignment, Element, Length};

/// Localized text for a failure, including any text returned by the service.
#[must_use]
pub fn message(i18n: &I18n, failure: &Failure) -> String {
    let key = failure.i18n_key();
    let detail = match failure.detail() {
        Some(detail) => i18n.tr_with_args(key, &[("text", detail)]),
        None => i18n.tr(key),
    };
    i18n.tr_with_args("error-banner", &[("message", detail.as_str())])
}

pub fn view<'a, Message: 'a>(i18n: &I18n, failure: &Failure) -> Element<'a, Message> {
    container(text(message(i18n, failure)).size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::error_banner)
        .into()
}

/// Dismissible warning, used when the settings file could not be read.
pub fn warning<'a, Message: Clone + 'a>(
    i18n: &I18n,
    key: &str,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let dismiss = button(text("×").size(typography::BODY))
        .padding([0.0, spacing::XS])
        .style(styles::button::secondary)
        .on_press(on_dismiss);

    container(
        row![
            text(i18n.tr(key)).size(typography::BODY),
            Space::new().width(Length::Fill),
            dismiss,
        ]
        .align_y(alignment::Vertical::Center),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::warning_banner)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::application::port::EnhanceError;
    use crate::error::Error;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn service_text_is_shown_verbatim() {
        let failure = Failure::Enhance(EnhanceError::UnexpectedTextResponse(
            "blocked by policy".to_string(),
        ));
        let message = message(&english(), &failure);
        assert!(message.starts_with("Error: "));
        assert!(message.contains("blocked by policy"));
    }

    #[test]
    fn upload_failure_uses_localized_text() {
        let failure = Failure::Upload(Error::Decode("bad header".to_string()));
        let message = message(&english(), &failure);
        assert!(message.starts_with("Error: "));
        assert!(!message.contains("MISSING"));
        assert!(!message.contains("bad header"));
    }
}
