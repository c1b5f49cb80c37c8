// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface (upload area, loading block, comparator frame).
///
/// Derived from the active theme background with a slight opacity so panels
/// stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Mode card; the selected card gets a brand-colored border and glow.
pub fn mode_card(selected: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = panel(theme);
        if selected {
            container::Style {
                border: Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_MD,
                    radius: radius::LG.into(),
                },
                shadow: iced::Shadow {
                    color: Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..palette::PRIMARY_500
                    },
                    ..shadow::LG
                },
                ..base
            }
        } else {
            container::Style {
                border: Border {
                    color: palette::GRAY_400,
                    width: border::WIDTH_SM,
                    radius: radius::LG.into(),
                },
                ..base
            }
        }
    }
}

/// Error banner shown above the mode selector.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_900)),
        text_color: Some(palette::ERROR_200),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Non-blocking warning (e.g. settings fell back to defaults).
pub fn warning_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WARNING_500
        })),
        border: Border {
            color: palette::WARNING_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Small pill used for the "Original"/"Enhanced" corner labels.
pub fn label_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dashed-looking placeholder pane shown before a result exists.
pub fn placeholder(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        text_color: Some(palette::GRAY_400),
        ..panel(theme)
    }
}
