// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(background: Color, text_color: Color, border_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

fn disabled_for(theme: &Theme) -> button::Style {
    let background = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };
    filled(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// Main call to action (Enhance, Choose Image).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, WHITE, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => {
            filled(palette::PRIMARY_400, WHITE, palette::PRIMARY_500, shadow::MD)
        }
        button::Status::Disabled => disabled_for(theme),
    }
}

/// Positive completion action (Download).
pub fn success(theme: &Theme, status: button::Status) -> button::Style {
    let hover = Color {
        a: 0.85,
        ..palette::SUCCESS_500
    };
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::SUCCESS_500, WHITE, palette::SUCCESS_500, shadow::SM)
        }
        button::Status::Hovered => filled(hover, WHITE, palette::SUCCESS_500, shadow::MD),
        button::Status::Disabled => disabled_for(theme),
    }
}

/// Secondary action (Start Over). Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    let (background, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(background, text_color, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            let hover = if is_dark {
                Color::from_rgb(0.35, 0.35, 0.35)
            } else {
                palette::GRAY_200
            };
            filled(hover, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => disabled_for(theme),
    }
}

/// Transparent button wrapping a whole card (mode selector).
pub fn card(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.palette().text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn hover_changes_background() {
        let normal = primary(&Theme::Dark, button::Status::Active);
        let hover = primary(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn disabled_buttons_are_grayed_out() {
        for style_fn in [primary, success, secondary] {
            let style = style_fn(&Theme::Light, button::Status::Disabled);
            assert_eq!(style.text_color, palette::GRAY_400);
            assert_eq!(style.shadow, shadow::NONE);
        }
    }
}
