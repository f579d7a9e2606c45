// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Stage surface filling the whole window.
pub fn stage(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Toolbar strip, faded as a whole by `alpha` (0.0–1.0).
pub fn toolbar(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG * alpha,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

/// Placeholder shown instead of an image that failed to load.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
