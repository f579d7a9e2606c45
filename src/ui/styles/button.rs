// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::BLACK, palette::WHITE, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Style for the toolbar buttons. `alpha` is the toolbar's current opacity
/// (0.0–1.0) and scales every color so the buttons fade with the strip.
pub fn toolbar(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => opacity::OVERLAY_MEDIUM,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: background * alpha,
                ..BLACK
            })),
            text_color: Color { a: alpha, ..WHITE },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}
