// SPDX-License-Identifier: MPL-2.0
//! Toolbar overlay: previous, zoom and next buttons.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::{icons, styles};
use iced::widget::{button, container, text, tooltip, Row};
use iced::{alignment, Color, Element, Length, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    ToggleZoom,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Previous,
    Zoom,
    Next,
}

/// Buttons in left-to-right order. Each takes an equal share of the width.
pub const BUTTONS: [ToolbarButton; 3] = [
    ToolbarButton::Previous,
    ToolbarButton::Zoom,
    ToolbarButton::Next,
];

impl ToolbarButton {
    #[must_use]
    pub fn message(self) -> Message {
        match self {
            ToolbarButton::Previous => Message::Previous,
            ToolbarButton::Zoom => Message::ToggleZoom,
            ToolbarButton::Next => Message::Next,
        }
    }

    #[must_use]
    pub fn tooltip_key(self) -> &'static str {
        match self {
            ToolbarButton::Previous => "toolbar-previous",
            ToolbarButton::Zoom => "toolbar-zoom",
            ToolbarButton::Next => "toolbar-next",
        }
    }

    fn icon(self) -> iced::widget::svg::Handle {
        match self {
            ToolbarButton::Previous => icons::chevron_left(),
            ToolbarButton::Zoom => icons::expand(),
            ToolbarButton::Next => icons::chevron_right(),
        }
    }
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub size: Size,
    /// Current toolbar opacity, 0.0–1.0.
    pub alpha: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let alpha = ctx.alpha;
    let icon_color = Color {
        a: alpha,
        ..palette::WHITE
    };

    let row = BUTTONS.iter().fold(
        Row::new().spacing(spacing::XXS).height(Length::Fill),
        |row, &kind| {
            let content = container(icons::sized(kind.icon(), sizing::ICON_SM, icon_color))
                .center_x(Length::Fill)
                .center_y(Length::Fill);

            let control = button(content)
                .on_press(kind.message())
                .padding(spacing::XXS)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::button_toolbar(alpha));

            // No tooltips while the strip is invisible.
            if alpha <= 0.0 {
                return row.push(control);
            }

            let tip = container(text(ctx.i18n.tr(kind.tooltip_key())).size(sizing::ICON_SM))
                .padding(spacing::XS)
                .style(styles::container::toolbar(1.0));

            row.push(tooltip(control, tip, tooltip::Position::Top))
        },
    );

    container(row)
        .width(Length::Fixed(ctx.size.width))
        .height(Length::Fixed(ctx.size.height))
        .padding(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::toolbar(alpha))
        .into()
}
