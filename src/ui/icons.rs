// SPDX-License-Identifier: MPL-2.0
//! Symbolic toolbar icons.
//!
//! Icons are small monochrome SVG documents embedded in the binary. Handles
//! are cached using `OnceLock` so the SVG source is parsed once. Rendering
//! tints them, so the path color in the source is irrelevant.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `chevron_left` not `previous_image`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| {
                    Handle::from_memory(concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><path fill="black" d=""#,
                        $path,
                        r#""/></svg>"#
                    ).as_bytes())
                })
                .clone()
        }
    };
}

define_icon!(
    chevron_left,
    "M10.6 1.6 12 3 7 8l5 5-1.4 1.4L4.2 8z",
    "Chevron pointing left."
);
define_icon!(
    chevron_right,
    "M5.4 1.6 4 3l5 5-5 5 1.4 1.4L11.8 8z",
    "Chevron pointing right."
);
define_icon!(
    expand,
    "M1 1h5v2H3v3H1zm9 0h5v5h-2V3h-3zM1 10h2v3h3v2H1zm12 0h2v5h-5v-2h3z",
    "Four corners pointing outward."
);

/// Wraps a handle in a square, tinted `Svg` widget.
pub fn sized(handle: Handle, size: f32, color: Color) -> Svg<'static, Theme> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| iced::widget::svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_handles_are_cached() {
        assert_eq!(chevron_left().id(), chevron_left().id());
        assert_ne!(chevron_left().id(), chevron_right().id());
        assert_ne!(expand().id(), chevron_right().id());
    }
}
