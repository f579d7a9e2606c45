// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the viewer window, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels and 8-bit conversion
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use glimpse::ui::design_tokens::{opacity, palette};
use iced::Color;

// Stage background: black at 221/255
let stage = Color {
    a: opacity::from_u8(221),
    ..palette::BLACK
};
assert!(stage.a > 0.86 && stage.a < 0.87);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Converts an 8-bit opacity (0–255) to the 0.0–1.0 range.
    #[must_use]
    pub fn from_u8(value: u8) -> f32 {
        f32::from(value) / 255.0
    }

    /// Converts an animated opacity on the 0–255 scale to 0.0–1.0.
    #[must_use]
    pub fn from_scale(value: f32) -> f32 {
        (value / 255.0).clamp(TRANSPARENT, OPAQUE)
    }
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;

    /// Width of the load error placeholder.
    pub const PLACEHOLDER_WIDTH: f32 = 360.0;
    /// Height of the load error placeholder.
    pub const PLACEHOLDER_HEIGHT: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Small title - Placeholder heading
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Placeholder message
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::SM * 2.0);
    }

    #[test]
    fn opacity_conversions_cover_full_range() {
        assert_eq!(opacity::from_u8(0), 0.0);
        assert_eq!(opacity::from_u8(255), 1.0);
        assert_eq!(opacity::from_scale(510.0), 1.0);
        assert_eq!(opacity::from_scale(-3.0), 0.0);
    }
}
