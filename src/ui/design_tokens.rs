// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants for the gallery screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Artwork frame, caption and button sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use art_space::ui::design_tokens::{palette, sizing, spacing};

let frame_width = sizing::ARTWORK_FRAME_WIDTH;
let gap = spacing::XL;
assert!(frame_width > gap);
let _ = palette::GRAY_100;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.18, 0.18, 0.18);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.95);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.35;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Outer frame around the artwork (casts the shadow).
    pub const ARTWORK_FRAME_WIDTH: f32 = 350.0;
    pub const ARTWORK_FRAME_HEIGHT: f32 = 400.0;

    /// Artwork image, stretched to fill this box.
    pub const ARTWORK_IMAGE_WIDTH: f32 = 300.0;
    pub const ARTWORK_IMAGE_HEIGHT: f32 = 350.0;

    /// Caption box holding title, location and year.
    pub const CAPTION_WIDTH: f32 = 350.0;
    pub const CAPTION_HEIGHT: f32 = 100.0;

    pub const BUTTON_HEIGHT: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Artwork title
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - location, year, button labels
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Elevated artwork frame.
    pub const FRAME: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    // The image must fit inside its frame
    assert!(sizing::ARTWORK_IMAGE_WIDTH < sizing::ARTWORK_FRAME_WIDTH);
    assert!(sizing::ARTWORK_IMAGE_HEIGHT < sizing::ARTWORK_FRAME_HEIGHT);

    assert!(typography::TITLE_MD > typography::BODY);
};
