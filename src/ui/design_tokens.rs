// SPDX-License-Identifier: MPL-2.0
//! Design tokens: colors, spacing, sizing, typography and radii shared by
//! every gallery widget.
//!
//! ```
//! use cat_gallery::ui::design_tokens::{spacing, sizing};
//!
//! let padding = spacing::MD; // 16px
//! assert!(sizing::GRID_CARD_HEIGHT > padding);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Height of one card in Grid view.
    pub const GRID_CARD_HEIGHT: f32 = 220.0;

    /// Height of a List card whose image dimensions are unknown.
    pub const LIST_CARD_HEIGHT: f32 = 420.0;

    /// Bounds for List cards sized from the image aspect ratio.
    pub const LIST_CARD_MIN_HEIGHT: f32 = 240.0;
    pub const LIST_CARD_MAX_HEIGHT: f32 = 720.0;

    /// Approximate height of the window above the List body: padding, title
    /// and view tabs.
    pub const GALLERY_HEADER_HEIGHT: f32 = 160.0;

    /// Maximum width of the List view column.
    pub const LIST_MAX_WIDTH: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Gallery heading
    pub const TITLE_LG: f32 = 30.0;

    /// Standard body - Status lines, buttons
    pub const BODY: f32 = 14.0;

    /// Caption - Card placeholders, page indicator
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

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
}
