//! # Theme Configuration
//!
//! Centralized colors for the PawsomeCare app. All visual styling should use
//! these constants so the palette stays consistent across screens.
//!
//! ## Usage
//! ```ignore
//! use crate::ui::components::theme::colors;
//!
//! let accent = colors::ACCENT;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, navigation, inputs)
    pub interactive: InteractiveColors,
    /// Background and card colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Soft background / strong foreground pairs for category badges
    pub palette: BadgePalette,
}

#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Brand accent (indigo)
    pub accent: Color32,
    /// Tinted background behind active navigation items
    pub accent_soft: Color32,
    /// Inactive navigation item color
    pub inactive: Color32,
    /// Disabled button fill
    pub disabled: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub app_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub muted_background: Color32,
    pub modal_backdrop: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub muted: Color32,
    pub white: Color32,
}

/// Each entry is (soft background, strong foreground)
#[derive(Debug, Clone)]
pub struct BadgePalette {
    pub amber: (Color32, Color32),
    pub rose: (Color32, Color32),
    pub sky: (Color32, Color32),
    pub emerald: (Color32, Color32),
    pub indigo: (Color32, Color32),
    pub slate: (Color32, Color32),
}

/// The current active theme - slate surfaces with indigo accents
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(79, 70, 229),
        accent_soft: Color32::from_rgb(238, 242, 255),
        inactive: Color32::from_rgb(148, 163, 184),
        disabled: Color32::from_rgb(226, 232, 240),
    },
    layout: LayoutColors {
        app_background: Color32::from_rgb(248, 250, 252),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(241, 245, 249),
        muted_background: Color32::from_rgb(241, 245, 249),
        modal_backdrop: Color32::from_rgba_premultiplied(8, 12, 22, 102),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(30, 41, 59),
        secondary: Color32::from_rgb(100, 116, 139),
        muted: Color32::from_rgb(148, 163, 184),
        white: Color32::WHITE,
    },
    palette: BadgePalette {
        amber: (Color32::from_rgb(254, 243, 199), Color32::from_rgb(217, 119, 6)),
        rose: (Color32::from_rgb(255, 228, 230), Color32::from_rgb(225, 29, 72)),
        sky: (Color32::from_rgb(224, 242, 254), Color32::from_rgb(2, 132, 199)),
        emerald: (Color32::from_rgb(209, 250, 229), Color32::from_rgb(5, 150, 105)),
        indigo: (Color32::from_rgb(224, 231, 255), Color32::from_rgb(79, 70, 229)),
        slate: (Color32::from_rgb(241, 245, 249), Color32::from_rgb(71, 85, 105)),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const ACCENT: Color32 = CURRENT_THEME.interactive.accent;
    pub const ACCENT_SOFT: Color32 = CURRENT_THEME.interactive.accent_soft;
    pub const INACTIVE: Color32 = CURRENT_THEME.interactive.inactive;
    pub const DISABLED: Color32 = CURRENT_THEME.interactive.disabled;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_MUTED: Color32 = CURRENT_THEME.typography.muted;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    pub const APP_BACKGROUND: Color32 = CURRENT_THEME.layout.app_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
    pub const MUTED_BACKGROUND: Color32 = CURRENT_THEME.layout.muted_background;
    pub const MODAL_BACKDROP: Color32 = CURRENT_THEME.layout.modal_backdrop;
}
