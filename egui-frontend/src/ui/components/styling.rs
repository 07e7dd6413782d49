//! # Styling Module
//!
//! Global egui style setup plus the display descriptors for the closed tag
//! enums (reminder category, species, timeline status).
//!
//! ## Key Functions:
//! - `setup_pawsome_style()` - Configure global egui styling
//! - `reminder_style()` - Icon and colors for a reminder category
//! - `pet_type_icon()` - Icon for a species
//! - `timeline_style()` - Dot and badge colors for a timeline status
//!
//! Every descriptor is an exhaustive `match`: adding a variant to one of the
//! shared enums fails to compile until it has a look here.

use eframe::egui;
use egui::Color32;
use shared::{PetType, ReminderType, TimelineStatus};

use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Setup the app-wide egui style
pub fn setup_pawsome_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::APP_BACKGROUND;
        style.visuals.window_fill = colors::CARD_BACKGROUND;
        style.visuals.extreme_bg_color = colors::MUTED_BACKGROUND; // Text edit background
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);
        style.visuals.selection.bg_fill = colors::ACCENT;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(12.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(12.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(12.0);

        style
    });
}

/// Display descriptor for a tagged item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub background: Color32,
    pub foreground: Color32,
}

pub fn reminder_style(reminder_type: ReminderType) -> CategoryStyle {
    let palette = &CURRENT_THEME.palette;
    let (icon, (background, foreground)) = match reminder_type {
        ReminderType::Feeding => ("🍖", palette.amber),
        ReminderType::Medication => ("💊", palette.rose),
        ReminderType::Grooming => ("✂", palette.sky),
        ReminderType::Walk => ("🐾", palette.emerald),
        ReminderType::Vet => ("🩺", palette.indigo),
    };
    CategoryStyle {
        icon,
        background,
        foreground,
    }
}

pub fn pet_type_icon(pet_type: PetType) -> &'static str {
    match pet_type {
        PetType::Dog => "🐕",
        PetType::Cat => "🐈",
        PetType::Bird => "🐦",
        PetType::Rabbit => "🐇",
        PetType::Other => "❓",
    }
}

/// Timeline dot color plus badge colors
pub fn timeline_style(status: TimelineStatus) -> CategoryStyle {
    let palette = &CURRENT_THEME.palette;
    match status {
        TimelineStatus::Completed => CategoryStyle {
            icon: "✔",
            background: palette.emerald.0,
            foreground: palette.emerald.1,
        },
        TimelineStatus::DueSoon => CategoryStyle {
            icon: "⏰",
            background: palette.amber.0,
            foreground: palette.amber.1,
        },
        TimelineStatus::Scheduled => CategoryStyle {
            icon: "📅",
            background: palette.slate.0,
            foreground: palette.indigo.1,
        },
    }
}
