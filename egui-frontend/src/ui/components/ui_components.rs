//! # UI Components Module
//!
//! Reusable UI helper functions for drawing common interface elements
//! throughout the PawsomeCare app.
//!
//! ## Key Functions:
//! - `card_frame()` - White rounded card with a soft border
//! - `section_title()` - Bold heading used at the top of each section
//! - `badge()` - Small rounded pill with a tinted background
//! - `pet_avatar()` - Rounded remote image with a species-icon fallback

use eframe::egui;
use shared::Pet;

use crate::ui::components::styling::pet_type_icon;
use crate::ui::components::theme::colors;

/// White card with rounded corners and a thin border
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(24.0))
        .inner_margin(egui::Margin::same(16.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 8.0,
            spread: 0.0,
            color: egui::Color32::from_black_alpha(12),
        })
}

pub fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
            .strong()
            .color(colors::TEXT_PRIMARY),
    );
}

/// Uppercase pill, e.g. "2 PENDING" or a breed tag
pub fn badge(ui: &mut egui::Ui, text: &str, background: egui::Color32, foreground: egui::Color32) {
    egui::Frame::none()
        .fill(background)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text.to_uppercase())
                    .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(foreground),
            );
        });
}

/// Pet photo clipped to a rounded square. While the image loads (or when it
/// cannot be fetched) the species icon is painted instead.
pub fn pet_avatar(ui: &mut egui::Ui, pet: &Pet, size: f32) -> egui::Response {
    let rounding = egui::Rounding::same(size * 0.25);
    let image = egui::Image::new(pet.image.as_str())
        .fit_to_exact_size(egui::vec2(size, size))
        .rounding(rounding)
        .show_loading_spinner(false);

    let response = ui.add(image);
    let loaded = matches!(
        ui.ctx().try_load_image(&pet.image, egui::load::SizeHint::default()),
        Ok(egui::load::ImagePoll::Ready { .. })
    );
    if !loaded {
        let painter = ui.painter();
        painter.rect_filled(response.rect, rounding, colors::MUTED_BACKGROUND);
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            pet_type_icon(pet.pet_type),
            egui::FontId::new(size * 0.4, egui::FontFamily::Proportional),
            colors::TEXT_SECONDARY,
        );
    }
    response
}

/// Round icon button used for decorative header actions
pub fn round_icon_button(ui: &mut egui::Ui, icon: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(icon)
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_SECONDARY),
        )
        .fill(colors::MUTED_BACKGROUND)
        .stroke(egui::Stroke::NONE)
        .rounding(egui::Rounding::same(18.0))
        .min_size(egui::vec2(36.0, 36.0)),
    )
}
