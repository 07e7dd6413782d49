//! # Header Module
//!
//! App title bar with the brand name and the (decorative) search and
//! notification buttons.

use eframe::egui;

use crate::ui::app_state::PawsomeCareApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::round_icon_button;

impl PawsomeCareApp {
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                ui.label(
                    egui::RichText::new("PawsomeCare")
                        .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new("PREMIUM PET CARE")
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_SECONDARY),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let bell = round_icon_button(ui, "🔔");
                // Unread dot
                ui.painter().circle_filled(
                    bell.rect.right_top() + egui::vec2(-9.0, 9.0),
                    4.0,
                    CURRENT_THEME.palette.rose.1,
                );
                round_icon_button(ui, "🔍");
            });
        });
    }
}
