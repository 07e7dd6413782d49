//! # Pet List Module
//!
//! "Your Companions" screen: one card per pet with breed, age, weight and a
//! health status line.

use eframe::egui;
use shared::Pet;

use crate::ui::app_state::PawsomeCareApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{badge, card_frame, pet_avatar};

impl PawsomeCareApp {
    pub fn render_pet_list(&mut self, ui: &mut egui::Ui) {
        let pets = self.core.backend.pet_service.list_pets().pets;

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Your Companions")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new("⚙")
                            .fill(colors::MUTED_BACKGROUND)
                            .rounding(egui::Rounding::same(12.0)),
                    )
                    .clicked()
                {
                    self.open_add_pet();
                }
            });
        });
        ui.add_space(12.0);

        for pet in &pets {
            draw_pet_card(ui, pet);
            ui.add_space(14.0);
        }

        // Add New Friend
        let add_button = egui::Button::new(
            egui::RichText::new("+  Add New Friend")
                .strong()
                .color(colors::TEXT_SECONDARY),
        )
        .fill(colors::APP_BACKGROUND)
        .stroke(egui::Stroke::new(1.5, colors::INACTIVE))
        .rounding(egui::Rounding::same(24.0));

        if ui
            .add_sized([ui.available_width(), 64.0], add_button)
            .clicked()
        {
            self.open_add_pet();
        }
        ui.add_space(12.0);
    }
}

fn draw_pet_card(ui: &mut egui::Ui, pet: &Pet) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            pet_avatar(ui, pet, 88.0);
            ui.add_space(6.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&pet.name)
                            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge(ui, &pet.breed, colors::ACCENT_SOFT, colors::ACCENT);
                    });
                });

                ui.horizontal(|ui| {
                    stat_chip(ui, "📅", &format!("{} Years", format_number(pet.age)));
                    stat_chip(ui, "⚖", &format!("{} kg", format_number(pet.weight)));
                });

                ui.horizontal(|ui| {
                    let (_, healthy) = CURRENT_THEME.palette.emerald;
                    ui.label(egui::RichText::new("💚 Healthy status").small().strong().color(healthy));
                });
            });
        });
    });
}

fn stat_chip(ui: &mut egui::Ui, icon: &str, text: &str) {
    egui::Frame::none()
        .fill(colors::APP_BACKGROUND)
        .rounding(egui::Rounding::same(14.0))
        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("{} {}", icon, text))
                    .small()
                    .strong()
                    .color(colors::TEXT_SECONDARY),
            );
        });
}

/// Whole numbers print without a decimal point ("3", "4.5")
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
