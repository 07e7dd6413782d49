//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the primary
//! update loop.
//!
//! ## Application Flow:
//! 1. Apply styling
//! 2. Apply any finished advice reply
//! 3. Handle global input (ESC closes the overlay)
//! 4. Render header, bottom navigation and the active tab
//! 5. Render the add-pet overlay on top when open
//!
//! This is the main entry point that ties together all other UI modules.

use eframe::egui;

use crate::ui::app_state::PawsomeCareApp;
use crate::ui::components::setup_pawsome_style;

impl eframe::App for PawsomeCareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_pawsome_style(ctx);

        // Replies land here even when the chat tab is not visible
        self.poll_advice_reply();
        if self.chat.is_awaiting_response() {
            // Keeps the typing indicator animated
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        if self.modal.any_modal_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close_add_pet();
        }

        egui::TopBottomPanel::top("pawsome_header")
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::symmetric(20.0, 14.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::TopBottomPanel::bottom("pawsome_bottom_nav")
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
            )
            .show(ctx, |ui| {
                self.render_bottom_navigation(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(crate::ui::components::theme::colors::APP_BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(20.0, 16.0)),
            )
            .show(ctx, |ui| {
                self.render_messages(ui);
                self.render_main_content(ui);
            });

        self.render_modals(ctx);
    }
}

impl PawsomeCareApp {
    /// Status message banner with a dismiss button
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        use crate::ui::components::theme::colors;

        let Some(message) = self.ui.status_message.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Frame::none()
            .fill(colors::ACCENT_SOFT)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("✅ {}", message)).color(colors::ACCENT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });
        ui.add_space(8.0);

        if dismissed {
            self.ui.clear_messages();
        }
    }

    /// Render whichever overlays are open
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        if self.modal.show_add_pet_modal {
            self.render_add_pet_modal(ctx);
        }
    }
}
