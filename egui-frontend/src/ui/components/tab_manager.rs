//! # Tab Manager Module
//!
//! Bottom navigation bar and main content routing.
//!
//! ## Key Functions:
//! - `render_bottom_navigation()` - Home / My Pets / + / AI Chat / Stats
//! - `render_main_content()` - Routes to the view for the active tab
//!
//! ## Tab Flow:
//! - AppTab::Dashboard -> pet strip, daily tasks, insights
//! - AppTab::Pets -> companion cards
//! - AppTab::AiExpert -> advice chat
//! - AppTab::Records -> weight chart and medical timeline

use eframe::egui;
use shared::AppTab;

use crate::ui::app_state::PawsomeCareApp;
use crate::ui::components::theme::colors;

impl PawsomeCareApp {
    /// Render the content for the active tab
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        let tab = self.core.current_tab;

        // The chat manages its own transcript scrolling
        if tab == AppTab::AiExpert {
            self.render_ai_expert(ui);
            return;
        }

        egui::ScrollArea::vertical()
            .id_source(("tab_scroll", tab.label()))
            .auto_shrink([false, false])
            .show(ui, |ui| match tab {
                AppTab::Dashboard => self.render_dashboard(ui),
                AppTab::Pets => self.render_pet_list(ui),
                AppTab::Records => self.render_records(ui),
                AppTab::AiExpert => self.render_ai_expert(ui),
            });
    }

    pub fn render_bottom_navigation(&mut self, ui: &mut egui::Ui) {
        let slot_width = ui.available_width() / 5.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            self.draw_nav_button(ui, AppTab::Dashboard, "🏠", slot_width);
            self.draw_nav_button(ui, AppTab::Pets, "🐾", slot_width);

            // Floating add button in the middle slot
            ui.allocate_ui_with_layout(
                egui::vec2(slot_width, 56.0),
                egui::Layout::centered_and_justified(egui::Direction::TopDown),
                |ui| {
                    let add_button = egui::Button::new(
                        egui::RichText::new("+")
                            .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_WHITE),
                    )
                    .fill(colors::ACCENT)
                    .rounding(egui::Rounding::same(28.0))
                    .min_size(egui::vec2(56.0, 56.0));

                    if ui.add_sized([56.0, 56.0], add_button).on_hover_text("Add a pet").clicked() {
                        self.open_add_pet();
                    }
                },
            );

            self.draw_nav_button(ui, AppTab::AiExpert, "💬", slot_width);
            self.draw_nav_button(ui, AppTab::Records, "📋", slot_width);
        });
    }

    fn draw_nav_button(&mut self, ui: &mut egui::Ui, tab: AppTab, icon: &str, width: f32) {
        let active = self.core.current_tab == tab;
        let color = if active { colors::ACCENT } else { colors::INACTIVE };

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, 56.0), egui::Sense::click());

        if active {
            ui.painter().rect_filled(
                egui::Rect::from_center_size(rect.center(), egui::vec2(width - 8.0, 52.0)),
                egui::Rounding::same(14.0),
                colors::ACCENT_SOFT,
            );
        }

        let painter = ui.painter();
        painter.text(
            rect.center() - egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::new(20.0, egui::FontFamily::Proportional),
            color,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            tab.label(),
            egui::FontId::new(10.0, egui::FontFamily::Proportional),
            color,
        );

        if response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
        {
            self.navigate_to(tab);
        }
    }
}
