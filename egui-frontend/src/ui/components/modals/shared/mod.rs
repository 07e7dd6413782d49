//! # Shared Modal Helpers
//!
//! Backdrop and form-label helpers used by every overlay.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Dimmed full-screen layer under a modal. It sits above the panels and
/// swallows their clicks.
pub fn modal_backdrop(ctx: &egui::Context, id: egui::Id) {
    let screen_rect = ctx.screen_rect();
    egui::Area::new(id)
        .order(egui::Order::Middle)
        .fixed_pos(screen_rect.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen_rect, egui::Rounding::ZERO, colors::MODAL_BACKDROP);
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });
}

/// Small uppercase caption above a form field
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
            .strong()
            .color(colors::TEXT_MUTED),
    );
}
