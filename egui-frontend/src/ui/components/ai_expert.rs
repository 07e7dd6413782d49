//! # AI Expert Module
//!
//! Advice chat screen. Rendering only reads `ChatUiState`; sending goes
//! through `PawsomeCareApp::send_chat_message`.
//!
//! ## Layout:
//! - assistant header ("Pet Expert AI", online dot)
//! - quick question chips that fill the input box
//! - transcript with user bubbles on the right, model bubbles on the left
//! - typing indicator while a reply is pending
//! - input row (Enter or the send button) and a vet disclaimer

use eframe::egui;
use shared::{ChatMessage, ChatRole};

use crate::ui::app_state::PawsomeCareApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::round_icon_button;

pub const QUICK_QUESTIONS: [&str; 4] = [
    "Safe foods for dogs?",
    "Kitten grooming tips",
    "Bird diet plan",
    "Training basics",
];

/// Height kept free below the transcript for the input row and disclaimer
const INPUT_AREA_HEIGHT: f32 = 90.0;

impl PawsomeCareApp {
    pub fn render_ai_expert(&mut self, ui: &mut egui::Ui) {
        self.draw_assistant_header(ui);
        ui.add_space(10.0);
        self.draw_quick_questions(ui);
        ui.add_space(10.0);

        let transcript_height = (ui.available_height() - INPUT_AREA_HEIGHT).max(120.0);
        egui::ScrollArea::vertical()
            .id_source("chat_transcript")
            .max_height(transcript_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in self.chat.session.transcript() {
                    draw_message_bubble(ui, message);
                    ui.add_space(8.0);
                }
                if self.chat.is_awaiting_response() {
                    draw_typing_indicator(ui);
                }
            });

        ui.add_space(8.0);
        self.draw_chat_input(ui);
    }

    fn draw_assistant_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::Frame::none()
                .fill(colors::ACCENT)
                .rounding(egui::Rounding::same(14.0))
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("✨").color(colors::TEXT_WHITE));
                });

            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Pet Expert AI").strong().color(colors::TEXT_PRIMARY));
                ui.horizontal(|ui| {
                    let (dot_rect, _) = ui.allocate_exact_size(egui::vec2(6.0, 6.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(dot_rect.center(), 3.0, CURRENT_THEME.palette.emerald.1);
                    ui.label(
                        egui::RichText::new("ALWAYS ONLINE")
                            .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_MUTED),
                    );
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                round_icon_button(ui, "🕘");
            });
        });
    }

    fn draw_quick_questions(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::horizontal()
            .id_source("quick_questions")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for question in QUICK_QUESTIONS {
                        let chip = egui::Button::new(
                            egui::RichText::new(question.to_uppercase())
                                .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_SECONDARY),
                        )
                        .fill(colors::CARD_BACKGROUND)
                        .stroke(egui::Stroke::new(1.0, colors::DISABLED))
                        .rounding(egui::Rounding::same(16.0));

                        if ui.add(chip).clicked() {
                            self.chat.input = question.to_string();
                        }
                    }
                });
            });
    }

    fn draw_chat_input(&mut self, ui: &mut egui::Ui) {
        let mut send_requested = false;

        egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .stroke(egui::Stroke::new(1.0, colors::DISABLED))
            .rounding(egui::Rounding::same(20.0))
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let can_send = self.chat.can_send();
                    let button_width = 40.0;

                    let text_edit = ui.add_sized(
                        [ui.available_width() - button_width - 8.0, 32.0],
                        egui::TextEdit::singleline(&mut self.chat.input)
                            .hint_text("Ask about your pet's care...")
                            .frame(false),
                    );
                    if text_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        send_requested = true;
                        text_edit.request_focus();
                    }

                    let (fill, text_color) = if can_send {
                        (colors::ACCENT, colors::TEXT_WHITE)
                    } else {
                        (colors::DISABLED, colors::TEXT_MUTED)
                    };
                    let send_button = egui::Button::new(egui::RichText::new("➤").color(text_color))
                        .fill(fill)
                        .rounding(egui::Rounding::same(14.0))
                        .min_size(egui::vec2(button_width, 32.0));
                    if ui.add_enabled(can_send, send_button).clicked() {
                        send_requested = true;
                    }
                });
            });

        if send_requested {
            let ctx = ui.ctx().clone();
            self.send_chat_message(&ctx);
        }

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("AI GENERATED ADVICE • ALWAYS CHECK WITH A VET")
                    .font(egui::FontId::new(9.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_MUTED),
            );
        });
    }
}

fn draw_message_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let max_width = ui.available_width() * 0.85;
    let (layout, fill, text_color, stroke) = match message.role {
        ChatRole::User => (
            egui::Layout::right_to_left(egui::Align::Min),
            colors::ACCENT,
            colors::TEXT_WHITE,
            egui::Stroke::NONE,
        ),
        ChatRole::Model => (
            egui::Layout::left_to_right(egui::Align::Min),
            colors::CARD_BACKGROUND,
            colors::TEXT_PRIMARY,
            egui::Stroke::new(1.0, colors::CARD_BORDER),
        ),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::none()
            .fill(fill)
            .stroke(stroke)
            .rounding(egui::Rounding::same(18.0))
            .inner_margin(egui::Margin::symmetric(14.0, 10.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.add(egui::Label::new(egui::RichText::new(&message.content).color(text_color)).wrap());
            });
    });
}

fn draw_typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(18.0))
        .inner_margin(egui::Margin::symmetric(14.0, 12.0))
        .show(ui, |ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 10.0), egui::Sense::hover());
            for i in 0..3 {
                // Each dot bounces a little after the previous one
                let phase = (time * 6.0 - i as f64 * 0.8).sin() as f32;
                let center = egui::pos2(
                    rect.left() + 6.0 + i as f32 * 12.0,
                    rect.center().y - phase.max(0.0) * 3.0,
                );
                ui.painter().circle_filled(center, 3.5, CURRENT_THEME.palette.indigo.1);
            }
        });
}
