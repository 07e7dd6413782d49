//! # Dashboard Module
//!
//! Home screen: the pet family strip, today's tasks and the insights card.
//!
//! ## Key Functions:
//! - `render_dashboard()` - Full home screen
//! - `draw_pet_strip()` - Horizontally scrolling pet avatars plus "Add New"
//! - `draw_reminder_row()` - One clickable task row (toggles completion)

use eframe::egui;
use shared::{Pet, Reminder};

use crate::ui::app_state::PawsomeCareApp;
use crate::ui::components::styling::reminder_style;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{badge, pet_avatar, section_title};

impl PawsomeCareApp {
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let pets = self.core.backend.pet_service.list_pets().pets;
        let reminders = self.core.backend.reminder_service.list_reminders();

        // Your Pet Family
        ui.horizontal(|ui| {
            section_title(ui, "Your Pet Family");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let see_all = ui.add(
                    egui::Label::new(
                        egui::RichText::new("See All").strong().color(colors::ACCENT),
                    )
                    .sense(egui::Sense::click()),
                );
                if see_all.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    self.open_add_pet();
                }
            });
        });
        ui.add_space(8.0);
        self.draw_pet_strip(ui, &pets);

        ui.add_space(20.0);

        // Daily Tasks
        ui.horizontal(|ui| {
            section_title(ui, "Daily Tasks");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (background, foreground) = CURRENT_THEME.palette.indigo;
                badge(ui, &format!("{} Pending", reminders.pending_count), background, foreground);
            });
        });
        ui.add_space(8.0);

        let mut toggled: Option<String> = None;
        for reminder in &reminders.reminders {
            let pet_name = self
                .core
                .backend
                .pet_service
                .pet_name(&reminder.pet_id)
                .unwrap_or_default();
            if self.draw_reminder_row(ui, reminder, &pet_name) {
                toggled = Some(reminder.id.clone());
            }
            ui.add_space(6.0);
        }
        if let Some(id) = toggled {
            self.toggle_reminder(&id);
        }

        ui.add_space(20.0);
        self.draw_insights_card(ui);
        ui.add_space(12.0);
    }

    fn draw_pet_strip(&mut self, ui: &mut egui::Ui, pets: &[Pet]) {
        egui::ScrollArea::horizontal()
            .id_source("pet_family_strip")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 14.0;
                    for pet in pets {
                        ui.vertical(|ui| {
                            ui.set_width(110.0);
                            let avatar = pet_avatar(ui, pet, 110.0);

                            // Breed tag overlaid on the photo
                            let breed_word = pet.breed.split(' ').next().unwrap_or_default();
                            let tag_rect = egui::Rect::from_min_size(
                                avatar.rect.left_bottom() + egui::vec2(6.0, -24.0),
                                egui::vec2(avatar.rect.width() - 12.0, 18.0),
                            );
                            ui.allocate_ui_at_rect(tag_rect, |ui| {
                                badge(ui, breed_word, egui::Color32::from_white_alpha(230), colors::TEXT_PRIMARY);
                            });

                            ui.vertical_centered(|ui| {
                                ui.label(egui::RichText::new(&pet.name).strong().color(colors::TEXT_PRIMARY));
                            });
                        });
                    }

                    // Add New tile
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(110.0, 110.0), egui::Sense::click());
                    let fill = if response.hovered() {
                        colors::DISABLED
                    } else {
                        colors::MUTED_BACKGROUND
                    };
                    let painter = ui.painter();
                    painter.rect(
                        rect,
                        egui::Rounding::same(24.0),
                        fill,
                        egui::Stroke::new(1.5, colors::INACTIVE),
                    );
                    painter.text(
                        rect.center() - egui::vec2(0.0, 10.0),
                        egui::Align2::CENTER_CENTER,
                        "+",
                        egui::FontId::new(24.0, egui::FontFamily::Proportional),
                        colors::TEXT_SECONDARY,
                    );
                    painter.text(
                        rect.center() + egui::vec2(0.0, 16.0),
                        egui::Align2::CENTER_CENTER,
                        "ADD NEW",
                        egui::FontId::new(11.0, egui::FontFamily::Proportional),
                        colors::TEXT_SECONDARY,
                    );
                    if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                        self.open_add_pet();
                    }
                });
            });
    }

    /// Returns true when the row was clicked
    fn draw_reminder_row(&self, ui: &mut egui::Ui, reminder: &Reminder, pet_name: &str) -> bool {
        let style = reminder_style(reminder.reminder_type);
        let (fill, title_color) = if reminder.completed {
            (colors::APP_BACKGROUND, colors::TEXT_MUTED)
        } else {
            (colors::CARD_BACKGROUND, colors::TEXT_PRIMARY)
        };

        let frame = egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
            .rounding(egui::Rounding::same(16.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    // Category icon
                    egui::Frame::none()
                        .fill(style.background)
                        .rounding(egui::Rounding::same(12.0))
                        .inner_margin(egui::Margin::same(10.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(style.icon)
                                    .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                                    .color(style.foreground),
                            );
                        });

                    ui.vertical(|ui| {
                        let mut title = egui::RichText::new(&reminder.title).strong().color(title_color);
                        if reminder.completed {
                            title = title.strikethrough();
                        }
                        ui.label(title);
                        ui.label(
                            egui::RichText::new(format!("{} • {}", reminder.time, pet_name))
                                .small()
                                .color(colors::TEXT_SECONDARY),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
                        let painter = ui.painter();
                        if reminder.completed {
                            painter.circle_filled(rect.center(), 12.0, colors::ACCENT);
                            painter.text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                "✔",
                                egui::FontId::new(13.0, egui::FontFamily::Proportional),
                                colors::TEXT_WHITE,
                            );
                        } else {
                            painter.circle_stroke(rect.center(), 11.0, egui::Stroke::new(2.0, colors::INACTIVE));
                        }
                    });
                });
            });

        let response = ui.interact(
            frame.response.rect,
            ui.id().with(("reminder_row", &reminder.id)),
            egui::Sense::click(),
        );
        response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
    }

    fn draw_insights_card(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::ACCENT)
            .rounding(egui::Rounding::same(32.0))
            .inner_margin(egui::Margin::same(22.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new("📈 Health Insights")
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_WHITE),
                );
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(
                        "Luna has reached her step goal for 5 days in a row! Keep up the great work to maintain her ideal weight.",
                    )
                    .color(CURRENT_THEME.palette.indigo.0),
                );
                ui.add_space(10.0);
                // Decorative only
                ui.add(
                    egui::Button::new(
                        egui::RichText::new("VIEW ANALYTICS")
                            .small()
                            .strong()
                            .color(colors::ACCENT),
                    )
                    .fill(colors::CARD_BACKGROUND)
                    .rounding(egui::Rounding::same(14.0)),
                );
            });
    }
}
