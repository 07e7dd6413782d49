//! # Add Pet Modal
//!
//! "New Companion" overlay: species selector, name, age, weight and breed.
//!
//! ## Behavior:
//! - "Create Profile" is enabled only when name and breed are filled in
//! - submit creates the pet, then closes and resets the form
//! - Enter in the name or breed field submits a complete form
//! - the ✕ button or ESC discard the form; the backdrop only blocks clicks
//! - the active tab never changes

use eframe::egui;
use shared::PetType;

use crate::ui::app_state::PawsomeCareApp;
use crate::ui::components::modals::shared::{field_label, modal_backdrop};
use crate::ui::components::styling::pet_type_icon;
use crate::ui::components::theme::colors;

const MODAL_WIDTH: f32 = 380.0;

/// What the user did with the overlay this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddPetAction {
    None,
    Submit,
    Cancel,
}

impl PawsomeCareApp {
    pub fn render_add_pet_modal(&mut self, ctx: &egui::Context) {
        let mut action = AddPetAction::None;

        modal_backdrop(ctx, egui::Id::new("add_pet_backdrop"));

        egui::Area::new(egui::Id::new("add_pet_modal"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::NONE)
                    .rounding(egui::Rounding::same(32.0))
                    .inner_margin(egui::Margin::same(24.0))
                    .show(ui, |ui| {
                        ui.set_width(MODAL_WIDTH);
                        if let Some(chosen) = self.draw_add_pet_form(ui) {
                            action = chosen;
                        }
                    });
            });

        match action {
            AddPetAction::Submit => {
                self.submit_add_pet();
            }
            AddPetAction::Cancel => self.close_add_pet(),
            AddPetAction::None => {}
        }
    }

    fn draw_add_pet_form(&mut self, ui: &mut egui::Ui) -> Option<AddPetAction> {
        let mut action = None;
        let form = &mut self.modal.add_pet_form;

        // Title row
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("New Companion")
                        .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                field_label(ui, "Fill in the details");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let close = egui::Button::new(egui::RichText::new("✕").color(colors::TEXT_MUTED))
                    .fill(colors::APP_BACKGROUND)
                    .rounding(egui::Rounding::same(16.0))
                    .min_size(egui::vec2(32.0, 32.0));
                if ui.add(close).clicked() {
                    action = Some(AddPetAction::Cancel);
                }
            });
        });
        ui.add_space(14.0);

        // Photo preview
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Image::new(form.image.as_str())
                    .fit_to_exact_size(egui::vec2(96.0, 96.0))
                    .rounding(egui::Rounding::same(28.0)),
            );
            ui.label(
                egui::RichText::new("📷 CHANGE PHOTO")
                    .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::ACCENT),
            );
        });
        ui.add_space(12.0);

        // Species
        field_label(ui, "Species");
        egui::ScrollArea::horizontal()
            .id_source("species_selector")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for pet_type in PetType::ALL {
                        let selected = form.pet_type == pet_type;
                        let (fill, text_color, stroke) = if selected {
                            (colors::ACCENT, colors::TEXT_WHITE, colors::ACCENT)
                        } else {
                            (colors::CARD_BACKGROUND, colors::TEXT_SECONDARY, colors::CARD_BORDER)
                        };
                        let button = egui::Button::new(
                            egui::RichText::new(format!("{} {}", pet_type_icon(pet_type), pet_type.label()))
                                .small()
                                .strong()
                                .color(text_color),
                        )
                        .fill(fill)
                        .stroke(egui::Stroke::new(2.0, stroke))
                        .rounding(egui::Rounding::same(14.0));

                        if ui.add(button).clicked() {
                            form.pet_type = pet_type;
                        }
                    }
                });
            });
        ui.add_space(10.0);

        // Name
        field_label(ui, "Name");
        let name_edit = ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .hint_text("What's their name?")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        // Age and weight side by side
        ui.columns(2, |columns| {
            field_label(&mut columns[0], "Age (Years)");
            columns[0].add(egui::DragValue::new(&mut form.age).speed(0.1));

            field_label(&mut columns[1], "Weight (kg)");
            columns[1].add(
                egui::DragValue::new(&mut form.weight)
                    .speed(0.1)
                    .fixed_decimals(1)
                    .suffix(" kg"),
            );
        });
        ui.add_space(8.0);

        // Breed
        field_label(ui, "Breed");
        let breed_edit = ui.add(
            egui::TextEdit::singleline(&mut form.breed)
                .hint_text("e.g. Golden Retriever")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(16.0);

        let can_submit = form.can_submit();
        let submit = egui::Button::new(
            egui::RichText::new("Create Profile")
                .strong()
                .color(if can_submit { colors::TEXT_WHITE } else { colors::TEXT_MUTED }),
        )
        .fill(if can_submit { colors::ACCENT } else { colors::DISABLED })
        .rounding(egui::Rounding::same(18.0));

        let submitted = ui
            .add_enabled_ui(can_submit, |ui| ui.add_sized([ui.available_width(), 48.0], submit))
            .inner
            .clicked();
        let enter_in_field = (name_edit.lost_focus() || breed_edit.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let enter_pressed = can_submit && enter_in_field;
        if submitted || enter_pressed {
            action = Some(AddPetAction::Submit);
        }

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::{AdviceError, AdviceProvider, AdviceRequest};
    use crate::backend::Backend;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct SilentProvider;

    #[async_trait]
    impl AdviceProvider for SilentProvider {
        async fn generate(&self, _request: &AdviceRequest) -> Result<Option<String>, AdviceError> {
            Ok(None)
        }
    }

    fn app_with_filled_form() -> PawsomeCareApp {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let mut app =
            PawsomeCareApp::from_backend(Backend::with_provider(Arc::new(SilentProvider)), runtime);
        app.open_add_pet();
        app.modal.add_pet_form.name = "Rex".to_string();
        app.modal.add_pet_form.breed = "Beagle".to_string();
        app
    }

    fn enter_pressed() -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Enter,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_enter_without_focused_field_does_not_submit() {
        let mut app = app_with_filled_form();
        let ctx = egui::Context::default();

        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_add_pet_modal(ctx));
        let _ = ctx.run(enter_pressed(), |ctx| app.render_add_pet_modal(ctx));

        assert!(app.modal.show_add_pet_modal);
        assert_eq!(app.core.backend.pet_service.list_pets().pets.len(), 2);
        assert_eq!(app.modal.add_pet_form.name, "Rex");
    }

    #[test]
    fn test_frames_without_input_keep_overlay_open() {
        let mut app = app_with_filled_form();
        let ctx = egui::Context::default();

        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_add_pet_modal(ctx));
        }

        assert!(app.modal.show_add_pet_modal);
        assert_eq!(app.core.backend.pet_service.list_pets().pets.len(), 2);
    }
}
