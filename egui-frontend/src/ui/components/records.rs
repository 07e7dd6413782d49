//! # Records Module
//!
//! "Health Records" screen: weight tracker chart, medical timeline and the
//! health notice.
//!
//! ## Key Functions:
//! - `render_records()` - Full records screen
//! - `draw_weight_chart()` - egui_plot area line over the monthly series
//! - `draw_timeline_entry()` - One dot + card row of the medical timeline
//!
//! The content is static and comes from `RecordsService`; nothing here is
//! derived from stored pet weights.

use eframe::egui;
use shared::{HealthRecordsResponse, TimelineEntry, WeightRecord};

use crate::ui::app_state::PawsomeCareApp;
use crate::ui::components::styling::timeline_style;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{badge, card_frame, section_title};

impl PawsomeCareApp {
    pub fn render_records(&mut self, ui: &mut egui::Ui) {
        let records = self.core.backend.records_service.health_records();

        ui.label(
            egui::RichText::new("Health Records")
                .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new("MONITORING YOUR PETS' VITALS")
                .small()
                .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(14.0);

        draw_weight_card(ui, &records);
        ui.add_space(20.0);

        section_title(ui, "Medical Timeline");
        ui.add_space(8.0);
        for entry in &records.timeline {
            draw_timeline_entry(ui, entry);
            ui.add_space(10.0);
        }

        ui.add_space(10.0);
        draw_health_notice(ui, &records.health_notice);
        ui.add_space(12.0);
    }
}

fn draw_weight_card(ui: &mut egui::Ui, records: &HealthRecordsResponse) {
    card_frame()
        .rounding(egui::Rounding::same(32.0))
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(colors::ACCENT_SOFT)
                    .rounding(egui::Rounding::same(14.0))
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("📊").color(colors::ACCENT));
                    });
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Weight Tracker").strong().color(colors::TEXT_PRIMARY));
                    ui.label(
                        egui::RichText::new(format!(
                            "{} • LAST {} MONTHS",
                            records.weight_pet_name.to_uppercase(),
                            records.weight_history.len()
                        ))
                        .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_MUTED),
                    );
                });

                if let Some(change) = records.weight_change() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(format_weight_change(change))
                                    .small()
                                    .strong()
                                    .color(CURRENT_THEME.palette.emerald.1),
                            );
                            let since = records
                                .weight_history
                                .first()
                                .map(|first| format!("SINCE {}", first.month.to_uppercase()))
                                .unwrap_or_default();
                            ui.label(
                                egui::RichText::new(since)
                                    .font(egui::FontId::new(9.0, egui::FontFamily::Proportional))
                                    .color(colors::TEXT_MUTED),
                            );
                        });
                    });
                }
            });

            ui.add_space(12.0);
            draw_weight_chart(ui, &records.weight_history);
        });
}

fn draw_weight_chart(ui: &mut egui::Ui, history: &[WeightRecord]) {
    use egui_plot::{GridMark, Line, MarkerShape, Plot, PlotPoints, Points};

    if history.is_empty() {
        ui.label(egui::RichText::new("No weight data yet").color(colors::TEXT_MUTED));
        return;
    }

    let raw_points: Vec<[f64; 2]> = history
        .iter()
        .enumerate()
        .map(|(i, record)| [i as f64, record.weight])
        .collect();

    let line = Line::new(PlotPoints::from(raw_points.clone()))
        .color(colors::ACCENT)
        .width(3.0)
        .fill(weight_floor(history) as f32);

    let markers = Points::new(PlotPoints::from(raw_points))
        .color(colors::ACCENT)
        .filled(true)
        .radius(4.0)
        .shape(MarkerShape::Circle)
        .name("Weight");

    let months: Vec<String> = history.iter().map(|r| r.month.clone()).collect();
    let tooltip_months = months.clone();
    let month_count = months.len();

    Plot::new("weight_tracker_chart")
        .height(180.0)
        .show_axes([true, false])
        .show_grid([false, true])
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_background(false)
        .include_y(weight_floor(history))
        .x_grid_spacer(move |_input| {
            // One mark per month
            (0..month_count)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .x_axis_formatter(move |mark, _range| month_label(&months, mark.value))
        .label_formatter(move |name, value| {
            if name == "Weight" {
                format!("{}: {:.1} kg", month_label(&tooltip_months, value.x), value.y)
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(markers);
        });
}

/// Month name for a plot x value, empty between points
fn month_label(months: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    months.get(rounded as usize).cloned().unwrap_or_default()
}

/// Baseline the filled area sits on: one kilogram below the lightest point
fn weight_floor(history: &[WeightRecord]) -> f64 {
    let min = history
        .iter()
        .map(|r| r.weight)
        .fold(f64::INFINITY, f64::min);
    (min - 1.0).floor()
}

fn format_weight_change(change: f64) -> String {
    format!("{:+.1}kg", change)
}

fn draw_timeline_entry(ui: &mut egui::Ui, entry: &TimelineEntry) {
    let style = timeline_style(entry.status);

    ui.horizontal_top(|ui| {
        // Status dot with a soft ring
        let (dot_rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(dot_rect.center(), 11.0, style.background);
        painter.circle_filled(dot_rect.center(), 7.0, style.foreground);

        let border = if entry.active {
            CURRENT_THEME.palette.indigo.0
        } else {
            colors::CARD_BORDER
        };

        egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .stroke(egui::Stroke::new(1.0, border))
            .rounding(egui::Rounding::same(16.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&entry.title).strong().color(colors::TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge(ui, entry.status.label(), style.background, style.foreground);
                    });
                });
                ui.label(
                    egui::RichText::new(format!(
                        "{} {} • {}",
                        style.icon,
                        entry.date.to_uppercase(),
                        entry.pet_name.to_uppercase()
                    ))
                    .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_MUTED),
                );
            });
    });
}

fn draw_health_notice(ui: &mut egui::Ui, notice: &str) {
    let (soft, strong) = CURRENT_THEME.palette.rose;
    egui::Frame::none()
        .fill(soft)
        .rounding(egui::Rounding::same(24.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                ui.label(egui::RichText::new("⚠").color(strong));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Health Notice").strong().color(colors::TEXT_PRIMARY));
                    ui.add(
                        egui::Label::new(egui::RichText::new(notice).small().color(colors::TEXT_SECONDARY))
                            .wrap(),
                    );
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::seed::seed_health_records;

    #[test]
    fn test_month_label() {
        let months: Vec<String> = ["Jan", "Feb", "Mar"].iter().map(|m| m.to_string()).collect();
        assert_eq!(month_label(&months, 0.0), "Jan");
        assert_eq!(month_label(&months, 2.0), "Mar");
        assert_eq!(month_label(&months, 0.5), "");
        assert_eq!(month_label(&months, 7.0), "");
        assert_eq!(month_label(&months, -1.0), "");
    }

    #[test]
    fn test_seed_weight_change_label() {
        let records = seed_health_records();
        let change = records.weight_change().unwrap();
        assert_eq!(format_weight_change(change), "+2.2kg");
    }

    #[test]
    fn test_weight_floor_sits_below_series() {
        let records = seed_health_records();
        assert_eq!(weight_floor(&records.weight_history), 25.0);
    }
}
