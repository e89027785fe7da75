//! About section: bio text plus animated stat counters.

use eframe::egui;

use super::FolioApp;
use crate::content::{ABOUT_TEXT, STATS};

impl FolioApp {
    pub(crate) fn render_about(&mut self, ui: &mut egui::Ui, now: f64) {
        let palette = self.palette();

        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("About Me")
                    .color(palette.text_primary)
                    .strong()
                    .size(28.0),
            );
            ui.add_space(16.0);

            ui.scope(|ui| {
                ui.set_max_width(640.0);
                ui.label(
                    egui::RichText::new(ABOUT_TEXT)
                        .color(palette.text_secondary)
                        .size(14.0),
                );
            });

            ui.add_space(28.0);
            ui.horizontal(|ui| {
                let card_width = 180.0;
                let spacing = ui.spacing().item_spacing.x;
                let total = STATS.len() as f32 * (card_width + spacing) - spacing;
                ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

                for (i, &(label, _)) in STATS.iter().enumerate() {
                    let value = self.counters[i].value(now);
                    egui::Frame::new()
                        .fill(palette.bg_elevated)
                        .stroke(egui::Stroke::new(1.0, palette.border))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(18, 14))
                        .show(ui, |ui| {
                            ui.set_width(card_width - 36.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new(format!("{value}+"))
                                        .color(palette.accent)
                                        .strong()
                                        .size(30.0),
                                );
                                ui.label(
                                    egui::RichText::new(label)
                                        .color(palette.text_muted)
                                        .size(12.0),
                                );
                            });
                        });
                }
            });
        });
        ui.add_space(60.0);
    }
}
