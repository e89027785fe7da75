//! Projects section: static cards from the content module.

use eframe::egui;

use super::FolioApp;
use crate::content::PROJECTS;

impl FolioApp {
    pub(crate) fn render_projects(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();

        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Projects")
                    .color(palette.text_primary)
                    .strong()
                    .size(28.0),
            );
            ui.add_space(20.0);

            ui.scope(|ui| {
                ui.set_max_width(640.0);

                for &(title, description, tech) in PROJECTS {
                    egui::Frame::new()
                        .fill(palette.bg_elevated)
                        .stroke(egui::Stroke::new(1.0, palette.border))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(18, 14))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(
                                egui::RichText::new(title)
                                    .color(palette.text_primary)
                                    .strong()
                                    .size(16.0),
                            );
                            ui.add_space(6.0);
                            ui.label(
                                egui::RichText::new(description)
                                    .color(palette.text_secondary)
                                    .size(13.0),
                            );
                            ui.add_space(6.0);
                            ui.label(
                                egui::RichText::new(tech)
                                    .color(palette.accent)
                                    .size(11.0),
                            );
                        });
                    ui.add_space(12.0);
                }
            });
        });
        ui.add_space(60.0);
    }
}
