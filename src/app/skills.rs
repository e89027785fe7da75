//! Skills section: progress bars that fill once scrolled into view.

use eframe::egui;

use super::FolioApp;
use crate::content::SKILLS;

const BAR_HEIGHT: f32 = 8.0;

impl FolioApp {
    pub(crate) fn render_skills(&mut self, ui: &mut egui::Ui, now: f64) {
        let palette = self.palette();

        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Skills")
                    .color(palette.text_primary)
                    .strong()
                    .size(28.0),
            );
            ui.add_space(20.0);

            ui.scope(|ui| {
                ui.set_max_width(560.0);

                for (i, &(label, percent)) in SKILLS.iter().enumerate() {
                    let fill_pct = self.skill_bars[i].value(now);

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(label)
                                .color(palette.text_primary)
                                .size(13.0),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(format!("{percent:.0}%"))
                                        .color(palette.text_muted)
                                        .size(12.0),
                                );
                            },
                        );
                    });

                    // Track plus animated fill, painted by hand.
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), BAR_HEIGHT),
                        egui::Sense::hover(),
                    );
                    let painter = ui.painter();
                    painter.rect_filled(rect, BAR_HEIGHT / 2.0, palette.border);
                    if fill_pct > 0.0 {
                        let fill_rect = egui::Rect::from_min_size(
                            rect.min,
                            egui::vec2(rect.width() * fill_pct / 100.0, BAR_HEIGHT),
                        );
                        painter.rect_filled(fill_rect, BAR_HEIGHT / 2.0, palette.accent);
                    }

                    ui.add_space(14.0);
                }
            });
        });
        ui.add_space(60.0);
    }
}
