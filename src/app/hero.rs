//! Hero section: name, tagline, call-to-action buttons, scroll arrow.

use eframe::egui;

use super::FolioApp;
use crate::content::{Section, OWNER_NAME, OWNER_TAGLINE, OWNER_TITLE};

impl FolioApp {
    pub(crate) fn render_hero(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        // Fill (almost) the whole viewport so the first scroll reveals About.
        let hero_height = ui.ctx().screen_rect().height() - 120.0;

        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), hero_height.max(300.0)),
            egui::Layout::top_down(egui::Align::Center),
            |ui| {
                ui.add_space(hero_height * 0.28);

                ui.label(
                    egui::RichText::new(OWNER_NAME)
                        .color(palette.text_primary)
                        .strong()
                        .size(42.0),
                );
                ui.label(
                    egui::RichText::new(OWNER_TITLE)
                        .color(palette.accent)
                        .size(20.0),
                );
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(OWNER_TAGLINE)
                        .color(palette.text_secondary)
                        .size(14.0),
                );

                ui.add_space(24.0);
                ui.horizontal(|ui| {
                    // Center the button pair by hand.
                    let spacing = ui.spacing().item_spacing.x;
                    let width = 260.0 + spacing;
                    ui.add_space((ui.available_width() - width) / 2.0);

                    if ui
                        .add_sized([130.0, 36.0], egui::Button::new("Get in touch"))
                        .clicked()
                    {
                        self.scroll_to(Section::Contact);
                    }
                    if ui
                        .add_sized([130.0, 36.0], egui::Button::new("View work"))
                        .clicked()
                    {
                        self.scroll_to(Section::Projects);
                    }
                });

                ui.add_space((ui.available_height() - 50.0).max(0.0));
                let arrow = ui.add(
                    egui::Label::new(
                        egui::RichText::new("⌄")
                            .color(palette.text_muted)
                            .size(28.0),
                    )
                    .sense(egui::Sense::click()),
                );
                if arrow.clicked() {
                    self.scroll_to(Section::About);
                }
            },
        );
    }
}
