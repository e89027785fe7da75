//! Fixed top navigation bar
//!
//! Section links with scroll-spy highlighting, plus the theme toggle.
//! Transparent while the page is at the top, opaque with a bottom border
//! once scrolled.

use eframe::egui;

use super::FolioApp;
use crate::content::{Section, OWNER_NAME};

impl FolioApp {
    pub(crate) fn render_nav(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        let (fill, border) = if self.nav_scrolled() {
            (palette.bg_navbar, palette.border)
        } else {
            (egui::Color32::TRANSPARENT, egui::Color32::TRANSPARENT)
        };

        egui::TopBottomPanel::top("nav")
            .frame(
                egui::Frame::new()
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, border))
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(OWNER_NAME)
                            .color(palette.accent)
                            .strong()
                            .size(16.0),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = self.theme().toggle_icon();
                        if ui.button(egui::RichText::new(icon).size(14.0)).clicked() {
                            self.set_theme(ctx, self.theme().toggled());
                        }

                        ui.add_space(8.0);

                        // Links render right-to-left in this layout, so walk
                        // the sections in reverse to keep page order.
                        for &section in Section::ALL.iter().rev() {
                            let active = self.active_section() == section;
                            let color = if active {
                                palette.accent
                            } else {
                                palette.text_secondary
                            };
                            let link = ui.add(
                                egui::Label::new(
                                    egui::RichText::new(section.label())
                                        .color(color)
                                        .size(13.0),
                                )
                                .sense(egui::Sense::click()),
                            );
                            if link.clicked() {
                                self.scroll_to(section);
                            }
                            if link.hovered() {
                                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            }
                            ui.add_space(10.0);
                        }
                    });
                });
            });
    }
}
