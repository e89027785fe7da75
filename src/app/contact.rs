//! Contact section: validated form that hands delivery to the visitor's
//! mail client via a generated mailto link.

use eframe::egui;
use tracing::{debug, info};

use super::FolioApp;
use crate::content::CONTACT_EMAIL;
use crate::form::{mailto_link, validate_field, FormField};

impl FolioApp {
    pub(crate) fn render_contact(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();

        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Get In Touch")
                    .color(palette.text_primary)
                    .strong()
                    .size(28.0),
            );
            ui.add_space(20.0);

            ui.scope(|ui| {
                ui.set_max_width(480.0);

                self.text_field(ui, FormField::Name, false);
                self.text_field(ui, FormField::Email, false);
                self.text_field(ui, FormField::Subject, false);
                self.text_field(ui, FormField::Message, true);

                ui.add_space(10.0);
                if ui
                    .add_sized([ui.available_width(), 36.0], egui::Button::new("Send Message"))
                    .clicked()
                {
                    self.submit(ui.ctx());
                }
            });
        });
        ui.add_space(40.0);
    }

    /// One labeled input with its error line. Validates on focus loss.
    fn text_field(&mut self, ui: &mut egui::Ui, field: FormField, multiline: bool) {
        let palette = self.palette();
        let idx = field_index(field);

        ui.label(
            egui::RichText::new(field.label())
                .color(palette.text_secondary)
                .size(12.0),
        );

        let value = self.field_value_mut(field);
        let response = if multiline {
            ui.add(
                egui::TextEdit::multiline(value)
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            )
        } else {
            ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY))
        };

        if response.lost_focus() {
            let value = self.field_value_mut(field).clone();
            self.contact.errors[idx] = validate_field(field, &value);
        } else if response.changed() {
            // Typing clears the stale error until the next blur or submit.
            self.contact.errors[idx] = None;
        }

        if let Some(error) = self.contact.errors[idx] {
            ui.label(egui::RichText::new(error).color(palette.error).size(11.0));
        }
        ui.add_space(8.0);
    }

    fn field_value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.contact.name,
            FormField::Email => &mut self.contact.email,
            FormField::Subject => &mut self.contact.subject,
            FormField::Message => &mut self.contact.message,
        }
    }

    /// Validate everything; on success open the mailto link and reset.
    fn submit(&mut self, ctx: &egui::Context) {
        let mut all_valid = true;
        for &field in FormField::ALL {
            let value = match field {
                FormField::Name => &self.contact.name,
                FormField::Email => &self.contact.email,
                FormField::Subject => &self.contact.subject,
                FormField::Message => &self.contact.message,
            };
            let error = validate_field(field, value);
            all_valid &= error.is_none();
            self.contact.errors[field_index(field)] = error;
        }

        if !all_valid {
            debug!("contact form submit rejected by validation");
            self.show_toast("Please fix the errors above", false);
            return;
        }

        let url = mailto_link(
            CONTACT_EMAIL,
            self.contact.subject.trim(),
            self.contact.name.trim(),
            self.contact.email.trim(),
            self.contact.message.trim(),
        );
        info!(len = url.len(), "opening mail client for contact form");
        ctx.open_url(egui::OpenUrl::same_tab(url));

        self.show_toast("Opening your email client...", true);
        self.contact.reset();
    }
}

fn field_index(field: FormField) -> usize {
    match field {
        FormField::Name => 0,
        FormField::Email => 1,
        FormField::Subject => 2,
        FormField::Message => 3,
    }
}
