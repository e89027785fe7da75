//! Single-page portfolio app
//!
//! One explicit context object owns every component: the particle field
//! background, navigation state, reveal animations and the contact form.
//! Runs on both native and WASM through eframe; the frame loop drives the
//! field one bounded step per repaint.

mod about;
mod contact;
mod hero;
mod nav;
mod projects;
mod skills;

use eframe::egui;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use crate::anim::{visible_fraction, CountUp, Reveal};
use crate::content::{Section, SKILLS, STATS};
use crate::field::{self, ParticleField};
use crate::theme::{self, Theme};
use crate::time::now_seconds;

/// eframe storage key for the persisted theme choice.
const THEME_STORAGE_KEY: &str = "folio.theme";

/// Scroll-spy reading line: this many pixels below the content viewport top.
const SPY_OFFSET: f32 = 100.0;

/// Section visibility fraction that fires reveal animations.
const REVEAL_THRESHOLD: f32 = 0.5;

/// Scroll distance past which the nav bar switches to its opaque style.
const NAV_SCROLL_CUTOFF: f32 = 100.0;

/// How long submit feedback stays on screen, seconds.
const TOAST_DURATION: f64 = 3.0;

/// Transient feedback banner after a form submit.
pub(crate) struct Toast {
    pub text: &'static str,
    pub ok: bool,
    pub shown_at: f64,
}

/// Contact form input state. Values survive a failed submit.
#[derive(Default)]
pub(crate) struct ContactFormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Per-field error message, indexed like [`crate::form::FormField::ALL`].
    pub errors: [Option<&'static str>; 4],
}

impl ContactFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The app context: constructed once at startup, owns all components.
pub struct FolioApp {
    theme: Theme,
    /// Created on the first frame, when the real viewport size is known.
    particle_field: Option<ParticleField>,
    counters: Vec<CountUp>,
    skill_bars: Vec<Reveal>,
    pub(crate) contact: ContactFormState,
    pub(crate) toast: Option<Toast>,
    active_section: Section,
    pending_scroll: Option<Section>,
    /// Section rects recorded during this frame's layout (screen coords).
    section_rects: Vec<(Section, egui::Rect)>,
    /// Nav bar is past the transparent-at-top zone.
    nav_scrolled: bool,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = cc
            .storage
            .and_then(|s| eframe::get_value::<Theme>(s, THEME_STORAGE_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(theme::visuals(theme));

        Self {
            theme,
            particle_field: None,
            counters: STATS.iter().map(|&(_, target)| CountUp::new(target)).collect(),
            skill_bars: SKILLS.iter().map(|&(_, pct)| Reveal::new(pct)).collect(),
            contact: ContactFormState::default(),
            toast: None,
            active_section: Section::Home,
            pending_scroll: None,
            section_rects: Vec::new(),
            nav_scrolled: false,
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn palette(&self) -> &'static theme::Palette {
        self.theme.palette()
    }

    pub(crate) fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        self.theme = theme;
        ctx.set_visuals(theme::visuals(theme));
    }

    pub(crate) fn nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    pub(crate) fn active_section(&self) -> Section {
        self.active_section
    }

    /// Queue a smooth scroll to `section` for this frame's layout pass.
    pub(crate) fn scroll_to(&mut self, section: Section) {
        self.pending_scroll = Some(section);
    }

    pub(crate) fn show_toast(&mut self, text: &'static str, ok: bool) {
        self.toast = Some(Toast {
            text,
            ok,
            shown_at: now_seconds(),
        });
    }

    /// Step the background animation: lazily initialize against the content
    /// panel size, track resizes, then advance one frame.
    fn step_particle_field(&mut self, size: egui::Vec2) {
        let field = self.particle_field.get_or_insert_with(|| {
            let mut rng = SmallRng::from_entropy();
            info!(
                width = size.x,
                height = size.y,
                count = field::PARTICLE_COUNT,
                "particle field initialized"
            );
            ParticleField::new(size.x, size.y, &mut rng)
        });

        if field.size() != (size.x, size.y) {
            field.resize(size.x, size.y);
        }
        field.advance();
    }

    /// Wrap one section's content, record its rect for scroll-spy and reveal
    /// triggers, and honor a pending nav scroll.
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        section: Section,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let response = ui.scope(|ui| add_contents(self, ui)).response;
        let rect = response.rect;
        self.section_rects.push((section, rect));

        if self.pending_scroll == Some(section) {
            ui.scroll_to_rect(rect, Some(egui::Align::Min));
            self.pending_scroll = None;
        }
    }

    /// Fire reveal animations for sections at least half visible.
    fn trigger_reveals(&mut self, viewport: egui::Rect, now: f64) {
        for &(section, rect) in &self.section_rects {
            if visible_fraction(rect, viewport) < REVEAL_THRESHOLD {
                continue;
            }
            match section {
                Section::About => {
                    for c in &mut self.counters {
                        c.trigger(now);
                    }
                }
                Section::Skills => {
                    for r in &mut self.skill_bars {
                        r.trigger(now);
                    }
                }
                _ => {}
            }
        }
    }

    /// Transient submit feedback, top-right, auto-dismissed.
    fn render_toast(&mut self, ctx: &egui::Context, now: f64) {
        let Some(toast) = &self.toast else { return };
        if now - toast.shown_at > TOAST_DURATION {
            self.toast = None;
            return;
        }

        let fill = if toast.ok {
            self.palette().success
        } else {
            self.palette().error
        };
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 70.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(toast.text)
                                .color(egui::Color32::WHITE)
                                .size(13.0),
                        );
                    });
            });
    }
}

/// Section owning the scroll-spy reading line at `cursor_y`, i.e. the last
/// section whose vertical span contains it.
fn spy_active(sections: &[(Section, egui::Rect)], cursor_y: f32) -> Option<Section> {
    let mut active = None;
    for &(section, rect) in sections {
        if cursor_y >= rect.top() && cursor_y < rect.bottom() {
            active = Some(section);
        }
    }
    active
}

impl eframe::App for FolioApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, THEME_STORAGE_KEY, &self.theme);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous repaint keeps the background animation running; the loop
        // is still one bounded step per invocation.
        ctx.request_repaint();

        let now = now_seconds();
        self.render_nav(ctx);

        let palette = self.palette();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.bg_primary))
            .show(ctx, |ui| {
                // The field lives in panel-local coordinates so its surface
                // matches the clip region below the nav bar exactly.
                let panel_rect = ui.max_rect();
                self.step_particle_field(panel_rect.size());

                // Background layer first: widgets added afterwards paint over it.
                if let Some(field) = &self.particle_field {
                    field::paint(ui.painter(), field, panel_rect.min.to_vec2());
                }

                let viewport = ui.clip_rect();
                self.section_rects.clear();

                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        self.section(ui, Section::Home, |app, ui| app.render_hero(ui));
                        self.section(ui, Section::About, |app, ui| app.render_about(ui, now));
                        self.section(ui, Section::Skills, |app, ui| app.render_skills(ui, now));
                        self.section(ui, Section::Projects, |app, ui| app.render_projects(ui));
                        self.section(ui, Section::Contact, |app, ui| app.render_contact(ui));
                        ui.add_space(60.0);
                    });

                self.nav_scrolled = output.state.offset.y > NAV_SCROLL_CUTOFF;

                if let Some(section) = spy_active(&self.section_rects, viewport.top() + SPY_OFFSET)
                {
                    self.active_section = section;
                }
                self.trigger_reveals(viewport, now);
            });

        self.render_toast(ctx, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn sect(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(800.0, bottom))
    }

    fn test_app() -> FolioApp {
        FolioApp {
            theme: Theme::default(),
            particle_field: None,
            counters: Vec::new(),
            skill_bars: Vec::new(),
            contact: ContactFormState::default(),
            toast: None,
            active_section: Section::Home,
            pending_scroll: None,
            section_rects: Vec::new(),
            nav_scrolled: false,
        }
    }

    #[test]
    fn test_particle_field_tracks_panel_size() {
        let mut app = test_app();

        // First step creates the field at the content panel's size, not the
        // full window's.
        app.step_particle_field(egui::vec2(800.0, 560.0));
        let field = app.particle_field.as_ref().unwrap();
        assert_eq!(field.size(), (800.0, 560.0));
        assert_eq!(field.particles().len(), field::PARTICLE_COUNT);

        // Later steps follow panel resizes.
        app.step_particle_field(egui::vec2(400.0, 300.0));
        assert_eq!(app.particle_field.as_ref().unwrap().size(), (400.0, 300.0));
    }

    #[test]
    fn test_spy_active_picks_containing_section() {
        let sections = vec![
            (Section::Home, sect(0.0, 600.0)),
            (Section::About, sect(600.0, 1200.0)),
            (Section::Skills, sect(1200.0, 1800.0)),
        ];

        assert_eq!(spy_active(&sections, 100.0), Some(Section::Home));
        assert_eq!(spy_active(&sections, 600.0), Some(Section::About));
        assert_eq!(spy_active(&sections, 1799.0), Some(Section::Skills));
        assert_eq!(spy_active(&sections, 5000.0), None);
    }

    #[test]
    fn test_spy_active_prefers_later_section_on_overlap() {
        // Overlapping spans: the later section wins.
        let sections = vec![
            (Section::Home, sect(0.0, 700.0)),
            (Section::About, sect(600.0, 1200.0)),
        ];
        assert_eq!(spy_active(&sections, 650.0), Some(Section::About));
    }
}
