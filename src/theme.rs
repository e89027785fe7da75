//! Light and dark palettes plus the egui Visuals built from them
//!
//! The visitor's choice is persisted across sessions via eframe storage.

use eframe::egui;
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Page theme, toggled from the nav bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Nav-bar toggle glyph: shows what clicking switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "🌙",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Colors one theme needs; everything else derives from these.
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_elevated: Color32,
    pub bg_navbar: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub border: Color32,
    pub success: Color32,
    pub error: Color32,
}

pub const DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(10, 12, 20),
    bg_elevated: Color32::from_rgb(22, 25, 38),
    bg_navbar: Color32::from_rgb(14, 17, 27),
    text_primary: Color32::from_rgb(240, 242, 248),
    text_secondary: Color32::from_rgb(160, 168, 184),
    text_muted: Color32::from_rgb(96, 104, 120),
    accent: Color32::from_rgb(99, 102, 241),
    border: Color32::from_rgb(44, 48, 64),
    success: Color32::from_rgb(16, 185, 129),
    error: Color32::from_rgb(239, 68, 68),
};

pub const LIGHT: Palette = Palette {
    bg_primary: Color32::from_rgb(248, 249, 252),
    bg_elevated: Color32::from_rgb(255, 255, 255),
    bg_navbar: Color32::from_rgb(255, 255, 255),
    text_primary: Color32::from_rgb(24, 28, 40),
    text_secondary: Color32::from_rgb(90, 98, 114),
    text_muted: Color32::from_rgb(150, 156, 170),
    accent: Color32::from_rgb(79, 70, 229),
    border: Color32::from_rgb(222, 226, 235),
    success: Color32::from_rgb(5, 150, 105),
    error: Color32::from_rgb(220, 38, 38),
};

/// Build egui Visuals for a theme.
pub fn visuals(theme: Theme) -> egui::Visuals {
    let p = theme.palette();
    let mut visuals = match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    };

    visuals.panel_fill = p.bg_primary;
    visuals.window_fill = p.bg_elevated;
    visuals.extreme_bg_color = p.bg_elevated;
    visuals.faint_bg_color = p.bg_elevated;

    visuals.override_text_color = Some(p.text_primary);
    visuals.hyperlink_color = p.accent;

    visuals.widgets.noninteractive.bg_fill = p.bg_primary;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, p.text_secondary);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, p.border);

    visuals.widgets.inactive.bg_fill = p.bg_elevated;
    visuals.widgets.inactive.weak_bg_fill = p.bg_elevated;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, p.text_secondary);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, p.border);

    visuals.widgets.hovered.bg_fill = p.bg_elevated;
    visuals.widgets.hovered.weak_bg_fill = p.bg_elevated;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, p.text_primary);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, p.accent);

    visuals.widgets.active.bg_fill = p.bg_elevated;
    visuals.widgets.active.weak_bg_fill = p.bg_elevated;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, p.text_primary);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, p.accent);

    visuals.selection.bg_fill = p.accent.gamma_multiply(0.35);
    visuals.selection.stroke = egui::Stroke::new(1.0, p.accent);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
