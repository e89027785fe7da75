//! CPU painter for the particle field background layer
//!
//! Repaints the whole surface every frame: filled circles for particles,
//! then straight segments for proximity connections. Neutral white fill,
//! per-particle / per-link alpha.

use eframe::egui;

use super::particles::{ParticleField, LINK_WIDTH};

fn white_with_opacity(opacity: f32) -> egui::Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha)
}

/// Paint the field onto `painter`, translated by `offset` (the hosting
/// panel's origin; the field itself is in panel-local coordinates). The
/// caller has already cleared the frame (egui repaints panels from scratch),
/// so this only draws.
pub fn paint(painter: &egui::Painter, field: &ParticleField, offset: egui::Vec2) {
    for p in field.particles() {
        painter.circle_filled(p.pos + offset, p.radius, white_with_opacity(p.opacity));
    }

    for link in field.links() {
        painter.line_segment(
            [link.a + offset, link.b + offset],
            egui::Stroke::new(LINK_WIDTH, white_with_opacity(link.opacity)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_with_opacity_range() {
        // Color32 stores channels premultiplied, so only alpha is asserted.
        assert_eq!(white_with_opacity(0.0).a(), 0);
        assert_eq!(white_with_opacity(1.0).a(), 255);
        assert_eq!(white_with_opacity(0.5).a(), 127);
        // Out-of-range inputs are clamped, not wrapped
        assert_eq!(white_with_opacity(2.0).a(), 255);
        assert_eq!(white_with_opacity(-1.0).a(), 0);
    }
}
