//! Ambient particle field data model and stepping logic
//!
//! Pure state: no painter, no clock, no ambient randomness. The app's frame
//! loop calls [`ParticleField::advance`] once per frame; tests call it a
//! bounded number of times with a seeded generator.

use egui::{Pos2, Vec2};
use rand::Rng;

/// Fixed particle population for the lifetime of the field.
pub const PARTICLE_COUNT: usize = 50;

/// Two particles closer than this (surface pixels) get a connection line.
pub const LINK_DISTANCE: f32 = 100.0;

/// Connection opacity at distance zero; fades linearly to 0 at LINK_DISTANCE.
pub const LINK_MAX_OPACITY: f32 = 0.1;

/// Constant stroke width for connection lines.
pub const LINK_WIDTH: f32 = 1.0;

/// A single animated point. Velocity, radius and opacity are drawn once at
/// creation; only the position mutates afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Pos2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// A connection segment between two particles within [`LINK_DISTANCE`].
#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub a: Pos2,
    pub b: Pos2,
    pub opacity: f32,
}

/// Full-viewport particle field: owns the particle collection and the surface
/// dimensions it wraps against.
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed a field covering `width` x `height` with [`PARTICLE_COUNT`]
    /// particles, every attribute an independent uniform draw from `rng`.
    pub fn new<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                pos: Pos2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::new(rng.gen_range(-0.25..0.25), rng.gen_range(-0.25..0.25)),
                radius: rng.gen_range(1.0..4.0),
                opacity: rng.gen_range(0.2..0.7),
            })
            .collect();

        Self {
            width,
            height,
            particles,
        }
    }

    /// Update the surface dimensions after a viewport resize.
    ///
    /// Existing particles are left untouched; ones that end up outside the new
    /// bounds drift back in via their own wraparound on later steps. Accepted
    /// cosmetic slack.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by one frame and apply edge wraparound.
    ///
    /// Each axis wraps independently: below 0 relocates to the far edge, past
    /// the surface dimension relocates to 0. Exact boundary hits are left
    /// alone, so particles never get stuck.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;

            if p.pos.x < 0.0 {
                p.pos.x = self.width;
            } else if p.pos.x > self.width {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = self.height;
            } else if p.pos.y > self.height {
                p.pos.y = 0.0;
            }
        }
    }

    /// Proximity connections for the current frame.
    ///
    /// All-pairs scan: quadratic in particle count, fine at 50 particles
    /// (1225 pair checks per frame).
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                if let Some(opacity) = link_opacity(a.distance(b)) {
                    links.push(Link { a, b, opacity });
                }
            }
        }
        links
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Opacity of a connection at `distance`, or None at or beyond the threshold
/// (the boundary is exclusive).
pub fn link_opacity(distance: f32) -> Option<f32> {
    if distance < LINK_DISTANCE {
        Some(LINK_MAX_OPACITY * (1.0 - distance / LINK_DISTANCE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_field(width: f32, height: f32) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleField::new(width, height, &mut rng)
    }

    #[test]
    fn test_initial_population() {
        let field = test_field(800.0, 600.0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);

        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.vel.x >= -0.25 && p.vel.x < 0.25);
            assert!(p.vel.y >= -0.25 && p.vel.y < 0.25);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.opacity >= 0.2 && p.opacity < 0.7);
        }
    }

    #[test]
    fn test_count_invariant_under_advance_and_resize() {
        let mut field = test_field(800.0, 600.0);
        for _ in 0..500 {
            field.advance();
        }
        assert_eq!(field.particles().len(), PARTICLE_COUNT);

        field.resize(400.0, 300.0);
        for _ in 0..500 {
            field.advance();
        }
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_wraparound_invariant_holds_continuously() {
        let mut field = test_field(800.0, 600.0);
        for _ in 0..10_000 {
            field.advance();
            // A below-zero wrap lands exactly on the far edge, so the bound
            // is inclusive on both axes.
            for p in field.particles() {
                assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0, "x = {}", p.pos.x);
                assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0, "y = {}", p.pos.y);
            }
        }
    }

    #[test]
    fn test_wrap_past_right_edge() {
        let mut field = test_field(800.0, 600.0);
        field.particles[0] = Particle {
            pos: Pos2::new(799.9, 300.0),
            vel: Vec2::new(0.5, 0.0),
            radius: 2.0,
            opacity: 0.5,
        };
        field.advance();
        assert_eq!(field.particles()[0].pos.x, 0.0);
        assert_eq!(field.particles()[0].pos.y, 300.0);
    }

    #[test]
    fn test_wrap_past_left_edge() {
        let mut field = test_field(800.0, 600.0);
        field.particles[0] = Particle {
            pos: Pos2::new(0.1, 300.0),
            vel: Vec2::new(-0.5, 0.0),
            radius: 2.0,
            opacity: 0.5,
        };
        field.advance();
        assert_eq!(field.particles()[0].pos.x, 800.0);
    }

    #[test]
    fn test_resize_leaves_particles_alone() {
        let mut field = test_field(800.0, 600.0);
        let before: Vec<Particle> = field.particles().to_vec();

        field.resize(400.0, 300.0);

        assert_eq!(field.size(), (400.0, 300.0));
        for (a, b) in before.iter().zip(field.particles()) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
    }

    #[test]
    fn test_link_opacity_boundaries() {
        assert_eq!(link_opacity(0.0), Some(0.1));
        assert_eq!(link_opacity(50.0), Some(0.05));
        assert!(link_opacity(100.0).is_none());
        assert!(link_opacity(250.0).is_none());
    }

    #[test]
    fn test_link_opacity_monotonically_fades() {
        let mut prev = f32::MAX;
        for step in 0..100 {
            let d = step as f32;
            let o = link_opacity(d).expect("inside threshold");
            assert!(o <= prev, "opacity increased at d = {}", d);
            assert!(o > 0.0);
            prev = o;
        }
    }

    #[test]
    fn test_links_for_known_pair() {
        let mut field = test_field(800.0, 600.0);
        // Park everything far away, then place one pair 50px apart.
        for (i, p) in field.particles.iter_mut().enumerate() {
            p.pos = Pos2::new(10_000.0 + 300.0 * i as f32, 10_000.0);
            p.vel = Vec2::ZERO;
        }
        field.particles[0].pos = Pos2::new(0.0, 0.0);
        field.particles[1].pos = Pos2::new(50.0, 0.0);

        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.05).abs() < 1e-6);
        assert_eq!(links[0].a, Pos2::new(0.0, 0.0));
        assert_eq!(links[0].b, Pos2::new(50.0, 0.0));
    }
}
