//! Scroll-triggered reveal animations
//!
//! - CountUp: stat counters running from 0 to a target once their section
//!   scrolls into view
//! - Reveal: skill-bar fill growing to its percentage after a short delay
//!
//! Both are pure against an explicit clock argument so tests never need a
//! live frame loop. Triggering is once-only.

use eframe::egui;

/// Counter animation duration in seconds.
const COUNT_UP_DURATION: f64 = 2.0;

/// Delay before a skill bar starts filling, seconds.
const REVEAL_DELAY: f64 = 0.2;

/// Skill bar fill duration in seconds.
const REVEAL_DURATION: f64 = 1.0;

/// A stat counter that animates linearly from 0 to `target` once triggered.
pub struct CountUp {
    target: u32,
    started: Option<f64>,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            started: None,
        }
    }

    /// Start the animation at `now`. Later calls are ignored.
    pub fn trigger(&mut self, now: f64) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn triggered(&self) -> bool {
        self.started.is_some()
    }

    /// Displayed value at `now`: 0 before triggering, then a linear ramp over
    /// two seconds, floored to whole units.
    pub fn value(&self, now: f64) -> u32 {
        match self.started {
            None => 0,
            Some(start) => {
                let t = ((now - start) / COUNT_UP_DURATION).clamp(0.0, 1.0);
                (self.target as f64 * t).floor() as u32
            }
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }
}

/// A skill bar that fills to `percent` of its track once triggered.
pub struct Reveal {
    percent: f32,
    started: Option<f64>,
}

impl Reveal {
    pub fn new(percent: f32) -> Self {
        Self {
            percent,
            started: None,
        }
    }

    /// Start the animation at `now`. Later calls are ignored.
    pub fn trigger(&mut self, now: f64) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn triggered(&self) -> bool {
        self.started.is_some()
    }

    /// Fill percentage at `now`: 0 before the delay elapses, then an ease-out
    /// ramp up to the configured percent.
    pub fn value(&self, now: f64) -> f32 {
        match self.started {
            None => 0.0,
            Some(start) => {
                let t = ((now - start - REVEAL_DELAY) / REVEAL_DURATION).clamp(0.0, 1.0) as f32;
                let eased = 1.0 - (1.0 - t) * (1.0 - t);
                self.percent * eased
            }
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }
}

/// Fraction of `rect` currently inside `viewport`, in [0, 1].
pub fn visible_fraction(rect: egui::Rect, viewport: egui::Rect) -> f32 {
    let area = rect.area();
    if area <= 0.0 {
        return 0.0;
    }
    let overlap = rect.intersect(viewport);
    if overlap.is_negative() {
        return 0.0;
    }
    overlap.area() / area
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, Rect};

    #[test]
    fn test_count_up_ramp() {
        let mut c = CountUp::new(100);
        assert_eq!(c.value(5.0), 0);

        c.trigger(10.0);
        assert_eq!(c.value(10.0), 0);
        assert_eq!(c.value(11.0), 50);
        assert_eq!(c.value(12.0), 100);
        // Holds at the target afterwards
        assert_eq!(c.value(60.0), 100);
    }

    #[test]
    fn test_count_up_triggers_once() {
        let mut c = CountUp::new(40);
        c.trigger(0.0);
        c.trigger(100.0); // ignored; animation keeps its original start
        assert_eq!(c.value(2.0), 40);
    }

    #[test]
    fn test_reveal_delay_and_completion() {
        let mut r = Reveal::new(90.0);
        assert_eq!(r.value(0.0), 0.0);

        r.trigger(0.0);
        // Still inside the 200ms delay
        assert_eq!(r.value(0.1), 0.0);
        // Finished after delay + duration
        assert_eq!(r.value(1.2), 90.0);
        assert_eq!(r.value(10.0), 90.0);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut r = Reveal::new(75.0);
        r.trigger(0.0);
        let mut prev = -1.0;
        for i in 0..=120 {
            let v = r.value(i as f64 * 0.01);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_visible_fraction() {
        let viewport = Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0));

        let inside = Rect::from_min_max(pos2(10.0, 10.0), pos2(20.0, 20.0));
        assert_eq!(visible_fraction(inside, viewport), 1.0);

        let half = Rect::from_min_max(pos2(0.0, 50.0), pos2(100.0, 150.0));
        assert!((visible_fraction(half, viewport) - 0.5).abs() < 1e-6);

        let outside = Rect::from_min_max(pos2(0.0, 200.0), pos2(100.0, 300.0));
        assert_eq!(visible_fraction(outside, viewport), 0.0);
    }
}
