//! Axis-aligned collision detection and landing classification
//!
//! The rocket collides against landing surfaces only; platforms never
//! collide with each other. A contact is either a safe landing (gentle,
//! from above) or a crash.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Axis-aligned bounding box, stored as center + half-extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        debug_assert!(half.x > 0.0 && half.y > 0.0);
        Self { center, half }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }
}

/// Per-axis penetration depths of an overlap (both positive when boxes touch)
#[derive(Debug, Clone, Copy)]
pub struct Overlap {
    pub x: f32,
    pub y: f32,
}

/// Overlap test between two boxes. Returns penetration depths on hit.
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> Option<Overlap> {
    let dx = (a.half.x + b.half.x) - (a.center.x - b.center.x).abs();
    let dy = (a.half.y + b.half.y) - (a.center.y - b.center.y).abs();

    if dx > 0.0 && dy > 0.0 {
        Some(Overlap { x: dx, y: dy })
    } else {
        None
    }
}

/// Outcome of a rocket/platform contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Gentle touchdown; `rest_y` is where the rocket center sits on the pad
    Landed { rest_y: f32 },
    Crashed,
}

/// Classify an overlapping contact between the rocket and a platform.
///
/// A landing is safe when the contact came from above (the shallow
/// penetration axis is vertical and the rocket center is above the pad)
/// and both speed components are within the tuned thresholds. Anything
/// else is a crash.
pub fn check_contact(
    rocket: &Aabb,
    vel: Vec2,
    pad: &Aabb,
    overlap: &Overlap,
    tuning: &Tuning,
) -> Contact {
    let from_above = overlap.y <= overlap.x && rocket.center.y < pad.center.y;
    let gentle = vel.y <= tuning.safe_descent_speed && vel.x.abs() <= tuning.safe_lateral_speed;

    if from_above && gentle {
        Contact::Landed {
            rest_y: pad.min().y - rocket.half.y,
        }
    } else {
        Contact::Crashed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad_at(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::splat(20.0))
    }

    #[test]
    fn test_overlap_miss() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::new(Vec2::new(100.0, 0.0), Vec2::splat(10.0));
        assert!(aabb_overlap(&a, &b).is_none());

        // Touching edges do not count as overlap
        let c = Aabb::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(aabb_overlap(&a, &c).is_none());
    }

    #[test]
    fn test_overlap_depths() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::new(Vec2::new(15.0, 12.0), Vec2::splat(10.0));
        let overlap = aabb_overlap(&a, &b).expect("boxes overlap");
        assert!((overlap.x - 5.0).abs() < 1e-6);
        assert!((overlap.y - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_gentle_touchdown_from_above() {
        let tuning = Tuning::default();
        let pad = pad_at(400.0, 560.0);
        // Rocket just sinking into the pad top, centered, falling slowly
        let rocket = Aabb::new(Vec2::new(400.0, 530.0), Vec2::splat(12.5));
        let vel = Vec2::new(5.0, 30.0);

        let overlap = aabb_overlap(&rocket, &pad).expect("contact");
        let contact = check_contact(&rocket, vel, &pad, &overlap, &tuning);
        match contact {
            Contact::Landed { rest_y } => {
                assert!((rest_y - (540.0 - 12.5)).abs() < 1e-6);
            }
            Contact::Crashed => panic!("gentle contact classified as crash"),
        }
    }

    #[test]
    fn test_fast_descent_crashes() {
        let tuning = Tuning::default();
        let pad = pad_at(400.0, 560.0);
        let rocket = Aabb::new(Vec2::new(400.0, 530.0), Vec2::splat(12.5));
        let vel = Vec2::new(0.0, tuning.safe_descent_speed + 1.0);

        let overlap = aabb_overlap(&rocket, &pad).expect("contact");
        let contact = check_contact(&rocket, vel, &pad, &overlap, &tuning);
        assert_eq!(contact, Contact::Crashed);
    }

    #[test]
    fn test_sideways_drift_crashes() {
        let tuning = Tuning::default();
        let pad = pad_at(400.0, 560.0);
        let rocket = Aabb::new(Vec2::new(400.0, 530.0), Vec2::splat(12.5));
        let vel = Vec2::new(tuning.safe_lateral_speed + 10.0, 10.0);

        let overlap = aabb_overlap(&rocket, &pad).expect("contact");
        let contact = check_contact(&rocket, vel, &pad, &overlap, &tuning);
        assert_eq!(contact, Contact::Crashed);
    }

    #[test]
    fn test_side_contact_crashes() {
        let tuning = Tuning::default();
        let pad = pad_at(400.0, 560.0);
        // Clipping the pad's left edge: shallow axis is horizontal
        let rocket = Aabb::new(Vec2::new(370.0, 562.0), Vec2::splat(12.5));
        let vel = Vec2::new(2.0, 2.0);

        let overlap = aabb_overlap(&rocket, &pad).expect("contact");
        let contact = check_contact(&rocket, vel, &pad, &overlap, &tuning);
        assert_eq!(contact, Contact::Crashed);
    }
}
