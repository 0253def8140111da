//! Seeded demo courses
//!
//! Builds a zig-zag of ramps for the headless runner so a dropped ball has
//! something to roll down. Same seed, same course.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{LineSegment, Rect};

/// Horizontal margin kept free between a ramp's low end and the far wall
const WALL_GAP: f32 = 20.0;
/// Shortest ramp, as a fraction of the field width
const MIN_SPAN: f32 = 0.45;
const MAX_SPAN: f32 = 0.75;
/// Drop across a ramp, in px
const MIN_DROP: f32 = 15.0;
const MAX_DROP: f32 = 45.0;

/// Generate `count` ramps stacked down the field, alternating direction
///
/// Each ramp is anchored at one wall and descends toward the other, leaving a
/// gap at its low end for the ball to fall through.
pub fn generate_course(seed: u64, field: &Rect, count: usize) -> Vec<LineSegment> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut course = Vec::with_capacity(count);
    if count == 0 {
        return course;
    }

    let band = field.height() / (count as f32 + 1.0);

    for i in 0..count {
        let top = field.top + band * (i as f32 + 0.5);
        let span = field.width() * rng.random_range(MIN_SPAN..MAX_SPAN);
        let drop = rng.random_range(MIN_DROP..MAX_DROP).min(band * 0.8);

        let (high_x, low_x) = if i % 2 == 0 {
            let high = field.left;
            (high, (high + span).min(field.right - WALL_GAP))
        } else {
            let high = field.right;
            (high, (high - span).max(field.left + WALL_GAP))
        };

        course.push(LineSegment::new(
            Vec2::new(high_x, top),
            Vec2::new(low_x, top + drop),
        ));
    }

    log::debug!("Generated {} ramps from seed {}", course.len(), seed);
    course
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Rect {
        Rect::new(50.0, 40.0, 550.0, 360.0)
    }

    #[test]
    fn test_same_seed_same_course() {
        assert_eq!(generate_course(7, &field(), 4), generate_course(7, &field(), 4));
        assert_ne!(generate_course(7, &field(), 4), generate_course(8, &field(), 4));
    }

    #[test]
    fn test_ramps_fit_and_descend() {
        let course = generate_course(42, &field(), 5);
        assert_eq!(course.len(), 5);
        for (i, ramp) in course.iter().enumerate() {
            assert!(!ramp.is_degenerate());
            assert!(field().contains(ramp.p1) && field().contains(ramp.p2));
            assert!(ramp.p2.y > ramp.p1.y, "ramp {} should slope down", i);
        }
        // Alternating directions
        assert!(course[0].delta().x > 0.0);
        assert!(course[1].delta().x < 0.0);
    }

    #[test]
    fn test_empty_course() {
        assert!(generate_course(1, &field(), 0).is_empty());
    }
}
