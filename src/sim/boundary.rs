//! Play-field walls
//!
//! The field is a fixed rectangle. Walls always win: this runs after line
//! resolution so the final position is inside the field whatever a line
//! correction did.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::MotionState;

/// Which walls the ball was clamped against this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallContact {
    pub floor: bool,
    pub ceiling: bool,
    pub right: bool,
    pub left: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.floor || self.ceiling || self.right || self.left
    }
}

/// Clamp the ball into the field interior, bouncing off each wall it crossed
///
/// Axes are handled independently, so a corner clamps both.
pub fn resolve_boundary(
    mut motion: MotionState,
    field: &Rect,
    ball_radius: f32,
    restitution: f32,
) -> (MotionState, WallContact) {
    let inner = field.interior(ball_radius);
    let mut contact = WallContact::default();

    if motion.pos.y > inner.bottom {
        motion.pos.y = inner.bottom;
        motion.vel.y *= -restitution;
        contact.floor = true;
    }
    if motion.pos.y < inner.top {
        motion.pos.y = inner.top;
        motion.vel.y *= -restitution;
        contact.ceiling = true;
    }
    if motion.pos.x > inner.right {
        motion.pos.x = inner.right;
        motion.vel.x *= -restitution;
        contact.right = true;
    }
    if motion.pos.x < inner.left {
        motion.pos.x = inner.left;
        motion.vel.x *= -restitution;
        contact.left = true;
    }

    (motion, contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_RADIUS, RESTITUTION};
    use glam::Vec2;
    use proptest::prelude::*;

    fn field() -> Rect {
        Rect::new(50.0, 40.0, 550.0, 360.0)
    }

    #[test]
    fn test_floor_bounce() {
        let motion = MotionState::new(Vec2::new(300.0, 358.0), Vec2::new(1.0, 4.0));
        let (out, contact) = resolve_boundary(motion, &field(), BALL_RADIUS, RESTITUTION);
        assert_eq!(out.pos, Vec2::new(300.0, 355.0));
        assert!((out.vel.y - (-2.8)).abs() < 1e-6);
        assert_eq!(out.vel.x, 1.0);
        assert!(contact.floor);
        assert!(!contact.left && !contact.right && !contact.ceiling);
    }

    #[test]
    fn test_corner_clamps_both_axes() {
        let motion = MotionState::new(Vec2::new(20.0, 10.0), Vec2::new(-3.0, -6.0));
        let (out, contact) = resolve_boundary(motion, &field(), BALL_RADIUS, RESTITUTION);
        assert_eq!(out.pos, Vec2::new(55.0, 45.0));
        assert!(out.vel.x > 0.0 && out.vel.y > 0.0);
        assert!(contact.left && contact.ceiling);
    }

    #[test]
    fn test_inside_is_untouched() {
        let motion = MotionState::new(Vec2::new(300.0, 200.0), Vec2::new(3.0, -6.0));
        let (out, contact) = resolve_boundary(motion, &field(), BALL_RADIUS, RESTITUTION);
        assert_eq!(out, motion);
        assert!(!contact.any());
    }

    proptest! {
        #[test]
        fn prop_result_inside_interior(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let motion = MotionState::new(Vec2::new(x, y), Vec2::new(vx, vy));
            let (out, _) = resolve_boundary(motion, &field(), BALL_RADIUS, RESTITUTION);
            prop_assert!(field().interior(BALL_RADIUS).contains(out.pos));
            prop_assert!(out.vel.length() <= motion.vel.length() + 1e-4);
        }
    }
}
