//! Collision detection and response against line obstacles
//!
//! Detection is a point-to-segment distance test. Response splits the
//! velocity into normal and tangential parts relative to the hit segment:
//! the normal part bounces with restitution, the tangential part decays by
//! friction, and gravity along the slope pulls the ball downhill.

use glam::Vec2;

use super::geometry::LineSegment;
use super::state::MotionState;
use crate::consts::MAX_COLLISION_PASSES;
use crate::settings::SimulationConfig;

/// Result of a ball-vs-segment check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the ball overlaps the segment
    pub hit: bool,
    /// Closest point on the segment to the ball center
    pub closest: Vec2,
    /// Corrected ball center: `closest` pushed out along `normal` by the radius
    pub contact: Vec2,
    /// Unit surface normal pointing toward the ball (zero if the center lies on the segment)
    pub normal: Vec2,
    /// Segment parameter of `closest`, in `[0, 1]`
    pub t: f32,
    /// Overlap depth
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            closest: Vec2::ZERO,
            contact: Vec2::ZERO,
            normal: Vec2::ZERO,
            t: 0.0,
            penetration: 0.0,
        }
    }
}

/// Check whether a ball of `ball_radius` centered at `ball_pos` touches `segment`
///
/// The projection is clamped to the segment, so hits near the endpoints push
/// the ball radially away from the endpoint. Degenerate segments never hit.
pub fn ball_segment_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    segment: &LineSegment,
) -> CollisionResult {
    let Some((closest, t)) = segment.closest_point(ball_pos) else {
        return CollisionResult::miss();
    };

    let offset = ball_pos - closest;
    let dist_sq = offset.length_squared();
    if dist_sq > ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > 0.0 { offset / dist } else { Vec2::ZERO };

    CollisionResult {
        hit: true,
        closest,
        contact: closest + normal * ball_radius,
        normal,
        t,
        penetration: ball_radius - dist,
    }
}

/// Re-aim a hit at the side the ball arrived from
///
/// A fast ball can end a frame with its center past the segment, where the
/// plain distance normal would push it out the far side. If the path from
/// `from` crossed the segment, the normal is flipped back toward `from`.
fn orient_toward_origin(
    mut result: CollisionResult,
    segment: &LineSegment,
    from: Vec2,
    to: Vec2,
    ball_radius: f32,
) -> CollisionResult {
    if !segment.is_crossed_by(from, to) {
        return result;
    }
    if let Some(normal) = segment.normal_toward(from) {
        result.normal = normal;
        result.contact = result.closest + normal * ball_radius;
    }
    result
}

/// Resolve ball overlap against every obstacle
///
/// Runs at most [`MAX_COLLISION_PASSES`] passes. Each pass picks the hit
/// whose corrected position is closest to the current position (the first
/// such segment wins ties), snaps the ball there and redirects its
/// velocity. A pass without any hit ends resolution early.
///
/// `from` is the ball position at the start of the frame.
pub fn resolve_line_collisions(
    mut motion: MotionState,
    from: Vec2,
    obstacles: &[LineSegment],
    ball_radius: f32,
    config: &SimulationConfig,
) -> MotionState {
    for _ in 0..MAX_COLLISION_PASSES {
        let mut closest_hit: Option<(CollisionResult, &LineSegment)> = None;
        let mut min_dist = f32::INFINITY;

        for segment in obstacles {
            let result = ball_segment_collision(motion.pos, ball_radius, segment);
            if !result.hit {
                continue;
            }
            let result = orient_toward_origin(result, segment, from, motion.pos, ball_radius);
            let dist = motion.pos.distance(result.contact);
            if dist < min_dist {
                min_dist = dist;
                closest_hit = Some((result, segment));
            }
        }

        let Some((hit, segment)) = closest_hit else {
            break;
        };

        motion.collided = true;
        motion.pos = hit.contact;
        motion.vel = contact_response(motion.vel, hit.normal, segment, config);
    }

    motion
}

/// Velocity after touching `segment` with surface normal `normal`
///
/// Only a ball moving into the surface is redirected; a ball already
/// separating (for instance after an earlier pass this frame) keeps its
/// velocity.
pub fn contact_response(
    vel: Vec2,
    normal: Vec2,
    segment: &LineSegment,
    config: &SimulationConfig,
) -> Vec2 {
    let normal_speed = vel.dot(normal);
    if normal_speed >= 0.0 {
        return vel;
    }
    let Some(tangent) = segment.tangent() else {
        return vel;
    };
    let tangent_speed = vel.dot(tangent);

    let redirected =
        tangent * tangent_speed * config.friction - normal * normal_speed * config.restitution;

    // Gravity component along the slope
    let slope_pull = config.effective_gravity() * segment.slope_angle().sin();
    redirected + tangent * slope_pull
}
