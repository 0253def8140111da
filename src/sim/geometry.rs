//! Line segment and play-field geometry
//!
//! Screen coordinates throughout: +x right, +y down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::cross;

/// A straight obstacle between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl LineSegment {
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    /// Vector from `p1` to `p2`
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.p2 - self.p1
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.delta().length_squared()
    }

    /// Zero-length segments never take part in collisions
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() == 0.0
    }

    /// Unit direction from `p1` to `p2`
    pub fn tangent(&self) -> Option<Vec2> {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return None;
        }
        Some(self.delta() / len_sq.sqrt())
    }

    /// Angle of the segment direction, `atan2(dy, dx)`
    ///
    /// Positive angles slope downward on screen.
    #[inline]
    pub fn slope_angle(&self) -> f32 {
        let d = self.delta();
        d.y.atan2(d.x)
    }

    /// Closest point on the segment to `p`, with its parameter `t` in `[0, 1]`
    ///
    /// Returns `None` for a degenerate segment.
    pub fn closest_point(&self, p: Vec2) -> Option<(Vec2, f32)> {
        let d = self.delta();
        let len_sq = d.length_squared();
        if len_sq == 0.0 {
            return None;
        }
        let t = ((p - self.p1).dot(d) / len_sq).clamp(0.0, 1.0);
        Some((self.p1 + d * t, t))
    }

    /// Which side of the segment's infinite line `p` lies on (sign only)
    ///
    /// Zero means `p` is on the line.
    #[inline]
    pub fn side_of(&self, p: Vec2) -> f32 {
        cross(self.delta(), p - self.p1)
    }

    /// True if the path from `from` to `to` touches or crosses this segment
    ///
    /// The path must start strictly on one side of the line and end on the
    /// line or past it.
    pub fn is_crossed_by(&self, from: Vec2, to: Vec2) -> bool {
        let side_from = self.side_of(from);
        let side_to = self.side_of(to);
        if side_from == 0.0 || (side_to != 0.0 && side_from.signum() == side_to.signum()) {
            return false;
        }
        let path = to - from;
        let a = cross(path, self.p1 - from);
        let b = cross(path, self.p2 - from);
        a * b <= 0.0
    }

    /// Unit normal pointing toward the side `p` lies on
    ///
    /// Returns `None` for a degenerate segment or when `p` is on the line.
    pub fn normal_toward(&self, p: Vec2) -> Option<Vec2> {
        let tangent = self.tangent()?;
        let side = self.side_of(p);
        if side == 0.0 {
            return None;
        }
        let perp = Vec2::new(-tangent.y, tangent.x);
        Some(if side > 0.0 { perp } else { -perp })
    }
}

/// Axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// The region a ball of `radius` can occupy without touching an edge
    pub fn interior(&self, radius: f32) -> Rect {
        Rect::new(
            self.left + radius,
            self.top + radius,
            self.right - radius,
            self.bottom - radius,
        )
    }

    /// Closed containment test
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.left, self.right), p.y.clamp(self.top, self.bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_point_interior() {
        let seg = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let (c, t) = seg.closest_point(Vec2::new(4.0, 3.0)).unwrap();
        assert_eq!(c, Vec2::new(4.0, 0.0));
        assert!((t - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_closest_point_clamps_to_endpoints() {
        let seg = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let (c, t) = seg.closest_point(Vec2::new(-5.0, 1.0)).unwrap();
        assert_eq!(c, seg.p1);
        assert_eq!(t, 0.0);

        let (c, t) = seg.closest_point(Vec2::new(25.0, -2.0)).unwrap();
        assert_eq!(c, seg.p2);
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_degenerate_segment() {
        let p = Vec2::new(3.0, 3.0);
        let seg = LineSegment::new(p, p);
        assert!(seg.is_degenerate());
        assert!(seg.tangent().is_none());
        assert!(seg.closest_point(Vec2::ZERO).is_none());
        assert!(seg.normal_toward(Vec2::ZERO).is_none());
    }

    #[test]
    fn test_slope_angle() {
        let flat = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(flat.slope_angle(), 0.0);

        let down = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!((down.slope_angle() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_is_crossed_by() {
        let seg = LineSegment::new(Vec2::new(100.0, 200.0), Vec2::new(500.0, 200.0));

        // Straight through the middle
        assert!(seg.is_crossed_by(Vec2::new(300.0, 190.0), Vec2::new(300.0, 203.0)));
        // Ending exactly on the line
        assert!(seg.is_crossed_by(Vec2::new(300.0, 190.0), Vec2::new(300.0, 200.0)));
        // Same side
        assert!(!seg.is_crossed_by(Vec2::new(300.0, 190.0), Vec2::new(300.0, 198.0)));
        // Crosses the infinite line beyond the endpoint
        assert!(!seg.is_crossed_by(Vec2::new(600.0, 190.0), Vec2::new(600.0, 210.0)));
        // Starting on the line is not a crossing
        assert!(!seg.is_crossed_by(Vec2::new(300.0, 200.0), Vec2::new(300.0, 210.0)));
    }

    #[test]
    fn test_normal_toward() {
        let seg = LineSegment::new(Vec2::new(100.0, 200.0), Vec2::new(500.0, 200.0));
        let up = seg.normal_toward(Vec2::new(300.0, 150.0)).unwrap();
        assert!((up - Vec2::new(0.0, -1.0)).length() < 1e-6);
        let down = seg.normal_toward(Vec2::new(300.0, 250.0)).unwrap();
        assert!((down - Vec2::new(0.0, 1.0)).length() < 1e-6);
        assert!(seg.normal_toward(Vec2::new(50.0, 200.0)).is_none());
    }

    #[test]
    fn test_rect_interior_and_contains() {
        let field = Rect::new(50.0, 40.0, 550.0, 360.0);
        let inner = field.interior(5.0);
        assert_eq!(inner, Rect::new(55.0, 45.0, 545.0, 355.0));
        assert!(inner.contains(Vec2::new(55.0, 355.0)));
        assert!(!inner.contains(Vec2::new(54.9, 100.0)));
        assert_eq!(inner.clamp(Vec2::new(0.0, 400.0)), Vec2::new(55.0, 355.0));
        assert_eq!(field.width(), 500.0);
        assert_eq!(field.height(), 320.0);
    }
}
