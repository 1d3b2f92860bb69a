// File: crates/bbox-core/src/bracket.rs
// Summary: Bracket box geometry (radius/arm clamping, arc centers, arm segments) and the renderer
// that turns it into arc and line calls on a Surface.

use crate::corners::CornerSet;
use crate::error::BracketError;
use crate::geometry::{clamp, Bounds, Point, Segment};
use crate::surface::{Stroke, Surface};
use crate::types::Style;

/// Fully resolved drawing plan for one box. Recomputed on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracketGeometry {
    pub radius: i32,
    pub arm: i32,
    pub corners: CornerSet,
    /// Top (left, right), bottom (left, right), left (top, bottom), right (top, bottom).
    pub arms: [Segment; 8],
}

impl BracketGeometry {
    pub fn new(bounds: &Bounds, style: &Style) -> Self {
        let radius = clamp_radius(bounds, style.border_radius);
        let arm = clamp_arm(bounds, radius, style.arm_length);
        let corners = CornerSet::new(bounds, radius);

        let (x1, y1) = (bounds.left(), bounds.top());
        let (x2, y2) = (bounds.right(), bounds.bottom());
        let (r, a) = (radius, arm);
        let seg = |fx, fy, tx, ty| Segment::new(Point::new(fx, fy), Point::new(tx, ty));

        let arms = [
            seg(x1 + r, y1, x1 + r + a, y1),
            seg(x2 - r, y1, x2 - r - a, y1),
            seg(x1 + r, y2, x1 + r + a, y2),
            seg(x2 - r, y2, x2 - r - a, y2),
            seg(x1, y1 + r, x1, y1 + r + a),
            seg(x1, y2 - r, x1, y2 - r - a),
            seg(x2, y1 + r, x2, y1 + r + a),
            seg(x2, y2 - r, x2, y2 - r - a),
        ];

        Self { radius, arm, corners, arms }
    }

    /// Issue the four arcs, then the eight arms.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, stroke: &Stroke) {
        for (corner, center) in self.corners.iter() {
            log::trace!("arc {} at {} r={}", corner.name(), center, self.radius);
            surface.draw_arc(
                center,
                self.radius,
                self.radius,
                corner.start_angle_deg(),
                corner.sweep_angle_deg(),
                stroke,
            );
        }
        for arm in &self.arms {
            log::trace!("arm {} -> {}", arm.from, arm.to);
            surface.draw_line(arm.from, arm.to, stroke);
        }
    }
}

/// r' = min(r, floor(W/2), floor(H/2)).
pub fn clamp_radius(bounds: &Bounds, radius: u32) -> i32 {
    let limit = bounds.half_width().min(bounds.half_height());
    // limit <= i32::MAX because width fits in u32.
    (radius as i64).min(limit) as i32
}

/// arm' = max(0, min(arm, floor(W/2) - r', floor(H/2) - r')).
pub fn clamp_arm(bounds: &Bounds, radius: i32, arm: u32) -> i32 {
    let room_x = bounds.half_width() - radius as i64;
    let room_y = bounds.half_height() - radius as i64;
    let limit = room_x.min(room_y).max(0);
    clamp(arm as i64, 0, limit) as i32
}

/// Render a bracket box onto `surface`. Inputs are validated before any draw call,
/// so on error the surface is untouched.
pub fn render<S: Surface + ?Sized>(surface: &mut S, bounds: &Bounds, style: &Style) -> Result<BracketGeometry, BracketError> {
    style.validate()?;
    let geometry = BracketGeometry::new(bounds, style);
    log::debug!(
        "bracket box {}-{}: radius {} -> {}, arm {} -> {}",
        bounds.top_left(),
        bounds.bottom_right(),
        style.border_radius,
        geometry.radius,
        style.arm_length,
        geometry.arm
    );
    let stroke = Stroke::new(style.color, style.thickness, true);
    geometry.draw(surface, &stroke);
    Ok(geometry)
}

/// Corner-point entry: validates the raw corners, then renders.
pub fn draw_rounded_bounding_box<S: Surface + ?Sized>(
    surface: &mut S,
    top_left: impl Into<Point>,
    bottom_right: impl Into<Point>,
    style: &Style,
) -> Result<BracketGeometry, BracketError> {
    let bounds = Bounds::new(top_left, bottom_right)?;
    render(surface, &bounds, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(l: i32, t: i32, r: i32, b: i32) -> Bounds {
        Bounds::from_ltrb(l, t, r, b).unwrap()
    }

    #[test]
    fn radius_limited_by_short_side() {
        let b = bounds(0, 0, 300, 200);
        assert_eq!(clamp_radius(&b, 20), 20);
        assert_eq!(clamp_radius(&b, 150), 100);
        assert_eq!(clamp_radius(&b, u32::MAX), 100);
    }

    #[test]
    fn arm_limited_by_remaining_run() {
        let b = bounds(50, 50, 350, 250);
        assert_eq!(clamp_arm(&b, 10, 250), 90);
        assert_eq!(clamp_arm(&b, 100, 250), 0);
        assert_eq!(clamp_arm(&b, 20, 0), 0);
    }

    #[test]
    fn odd_sizes_floor_half_extents() {
        let b = bounds(0, 0, 9, 5);
        assert_eq!(clamp_radius(&b, 10), 2);
        assert_eq!(clamp_arm(&b, 2, 10), 0);
        assert_eq!(clamp_arm(&b, 1, 10), 1);
    }
}
