// File: crates/bbox-core/src/corners.rs
// Summary: Corner tags, their arc sweep angles, and the per-render set of arc centers.

use crate::geometry::{Bounds, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Clockwise from top-left; this is also the draw order.
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomRight, Corner::BottomLeft];

    /// Start angle of the corner's quarter arc, y-down convention.
    pub const fn start_angle_deg(self) -> f32 {
        match self {
            Corner::TopLeft => 180.0,
            Corner::TopRight => 270.0,
            Corner::BottomRight => 0.0,
            Corner::BottomLeft => 90.0,
        }
    }

    pub const fn sweep_angle_deg(self) -> f32 { 90.0 }

    pub const fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomRight => "bottom-right",
            Corner::BottomLeft => "bottom-left",
        }
    }
}

/// Arc centers for the four corners of one box at a given (already clamped) radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerSet {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl CornerSet {
    /// `radius` must not exceed half the box width or height.
    pub fn new(bounds: &Bounds, radius: i32) -> Self {
        let (x1, y1) = (bounds.left(), bounds.top());
        let (x2, y2) = (bounds.right(), bounds.bottom());
        Self {
            top_left: Point::new(x1 + radius, y1 + radius),
            top_right: Point::new(x2 - radius, y1 + radius),
            bottom_right: Point::new(x2 - radius, y2 - radius),
            bottom_left: Point::new(x1 + radius, y2 - radius),
        }
    }

    pub const fn get(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Corner, Point)> + '_ {
        Corner::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
