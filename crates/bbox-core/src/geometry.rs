// File: crates/bbox-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, validated bounds, arm segments).

use crate::error::BracketError;

/// Integer pixel coordinate. Image convention: y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box given by its top-left and bottom-right corners.
/// Contract: `bottom_right` is strictly greater than `top_left` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    top_left: Point,
    bottom_right: Point,
}

impl Bounds {
    /// Validate and build bounds. Inverted or zero-area boxes are rejected.
    pub fn new(top_left: impl Into<Point>, bottom_right: impl Into<Point>) -> Result<Self, BracketError> {
        let top_left = top_left.into();
        let bottom_right = bottom_right.into();
        if bottom_right.x <= top_left.x || bottom_right.y <= top_left.y {
            return Err(BracketError::InvalidBounds { top_left, bottom_right });
        }
        Ok(Self { top_left, bottom_right })
    }

    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, BracketError> {
        Self::new((left, top), (right, bottom))
    }

    pub const fn top_left(&self) -> Point { self.top_left }
    pub const fn bottom_right(&self) -> Point { self.bottom_right }
    pub const fn left(&self) -> i32 { self.top_left.x }
    pub const fn top(&self) -> i32 { self.top_left.y }
    pub const fn right(&self) -> i32 { self.bottom_right.x }
    pub const fn bottom(&self) -> i32 { self.bottom_right.y }

    // Widened so that boxes spanning the whole i32 range cannot overflow.
    pub const fn width(&self) -> i64 { self.bottom_right.x as i64 - self.top_left.x as i64 }
    pub const fn height(&self) -> i64 { self.bottom_right.y as i64 - self.top_left.y as i64 }

    /// floor(width / 2); width is positive so integer division floors.
    pub const fn half_width(&self) -> i64 { self.width() / 2 }
    /// floor(height / 2).
    pub const fn half_height(&self) -> i64 { self.height() / 2 }

    /// True when `p` lies inside the box, edges included.
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.top_left.x && p.x <= self.bottom_right.x && p.y >= self.top_left.y && p.y <= self.bottom_right.y
    }
}

/// Straight arm segment drawn from `from` toward `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Arms are axis-aligned, so the length is the Manhattan distance.
    pub fn length(&self) -> u32 {
        self.from.x.abs_diff(self.to.x) + self.from.y.abs_diff(self.to.y)
    }

    pub fn is_empty(&self) -> bool { self.from == self.to }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
