// File: crates/bbox-core/src/error.rs
// Summary: Typed errors for bracket box rendering; raised before any draw call is issued.

use thiserror::Error;

use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    /// Bottom-right must be strictly greater than top-left on both axes.
    #[error("invalid bounds: bottom-right {bottom_right} must be strictly below and right of top-left {top_left}")]
    InvalidBounds { top_left: Point, bottom_right: Point },

    #[error("stroke thickness must be at least 1 pixel")]
    ZeroThickness,
}
