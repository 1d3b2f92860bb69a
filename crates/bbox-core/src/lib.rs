// File: crates/bbox-core/src/lib.rs
// Summary: Core library entry point; exports the bracket box geometry, surface trait and renderer.

pub mod bracket;
pub mod corners;
pub mod error;
pub mod geometry;
pub mod record;
pub mod surface;
pub mod types;

pub use bracket::{draw_rounded_bounding_box, render, BracketGeometry};
pub use corners::{Corner, CornerSet};
pub use error::BracketError;
pub use geometry::{Bounds, Point, Segment};
pub use record::{DrawCall, RecordingSurface};
pub use surface::{Stroke, Surface};
pub use types::{Rgb, Style};
