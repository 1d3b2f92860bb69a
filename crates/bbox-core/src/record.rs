// File: crates/bbox-core/src/record.rs
// Summary: In-memory Surface that records draw calls instead of rasterizing them.

use crate::geometry::Point;
use crate::surface::{Stroke, Surface};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall {
    Arc {
        center: Point,
        radius_x: i32,
        radius_y: i32,
        start_angle_deg: f32,
        sweep_angle_deg: f32,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
}

impl DrawCall {
    pub fn stroke(&self) -> &Stroke {
        match self {
            DrawCall::Arc { stroke, .. } | DrawCall::Line { stroke, .. } => stroke,
        }
    }

    pub fn is_arc(&self) -> bool { matches!(self, DrawCall::Arc { .. }) }
    pub fn is_line(&self) -> bool { matches!(self, DrawCall::Line { .. }) }
}

impl std::fmt::Display for DrawCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawCall::Arc { center, radius_x, radius_y, start_angle_deg, sweep_angle_deg, stroke } => write!(
                f,
                "arc center={center} r=({radius_x}, {radius_y}) start={start_angle_deg} sweep={sweep_angle_deg} width={}",
                stroke.thickness
            ),
            DrawCall::Line { from, to, stroke } => {
                write!(f, "line {from} -> {to} width={}", stroke.thickness)
            }
        }
    }
}

/// Keeps every call in issue order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn arcs(&self) -> impl Iterator<Item = &DrawCall> { self.calls.iter().filter(|c| c.is_arc()) }
    pub fn lines(&self) -> impl Iterator<Item = &DrawCall> { self.calls.iter().filter(|c| c.is_line()) }

    pub fn clear(&mut self) { self.calls.clear(); }
    pub fn is_empty(&self) -> bool { self.calls.is_empty() }
}

impl Surface for RecordingSurface {
    fn draw_arc(
        &mut self,
        center: Point,
        radius_x: i32,
        radius_y: i32,
        start_angle_deg: f32,
        sweep_angle_deg: f32,
        stroke: &Stroke,
    ) {
        self.calls.push(DrawCall::Arc {
            center,
            radius_x,
            radius_y,
            start_angle_deg,
            sweep_angle_deg,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.calls.push(DrawCall::Line { from, to, stroke: *stroke });
    }
}
