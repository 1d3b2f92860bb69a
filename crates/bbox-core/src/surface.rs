// File: crates/bbox-core/src/surface.rs
// Summary: Raster surface capability trait consumed by the renderer, plus the stroke description.

use crate::geometry::Point;
use crate::types::Rgb;

/// Stroke parameters shared by every primitive of one box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb,
    pub thickness: u32,
    pub anti_aliased: bool,
}

impl Stroke {
    pub const fn new(color: Rgb, thickness: u32, anti_aliased: bool) -> Self {
        Self { color, thickness, anti_aliased }
    }
}

/// Drawing backend the renderer targets. The surface is owned by the caller;
/// implementations only mutate pixels.
///
/// Angles are in degrees, 0° points along +x and positive sweeps turn toward +y
/// (clockwise on screen, since y grows downward).
pub trait Surface {
    /// Stroke an elliptical arc centered at `center`. A zero radius draws nothing.
    fn draw_arc(
        &mut self,
        center: Point,
        radius_x: i32,
        radius_y: i32,
        start_angle_deg: f32,
        sweep_angle_deg: f32,
        stroke: &Stroke,
    );

    /// Stroke a straight segment. A zero-length segment draws nothing.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn draw_arc(
        &mut self,
        center: Point,
        radius_x: i32,
        radius_y: i32,
        start_angle_deg: f32,
        sweep_angle_deg: f32,
        stroke: &Stroke,
    ) {
        (**self).draw_arc(center, radius_x, radius_y, start_angle_deg, sweep_angle_deg, stroke)
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        (**self).draw_line(from, to, stroke)
    }
}
