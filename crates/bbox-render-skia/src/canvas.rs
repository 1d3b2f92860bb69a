// File: crates/bbox-render-skia/src/canvas.rs
// Summary: Surface implementation over any Skia canvas (CPU raster or GPU-backed).

use bbox_core::{Point, Rgb, Stroke, Surface};
use skia_safe as skia;

pub struct CanvasSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }
}

pub(crate) fn to_color(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_color(stroke.color));
    paint.set_anti_alias(stroke.anti_aliased);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.thickness as f32);
    // Arm ends must sit flush against the arc ends.
    paint.set_stroke_cap(skia::paint::Cap::Butt);
    paint
}

impl Surface for CanvasSurface<'_> {
    fn draw_arc(
        &mut self,
        center: Point,
        radius_x: i32,
        radius_y: i32,
        start_angle_deg: f32,
        sweep_angle_deg: f32,
        stroke: &Stroke,
    ) {
        if radius_x <= 0 || radius_y <= 0 {
            return;
        }
        let (cx, cy) = (center.x as f32, center.y as f32);
        let (rx, ry) = (radius_x as f32, radius_y as f32);
        let oval = skia::Rect::from_ltrb(cx - rx, cy - ry, cx + rx, cy + ry);
        // Skia measures angles clockwise from +x in y-down space, same as the trait.
        self.canvas.draw_arc(oval, start_angle_deg, sweep_angle_deg, false, &stroke_paint(stroke));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        if from == to {
            return;
        }
        self.canvas.draw_line(
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            &stroke_paint(stroke),
        );
    }
}
