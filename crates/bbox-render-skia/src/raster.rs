// File: crates/bbox-render-skia/src/raster.rs
// Summary: Owned CPU raster image (Skia N32 premul surface) with PNG and RGBA8 readback.

use anyhow::{anyhow, bail, Context, Result};
use bbox_core::{Bounds, Point, Rgb, Stroke, Style, Surface};
use skia_safe as skia;

use crate::canvas::{to_color, CanvasSurface};

/// Canvas allocation options. Defaults match the reference 400x300 white canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasOptions {
    pub width: i32,
    pub height: i32,
    pub background: Rgb,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self { width: 400, height: 300, background: Rgb::WHITE }
    }
}

pub struct RasterImage {
    surface: skia::Surface,
}

impl RasterImage {
    /// Allocate a raster surface and fill it with the background color.
    pub fn new(opts: &CanvasOptions) -> Result<Self> {
        if opts.width <= 0 || opts.height <= 0 {
            bail!("canvas size must be positive, got {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        surface.canvas().clear(to_color(opts.background));
        log::debug!("allocated {}x{} raster surface", opts.width, opts.height);
        Ok(Self { surface })
    }

    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    pub fn clear(&mut self, color: Rgb) {
        self.surface.canvas().clear(to_color(color));
    }

    /// Borrow the underlying canvas as a `Surface`.
    pub fn canvas_surface(&mut self) -> CanvasSurface<'_> {
        CanvasSurface::new(self.surface.canvas())
    }

    /// Draw one bracket box onto this image.
    pub fn draw_bracket_box(&mut self, bounds: &Bounds, style: &Style) -> Result<()> {
        bbox_core::render(self, bounds, style)
            .with_context(|| format!("rendering bracket box {}-{}", bounds.top_left(), bounds.bottom_right()))?;
        Ok(())
    }

    /// Encode the current pixels as PNG.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write a PNG to `path`, creating parent directories as needed.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width(), self.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            bail!("read_pixels failed for {}x{} surface", w, h);
        }
        Ok((px, w as u32, h as u32, stride))
    }
}

impl Surface for RasterImage {
    fn draw_arc(
        &mut self,
        center: Point,
        radius_x: i32,
        radius_y: i32,
        start_angle_deg: f32,
        sweep_angle_deg: f32,
        stroke: &Stroke,
    ) {
        self.canvas_surface()
            .draw_arc(center, radius_x, radius_y, start_angle_deg, sweep_angle_deg, stroke);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.canvas_surface().draw_line(from, to, stroke);
    }
}

/// Allocate a canvas, draw one bracket box and return the PNG bytes.
pub fn render_png(opts: &CanvasOptions, bounds: &Bounds, style: &Style) -> Result<Vec<u8>> {
    let mut image = RasterImage::new(opts)?;
    image.draw_bracket_box(bounds, style)?;
    image.to_png_bytes()
}
