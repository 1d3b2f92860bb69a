// File: crates/bbox-render-skia/src/lib.rs
// Summary: Skia renderer crate; adapts Skia canvases to the bracket box Surface trait.

pub mod canvas;
pub mod raster;

pub use canvas::CanvasSurface;
pub use raster::{render_png, CanvasOptions, RasterImage};
