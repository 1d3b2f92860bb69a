// File: crates/bbox-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use bbox_core::{Bounds, Style};
use bbox_render_skia::{render_png, CanvasOptions, RasterImage};

#[test]
fn render_smoke_png() {
    let bounds = Bounds::from_ltrb(50, 50, 350, 250).unwrap();
    let style = Style::default();

    let mut img = RasterImage::new(&CanvasOptions::default()).expect("canvas");
    img.draw_bracket_box(&bounds, &style).expect("draw");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    img.save_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_png(&CanvasOptions::default(), &bounds, &style).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (400, 300));
}
