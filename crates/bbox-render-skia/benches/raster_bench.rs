use anyhow::Result;
use bbox_core::{Bounds, Rgb, Style};
use bbox_render_skia::{render_png, CanvasOptions, RasterImage};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");
    let bounds = Bounds::from_ltrb(50, 50, 350, 250).expect("bounds");
    for &thickness in &[3u32, 40u32] {
        let style = Style::new(Rgb::RED, thickness, 20, 60);
        group.bench_function(format!("draw_t{thickness}"), |b| {
            let mut img = RasterImage::new(&CanvasOptions::default()).expect("canvas");
            b.iter(|| -> Result<()> {
                img.clear(Rgb::WHITE);
                img.draw_bracket_box(&bounds, &style)?;
                Ok(())
            });
        });
    }
    group.bench_function("png_bytes", |b| {
        let style = Style::default();
        b.iter(|| -> Result<()> {
            let bytes = render_png(&CanvasOptions::default(), &bounds, &style)?;
            black_box(bytes);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_raster);
criterion_main!(benches);
