// File: crates/bbox-demo/src/main.rs
// Summary: Demo renders bracket boxes (built-in examples or rows from a CSV) to PNGs, one image per box.

use anyhow::{Context, Result};
use bbox_core::{Bounds, RecordingSurface, Rgb, Style};
use bbox_render_skia::{CanvasOptions, RasterImage};
use std::path::{Path, PathBuf};

mod scenario;

use scenario::{builtin_scenarios, load_scenarios_csv, Scenario};

struct Args {
    input: Option<PathBuf>,
    out_dir: PathBuf,
    dry_run: bool,
}

fn main() -> Result<()> {
    init_logging();

    let args = parse_args(std::env::args().skip(1))?;
    let scenarios = match &args.input {
        Some(path) => load_scenarios_csv(path)
            .with_context(|| format!("failed to load boxes from '{}'", path.display()))?,
        None => builtin_scenarios()?,
    };
    log::info!("rendering {} box(es)", scenarios.len());

    let opts = CanvasOptions::default();
    for sc in &scenarios {
        log::info!("{}: {}", sc.name, describe(&sc.bounds, &sc.style));
        if args.dry_run {
            dry_run(sc)?;
            continue;
        }
        let out = args.out_dir.join(format!("{}.png", sc.name));
        render_one(&opts, sc, &out).with_context(|| format!("rendering '{}'", sc.name))?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args { input: None, out_dir: PathBuf::from("target/out"), dry_run: false };
    while let Some(a) = it.next() {
        match a.as_str() {
            "--out" => {
                let dir = it.next().context("--out needs a directory")?;
                args.out_dir = PathBuf::from(dir);
            }
            "--dry-run" => args.dry_run = true,
            "-h" | "--help" => {
                println!("usage: bbox-demo [boxes.csv] [--out DIR] [--dry-run]");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag: {flag}"),
            path => args.input = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn render_one(opts: &CanvasOptions, sc: &Scenario, out: &Path) -> Result<()> {
    let mut img = RasterImage::new(opts)?;
    img.draw_bracket_box(&sc.bounds, &sc.style)?;
    img.save_png(out)
}

/// Log the draw calls a box would issue without rasterizing.
fn dry_run(sc: &Scenario) -> Result<()> {
    let mut rec = RecordingSurface::new();
    let geometry = bbox_core::render(&mut rec, &sc.bounds, &sc.style)?;
    println!(
        "{}: radius {} arm {} ({} calls)",
        sc.name,
        geometry.radius,
        geometry.arm,
        rec.calls.len()
    );
    for call in &rec.calls {
        log::info!("  {call}");
    }
    Ok(())
}

fn describe(bounds: &Bounds, style: &Style) -> String {
    let Rgb { r, g, b } = style.color;
    format!(
        "{}-{} rgb({r},{g},{b}) t={} r={} arm={}",
        bounds.top_left(),
        bounds.bottom_right(),
        style.thickness,
        style.border_radius,
        style.arm_length
    )
}
