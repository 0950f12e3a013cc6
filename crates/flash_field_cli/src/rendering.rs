//! Rendering collaborator: turns outline polygons into SVG or PNG files.
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use flash_field::prelude::*;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Canvas and colors used for every flash.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels (width, height).
    pub size: (u32, u32),
    pub background: [u8; 3],
    pub fill: [u8; 3],
}

impl RenderConfig {
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            size,
            background: [12, 12, 28],
            fill: [235, 235, 255],
        }
    }
}

/// Writes the outlines to `path`, picking the format from its extension.
pub fn write_outlines(
    outlines: &[OutlinePath],
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            fs::write(path, svg_document(outlines, rc))
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Some("png") => {
            rasterize(outlines, rc)
                .save(path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        _ => bail!(
            "unsupported output format for {}; use .svg or .png",
            path.display()
        ),
    }
    info!("Wrote {} flashes to {}.", outlines.len(), path.display());
    Ok(())
}

/// SVG path data (`M x y L x y ... Z`) for one outline.
pub fn path_data(outline: &OutlinePath) -> String {
    let mut d = String::new();
    for cmd in &outline.commands {
        if !d.is_empty() {
            d.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = match cmd {
            PathCommand::MoveTo(p) => write!(d, "M {:.3} {:.3}", p.x, p.y),
            PathCommand::LineTo(p) => write!(d, "L {:.3} {:.3}", p.x, p.y),
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}

pub fn svg_document(outlines: &[OutlinePath], rc: &RenderConfig) -> String {
    let (width, height) = rc.size;
    let [br, bg, bb] = rc.background;
    let [fr, fg, fb] = rc.fill;

    let paths = outlines.iter().fold(String::new(), |mut acc, outline| {
        let _ = writeln!(
            acc,
            r#"  <path d="{d}" style="fill:rgb({fr},{fg},{fb});fill-opacity:1.0;stroke:none;stroke-linejoin:miter" />"#,
            d = path_data(outline),
        );
        acc
    });

    format!(
        r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="rgb({br},{bg},{bb})" />
{paths}</svg>
"#
    )
}

/// Fills every outline with an even-odd scanline rule, sampling pixel centers.
pub fn rasterize(outlines: &[OutlinePath], rc: &RenderConfig) -> RgbImage {
    let (width, height) = rc.size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(rc.background));
    let fill = Rgb(rc.fill);

    for outline in outlines {
        let vertices: Vec<Point> = outline.vertices().collect();
        if vertices.len() < 3 {
            continue;
        }

        let mut crossings = Vec::new();
        for y in 0..height {
            let yc = f64::from(y) + 0.5;
            crossings.clear();
            for (i, a) in vertices.iter().enumerate() {
                let b = vertices[(i + 1) % vertices.len()];
                if (a.y <= yc) != (b.y <= yc) {
                    let t = (yc - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                let x0 = (span[0] - 0.5).ceil().max(0.0);
                let x1 = (span[1] - 0.5).floor().min(f64::from(width) - 1.0);
                if x1 < x0 {
                    continue;
                }
                for x in x0 as u32..=x1 as u32 {
                    img.put_pixel(x, y, fill);
                }
            }
        }
    }

    img
}
