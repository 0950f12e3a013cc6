#![forbid(unsafe_code)]

mod rendering;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use flash_field::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::rendering::{init_tracing, write_outlines, RenderConfig};

/// Render a branching lightning flash to SVG or PNG
#[derive(Parser, Debug)]
#[command(name = "flash-field")]
#[command(about = "Procedural lightning flashes from biased random walks", long_about = None)]
struct Args {
    /// Total walk steps across all branches
    #[arg(short, long, default_value_t = 23)]
    nodes: usize,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Output file (.svg or .png)
    #[arg(short, long, default_value = "flash.svg")]
    output: PathBuf,

    /// Seed for reproducible output; drawn from the clock when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum width of the tapered outline
    #[arg(short, long, default_value_t = 4.0)]
    thickness: f64,

    /// Log every spawn and fallback
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = FieldConfig::new(f64::from(args.width), f64::from(args.height))
        .with_nodes(args.nodes)
        .with_thickness(args.thickness);
    let field = FlashField::try_new(config)?;

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(2025),
    };
    info!("Seed {}.", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let flashes = field.generate(&mut rng);
    for (i, flash) in flashes.iter().enumerate() {
        tracing::debug!("Flash {}: {}", i, flash);
    }

    let outlines: Vec<OutlinePath> = flashes
        .iter()
        .map(|f| f.render_path(args.thickness))
        .collect();

    let rc = RenderConfig::new((args.width, args.height));
    write_outlines(&outlines, &rc, &args.output)?;

    Ok(())
}
