#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use flash_field::flash::{Flash, WalkParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const CANVAS: f64 = 1024.0;

pub fn bench_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

/// Throughput in appended nodes; never zero so criterion can report a rate.
pub fn nodes_throughput(nodes: usize) -> Throughput {
    Throughput::Elements(nodes.max(1) as u64)
}

/// A flash on the bench canvas grown by `steps` default walk steps.
pub fn grown_flash(steps: usize, seed: u64) -> Flash {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut flash = Flash::new(CANVAS, CANVAS);
    for _ in 0..steps {
        flash.random_walk(&WalkParams::default(), &mut rng);
    }
    flash
}
