mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flash_field::field::{FieldConfig, FlashField};
use rand::rngs::StdRng;
use rand::SeedableRng;

const BUDGETS: [usize; 4] = [23, 256, 2048, 16384];

fn field_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("field/generate");

    for &nodes in &BUDGETS {
        group.throughput(common::nodes_throughput(nodes));
        let config = FieldConfig::new(common::CANVAS, common::CANVAS).with_nodes(nodes);
        let mut rng = StdRng::seed_from_u64(0xB0_17 ^ nodes as u64);

        group.bench_with_input(BenchmarkId::from_parameter(nodes), &config, |b, config| {
            b.iter(|| {
                let flashes = FlashField::new(config.clone()).generate(&mut rng);
                black_box(flashes.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::bench_criterion();
    targets = field_benches
}
criterion_main!(benches);
