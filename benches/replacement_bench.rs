use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use pagesim::{FramePool, PageTable, Policy, Simulator};

// Generate a reproducible reference string over pages `0..table_size`
fn generate_references(table_size: usize, len: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(0..table_size)).collect()
}

fn replacement_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Replacement");
    let simulator = Simulator::default();
    let table = PageTable::new(256);
    let references = generate_references(256, 10_000);

    // Test with different frame counts against a fixed workload
    for frames in [4u32, 16, 64].iter() {
        let pool = FramePool::with_frame_count(*frames);

        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.to_string(), frames), frames, |b, _| {
                b.iter(|| {
                    simulator
                        .count_page_faults(policy, &table, &references, &pool)
                        .unwrap()
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, replacement_benchmark);
criterion_main!(benches);
