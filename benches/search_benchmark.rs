// benches/search_benchmark.rs
//
// Times minimax against alpha-beta on each benchmark position. Depth 4
// minimax on the open positions takes tens of thousands of nodes, so the
// sample size is kept small.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use santorini_search::{fixtures::BENCHMARK_POSITIONS, santorini_search::search_root, searcher::Algorithm};

fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Minimax vs Alpha-Beta");
    group.sample_size(10);

    for depth in [2u8, 3, 4].iter().copied() {
        for position in BENCHMARK_POSITIONS {
            let state = position.state();
            for &algorithm in &Algorithm::ALL {
                let bench_name = format!("{}_{}", position.name, algorithm);

                group.bench_with_input(BenchmarkId::new(&bench_name, depth), &depth, |b, &depth| {
                    b.iter(|| {
                        let outcome = search_root(algorithm, black_box(&state), depth);
                        black_box(outcome.unwrap())
                    })
                });
            }
        }
    }

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
