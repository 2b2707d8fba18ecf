//! Criterion benches for topology construction.
//!
//! - Edge index alone over jittered grids.
//! - Full rebuild (edges, CSR rings with ordering, face adjacency) with and
//!   without ring ordering, validation off.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use meshcore::edges::EdgeIndex;
use meshcore::{shapes, Mesh, TopologyCfg};

fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges");
    for n in [16usize, 64, 128] {
        let (_, faces) = shapes::jittered_grid(n, n, 1.0, 0.2, 1).unwrap().into_parts();
        let vertex_count = (n + 1) * (n + 1);
        group.bench_with_input(BenchmarkId::new("build", n), &faces, |b, faces| {
            b.iter(|| {
                let _ = EdgeIndex::build(faces, vertex_count);
            })
        });
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for n in [16usize, 64, 128] {
        let (vertices, faces) = shapes::jittered_grid(n, n, 1.0, 0.2, 2).unwrap().into_parts();
        for orient_rings in [true, false] {
            let cfg = TopologyCfg {
                orient_rings,
                validate: false,
            };
            let label = if orient_rings { "ordered" } else { "unordered" };
            group.bench_function(BenchmarkId::new(label, n), |b| {
                b.iter_batched(
                    || (vertices.clone(), faces.clone()),
                    |(v, f)| {
                        let _ = Mesh::with_cfg(v, f, cfg);
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_edges, bench_rebuild);
criterion_main!(benches);
