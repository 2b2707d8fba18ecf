//! Criterion benches for shortest paths.
//!
//! - Vertex graph: corner to opposite corner on jittered grids.
//! - Face dual graph: first face to last face on the same grids.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use meshcore::shapes;

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    for n in [16usize, 64, 128] {
        let mesh = shapes::jittered_grid(n, n, 1.0, 0.2, 3).unwrap();
        let last_vertex = mesh.vertex_count() - 1;
        let last_face = mesh.face_count() - 1;
        group.bench_with_input(BenchmarkId::new("vertex", n), &mesh, |b, m| {
            b.iter(|| {
                let _ = m.shortest_path(0, last_vertex);
            })
        });
        group.bench_with_input(BenchmarkId::new("face", n), &mesh, |b, m| {
            b.iter(|| {
                let _ = m.face_shortest_path(0, last_face);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
