//! Timing probe for topology rebuild, picking and both path searches.
//!
//! Purpose
//! - Give a quick, reproducible feel for how the linear-time pieces scale on a
//!   jittered grid before reaching for the criterion benches.
//!
//! Run: `cargo run --release --example grid_probe -- 200`

use std::time::Instant;

use meshcore::boundary::boundary_loops;
use meshcore::geometry::Ray;
use meshcore::shapes;
use nalgebra::Vector3;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100);

    let t = Instant::now();
    let mesh = shapes::jittered_grid(n, n, 1.0, 0.2, 7).expect("grid builds");
    let build_ms = t.elapsed().as_secs_f64() * 1e3;
    let gaps = mesh.topology().gaps().count();

    let t = Instant::now();
    let path = mesh
        .shortest_path(0, mesh.vertex_count() - 1)
        .expect("indices in range");
    let vertex_ms = t.elapsed().as_secs_f64() * 1e3;

    let t = Instant::now();
    let dual = mesh
        .face_shortest_path(0, mesh.face_count() - 1)
        .expect("indices in range");
    let face_ms = t.elapsed().as_secs_f64() * 1e3;

    let c = n as f64 * 0.5;
    let t = Instant::now();
    let hit = mesh.intersect(&Ray::new(Vector3::new(c, c, 10.0), -Vector3::z()));
    let pick_ms = t.elapsed().as_secs_f64() * 1e3;

    let loops = boundary_loops(&mesh);

    println!("grid {n}x{n}: V={} F={} E={}", mesh.vertex_count(), mesh.face_count(), mesh.edges().len());
    println!("  build       {build_ms:8.3} ms  (ring gaps: {gaps})");
    println!("  vertex path {vertex_ms:8.3} ms  hops={} length={:.4}", path.len(), path.length);
    println!("  face path   {face_ms:8.3} ms  hops={} length={:.4}", dual.len(), dual.length);
    println!("  pick        {pick_ms:8.3} ms  face={:?}", hit.map(|h| h.face));
    println!("  boundary    {} loop(s), {} edges", loops.len(), loops.iter().map(|l| l.edge_count()).sum::<usize>());
}
