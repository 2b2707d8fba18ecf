//! Ray–triangle predicate and corner snapping.

use nalgebra::Vector3;

use super::types::{Hit, Ray, Triangle};

/// Möller–Trumbore in division form.
///
/// Returns `Some(hit)` iff `u ∈ [0,1]`, `v ∈ [0,1]`, `u + v <= 1` and `t > 0`.
/// A ray parallel to the triangle plane (`det == 0`), including any ray against
/// a zero-area triangle, is a miss. Near-zero determinants are not special-cased.
pub fn intersect(ray: &Ray, tri: &Triangle) -> Option<Hit> {
    let e1 = tri.vertex[1] - tri.vertex[0];
    let e2 = tri.vertex[2] - tri.vertex[0];
    let p = ray.direction.cross(&e2);
    let det = e1.dot(&p);
    if det == 0.0 {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - tri.vertex[0];
    let u = s.dot(&p) * inv_det;
    let q = s.cross(&e1);
    let v = ray.direction.dot(&q) * inv_det;
    let t = e2.dot(&q) * inv_det;
    let inside = (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) && u + v <= 1.0;
    // NaN fails every comparison above, so non-finite input falls through as a miss.
    if inside && t > 0.0 {
        Some(Hit { u, v, t })
    } else {
        None
    }
}

/// Corner of `tri` closest to `x` (ties go to the lower corner index).
pub fn nearest_corner(tri: &Triangle, x: &Vector3<f64>) -> usize {
    let a = (x - tri.vertex[0]).norm_squared();
    let b = (x - tri.vertex[1]).norm_squared();
    let c = (x - tri.vertex[2]).norm_squared();
    if a <= b {
        if a <= c {
            0
        } else {
            2
        }
    } else if b <= c {
        1
    } else {
        2
    }
}
