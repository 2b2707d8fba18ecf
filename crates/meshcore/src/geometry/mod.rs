//! Geometry primitives: rays, triangles, hits, bounds.
//!
//! Purpose
//! - Provide the small set of 3D types the topology and picking code share.
//! - Keep the ray–triangle predicate branch-light and exactly as cheap as the
//!   division form of Möller–Trumbore; no epsilon juggling beyond `det == 0`.
//!
//! Conventions
//! - Positions and directions are `Vector3<f64>`; directions need not be unit.
//! - A hit is reported for `t > 0` only (one-sided, origin excluded).
//! - "No hit" is `None`, never a sentinel `t`.

mod intersect;
mod types;

pub use intersect::{intersect, nearest_corner};
pub use types::{Aabb, Hit, Ray, Triangle};
