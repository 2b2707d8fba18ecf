//! Plain geometric value types.

use nalgebra::Vector3;

/// Half-line `origin + t * direction`, `t > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vector3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` through `target`.
    #[inline]
    pub fn through(origin: Vector3<f64>, target: Vector3<f64>) -> Self {
        Self {
            origin,
            direction: target - origin,
        }
    }

    #[inline]
    pub fn at(&self, t: f64) -> Vector3<f64> {
        self.origin + self.direction * t
    }
}

/// Triangle by value; corner order defines the winding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertex: [Vector3<f64>; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self { vertex: [a, b, c] }
    }

    /// Centroid of the three corners.
    #[inline]
    pub fn barycenter(&self) -> Vector3<f64> {
        (self.vertex[0] + self.vertex[1] + self.vertex[2]) / 3.0
    }

    /// Unnormalized normal `(v1 - v0) × (v2 - v0)`; its norm is twice the area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector3<f64> {
        (self.vertex[1] - self.vertex[0]).cross(&(self.vertex[2] - self.vertex[0]))
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.scaled_normal().norm()
    }

    /// Point at barycentric `(u, v)` relative to corner 0.
    #[inline]
    pub fn point_at(&self, u: f64, v: f64) -> Vector3<f64> {
        self.vertex[0] * (1.0 - u - v) + self.vertex[1] * u + self.vertex[2] * v
    }
}

/// Ray–triangle hit: barycentric `(u, v)` and ray parameter `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub u: f64,
    pub v: f64,
    pub t: f64,
}

/// Axis-aligned bounding box.
///
/// Invariant: `min <= max` componentwise once at least one point was added.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Degenerate box around a single point.
    #[inline]
    pub fn from_point(p: Vector3<f64>) -> Self {
        Self { min: p, max: p }
    }

    /// Bounds of a point set; `None` when empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vector3<f64>>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Self::from_point(*first);
        for p in it {
            b.grow(p);
        }
        Some(b)
    }

    #[inline]
    pub fn grow(&mut self, p: &Vector3<f64>) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    #[inline]
    pub fn merge(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) * 0.5
    }

    /// Radius of the sphere around `center()` enclosing the box.
    #[inline]
    pub fn radius(&self) -> f64 {
        (self.max - self.min).norm() * 0.5
    }
}
