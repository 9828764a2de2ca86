//! Basic 2D types and tolerances shared by the geometry kernel.
//!
//! - `GeomCfg`: centralizes epsilons for area and boundary-incidence checks.
//! - `Aabb`: axis-aligned bounding box used by the probe sweeps.
//! - `Chord`: a straight cut between two points on a piece's boundary.

use nalgebra::Vector2;

/// Ring-welding epsilon: vertices or boundary points closer than this are
/// treated as one point when rings are built, walked, or deduplicated.
/// Structural (a property of stored vertex data) rather than part of
/// `GeomCfg`, so polygons built under different configs stay composable.
pub(crate) const EPS_RING: f64 = 1e-9;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Areas at or below this are treated as degenerate (empty) regions.
    pub eps_area: f64,
    /// Maximum distance at which a point still counts as lying on a boundary.
    /// Chord endpoints are boundary points by construction; this absorbs the
    /// floating-point error of the intersection math that produced them.
    pub eps_point: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_area: 1e-9,
            eps_point: 1e-7,
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Aabb {
    /// Tight box around a non-empty point set.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Aabb> {
        let first = *points.first()?;
        let mut b = Aabb {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A straight cut between two points on a piece's boundary.
///
/// Always expressed in the coordinate frame of the original cake, regardless
/// of which sub-piece it was computed against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chord {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Chord {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.a + self.b) * 0.5
    }
}
