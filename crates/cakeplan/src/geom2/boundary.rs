//! The polygon ring as a continuous closed curve.
//!
//! Used for two things: deterministic point placement along a perimeter
//! (arc-length projection and interpolation, consumed by boundary-tracking
//! heuristics outside this crate) and probe-line intersection for the
//! candidate sweep.

use nalgebra::Vector2;

use super::polygon::Polygon;
use super::types::EPS_RING;
use super::util::{line_segment_params, project_on_segment};

/// Closed boundary curve with precomputed cumulative arc lengths.
#[derive(Clone, Debug)]
pub struct Boundary {
    verts: Vec<Vector2<f64>>,
    /// `cum[i]` is the arc length from vertex 0 to vertex i; `cum[n] == perimeter`.
    cum: Vec<f64>,
}

impl Boundary {
    pub fn of(poly: &Polygon) -> Boundary {
        let verts = poly.verts().to_vec();
        let n = verts.len();
        let mut cum = Vec::with_capacity(n + 1);
        cum.push(0.0);
        for i in 0..n {
            let step = (verts[(i + 1) % n] - verts[i]).norm();
            cum.push(cum[i] + step);
        }
        Boundary { verts, cum }
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        *self.cum.last().unwrap()
    }

    /// Point at arc length `d` from vertex 0, walking the ring forward.
    /// `d` wraps modulo the perimeter (negative values wrap backwards).
    pub fn interpolate(&self, d: f64) -> Vector2<f64> {
        let total = self.perimeter();
        let d = d.rem_euclid(total);
        let n = self.verts.len();
        // cum is sorted; find the edge containing d.
        let edge = match self.cum.binary_search_by(|c| {
            c.partial_cmp(&d).unwrap_or(std::cmp::Ordering::Equal)
        }) {
            Ok(i) => i.min(n - 1),
            Err(i) => i - 1,
        };
        let a = self.verts[edge];
        let b = self.verts[(edge + 1) % n];
        let len = self.cum[edge + 1] - self.cum[edge];
        if len <= 0.0 {
            return a;
        }
        a + (b - a) * ((d - self.cum[edge]) / len)
    }

    /// Arc length of the boundary point closest to `p`.
    pub fn project(&self, p: Vector2<f64>) -> f64 {
        let n = self.verts.len();
        let mut best_d = f64::INFINITY;
        let mut best_len = 0.0;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[(i + 1) % n];
            let (t, x) = project_on_segment(a, b, p);
            let d = (x - p).norm();
            if d < best_d {
                best_d = d;
                best_len = self.cum[i] + t * (self.cum[i + 1] - self.cum[i]);
            }
        }
        // The far end of the last edge is arc length 0, not the perimeter.
        if (best_len - self.perimeter()).abs() < 1e-12 {
            0.0
        } else {
            best_len
        }
    }

    /// Intersection points of the infinite line `o + u·dir` with the ring,
    /// sorted by the line parameter `u`, near-duplicates merged (a probe
    /// through a vertex yields one point, not two). Edges collinear with the
    /// line contribute nothing: only point intersections are kept.
    pub fn line_crossings(&self, o: Vector2<f64>, dir: Vector2<f64>) -> Vec<Vector2<f64>> {
        let n = self.verts.len();
        let mut hits: Vec<(f64, Vector2<f64>)> = Vec::new();
        for i in 0..n {
            let p = self.verts[i];
            let q = self.verts[(i + 1) % n];
            if let Some((u, t)) = line_segment_params(o, dir, p, q) {
                // Half-open edge parameter so shared vertices count once.
                if (0.0..1.0).contains(&t) {
                    hits.push((u, p + (q - p) * t));
                }
            }
        }
        hits.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let mut out: Vec<Vector2<f64>> = Vec::with_capacity(hits.len());
        for (_, x) in hits {
            if out.last().map_or(true, |last| (x - *last).norm() > EPS_RING) {
                out.push(x);
            }
        }
        out
    }
}
