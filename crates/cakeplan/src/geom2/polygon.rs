//! Simple polygons as ordered closed vertex rings.
//!
//! Purpose
//! - Hold the piece under subdivision as a plain vertex ring (works for
//!   non-convex cakes, unlike an H-representation).
//! - Provide the split operation the partition search is built on: a chord
//!   with both endpoints on the boundary divides the ring into exactly two
//!   sub-rings, each closed by the chord.
//!
//! Invariants (caller contract, checked where cheap):
//! - At least 3 distinct vertices, consecutive duplicates removed.
//! - Positive area above a small epsilon.
//! - Non-self-intersecting; not verified here (the cake source guarantees it,
//!   and splits of a simple polygon by an interior chord stay simple).

use nalgebra::Vector2;

use super::types::{Aabb, Chord, GeomCfg, EPS_RING};
use super::util::{project_on_segment, segments_cross_properly};

/// A simple polygon (ordered closed vertex ring, either orientation).
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector2<f64>>,
}

/// Position on the ring: a point on edge `edge` at parameter `t` in [0, 1).
/// `t` is canonicalized so a point at an edge's far end belongs to the next
/// edge at `t = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct RingLoc {
    edge: usize,
    t: f64,
}

impl Polygon {
    /// Build a polygon from a vertex ring. Consecutive vertices closer than
    /// the ring-welding epsilon (and a repeated closing vertex) are merged.
    /// Returns `None` for fewer than 3 distinct vertices or an area below a
    /// fixed floor of 1e-12 (beneath any configurable `eps_area`).
    pub fn new(verts: Vec<Vector2<f64>>) -> Option<Polygon> {
        let mut v = verts;
        v.dedup_by(|a, b| (*a - *b).norm() < EPS_RING);
        if v.len() >= 2 {
            let first = v[0];
            if (first - *v.last().unwrap()).norm() < EPS_RING {
                v.pop();
            }
        }
        if v.len() < 3 {
            return None;
        }
        let poly = Polygon { verts: v };
        if poly.area() <= 1e-12 {
            return None;
        }
        Some(poly)
    }

    /// Axis-aligned rectangle helper (mostly for tests and demos).
    pub fn rectangle(min: Vector2<f64>, max: Vector2<f64>) -> Option<Polygon> {
        Polygon::new(vec![
            min,
            Vector2::new(max.x, min.y),
            max,
            Vector2::new(min.x, max.y),
        ])
    }

    #[inline]
    pub fn verts(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    /// Directed edges of the ring, in order.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
    }

    /// Shoelace area with sign (positive for CCW rings).
    pub fn signed_area(&self) -> f64 {
        let mut acc = 0.0;
        for (p, q) in self.edges() {
            acc += p.x * q.y - q.x * p.y;
        }
        acc * 0.5
    }

    /// Non-negative area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Tight axis-aligned bounding box.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(&self.verts).expect("ring has at least 3 vertices")
    }

    /// Even-odd interior test. Points on the boundary are not reliably
    /// classified; use `boundary_distance` for those.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let n = self.verts.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.verts[i];
            let vj = self.verts[j];
            if (vi.y > p.y) != (vj.y > p.y) {
                let x = vj.x + (p.y - vj.y) / (vi.y - vj.y) * (vi.x - vj.x);
                if p.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Distance from `p` to the nearest boundary point.
    pub fn boundary_distance(&self, p: Vector2<f64>) -> f64 {
        self.edges()
            .map(|(a, b)| (project_on_segment(a, b, p).1 - p).norm())
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether the open segment `a`..`b` stays within the polygon: no proper
    /// crossing of any boundary edge, and interior sample points inside (or
    /// on the boundary within `eps_point`).
    pub fn chord_inside(&self, a: Vector2<f64>, b: Vector2<f64>, cfg: &GeomCfg) -> bool {
        for (p, q) in self.edges() {
            if segments_cross_properly(a, b, p, q, 1e-9) {
                return false;
            }
        }
        for t in [0.25, 0.5, 0.75] {
            let x = a + (b - a) * t;
            if !self.contains(x) && self.boundary_distance(x) > cfg.eps_point {
                return false;
            }
        }
        true
    }

    /// Locate `p` on the ring within `eps`, canonicalizing vertex hits to
    /// `t = 0` of the outgoing edge.
    fn locate_on_boundary(&self, p: Vector2<f64>, eps: f64) -> Option<RingLoc> {
        let n = self.verts.len();
        let mut best: Option<(f64, RingLoc)> = None;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[(i + 1) % n];
            let (t, x) = project_on_segment(a, b, p);
            let d = (x - p).norm();
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, RingLoc { edge: i, t }));
            }
        }
        let (d, mut loc) = best?;
        if d > eps {
            return None;
        }
        // Snap to the nearer vertex when the hit is effectively on one.
        let next = (loc.edge + 1) % n;
        if (p - self.verts[next]).norm() <= eps.max(EPS_RING) || loc.t >= 1.0 - 1e-9 {
            loc = RingLoc { edge: next, t: 0.0 };
        } else if (p - self.verts[loc.edge]).norm() <= eps.max(EPS_RING) {
            loc.t = 0.0;
        }
        Some(loc)
    }

    #[inline]
    fn loc_point(&self, loc: RingLoc) -> Vector2<f64> {
        let a = self.verts[loc.edge];
        let b = self.verts[(loc.edge + 1) % self.verts.len()];
        a + (b - a) * loc.t
    }

    /// Boundary walk from `from` forward to `to`, both endpoints included.
    fn walk(&self, from: RingLoc, to: RingLoc) -> Vec<Vector2<f64>> {
        debug_assert_ne!(from.edge, to.edge);
        let n = self.verts.len();
        let mut out = vec![self.loc_point(from)];
        let mut push = |out: &mut Vec<Vector2<f64>>, p: Vector2<f64>| {
            if (p - *out.last().unwrap()).norm() >= EPS_RING {
                out.push(p);
            }
        };
        let mut e = (from.edge + 1) % n;
        loop {
            push(&mut out, self.verts[e]);
            if e == to.edge {
                break;
            }
            e = (e + 1) % n;
        }
        push(&mut out, self.loc_point(to));
        out
    }

    /// Split the polygon by a chord into exactly two sub-polygons.
    ///
    /// Returns `None` when the chord does not bisect the region: an endpoint
    /// is not on the boundary (within `eps_point`), both endpoints lie on the
    /// same edge (chord along the boundary), the chord's midpoint falls
    /// outside (tangential touch), the chord exits and re-enters the piece
    /// (crossing some edge properly, so it cuts more than two regions), or a
    /// resulting ring is degenerate. Endpoints within `eps_point` of the ring
    /// are treated as exactly incident: the split uses their snapped boundary
    /// positions.
    pub fn split(&self, chord: &Chord, cfg: &GeomCfg) -> Option<(Polygon, Polygon)> {
        if chord.length() <= cfg.eps_point {
            return None;
        }
        let la = self.locate_on_boundary(chord.a, cfg.eps_point)?;
        let lb = self.locate_on_boundary(chord.b, cfg.eps_point)?;
        if la.edge == lb.edge {
            return None;
        }
        if !self.contains(chord.midpoint()) {
            return None;
        }
        // A chord leaving the piece mid-way crosses an edge strictly between
        // its endpoints; the incident edges cannot cross it properly.
        let (pa, pb) = (self.loc_point(la), self.loc_point(lb));
        for (p, q) in self.edges() {
            if segments_cross_properly(pa, pb, p, q, 1e-9) {
                return None;
            }
        }
        let first = Polygon::new(self.walk(la, lb))?;
        let second = Polygon::new(self.walk(lb, la))?;
        if first.area() <= cfg.eps_area || second.area() <= cfg.eps_area {
            return None;
        }
        Some((first, second))
    }
}
