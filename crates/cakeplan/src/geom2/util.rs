use nalgebra::Vector2;

/// 2D cross product of `b - a` and `c - a`.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
pub(crate) fn perp_dot(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Closest point on segment `p`..`q` to `x`, with its parameter `t` in [0, 1].
pub(crate) fn project_on_segment(
    p: Vector2<f64>,
    q: Vector2<f64>,
    x: Vector2<f64>,
) -> (f64, Vector2<f64>) {
    let d = q - p;
    let len2 = d.norm_squared();
    if len2 <= 0.0 {
        return (0.0, p);
    }
    let t = ((x - p).dot(&d) / len2).clamp(0.0, 1.0);
    (t, p + d * t)
}

/// Intersection of the infinite line `o + u·dir` with segment `p`..`q`.
///
/// Returns `(u, t)` with `t` the segment parameter, or `None` when the line
/// and segment are parallel (including collinear overlap, which callers skip:
/// only point intersections are meaningful there).
pub(crate) fn line_segment_params(
    o: Vector2<f64>,
    dir: Vector2<f64>,
    p: Vector2<f64>,
    q: Vector2<f64>,
) -> Option<(f64, f64)> {
    let s = q - p;
    let denom = perp_dot(dir, s);
    if denom.abs() < 1e-12 {
        return None;
    }
    let w = p - o;
    let u = perp_dot(w, s) / denom;
    let t = perp_dot(w, dir) / denom;
    Some((u, t))
}

/// Whether two segments cross properly: the crossing point is strictly
/// interior to both (beyond `eps` of every endpoint, in parameter space).
/// Touching and collinear configurations do not count.
pub(crate) fn segments_cross_properly(
    a0: Vector2<f64>,
    a1: Vector2<f64>,
    b0: Vector2<f64>,
    b1: Vector2<f64>,
    eps: f64,
) -> bool {
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = perp_dot(r, s);
    if denom.abs() < 1e-12 {
        return false;
    }
    let w = b0 - a0;
    let ta = perp_dot(w, s) / denom;
    let tb = perp_dot(w, r) / denom;
    ta > eps && ta < 1.0 - eps && tb > eps && tb < 1.0 - eps
}

/// Andrew's monotone chain convex hull (returns hull in CCW order).
pub(crate) fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        None
    } else {
        Some(hull)
    }
}
