//! Random convex cakes (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for convex cake polygons used by
//!   property tests and benchmarks. Determinism uses a replay token
//!   `(seed, index)` mixed into a single RNG, so any failing draw can be
//!   reproduced from its token alone.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the convex hull, then uniformly scale so the cake
//!   has the requested area.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;
use super::util::convex_hull;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CakeCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `1 + u`, with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Target polygon area after scaling. Must be positive.
    pub target_area: f64,
}

impl Default for CakeCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            target_area: 100.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex cake via radial jitter + convex hull, scaled to
/// `cfg.target_area`. `None` only for degenerate configurations (all points
/// collapsing under extreme jitter).
pub fn draw_cake_radial(cfg: CakeCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let mut pts: Vec<Vector2<f64>> = Vec::with_capacity(n);
    for k in 0..n {
        let angle = (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let r = 1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj;
        pts.push(Vector2::new(r * angle.cos(), r * angle.sin()));
    }
    let hull = convex_hull(&pts)?;
    let poly = Polygon::new(hull)?;
    let scale = (cfg.target_area.max(1e-9) / poly.area()).sqrt();
    Polygon::new(poly.verts().iter().map(|p| p * scale).collect())
}
