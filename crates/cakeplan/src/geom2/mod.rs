//! 2D geometry kernel (vertex-ring polygons).
//!
//! Purpose
//! - Provide the small set of primitives the partition search needs: shoelace
//!   area, containment, chord splitting, and the boundary viewed as a closed
//!   curve (arc-length projection/interpolation, probe-line crossings).
//! - Keep the API minimal and numerically explicit (eps-aware via `GeomCfg`).
//!
//! Polygons here are simple vertex rings, not H-representations: the search
//! must handle non-convex cakes, and every operation works directly on the
//! ring.

mod boundary;
mod polygon;
pub mod rand;
mod types;
mod util;

pub use boundary::Boundary;
pub use polygon::Polygon;
pub use types::{Aabb, Chord, GeomCfg};
