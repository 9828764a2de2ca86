//! Equal-area cake partitioning.
//!
//! Given a simple polygon (the cake) and a child count N, the library searches
//! for a sequence of straight chords that divides the cake into N connected
//! pieces, each within a configured tolerance of the equal share.
//!
//! Layout
//! - `geom2`: polygon/boundary primitives (area, splitting, probe-line
//!   intersection, curve projection).
//! - `partition`: candidate generation, feasibility filtering, and the
//!   recursive depth-first search over (chord, count-split) assignments.

pub mod geom2;
pub mod partition;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Aabb, Boundary, Chord, GeomCfg, Polygon};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cake_radial, CakeCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{Aabb, Boundary, Chord, GeomCfg, Polygon};
    pub use crate::partition::{
        plan_cuts, ChordOracle, CutPlan, InteriorOracle, InvalidInput, OracleError, SearchCfg,
    };
    pub use nalgebra::Vector2 as Vec2;
}
