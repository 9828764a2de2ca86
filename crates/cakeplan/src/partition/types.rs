//! Configuration, plan, oracle, and error types for the partition search.

use std::fmt;
use std::time::Instant;

use nalgebra::Vector2;

use crate::geom2::{Chord, GeomCfg, Polygon};

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Probe lines per axis in the candidate sweep. Higher finds more chords
    /// (including near-misses on irregular boundaries) at higher search cost.
    pub sweep_resolution: usize,
    /// Absolute area slack, per final piece, allowed against the equal share.
    pub area_tolerance: f64,
    /// Optional deadline checked at the top of every recursive call; expiry
    /// surfaces as the ordinary "no plan" outcome.
    pub deadline: Option<Instant>,
    pub geom: GeomCfg,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            sweep_resolution: 100,
            area_tolerance: 0.5,
            deadline: None,
            geom: GeomCfg::default(),
        }
    }
}

/// An ordered sequence of chords, each in the original cake's frame.
///
/// Chords act on pairwise disjoint regions, so applying them in any order
/// reconstructs the same final pieces; the stored order is parent-before-child
/// as the search composed them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CutPlan {
    pub chords: Vec<Chord>,
}

impl CutPlan {
    #[inline]
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

/// Caller contract violations detected at the entry point, before recursion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// Requested zero final pieces.
    NoChildren,
    /// The cake ring is degenerate (too few vertices or vanishing area).
    DegenerateCake,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NoChildren => write!(f, "child count must be at least 1"),
            InvalidInput::DegenerateCake => {
                write!(f, "cake polygon is degenerate (needs 3+ vertices and positive area)")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Failure raised by a validity oracle. The search treats any oracle error as
/// "chord rejected"; the payload exists only for diagnostics.
#[derive(Clone, Debug)]
pub struct OracleError(pub String);

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chord oracle failed: {}", self.0)
    }
}

impl std::error::Error for OracleError {}

/// External cake-validity collaborator: decides whether a straight segment
/// between two boundary points lies entirely within permissible cake
/// material. The search treats this strictly as an oracle.
pub trait ChordOracle {
    fn is_valid_chord(
        &self,
        a: Vector2<f64>,
        b: Vector2<f64>,
    ) -> Result<bool, OracleError>;
}

/// Default oracle: a chord is valid when its open segment stays inside a
/// fixed cake polygon. This is what the game's validity rule reduces to for a
/// cake without excluded material.
#[derive(Clone, Debug)]
pub struct InteriorOracle {
    cake: Polygon,
    geom: GeomCfg,
}

impl InteriorOracle {
    pub fn new(cake: Polygon, geom: GeomCfg) -> Self {
        Self { cake, geom }
    }
}

impl ChordOracle for InteriorOracle {
    fn is_valid_chord(
        &self,
        a: Vector2<f64>,
        b: Vector2<f64>,
    ) -> Result<bool, OracleError> {
        Ok(self.cake.chord_inside(a, b, &self.geom))
    }
}
