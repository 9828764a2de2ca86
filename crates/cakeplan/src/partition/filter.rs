//! Minimum-area feasibility filter over raw candidates.

use crate::geom2::{Chord, GeomCfg, Polygon};

/// Keep candidates whose trial split yields exactly two sub-polygons, each at
/// least `min_piece_area` (the smallest share any sub-piece must eventually
/// host). Generation order is preserved; it decides which feasible plan the
/// search finds first.
pub fn filter_chords(
    piece: &Polygon,
    candidates: Vec<Chord>,
    min_piece_area: f64,
    geom: &GeomCfg,
) -> Vec<Chord> {
    candidates
        .into_iter()
        .filter(|chord| match piece.split(chord, geom) {
            Some((p1, p2)) => p1.area() >= min_piece_area && p2.area() >= min_piece_area,
            None => false,
        })
        .collect()
}
