//! Depth-first partition search with backtracking over count assignments.

use crate::geom2::{Chord, Polygon};

use super::candidates::candidate_chords;
use super::filter::filter_chords;
use super::types::{ChordOracle, CutPlan, InvalidInput, SearchCfg};

/// Search for a cut plan dividing `cake` into `children` connected pieces of
/// near-equal area.
///
/// Returns `Err` only for caller contract violations (zero children, a
/// degenerate cake). `Ok(None)` means no feasible plan was found at this
/// sweep resolution; a finer resolution (or a different oracle) might still
/// admit one, and the two cases are deliberately not distinguished.
pub fn plan_cuts<O: ChordOracle>(
    cake: &Polygon,
    children: usize,
    oracle: &O,
    cfg: &SearchCfg,
) -> Result<Option<CutPlan>, InvalidInput> {
    if children < 1 {
        return Err(InvalidInput::NoChildren);
    }
    let total = cake.area();
    if cake.verts().len() < 3 || total <= cfg.geom.eps_area {
        return Err(InvalidInput::DegenerateCake);
    }
    let ideal = total / children as f64;
    let dfs = Dfs {
        oracle,
        cfg,
        // Smallest area any sub-piece assigned one final piece may have,
        // fixed once against the whole cake.
        min_piece_area: ideal - cfg.area_tolerance,
    };
    tracing::debug!(children, total_area = total, ideal, "partition search start");
    Ok(dfs.recur(cake, children).map(|chords| CutPlan { chords }))
}

/// Shared context for the recursion: the oracle, tunables, and the per-piece
/// minimum area derived once at entry.
struct Dfs<'a, O: ChordOracle> {
    oracle: &'a O,
    cfg: &'a SearchCfg,
    min_piece_area: f64,
}

impl<O: ChordOracle> Dfs<'_, O> {
    /// Find cuts dividing `piece` into `children` pieces, or `None`.
    ///
    /// Termination: every recursive call receives a strictly smaller count
    /// (`k` ranges over 1..children), so depth is bounded by the child count.
    fn recur(&self, piece: &Polygon, children: usize) -> Option<Vec<Chord>> {
        if let Some(deadline) = self.cfg.deadline {
            if std::time::Instant::now() >= deadline {
                return None;
            }
        }
        if children == 1 {
            return Some(Vec::new());
        }

        let raw = candidate_chords(piece, self.oracle, self.cfg);
        let valid = filter_chords(piece, raw, self.min_piece_area, &self.cfg.geom);
        tracing::debug!(children, candidates = valid.len(), "expanding piece");

        for chord in &valid {
            let Some((sub_a, sub_b)) = piece.split(chord, &self.cfg.geom) else {
                continue;
            };
            let (area_a, area_b) = (sub_a.area(), sub_b.area());
            // Try every assignment of final-piece counts to the two sides.
            for k in 1..children {
                let need_a = self.min_piece_area * k as f64;
                let need_b = self.min_piece_area * (children - k) as f64;
                if area_a < need_a || area_b < need_b {
                    continue;
                }
                let Some(cuts_a) = self.recur(&sub_a, k) else {
                    continue;
                };
                let Some(cuts_b) = self.recur(&sub_b, children - k) else {
                    continue;
                };
                // First full success wins; compose parent-before-children.
                let mut plan = Vec::with_capacity(1 + cuts_a.len() + cuts_b.len());
                plan.push(*chord);
                plan.extend(cuts_a);
                plan.extend(cuts_b);
                return Some(plan);
            }
        }
        None
    }
}
