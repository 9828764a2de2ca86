//! Candidate chord generation by probe-line sweeps.
//!
//! A discretized approximation: evenly spaced vertical and horizontal probe
//! lines across the piece's bounding box, intersected with the boundary.
//! Every unordered pair of crossing points on one probe is a candidate, kept
//! only if the validity oracle accepts the full chord. The resolution trades
//! completeness against cost; highly irregular boundaries may admit feasible
//! chords no probe captures.

use nalgebra::Vector2;

use crate::geom2::{Boundary, Chord, Polygon};

use super::types::{ChordOracle, SearchCfg};

/// Enumerate candidate chords for `piece`, in deterministic sweep order:
/// vertical probes left-to-right, then horizontal probes bottom-to-top,
/// crossing pairs ordered along each probe line.
pub fn candidate_chords<O: ChordOracle>(
    piece: &Polygon,
    oracle: &O,
    cfg: &SearchCfg,
) -> Vec<Chord> {
    let bounds = piece.bounds();
    let boundary = Boundary::of(piece);
    let res = cfg.sweep_resolution.max(2);
    let mut out = Vec::new();

    // Vertical sweep: probes x = const, direction +y.
    sweep(
        &boundary,
        oracle,
        res,
        bounds.min.x,
        bounds.width(),
        |x| (Vector2::new(x, 0.0), Vector2::new(0.0, 1.0)),
        &mut out,
    );
    // Horizontal sweep: probes y = const, direction +x.
    sweep(
        &boundary,
        oracle,
        res,
        bounds.min.y,
        bounds.height(),
        |y| (Vector2::new(0.0, y), Vector2::new(1.0, 0.0)),
        &mut out,
    );
    out
}

fn sweep<O: ChordOracle>(
    boundary: &Boundary,
    oracle: &O,
    res: usize,
    start: f64,
    extent: f64,
    probe: impl Fn(f64) -> (Vector2<f64>, Vector2<f64>),
    out: &mut Vec<Chord>,
) {
    if extent <= 0.0 {
        return;
    }
    let step = extent / (res - 1) as f64;
    for i in 0..res {
        let (origin, dir) = probe(start + step * i as f64);
        let points = boundary.line_crossings(origin, dir);
        if points.len() < 2 {
            continue;
        }
        for j in 0..points.len() {
            for k in (j + 1)..points.len() {
                match oracle.is_valid_chord(points[j], points[k]) {
                    Ok(true) => out.push(Chord::new(points[j], points[k])),
                    Ok(false) => {}
                    Err(err) => {
                        // Oracle trouble rejects the chord; never aborts the sweep.
                        tracing::debug!(%err, "oracle failure, chord rejected");
                    }
                }
            }
        }
    }
}
