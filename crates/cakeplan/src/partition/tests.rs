use std::time::Instant;

use nalgebra::Vector2;
use proptest::prelude::*;

use super::*;
use crate::geom2::rand::{draw_cake_radial, CakeCfg, ReplayToken};
use crate::geom2::{GeomCfg, Polygon};

fn square10() -> Polygon {
    Polygon::rectangle(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0)).unwrap()
}

fn l_shape() -> Polygon {
    Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
        Vector2::new(10.0, 5.0),
        Vector2::new(5.0, 5.0),
        Vector2::new(5.0, 10.0),
        Vector2::new(0.0, 10.0),
    ])
    .unwrap()
}

/// Apply a plan chord by chord: each chord splits exactly one current piece
/// (chords act on disjoint regions, stored parent-before-child).
fn apply_plan(cake: &Polygon, plan: &CutPlan, geom: &GeomCfg) -> Vec<Polygon> {
    let mut pieces = vec![cake.clone()];
    for chord in &plan.chords {
        let hit = pieces
            .iter()
            .position(|p| p.split(chord, geom).is_some())
            .expect("chord must split one of the current pieces");
        let (a, b) = pieces[hit].split(chord, geom).unwrap();
        pieces.swap_remove(hit);
        pieces.push(a);
        pieces.push(b);
    }
    pieces
}

/// Oracle that rejects every chord: models a cake with no permissible cuts.
struct RejectAll;
impl ChordOracle for RejectAll {
    fn is_valid_chord(&self, _a: Vector2<f64>, _b: Vector2<f64>) -> Result<bool, OracleError> {
        Ok(false)
    }
}

/// Oracle that always fails: the search must treat this as rejection.
struct Broken;
impl ChordOracle for Broken {
    fn is_valid_chord(&self, _a: Vector2<f64>, _b: Vector2<f64>) -> Result<bool, OracleError> {
        Err(OracleError("backend unavailable".into()))
    }
}

#[test]
fn square_four_children() {
    let cake = square10();
    let cfg = SearchCfg::default();
    let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
    let plan = plan_cuts(&cake, 4, &oracle, &cfg)
        .unwrap()
        .expect("square for 4 is feasible");
    assert_eq!(plan.len(), 3);
    let pieces = apply_plan(&cake, &plan, &cfg.geom);
    assert_eq!(pieces.len(), 4);
    let total: f64 = pieces.iter().map(Polygon::area).sum();
    assert!((total - 100.0).abs() < 1e-6);
    for p in &pieces {
        assert!(
            (p.area() - 25.0).abs() <= cfg.area_tolerance + 1e-6,
            "piece area {} outside 25 ± {}",
            p.area(),
            cfg.area_tolerance
        );
    }
}

#[test]
fn single_child_returns_empty_plan() {
    let cake = square10();
    let cfg = SearchCfg::default();
    let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
    let plan = plan_cuts(&cake, 1, &oracle, &cfg).unwrap().unwrap();
    assert!(plan.is_empty());
}

#[test]
fn invalid_inputs_fail_fast() {
    let cfg = SearchCfg::default();
    let triangle = Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(0.0, 3.0),
    ])
    .unwrap();
    let oracle = InteriorOracle::new(triangle.clone(), cfg.geom);
    assert_eq!(
        plan_cuts(&triangle, 0, &oracle, &cfg).unwrap_err(),
        InvalidInput::NoChildren
    );
    // Area above the constructor's floor but below the search's epsilon.
    let sliver = Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.5, 4e-10),
    ])
    .unwrap();
    let oracle = InteriorOracle::new(sliver.clone(), cfg.geom);
    assert_eq!(
        plan_cuts(&sliver, 2, &oracle, &cfg).unwrap_err(),
        InvalidInput::DegenerateCake
    );
}

#[test]
fn triangle_two_children() {
    let cake = Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(12.0, 0.0),
        Vector2::new(0.0, 12.0),
    ])
    .unwrap();
    let cfg = SearchCfg::default();
    let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
    let plan = plan_cuts(&cake, 2, &oracle, &cfg)
        .unwrap()
        .expect("triangle for 2 is feasible");
    assert_eq!(plan.len(), 1);
    let pieces = apply_plan(&cake, &plan, &cfg.geom);
    assert_eq!(pieces.len(), 2);
    let ideal = cake.area() / 2.0;
    for p in &pieces {
        assert!((p.area() - ideal).abs() <= cfg.area_tolerance + 1e-6);
    }
}

#[test]
fn l_shape_three_children() {
    let cake = l_shape();
    let cfg = SearchCfg::default();
    let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
    let plan = plan_cuts(&cake, 3, &oracle, &cfg)
        .unwrap()
        .expect("L-shape for 3 is feasible");
    assert_eq!(plan.len(), 2);
    let pieces = apply_plan(&cake, &plan, &cfg.geom);
    assert_eq!(pieces.len(), 3);
    for p in &pieces {
        assert!((p.area() - 25.0).abs() <= cfg.area_tolerance + 1e-6);
    }
}

#[test]
fn no_candidates_is_infeasible_not_an_error() {
    let cake = square10();
    let cfg = SearchCfg::default();
    // Infeasibility is monotone in the child count: once the oracle admits
    // nothing, every N >= 2 stays infeasible.
    for children in 2..6 {
        assert_eq!(plan_cuts(&cake, children, &RejectAll, &cfg).unwrap(), None);
    }
    // N = 1 needs no cut at all, so even the reject-all oracle succeeds.
    assert!(plan_cuts(&cake, 1, &RejectAll, &cfg).unwrap().is_some());
}

#[test]
fn tight_tolerance_infeasibility_is_monotone() {
    let cake = square10();
    let cfg = SearchCfg {
        area_tolerance: 0.05,
        ..SearchCfg::default()
    };
    let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
    // The sweep grid steps the square's chord areas by 100/99, so no
    // axis-aligned candidate lands inside the ±0.05 windows; raising the
    // child count only tightens every window further.
    for children in 2..5 {
        assert_eq!(plan_cuts(&cake, children, &oracle, &cfg).unwrap(), None);
    }
    // Same cake and grid, wider window: feasible again.
    let loose = SearchCfg {
        area_tolerance: 0.5,
        ..SearchCfg::default()
    };
    assert!(plan_cuts(&cake, 3, &oracle, &loose).unwrap().is_some());
}

#[test]
fn oracle_failure_is_rejection_not_abort() {
    let cake = square10();
    let cfg = SearchCfg::default();
    assert_eq!(plan_cuts(&cake, 3, &Broken, &cfg).unwrap(), None);
}

#[test]
fn expired_deadline_reports_no_plan() {
    let cake = square10();
    let cfg = SearchCfg {
        deadline: Some(Instant::now()),
        ..SearchCfg::default()
    };
    let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
    assert_eq!(plan_cuts(&cake, 2, &oracle, &cfg).unwrap(), None);
}

#[test]
fn candidate_generation_respects_oracle_order() {
    let cake = square10();
    let cfg = SearchCfg {
        sweep_resolution: 11,
        ..SearchCfg::default()
    };
    let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
    let raw = candidate_chords(&cake, &oracle, &cfg);
    assert!(!raw.is_empty());
    // Vertical sweep comes first: the earliest candidates are x = const.
    let first = raw[0];
    assert!((first.a.x - first.b.x).abs() < 1e-9);
    // Filtering to N = 2 shares keeps only balanced-enough chords.
    let min_area = cake.area() / 2.0 - cfg.area_tolerance;
    let kept = filter_chords(&cake, raw.clone(), min_area, &cfg.geom);
    assert!(kept.len() < raw.len());
    for chord in &kept {
        let (a, b) = cake.split(chord, &cfg.geom).unwrap();
        assert!(a.area() >= min_area && b.area() >= min_area);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// For any returned plan: N-1 chords, N connected pieces, total area
    /// conserved, every piece at least the guaranteed minimum share.
    #[test]
    fn random_convex_cakes_satisfy_plan_invariants(index in 0u64..256, children in 1usize..5) {
        let cake = draw_cake_radial(CakeCfg::default(), ReplayToken { seed: 7, index })
            .expect("sampler yields a cake");
        let cfg = SearchCfg::default();
        let oracle = InteriorOracle::new(cake.clone(), cfg.geom);
        if let Some(plan) = plan_cuts(&cake, children, &oracle, &cfg).unwrap() {
            prop_assert_eq!(plan.len(), children - 1);
            let pieces = apply_plan(&cake, &plan, &cfg.geom);
            prop_assert_eq!(pieces.len(), children);
            let total: f64 = pieces.iter().map(Polygon::area).sum();
            prop_assert!((total - cake.area()).abs() < 1e-6);
            let ideal = cake.area() / children as f64;
            for p in &pieces {
                // The k-pruning guarantees the lower bound exactly; the upper
                // deviation is bounded by the siblings' combined slack.
                prop_assert!(p.area() >= ideal - cfg.area_tolerance - 1e-6);
                prop_assert!(
                    p.area() <= ideal + cfg.area_tolerance * (children - 1) as f64 + 1e-6
                );
            }
        }
    }
}
