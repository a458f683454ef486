use super::*;
use crate::slowness::Unit;

#[test]
fn recovers_exact_euclidean_distance_for_zero_boundary_jets() {
  // T = 0 everywhere on the edge (both endpoints at distance-0 "sources"
  // with zero gradient): the update should just minimize Euclidean
  // distance from x to the segment [x0, x1], which for x directly above
  // the segment's midpoint is the perpendicular distance.
  let x0 = DVec3::new(0.0, 0.0, 0.0);
  let x1 = DVec3::new(2.0, 0.0, 0.0);
  let x = DVec3::new(1.0, 1.0, 0.0);
  let e0 = EdgeEndpoint { x: x0, f: 0.0, df: DVec3::ZERO };
  let e1 = EdgeEndpoint { x: x1, f: 0.0, df: DVec3::ZERO };

  let mut utri = UTri::new(x, e0, e1, &Unit);
  utri.solve(&Unit);

  assert!((utri.lambda() - 0.5).abs() < 1e-6);
  assert!((utri.value() - 1.0).abs() < 1e-6);
}

#[test]
fn approximates_point_source_travel_time_along_straight_edge() {
  // Point source at the origin: f(p) = |p|, gradient = p/|p|. A cubic
  // Hermite edge built from exact boundary jets only approximates this
  // curved field away from the boundary, but the update's value must
  // still land within a modest fraction of the true distance, and must
  // respect the same lambda = 0.5 symmetry the configuration has.
  let src = DVec3::ZERO;
  let a = DVec3::new(1.0, 0.0, 0.0);
  let b = DVec3::new(0.0, 1.0, 0.0);
  let f = |p: DVec3| (p - src).length();
  let grad = |p: DVec3| (p - src) / (p - src).length();

  let e0 = EdgeEndpoint { x: a, f: f(a), df: grad(a) };
  let e1 = EdgeEndpoint { x: b, f: f(b), df: grad(b) };
  let x = DVec3::new(0.5, 0.5, 0.0);

  let mut utri = UTri::new(x, e0, e1, &Unit);
  utri.solve(&Unit);

  assert!((utri.lambda() - 0.5).abs() < 1e-6);
  let expect = f(x);
  assert!(
    (utri.value() - expect).abs() < 0.1,
    "got {}, expect {}",
    utri.value(),
    expect
  );
}

#[test]
fn causality_flags_non_causal_configuration() {
  // x sits on the same side such that both edge endpoints are behind it
  // along nearly the same direction: cos(d0, d1) close to 1, causal.
  let x = DVec3::new(0.0, -1.0, 0.0);
  let e0 = EdgeEndpoint { x: DVec3::new(-0.1, 0.0, 0.0), f: 1.0, df: DVec3::new(0.0, -1.0, 0.0) };
  let e1 = EdgeEndpoint { x: DVec3::new(0.1, 0.0, 0.0), f: 1.0, df: DVec3::new(0.0, -1.0, 0.0) };
  let utri = UTri::new(x, e0, e1, &Unit);
  assert!(utri.is_causal());

  // x sits between the two endpoints in a fold-back configuration: the
  // two corner-to-x directions point in opposite directions.
  let x2 = DVec3::new(0.0, 0.0, 0.0);
  let e0b = EdgeEndpoint { x: DVec3::new(-1.0, 0.0, 0.0), f: 1.0, df: DVec3::ZERO };
  let e1b = EdgeEndpoint { x: DVec3::new(1.0, 0.0, 0.0), f: 1.0, df: DVec3::ZERO };
  let utri2 = UTri::new(x2, e0b, e1b, &Unit);
  assert!(!utri2.is_causal());
}

#[test]
fn solved_value_never_exceeds_either_corner_plus_euclidean_leg() {
  // Sanity bound: the optimal F(lambda*) must be <= F at either endpoint
  // (lambda = 0 or 1), since those are feasible points in the same
  // minimization.
  let x0 = DVec3::new(0.0, 0.0, 0.0);
  let x1 = DVec3::new(3.0, 1.0, 0.0);
  let x = DVec3::new(1.0, 2.0, 0.5);
  let e0 = EdgeEndpoint { x: x0, f: 2.0, df: DVec3::new(0.3, 0.1, 0.0) };
  let e1 = EdgeEndpoint { x: x1, f: 2.5, df: DVec3::new(0.2, 0.2, 0.0) };

  let mut utri = UTri::new(x, e0, e1, &Unit);
  utri.solve(&Unit);

  let f_at_0 = e0.f + (x - x0).length();
  let f_at_1 = e1.f + (x - x1).length();
  assert!(utri.value() <= f_at_0 + 1e-9);
  assert!(utri.value() <= f_at_1 + 1e-9);
}
