use super::*;
use crate::slowness::Unit;

fn flat_face() -> [DVec3; 3] {
  [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(0.0, 1.0, 0.0),
  ]
}

#[test]
fn recovers_perpendicular_distance_for_zero_boundary_jets() {
  let xs = flat_face();
  let x = DVec3::new(0.25, 0.25, 1.0);
  let v = |p: DVec3| FaceVertex { x: p, f: 0.0, df: DVec3::ZERO };

  let mut utetra = UTetra::new(x, v(xs[0]), v(xs[1]), v(xs[2]), &Unit);
  utetra.solve();

  // With T == 0 everywhere on the face, the minimum is the perpendicular
  // distance from x down to the plane z = 0, at the point (0.25, 0.25, 0),
  // which lies strictly inside the triangle (barycentric all positive).
  assert!((utetra.value() - 1.0).abs() < 1e-6);
  let lam = utetra.lambda();
  let b0 = 1.0 - lam[0] - lam[1];
  assert!(b0 > 0.0 && lam[0] > 0.0 && lam[1] > 0.0);
}

#[test]
fn causality_requires_all_three_angles_non_negative() {
  let xs = flat_face();
  let v = |p: DVec3| FaceVertex { x: p, f: 1.0, df: DVec3::ZERO };
  // x directly above the triangle: all three corner-to-x directions point
  // "up and outward" from a shared hemisphere, so pairwise angles are
  // non-negative.
  let x_above = DVec3::new(0.25, 0.25, 2.0);
  let utetra = UTetra::new(x_above, v(xs[0]), v(xs[1]), v(xs[2]), &Unit);
  assert!(utetra.is_causal());
}

#[test]
fn degenerate_when_update_point_is_coplanar_with_face() {
  let xs = flat_face();
  let v = |p: DVec3| FaceVertex { x: p, f: 0.0, df: DVec3::ZERO };
  let x_in_plane = DVec3::new(0.3, 0.3, 0.0);
  let utetra = UTetra::new(x_in_plane, v(xs[0]), v(xs[1]), v(xs[2]), &Unit);
  assert!(utetra.is_degenerate());
}

#[test]
fn solved_value_never_exceeds_any_corner_plus_euclidean_leg() {
  let xs = flat_face();
  let f = [1.0, 1.5, 2.0];
  let df = [
    DVec3::new(0.1, 0.0, 0.0),
    DVec3::new(0.0, 0.1, 0.0),
    DVec3::new(0.1, 0.1, 0.0),
  ];
  let x = DVec3::new(0.4, 0.2, 1.5);
  let v = |i: usize| FaceVertex { x: xs[i], f: f[i], df: df[i] };

  let mut utetra = UTetra::new(x, v(0), v(1), v(2), &Unit);
  utetra.solve();

  for i in 0..3 {
    let corner_bound = f[i] + (x - xs[i]).length();
    assert!(
      utetra.value() <= corner_bound + 1e-6,
      "value {} exceeds corner {i} bound {corner_bound}",
      utetra.value()
    );
  }
}

#[test]
fn converges_within_iteration_cap() {
  let xs = flat_face();
  let v = |p: DVec3| FaceVertex { x: p, f: 0.5, df: DVec3::new(0.05, 0.05, 0.0) };
  let x = DVec3::new(0.1, 0.6, 0.8);
  let mut utetra = UTetra::new(x, v(xs[0]), v(xs[1]), v(xs[2]), &Unit);
  utetra.solve();
  assert!(utetra.num_iter() < MAX_ITER);
}

#[test]
fn lagrange_multipliers_are_zero_for_non_active_constraints_at_interior_minimum() {
  let xs = flat_face();
  let v = |p: DVec3| FaceVertex { x: p, f: 0.0, df: DVec3::ZERO };
  let x = DVec3::new(0.3, 0.3, 1.0);
  let mut utetra = UTetra::new(x, v(xs[0]), v(xs[1]), v(xs[2]), &Unit);
  utetra.solve();

  let lam = utetra.lambda();
  let b0 = 1.0 - lam[0] - lam[1];
  assert!(b0 > 1e-6 && lam[0] > 1e-6 && lam[1] > 1e-6);
  assert_eq!(utetra.lagrange_multipliers(), [0.0, 0.0, 0.0]);
}
