use super::*;
use crate::bb::simplex;

fn reference_eval(tc: &EdgeCoeffs, b: [f64; 2]) -> f64 {
  simplex::eval(2, 3, tc, &b)
}

#[test]
fn bb3_matches_generic_de_casteljau() {
  let tc = [1.0, -2.0, 3.5, 0.25];
  for i in 0..=20 {
    let t = i as f64 / 20.0;
    let b = [1.0 - t, t];
    assert!((bb3(&tc, b) - reference_eval(&tc, b)).abs() < 1e-12);
  }
}

#[test]
fn bb3_at_corners_returns_corner_values() {
  let tc = [1.0, -2.0, 3.5, 0.25];
  assert_eq!(bb3(&tc, [1.0, 0.0]), tc[0]);
  assert_eq!(bb3(&tc, [0.0, 1.0]), tc[3]);
}

#[test]
fn dbb3_matches_central_finite_difference() {
  let tc = [1.0, -2.0, 3.5, 0.25];
  let a = [-1.0, 1.0];
  let h = 1e-5;
  for i in 1..10 {
    let t = i as f64 / 10.0;
    let b = [1.0 - t, t];
    let b_plus = [1.0 - (t + h), t + h];
    let b_minus = [1.0 - (t - h), t - h];
    let fd = (bb3(&tc, b_plus) - bb3(&tc, b_minus)) / (2.0 * h);
    let exact = dbb3(&tc, b, a);
    assert!((fd - exact).abs() < 1e-6, "t={t} fd={fd} exact={exact}");
  }
}

#[test]
fn d2bb3_is_second_derivative_of_dbb3() {
  let tc = [1.0, -2.0, 3.5, 0.25];
  let a = [-1.0, 1.0];
  let h = 1e-4;
  for i in 1..10 {
    let t = i as f64 / 10.0;
    let b = [1.0 - t, t];
    let b_plus = [1.0 - (t + h), t + h];
    let b_minus = [1.0 - (t - h), t - h];
    let fd = (dbb3(&tc, b_plus, a) - dbb3(&tc, b_minus, a)) / (2.0 * h);
    let exact = d2bb3(&tc, b, a);
    assert!((fd - exact).abs() < 1e-3, "t={t} fd={fd} exact={exact}");
  }
}

#[test]
fn interp_reproduces_corner_values_and_derivatives() {
  let f = [1.0, 4.0];
  let df = [2.0, -1.0];
  let tc = interp(f, df);
  assert_eq!(bb3(&tc, [1.0, 0.0]), f[0]);
  assert_eq!(bb3(&tc, [0.0, 1.0]), f[1]);
  assert!((dbb3(&tc, [1.0, 0.0], [-1.0, 1.0]) - df[0]).abs() < 1e-12);
  assert!((dbb3(&tc, [0.0, 1.0], [-1.0, 1.0]) - df[1]).abs() < 1e-12);
}
