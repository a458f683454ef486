use super::*;

#[test]
fn finds_root_of_simple_polynomial() {
  // f(t) = t^2 - 2, root at sqrt(2)
  let root = hybrid(|t| t * t - 2.0, 0.0, 2.0);
  assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);
}

#[test]
fn finds_root_of_cubic_like_objective() {
  // mimics an edge-update derivative: has one interior root on [0, 1]
  let f = |t: f64| 3.0 * t * t - 2.0 * t - 0.2;
  let root = hybrid(f, 0.0, 1.0);
  assert!(f(root).abs() < 1e-8);
  assert!((0.0..=1.0).contains(&root));
}

#[test]
fn returns_better_endpoint_when_no_sign_change() {
  // f is strictly positive on [a, b]; no interior root exists.
  let f = |t: f64| t * t + 1.0;
  let root = hybrid(f, -1.0, 2.0);
  assert!(root == -1.0 || root == 2.0);
  assert!(f(root) <= f(-1.0).min(f(2.0)) + 1e-12);
}

#[test]
fn exact_root_at_endpoint_is_returned_immediately() {
  let root = hybrid(|t| t - 1.0, 1.0, 3.0);
  assert_eq!(root, 1.0);
  let root = hybrid(|t| t - 3.0, 1.0, 3.0);
  assert_eq!(root, 3.0);
}

#[test]
fn handles_non_monotone_function_with_bracketed_root() {
  // f has a local wiggle but a single sign change on [0, 1].
  let f = |t: f64| (4.0 * t - 1.0) * (t - 0.8) * (t - 0.9) + 0.01 * (10.0 * t).sin();
  let root = hybrid(f, 0.0, 0.5);
  assert!(f(root).abs() < 1e-6);
}
