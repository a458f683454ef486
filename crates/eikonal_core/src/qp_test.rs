use super::*;

fn brute_force_min(h: Hess2, g: [f64; 2]) -> f64 {
  // Dense grid search over the simplex as an independent check on the
  // analytic solver's objective value (not its argmin, which need not be
  // unique on degenerate inputs).
  let n = 400;
  let mut best = f64::INFINITY;
  for i in 0..=n {
    for j in 0..=(n - i) {
      let p1 = i as f64 / n as f64;
      let p2 = j as f64 / n as f64;
      let v = obj(&h, g, [p1, p2]);
      if v < best {
        best = v;
      }
    }
  }
  best
}

#[test]
fn interior_minimum_of_positive_definite_bowl() {
  // H = 2*I, centered at (0.2, 0.3), which lies inside the simplex.
  let h = [[2.0, 0.0], [0.0, 2.0]];
  let g = [-0.4, -0.6];
  let p = triqp2_solve(h, g);
  assert!((p[0] - 0.2).abs() < 1e-9);
  assert!((p[1] - 0.3).abs() < 1e-9);
}

#[test]
fn unconstrained_minimum_outside_simplex_is_clamped_to_boundary() {
  let h = [[2.0, 0.0], [0.0, 2.0]];
  let g = [-4.0, -4.0]; // unconstrained min at (2, 2), far outside
  let p = triqp2_solve(h, g);
  assert!(p[0] >= -1e-9 && p[1] >= -1e-9 && p[0] + p[1] <= 1.0 + 1e-9);
  let v = obj(&h, g, p);
  let brute = brute_force_min(h, g);
  assert!((v - brute).abs() < 1e-2, "got {v}, brute force {brute}");
}

#[test]
fn minimum_at_origin_corner() {
  let h = [[2.0, 0.0], [0.0, 2.0]];
  let g = [1.0, 1.0]; // unconstrained min at (-0.5,-0.5): infeasible, pulls to (0,0)
  let p = triqp2_solve(h, g);
  assert!(p[0].abs() < 1e-9 && p[1].abs() < 1e-9);
}

#[test]
fn minimum_on_hypotenuse_edge() {
  // Objective decreases along p1 + p2 but is symmetric in p1 <-> p2, so the
  // constrained minimum sits at the midpoint of the p1 + p2 = 1 edge.
  let h = [[2.0, 1.0], [1.0, 2.0]];
  let g = [-3.0, -3.0];
  let p = triqp2_solve(h, g);
  assert!((p[0] + p[1] - 1.0).abs() < 1e-9);
  assert!((p[0] - p[1]).abs() < 1e-6);
}

#[test]
fn solution_always_lies_within_simplex() {
  let cases: [([[f64; 2]; 2], [f64; 2]); 4] = [
    ([[3.0, 0.5], [0.5, 1.0]], [5.0, -5.0]),
    ([[1.0, -0.5], [-0.5, 1.0]], [0.1, 0.2]),
    ([[4.0, 0.0], [0.0, 4.0]], [-10.0, -10.0]),
    ([[1.0, 0.9], [0.9, 1.0]], [2.0, 2.0]),
  ];
  for (h, g) in cases {
    let p = triqp2_solve(h, g);
    assert!(p[0] >= -1e-9, "{p:?}");
    assert!(p[1] >= -1e-9, "{p:?}");
    assert!(p[0] + p[1] <= 1.0 + 1e-9, "{p:?}");
  }
}

#[test]
fn matches_brute_force_objective_on_random_like_cases() {
  let cases: [([[f64; 2]; 2], [f64; 2]); 3] = [
    ([[2.3, 0.4], [0.4, 1.7]], [0.3, -1.1]),
    ([[1.0, 0.2], [0.2, 3.0]], [1.5, 0.2]),
    ([[5.0, -1.0], [-1.0, 2.0]], [-0.2, -0.3]),
  ];
  for (h, g) in cases {
    let p = triqp2_solve(h, g);
    let v = obj(&h, g, p);
    let brute = brute_force_min(h, g);
    assert!(v <= brute + 1e-2, "analytic {v} should not exceed brute force {brute}");
  }
}
