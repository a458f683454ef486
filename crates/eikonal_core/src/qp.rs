//! Analytic solver for a 2-variable quadratic program constrained to the
//! standard 2-simplex.
//!
//! [`crate::utetra`]'s projected Newton step needs, at every iteration, the
//! minimizer of the local quadratic model of the objective restricted to
//! barycentric coordinates `p = (lambda1, lambda2)` with `lambda1 >= 0`,
//! `lambda2 >= 0`, `lambda1 + lambda2 <= 1` (`lambda0 = 1 - lambda1 -
//! lambda2` is implicit). Rather than an iterative QP solver, the KKT
//! system is enumerated directly: the unconstrained minimizer, each of the
//! 3 boundary edges, and each of the 3 corners are each checked against
//! their Lagrange multiplier sign conditions, and the cheapest candidate
//! that satisfies its conditions is returned.

/// Symmetric 2x2 Hessian of the quadratic model, `[[h00, h01], [h01,
/// h11]]`.
pub type Hess2 = [[f64; 2]; 2];

fn obj(h: &Hess2, g: [f64; 2], p: [f64; 2]) -> f64 {
  0.5 * (h[0][0] * p[0] * p[0] + 2.0 * h[0][1] * p[0] * p[1] + h[1][1] * p[1] * p[1])
    + g[0] * p[0]
    + g[1] * p[1]
}

fn grad(h: &Hess2, g: [f64; 2], p: [f64; 2]) -> [f64; 2] {
  [
    h[0][0] * p[0] + h[0][1] * p[1] + g[0],
    h[0][1] * p[0] + h[1][1] * p[1] + g[1],
  ]
}

const EPS: f64 = 1e-12;

/// Minimize `0.5 p^T H p + g^T p` over the 2-simplex `{p1 >= 0, p2 >= 0,
/// p1 + p2 <= 1}`.
pub fn triqp2_solve(h: Hess2, g: [f64; 2]) -> [f64; 2] {
  let mut best: Option<([f64; 2], f64)> = None;
  let mut consider = |p: [f64; 2]| {
    let v = obj(&h, g, p);
    if best.map_or(true, |(_, bv)| v < bv) {
      best = Some((p, v));
    }
  };

  // Case 1: interior stationary point.
  let det = h[0][0] * h[1][1] - h[0][1] * h[0][1];
  if det.abs() > EPS {
    let p1 = (h[0][1] * g[1] - h[1][1] * g[0]) / det;
    let p2 = (h[0][1] * g[0] - h[0][0] * g[1]) / det;
    if p1 >= -EPS && p2 >= -EPS && p1 + p2 <= 1.0 + EPS {
      consider([p1.max(0.0), p2.max(0.0)]);
    }
  }

  // Case 2: edge p2 = 0.
  if h[0][0].abs() > EPS {
    let p1 = -g[0] / h[0][0];
    if (0.0..=1.0).contains(&p1) {
      let gr = grad(&h, g, [p1, 0.0]);
      if gr[1] >= -EPS {
        consider([p1, 0.0]);
      }
    }
  }

  // Case 3: edge p1 = 0.
  if h[1][1].abs() > EPS {
    let p2 = -g[1] / h[1][1];
    if (0.0..=1.0).contains(&p2) {
      let gr = grad(&h, g, [0.0, p2]);
      if gr[0] >= -EPS {
        consider([0.0, p2]);
      }
    }
  }

  // Case 4: edge p1 + p2 = 1.
  let denom = h[0][0] - 2.0 * h[0][1] + h[1][1];
  if denom.abs() > EPS {
    let t = (h[1][1] - h[0][1] + g[1] - g[0]) / denom;
    if (0.0..=1.0).contains(&t) {
      let p = [t, 1.0 - t];
      let gr = grad(&h, g, p);
      if gr[0] + gr[1] <= EPS {
        consider(p);
      }
    }
  }

  // Case 5: corner (0, 0).
  {
    let gr = grad(&h, g, [0.0, 0.0]);
    if gr[0] >= -EPS && gr[1] >= -EPS {
      consider([0.0, 0.0]);
    }
  }

  // Case 6: corner (1, 0).
  {
    let gr = grad(&h, g, [1.0, 0.0]);
    if gr[0] <= EPS && gr[1] >= gr[0] - EPS {
      consider([1.0, 0.0]);
    }
  }

  // Case 7: corner (0, 1).
  {
    let gr = grad(&h, g, [0.0, 1.0]);
    if gr[1] <= EPS && gr[0] >= gr[1] - EPS {
      consider([0.0, 1.0]);
    }
  }

  // Degenerate fallback: no candidate satisfied its KKT conditions (can
  // happen with a near-singular/indefinite model Hessian); pick the
  // cheapest of the 3 corners and 3 edge-midpoints so the caller always
  // gets a feasible point to backtrack from.
  best.map(|(p, _)| p).unwrap_or_else(|| {
    let fallback = [
      [0.0, 0.0],
      [1.0, 0.0],
      [0.0, 1.0],
      [0.5, 0.0],
      [0.0, 0.5],
      [0.5, 0.5],
    ];
    fallback
      .into_iter()
      .min_by(|&a, &b| obj(&h, g, a).partial_cmp(&obj(&h, g, b)).unwrap())
      .expect("fallback list is non-empty")
  })
}

#[cfg(test)]
#[path = "qp_test.rs"]
mod qp_test;
