//! Three-point tetrahedron-face update (`UTetra`).
//!
//! Given three `Valid` nodes `x0, x1, x2` spanning a mesh face and their
//! jets, estimates the travel time at a fourth point `x` by minimizing
//! `F(lambda) = T(lambda) + L(lambda)` over the barycentric 2-simplex
//! `lambda = (lambda1, lambda2)` (`lambda0 = 1 - lambda1 - lambda2`),
//! where `T` is the cubic Bezier interpolant of the three corner jets over
//! the face and `L` is the Euclidean distance from `x` to the face point.
//! The minimizer is found by projected Newton's method: at each iterate,
//! a quadratic model built from the exact gradient and Hessian of `F` is
//! minimized over the simplex ([`crate::qp::triqp2_solve`]) to produce a
//! search direction, and an Armijo backtracking line search chooses the
//! step length.

use glam::DVec3;

use crate::bb::triangle::{bb3tri, d2bb3tri, dbb3tri, interp3, TriCoeffs};
use crate::jet::Jet3;
use crate::qp::{triqp2_solve, Hess2};
use crate::slowness::Slowness3;

const MAX_ITER: usize = 20;
const ARMIJO_C1: f64 = 1e-2;

/// One evaluation point for the update: position, function value, and
/// gradient at a `Valid` mesh vertex.
#[derive(Clone, Copy, Debug)]
pub struct FaceVertex {
  pub x: DVec3,
  pub f: f64,
  pub df: DVec3,
}

/// A tetrahedron-face update in progress.
pub struct UTetra {
  x: DVec3,
  xs: [DVec3; 3],
  tc: TriCoeffs,
  angles: [f64; 3],

  lam: [f64; 2],
  f: f64,
  g: [f64; 2],
  h: Hess2,
  p: [f64; 2],
  x_minus_xb: DVec3,
  niter: usize,
  s: f64,
}

const A1: [f64; 3] = [-1.0, 1.0, 0.0];
const A2: [f64; 3] = [-1.0, 0.0, 1.0];

impl UTetra {
  /// Set up a face update for point `x` against the three face vertices
  /// `v0, v1, v2` (in consistent order; the returned barycentric lambdas
  /// are relative to this order). `slowness` scales the Euclidean length
  /// term by a representative slowness sampled at `x` (constant-`s` media
  /// use [`crate::slowness::Unit`], for which this has no effect).
  pub fn new(
    x: DVec3,
    v0: FaceVertex,
    v1: FaceVertex,
    v2: FaceVertex,
    slowness: &impl Slowness3,
  ) -> Self {
    let xs = [v0.x, v1.x, v2.x];

    let mut dirs = [DVec3::ZERO; 3];
    for i in 0..3 {
      dirs[i] = (xs[i] - x).normalize();
    }
    let mut angles = [0.0; 3];
    for i in 0..3 {
      angles[i] = dirs[i].dot(dirs[(i + 1) % 3]);
    }

    let f = [v0.f, v1.f, v2.f];
    let df = [v0.df, v1.df, v2.df];
    let tc = interp3(f, df, xs);

    let mut utetra = Self {
      x,
      xs,
      tc,
      angles,
      lam: [1.0 / 3.0, 1.0 / 3.0],
      f: 0.0,
      g: [0.0, 0.0],
      h: [[0.0, 0.0], [0.0, 0.0]],
      p: [0.0, 0.0],
      x_minus_xb: DVec3::ZERO,
      niter: 0,
      s: slowness.s(x),
    };
    utetra.set_lambda([1.0 / 3.0, 1.0 / 3.0]);
    utetra
  }

  /// Does `x` lie in the plane spanned by the three face vertices? Such an
  /// update is degenerate (the minimization problem is singular) and must
  /// be skipped by the caller.
  pub fn is_degenerate(&self) -> bool {
    let d0 = self.xs[0] - self.x;
    let d1 = self.xs[1] - self.x;
    let d2 = self.xs[2] - self.x;
    let det = d0.dot(d1.cross(d2));
    det.abs() < 1e-15
  }

  /// Is this update causal? All three pairwise angles between the
  /// corner-to-`x` directions must be non-negative.
  pub fn is_causal(&self) -> bool {
    self.angles.iter().all(|&c| c >= 0.0)
  }

  fn xb(&self, b: [f64; 3]) -> DVec3 {
    self.xs[0] * b[0] + self.xs[1] * b[1] + self.xs[2] * b[2]
  }

  /// Recompute `f`, `g`, `h`, and the Newton step `p` at barycentric
  /// point `lam`.
  fn set_lambda(&mut self, lam: [f64; 2]) {
    self.lam = lam;
    let b = [1.0 - lam[0] - lam[1], lam[0], lam[1]];
    debug_assert!(b[0] >= -1e-12 && b[1] >= -1e-12 && b[2] >= -1e-12);

    let xb = self.xb(b);
    self.x_minus_xb = self.x - xb;
    let l = self.x_minus_xb.length();
    debug_assert!(l > 0.0, "update point coincides with face point");

    let u = -self.x_minus_xb / l;
    let dxb_da1 = self.xs[1] - self.xs[0];
    let dxb_da2 = self.xs[2] - self.xs[0];
    let dl = [u.dot(dxb_da1), u.dot(dxb_da2)];

    // Second derivatives of L via the projection formula
    // D2L = (I - uu^T)/L contracted with the two edge directions.
    let proj = |a: DVec3, bdir: DVec3| a.dot(bdir) - u.dot(a) * u.dot(bdir);
    let mut d2l = [[0.0; 2]; 2];
    d2l[0][0] = proj(dxb_da1, dxb_da1) / l;
    d2l[0][1] = proj(dxb_da1, dxb_da2) / l;
    d2l[1][0] = d2l[0][1];
    d2l[1][1] = proj(dxb_da2, dxb_da2) / l;

    let dt = [dbb3tri(&self.tc, b, A1), dbb3tri(&self.tc, b, A2)];
    let d2t00 = d2bb3tri(&self.tc, b, A1, A1);
    let d2t01 = d2bb3tri(&self.tc, b, A1, A2);
    let d2t11 = d2bb3tri(&self.tc, b, A2, A2);

    self.f = self.s * l + bb3tri(&self.tc, b);
    self.g = [self.s * dl[0] + dt[0], self.s * dl[1] + dt[1]];
    self.h = [
      [self.s * d2l[0][0] + d2t00, self.s * d2l[0][1] + d2t01],
      [self.s * d2l[1][0] + d2t01, self.s * d2l[1][1] + d2t11],
    ];

    self.p = self.newton_step();
  }

  /// Projected Newton step: regularize the Hessian to be positive
  /// semidefinite, solve the simplex-constrained quadratic model for the
  /// next iterate, and return the difference from the current one.
  fn newton_step(&self) -> [f64; 2] {
    let mut h = self.h;
    let tr = h[0][0] + h[1][1];
    let det = h[0][0] * h[1][1] - h[0][1] * h[1][0];
    let disc = (tr * tr - 4.0 * det).max(0.0);
    let min_eig_doubled = tr - disc.sqrt();
    if min_eig_doubled < 0.0 {
      h[0][0] -= min_eig_doubled;
      h[1][1] -= min_eig_doubled;
    }

    let h_lam = [
      h[0][0] * self.lam[0] + h[0][1] * self.lam[1],
      h[1][0] * self.lam[0] + h[1][1] * self.lam[1],
    ];
    let g_eff = [self.g[0] - h_lam[0], self.g[1] - h_lam[1]];
    let next = triqp2_solve(h, g_eff);
    [next[0] - self.lam[0], next[1] - self.lam[1]]
  }

  /// Run the projected-Newton iteration to convergence (or the iteration
  /// cap). The slowness sampled at construction already scales every `L`
  /// term computed by `set_lambda`.
  pub fn solve(&mut self) {
    for iter in 0..MAX_ITER {
      self.niter = iter;
      let lam0 = self.lam;
      let p = self.p;
      let f0 = self.f;
      let c1_g_dot_p = ARMIJO_C1 * (self.g[0] * p[0] + self.g[1] * p[1]);

      if p[0].abs() < 1e-14 && p[1].abs() < 1e-14 {
        break;
      }

      let mut beta = 1.0;
      let mut lam1 = [lam0[0] + beta * p[0], lam0[1] + beta * p[1]];
      self.set_lambda(lam1);
      while self.f > f0 + beta * c1_g_dot_p && beta > 1e-16 {
        beta /= 2.0;
        lam1 = [lam0[0] + beta * p[0], lam0[1] + beta * p[1]];
        self.set_lambda(lam1);
      }
    }
  }

  pub fn value(&self) -> f64 {
    self.f
  }

  pub fn lambda(&self) -> [f64; 2] {
    self.lam
  }

  pub fn num_iter(&self) -> usize {
    self.niter
  }

  /// The jet produced by this update, once solved.
  pub fn jet(&self) -> Jet3 {
    let l = self.x_minus_xb.length();
    Jet3::from_value_and_gradient(self.f, self.x_minus_xb / l)
  }

  /// Lagrange multipliers for the three simplex-boundary constraints
  /// `lambda0 >= 0`, `lambda1 >= 0`, `lambda2 >= 0`. A constraint's
  /// multiplier is meaningful only when the constraint is active (its
  /// corresponding barycentric coordinate is ~0); inactive constraints
  /// report `0`.
  pub fn lagrange_multipliers(&self) -> [f64; 3] {
    const ATOL: f64 = 5e-15;
    let b = [1.0 - self.lam[0] - self.lam[1], self.lam[0], self.lam[1]];
    let g = self.g;

    if (b[0] - 1.0).abs() < ATOL {
      [0.0, -g[0], -g[1]]
    } else if (b[1] - 1.0).abs() < ATOL {
      [g[0], 0.0, g[0] - g[1]]
    } else if (b[2] - 1.0).abs() < ATOL {
      [g[0], g[0] - g[1], 0.0]
    } else if b[0].abs() < ATOL {
      [(g[0] + g[1]) / 2.0, 0.0, 0.0]
    } else if b[1].abs() < ATOL {
      [0.0, -g[0], 0.0]
    } else if b[2].abs() < ATOL {
      [0.0, 0.0, -g[1]]
    } else {
      [0.0, 0.0, 0.0]
    }
  }
}

#[cfg(test)]
#[path = "utetra_test.rs"]
mod utetra_test;
