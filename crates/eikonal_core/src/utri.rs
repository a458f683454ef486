//! Two-point edge update (`UTri`).
//!
//! Given two `Valid` nodes `x0`, `x1` on a common edge and their jets,
//! estimates the travel time at a third point `x` by minimizing
//! `F(lambda) = T(lambda) + L(lambda)` over `lambda in [0, 1]`, where
//! `T` is the cubic Hermite interpolant of the two corner jets along the
//! edge and `L(lambda) = |x - x(lambda)|` is the Euclidean distance from
//! `x` to the point `x(lambda) = x0 + lambda*(x1 - x0)` on the edge.

use glam::DVec3;

use crate::bb::edge::{bb3, dbb3, interp, EdgeCoeffs};
use crate::hybrid::hybrid;
use crate::jet::Jet3;
use crate::slowness::Slowness3;

/// One evaluation point for the update: function value and gradient at a
/// `Valid` mesh vertex.
#[derive(Clone, Copy, Debug)]
pub struct EdgeEndpoint {
  pub x: DVec3,
  pub f: f64,
  pub df: DVec3,
}

/// An edge update in progress: the point being updated, the two edge
/// endpoints, and the current trial `lambda`.
pub struct UTri {
  x: DVec3,
  x0: DVec3,
  x1_minus_x0: DVec3,
  tc: EdgeCoeffs,
  cos01: f64,
  lam: f64,
  f: f64,
  df_dlam: f64,
  x_minus_xb: DVec3,
}

impl UTri {
  /// Set up an edge update for point `x` against endpoints `e0`, `e1`.
  /// `slowness` scales the Euclidean length term by a representative
  /// slowness sampled at the update point (constant-`s` media use
  /// [`crate::slowness::Unit`], for which this has no effect).
  pub fn new(x: DVec3, e0: EdgeEndpoint, e1: EdgeEndpoint, slowness: &impl Slowness3) -> Self {
    let x1_minus_x0 = e1.x - e0.x;
    let dx0 = e0.x - x;
    let dx1 = e1.x - x;
    let cos01 = dx0.dot(dx1) / (dx0.length() * dx1.length());

    let df0 = e0.df.dot(x1_minus_x0);
    let df1 = e1.df.dot(x1_minus_x0);
    let tc = interp([e0.f, e1.f], [df0, df1]);

    let s = slowness.s(x);
    let mut utri = Self {
      x,
      x0: e0.x,
      x1_minus_x0,
      tc,
      cos01,
      lam: 0.0,
      f: 0.0,
      df_dlam: 0.0,
      x_minus_xb: DVec3::ZERO,
    };
    // `s` enters as a multiplicative scaling of the arclength term; for
    // `Unit` slowness `s == 1` and this degenerates to plain Euclidean
    // travel time.
    utri.set_lambda_scaled(0.5, s);
    utri
  }

  fn set_lambda_scaled(&mut self, lam: f64, s: f64) {
    self.lam = lam;
    let xb = self.x0 + lam * self.x1_minus_x0;
    self.x_minus_xb = self.x - xb;
    let l = self.x_minus_xb.length();

    let dl_dlam = -self.x1_minus_x0.dot(self.x_minus_xb) / l;

    let b = [1.0 - lam, lam];
    let t = bb3(&self.tc, b);
    self.f = t + s * l;

    let a = [-1.0, 1.0];
    let dt_dlam = dbb3(&self.tc, b, a);
    self.df_dlam = dt_dlam + s * dl_dlam;
  }

  /// Is this update causal, i.e. does the propagation direction not fold
  /// back through the update point? Non-causal updates must be rejected
  /// by the caller regardless of their computed value.
  pub fn is_causal(&self) -> bool {
    self.cos01 >= 0.0
  }

  /// Solve for the minimizing `lambda` via hybrid root-finding on
  /// `dF/dlambda`, using a representative slowness `s` sampled at the
  /// update point.
  pub fn solve(&mut self, slowness: &impl Slowness3) {
    let s = slowness.s(self.x);
    let _ = hybrid(
      |lam| {
        self.set_lambda_scaled(lam, s);
        self.df_dlam
      },
      0.0,
      1.0,
    );
  }

  pub fn value(&self) -> f64 {
    self.f
  }

  pub fn lambda(&self) -> f64 {
    self.lam
  }

  /// The jet (value + gradient) produced by this update, once solved.
  /// The gradient of the Euclidean-distance term is the unit vector from
  /// the optimal edge point `xb` back to `x`.
  pub fn jet(&self) -> Jet3 {
    let l = self.x_minus_xb.length();
    Jet3::from_value_and_gradient(self.f, self.x_minus_xb / l)
  }
}

#[cfg(test)]
#[path = "utri_test.rs"]
mod utri_test;
