//! Scalar slowness field `s(x)` and its gradient.
//!
//! Every local-update kernel is generic over a `Slowness` implementation,
//! so a variable-`s` medium only has to supply a new impl, not touch
//! `UTri`/`UTetra`/`Marcher`. All code paths exercised today use the
//! constant-1 [`Unit`] slowness.

use glam::{DVec2, DVec3};

/// Slowness field for the 2D grid solver.
pub trait Slowness2 {
  fn s(&self, x: DVec2) -> f64;
  fn grad_s(&self, x: DVec2) -> DVec2;
}

/// Slowness field for the 3D mesh solver.
pub trait Slowness3 {
  fn s(&self, x: DVec3) -> f64;
  fn grad_s(&self, x: DVec3) -> DVec3;
}

/// Constant slowness `s ≡ 1` (unit speed), i.e. plain Euclidean arrival
/// time. The only slowness field exercised by the current kernels.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unit;

impl Slowness2 for Unit {
  #[inline]
  fn s(&self, _x: DVec2) -> f64 {
    1.0
  }

  #[inline]
  fn grad_s(&self, _x: DVec2) -> DVec2 {
    DVec2::ZERO
  }
}

impl Slowness3 for Unit {
  #[inline]
  fn s(&self, _x: DVec3) -> f64 {
    1.0
  }

  #[inline]
  fn grad_s(&self, _x: DVec3) -> DVec3 {
    DVec3::ZERO
  }
}

#[cfg(test)]
#[path = "slowness_test.rs"]
mod slowness_test;
