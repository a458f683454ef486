//! Jets: travel-time values bundled with their partial derivatives.
//!
//! A jet is the unit of state the solver propagates. `Jet2` is carried by
//! the 2D grid marcher (it additionally stores the mixed partial `fxy`,
//! needed to build bicubic cell interpolants); `Jet3` is carried by the 3D
//! tetrahedral marcher.

use glam::{DVec2, DVec3};

/// Travel time and first (+ mixed second) partials at a 2D grid node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jet2 {
  pub f: f64,
  pub fx: f64,
  pub fy: f64,
  pub fxy: f64,
}

impl Jet2 {
  pub const fn new(f: f64, fx: f64, fy: f64, fxy: f64) -> Self {
    Self { f, fx, fy, fxy }
  }

  /// A non-finite jet, used to mark a Far node ("no value yet").
  pub const fn non_finite() -> Self {
    Self::new(f64::INFINITY, f64::NAN, f64::NAN, f64::NAN)
  }

  pub fn is_finite(&self) -> bool {
    self.f.is_finite() && self.fx.is_finite() && self.fy.is_finite() && self.fxy.is_finite()
  }

  pub fn gradient(&self) -> DVec2 {
    DVec2::new(self.fx, self.fy)
  }
}

impl Default for Jet2 {
  fn default() -> Self {
    Self::non_finite()
  }
}

/// Travel time and gradient at a 3D mesh node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jet3 {
  pub f: f64,
  pub fx: f64,
  pub fy: f64,
  pub fz: f64,
}

impl Jet3 {
  pub const fn new(f: f64, fx: f64, fy: f64, fz: f64) -> Self {
    Self { f, fx, fy, fz }
  }

  pub const fn non_finite() -> Self {
    Self::new(f64::INFINITY, f64::NAN, f64::NAN, f64::NAN)
  }

  pub fn is_finite(&self) -> bool {
    self.f.is_finite() && self.fx.is_finite() && self.fy.is_finite() && self.fz.is_finite()
  }

  pub fn gradient(&self) -> DVec3 {
    DVec3::new(self.fx, self.fy, self.fz)
  }

  pub fn from_value_and_gradient(f: f64, g: DVec3) -> Self {
    Self::new(f, g.x, g.y, g.z)
  }
}

impl Default for Jet3 {
  fn default() -> Self {
    Self::non_finite()
  }
}

#[cfg(test)]
#[path = "jet_test.rs"]
mod jet_test;
