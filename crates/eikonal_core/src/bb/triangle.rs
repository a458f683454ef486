//! Cubic Bernstein-Bezier polynomial on a 2-simplex (triangle).
//!
//! `Tc` holds 10 coefficients in reverse-lexicographic multi-index order
//! (matching [`crate::bb::simplex::multi_indices`] for `verts = 3, deg =
//! 3`):
//!
//! ```text
//! index  multi-index  kind
//!   0      (3,0,0)    corner 0
//!   1      (2,1,0)    edge 0-1, near 0
//!   2      (2,0,1)    edge 0-2, near 0
//!   3      (1,2,0)    edge 0-1, near 1
//!   4      (1,1,1)    interior
//!   5      (1,0,2)    edge 0-2, near 2
//!   6      (0,3,0)    corner 1
//!   7      (0,2,1)    edge 1-2, near 1
//!   8      (0,1,2)    edge 1-2, near 2
//!   9      (0,0,3)    corner 2
//! ```
//!
//! This basis is the objective of [`crate::utetra`]'s Newton iteration, so
//! `eval`/`deriv`/`deriv2` are hand-rolled (not routed through the generic
//! [`crate::bb::simplex`] machinery) and checked against it only in tests.

use glam::DVec3;

/// Cubic control net on a triangle, 10 coefficients.
pub type TriCoeffs = [f64; 10];

#[inline]
fn step3to2(c: &TriCoeffs, w: [f64; 3]) -> [f64; 6] {
  [
    w[0] * c[0] + w[1] * c[1] + w[2] * c[2], // (2,0,0)
    w[0] * c[1] + w[1] * c[3] + w[2] * c[4], // (1,1,0)
    w[0] * c[2] + w[1] * c[4] + w[2] * c[5], // (1,0,1)
    w[0] * c[3] + w[1] * c[6] + w[2] * c[7], // (0,2,0)
    w[0] * c[4] + w[1] * c[7] + w[2] * c[8], // (0,1,1)
    w[0] * c[5] + w[1] * c[8] + w[2] * c[9], // (0,0,2)
  ]
}

#[inline]
fn step2to1(c: &[f64; 6], w: [f64; 3]) -> [f64; 3] {
  [
    w[0] * c[0] + w[1] * c[1] + w[2] * c[2], // (1,0,0)
    w[0] * c[1] + w[1] * c[3] + w[2] * c[4], // (0,1,0)
    w[0] * c[2] + w[1] * c[4] + w[2] * c[5], // (0,0,1)
  ]
}

#[inline]
fn step1to0(c: &[f64; 3], w: [f64; 3]) -> f64 {
  w[0] * c[0] + w[1] * c[1] + w[2] * c[2]
}

/// Evaluate the cubic at barycentric point `b = (b0, b1, b2)`.
pub fn bb3tri(tc: &TriCoeffs, b: [f64; 3]) -> f64 {
  step1to0(&step2to1(&step3to2(tc, b), b), b)
}

/// First directional derivative at `b` in direction `a` (components
/// summing to zero).
pub fn dbb3tri(tc: &TriCoeffs, b: [f64; 3], a: [f64; 3]) -> f64 {
  3.0 * step1to0(&step2to1(&step3to2(tc, a), b), b)
}

/// Mixed second directional derivative at `b` in directions `a1`, `a2`.
pub fn d2bb3tri(tc: &TriCoeffs, b: [f64; 3], a1: [f64; 3], a2: [f64; 3]) -> f64 {
  let d1 = step3to2(tc, a1);
  6.0 * step1to0(&step2to1(&d1, a2), b)
}

/// Interior ("face center") control point from its face's 6 edge-adjacent
/// and 3 corner coefficients, using the standard averaging formula for a
/// C1 cubic Bezier triangle built purely from boundary Hermite data
/// (Farin's triangular patches): `b111 = mean(edges)/... - mean(corners)/6`.
pub fn interior_from_boundary(corners: [f64; 3], edges: [f64; 6]) -> f64 {
  edges.iter().sum::<f64>() / 4.0 - corners.iter().sum::<f64>() / 6.0
}

/// Build the 10 triangle coefficients from 3 corner jets: function values
/// `f`, gradients `df` (full 3D gradients, projected onto each outgoing
/// edge direction internally), and corner positions `x` in ambient 3-space.
pub fn interp3(f: [f64; 3], df: [DVec3; 3], x: [DVec3; 3]) -> TriCoeffs {
  let e01 = x[1] - x[0];
  let e02 = x[2] - x[0];
  let e12 = x[2] - x[1];

  let c0 = f[0];
  let c6 = f[1];
  let c9 = f[2];

  let c1 = c0 + df[0].dot(e01) / 3.0; // (2,1,0)
  let c3 = c6 - df[1].dot(e01) / 3.0; // (1,2,0)
  let c2 = c0 + df[0].dot(e02) / 3.0; // (2,0,1)
  let c5 = c9 - df[2].dot(e02) / 3.0; // (1,0,2)
  let c7 = c6 + df[1].dot(e12) / 3.0; // (0,2,1)
  let c8 = c9 - df[2].dot(e12) / 3.0; // (0,1,2)

  let c4 = interior_from_boundary([c0, c6, c9], [c1, c2, c3, c5, c7, c8]);

  [c0, c1, c2, c3, c4, c5, c6, c7, c8, c9]
}

#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;
