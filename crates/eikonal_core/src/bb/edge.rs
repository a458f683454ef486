//! Cubic Bernstein-Bezier polynomial on a 1-simplex (edge).
//!
//! `Tc[i]` is the control point for barycentric multi-index `(3-i, i)`:
//! `Tc[0]`/`Tc[3]` are the corner values, `Tc[1]`/`Tc[2]` the corner-adjacent
//! points fixing the endpoint derivatives.

/// Cubic control net on an edge, 4 coefficients.
pub type EdgeCoeffs = [f64; 4];

/// One De Casteljau step reducing 4 cubic coefficients to 3 quadratic ones,
/// contracted with weights `w` (barycentric `b` for evaluation, direction
/// `a` for a directional difference).
#[inline]
fn step3to2(c: &EdgeCoeffs, w: [f64; 2]) -> [f64; 3] {
  [
    w[0] * c[0] + w[1] * c[1],
    w[0] * c[1] + w[1] * c[2],
    w[0] * c[2] + w[1] * c[3],
  ]
}

#[inline]
fn step2to1(c: &[f64; 3], w: [f64; 2]) -> [f64; 2] {
  [w[0] * c[0] + w[1] * c[1], w[0] * c[1] + w[1] * c[2]]
}

#[inline]
fn step1to0(c: &[f64; 2], w: [f64; 2]) -> f64 {
  w[0] * c[0] + w[1] * c[1]
}

/// Evaluate the cubic at barycentric point `b = (1 - lambda, lambda)`.
pub fn bb3(tc: &EdgeCoeffs, b: [f64; 2]) -> f64 {
  step1to0(&step2to1(&step3to2(tc, b), b), b)
}

/// First directional derivative at `b` in direction `a` (`a[0] + a[1] ==
/// 0`).
pub fn dbb3(tc: &EdgeCoeffs, b: [f64; 2], a: [f64; 2]) -> f64 {
  3.0 * step1to0(&step2to1(&step3to2(tc, a), b), b)
}

/// Second directional derivative at `b` in direction `a`.
pub fn d2bb3(tc: &EdgeCoeffs, b: [f64; 2], a: [f64; 2]) -> f64 {
  let d1 = step3to2(tc, a);
  6.0 * step1to0(&step2to1(&d1, a), b)
}

/// Build the cubic Hermite interpolant along an edge from the endpoints'
/// function values `f` and directional derivatives `df` (`df[k]` is
/// `dot(grad f[k], x1 - x0)`, i.e. already projected onto the edge).
pub fn interp(f: [f64; 2], df: [f64; 2]) -> EdgeCoeffs {
  [f[0], f[0] + df[0] / 3.0, f[1] - df[1] / 3.0, f[1]]
}

#[cfg(test)]
#[path = "edge_test.rs"]
mod edge_test;
