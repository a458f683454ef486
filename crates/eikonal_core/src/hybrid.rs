//! Hybrid bracketed root-finder.
//!
//! Combines bisection (guaranteed progress) with the secant method
//! (superlinear convergence near the root) to solve `f(t) = 0` for `t` in
//! `[a, b]`, used by [`crate::utri`] to minimize the edge-update objective.
//! `f` need not be monotone; the bracket is only required to contain a
//! sign change (or not, in which case the better endpoint is returned).

const MAX_ITER: usize = 100;
const TOL: f64 = 1e-13;

/// Find a root of `f` on `[a, b]`. If `f(a)` and `f(b)` have the same
/// sign, no interior root is guaranteed to exist; in that case the
/// endpoint with the smaller `|f|` is returned (the caller, [`crate::utri`],
/// treats this as "minimum at the boundary").
pub fn hybrid(mut f: impl FnMut(f64) -> f64, mut a: f64, mut b: f64) -> f64 {
  let mut fa = f(a);
  let mut fb = f(b);

  if fa == 0.0 {
    return a;
  }
  if fb == 0.0 {
    return b;
  }
  if fa.signum() == fb.signum() {
    return if fa.abs() <= fb.abs() { a } else { b };
  }

  let mut c = a;
  let mut fc = fa;
  let mut mid_step = b - a;
  let mut prev_step = mid_step;

  for _ in 0..MAX_ITER {
    if fc.abs() < fa.abs() {
      a = b;
      b = c;
      c = a;
      fa = fb;
      fb = fc;
      fc = fa;
    }

    let tol = 2.0 * f64::EPSILON * b.abs() + TOL;
    let half = (c - b) / 2.0;
    if half.abs() <= tol || fb == 0.0 {
      return b;
    }

    if prev_step.abs() >= tol && fa.abs() > fb.abs() {
      // attempt secant (or inverse-quadratic, degenerating to secant when
      // only two distinct points are available)
      let s = fb / fa;
      let (p, q) = if a == c {
        (2.0 * half * s, 1.0 - s)
      } else {
        let q0 = fa / fc;
        let r = fb / fc;
        (
          s * (2.0 * half * q0 * (q0 - r) - (b - a) * (r - 1.0)),
          (q0 - 1.0) * (r - 1.0) * (s - 1.0),
        )
      };
      let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };

      if 2.0 * p < (3.0 * half * q - (tol * q).abs()) && p < (prev_step * q / 2.0).abs() {
        prev_step = mid_step;
        mid_step = p / q;
      } else {
        mid_step = half;
        prev_step = half;
      }
    } else {
      mid_step = half;
      prev_step = half;
    }

    a = b;
    fa = fb;
    if mid_step.abs() > tol {
      b += mid_step;
    } else {
      b += if half > 0.0 { tol } else { -tol };
    }
    fb = f(b);
    if (fb > 0.0) == (fc > 0.0) {
      c = a;
      fc = fa;
      mid_step = b - a;
      prev_step = mid_step;
    }
  }

  b
}

#[cfg(test)]
#[path = "hybrid_test.rs"]
mod hybrid_test;
