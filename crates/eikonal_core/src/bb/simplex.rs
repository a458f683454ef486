//! Generic De Casteljau recursion over a simplex's barycentric multi-indices.
//!
//! `edge`/`triangle` hand-roll their own closed-form reductions for speed
//! (they sit in the Newton loop of [`crate::utetra`]); this module backs
//! the less frequently evaluated [`crate::bb::tetra`] basis, and doubles as
//! a reference implementation the hand-rolled ones are tested against.

/// All multi-indices of length `verts` whose entries sum to `deg`, in
/// reverse-lexicographic order (first coordinate descending). For `verts =
/// 2, deg = 3` this yields `[[3,0],[2,1],[1,2],[0,3]]`, matching the
/// `edge` module's `Tc[0..4]` layout.
pub fn multi_indices(verts: usize, deg: u8) -> Vec<Vec<u8>> {
  if verts == 1 {
    return vec![vec![deg]];
  }
  let mut out = Vec::new();
  for first in (0..=deg).rev() {
    for mut rest in multi_indices(verts - 1, deg - first) {
      let mut idx = Vec::with_capacity(verts);
      idx.push(first);
      idx.append(&mut rest);
      out.push(idx);
    }
  }
  out
}

fn position(indices: &[Vec<u8>], needle: &[u8]) -> usize {
  indices
    .iter()
    .position(|idx| idx.as_slice() == needle)
    .expect("multi-index must be present in its own enumeration")
}

/// One De Casteljau contraction step: given degree-`deg` coefficients
/// (ordered per [`multi_indices`]), contract with weights `w` (barycentric
/// coordinates for evaluation, a direction summing to zero for a
/// directional difference) to produce degree-`deg - 1` coefficients.
pub fn reduce(verts: usize, deg: u8, coeffs: &[f64], w: &[f64]) -> Vec<f64> {
  assert_eq!(w.len(), verts);
  assert!(deg >= 1);
  let idx_lo = multi_indices(verts, deg - 1);
  let idx_hi = multi_indices(verts, deg);
  idx_lo
    .iter()
    .map(|lo| {
      (0..verts)
        .map(|v| {
          let mut hi = lo.clone();
          hi[v] += 1;
          w[v] * coeffs[position(&idx_hi, &hi)]
        })
        .sum()
    })
    .collect()
}

/// Evaluate a degree-`deg` BB polynomial at barycentric point `b`.
pub fn eval(verts: usize, deg: u8, coeffs: &[f64], b: &[f64]) -> f64 {
  let mut c = coeffs.to_vec();
  for d in (1..=deg).rev() {
    c = reduce(verts, d, &c, b);
  }
  c[0]
}

#[cfg(test)]
#[path = "simplex_test.rs"]
mod simplex_test;
