//! Cubic Bernstein-Bezier polynomial on a 3-simplex (tetrahedron).
//!
//! Unlike `edge`/`triangle`, this basis is only ever evaluated once per
//! continuous-evaluation query (never inside a hot Newton loop), so
//! evaluation is routed through the generic [`crate::bb::simplex`]
//! machinery rather than hand-rolled.

use glam::DVec3;

use crate::bb::simplex;
use crate::bb::triangle::interior_from_boundary;

/// Cubic control net on a tetrahedron, 20 coefficients, in the order
/// produced by [`simplex::multi_indices`] for `verts = 4, deg = 3`.
pub type TetCoeffs = [f64; 20];

/// Evaluate the cubic at barycentric point `b = (b0, b1, b2, b3)`.
pub fn bb3tet(tc: &TetCoeffs, b: [f64; 4]) -> f64 {
  simplex::eval(4, 3, tc, &b)
}

fn position(indices: &[Vec<u8>], needle: [u8; 4]) -> usize {
  indices
    .iter()
    .position(|idx| idx.as_slice() == needle)
    .expect("multi-index must be present")
}

/// Build the 20 tetrahedron coefficients from 4 corner jets: function
/// values `f`, gradients `df`, and corner positions `x`.
///
/// Corner and edge-adjacent coefficients follow the same Hermite rule as
/// [`crate::bb::triangle::interp3`] applied along each of the 6 tet edges;
/// each of the 4 face-center coefficients is then derived from its own
/// face's (already-computed) boundary coefficients via
/// [`interior_from_boundary`], since every face of a tetrahedron is itself
/// a triangle whose cubic patch is fully determined by its boundary data.
pub fn interp4(f: [f64; 4], df: [DVec3; 4], x: [DVec3; 4]) -> TetCoeffs {
  let idx = simplex::multi_indices(4, 3);
  let mut tc = vec![0.0; 20];

  for k in 0..4 {
    let mut corner = [0u8; 4];
    corner[k] = 3;
    tc[position(&idx, corner)] = f[k];
  }

  for a in 0..4 {
    for b in 0..4 {
      if a == b {
        continue;
      }
      let mut near_a = [0u8; 4];
      near_a[a] = 2;
      near_a[b] = 1;
      let edge = x[b] - x[a];
      tc[position(&idx, near_a)] = f[a] + df[a].dot(edge) / 3.0;
    }
  }

  // Face centers: for each face (the 3 corners other than `opposite`),
  // gather that face's 3 corner and 6 edge coefficients already written
  // above and average them.
  for opposite in 0..4 {
    let face: Vec<usize> = (0..4).filter(|&v| v != opposite).collect();
    let corners: Vec<f64> = face
      .iter()
      .map(|&v| {
        let mut idx4 = [0u8; 4];
        idx4[v] = 3;
        tc[position(&idx, idx4)]
      })
      .collect();
    let mut edges = Vec::with_capacity(6);
    for &a in &face {
      for &b in &face {
        if a == b {
          continue;
        }
        let mut idx4 = [0u8; 4];
        idx4[a] = 2;
        idx4[b] = 1;
        edges.push(tc[position(&idx, idx4)]);
      }
    }
    let mut face_center = [0u8; 4];
    for &v in &face {
      face_center[v] = 1;
    }
    let corners3: [f64; 3] = [corners[0], corners[1], corners[2]];
    let edges6: [f64; 6] = [edges[0], edges[1], edges[2], edges[3], edges[4], edges[5]];
    tc[position(&idx, face_center)] = interior_from_boundary(corners3, edges6);
  }

  tc.try_into().expect("exactly 20 tetrahedron coefficients")
}

#[cfg(test)]
#[path = "tetra_test.rs"]
mod tetra_test;
