//! Rectangular 2D grid geometry: index conversions and the per-cell
//! bicubic interpolant cache.

use glam::{DVec2, IVec2};
use smallvec::SmallVec;

use crate::error::{EikonalError, Result};
use crate::jet::Jet2;

/// Rectangular grid of nodes: `shape.x * shape.y` nodes at
/// `xymin + h * (i, j)` for `i in 0..shape.x, j in 0..shape.y`.
#[derive(Clone, Copy, Debug)]
pub struct Grid2 {
  pub shape: IVec2,
  pub xymin: DVec2,
  pub h: f64,
}

impl Grid2 {
  pub fn new(shape: IVec2, xymin: DVec2, h: f64) -> Self {
    assert!(shape.x >= 2 && shape.y >= 2, "grid must have at least a 2x2 node shape");
    assert!(h > 0.0, "grid spacing must be positive");
    Self { shape, xymin, h }
  }

  pub fn num_nodes(&self) -> usize {
    (self.shape.x as usize) * (self.shape.y as usize)
  }

  /// Number of cells, `(shape.x - 1) * (shape.y - 1)`.
  pub fn num_cells(&self) -> usize {
    (self.shape.x as usize - 1) * (self.shape.y as usize - 1)
  }

  /// Node 2D index -> linear label, row-major in `i` (x-fastest).
  pub fn ind2l(&self, ind: IVec2) -> usize {
    debug_assert!(ind.x >= 0 && ind.x < self.shape.x && ind.y >= 0 && ind.y < self.shape.y);
    ind.y as usize * self.shape.x as usize + ind.x as usize
  }

  pub fn l2ind(&self, l: usize) -> IVec2 {
    let nx = self.shape.x as usize;
    IVec2::new((l % nx) as i32, (l / nx) as i32)
  }

  /// Cell 2D index (lower-left corner node index, in
  /// `[0, shape.x - 2] x [0, shape.y - 2]`) -> linear cell label.
  pub fn ind2lc(&self, ind: IVec2) -> usize {
    debug_assert!(ind.x >= 0 && ind.x < self.shape.x - 1 && ind.y >= 0 && ind.y < self.shape.y - 1);
    ind.y as usize * (self.shape.x as usize - 1) + ind.x as usize
  }

  pub fn lc2ind(&self, lc: usize) -> IVec2 {
    let nx_cells = self.shape.x as usize - 1;
    IVec2::new((lc % nx_cells) as i32, (lc / nx_cells) as i32)
  }

  pub fn node_xy(&self, l: usize) -> DVec2 {
    let ind = self.l2ind(l);
    self.xymin + self.h * DVec2::new(ind.x as f64, ind.y as f64)
  }

  /// The 4 corner node labels of cell `lc`, in `(00, 10, 01, 11)` order.
  pub fn cell_corners(&self, lc: usize) -> [usize; 4] {
    let ind = self.lc2ind(lc);
    [
      self.ind2l(ind),
      self.ind2l(ind + IVec2::new(1, 0)),
      self.ind2l(ind + IVec2::new(0, 1)),
      self.ind2l(ind + IVec2::new(1, 1)),
    ]
  }

  /// Locate the cell containing `xy` and the local coordinates `cc in
  /// [0, 1]^2` within it. Errors if `xy` lies outside the grid's domain.
  pub fn xy_to_lc_and_cc(&self, xy: DVec2) -> Result<(usize, DVec2)> {
    let rel = (xy - self.xymin) / self.h;
    let max_i = (self.shape.x - 1) as f64;
    let max_j = (self.shape.y - 1) as f64;
    if rel.x < 0.0 || rel.x > max_i || rel.y < 0.0 || rel.y > max_j {
      return Err(EikonalError::OutOfDomain2 { x: xy.x, y: xy.y });
    }
    let mut i = rel.x.floor() as i32;
    let mut j = rel.y.floor() as i32;
    if i >= self.shape.x - 1 {
      i = self.shape.x - 2;
    }
    if j >= self.shape.y - 1 {
      j = self.shape.y - 2;
    }
    let cc = DVec2::new(rel.x - i as f64, rel.y - j as f64);
    Ok((self.ind2lc(IVec2::new(i, j)), cc))
  }

  /// The 4 neighbour node labels of node `l` that share a cell edge with
  /// it (up to 4; fewer at the grid boundary).
  pub fn node_neighbours(&self, l: usize) -> SmallVec<[usize; 4]> {
    let ind = self.l2ind(l);
    let deltas = [IVec2::new(1, 0), IVec2::new(-1, 0), IVec2::new(0, 1), IVec2::new(0, -1)];
    deltas
      .into_iter()
      .map(|d| ind + d)
      .filter(|n| n.x >= 0 && n.x < self.shape.x && n.y >= 0 && n.y < self.shape.y)
      .map(|n| self.ind2l(n))
      .collect()
  }

  /// For node `ind`, every triangle incident to it under the fixed
  /// diagonal split of each surrounding cell (diagonal from the cell's
  /// `(0,0)` corner to its `(1,1)` corner), returned as the *other two*
  /// vertices of each such triangle.
  pub fn incident_triangle_pairs(&self, ind: IVec2) -> SmallVec<[(IVec2, IVec2); 8]> {
    let mut pairs = SmallVec::new();
    for dc in [IVec2::new(-1, -1), IVec2::new(0, -1), IVec2::new(-1, 0), IVec2::new(0, 0)] {
      let cell = ind + dc;
      if cell.x < 0 || cell.x >= self.shape.x - 1 || cell.y < 0 || cell.y >= self.shape.y - 1 {
        continue;
      }
      let c00 = cell;
      let c10 = cell + IVec2::new(1, 0);
      let c01 = cell + IVec2::new(0, 1);
      let c11 = cell + IVec2::new(1, 1);
      // lower triangle: c00, c10, c11; upper triangle: c00, c11, c01
      for tri in [[c00, c10, c11], [c00, c11, c01]] {
        if let Some(pos) = tri.iter().position(|&v| v == ind) {
          let others: Vec<IVec2> = tri.iter().copied().enumerate().filter(|&(k, _)| k != pos).map(|(_, v)| v).collect();
          pairs.push((others[0], others[1]));
        }
      }
    }
    pairs
  }
}

/// Cubic bicubic interpolant over a single grid cell, built on demand from
/// the 4 corner jets. Coefficients stored as the standard 4x4 bicubic
/// tensor-product Hermite basis matrix product `A`, such that
/// `f(u,v) = sum_ij A[i][j] u^i v^j` for local coordinates `u, v in [0,1]`.
#[derive(Clone, Copy, Debug)]
pub struct Bicubic {
  a: [[f64; 4]; 4],
}

/// Hermite basis matrix mapping `(f00,f10,f01,f11, fx00,fx10,..., fy..., fxy...)`
/// to tensor-product monomial coefficients; built once from the standard
/// 1D Hermite basis `h00,h10,h01,h11` applied in each axis.
const HERMITE: [[f64; 4]; 4] = [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [-3.0, -2.0, 3.0, -1.0], [2.0, 1.0, -2.0, 1.0]];

impl Bicubic {
  /// Build from the 4 corner jets in `(00, 10, 01, 11)` order. `h` is the
  /// physical spacing of the cell these jets come from: the Hermite
  /// tangent data the construction needs is the derivative with respect to
  /// the unit cell parameter `u, v in [0, 1]`, not the physical derivative
  /// `fx`/`fy`/`fxy` the jet stores, and `x = x0 + h*u` makes those differ
  /// by a factor of `h` (`d/du = h * d/dx`, `d2/dudv = h^2 * d2/dxdy`).
  pub fn build(corners: [Jet2; 4], h: f64) -> Self {
    // Per-axis Hermite data matrix: rows are (f, fx) at u=0 and u=1, etc.
    // We build the 4x4 coefficient grid `g[p][q]` for corner data
    // (value, du, dv, dudv) and transform through HERMITE on each axis.
    let f = [corners[0].f, corners[1].f, corners[2].f, corners[3].f];
    let fu = [corners[0].fx * h, corners[1].fx * h, corners[2].fx * h, corners[3].fx * h];
    let fv = [corners[0].fy * h, corners[1].fy * h, corners[2].fy * h, corners[3].fy * h];
    let fuv = [
      corners[0].fxy * h * h,
      corners[1].fxy * h * h,
      corners[2].fxy * h * h,
      corners[3].fxy * h * h,
    ];

    // M[p][q] is the mixed partial picked out by Hermite data-kind p along
    // u (value@u0, deriv@u0, value@u1, deriv@u1) and q along v, matching
    // HERMITE's column order; combined through the bicubic Hermite
    // construction c = Hu * M * Hv^T.
    let m = [
      [f[0], fv[0], f[2], fv[2]],
      [fu[0], fuv[0], fu[2], fuv[2]],
      [f[1], fv[1], f[3], fv[3]],
      [fu[1], fuv[1], fu[3], fuv[3]],
    ];

    let hu = HERMITE;
    let mut hm = [[0.0; 4]; 4];
    for i in 0..4 {
      for j in 0..4 {
        let mut acc = 0.0;
        for k in 0..4 {
          acc += hu[i][k] * m[k][j];
        }
        hm[i][j] = acc;
      }
    }
    let mut a = [[0.0; 4]; 4];
    for i in 0..4 {
      for j in 0..4 {
        let mut acc = 0.0;
        for k in 0..4 {
          acc += hm[i][k] * hu[j][k];
        }
        a[i][j] = acc;
      }
    }
    Self { a }
  }

  fn powers(t: f64) -> [f64; 4] {
    [1.0, t, t * t, t * t * t]
  }

  pub fn f(&self, uv: DVec2) -> f64 {
    let pu = Self::powers(uv.x);
    let pv = Self::powers(uv.y);
    let mut acc = 0.0;
    for i in 0..4 {
      for j in 0..4 {
        acc += self.a[i][j] * pu[i] * pv[j];
      }
    }
    acc
  }

  pub fn fx(&self, uv: DVec2) -> f64 {
    let pu = [0.0, 1.0, 2.0 * uv.x, 3.0 * uv.x * uv.x];
    let pv = Self::powers(uv.y);
    let mut acc = 0.0;
    for i in 0..4 {
      for j in 0..4 {
        acc += self.a[i][j] * pu[i] * pv[j];
      }
    }
    acc
  }

  pub fn fy(&self, uv: DVec2) -> f64 {
    let pu = Self::powers(uv.x);
    let pv = [0.0, 1.0, 2.0 * uv.y, 3.0 * uv.y * uv.y];
    let mut acc = 0.0;
    for i in 0..4 {
      for j in 0..4 {
        acc += self.a[i][j] * pu[i] * pv[j];
      }
    }
    acc
  }

  pub fn fxy(&self, uv: DVec2) -> f64 {
    let pu = [0.0, 1.0, 2.0 * uv.x, 3.0 * uv.x * uv.x];
    let pv = [0.0, 1.0, 2.0 * uv.y, 3.0 * uv.y * uv.y];
    let mut acc = 0.0;
    for i in 0..4 {
      for j in 0..4 {
        acc += self.a[i][j] * pu[i] * pv[j];
      }
    }
    acc
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
