//! Unstructured 3D tetrahedral mesh: vertex storage, adjacency queries, and
//! point location.
//!
//! [`TetMesh3`] is the concrete oracle the 3D marcher is built against:
//! vertex coordinates, vertex-to-cell and vertex-to-vertex adjacency,
//! triangular-face enumeration for `UTetra` candidates, and point location
//! for continuous evaluation.

use std::collections::BTreeMap;

use glam::DVec3;

use crate::error::{EikonalError, Result};

/// A mesh edge, canonicalized so `(a, b)` and `(b, a)` compare equal: the
/// smaller label is always stored first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
  pub l0: usize,
  pub l1: usize,
}

impl Edge {
  /// Build the canonical edge between `a` and `b` (`a != b`).
  pub fn new(a: usize, b: usize) -> Self {
    debug_assert_ne!(a, b, "an edge must join two distinct vertices");
    if a < b {
      Self { l0: a, l1: b }
    } else {
      Self { l0: b, l1: a }
    }
  }
}

/// Shorthand constructor for [`Edge::new`].
pub fn make_edge(a: usize, b: usize) -> Edge {
  Edge::new(a, b)
}

/// A map keyed by canonical [`Edge`], iterating in ascending `(l0, l1)`
/// order (a `BTreeMap` gives this for free).
#[derive(Clone, Debug, Default)]
pub struct EdgeMap<V> {
  inner: BTreeMap<Edge, V>,
}

impl<V> EdgeMap<V> {
  pub fn new() -> Self {
    Self { inner: BTreeMap::new() }
  }

  pub fn set(&mut self, edge: Edge, value: V) {
    self.inner.insert(edge, value);
  }

  pub fn get(&self, edge: Edge) -> Option<&V> {
    self.inner.get(&edge)
  }

  pub fn contains(&self, edge: Edge) -> bool {
    self.inner.contains_key(&edge)
  }

  pub fn size(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// Iterate edges in canonical ascending order.
  pub fn iter(&self) -> impl Iterator<Item = (Edge, &V)> {
    self.inner.iter().map(|(&e, v)| (e, v))
  }
}

/// Unstructured tetrahedral mesh: a flat vertex array plus tetra
/// connectivity, with vertex-to-cell and vertex-to-vertex adjacency built
/// once at construction.
#[derive(Clone, Debug)]
pub struct TetMesh3 {
  verts: Vec<DVec3>,
  cells: Vec<[usize; 4]>,
  vert_to_cells: Vec<Vec<usize>>,
  vert_to_verts: Vec<Vec<usize>>,
}

impl TetMesh3 {
  /// Build a mesh from a flat vertex array and tetra connectivity
  /// (`cells[c]` lists the 4 vertex labels of cell `c`). Duplicate vertex
  /// positions are permitted (e.g. mirrored octants sharing a boundary);
  /// they are simply distinct labels.
  pub fn new(verts: Vec<DVec3>, cells: Vec<[usize; 4]>) -> Self {
    let n = verts.len();
    let mut vert_to_cells = vec![Vec::new(); n];
    for (c, cell) in cells.iter().enumerate() {
      for &l in cell {
        vert_to_cells[l].push(c);
      }
    }

    let mut vert_to_verts: Vec<std::collections::BTreeSet<usize>> = vec![Default::default(); n];
    for cell in &cells {
      for i in 0..4 {
        for j in 0..4 {
          if i != j {
            vert_to_verts[cell[i]].insert(cell[j]);
          }
        }
      }
    }
    let vert_to_verts = vert_to_verts.into_iter().map(|s| s.into_iter().collect()).collect();

    Self { verts, cells, vert_to_cells, vert_to_verts }
  }

  pub fn num_verts(&self) -> usize {
    self.verts.len()
  }

  pub fn num_cells(&self) -> usize {
    self.cells.len()
  }

  pub fn vert(&self, l: usize) -> DVec3 {
    self.verts[l]
  }

  pub fn cell(&self, c: usize) -> [usize; 4] {
    self.cells[c]
  }

  /// Vertices directly connected to `l` by a mesh edge.
  pub fn neighbours(&self, l: usize) -> &[usize] {
    &self.vert_to_verts[l]
  }

  /// Every triangular face incident to `l`: for each tetrahedron
  /// containing `l`, the other three vertices, as `(l0, l1, l2)`. A
  /// `UTetra` candidate for `l` uses all three; a `UTri` candidate uses
  /// any pair among them.
  pub fn incident_faces(&self, l: usize) -> Vec<(usize, usize, usize)> {
    self.vert_to_cells[l]
      .iter()
      .map(|&c| {
        let others: Vec<usize> = self.cells[c].iter().copied().filter(|&v| v != l).collect();
        (others[0], others[1], others[2])
      })
      .collect()
  }

  /// Every mesh edge, each vertex pair canonicalized and deduplicated.
  pub fn edges(&self) -> Vec<Edge> {
    let mut set = std::collections::BTreeSet::new();
    for cell in &self.cells {
      for i in 0..4 {
        for j in (i + 1)..4 {
          set.insert(Edge::new(cell[i], cell[j]));
        }
      }
    }
    set.into_iter().collect()
  }

  /// Locate the tetrahedron containing `x` and its barycentric
  /// coordinates there, by brute-force search (the mesh sizes this crate
  /// targets - test fixtures, small unstructured domains - do not warrant
  /// a spatial index). Errors if no cell contains `x`.
  pub fn contains(&self, x: DVec3) -> Result<(usize, [f64; 4])> {
    const TOL: f64 = 1e-9;
    for (c, cell) in self.cells.iter().enumerate() {
      let x0 = self.verts[cell[0]];
      let x1 = self.verts[cell[1]];
      let x2 = self.verts[cell[2]];
      let x3 = self.verts[cell[3]];

      let mat = glam::DMat3::from_cols(x1 - x0, x2 - x0, x3 - x0);
      let det = mat.determinant();
      if det.abs() < 1e-15 {
        continue;
      }
      let rel = mat.inverse() * (x - x0);
      let b = [1.0 - rel.x - rel.y - rel.z, rel.x, rel.y, rel.z];
      if b.iter().all(|&bi| bi >= -TOL) {
        return Ok((c, b));
      }
    }
    Err(EikonalError::OutOfDomain3 { x: x.x, y: x.y, z: x.z })
  }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
pub(crate) mod mesh_test;
