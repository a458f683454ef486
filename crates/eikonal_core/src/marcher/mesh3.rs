//! Fast-marching propagation over an unstructured 3D tetrahedral mesh.

use glam::DVec3;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::Result;
use crate::heap::{Heap, HeapOps};
use crate::jet::Jet3;
use crate::marcher::state::NodeState;
use crate::mesh::TetMesh3;
use crate::metrics::MarchMetrics;
use crate::slowness::{Slowness3, Unit};
use crate::utetra::{FaceVertex, UTetra};
use crate::utri::{EdgeEndpoint, UTri};

struct JetOps<'a>(&'a [Jet3]);

impl HeapOps for JetOps<'_> {
  fn value(&self, l: usize) -> f64 {
    self.0[l].f
  }

  fn setpos(&mut self, _l: usize, _pos: usize) {}
}

/// Fast-marching solver over an unstructured tetrahedral mesh, generic
/// over the slowness field (defaults to the constant-1 [`Unit`] field).
pub struct Marcher3<S: Slowness3 = Unit> {
  mesh: TetMesh3,
  states: Vec<NodeState>,
  jets: Vec<Jet3>,
  heap: Heap,
  slowness: S,
  metrics: MarchMetrics,
}

impl Marcher3<Unit> {
  /// Construct a solver over `mesh` with unit (constant-1) slowness.
  pub fn new(mesh: TetMesh3) -> Self {
    Self::with_slowness(mesh, Unit)
  }
}

impl<S: Slowness3> Marcher3<S> {
  /// Construct a solver over `mesh` with a caller-supplied slowness field.
  pub fn with_slowness(mesh: TetMesh3, slowness: S) -> Self {
    let n = mesh.num_verts();
    Self {
      mesh,
      states: vec![NodeState::Far; n],
      jets: vec![Jet3::non_finite(); n],
      heap: Heap::new(n),
      slowness,
      metrics: MarchMetrics::default(),
    }
  }

  pub fn mesh(&self) -> &TetMesh3 {
    &self.mesh
  }

  /// Instrumentation accumulated over this solve so far (zero-cost unless
  /// built with the `metrics` feature).
  pub fn metrics(&self) -> MarchMetrics {
    self.metrics
  }

  pub fn state(&self, l: usize) -> NodeState {
    self.states[l]
  }

  pub fn jet(&self, l: usize) -> Jet3 {
    self.jets[l]
  }

  /// Inject `l` as a provisional (`Trial`) node with jet `jet`.
  pub fn add_trial(&mut self, l: usize, jet: Jet3) {
    debug_assert!(jet.is_finite(), "a Trial node's jet must be finite");
    self.states[l] = NodeState::Trial;
    self.jets[l] = jet;
    self.heap.insert(l, &mut JetOps(&self.jets));
  }

  /// Inject `l` as an already-finalized (`Valid`) seed node. Never
  /// inserted into the heap; never revisited.
  pub fn add_valid(&mut self, l: usize, jet: Jet3) {
    debug_assert!(jet.is_finite(), "a Valid node's jet must be finite");
    self.states[l] = NodeState::Valid;
    self.jets[l] = jet;
  }

  /// Exclude `l` from propagation entirely. Terminal.
  pub fn make_bd(&mut self, l: usize) {
    self.states[l] = NodeState::Boundary;
  }

  /// Pop the minimum-`T` `Trial` node, promote it to `Valid`, and
  /// re-evaluate its updatable neighbours. No-op if the heap is empty.
  #[cfg_attr(feature = "tracing", instrument(skip_all, name = "marcher3::step"))]
  pub fn step(&mut self) {
    let Some(l) = self.heap.front() else {
      return;
    };
    self.heap.pop(&mut JetOps(&self.jets));
    self.states[l] = NodeState::Valid;
    self.metrics.record_finalized();

    let neighbours: Vec<usize> = self.mesh.neighbours(l).to_vec();
    for m in neighbours {
      if !self.states[m].is_updatable() {
        continue;
      }
      if let Some(candidate) = self.best_update(m) {
        let improved = candidate.f < self.jets[m].f;
        self.metrics.record_update(improved);
        if improved {
          self.jets[m] = candidate;
          if self.states[m].is_far() {
            self.states[m] = NodeState::Trial;
            self.heap.insert(m, &mut JetOps(&self.jets));
          } else {
            self.heap.swim(m, &mut JetOps(&self.jets));
          }
        }
      }
    }
    self.metrics.observe_heap_size(self.heap.size());
  }

  /// Best causal candidate jet for node `m`: a `UTetra` face update for
  /// every incident face whose three non-`m` corners are all `Valid`, and
  /// a `UTri` edge update for every pair among them that is.
  fn best_update(&self, m: usize) -> Option<Jet3> {
    let x = self.mesh.vert(m);
    let mut best: Option<Jet3> = None;
    let mut consider = |candidate: Jet3, best: &mut Option<Jet3>| {
      if best.map_or(true, |b: Jet3| candidate.f < b.f) {
        *best = Some(candidate);
      }
    };

    for (o0, o1, o2) in self.mesh.incident_faces(m) {
      let valid = [self.states[o0].is_valid(), self.states[o1].is_valid(), self.states[o2].is_valid()];

      if valid[0] && valid[1] && valid[2] {
        let mut utetra = UTetra::new(x, self.face_vertex(o0), self.face_vertex(o1), self.face_vertex(o2), &self.slowness);
        if !utetra.is_degenerate() && utetra.is_causal() {
          utetra.solve();
          consider(utetra.jet(), &mut best);
        }
      }

      for &(va, vb) in &[(o0, o1), (o0, o2), (o1, o2)] {
        if self.states[va].is_valid() && self.states[vb].is_valid() {
          let mut utri = UTri::new(x, self.edge_endpoint(va), self.edge_endpoint(vb), &self.slowness);
          if utri.is_causal() {
            utri.solve(&self.slowness);
            consider(utri.jet(), &mut best);
          }
        }
      }
    }
    best
  }

  fn face_vertex(&self, l: usize) -> FaceVertex {
    let jet = self.jets[l];
    FaceVertex { x: self.mesh.vert(l), f: jet.f, df: jet.gradient() }
  }

  fn edge_endpoint(&self, l: usize) -> EdgeEndpoint {
    let jet = self.jets[l];
    EdgeEndpoint { x: self.mesh.vert(l), f: jet.f, df: jet.gradient() }
  }

  /// Run `step` until the heap is empty.
  #[cfg_attr(feature = "tracing", instrument(skip_all, name = "marcher3::solve"))]
  pub fn solve(&mut self) {
    while self.heap.size() > 0 {
      self.step();
    }
  }

  /// Continuous travel time at `x`, via the cubic BB-tet interpolant of
  /// the containing tetrahedron's four corner jets. All four corners must
  /// be finite (`Valid` or seeded); otherwise `Err(TetNotReady)`.
  pub fn t(&mut self, x: DVec3) -> Result<f64> {
    let (c, b) = self.mesh.contains(x)?;
    let cell = self.mesh.cell(c);
    if cell.iter().any(|&l| !self.jets[l].is_finite()) {
      return Err(crate::error::EikonalError::TetNotReady { tet: c });
    }
    let f = [self.jets[cell[0]].f, self.jets[cell[1]].f, self.jets[cell[2]].f, self.jets[cell[3]].f];
    let df = [
      self.jets[cell[0]].gradient(),
      self.jets[cell[1]].gradient(),
      self.jets[cell[2]].gradient(),
      self.jets[cell[3]].gradient(),
    ];
    let xs = [self.mesh.vert(cell[0]), self.mesh.vert(cell[1]), self.mesh.vert(cell[2]), self.mesh.vert(cell[3])];
    let tc = crate::bb::tetra::interp4(f, df, xs);
    Ok(crate::bb::tetra::bb3tet(&tc, b))
  }
}

#[cfg(test)]
#[path = "mesh3_test.rs"]
mod mesh3_test;
