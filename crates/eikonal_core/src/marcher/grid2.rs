//! Fast-marching propagation over a uniform 2D grid.

use glam::{DVec2, DVec3};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::{EikonalError, Result};
use crate::grid::{Bicubic, Grid2};
use crate::heap::{Heap, HeapOps};
use crate::jet::Jet2;
use crate::marcher::state::NodeState;
use crate::metrics::MarchMetrics;
use crate::slowness::{Slowness2, Slowness3, Unit};
use crate::utri::{EdgeEndpoint, UTri};

/// Lifts a 2D slowness field into the ambient 3D interface `UTri` is
/// written against, by embedding the grid's plane at `z = 0`. Zero-cost:
/// `Embed2In3` borrows the underlying field and adds a constant-zero `z`
/// component to every query.
struct Embed2In3<'a, S>(&'a S);

impl<S: Slowness2> Slowness3 for Embed2In3<'_, S> {
  fn s(&self, x: DVec3) -> f64 {
    self.0.s(DVec2::new(x.x, x.y))
  }

  fn grad_s(&self, x: DVec3) -> DVec3 {
    let g = self.0.grad_s(DVec2::new(x.x, x.y));
    DVec3::new(g.x, g.y, 0.0)
  }
}

/// Heap value lookup backed by the marcher's jet array. `setpos` is a
/// no-op: the heap's own `reverse` array already tracks label positions;
/// the marcher never needs a second copy.
struct JetOps<'a>(&'a [Jet2]);

impl HeapOps for JetOps<'_> {
  fn value(&self, l: usize) -> f64 {
    self.0[l].f
  }

  fn setpos(&mut self, _l: usize, _pos: usize) {}
}

/// Fast-marching solver over a uniform 2D grid, generic over the slowness
/// field (defaults to the constant-1 [`Unit`] field).
pub struct Marcher2<S: Slowness2 = Unit> {
  grid: Grid2,
  states: Vec<NodeState>,
  jets: Vec<Jet2>,
  heap: Heap,
  cells: Vec<Option<Bicubic>>,
  slowness: S,
  metrics: MarchMetrics,
}

impl Marcher2<Unit> {
  /// Construct a solver over `grid` with unit (constant-1) slowness.
  pub fn new(grid: Grid2) -> Self {
    Self::with_slowness(grid, Unit)
  }
}

impl<S: Slowness2> Marcher2<S> {
  /// Construct a solver over `grid` with a caller-supplied slowness field.
  pub fn with_slowness(grid: Grid2, slowness: S) -> Self {
    let n = grid.num_nodes();
    let num_cells = grid.num_cells();
    Self {
      grid,
      states: vec![NodeState::Far; n],
      jets: vec![Jet2::non_finite(); n],
      heap: Heap::new(n),
      cells: vec![None; num_cells],
      slowness,
      metrics: MarchMetrics::default(),
    }
  }

  pub fn grid(&self) -> &Grid2 {
    &self.grid
  }

  /// Instrumentation accumulated over this solve so far (zero-cost unless
  /// built with the `metrics` feature).
  pub fn metrics(&self) -> MarchMetrics {
    self.metrics
  }

  pub fn state(&self, l: usize) -> NodeState {
    self.states[l]
  }

  pub fn jet(&self, l: usize) -> Jet2 {
    self.jets[l]
  }

  /// Inject `l` as a provisional (`Trial`) node with jet `jet`.
  pub fn add_trial(&mut self, l: usize, jet: Jet2) {
    debug_assert!(jet.is_finite(), "a Trial node's jet must be finite");
    self.states[l] = NodeState::Trial;
    self.jets[l] = jet;
    self.heap.insert(l, &mut JetOps(&self.jets));
  }

  /// Inject `l` as an already-finalized (`Valid`) seed node. Never
  /// inserted into the heap; never revisited.
  pub fn add_valid(&mut self, l: usize, jet: Jet2) {
    debug_assert!(jet.is_finite(), "a Valid node's jet must be finite");
    self.states[l] = NodeState::Valid;
    self.jets[l] = jet;
  }

  /// Exclude `l` from propagation entirely. Terminal; `l` never
  /// transitions out of `Boundary`.
  pub fn make_bd(&mut self, l: usize) {
    self.states[l] = NodeState::Boundary;
  }

  /// Pop the minimum-`T` `Trial` node, promote it to `Valid`, and
  /// re-evaluate its updatable neighbours. No-op if the heap is empty.
  #[cfg_attr(feature = "tracing", instrument(skip_all, name = "marcher2::step"))]
  pub fn step(&mut self) {
    let Some(l) = self.heap.front() else {
      return;
    };
    self.heap.pop(&mut JetOps(&self.jets));
    self.states[l] = NodeState::Valid;
    self.metrics.record_finalized();

    let neighbours = self.grid.node_neighbours(l);
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

  /// Best causal `UTri` candidate jet for node `m`, across every triangle
  /// incident to it whose two non-`m` corners are both `Valid`.
  fn best_update(&self, m: usize) -> Option<Jet2> {
    let ind = self.grid.l2ind(m);
    let x = self.grid.node_xy(m);
    let embedded = Embed2In3(&self.slowness);

    let mut best: Option<Jet2> = None;
    for (a_ind, b_ind) in self.grid.incident_triangle_pairs(ind) {
      let la = self.grid.ind2l(a_ind);
      let lb = self.grid.ind2l(b_ind);
      if !self.states[la].is_valid() || !self.states[lb].is_valid() {
        continue;
      }

      let e0 = self.edge_endpoint(la);
      let e1 = self.edge_endpoint(lb);
      let mut utri = UTri::new(DVec3::new(x.x, x.y, 0.0), e0, e1, &embedded);
      if !utri.is_causal() {
        continue;
      }
      utri.solve(&embedded);
      let j3 = utri.jet();
      let candidate = Jet2::new(j3.f, j3.fx, j3.fy, 0.0);
      if best.map_or(true, |b: Jet2| candidate.f < b.f) {
        best = Some(candidate);
      }
    }
    best
  }

  fn edge_endpoint(&self, l: usize) -> EdgeEndpoint {
    let x = self.grid.node_xy(l);
    let jet = self.jets[l];
    EdgeEndpoint { x: DVec3::new(x.x, x.y, 0.0), f: jet.f, df: DVec3::new(jet.fx, jet.fy, 0.0) }
  }

  /// Run `step` until the heap is empty.
  #[cfg_attr(feature = "tracing", instrument(skip_all, name = "marcher2::solve"))]
  pub fn solve(&mut self) {
    while self.heap.size() > 0 {
      self.step();
    }
  }

  /// Does cell `lc` have all four corners' jets finite (so its bicubic
  /// can be built)?
  pub fn can_build_cell(&self, lc: usize) -> bool {
    self.grid.cell_corners(lc).iter().all(|&l| self.jets[l].is_finite())
  }

  /// Build the bicubic for every cell that isn't built yet and can be.
  /// Idempotent: already-built cells are left untouched. With the `rayon`
  /// feature, the independent per-cell builds run in parallel — safe
  /// because every cell here is already `Valid`-backed and the frontier
  /// has no further ordering dependency on them.
  #[cfg(not(feature = "rayon"))]
  pub fn build_cells(&mut self) {
    for lc in 0..self.grid.num_cells() {
      if self.cells[lc].is_none() && self.can_build_cell(lc) {
        self.cells[lc] = Some(self.build_cell(lc));
      }
    }
  }

  #[cfg(feature = "rayon")]
  pub fn build_cells(&mut self) {
    use rayon::prelude::*;

    let built: Vec<Option<Bicubic>> = (0..self.grid.num_cells())
      .into_par_iter()
      .map(|lc| if self.cells[lc].is_none() && self.can_build_cell(lc) { Some(self.build_cell(lc)) } else { None })
      .collect();
    for (lc, cell) in built.into_iter().enumerate() {
      if let Some(cell) = cell {
        self.cells[lc] = Some(cell);
      }
    }
  }

  fn build_cell(&self, lc: usize) -> Bicubic {
    let corners = self.grid.cell_corners(lc);
    Bicubic::build(
      [self.jets[corners[0]], self.jets[corners[1]], self.jets[corners[2]], self.jets[corners[3]]],
      self.grid.h,
    )
  }

  fn locate(&mut self, xy: DVec2) -> Result<(usize, DVec2)> {
    let (lc, cc) = self.grid.xy_to_lc_and_cc(xy)?;
    if self.cells[lc].is_none() {
      if !self.can_build_cell(lc) {
        return Err(EikonalError::CellNotReady { i: self.grid.lc2ind(lc).x, j: self.grid.lc2ind(lc).y });
      }
      self.cells[lc] = Some(self.build_cell(lc));
    }
    Ok((lc, cc))
  }

  /// Continuous travel time at `(x, y)`, built on demand from the
  /// containing cell's bicubic.
  pub fn t(&mut self, x: f64, y: f64) -> Result<f64> {
    let (lc, cc) = self.locate(DVec2::new(x, y))?;
    Ok(self.cells[lc].as_ref().expect("just built").f(cc))
  }

  /// `dT/dx` at `(x, y)`.
  pub fn tx(&mut self, x: f64, y: f64) -> Result<f64> {
    let (lc, cc) = self.locate(DVec2::new(x, y))?;
    Ok(self.cells[lc].as_ref().expect("just built").fx(cc) / self.grid.h)
  }

  /// `dT/dy` at `(x, y)`.
  pub fn ty(&mut self, x: f64, y: f64) -> Result<f64> {
    let (lc, cc) = self.locate(DVec2::new(x, y))?;
    Ok(self.cells[lc].as_ref().expect("just built").fy(cc) / self.grid.h)
  }

  /// `d2T/dxdy` at `(x, y)`.
  pub fn txy(&mut self, x: f64, y: f64) -> Result<f64> {
    let (lc, cc) = self.locate(DVec2::new(x, y))?;
    Ok(self.cells[lc].as_ref().expect("just built").fxy(cc) / (self.grid.h * self.grid.h))
  }
}

#[cfg(test)]
#[path = "grid2_test.rs"]
mod grid2_test;
