//! eikonal_core — engine-independent fast-marching eikonal solver.
//!
//! Computes first-arrival solutions to the eikonal equation `|grad T(x)| =
//! s(x)` on a uniform 2D Cartesian grid ([`marcher::Marcher2`]) and on
//! unstructured 3D tetrahedral meshes ([`marcher::Marcher3`]), producing a
//! travel-time *jet* (value plus partial derivatives) at every node. Jets
//! let downstream consumers reconstruct smooth piecewise interpolants —
//! bicubics on 2D grid cells, Bernstein–Bézier triangle/tetrahedron
//! polynomials in 3D — and evaluate `T`/`grad T` at any continuous point,
//! not just mesh nodes.
//!
//! # Layout
//!
//! - [`bb`]: Bernstein–Bézier polynomial evaluation and differentiation on
//!   the edge, triangle, and tetrahedron bases the rest of the crate is
//!   built on.
//! - [`heap`]: the indexed min-heap driving the propagation frontier.
//! - [`hybrid`]: the bracketed root-finder [`utri`] minimizes over.
//! - [`qp`]: the analytic 2-simplex QP solver [`utetra`]'s Newton step
//!   calls every iteration.
//! - [`utri`] / [`utetra`]: the two local-update kernels (two-point edge,
//!   three-point face) that compute a candidate jet at a node from its
//!   already-`Valid` neighbours.
//! - [`jet`] / [`slowness`] / [`grid`] / [`mesh`]: the data model (jets,
//!   the slowness field, and the 2D grid / 3D mesh oracles).
//! - [`marcher`]: the propagation drivers tying everything together.
//!
//! # Example
//!
//! ```
//! use eikonal_core::grid::Grid2;
//! use eikonal_core::jet::Jet2;
//! use eikonal_core::marcher::Marcher2;
//! use glam::{DVec2, IVec2};
//!
//! let grid = Grid2::new(IVec2::new(9, 9), DVec2::new(-1.0, -1.0), 0.25);
//! let mut marcher = Marcher2::new(grid);
//!
//! let centre = grid.ind2l(IVec2::new(4, 4));
//! marcher.add_trial(centre, Jet2::new(0.0, 0.0, 0.0, 0.0));
//! marcher.solve();
//!
//! let t = marcher.t(0.5, 0.0).unwrap();
//! assert!((t - 0.5).abs() < 0.05);
//! ```

pub mod bb;
pub mod error;
pub mod grid;
pub mod heap;
pub mod hybrid;
pub mod jet;
pub mod marcher;
pub mod mesh;
pub mod metrics;
pub mod qp;
pub mod slowness;
pub mod utetra;
pub mod utri;

pub use error::{EikonalError, Result};
pub use jet::{Jet2, Jet3};
pub use marcher::{Marcher2, Marcher3, NodeState};
pub use slowness::{Slowness2, Slowness3, Unit};
