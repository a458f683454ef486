//! Caller-facing error surface.
//!
//! Internal invariant breaks (heap capacity exceeded, non-finite jet fed
//! into a local update, a Valid node re-inserted) are programmer errors and
//! are asserted against rather than returned — see the crate-level docs.
//! `EikonalError` covers the remaining, caller-facing boundary conditions:
//! continuous evaluation outside the domain the solver has actually
//! computed.

use thiserror::Error;

/// Errors surfaced at the continuous-evaluation boundary (`Marcher2::t`,
/// `Marcher3::t`, grid/mesh point location).
#[derive(Debug, Error, PartialEq)]
pub enum EikonalError {
  #[error("point ({x}, {y}) lies outside the grid domain")]
  OutOfDomain2 { x: f64, y: f64 },

  #[error("point ({x}, {y}, {z}) is not contained in any tetrahedron of the mesh")]
  OutOfDomain3 { x: f64, y: f64, z: f64 },

  #[error("cell ({i}, {j}) cannot be evaluated: not all four corners are finite")]
  CellNotReady { i: i32, j: i32 },

  #[error("tetrahedron {tet} cannot be evaluated: not all four corners are finite")]
  TetNotReady { tet: usize },
}

pub type Result<T> = std::result::Result<T, EikonalError>;
