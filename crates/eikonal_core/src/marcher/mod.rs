//! Fast-marching propagation drivers.
//!
//! [`grid2`] drives a 2D uniform grid (via [`crate::grid::Grid2`]);
//! [`mesh3`] drives an unstructured 3D tetrahedral mesh (via
//! [`crate::mesh::TetMesh3`]). Both share the same node-state machine
//! ([`state::NodeState`]) and the same overall loop shape: extract the
//! minimum-value Trial node from the heap, promote it to Valid, then
//! re-evaluate its Far/Trial neighbours against every local update their
//! newly-Valid neighbours make available.

pub mod grid2;
pub mod mesh3;
pub mod state;

pub use grid2::Marcher2;
pub use mesh3::Marcher3;
pub use state::NodeState;
