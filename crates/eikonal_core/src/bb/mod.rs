//! Bernstein-Bezier polynomial evaluation and differentiation on simplices.
//!
//! Three concrete bases are provided, all cubic (degree 3):
//!
//! - [`edge`]: 1-simplex, 4 coefficients. Used by [`crate::utri`] to
//!   represent travel time along a mesh/grid edge.
//! - [`triangle`]: 2-simplex, 10 coefficients. Used by [`crate::utetra`] to
//!   represent travel time over the base triangle of a tetrahedron update.
//! - [`tetra`]: 3-simplex, 20 coefficients. Used by the 3D marcher's
//!   continuous-evaluation query (`T(x, y, z)`) to interpolate inside a
//!   tetrahedron from its four corner jets.
//!
//! All three share one generic machinery, [`simplex`], implementing the De
//! Casteljau recursion over barycentric multi-indices; `edge` and
//! `triangle` additionally hand-roll closed-form reductions for their
//! (hot-path, called every Newton iteration of [`crate::utetra`]) `eval`
//! and directional-derivative routines, since finite differences are not
//! accurate enough to drive Newton's method to convergence.

pub mod edge;
pub mod simplex;
pub mod tetra;
pub mod triangle;
