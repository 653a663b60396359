//! Orthogonal polynomials and quadrature on the reference element [-1, 1].

mod legendre;
mod nodes;

pub use legendre::{legendre, legendre_and_derivative, legendre_derivative};
pub use nodes::{gauss_lobatto_nodes, gauss_lobatto_weights, nodes_converged};
