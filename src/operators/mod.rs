//! Reference-element operators for 1D nodal DG.
//!
//! Everything here is a pure function of the polynomial order: node set,
//! Vandermonde matrices, differentiation matrix, and the surface LIFT.
//! A single [`ReferenceElement1D`] is built once and shared read-only by
//! all elements of the same order.

mod differentiation;
mod geometric;
mod lift;

pub use differentiation::differentiation_matrix;
pub use geometric::{GeometricFactors1D, GeometryError};
pub use lift::lift_matrix;

use crate::basis::Vandermonde;
use crate::polynomial::{gauss_lobatto_nodes, gauss_lobatto_weights, nodes_converged};
use faer::Mat;
use thiserror::Error;

/// Construction-time failure of the reference-element operators.
#[derive(Debug, Error)]
pub enum OperatorError {
    #[error("polynomial order must be at least 1, got {0}")]
    InvalidOrder(usize),
    #[error("Gauss-Lobatto node iteration failed to converge for order {0}")]
    NodesNotConverged(usize),
}

/// All reference-element operators for a given polynomial order.
#[derive(Clone)]
pub struct ReferenceElement1D {
    /// Polynomial order N
    pub order: usize,
    /// Nodes per element, N + 1
    pub n_nodes: usize,
    /// GLL nodes in [-1, 1]
    pub nodes: Vec<f64>,
    /// GLL quadrature weights
    pub weights: Vec<f64>,
    /// Vandermonde matrix and companions
    pub vandermonde: Vandermonde,
    /// Differentiation matrix Dr = Vr · V⁻¹
    pub dr: Mat<f64>,
    /// Surface LIFT matrix, (N+1) × 2
    pub lift: Mat<f64>,
}

impl ReferenceElement1D {
    /// Build the operators for polynomial order `order` (>= 1).
    pub fn new(order: usize) -> Result<Self, OperatorError> {
        if order < 1 {
            return Err(OperatorError::InvalidOrder(order));
        }

        let nodes = gauss_lobatto_nodes(order);
        if !nodes_converged(order, &nodes) {
            return Err(OperatorError::NodesNotConverged(order));
        }
        let weights = gauss_lobatto_weights(order, &nodes);

        let vandermonde = Vandermonde::new(order, &nodes);
        let dr = differentiation_matrix(&vandermonde);
        let lift = lift_matrix(&vandermonde);

        Ok(Self {
            order,
            n_nodes: order + 1,
            nodes,
            weights,
            vandermonde,
            dr,
            lift,
        })
    }
}
