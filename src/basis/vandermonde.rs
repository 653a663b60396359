//! Vandermonde matrix for nodal-modal transformations.
//!
//! The generalized Vandermonde matrix V connects the nodal and modal views
//! of an elemental polynomial:
//! - V[i,j] = φ_j(r_i) with φ_j the normalized Legendre polynomial of
//!   degree j and r_i the i-th GLL node,
//! - nodal = V · modal, modal = V⁻¹ · nodal.
//!
//! With the normalization φ_j = sqrt((2j+1)/2) P_j the modal mass matrix is
//! the identity, so the elemental mass matrix is M = (V·Vᵀ)⁻¹ and its
//! inverse is simply V·Vᵀ.

use crate::polynomial::{legendre, legendre_derivative};
use faer::{prelude::SpSolver, Mat};

/// Vandermonde matrix, its inverse, and the derivative Vandermonde.
#[derive(Clone)]
pub struct Vandermonde {
    /// V[i,j] = φ_j(r_i)
    pub v: Mat<f64>,
    /// V⁻¹
    pub v_inv: Mat<f64>,
    /// Vr[i,j] = φ'_j(r_i)
    pub vr: Mat<f64>,
    /// Polynomial order
    pub order: usize,
}

impl Vandermonde {
    /// Build the Vandermonde matrices for the given order and node set.
    pub fn new(order: usize, nodes: &[f64]) -> Self {
        let n = order + 1;
        assert_eq!(nodes.len(), n, "need order+1 nodes");

        let mut v = Mat::zeros(n, n);
        let mut vr = Mat::zeros(n, n);

        for (i, &r) in nodes.iter().enumerate() {
            for j in 0..n {
                let norm = ((2 * j + 1) as f64 / 2.0).sqrt();
                v[(i, j)] = norm * legendre(j, r);
                vr[(i, j)] = norm * legendre_derivative(j, r);
            }
        }

        // Invert via full-pivot LU, solving V · V⁻¹ = I column by column.
        let lu = v.as_ref().full_piv_lu();
        let mut v_inv = Mat::zeros(n, n);
        for j in 0..n {
            let mut rhs = Mat::zeros(n, 1);
            rhs[(j, 0)] = 1.0;
            let col = lu.solve(&rhs);
            for i in 0..n {
                v_inv[(i, j)] = col[(i, 0)];
            }
        }

        Self {
            v,
            v_inv,
            vr,
            order,
        }
    }

    /// Inverse mass matrix M⁻¹ = V·Vᵀ.
    pub fn inverse_mass(&self) -> Mat<f64> {
        let n = self.order + 1;
        let mut m_inv = Mat::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += self.v[(i, k)] * self.v[(j, k)];
                }
                m_inv[(i, j)] = sum;
            }
        }
        m_inv
    }
}
