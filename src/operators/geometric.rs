//! Per-element geometric factors.
//!
//! The affine map from the reference element to a physical element has a
//! per-node Jacobian J = dx/dr, computed by differentiating the physical
//! node coordinates with the reference operator: J = Dr · x. Its
//! reciprocal rx = dr/dx rescales reference-space derivatives to physical
//! space.

use faer::Mat;
use thiserror::Error;

/// Mesh-quality failure detected while building geometric factors.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A degenerate or inverted element. Unrecoverable; fix the mesh.
    #[error("non-positive Jacobian {value:.3e} in element {element}, node {node}")]
    NonPositiveJacobian {
        element: usize,
        node: usize,
        value: f64,
    },
}

/// Jacobian and inverse metric per volume node, stored element-major
/// (index k·n_nodes + i).
#[derive(Clone)]
pub struct GeometricFactors1D {
    /// J = dx/dr at each node
    pub jacobian: Vec<f64>,
    /// rx = dr/dx = 1/J at each node
    pub rx: Vec<f64>,
    pub n_elements: usize,
    pub n_nodes: usize,
}

impl GeometricFactors1D {
    /// Compute geometric factors from physical node coordinates `x`
    /// (element-major) and the reference differentiation matrix.
    pub fn compute(
        x: &[f64],
        dr: &Mat<f64>,
        n_elements: usize,
        n_nodes: usize,
    ) -> Result<Self, GeometryError> {
        assert_eq!(x.len(), n_elements * n_nodes);

        let mut jacobian = vec![0.0; x.len()];
        let mut rx = vec![0.0; x.len()];

        for k in 0..n_elements {
            let xk = &x[k * n_nodes..(k + 1) * n_nodes];
            for i in 0..n_nodes {
                let mut j = 0.0;
                for m in 0..n_nodes {
                    j += dr[(i, m)] * xk[m];
                }
                if j <= 0.0 {
                    return Err(GeometryError::NonPositiveJacobian {
                        element: k,
                        node: i,
                        value: j,
                    });
                }
                jacobian[k * n_nodes + i] = j;
                rx[k * n_nodes + i] = 1.0 / j;
            }
        }

        Ok(Self {
            jacobian,
            rx,
            n_elements,
            n_nodes,
        })
    }

    /// Jacobian at node i of element k.
    pub fn jacobian_at(&self, k: usize, i: usize) -> f64 {
        self.jacobian[k * self.n_nodes + i]
    }

    /// Inverse metric at node i of element k.
    pub fn rx_at(&self, k: usize, i: usize) -> f64 {
        self.rx[k * self.n_nodes + i]
    }
}
