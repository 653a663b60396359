//! 1D mesh representation.
//!
//! A mesh is an ordered set of vertices, an element-to-vertex topology,
//! and a single boundary-condition label applied uniformly to the whole
//! mesh boundary. Per-face labels are deliberately not supported.
//! Immutable after construction.

use std::str::FromStr;
use thiserror::Error;

/// Mesh configuration errors. All fatal, raised at setup, never retried.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh must contain at least one element")]
    EmptyMesh,
    #[error("invalid interval: x_max {x_max} must exceed x_min {x_min}")]
    InvalidInterval { x_min: f64, x_max: f64 },
    #[error("unknown boundary label \"{0}\"")]
    UnknownBoundaryLabel(String),
    #[error("element {element} references vertex {vertex} out of range {n_vertices}")]
    VertexOutOfRange {
        element: usize,
        vertex: usize,
        n_vertices: usize,
    },
    #[error("vertex {vertex} is shared by more than two element faces")]
    NonManifoldVertex { vertex: usize },
    #[error("adjacency is not reciprocal at element {element}, face {face}")]
    NonReciprocalAdjacency { element: usize, face: usize },
}

/// Boundary condition applied to every physical boundary face of the mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryLabel {
    /// Perfect electric conductor: ghost E negated, H copied
    #[default]
    Pec,
    /// Perfect magnetic conductor: ghost H negated, E copied
    Pmc,
    /// Silver-Mueller absorbing (matched) termination: ghost fields zero
    Sma,
    /// Periodic: ghost taken from the opposite boundary node
    Periodic,
}

impl FromStr for BoundaryLabel {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PEC" => Ok(Self::Pec),
            "PMC" => Ok(Self::Pmc),
            "SMA" => Ok(Self::Sma),
            "Periodic" => Ok(Self::Periodic),
            other => Err(MeshError::UnknownBoundaryLabel(other.to_string())),
        }
    }
}

/// 1D mesh of an interval.
#[derive(Clone)]
pub struct Mesh1D {
    /// Vertex coordinates
    pub vx: Vec<f64>,
    /// Element-to-vertex topology: element k spans vx[etov[k][0]]..vx[etov[k][1]]
    pub etov: Vec<[usize; 2]>,
    /// Boundary condition label shared by all boundary faces
    pub boundary_label: BoundaryLabel,
}

impl Mesh1D {
    /// Uniform partition of [x_min, x_max] into `n_elements` elements.
    pub fn uniform(
        x_min: f64,
        x_max: f64,
        n_elements: usize,
        boundary_label: BoundaryLabel,
    ) -> Result<Self, MeshError> {
        if n_elements == 0 {
            return Err(MeshError::EmptyMesh);
        }
        if x_max <= x_min {
            return Err(MeshError::InvalidInterval { x_min, x_max });
        }

        let h = (x_max - x_min) / n_elements as f64;
        let vx: Vec<f64> = (0..=n_elements).map(|i| x_min + i as f64 * h).collect();
        let etov: Vec<[usize; 2]> = (0..n_elements).map(|k| [k, k + 1]).collect();

        Ok(Self {
            vx,
            etov,
            boundary_label,
        })
    }

    /// Mesh from explicit vertices and topology.
    ///
    /// Vertices must be listed so every element has positive extent; sign
    /// errors surface later as a non-positive Jacobian.
    pub fn from_vertices(
        vx: Vec<f64>,
        etov: Vec<[usize; 2]>,
        boundary_label: BoundaryLabel,
    ) -> Result<Self, MeshError> {
        if etov.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        for (k, verts) in etov.iter().enumerate() {
            for &v in verts {
                if v >= vx.len() {
                    return Err(MeshError::VertexOutOfRange {
                        element: k,
                        vertex: v,
                        n_vertices: vx.len(),
                    });
                }
            }
        }

        Ok(Self {
            vx,
            etov,
            boundary_label,
        })
    }

    pub fn n_elements(&self) -> usize {
        self.etov.len()
    }

    /// Physical node coordinates, element-major: x[k·n + i] is node i of
    /// element k, placed by the affine map of the reference nodes.
    pub fn node_coordinates(&self, reference_nodes: &[f64]) -> Vec<f64> {
        let mut x = Vec::with_capacity(self.n_elements() * reference_nodes.len());
        for verts in &self.etov {
            let va = self.vx[verts[0]];
            let vb = self.vx[verts[1]];
            for &r in reference_nodes {
                x.push(va + 0.5 * (r + 1.0) * (vb - va));
            }
        }
        x
    }
}
