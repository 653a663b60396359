//! Inter-element connectivity.
//!
//! Two layers: element/face adjacency derived from the topology, and an
//! explicit arena of per-face-node records linking the local ("minus")
//! volume node of every face to the matching neighbor ("plus") node.
//! Self-adjacency marks a physical boundary face, as does a face node
//! whose physical coordinate has no match on the neighbor side.

use super::mesh1d::{Mesh1D, MeshError};

/// Faces per 1D element.
pub const N_FACES: usize = 2;

/// One face node of one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceNode {
    /// Owning element
    pub element: usize,
    /// Local face index (0 = left, 1 = right)
    pub face: usize,
    /// Flattened volume index of the interior trace
    pub minus: usize,
    /// Flattened volume index of the neighbor trace; equals `minus` at a
    /// boundary face
    pub plus: usize,
    /// True if this face node lies on the physical boundary
    pub boundary: bool,
}

/// Element/face adjacency plus the face-node arena.
#[derive(Clone)]
pub struct Connectivity {
    /// Neighbor element per (element, face); self at boundaries
    pub etoe: Vec<[usize; N_FACES]>,
    /// Neighbor face per (element, face); own face at boundaries
    pub etof: Vec<[usize; N_FACES]>,
    /// Face-node records, ordered (element, face) row-major
    pub face_nodes: Vec<FaceNode>,
    /// Indices into `face_nodes` of the boundary face nodes, ascending
    pub boundary: Vec<usize>,
}

impl Connectivity {
    /// Build connectivity for `mesh` with `n_nodes` volume nodes per
    /// element, matching face nodes through the physical coordinates `x`
    /// (element-major, as produced by [`Mesh1D::node_coordinates`]).
    pub fn build(mesh: &Mesh1D, x: &[f64], n_nodes: usize) -> Result<Self, MeshError> {
        let (etoe, etof) = connect(mesh)?;

        // Reciprocity: the neighbor of my neighbor at the matched face is me.
        for (k, faces) in etoe.iter().enumerate() {
            for f in 0..N_FACES {
                let (k2, f2) = (faces[f], etof[k][f]);
                if etoe[k2][f2] != k || etof[k2][f2] != f {
                    return Err(MeshError::NonReciprocalAdjacency {
                        element: k,
                        face: f,
                    });
                }
            }
        }

        // Coordinate-match tolerance scaled to the domain extent.
        let extent = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - x.iter().cloned().fold(f64::INFINITY, f64::min);
        let tol = 1e-10 * extent.max(1.0);

        let n_elements = mesh.n_elements();
        let mut face_nodes = Vec::with_capacity(n_elements * N_FACES);
        let mut boundary = Vec::new();

        for k in 0..n_elements {
            for f in 0..N_FACES {
                let minus = k * n_nodes + if f == 0 { 0 } else { n_nodes - 1 };
                let (k2, f2) = (etoe[k][f], etof[k][f]);

                let mut plus = minus;
                let mut is_boundary = true;

                if (k2, f2) != (k, f) {
                    let candidate = k2 * n_nodes + if f2 == 0 { 0 } else { n_nodes - 1 };
                    if (x[minus] - x[candidate]).abs() < tol {
                        plus = candidate;
                        is_boundary = false;
                    }
                }

                if is_boundary {
                    boundary.push(face_nodes.len());
                }
                face_nodes.push(FaceNode {
                    element: k,
                    face: f,
                    minus,
                    plus,
                    boundary: is_boundary,
                });
            }
        }

        Ok(Self {
            etoe,
            etof,
            face_nodes,
            boundary,
        })
    }

    /// Face-node record of face `f` of element `k`.
    pub fn face_node(&self, k: usize, f: usize) -> &FaceNode {
        &self.face_nodes[k * N_FACES + f]
    }

    /// Number of face nodes (faces × elements in 1D).
    pub fn n_face_nodes(&self) -> usize {
        self.face_nodes.len()
    }
}

/// Derive element/face adjacency from the element-to-vertex topology.
///
/// Faces sharing a vertex are neighbors; a face whose vertex belongs to no
/// other element is its own neighbor (a boundary face). A vertex incident
/// to more than two faces is a topology error.
fn connect(mesh: &Mesh1D) -> Result<(Vec<[usize; N_FACES]>, Vec<[usize; N_FACES]>), MeshError> {
    let n_elements = mesh.n_elements();

    // vertex -> incident (element, face) pairs
    let mut incident: Vec<Vec<(usize, usize)>> = vec![Vec::new(); mesh.vx.len()];
    for (k, verts) in mesh.etov.iter().enumerate() {
        for (f, &v) in verts.iter().enumerate() {
            if incident[v].len() == 2 {
                return Err(MeshError::NonManifoldVertex { vertex: v });
            }
            incident[v].push((k, f));
        }
    }

    let mut etoe: Vec<[usize; N_FACES]> = (0..n_elements).map(|k| [k, k]).collect();
    let mut etof: Vec<[usize; N_FACES]> = (0..n_elements).map(|_| [0, 1]).collect();

    for pairs in &incident {
        if let [(k1, f1), (k2, f2)] = pairs[..] {
            etoe[k1][f1] = k2;
            etof[k1][f1] = f2;
            etoe[k2][f2] = k1;
            etof[k2][f2] = f1;
        }
    }

    Ok((etoe, etof))
}
