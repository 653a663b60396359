//! Mesh representation and inter-element connectivity.

mod connectivity;
mod mesh1d;

pub use connectivity::{Connectivity, FaceNode, N_FACES};
pub use mesh1d::{BoundaryLabel, Mesh1D, MeshError};
