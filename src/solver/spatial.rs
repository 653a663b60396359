//! Spatial discretization interface.

use super::field::Field1D;

/// Capability set shared by the dimensional variants of the Maxwell
/// discretization. The time-marching driver is generic over this trait;
/// everything it needs from space is the field shape, the semi-discrete
/// right-hand side, and the mesh resolution for the CFL bound.
pub trait SpatialDiscretization {
    /// Number of mesh elements.
    fn n_elements(&self) -> usize;

    /// Volume nodes per element.
    fn nodes_per_element(&self) -> usize;

    /// Allocate zero-initialized (E, H) fields of the right shape.
    fn build_fields(&self) -> (Field1D, Field1D);

    /// Evaluate the semi-discrete right-hand side (dE/dt, dH/dt) at the
    /// given field state. Reads material and geometry state only; no
    /// mutation beyond the returned arrays.
    fn compute_rhs(&self, e: &Field1D, h: &Field1D) -> (Field1D, Field1D);

    /// Smallest physical distance between adjacent nodes, the mesh
    /// resolution entering the stable-step bound.
    fn min_node_spacing(&self) -> f64;
}
