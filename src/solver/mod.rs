//! Spatial discretization: field storage, the discretization interface,
//! and the 1D Maxwell DG operator.

mod field;
mod maxwell1d;
mod spatial;

pub use field::Field1D;
pub use maxwell1d::{FluxType, MaterialProperties, Maxwell1D, SolverError};
pub use spatial::SpatialDiscretization;
