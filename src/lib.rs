//! # maxwell-dg
//!
//! A nodal discontinuous Galerkin time-domain (DGTD) solver for the 1D
//! Maxwell equations.
//!
//! The crate provides the building blocks of the method:
//! - Legendre polynomials and Gauss-Lobatto quadrature
//! - Reference-element operators (Vandermonde, differentiation, LIFT)
//! - Mesh representation and face connectivity
//! - Per-element geometric factors
//! - The Maxwell spatial discretization with upwind/centered fluxes,
//!   PEC/PMC/SMA/periodic boundaries, and piecewise-constant materials
//! - A low-storage RK4 time-marching driver
//! - Probes and DFT helpers for spectral post-processing
//!
//! ```
//! use maxwell_dg::{BoundaryLabel, FluxType, Maxwell1D, MaxwellDriver, Mesh1D};
//!
//! let mesh = Mesh1D::uniform(0.0, 1.0, 20, BoundaryLabel::Pec).unwrap();
//! let sp = Maxwell1D::new(3, mesh, FluxType::Upwind).unwrap();
//! let mut driver = MaxwellDriver::new(&sp);
//!
//! let x = sp.node_coordinates().to_vec();
//! driver
//!     .e_mut()
//!     .set_from_function(&x, |x| (-(x - 0.5) * (x - 0.5) / 0.005).exp());
//!
//! driver.run(1.0);
//! assert!(driver.time() >= 1.0);
//! ```

pub mod analysis;
pub mod basis;
pub mod mesh;
pub mod operators;
pub mod polynomial;
pub mod solver;
pub mod time;

pub use analysis::{dft_magnitudes, log_frequencies, Probe};
pub use basis::Vandermonde;
pub use mesh::{BoundaryLabel, Connectivity, FaceNode, Mesh1D, MeshError};
pub use operators::{GeometricFactors1D, GeometryError, OperatorError, ReferenceElement1D};
pub use solver::{
    Field1D, FluxType, MaterialProperties, Maxwell1D, SolverError, SpatialDiscretization,
};
pub use time::{MaxwellDriver, RK4A, RK4B, RK4C};
