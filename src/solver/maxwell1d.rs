//! 1D Maxwell spatial discretization.
//!
//! Semi-discrete form of the source-free 1D Maxwell curl equations with
//! piecewise-constant materials,
//!
//! ε ∂E/∂t = -∂H/∂x - σE,   μ ∂H/∂t = -∂E/∂x,
//!
//! discretized in strong DG form: per element,
//!
//! dE/dt = (1/ε) · (-rx · Dr·H + LIFT · (flux_E / J_face)) - (σ/ε)·E
//! dH/dt = (1/μ) · (-rx · Dr·E + LIFT · (flux_H / J_face))
//!
//! where the face fluxes penalize the inter-element jumps. Impedance and
//! admittance traces are derived from the static materials once at
//! construction and cached.

use crate::mesh::{BoundaryLabel, Connectivity, Mesh1D, MeshError, N_FACES};
use crate::operators::{GeometricFactors1D, GeometryError, OperatorError, ReferenceElement1D};
use crate::solver::{Field1D, SpatialDiscretization};
use faer::Mat;
use thiserror::Error;

/// Numerical flux policy.
///
/// Upwind injects directional dissipation and is the stable default;
/// centered is energy-conserving but only marginally stable under long
/// explicit integration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FluxType {
    #[default]
    Upwind,
    Centered,
}

/// Construction errors of the spatial discretization.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error(transparent)]
    Operator(#[from] OperatorError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("material array has {got} entries, mesh has {expected} elements")]
    MaterialLengthMismatch { got: usize, expected: usize },
}

/// Piecewise-constant material coefficients, one value per element.
#[derive(Clone, Debug)]
pub struct MaterialProperties {
    /// Relative permittivity ε
    pub epsilon: Vec<f64>,
    /// Relative permeability μ
    pub mu: Vec<f64>,
    /// Normalized conductivity σ
    pub sigma: Vec<f64>,
}

impl MaterialProperties {
    /// Vacuum: ε = μ = 1, σ = 0 everywhere.
    pub fn vacuum(n_elements: usize) -> Self {
        Self {
            epsilon: vec![1.0; n_elements],
            mu: vec![1.0; n_elements],
            sigma: vec![0.0; n_elements],
        }
    }

    /// Replace the permittivity profile.
    pub fn with_epsilon(mut self, epsilon: Vec<f64>) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Replace the permeability profile.
    pub fn with_mu(mut self, mu: Vec<f64>) -> Self {
        self.mu = mu;
        self
    }

    /// Replace the conductivity profile.
    pub fn with_sigma(mut self, sigma: Vec<f64>) -> Self {
        self.sigma = sigma;
        self
    }

    fn validate(&self, n_elements: usize) -> Result<(), SolverError> {
        for arr in [&self.epsilon, &self.mu, &self.sigma] {
            if arr.len() != n_elements {
                return Err(SolverError::MaterialLengthMismatch {
                    got: arr.len(),
                    expected: n_elements,
                });
            }
        }
        Ok(())
    }
}

/// The assembled 1D Maxwell DG operator.
///
/// Immutable after construction; [`Maxwell1D::compute_rhs`] only reads.
pub struct Maxwell1D {
    pub mesh: Mesh1D,
    pub flux_type: FluxType,
    pub ops: ReferenceElement1D,
    pub materials: MaterialProperties,
    /// Physical node coordinates, element-major
    x: Vec<f64>,
    geom: GeometricFactors1D,
    conn: Connectivity,
    /// Outward normal per face node (-1 left face, +1 right face)
    nx: Vec<f64>,
    /// Impedance trace from this side / the neighbor side, and their sum
    z_minus: Vec<f64>,
    z_plus: Vec<f64>,
    z_sum: Vec<f64>,
    /// Admittance traces (reciprocals of impedance) and their sum
    y_plus: Vec<f64>,
    y_sum: Vec<f64>,
}

impl Maxwell1D {
    /// Discretization with vacuum materials.
    pub fn new(order: usize, mesh: Mesh1D, flux_type: FluxType) -> Result<Self, SolverError> {
        let materials = MaterialProperties::vacuum(mesh.n_elements());
        Self::with_materials(order, mesh, flux_type, materials)
    }

    /// Discretization with explicit per-element materials.
    pub fn with_materials(
        order: usize,
        mesh: Mesh1D,
        flux_type: FluxType,
        materials: MaterialProperties,
    ) -> Result<Self, SolverError> {
        materials.validate(mesh.n_elements())?;

        let ops = ReferenceElement1D::new(order)?;
        let x = mesh.node_coordinates(&ops.nodes);
        let geom = GeometricFactors1D::compute(&x, &ops.dr, mesh.n_elements(), ops.n_nodes)?;
        let conn = Connectivity::build(&mesh, &x, ops.n_nodes)?;

        // Per-element impedance Z = sqrt(μ/ε), traced onto the face nodes.
        // Materials are static, so these never change after construction.
        let impedance: Vec<f64> = materials
            .epsilon
            .iter()
            .zip(&materials.mu)
            .map(|(&eps, &mu)| (mu / eps).sqrt())
            .collect();

        let n_fn = conn.n_face_nodes();
        let mut nx = vec![0.0; n_fn];
        let mut z_minus = vec![0.0; n_fn];
        let mut z_plus = vec![0.0; n_fn];
        for (idx, fnode) in conn.face_nodes.iter().enumerate() {
            nx[idx] = if fnode.face == 0 { -1.0 } else { 1.0 };
            z_minus[idx] = impedance[fnode.element];
            z_plus[idx] = impedance[fnode.plus / ops.n_nodes];
        }
        let z_sum: Vec<f64> = z_minus.iter().zip(&z_plus).map(|(a, b)| a + b).collect();
        let y_plus: Vec<f64> = z_plus.iter().map(|&z| 1.0 / z).collect();
        let y_sum: Vec<f64> = z_minus
            .iter()
            .zip(&z_plus)
            .map(|(&zm, &zp)| 1.0 / zm + 1.0 / zp)
            .collect();

        Ok(Self {
            mesh,
            flux_type,
            ops,
            materials,
            x,
            geom,
            conn,
            nx,
            z_minus,
            z_plus,
            z_sum,
            y_plus,
            y_sum,
        })
    }

    /// Physical node coordinates, element-major.
    pub fn node_coordinates(&self) -> &[f64] {
        &self.x
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.conn
    }

    pub fn geometric_factors(&self) -> &GeometricFactors1D {
        &self.geom
    }

    /// Resolve the exterior ("ghost") field traces at the boundary face
    /// nodes, ordered as in `connectivity().boundary`.
    pub fn boundary_traces(&self, e: &Field1D, h: &Field1D) -> (Vec<f64>, Vec<f64>) {
        let boundary = &self.conn.boundary;
        let n_b = boundary.len();
        let mut ebc = vec![0.0; n_b];
        let mut hbc = vec![0.0; n_b];

        for (b, &idx) in boundary.iter().enumerate() {
            let m = self.conn.face_nodes[idx].minus;
            match self.mesh.boundary_label {
                BoundaryLabel::Pec => {
                    ebc[b] = -e.data[m];
                    hbc[b] = h.data[m];
                }
                BoundaryLabel::Pmc => {
                    ebc[b] = e.data[m];
                    hbc[b] = -h.data[m];
                }
                BoundaryLabel::Sma => {
                    ebc[b] = 0.0;
                    hbc[b] = 0.0;
                }
                BoundaryLabel::Periodic => {
                    // Reversed lookup pairs each boundary node with the
                    // opposite end of the domain.
                    let twin = self.conn.face_nodes[boundary[n_b - 1 - b]].minus;
                    ebc[b] = e.data[twin];
                    hbc[b] = h.data[twin];
                }
            }
        }

        (ebc, hbc)
    }

    /// Interior-minus-exterior jumps of E and H at every face node, with
    /// the boundary subset overwritten by the resolved ghost traces.
    fn jumps(&self, e: &Field1D, h: &Field1D) -> (Vec<f64>, Vec<f64>) {
        let n_fn = self.conn.n_face_nodes();
        let mut de = vec![0.0; n_fn];
        let mut dh = vec![0.0; n_fn];

        for (idx, fnode) in self.conn.face_nodes.iter().enumerate() {
            de[idx] = e.data[fnode.minus] - e.data[fnode.plus];
            dh[idx] = h.data[fnode.minus] - h.data[fnode.plus];
        }

        let (ebc, hbc) = self.boundary_traces(e, h);
        for (b, &idx) in self.conn.boundary.iter().enumerate() {
            let m = self.conn.face_nodes[idx].minus;
            de[idx] = e.data[m] - ebc[b];
            dh[idx] = h.data[m] - hbc[b];
        }

        (de, dh)
    }

    /// Numerical surface fluxes per face node.
    ///
    /// Upwind: flux_E = (Z⁺·nx·dH - dE) / (Z⁻+Z⁺), and dually for H with
    /// admittances. Centered drops the jump-penalty terms dE, dH.
    pub fn surface_fluxes(&self, e: &Field1D, h: &Field1D) -> (Vec<f64>, Vec<f64>) {
        let (de, dh) = self.jumps(e, h);
        let n_fn = de.len();
        let mut flux_e = vec![0.0; n_fn];
        let mut flux_h = vec![0.0; n_fn];

        match self.flux_type {
            FluxType::Upwind => {
                for idx in 0..n_fn {
                    flux_e[idx] =
                        (self.nx[idx] * self.z_plus[idx] * dh[idx] - de[idx]) / self.z_sum[idx];
                    flux_h[idx] =
                        (self.nx[idx] * self.y_plus[idx] * de[idx] - dh[idx]) / self.y_sum[idx];
                }
            }
            FluxType::Centered => {
                for idx in 0..n_fn {
                    flux_e[idx] = self.nx[idx] * self.z_plus[idx] * dh[idx] / self.z_sum[idx];
                    flux_h[idx] = self.nx[idx] * self.y_plus[idx] * de[idx] / self.y_sum[idx];
                }
            }
        }

        (flux_e, flux_h)
    }

    /// Linearize the RHS operator into a dense 2·Np·K square matrix by
    /// probing with unit fields. E degrees of freedom come first.
    pub fn evolution_operator(&self) -> Mat<f64> {
        let np = self.ops.n_nodes;
        let k_total = self.mesh.n_elements();
        let half = np * k_total;
        let n = 2 * half;

        let mut a = Mat::zeros(n, n);
        for col in 0..n {
            let (mut e, mut h) = self.build_fields();
            let node = col % np;
            let elem = (col / np) % k_total;
            if col < half {
                e.element_mut(elem)[node] = 1.0;
            } else {
                h.element_mut(elem)[node] = 1.0;
            }

            let (rhs_e, rhs_h) = self.compute_rhs(&e, &h);
            for row in 0..half {
                a[(row, col)] = rhs_e.data[row];
                a[(half + row, col)] = rhs_h.data[row];
            }
        }

        a
    }

    /// Discrete electromagnetic energy ½∫(εE² + μH²)dx via GLL quadrature.
    pub fn energy(&self, e: &Field1D, h: &Field1D) -> f64 {
        let np = self.ops.n_nodes;
        let mut total = 0.0;
        for k in 0..self.mesh.n_elements() {
            let eps = self.materials.epsilon[k];
            let mu = self.materials.mu[k];
            let ek = e.element(k);
            let hk = h.element(k);
            for i in 0..np {
                let j = self.geom.jacobian_at(k, i);
                total += self.ops.weights[i] * j * (eps * ek[i] * ek[i] + mu * hk[i] * hk[i]);
            }
        }
        0.5 * total
    }
}

impl SpatialDiscretization for Maxwell1D {
    fn n_elements(&self) -> usize {
        self.mesh.n_elements()
    }

    fn nodes_per_element(&self) -> usize {
        self.ops.n_nodes
    }

    fn build_fields(&self) -> (Field1D, Field1D) {
        (
            Field1D::new(self.mesh.n_elements(), self.ops.n_nodes),
            Field1D::new(self.mesh.n_elements(), self.ops.n_nodes),
        )
    }

    fn compute_rhs(&self, e: &Field1D, h: &Field1D) -> (Field1D, Field1D) {
        let np = self.ops.n_nodes;
        let k_total = self.mesh.n_elements();

        let (flux_e, flux_h) = self.surface_fluxes(e, h);

        let mut rhs_e = Field1D::new(k_total, np);
        let mut rhs_h = Field1D::new(k_total, np);

        let mut dr_e = vec![0.0; np];
        let mut dr_h = vec![0.0; np];

        for k in 0..k_total {
            let eps = self.materials.epsilon[k];
            let mu = self.materials.mu[k];
            let sigma = self.materials.sigma[k];
            let ek = e.element(k);
            let hk = h.element(k);

            for i in 0..np {
                let mut se = 0.0;
                let mut sh = 0.0;
                for j in 0..np {
                    se += self.ops.dr[(i, j)] * ek[j];
                    sh += self.ops.dr[(i, j)] * hk[j];
                }
                dr_e[i] = se;
                dr_h[i] = sh;
            }

            // Surface flux scaled by the face Jacobian before lifting.
            let mut scaled_flux_e = [0.0; N_FACES];
            let mut scaled_flux_h = [0.0; N_FACES];
            for f in 0..N_FACES {
                let face_node_index = k * N_FACES + f;
                let j_face = self.geom.jacobian_at(k, if f == 0 { 0 } else { np - 1 });
                scaled_flux_e[f] = flux_e[face_node_index] / j_face;
                scaled_flux_h[f] = flux_h[face_node_index] / j_face;
            }

            let re = rhs_e.element_mut(k);
            for i in 0..np {
                let rx = self.geom.rx_at(k, i);
                let lifted = self.ops.lift[(i, 0)] * scaled_flux_e[0]
                    + self.ops.lift[(i, 1)] * scaled_flux_e[1];
                re[i] = (-rx * dr_h[i] + lifted) / eps - sigma / eps * ek[i];
            }

            let rh = rhs_h.element_mut(k);
            for i in 0..np {
                let rx = self.geom.rx_at(k, i);
                let lifted = self.ops.lift[(i, 0)] * scaled_flux_h[0]
                    + self.ops.lift[(i, 1)] * scaled_flux_h[1];
                rh[i] = (-rx * dr_e[i] + lifted) / mu;
            }
        }

        (rhs_e, rhs_h)
    }

    fn min_node_spacing(&self) -> f64 {
        let np = self.ops.n_nodes;
        (0..self.mesh.n_elements())
            .map(|k| (self.x[k * np + 1] - self.x[k * np]).abs())
            .fold(f64::INFINITY, f64::min)
    }
}
