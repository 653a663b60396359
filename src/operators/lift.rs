//! Surface LIFT matrix.
//!
//! LIFT maps the two face flux values of a 1D element into a full elemental
//! load vector: LIFT = M⁻¹ · Eᵀ, where E extracts the boundary nodes
//! (E[0,:] = e_0ᵀ, E[1,:] = e_{N}ᵀ for a Lagrange basis on GLL nodes).
//!
//! The exact inverse mass M⁻¹ = V·Vᵀ is used, so LIFT is the first and
//! last column of V·Vᵀ. Note this is dense in the node index, unlike the
//! lumped-mass variant where only the corner entries survive.

use crate::basis::Vandermonde;
use faer::Mat;

/// Compute the (N+1)×2 LIFT matrix. Column 0 lifts the face at r = -1,
/// column 1 the face at r = +1.
pub fn lift_matrix(vander: &Vandermonde) -> Mat<f64> {
    let n = vander.order + 1;
    let m_inv = vander.inverse_mass();

    let mut lift = Mat::zeros(n, 2);
    for i in 0..n {
        lift[(i, 0)] = m_inv[(i, 0)];
        lift[(i, 1)] = m_inv[(i, n - 1)];
    }

    lift
}
