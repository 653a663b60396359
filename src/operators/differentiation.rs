//! Nodal differentiation matrix.
//!
//! Dr maps nodal values to nodal derivative values on the reference
//! element: (du/dr)_i = Σ_j Dr[i,j] u_j. It is exact for polynomials of
//! degree up to N by construction, Dr = Vr · V⁻¹.

use crate::basis::Vandermonde;
use faer::Mat;

/// Compute Dr = Vr · V⁻¹.
pub fn differentiation_matrix(vander: &Vandermonde) -> Mat<f64> {
    let n = vander.order + 1;
    let mut dr = Mat::zeros(n, n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += vander.vr[(i, k)] * vander.v_inv[(k, j)];
            }
            dr[(i, j)] = sum;
        }
    }

    dr
}
