//! Gauss-Lobatto-Legendre nodes and quadrature weights.
//!
//! The N+1 GLL nodes are the roots of (1-x²)P'_N(x), so they include both
//! endpoints of [-1, 1]. Placing the element boundary nodes on the face
//! means surface terms need no interpolation, which is what makes the
//! LIFT matrix of the DG scheme a plain column extraction.

use super::legendre::{legendre, legendre_and_derivative};
use std::f64::consts::PI;

/// Newton iterations allowed per interior node.
const MAX_NEWTON_ITERS: usize = 100;

/// Compute the N+1 Gauss-Lobatto-Legendre nodes for polynomial order N.
///
/// Starts from the Chebyshev-Lobatto points -cos(πj/N) and refines the
/// interior nodes by Newton iteration on P'_N. The endpoints ±1 are exact.
pub fn gauss_lobatto_nodes(order: usize) -> Vec<f64> {
    let n = order;

    if n == 0 {
        return vec![0.0];
    }
    if n == 1 {
        return vec![-1.0, 1.0];
    }

    let mut nodes: Vec<f64> = (0..=n).map(|j| -(PI * j as f64 / n as f64).cos()).collect();
    nodes[0] = -1.0;
    nodes[n] = 1.0;

    for node in nodes.iter_mut().take(n).skip(1) {
        let mut x = *node;

        // Newton update for the zeros of (1-x²)P'_N(x). Using the Legendre
        // ODE, d/dx[(1-x²)P'_N] = -N(N+1)P_N, so
        //   x <- x + (1-x²) P'_N(x) / (N(N+1) P_N(x))
        for _ in 0..MAX_NEWTON_ITERS {
            let (p, dp) = legendre_and_derivative(n, x);
            let update = (1.0 - x * x) * dp / (n as f64 * (n + 1) as f64 * p);

            x += update;
            if update.abs() < 1e-15 {
                break;
            }
        }

        *node = x;
    }

    nodes
}

/// GLL quadrature weights: w_j = 2 / (N(N+1) P_N(x_j)²).
pub fn gauss_lobatto_weights(order: usize, nodes: &[f64]) -> Vec<f64> {
    let n = order;

    if n == 0 {
        return vec![2.0];
    }

    let denom = (n * (n + 1)) as f64;
    nodes
        .iter()
        .map(|&x| {
            let p = legendre(n, x);
            2.0 / (denom * p * p)
        })
        .collect()
}

/// Check that the interior nodes are converged roots of P'_N.
///
/// Used at construction time of the reference element; a failure here means
/// the Newton iteration diverged.
pub fn nodes_converged(order: usize, nodes: &[f64]) -> bool {
    for &x in &nodes[1..order.max(1)] {
        let (_, dp) = legendre_and_derivative(order, x);
        if dp.abs() > 1e-10 {
            return false;
        }
    }
    true
}
