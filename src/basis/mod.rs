//! Polynomial basis machinery: Vandermonde matrices.

mod vandermonde;

pub use vandermonde::Vandermonde;
