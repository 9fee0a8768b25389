//! Dense univariate polynomials and Lagrange interpolation.

/// Module for dense polynomials.
pub mod field_polynomial;

/// Module for Lagrange interpolation.
pub mod lagrange;

pub use field_polynomial::FpPolynomial;
