//! Arithmetic over the prime field `F_p` with `p = 2^31 - 1` and over a short
//! Weierstrass curve defined on top of it.
//!
//! The modulus and the curve are deliberately small; they exist to show the
//! structure of a QAP-based argument, not to provide any security.

#![deny(warnings)]
#![allow(clippy::upper_case_acronyms)]

/// Module for the short Weierstrass curve group.
pub mod curve;
/// Module for errors.
pub mod errors;
/// Module for the prime field.
pub mod field;
/// Module for the prelude.
pub mod prelude;
/// Module for test rng.
pub mod rand_helper;
/// Module for the scalar and group traits.
pub mod traits;
