//! Rank-1 constraint systems, their compilation into quadratic arithmetic programs,
//! and a simplified setup/prove/verify argument on top of them.
//!
//! ```
//! use qap_algebra::prelude::*;
//! use qap_snark::{circuits::square_circuit, protocol, qap::Qap};
//!
//! let mut prng = test_rng();
//! let (cs, witness) = square_circuit(Fp::from(3u32)).unwrap();
//! assert!(cs.verify(&witness));
//!
//! let qap = Qap::from_r1cs(&cs).unwrap();
//! let params = protocol::SnarkParams::default();
//! let (pk, vk) = protocol::setup(&mut prng, &params, &qap, &cs, 1).unwrap();
//! let public_inputs = [Fp::from(9u32)];
//! let proof = protocol::prove(&mut prng, &qap, &pk, &witness, &public_inputs).unwrap();
//! assert!(protocol::verify(&vk, &proof, &public_inputs).unwrap());
//! ```

#![deny(warnings)]
#![allow(clippy::upper_case_acronyms)]

/// Module for example circuits.
pub mod circuits;
/// Module for errors.
pub mod errors;
/// Module for polynomials and interpolation.
pub mod poly;
/// Module for the setup, prove and verify procedures.
pub mod protocol;
/// Module for quadratic arithmetic programs.
pub mod qap;
/// Module for rank-1 constraint systems.
pub mod r1cs;
