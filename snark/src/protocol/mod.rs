//! The setup, prove and verify procedures over a [`Qap`](crate::qap::Qap).
//!
//! The verifier only checks the structure of a proof; it performs no pairing check.

/// Proving key, verification key, proof and protocol parameters.
pub mod keys;
/// Callbacks for intermediate protocol values.
pub mod observer;
/// The prover.
pub mod prover;
/// Key generation.
pub mod setup;
/// The verifier.
pub mod verifier;

pub use keys::{Proof, ProvingKey, SnarkParams, VerificationKey};
pub use observer::{NoopObserver, ProtocolObserver};
pub use prover::{prove, prove_with_observer};
pub use setup::{setup, setup_with_observer};
pub use verifier::{verify, verify_with_observer};
