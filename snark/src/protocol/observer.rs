use crate::poly::FpPolynomial;
use crate::protocol::keys::{Proof, ProvingKey, VerificationKey};
use qap_algebra::prelude::*;

/// Receives the intermediate values of setup, prove and verify, for callers that
/// want to display or record them. Secret randomness is never passed in.
///
/// Every method defaults to doing nothing.
pub trait ProtocolObserver<G: Group> {
    /// Keys were produced by setup.
    fn on_setup(&mut self, _pk: &ProvingKey<G>, _vk: &VerificationKey<G>) {}

    /// The witness-combined `A`, `B` and `C` polynomials were computed by the prover.
    fn on_combined_polynomials(
        &mut self,
        _a: &FpPolynomial<G::ScalarType>,
        _b: &FpPolynomial<G::ScalarType>,
        _c: &FpPolynomial<G::ScalarType>,
    ) {
    }

    /// The quotient `H = (A*B - C) / Z` was computed by the prover.
    fn on_quotient(&mut self, _h: &FpPolynomial<G::ScalarType>) {}

    /// A proof was produced.
    fn on_proof(&mut self, _proof: &Proof<G>) {}

    /// The public inputs were folded into `vk_x` by the verifier.
    fn on_input_consistency(&mut self, _vk_x: &G) {}

    /// The verifier reached a decision.
    fn on_verification(&mut self, _accepted: bool) {}
}

/// An observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<G: Group> ProtocolObserver<G> for NoopObserver {}
