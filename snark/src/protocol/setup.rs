use crate::errors::{Result, SnarkError};
use crate::poly::FpPolynomial;
use crate::protocol::keys::{ProvingKey, SnarkParams, VerificationKey};
use crate::protocol::observer::{NoopObserver, ProtocolObserver};
use crate::qap::Qap;
use crate::r1cs::R1CS;
use ark_std::{end_timer, start_timer};
use qap_algebra::prelude::*;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The secret scalars of a setup. Wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
struct ToxicWaste<S: Scalar> {
    tau: S,
    alpha: S,
    beta: S,
    gamma: S,
    delta: S,
}

impl<S: Scalar> ToxicWaste<S> {
    fn sample<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self {
            tau: S::random_nonzero(prng),
            alpha: S::random_nonzero(prng),
            beta: S::random_nonzero(prng),
            gamma: S::random_nonzero(prng),
            delta: S::random_nonzero(prng),
        }
    }
}

/// Generate a proving key and a verification key for `qap`, with the first
/// `num_public_inputs` non-constant variables treated as public.
pub fn setup<R: CryptoRng + RngCore, G: Group>(
    prng: &mut R,
    params: &SnarkParams<G>,
    qap: &Qap<G::ScalarType>,
    cs: &R1CS<G::ScalarType>,
    num_public_inputs: usize,
) -> Result<(ProvingKey<G>, VerificationKey<G>)> {
    setup_with_observer(prng, params, qap, cs, num_public_inputs, &mut NoopObserver)
}

/// Same as [`setup`], reporting the generated keys to `observer`.
pub fn setup_with_observer<R: CryptoRng + RngCore, G: Group, O: ProtocolObserver<G>>(
    prng: &mut R,
    params: &SnarkParams<G>,
    qap: &Qap<G::ScalarType>,
    cs: &R1CS<G::ScalarType>,
    num_public_inputs: usize,
    observer: &mut O,
) -> Result<(ProvingKey<G>, VerificationKey<G>)> {
    if qap.num_variables() != cs.num_variables() || qap.num_constraints() != cs.num_constraints()
    {
        return Err(SnarkError::InconsistentSetup);
    }
    if num_public_inputs >= cs.num_variables() {
        return Err(SnarkError::InvalidPublicInputCount {
            num_public_inputs,
            num_variables: cs.num_variables(),
        });
    }
    params.check()?;
    let generator = &params.generator;

    let timer = start_timer!(|| format!(
        "Setup: {} variables, {} public inputs",
        qap.num_variables(),
        num_public_inputs
    ));
    let waste = ToxicWaste::<G::ScalarType>::sample(prng);

    let encode_at_tau = |polys: &[FpPolynomial<G::ScalarType>]| -> Result<Vec<G>> {
        polys
            .iter()
            .map(|poly| Ok(generator.mul(&poly.eval(&waste.tau))?))
            .collect()
    };
    let a_query = encode_at_tau(qap.a_polys())?;
    let b_query = encode_at_tau(qap.b_polys())?;
    let c_query = encode_at_tau(qap.c_polys())?;

    let alpha = generator.mul(&waste.alpha)?;
    let beta = generator.mul(&waste.beta)?;
    let gamma = generator.mul(&waste.gamma)?;
    let delta = generator.mul(&waste.delta)?;

    // IC[i] = G * (i + 1)
    let ic = (1..=num_public_inputs as u64 + 1)
        .map(|i| Ok(generator.mul(&G::ScalarType::from(i))?))
        .collect::<Result<Vec<G>>>()?;

    drop(waste);
    end_timer!(timer);

    let pk = ProvingKey {
        a_query,
        b_query,
        c_query,
        alpha,
        beta,
        delta,
    };
    let vk = VerificationKey {
        alpha,
        beta,
        gamma,
        delta,
        ic,
    };
    observer.on_setup(&pk, &vk);
    Ok((pk, vk))
}
