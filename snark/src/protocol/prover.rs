use crate::errors::{Result, SnarkError};
use crate::protocol::keys::{Proof, ProvingKey};
use crate::protocol::observer::{NoopObserver, ProtocolObserver};
use crate::qap::Qap;
use ark_std::{end_timer, start_timer};
use qap_algebra::prelude::*;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The blinding factors `r`, `s` and their product. Wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Blinding<S: Scalar> {
    r: S,
    s: S,
    rs: S,
}

impl<S: Scalar> Blinding<S> {
    fn sample<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        let r = S::random_nonzero(prng);
        let s = S::random_nonzero(prng);
        Self { r, s, rs: r.mul(&s) }
    }
}

/// Compute `sum_i witness[i] * query[i] + blind * base`.
fn blinded_combination<G: Group>(
    witness: &[G::ScalarType],
    query: &[G],
    blind: &G::ScalarType,
    base: &G,
) -> Result<G> {
    let scalars: Vec<&G::ScalarType> = witness.iter().collect();
    let points: Vec<&G> = query.iter().collect();
    let sum = G::multi_exp(&scalars, &points)?;
    Ok(sum.add(&base.mul(blind)?)?)
}

/// Produce a proof for `witness` under the proving key `pk`.
///
/// The proof is computed from the key alone, so a witness that does not satisfy the
/// constraint system still yields a structurally valid proof. Such a witness is only
/// visible through [`ProtocolObserver::on_quotient`] never being called.
pub fn prove<R: CryptoRng + RngCore, G: Group>(
    prng: &mut R,
    qap: &Qap<G::ScalarType>,
    pk: &ProvingKey<G>,
    witness: &[G::ScalarType],
    public_inputs: &[G::ScalarType],
) -> Result<Proof<G>> {
    prove_with_observer(prng, qap, pk, witness, public_inputs, &mut NoopObserver)
}

/// Same as [`prove`], reporting the combined polynomials, the quotient and the proof
/// to `observer`.
pub fn prove_with_observer<R: CryptoRng + RngCore, G: Group, O: ProtocolObserver<G>>(
    prng: &mut R,
    qap: &Qap<G::ScalarType>,
    pk: &ProvingKey<G>,
    witness: &[G::ScalarType],
    public_inputs: &[G::ScalarType],
    observer: &mut O,
) -> Result<Proof<G>> {
    let n = qap.num_variables();
    if witness.len() != n {
        return Err(SnarkError::WitnessLengthMismatch {
            expected: n,
            found: witness.len(),
        });
    }
    if pk.num_variables() != n || pk.b_query.len() != n || pk.c_query.len() != n {
        return Err(SnarkError::InconsistentSetup);
    }
    if public_inputs.len() >= n {
        return Err(SnarkError::InvalidPublicInputCount {
            num_public_inputs: public_inputs.len(),
            num_variables: n,
        });
    }

    let timer = start_timer!(|| format!("Prove: {} variables", n));

    let (a_poly, b_poly, c_poly) = qap.compute_polynomials(witness)?;
    observer.on_combined_polynomials(&a_poly, &b_poly, &c_poly);
    match qap.compute_quotient(witness) {
        Ok(h) => observer.on_quotient(&h),
        Err(SnarkError::DivisibilityError) => {}
        Err(e) => return Err(e),
    }

    let blinding = Blinding::<G::ScalarType>::sample(prng);
    let proof = Proof {
        a: blinded_combination(witness, &pk.a_query, &blinding.r, &pk.alpha)?,
        b: blinded_combination(witness, &pk.b_query, &blinding.s, &pk.beta)?,
        c: blinded_combination(witness, &pk.c_query, &blinding.rs, &pk.delta)?,
    };
    drop(blinding);
    end_timer!(timer);

    observer.on_proof(&proof);
    Ok(proof)
}

#[cfg(test)]
mod test {
    use crate::circuits::{cubic_circuit, square_circuit};
    use crate::errors::SnarkError;
    use crate::poly::FpPolynomial;
    use crate::protocol::{prove, prove_with_observer, setup, ProtocolObserver, SnarkParams};
    use crate::qap::Qap;
    use qap_algebra::prelude::*;
    use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

    #[derive(Default)]
    struct QuotientRecorder {
        combined: usize,
        quotient: Option<FpPolynomial<Fp>>,
        proofs: usize,
    }

    impl ProtocolObserver<CurvePoint> for QuotientRecorder {
        fn on_combined_polynomials(
            &mut self,
            _a: &FpPolynomial<Fp>,
            _b: &FpPolynomial<Fp>,
            _c: &FpPolynomial<Fp>,
        ) {
            self.combined += 1;
        }

        fn on_quotient(&mut self, h: &FpPolynomial<Fp>) {
            self.quotient = Some(h.clone());
        }

        fn on_proof(&mut self, _proof: &crate::protocol::Proof<CurvePoint>) {
            self.proofs += 1;
        }
    }

    #[test]
    fn test_proof_is_blinded() {
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let (cs, witness) = square_circuit(Fp::from(3u32)).unwrap();
        let qap = Qap::from_r1cs(&cs).unwrap();
        let (pk, _) = setup(&mut prng, &SnarkParams::default(), &qap, &cs, 1).unwrap();
        let proof = prove(&mut prng, &qap, &pk, &witness, &[Fp::from(9u32)]).unwrap();

        let scalars: Vec<&Fp> = witness.iter().collect();
        let points: Vec<&CurvePoint> = pk.a_query.iter().collect();
        let unblinded = CurvePoint::multi_exp(&scalars, &points).unwrap();
        // A - sum_i w_i * A_query[i] = r * alpha with r != 0
        let blind = proof.a.sub(&unblinded).unwrap();
        assert!(!blind.is_identity());
        assert!(proof.a.is_on_curve());
        assert!(proof.b.is_on_curve());
        assert!(proof.c.is_on_curve());
    }

    #[test]
    fn test_quotient_reported_for_valid_witness() {
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let (cs, witness) = cubic_circuit(Fp::from(3u32)).unwrap();
        let qap = Qap::from_r1cs(&cs).unwrap();
        let (pk, _) = setup(&mut prng, &SnarkParams::default(), &qap, &cs, 1).unwrap();

        let mut recorder = QuotientRecorder::default();
        prove_with_observer(&mut prng, &qap, &pk, &witness, &[Fp::from(35u32)], &mut recorder)
            .unwrap();
        assert_eq!(recorder.combined, 1);
        assert_eq!(recorder.proofs, 1);
        assert_eq!(recorder.quotient, Some(qap.compute_quotient(&witness).unwrap()));

        let mut bad = witness.clone();
        bad[2] = Fp::from(36u32);
        let mut recorder = QuotientRecorder::default();
        prove_with_observer(&mut prng, &qap, &pk, &bad, &[Fp::from(36u32)], &mut recorder)
            .unwrap();
        assert_eq!(recorder.combined, 1);
        assert_eq!(recorder.proofs, 1);
        assert!(recorder.quotient.is_none());
    }

    #[test]
    fn test_prove_errors() {
        let mut prng = test_rng();
        let (cs, witness) = square_circuit(Fp::from(3u32)).unwrap();
        let qap = Qap::from_r1cs(&cs).unwrap();
        let (pk, _) = setup(&mut prng, &SnarkParams::default(), &qap, &cs, 1).unwrap();

        assert_eq!(
            prove(&mut prng, &qap, &pk, &witness[..2], &[Fp::from(9u32)]),
            Err(SnarkError::WitnessLengthMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            prove(&mut prng, &qap, &pk, &witness, &witness),
            Err(SnarkError::InvalidPublicInputCount {
                num_public_inputs: 3,
                num_variables: 3
            })
        );

        let (other_cs, _) = cubic_circuit(Fp::from(3u32)).unwrap();
        let other_qap = Qap::from_r1cs(&other_cs).unwrap();
        let (other_pk, _) =
            setup(&mut prng, &SnarkParams::default(), &other_qap, &other_cs, 1).unwrap();
        assert_eq!(
            prove(&mut prng, &qap, &other_pk, &witness, &[Fp::from(9u32)]),
            Err(SnarkError::InconsistentSetup)
        );
    }
}
