use crate::errors::{Result, SnarkError};
use crate::protocol::keys::{Proof, VerificationKey};
use crate::protocol::observer::{NoopObserver, ProtocolObserver};
use ark_std::{end_timer, start_timer};
use qap_algebra::prelude::*;

/// Verify `proof` against `public_inputs`.
///
/// The public inputs are folded into `vk_x = IC[0] + sum_i public_inputs[i] * IC[i + 1]`,
/// then the proof is accepted when none of `A`, `B`, `C` is the identity. No pairing
/// equation is checked.
pub fn verify<G: Group>(
    vk: &VerificationKey<G>,
    proof: &Proof<G>,
    public_inputs: &[G::ScalarType],
) -> Result<bool> {
    verify_with_observer(vk, proof, public_inputs, &mut NoopObserver)
}

/// Same as [`verify`], reporting `vk_x` and the decision to `observer`.
pub fn verify_with_observer<G: Group, O: ProtocolObserver<G>>(
    vk: &VerificationKey<G>,
    proof: &Proof<G>,
    public_inputs: &[G::ScalarType],
    observer: &mut O,
) -> Result<bool> {
    let mismatch = SnarkError::PublicInputsMismatch {
        expected: vk.num_public_inputs(),
        found: public_inputs.len(),
    };
    let (ic_0, ic_rest) = vk.ic.split_first().ok_or_else(|| mismatch.clone())?;
    if ic_rest.len() != public_inputs.len() {
        return Err(mismatch);
    }

    let timer = start_timer!(|| format!("Verify: {} public inputs", public_inputs.len()));
    let mut vk_x = *ic_0;
    for (x, ic) in public_inputs.iter().zip(ic_rest.iter()) {
        vk_x = vk_x.add(&ic.mul(x)?)?;
    }
    observer.on_input_consistency(&vk_x);

    let accepted = !proof.a.is_identity() && !proof.b.is_identity() && !proof.c.is_identity();
    end_timer!(timer);

    observer.on_verification(accepted);
    Ok(accepted)
}

#[cfg(test)]
mod test {
    use crate::errors::SnarkError;
    use crate::protocol::{verify, verify_with_observer, Proof, ProtocolObserver, VerificationKey};
    use qap_algebra::prelude::*;

    #[derive(Default)]
    struct Decisions {
        vk_x: Vec<CurvePoint>,
        accepted: Vec<bool>,
    }

    impl ProtocolObserver<CurvePoint> for Decisions {
        fn on_input_consistency(&mut self, vk_x: &CurvePoint) {
            self.vk_x.push(*vk_x);
        }

        fn on_verification(&mut self, accepted: bool) {
            self.accepted.push(accepted);
        }
    }

    fn toy_vk(num_public_inputs: u64) -> VerificationKey<CurvePoint> {
        let g = CurvePoint::toy_generator();
        VerificationKey {
            alpha: g,
            beta: g,
            gamma: g,
            delta: g,
            ic: (1..=num_public_inputs + 1)
                .map(|i| g.mul(&Fp::from(i)).unwrap())
                .collect(),
        }
    }

    #[test]
    fn test_input_folding() {
        let g = CurvePoint::toy_generator();
        let vk = toy_vk(2);
        let proof = Proof { a: g, b: g, c: g };
        let mut decisions = Decisions::default();
        let ok = verify_with_observer(
            &vk,
            &proof,
            &[Fp::from(5u32), Fp::from(7u32)],
            &mut decisions,
        )
        .unwrap();
        assert!(ok);
        // 1 + 5*2 + 7*3
        assert_eq!(decisions.vk_x, vec![g.mul(&Fp::from(32u32)).unwrap()]);
        assert_eq!(decisions.accepted, vec![true]);
    }

    #[test]
    fn test_identity_rejected() {
        let g = CurvePoint::toy_generator();
        let vk = toy_vk(1);
        let o = CurvePoint::get_identity();
        let pub_in = [Fp::from(9u32)];
        assert!(verify(&vk, &Proof { a: g, b: g, c: g }, &pub_in).unwrap());
        assert!(!verify(&vk, &Proof { a: o, b: g, c: g }, &pub_in).unwrap());
        assert!(!verify(&vk, &Proof { a: g, b: o, c: g }, &pub_in).unwrap());
        assert!(!verify(&vk, &Proof { a: g, b: g, c: o }, &pub_in).unwrap());
    }

    #[test]
    fn test_public_input_count() {
        let g = CurvePoint::toy_generator();
        let proof = Proof { a: g, b: g, c: g };
        let vk = toy_vk(1);
        assert_eq!(
            verify(&vk, &proof, &[]),
            Err(SnarkError::PublicInputsMismatch {
                expected: 1,
                found: 0
            })
        );
        assert_eq!(
            verify(&vk, &proof, &[Fp::one(), Fp::one()]),
            Err(SnarkError::PublicInputsMismatch {
                expected: 1,
                found: 2
            })
        );

        let mut empty = toy_vk(0);
        empty.ic.clear();
        assert_eq!(
            verify(&empty, &proof, &[]),
            Err(SnarkError::PublicInputsMismatch {
                expected: 0,
                found: 0
            })
        );
    }
}
