use crate::errors::{Result, SnarkError};
use qap_algebra::prelude::*;

/// Protocol parameters shared by setup, prove and verify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnarkParams<G> {
    /// The group generator every key element is a multiple of.
    pub generator: G,
}

impl<G: Group> SnarkParams<G> {
    /// Build parameters around `generator`, rejecting the identity and points off
    /// the curve.
    pub fn new(generator: G) -> Result<Self> {
        let params = Self { generator };
        params.check()?;
        Ok(params)
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.generator.is_identity() {
            return Err(SnarkError::Algebra(AlgebraError::ParameterError));
        }
        if !self.generator.is_on_curve() {
            return Err(SnarkError::Algebra(AlgebraError::PointNotOnCurve));
        }
        Ok(())
    }
}

impl Default for SnarkParams<CurvePoint> {
    fn default() -> Self {
        Self {
            generator: CurvePoint::toy_generator(),
        }
    }
}

/// The prover's key: every variable's `A`, `B` and `C` polynomial evaluated at the
/// secret point and encoded in the group, plus the encoded `alpha`, `beta`, `delta`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvingKey<G> {
    pub a_query: Vec<G>,
    pub b_query: Vec<G>,
    pub c_query: Vec<G>,
    pub alpha: G,
    pub beta: G,
    pub delta: G,
}

impl<G> ProvingKey<G> {
    /// Return the number of variables the key was generated for.
    pub fn num_variables(&self) -> usize {
        self.a_query.len()
    }
}

/// The publishable verification key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKey<G> {
    pub alpha: G,
    pub beta: G,
    pub gamma: G,
    pub delta: G,
    /// Input consistency points, one more than the number of public inputs.
    pub ic: Vec<G>,
}

impl<G> VerificationKey<G> {
    /// Return the number of public inputs this key expects.
    pub fn num_public_inputs(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }
}

/// A proof `(A, B, C)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof<G> {
    pub a: G,
    pub b: G,
    pub c: G,
}
