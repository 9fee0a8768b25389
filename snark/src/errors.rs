use ark_std::{error, fmt};
use qap_algebra::prelude::AlgebraError;

/// The result type of the snark crate.
pub type Result<T> = core::result::Result<T, SnarkError>;

#[derive(Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum SnarkError {
    /// Field or curve arithmetic failed.
    Algebra(AlgebraError),
    /// A constraint index beyond the number of constraints.
    ConstraintIndexOutOfRange { index: usize, num_constraints: usize },
    /// A constraint row whose length differs from the number of variables.
    RowLengthMismatch { expected: usize, found: usize },
    /// A matrix whose number of rows differs from the number of constraints.
    ConstraintCountMismatch { expected: usize, found: usize },
    /// A Lagrange basis index beyond the number of interpolation points.
    BasisIndexOutOfRange { index: usize, num_points: usize },
    /// Interpolation points and values of different lengths.
    InterpolationLengthMismatch { xs: usize, ys: usize },
    /// A witness whose length differs from the number of variables.
    WitnessLengthMismatch { expected: usize, found: usize },
    /// Public inputs whose count differs from the verification key.
    PublicInputsMismatch { expected: usize, found: usize },
    /// The number of public inputs leaves no room for the constant variable.
    InvalidPublicInputCount { num_public_inputs: usize, num_variables: usize },
    /// The QAP and the constraint system describe different variable sets.
    InconsistentSetup,
    /// A QAP whose polynomials do not match its variable or constraint count.
    MalformedQap,
    /// `A*B - C` is not divisible by the target polynomial.
    DivisibilityError,
}

impl fmt::Display for SnarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SnarkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            ConstraintIndexOutOfRange {
                index,
                num_constraints,
            } => write!(
                f,
                "Constraint index {} out of bounds for {} constraints",
                index, num_constraints
            ),
            RowLengthMismatch { expected, found } => write!(
                f,
                "Constraint row has {} entries, expected {}",
                found, expected
            ),
            ConstraintCountMismatch { expected, found } => write!(
                f,
                "Constraint matrix has {} rows, expected {}",
                found, expected
            ),
            BasisIndexOutOfRange { index, num_points } => write!(
                f,
                "Basis index {} out of bounds for {} points",
                index, num_points
            ),
            InterpolationLengthMismatch { xs, ys } => write!(
                f,
                "x and y value sizes must match, got {} and {}",
                xs, ys
            ),
            WitnessLengthMismatch { expected, found } => write!(
                f,
                "Witness size mismatch: expected {}, got {}",
                expected, found
            ),
            PublicInputsMismatch { expected, found } => write!(
                f,
                "Public input count mismatch: expected {}, got {}",
                expected, found
            ),
            InvalidPublicInputCount {
                num_public_inputs,
                num_variables,
            } => write!(
                f,
                "{} public inputs do not fit in {} variables",
                num_public_inputs, num_variables
            ),
            InconsistentSetup => f.write_str("QAP and constraint system do not match"),
            MalformedQap => f.write_str("QAP polynomials do not match its dimensions"),
            DivisibilityError => f.write_str("A*B - C is not divisible by the target polynomial"),
        }
    }
}

impl error::Error for SnarkError {}

impl From<AlgebraError> for SnarkError {
    fn from(e: AlgebraError) -> SnarkError {
        SnarkError::Algebra(e)
    }
}
