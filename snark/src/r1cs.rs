//! Rank-1 constraint systems.

use crate::errors::{Result, SnarkError};
use ark_std::fmt;
use qap_algebra::prelude::*;

/// Constraint index
pub type CsIndex = usize;

/// A rank-1 constraint system `(A·s) * (B·s) = (C·s)` over a witness vector `s`.
///
/// Every matrix has `num_constraints` rows of exactly `num_variables` entries.
/// Deserialized systems go through [`R1CS::from_matrices`], so a persisted system
/// with ragged or missing rows is rejected instead of reaching the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "R1CSData<F>", bound(deserialize = "F: Scalar"))]
pub struct R1CS<F> {
    a: Vec<Vec<F>>,
    b: Vec<Vec<F>>,
    c: Vec<Vec<F>>,
    num_variables: usize,
    num_constraints: usize,
}

/// The unchecked serialized form of an [`R1CS`].
#[derive(Deserialize)]
struct R1CSData<F> {
    a: Vec<Vec<F>>,
    b: Vec<Vec<F>>,
    c: Vec<Vec<F>>,
    num_variables: usize,
    num_constraints: usize,
}

impl<F: Scalar> TryFrom<R1CSData<F>> for R1CS<F> {
    type Error = SnarkError;

    fn try_from(data: R1CSData<F>) -> Result<Self> {
        let cs = Self::from_matrices(data.num_variables, data.a, data.b, data.c)?;
        if cs.num_constraints != data.num_constraints {
            return Err(SnarkError::ConstraintCountMismatch {
                expected: data.num_constraints,
                found: cs.num_constraints,
            });
        }
        Ok(cs)
    }
}

impl<F: Scalar> R1CS<F> {
    /// Create a system of `num_constraints` all-zero constraints over `num_variables` variables.
    pub fn new(num_variables: usize, num_constraints: usize) -> Self {
        let zeroes = vec![vec![F::zero(); num_variables]; num_constraints];
        Self {
            a: zeroes.clone(),
            b: zeroes.clone(),
            c: zeroes,
            num_variables,
            num_constraints,
        }
    }

    /// Build a system from its three matrices. All of them must have the same number of
    /// rows and every row must have `num_variables` entries.
    pub fn from_matrices(
        num_variables: usize,
        a: Vec<Vec<F>>,
        b: Vec<Vec<F>>,
        c: Vec<Vec<F>>,
    ) -> Result<Self> {
        let num_constraints = a.len();
        for matrix in [&a, &b, &c] {
            if matrix.len() != num_constraints {
                return Err(SnarkError::ConstraintCountMismatch {
                    expected: num_constraints,
                    found: matrix.len(),
                });
            }
            if let Some(row) = matrix.iter().find(|row| row.len() != num_variables) {
                return Err(SnarkError::RowLengthMismatch {
                    expected: num_variables,
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            a,
            b,
            c,
            num_variables,
            num_constraints,
        })
    }

    /// Return the number of variables, i.e. the witness length.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Return the number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    /// Borrow the rows of `A`.
    pub fn a(&self) -> &[Vec<F>] {
        &self.a
    }

    /// Borrow the rows of `B`.
    pub fn b(&self) -> &[Vec<F>] {
        &self.b
    }

    /// Borrow the rows of `C`.
    pub fn c(&self) -> &[Vec<F>] {
        &self.c
    }

    /// Overwrite the `index`-th constraint with the rows `a`, `b`, `c`.
    pub fn set_constraint(&mut self, index: CsIndex, a: &[F], b: &[F], c: &[F]) -> Result<()> {
        if index >= self.num_constraints {
            return Err(SnarkError::ConstraintIndexOutOfRange {
                index,
                num_constraints: self.num_constraints,
            });
        }
        for row in [a, b, c] {
            if row.len() != self.num_variables {
                return Err(SnarkError::RowLengthMismatch {
                    expected: self.num_variables,
                    found: row.len(),
                });
            }
        }
        self.a[index] = a.to_vec();
        self.b[index] = b.to_vec();
        self.c[index] = c.to_vec();
        Ok(())
    }

    /// Compute `(A_i·s, B_i·s, C_i·s)` for the `index`-th constraint.
    pub fn evaluate_row(&self, index: CsIndex, witness: &[F]) -> Result<(F, F, F)> {
        if index >= self.num_constraints {
            return Err(SnarkError::ConstraintIndexOutOfRange {
                index,
                num_constraints: self.num_constraints,
            });
        }
        if witness.len() != self.num_variables {
            return Err(SnarkError::WitnessLengthMismatch {
                expected: self.num_variables,
                found: witness.len(),
            });
        }
        let dot = |row: &[F]| -> F { row.iter().zip(witness.iter()).map(|(r, w)| r.mul(w)).sum() };
        Ok((
            dot(&self.a[index]),
            dot(&self.b[index]),
            dot(&self.c[index]),
        ))
    }

    /// Return the first constraint the witness violates, `None` if all of them hold.
    /// A witness of the wrong length is reported as violating constraint 0.
    pub fn first_unsatisfied(&self, witness: &[F]) -> Option<CsIndex> {
        if witness.len() != self.num_variables {
            return Some(0);
        }
        (0..self.num_constraints).find(|i| match self.evaluate_row(*i, witness) {
            Ok((a_val, b_val, c_val)) => a_val.mul(&b_val) != c_val,
            Err(_) => true,
        })
    }

    /// Check that the witness satisfies every constraint.
    pub fn verify(&self, witness: &[F]) -> bool {
        witness.len() == self.num_variables && self.first_unsatisfied(witness).is_none()
    }
}

impl<F: Scalar> fmt::Display for R1CS<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variables: {}", self.num_variables)?;
        writeln!(f, "Constraints: {}", self.num_constraints)?;
        for i in 0..self.num_constraints {
            writeln!(f, "Constraint {}:", i)?;
            writeln!(f, "  A: [{}]", self.a[i].iter().join(", "))?;
            writeln!(f, "  B: [{}]", self.b[i].iter().join(", "))?;
            writeln!(f, "  C: [{}]", self.c[i].iter().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::circuits::{cubic_circuit, square_circuit};
    use crate::errors::SnarkError;
    use crate::r1cs::R1CS;
    use qap_algebra::prelude::*;

    fn row(values: &[u32]) -> Vec<Fp> {
        values.iter().map(|v| Fp::from(*v)).collect()
    }

    #[test]
    fn test_square_constraint() {
        let (cs, witness) = square_circuit(Fp::from(3u32)).unwrap();
        assert_eq!(witness, row(&[1, 3, 9]));
        assert!(cs.verify(&witness));
        assert_eq!(cs.first_unsatisfied(&witness), None);

        let bad = row(&[1, 3, 10]);
        assert!(!cs.verify(&bad));
        assert_eq!(cs.first_unsatisfied(&bad), Some(0));
    }

    #[test]
    fn test_cubic_constraints() {
        let (cs, witness) = cubic_circuit(Fp::from(3u32)).unwrap();
        assert_eq!(witness, row(&[1, 3, 35, 9, 27]));
        assert!(cs.verify(&witness));

        // wrong x^3 breaks the second constraint first
        let bad = row(&[1, 3, 35, 9, 28]);
        assert_eq!(cs.first_unsatisfied(&bad), Some(1));
        // wrong output breaks only the last one
        let bad = row(&[1, 3, 36, 9, 27]);
        assert_eq!(cs.first_unsatisfied(&bad), Some(2));
    }

    #[test]
    fn test_witness_length_mismatch() {
        let (cs, _) = square_circuit(Fp::from(3u32)).unwrap();
        assert!(!cs.verify(&row(&[1, 3])));
        assert!(!cs.verify(&row(&[1, 3, 9, 0])));
    }

    #[test]
    fn test_set_constraint_errors() {
        let mut cs = R1CS::<Fp>::new(3, 1);
        let ok = row(&[0, 1, 0]);
        assert_eq!(
            cs.set_constraint(1, &ok, &ok, &ok),
            Err(SnarkError::ConstraintIndexOutOfRange {
                index: 1,
                num_constraints: 1
            })
        );
        assert_eq!(
            cs.set_constraint(0, &ok, &row(&[0, 1]), &ok),
            Err(SnarkError::RowLengthMismatch {
                expected: 3,
                found: 2
            })
        );
        // a failed call leaves the system untouched
        assert_eq!(cs, R1CS::new(3, 1));
        assert!(cs.set_constraint(0, &ok, &ok, &ok).is_ok());
        assert_eq!(cs.a()[0], ok);
    }

    #[test]
    fn test_evaluate_row() {
        let (cs, witness) = cubic_circuit(Fp::from(3u32)).unwrap();
        assert_eq!(
            cs.evaluate_row(2, &witness).unwrap(),
            (Fp::from(35u32), Fp::one(), Fp::from(35u32))
        );
        assert_eq!(
            cs.evaluate_row(3, &witness),
            Err(SnarkError::ConstraintIndexOutOfRange {
                index: 3,
                num_constraints: 3
            })
        );
        assert_eq!(
            cs.evaluate_row(0, &witness[..2]),
            Err(SnarkError::WitnessLengthMismatch {
                expected: 5,
                found: 2
            })
        );
    }

    #[test]
    fn test_from_matrices() {
        let (cs, witness) = square_circuit(Fp::from(3u32)).unwrap();
        let rebuilt =
            R1CS::from_matrices(3, cs.a().to_vec(), cs.b().to_vec(), cs.c().to_vec()).unwrap();
        assert_eq!(rebuilt, cs);
        assert!(rebuilt.verify(&witness));

        assert_eq!(
            R1CS::<Fp>::from_matrices(3, vec![row(&[0, 1, 0])], vec![], vec![]),
            Err(SnarkError::ConstraintCountMismatch {
                expected: 1,
                found: 0
            })
        );
        let short = vec![row(&[0, 1])];
        assert_eq!(
            R1CS::<Fp>::from_matrices(3, short.clone(), short.clone(), short),
            Err(SnarkError::RowLengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_malformed_systems() {
        let (cs, witness) = square_circuit(Fp::from(3u32)).unwrap();
        let json = serde_json::to_string(&cs).unwrap();
        let back: R1CS<Fp> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cs);
        assert!(back.verify(&witness));

        // rows missing entirely
        let missing = r#"{"a":[],"b":[],"c":[],"num_variables":3,"num_constraints":2}"#;
        assert!(serde_json::from_str::<R1CS<Fp>>(missing).is_err());

        // rows shorter than the number of variables
        let ragged =
            r#"{"a":[[0,1]],"b":[[0,1]],"c":[[0,0]],"num_variables":3,"num_constraints":1}"#;
        assert!(serde_json::from_str::<R1CS<Fp>>(ragged).is_err());

        // a well-formed shape is accepted
        let zero = r#"{"a":[[0,0]],"b":[[0,0]],"c":[[0,0]],"num_variables":2,"num_constraints":1}"#;
        assert_eq!(serde_json::from_str::<R1CS<Fp>>(zero).unwrap(), R1CS::new(2, 1));
    }

    #[test]
    fn test_zero_system_accepts_anything() {
        let cs = R1CS::<Fp>::new(2, 2);
        assert!(cs.verify(&row(&[5, 7])));
    }

    #[test]
    fn test_display() {
        let (cs, _) = square_circuit(Fp::from(3u32)).unwrap();
        let printed = cs.to_string();
        assert!(printed.contains("Variables: 3"));
        assert!(printed.contains("  A: [0, 1, 0]"));
        assert!(printed.contains("  C: [0, 0, 1]"));
    }
}
