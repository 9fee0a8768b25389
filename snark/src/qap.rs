//! Quadratic arithmetic programs.

use crate::errors::{Result, SnarkError};
use crate::poly::{lagrange::interpolate, FpPolynomial};
use crate::r1cs::R1CS;
use ark_std::{end_timer, start_timer};
use qap_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The polynomial encoding of an [`R1CS`].
///
/// Constraint `k` (0-indexed) is mapped to the evaluation point `k + 1`, so
/// `a_polys[i](k + 1) = A[k][i]` and likewise for `B` and `C`. The target polynomial
/// `Z = prod_k (X - (k + 1))` vanishes exactly on these points.
///
/// Deserialization checks that there is one polynomial per variable in each of `A`,
/// `B`, `C`, that none of them exceeds the degree the evaluation points allow, and that
/// the target polynomial is the one the evaluation points define.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QapData<F>", bound(deserialize = "F: Scalar"))]
pub struct Qap<F> {
    a_polys: Vec<FpPolynomial<F>>,
    b_polys: Vec<FpPolynomial<F>>,
    c_polys: Vec<FpPolynomial<F>>,
    target: FpPolynomial<F>,
    num_variables: usize,
    num_constraints: usize,
}

#[derive(Deserialize)]
struct QapData<F> {
    a_polys: Vec<FpPolynomial<F>>,
    b_polys: Vec<FpPolynomial<F>>,
    c_polys: Vec<FpPolynomial<F>>,
    target: FpPolynomial<F>,
    num_variables: usize,
    num_constraints: usize,
}

impl<F: Scalar> TryFrom<QapData<F>> for Qap<F> {
    type Error = SnarkError;

    fn try_from(data: QapData<F>) -> Result<Self> {
        let m = data.num_constraints;
        for polys in [&data.a_polys, &data.b_polys, &data.c_polys] {
            if polys.len() != data.num_variables {
                return Err(SnarkError::MalformedQap);
            }
            if polys.iter().any(|p| p.degree().map_or(false, |d| d >= m)) {
                return Err(SnarkError::MalformedQap);
            }
        }
        if data.target != FpPolynomial::from_zeroes(&evaluation_points::<F>(m)) {
            return Err(SnarkError::MalformedQap);
        }
        Ok(Self {
            a_polys: data.a_polys,
            b_polys: data.b_polys,
            c_polys: data.c_polys,
            target: data.target,
            num_variables: data.num_variables,
            num_constraints: m,
        })
    }
}

/// The interpolated `A`, `B` and `C` polynomials of a single variable.
type ColumnPolys<F> = (FpPolynomial<F>, FpPolynomial<F>, FpPolynomial<F>);

fn column_polys<F: Scalar>(cs: &R1CS<F>, xs: &[F], var: usize) -> Result<ColumnPolys<F>> {
    let column = |rows: &[Vec<F>]| -> Vec<F> { rows.iter().map(|row| row[var]).collect() };
    Ok((
        interpolate(xs, &column(cs.a()))?,
        interpolate(xs, &column(cs.b()))?,
        interpolate(xs, &column(cs.c()))?,
    ))
}

impl<F: Scalar> Qap<F> {
    /// Convert a constraint system into a QAP by interpolating every variable's column
    /// of `A`, `B` and `C` over the points `1, 2, ..., num_constraints`.
    pub fn from_r1cs(cs: &R1CS<F>) -> Result<Self> {
        let timer = start_timer!(|| format!(
            "R1CS to QAP: {} variables, {} constraints",
            cs.num_variables(),
            cs.num_constraints()
        ));
        let xs = evaluation_points::<F>(cs.num_constraints());

        #[cfg(not(feature = "parallel"))]
        let columns = (0..cs.num_variables())
            .map(|var| column_polys(cs, &xs, var))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(feature = "parallel")]
        let columns = (0..cs.num_variables())
            .into_par_iter()
            .map(|var| column_polys(cs, &xs, var))
            .collect::<Result<Vec<_>>>()?;

        let mut a_polys = Vec::with_capacity(columns.len());
        let mut b_polys = Vec::with_capacity(columns.len());
        let mut c_polys = Vec::with_capacity(columns.len());
        for (a, b, c) in columns {
            a_polys.push(a);
            b_polys.push(b);
            c_polys.push(c);
        }

        let target = FpPolynomial::from_zeroes(&xs);
        end_timer!(timer);

        Ok(Self {
            a_polys,
            b_polys,
            c_polys,
            target,
            num_variables: cs.num_variables(),
            num_constraints: cs.num_constraints(),
        })
    }

    /// Return the number of variables.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Return the number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    /// Return the evaluation points `1, ..., num_constraints`.
    pub fn evaluation_points(&self) -> Vec<F> {
        evaluation_points(self.num_constraints)
    }

    /// Borrow the per-variable `A` polynomials.
    pub fn a_polys(&self) -> &[FpPolynomial<F>] {
        &self.a_polys
    }

    /// Borrow the per-variable `B` polynomials.
    pub fn b_polys(&self) -> &[FpPolynomial<F>] {
        &self.b_polys
    }

    /// Borrow the per-variable `C` polynomials.
    pub fn c_polys(&self) -> &[FpPolynomial<F>] {
        &self.c_polys
    }

    /// Borrow the target polynomial `Z`.
    pub fn target(&self) -> &FpPolynomial<F> {
        &self.target
    }

    fn check_witness(&self, witness: &[F]) -> Result<()> {
        if witness.len() != self.num_variables {
            return Err(SnarkError::WitnessLengthMismatch {
                expected: self.num_variables,
                found: witness.len(),
            });
        }
        Ok(())
    }

    /// Combine the per-variable polynomials with the witness, returning
    /// `(sum_i w_i A_i(X), sum_i w_i B_i(X), sum_i w_i C_i(X))`.
    pub fn compute_polynomials(&self, witness: &[F]) -> Result<ColumnPolys<F>> {
        self.check_witness(witness)?;
        let combine = |polys: &[FpPolynomial<F>]| {
            let mut acc = FpPolynomial::zero();
            for (poly, w) in polys.iter().zip(witness.iter()) {
                acc.add_assign(&poly.mul_scalar(w));
            }
            acc
        };
        Ok((
            combine(&self.a_polys),
            combine(&self.b_polys),
            combine(&self.c_polys),
        ))
    }

    /// Compute `H = (A*B - C) / Z` for the witness-combined polynomials.
    /// Fails with [`SnarkError::DivisibilityError`] if the division leaves a remainder,
    /// which happens exactly when the witness does not satisfy the constraint system.
    pub fn compute_quotient(&self, witness: &[F]) -> Result<FpPolynomial<F>> {
        let (a, b, c) = self.compute_polynomials(witness)?;
        let numerator = a.mul(&b).sub(&c);
        let (h, rem) = numerator.div_rem(&self.target)?;
        if !rem.is_zero() {
            return Err(SnarkError::DivisibilityError);
        }
        Ok(h)
    }

    /// Check `A(k)*B(k) = C(k)` at every evaluation point.
    pub fn is_satisfied(&self, witness: &[F]) -> bool {
        match self.compute_polynomials(witness) {
            Ok((a, b, c)) => self
                .evaluation_points()
                .iter()
                .all(|k| a.eval(k).mul(&b.eval(k)) == c.eval(k)),
            Err(_) => false,
        }
    }
}

fn evaluation_points<F: Scalar>(num_constraints: usize) -> Vec<F> {
    (1..=num_constraints as u64).map(F::from).collect()
}
