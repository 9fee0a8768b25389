use crate::errors::{Result, SnarkError};
use crate::poly::FpPolynomial;
use qap_algebra::prelude::*;

/// Build the Lagrange basis polynomial `L_j` over the points `xs`, which is one at
/// `xs[j]` and zero at every other point.
///
/// Fails with a division error if two points coincide.
pub fn basis_polynomial<F: Scalar>(j: usize, xs: &[F]) -> Result<FpPolynomial<F>> {
    let x_j = xs.get(j).ok_or(SnarkError::BasisIndexOutOfRange {
        index: j,
        num_points: xs.len(),
    })?;
    let mut result = FpPolynomial::one();
    for (i, x_i) in xs.iter().enumerate() {
        if i == j {
            continue;
        }
        // (X - x_i) / (x_j - x_i)
        let denominator_inv = x_j.sub(x_i).inv()?;
        let numerator = FpPolynomial::from_coefs(vec![x_i.neg(), F::one()]);
        result = result.mul(&numerator);
        result.mul_scalar_assign(&denominator_inv);
    }
    Ok(result)
}

/// Return the polynomial of minimal degree through the points `(xs[i], ys[i])`.
/// # Example
/// ```
/// use qap_snark::poly::lagrange::interpolate;
/// use qap_algebra::prelude::*;
/// let xs = [Fp::from(1u32), Fp::from(2u32), Fp::from(3u32)];
/// let ys = [Fp::from(1u32), Fp::from(4u32), Fp::from(9u32)];
/// let poly = interpolate(&xs, &ys).unwrap();
/// // the points lie on X^2
/// assert_eq!(poly.trim().coefs, vec![Fp::zero(), Fp::zero(), Fp::one()]);
/// ```
pub fn interpolate<F: Scalar>(xs: &[F], ys: &[F]) -> Result<FpPolynomial<F>> {
    if xs.len() != ys.len() {
        return Err(SnarkError::InterpolationLengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    let mut result = FpPolynomial::zero();
    for (j, y_j) in ys.iter().enumerate() {
        let basis = basis_polynomial(j, xs)?;
        result.add_assign(&basis.mul_scalar(y_j));
    }
    Ok(result)
}
