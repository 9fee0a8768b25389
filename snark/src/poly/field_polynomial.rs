use crate::errors::Result;
use ark_std::fmt;
use qap_algebra::prelude::*;

/// Dense univariate polynomial, `coefs[i]` is the coefficient of `X^i`.
///
/// Trailing zero coefficients are allowed and kept, so the length of `coefs`
/// is an upper bound on the number of terms, not the degree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, low-order first
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// # Example
    /// ```
    /// use qap_snark::poly::FpPolynomial;
    /// use qap_algebra::prelude::*;
    /// let zero = Fp::zero();
    /// let one = Fp::one();
    /// let two = one.add(&one);
    /// let five = two.add(&two).add(&one);
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one]);
    /// assert_eq!(poly.degree(), Some(2));
    /// assert_eq!(poly.eval(&zero), one);
    /// assert_eq!(poly.eval(&one), two);
    /// assert_eq!(poly.eval(&two), five);
    /// let padded = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero]);
    /// assert_eq!(padded.degree(), Some(2));
    /// assert_eq!(padded.trim(), poly);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        FpPolynomial { coefs }
    }

    /// Build the monic polynomial `prod_i (X - zeroes[i])`.
    /// # Example
    /// ```
    /// use qap_snark::poly::FpPolynomial;
    /// use qap_algebra::prelude::*;
    /// let zeroes = [Fp::from(1u32), Fp::from(2u32), Fp::from(3u32)];
    /// let poly = FpPolynomial::from_zeroes(&zeroes[..]);
    /// assert_eq!(poly.degree(), Some(3));
    /// for root in zeroes.iter() {
    ///     assert_eq!(poly.eval(root), Fp::zero());
    /// }
    /// assert_eq!(poly.eval(&Fp::zero()), -Fp::from(6u32));
    /// ```
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        let mut r = Self::one();
        for root in zeroes.iter() {
            let factor = Self::from_coefs(vec![root.neg(), F::one()]);
            r = r.mul(&factor);
        }
        r
    }

    /// Return a polynomial of `degree` + 1 uniformly random coefficients.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let coefs = (0..degree + 1).map(|_| F::random(prng)).collect();
        Self::from_coefs(coefs)
    }

    /// Return a copy without high-order zero coefficients. The zero polynomial keeps one
    /// coefficient.
    pub fn trim(&self) -> Self {
        let len = self.coefs.iter().rposition(|c| !c.is_zero()).map_or(1, |d| d + 1);
        let mut coefs: Vec<F> = self.coefs.iter().take(len).cloned().collect();
        if coefs.is_empty() {
            coefs.push(F::zero());
        }
        Self::from_coefs(coefs)
    }

    /// Return the index of the highest non-zero coefficient, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefs.iter().rposition(|c| !c.is_zero())
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree().is_none()
    }

    /// Evaluate a polynomial on a point.
    pub fn eval(&self, point: &F) -> F {
        let mut result = F::zero();
        let mut variable = F::one();
        for coef in self.coefs.iter() {
            let mut a = variable;
            a.mul_assign(coef);
            result.add_assign(&a);
            variable.mul_assign(point);
        }
        result
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            self.coefs.extend_from_slice(&other.coefs[n..]);
        }
    }

    /// Add with another polynomial, producing a new polynomial as long as the longer input.
    /// # Example:
    /// ```
    /// use qap_snark::poly::FpPolynomial;
    /// use qap_algebra::prelude::*;
    /// let zero = Fp::zero();
    /// let one = Fp::one();
    /// let two = one.add(&one);
    /// let three = two.add(&one);
    /// let poly1 = FpPolynomial::from_coefs(vec![zero, one, two, three]);
    /// let poly2 = FpPolynomial::from_coefs(vec![three, two, one, zero, one]);
    /// let poly_add = poly1.add(&poly2);
    /// assert_eq!(poly_add, poly2.add(&poly1));
    /// assert_eq!(poly_add, FpPolynomial::from_coefs(vec![three, three, three, three, one]));
    /// ```
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtract another polynomial from self.
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            for other_coef in other.coefs[n..].iter() {
                self.coefs.push(other_coef.neg());
            }
        }
    }

    /// Subtract another polynomial, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Negate the coefficients.
    pub fn neg(&self) -> Self {
        Self::from_coefs(self.coefs.iter().map(|c| c.neg()).collect())
    }

    /// Multiply every coefficient by `scalar`.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar);
        }
    }

    /// Multiply every coefficient by `scalar`, producing a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Schoolbook product with `len(self) + len(other) - 1` coefficients.
    /// # Example:
    /// ```
    /// use qap_snark::poly::FpPolynomial;
    /// use qap_algebra::prelude::*;
    /// let one = Fp::one();
    /// // (1 + X)(1 + X) = 1 + 2X + X^2
    /// let poly = FpPolynomial::from_coefs(vec![one, one]);
    /// let square = poly.mul(&poly);
    /// assert_eq!(square, FpPolynomial::from_coefs(vec![one, Fp::from(2u32), one]));
    /// ```
    pub fn mul(&self, other: &Self) -> Self {
        if self.coefs.is_empty() || other.coefs.is_empty() {
            return Self::from_coefs(vec![]);
        }
        let mut coefs = vec![F::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (i, a) in self.coefs.iter().enumerate() {
            for (j, b) in other.coefs.iter().enumerate() {
                coefs[i + j].add_assign(&a.mul(b));
            }
        }
        Self::from_coefs(coefs)
    }

    /// Long division, returning `(quotient, remainder)` with both trimmed.
    /// Fails when the divisor is the zero polynomial.
    /// # Example:
    /// ```
    /// use qap_snark::poly::FpPolynomial;
    /// use qap_algebra::prelude::*;
    /// let zero = Fp::zero();
    /// let one = Fp::one();
    /// let poly = FpPolynomial::from_coefs(vec![one, one, one]);
    /// let divisor = FpPolynomial::from_coefs(vec![one, one]);
    /// let (q, r) = poly.div_rem(&divisor).unwrap();
    /// assert_eq!(q, FpPolynomial::from_coefs(vec![zero, one]));
    /// assert_eq!(r, FpPolynomial::from_coefs(vec![one]));
    /// assert!(poly.div_rem(&FpPolynomial::zero()).is_err());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let divisor = divisor.trim();
        let l = match divisor.degree() {
            Some(d) => d + 1,
            None => return Err(AlgebraError::DivisionByZero.into()),
        };
        let dividend = self.trim();
        let k = dividend.coefs.len();
        if l > k {
            return Ok((Self::zero(), dividend));
        }
        let divisor_coefs = &divisor.coefs[..];
        let bl_inv = divisor_coefs[l - 1].inv()?;
        let mut rem = dividend.coefs;
        let mut quo = vec![F::zero(); k - l + 1];
        for i in (0..(k - l + 1)).rev() {
            let mut qi = bl_inv;
            qi.mul_assign(&rem[i + l - 1]);
            for (j, d) in divisor_coefs.iter().enumerate() {
                let mut a = qi;
                a.mul_assign(d);
                rem[i + j].sub_assign(&a);
            }
            quo[i] = qi;
        }
        rem.truncate(l - 1);
        Ok((Self::from_coefs(quo).trim(), Self::from_coefs(rem).trim()))
    }
}

impl<F: Scalar> fmt::Display for FpPolynomial<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.coefs.iter().join(", "))
    }
}
