use crate::prelude::*;
use ark_std::fmt;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use zeroize::Zeroize;

/// The field modulus, the Mersenne prime `2^31 - 1`.
pub const MODULUS: u64 = 2_147_483_647;

/// The number of bytes for a scalar value over `F_p`
pub const FP_SCALAR_LEN: usize = 4;

/// An element of `F_p`, always kept in canonical form `0 <= v < p`.
#[derive(
    Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize,
    Zeroize,
)]
pub struct Fp(u64);

impl Fp {
    /// Reduce an arbitrary integer into the field.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value % MODULUS)
    }

    /// Return the canonical integer representative.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Return the modular inverse, computed with the extended Euclidean algorithm.
    pub fn inverse(&self) -> Result<Self> {
        if self.0 == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        let (mut t, mut new_t) = (0i128, 1i128);
        let (mut r, mut new_r) = (MODULUS as i128, self.0 as i128);
        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }
        if r > 1 {
            return Err(AlgebraError::DivisionByZero);
        }
        if t < 0 {
            t += MODULUS as i128;
        }
        Ok(Self(t as u64))
    }

    /// Raise to a `u64` power by repeated squaring.
    pub fn pow_u64(&self, mut exp: u64) -> Self {
        let mut result = Self::one();
        let mut base = *self;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }
        result
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl One for Fp {
    #[inline]
    fn one() -> Self {
        Self(1)
    }
}

impl Zero for Fp {
    #[inline]
    fn zero() -> Self {
        Self(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Fp {
    type Output = Fp;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        // both operands are below 2^31, so the sum cannot overflow
        Self((self.0 + rhs.0) % MODULUS)
    }
}

impl Sub for Fp {
    type Output = Fp;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self((self.0 + MODULUS - rhs.0) % MODULUS)
    }
}

impl Mul for Fp {
    type Output = Fp;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let wide = (self.0 as u128) * (rhs.0 as u128);
        Self((wide % MODULUS as u128) as u64)
    }
}

impl Neg for Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Self::Output {
        Self((MODULUS - self.0) % MODULUS)
    }
}

impl<'a> Add<&'a Fp> for Fp {
    type Output = Fp;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        self + *rhs
    }
}

impl<'a> Sub<&'a Fp> for Fp {
    type Output = Fp;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        self - *rhs
    }
}

impl<'a> Mul<&'a Fp> for Fp {
    type Output = Fp;

    #[inline]
    fn mul(self, rhs: &Self) -> Self::Output {
        self * *rhs
    }
}

impl<'a> AddAssign<&'a Fp> for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        *self = *self + *rhs;
    }
}

impl<'a> SubAssign<&'a Fp> for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        *self = *self - *rhs;
    }
}

impl<'a> MulAssign<&'a Fp> for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: &Self) {
        *self = *self * *rhs;
    }
}

impl Sum<Fp> for Fp {
    #[inline]
    fn sum<I: Iterator<Item = Fp>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Fp> for Fp {
    #[inline]
    fn sum<I: Iterator<Item = &'a Fp>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<u32> for Fp {
    #[inline]
    fn from(value: u32) -> Self {
        Self::new(value as u64)
    }
}

impl From<u64> for Fp {
    #[inline]
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Fp> for BigUint {
    #[inline]
    fn from(value: Fp) -> BigUint {
        BigUint::from(value.0)
    }
}

impl<'a> From<&'a BigUint> for Fp {
    #[inline]
    fn from(src: &BigUint) -> Self {
        let reduced = src % BigUint::from(MODULUS);
        // the remainder is below 2^31
        Self(reduced.to_u64().unwrap_or_default())
    }
}

impl Scalar for Fp {
    #[inline]
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..MODULUS))
    }

    #[inline]
    fn random_nonzero<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..MODULUS))
    }

    #[inline]
    fn get_field_size_biguint() -> BigUint {
        BigUint::from(MODULUS)
    }

    #[inline]
    fn get_little_endian_u64(&self) -> Vec<u64> {
        vec![self.0]
    }

    #[inline]
    fn bytes_len() -> usize {
        FP_SCALAR_LEN
    }

    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        (self.0 as u32).to_le_bytes().to_vec()
    }

    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != FP_SCALAR_LEN {
            return Err(AlgebraError::DeserializationError);
        }
        let mut array = [0u8; FP_SCALAR_LEN];
        array.copy_from_slice(bytes);
        let value = u32::from_le_bytes(array) as u64;
        if value >= MODULUS {
            return Err(AlgebraError::DeserializationError);
        }
        Ok(Self(value))
    }

    #[inline]
    fn inv(&self) -> Result<Self> {
        self.inverse()
    }

    #[inline]
    fn square(&self) -> Self {
        *self * *self
    }
}

#[cfg(test)]
mod fp_test {
    use crate::{
        prelude::*,
        traits::group_tests::{test_scalar_operations, test_scalar_serialization},
    };
    use num_bigint::BigUint;

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<Fp>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<Fp>();
        assert_eq!(
            Fp::from_bytes(&MODULUS.to_le_bytes()[..4]),
            Err(AlgebraError::DeserializationError)
        );
        assert_eq!(
            Fp::from_bytes(&[1, 2, 3]),
            Err(AlgebraError::DeserializationError)
        );
        let a = Fp::from(1234567u32);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(a, serde_json::from_str::<Fp>(&json).unwrap());
    }

    #[test]
    fn test_reduction() {
        assert_eq!(Fp::new(MODULUS), Fp::zero());
        assert_eq!(Fp::new(MODULUS + 5), Fp::from(5u32));
        assert_eq!(Fp::new(u64::MAX).value(), u64::MAX % MODULUS);
        assert_eq!(Fp::from(0u32) - Fp::from(1u32), Fp::new(MODULUS - 1));
        assert_eq!(-Fp::zero(), Fp::zero());
    }

    #[test]
    fn test_identities() {
        let mut prng = test_rng();
        for _ in 0..100 {
            let a = Fp::random(&mut prng);
            assert_eq!(a + Fp::zero(), a);
            assert_eq!(a * Fp::one(), a);
            assert!((a - a).is_zero());
            assert!(a.value() < MODULUS);
        }
    }

    #[test]
    fn test_inverse() {
        let mut prng = test_rng();
        for _ in 0..100 {
            let a = Fp::random_nonzero(&mut prng);
            assert_eq!(a * a.inverse().unwrap(), Fp::one());
            assert_eq!(a.div(&a).unwrap(), Fp::one());
        }
        // 2 * (p + 1) / 2 = p + 1 = 1
        assert_eq!(Fp::from(2u32).inverse().unwrap(), Fp::new((MODULUS + 1) / 2));
        assert_eq!(Fp::zero().inverse(), Err(AlgebraError::DivisionByZero));
        assert_eq!(
            Fp::one().div(&Fp::new(MODULUS)),
            Err(AlgebraError::DivisionByZero)
        );
    }

    #[test]
    fn test_against_bigint() {
        let mut prng = test_rng();
        let p = BigUint::from(MODULUS);
        for _ in 0..200 {
            let x: u64 = prng.gen();
            let y: u64 = prng.gen();
            let a = Fp::new(x);
            let b = Fp::new(y);
            let bx = BigUint::from(x);
            let by = BigUint::from(y);

            assert_eq!(BigUint::from(a + b), (&bx + &by) % &p);
            assert_eq!(BigUint::from(a * b), (&bx * &by) % &p);
            assert_eq!(BigUint::from(a - b), ((&bx % &p) + &p - (&by % &p)) % &p);
            assert_eq!(Fp::from(&bx), a);
        }
    }

    #[test]
    fn test_pow() {
        let mut prng = test_rng();
        let a = Fp::random_nonzero(&mut prng);
        // Fermat's little theorem
        assert_eq!(a.pow_u64(MODULUS - 1), Fp::one());
        assert_eq!(a.pow_u64(0), Fp::one());
        assert_eq!(a.pow_u64(3), a * a * a);
        assert_eq!(a.pow(&[MODULUS + 2]), a.pow_u64(MODULUS + 2));
        assert_eq!(a.square(), a * a);
    }

    #[test]
    fn test_display() {
        assert_eq!(Fp::from(35u32).to_string(), "35");
    }
}
