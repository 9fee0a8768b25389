use crate::prelude::*;
use ark_std::fmt::Debug;
use num_bigint::BigUint;
use zeroize::Zeroize;

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Into<BigUint>
    + for<'a> From<&'a BigUint>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
    + Zeroize
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return a random scalar that is never zero
    fn random_nonzero<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return the field size as a BigUint
    fn get_field_size_biguint() -> BigUint;

    /// Return a representation of the scalar as a vector of u64 in the little-endian order
    fn get_little_endian_u64(&self) -> Vec<u64>;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert from bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// Divide by `other`, failing when `other` has no inverse
    fn div(&self, other: &Self) -> Result<Self> {
        Ok(self.mul(&other.inv()?))
    }

    /// exponent form: least significant limb first, with u64 limbs
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        for exp_u64 in exponent {
            let mut e = *exp_u64;
            // we have to square the base for 64 times.
            for _ in 0..64 {
                if e % 2 == 1 {
                    result.mul_assign(&base);
                }
                base = base.mul(&base);
                e >>= 1;
            }
        }
        result
    }

    /// Convert into BigUint, often for debug.
    fn into_biguint(self) -> BigUint {
        self.into()
    }
}

/// The trait for group elements.
///
/// Unlike a cryptographic group backend, every operation that may need a field
/// inversion returns a `Result` so that arithmetic failures reach the caller.
pub trait Group:
    Debug + Default + Copy + Sized + PartialEq + Eq + Clone + Serialize + Neg<Output = Self>
{
    /// The scalar type
    type ScalarType: Scalar;

    /// Return the identity element (i.e., 0 * G)
    fn get_identity() -> Self;

    /// Test whether this is the identity element
    fn is_identity(&self) -> bool;

    /// Test whether the element satisfies its curve equation. The identity always does.
    fn is_on_curve(&self) -> bool;

    /// Return the sum of two group elements
    fn add(&self, other: &Self) -> Result<Self>;

    /// Return the doubling of the group element
    fn double(&self) -> Result<Self>;

    /// Return the difference of two group elements
    fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg())
    }

    /// Multiply by a scalar with double-and-add, least significant bit first
    fn mul(&self, scalar: &Self::ScalarType) -> Result<Self> {
        let mut result = Self::get_identity();
        let mut base = *self;
        let bits: Vec<bool> = scalar
            .get_little_endian_u64()
            .into_iter()
            .flat_map(|limb| (0..64).map(move |i| (limb >> i) & 1 == 1))
            .collect();
        let len = match bits.iter().rposition(|bit| *bit) {
            Some(pos) => pos + 1,
            None => return Ok(result),
        };
        for (i, bit) in bits[..len].iter().enumerate() {
            if *bit {
                result = result.add(&base)?;
            }
            if i + 1 < len {
                base = base.double()?;
            }
        }
        Ok(result)
    }

    /// Compute `sum_i scalars[i] * points[i]`
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Result<Self> {
        if scalars.len() != points.len() {
            return Err(AlgebraError::ParameterError);
        }
        let mut acc = Self::get_identity();
        for (s, p) in scalars.iter().zip(points.iter()) {
            acc = acc.add(&p.mul(s)?)?;
        }
        Ok(acc)
    }
}
