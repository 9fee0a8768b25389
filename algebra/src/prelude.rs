pub use crate::curve::{CurveParams, CurvePoint, TOY_CURVE};
pub use crate::errors::AlgebraError;
pub use crate::field::{Fp, MODULUS};
pub use crate::rand_helper::{seeded_rng, test_rng};
pub use crate::traits::{Group, Scalar};
pub use ark_std::{
    fmt::{Display, Formatter},
    iter::Sum,
    ops::*,
    rand::{CryptoRng, Rng, RngCore, SeedableRng},
    string::String,
    vec,
    vec::Vec,
    One, Zero,
};
pub use itertools::Itertools;
pub use serde::{Deserialize, Serialize};

/// The result type of the algebra crate.
pub type Result<T> = core::result::Result<T, AlgebraError>;
