use crate::prelude::*;
use ark_std::fmt;

/// The curve `y^2 = x^3 + 7` over `F_p`.
pub const TOY_CURVE: CurveParams = CurveParams::new(Fp::new(0), Fp::new(7));

/// The x-coordinate of the default generator of [`TOY_CURVE`].
pub const TOY_GENERATOR_X: Fp = Fp::new(1);

/// The y-coordinate of the default generator of [`TOY_CURVE`], `2^17`.
pub const TOY_GENERATOR_Y: Fp = Fp::new(131_072);

/// The coefficients of a short Weierstrass curve `y^2 = x^3 + a*x + b`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveParams {
    /// The linear coefficient.
    pub a: Fp,
    /// The constant coefficient.
    pub b: Fp,
}

impl CurveParams {
    /// Build the curve `y^2 = x^3 + a*x + b`.
    pub const fn new(a: Fp, b: Fp) -> Self {
        Self { a, b }
    }

    /// Check `y^2 = x^3 + a*x + b`.
    pub fn is_on_curve(&self, x: &Fp, y: &Fp) -> bool {
        let lhs = y.square();
        let rhs = x.square() * x + self.a * x + self.b;
        lhs == rhs
    }

    /// Build an affine point, rejecting coordinates off the curve.
    pub fn point(&self, x: Fp, y: Fp) -> Result<CurvePoint> {
        if !self.is_on_curve(&x, &y) {
            return Err(AlgebraError::PointNotOnCurve);
        }
        Ok(self.point_unchecked(x, y))
    }

    /// Build an affine point without checking the curve equation.
    /// Membership can be inspected afterwards with [`Group::is_on_curve`].
    pub fn point_unchecked(&self, x: Fp, y: Fp) -> CurvePoint {
        CurvePoint::Affine { x, y, curve: *self }
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        TOY_CURVE
    }
}

/// A point on a short Weierstrass curve, in affine coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurvePoint {
    /// The point at infinity, i.e. the identity of every curve.
    #[default]
    Infinity,
    /// A finite point together with the curve it lives on.
    Affine {
        /// The x-coordinate.
        x: Fp,
        /// The y-coordinate.
        y: Fp,
        /// The curve coefficients.
        curve: CurveParams,
    },
}

impl CurvePoint {
    /// The default generator of [`TOY_CURVE`].
    pub fn toy_generator() -> Self {
        TOY_CURVE.point_unchecked(TOY_GENERATOR_X, TOY_GENERATOR_Y)
    }

    /// Get the x-coordinate, `None` for the point at infinity.
    pub fn get_x(&self) -> Option<Fp> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, .. } => Some(*x),
        }
    }

    /// Get the y-coordinate, `None` for the point at infinity.
    pub fn get_y(&self) -> Option<Fp> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { y, .. } => Some(*y),
        }
    }

    /// Finish an addition from the slope `lambda` of the line through `(x1, y1)` and `(x2, _)`.
    fn from_slope(curve: CurveParams, lambda: Fp, x1: Fp, y1: Fp, x2: Fp) -> Self {
        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * (x1 - x3) - y1;
        curve.point_unchecked(x3, y3)
    }
}

impl Neg for CurvePoint {
    type Output = CurvePoint;

    fn neg(self) -> Self::Output {
        match self {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y, curve } => CurvePoint::Affine { x, y: -y, curve },
        }
    }
}

impl Group for CurvePoint {
    type ScalarType = Fp;

    #[inline]
    fn get_identity() -> Self {
        CurvePoint::Infinity
    }

    #[inline]
    fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    fn is_on_curve(&self) -> bool {
        match self {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y, curve } => curve.is_on_curve(x, y),
        }
    }

    fn add(&self, other: &Self) -> Result<Self> {
        let (x1, y1, curve) = match *self {
            CurvePoint::Infinity => return Ok(*other),
            CurvePoint::Affine { x, y, curve } => (x, y, curve),
        };
        let (x2, y2, other_curve) = match *other {
            CurvePoint::Infinity => return Ok(*self),
            CurvePoint::Affine { x, y, curve } => (x, y, curve),
        };
        if curve != other_curve {
            return Err(AlgebraError::CurveMismatch);
        }

        if x1 == x2 {
            if y1 != y2 {
                return Ok(CurvePoint::Infinity);
            }
            return self.double();
        }

        let lambda = (y2 - y1).div(&(x2 - x1))?;
        Ok(Self::from_slope(curve, lambda, x1, y1, x2))
    }

    fn double(&self) -> Result<Self> {
        let (x, y, curve) = match *self {
            CurvePoint::Infinity => return Ok(CurvePoint::Infinity),
            CurvePoint::Affine { x, y, curve } => (x, y, curve),
        };
        // vertical tangent
        if y.is_zero() {
            return Ok(CurvePoint::Infinity);
        }

        let numerator = Fp::from(3u32) * x.square() + curve.a;
        let lambda = numerator.div(&(Fp::from(2u32) * y))?;
        Ok(Self::from_slope(curve, lambda, x, y, x))
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Infinity => f.write_str("Point at Infinity"),
            CurvePoint::Affine { x, y, .. } => write!(f, "({}, {})", x, y),
        }
    }
}
