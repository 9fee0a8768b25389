use ark_std::{error, fmt};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum AlgebraError {
    DivisionByZero,
    PointNotOnCurve,
    CurveMismatch,
    DeserializationError,
    ParameterError,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AlgebraError::*;
        f.write_str(match self {
            DivisionByZero => "Field element is not invertible",
            PointNotOnCurve => "Point does not satisfy the curve equation",
            CurveMismatch => "Group operation between points of different curves",
            DeserializationError => "Could not deserialize object",
            ParameterError => "Unexpected parameter for method or function",
        })
    }
}

impl error::Error for AlgebraError {}
