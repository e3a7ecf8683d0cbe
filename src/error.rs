use thiserror::Error;

/// Errors raised by the geo functions and the point/path types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// A value that must be coordinate-like or numeric is not
    #[error("{0}")]
    InvalidArgument(String),

    /// Latitude or longitude outside its valid range
    #[error("{0}")]
    Range(String),

    #[error(transparent)]
    Path(#[from] PathError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Need two or more points to instantiate a Path, got {0}")]
    TooFewPoints(usize),

    #[error("Requested point at index {0} does not exist")]
    IndexOutOfRange(usize),

    #[error("Parameter array of length {got} cannot be added to path of {expected} points")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Cannot determine type of input: {0}")]
    UnrecognisedInput(String),
}

impl GeoError {
    pub(crate) fn not_a_number(value: impl std::fmt::Display) -> Self {
        GeoError::InvalidArgument(format!("{} is Not a Number", value))
    }

    pub(crate) fn not_point_like() -> Self {
        GeoError::InvalidArgument("Argument not a Point or Point-like object".to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
