use std::error::Error;
use std::fmt;

/// Shape errors raised when vectors of incompatible dimension are combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// An operation that needs at least one vector received none.
    Empty,
    /// The vector at `index` has `found` components where `expected` were required.
    Mismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// Number of coefficients differs from the number of vectors being combined.
    CoefficientCount { vectors: usize, coefficients: usize },
    /// Asked for more leading components than the vector holds.
    Truncation { requested: usize, available: usize },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DimensionError::Empty => write!(f, "At least one vector is required"),
            DimensionError::Mismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "Vector {} has dimension {} but dimension {} was expected",
                index, found, expected
            ),
            DimensionError::CoefficientCount {
                vectors,
                coefficients,
            } => write!(
                f,
                "Got {} coefficients for {} vectors; counts must be equal",
                coefficients, vectors
            ),
            DimensionError::Truncation {
                requested,
                available,
            } => write!(
                f,
                "Cannot keep the first {} components of a vector of dimension {}",
                requested, available
            ),
        }
    }
}

impl Error for DimensionError {}
