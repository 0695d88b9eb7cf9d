use std::ops::{Add, Mul};
use std::slice::Iter;

use num_traits::{One, Zero};
use serde::Serialize;

use crate::error::DimensionError;
use crate::math::Vector;

/// The standard basis `e1, ..., ed` of R^d.
///
/// Basis vector `i` carries a single `1` at index `i`; the set therefore has
/// exactly as many members as the common dimension.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BasisSet<T> {
    vectors: Vec<Vector<T>>,
}

impl<T> BasisSet<T>
where
    T: Clone + Zero + One,
{
    pub fn standard(dim: usize) -> Self {
        let vectors = (0..dim).map(|i| Vector::unit(dim, i)).collect();
        Self { vectors }
    }
}

impl<T> BasisSet<T> {
    pub fn dim(&self) -> usize {
        self.vectors.len()
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Vector<T>> {
        self.vectors.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Vector<T>> {
        self.vectors.get(index)
    }

    pub fn vectors(&self) -> &[Vector<T>] {
        &self.vectors
    }

    /// Index of the single non-zero component of basis vector `index`.
    pub fn hot_index(&self, index: usize) -> Option<usize>
    where
        T: Zero,
    {
        self.vectors
            .get(index)?
            .iter()
            .position(|component| !component.is_zero())
    }

    /// `c1 * e1 + ... + cd * ed`.
    pub fn combine(&self, coefficients: &[T]) -> Result<Vector<T>, DimensionError>
    where
        T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
    {
        linear_combination(&self.vectors, coefficients)
    }
}

/// Scale each vector by its coefficient and sum the results.
///
/// All vectors must share one dimension and there must be exactly one
/// coefficient per vector. The sum is accumulated componentwise in input
/// order.
pub fn linear_combination<T>(
    vectors: &[Vector<T>],
    coefficients: &[T],
) -> Result<Vector<T>, DimensionError>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    let first = vectors.first().ok_or(DimensionError::Empty)?;
    if vectors.len() != coefficients.len() {
        return Err(DimensionError::CoefficientCount {
            vectors: vectors.len(),
            coefficients: coefficients.len(),
        });
    }

    let dim = first.dim();
    vectors
        .iter()
        .zip(coefficients.iter())
        .enumerate()
        .try_fold(Vector::zeros(dim), |acc, (index, (vector, &coefficient))| {
            if vector.dim() != dim {
                return Err(DimensionError::Mismatch {
                    index,
                    expected: dim,
                    found: vector.dim(),
                });
            }
            acc.try_add(&vector.scale(coefficient))
        })
}
