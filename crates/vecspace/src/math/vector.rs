use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Index, Mul};
use std::slice::Iter;

use num_traits::{Float, One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::DimensionError;

/// A point or direction in R^n, stored as its ordered coordinates.
///
/// The dimension is fixed when the vector is built; there is no API that
/// grows, shrinks or edits the components in place. Every operation returns
/// a new vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    /// Number of coordinates, i.e. the `n` of R^n.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    /// Keep the leading `n` coordinates and drop the rest.
    ///
    /// This is how a vector from R^3 gets drawn next to vectors from R^2: the
    /// trailing coordinates are discarded outright. It is not an orthogonal
    /// projection onto an arbitrary plane.
    pub fn truncate(&self, n: usize) -> Result<Vector<T>, DimensionError>
    where
        T: Clone,
    {
        if n > self.dim() {
            return Err(DimensionError::Truncation {
                requested: n,
                available: self.dim(),
            });
        }
        Ok(Vector::from_vec(self.data[..n].to_vec()))
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(dim: usize) -> Self {
        Vector::from_vec(vec![T::zero(); dim])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero + One,
{
    /// The `index`-th standard basis vector of R^`dim`.
    pub fn unit(dim: usize, index: usize) -> Self {
        assert!(
            index < dim,
            "unit vector index {} out of bounds for dimension {}",
            index,
            dim
        );
        let mut data = vec![T::zero(); dim];
        data[index] = T::one();
        Vector::from_vec(data)
    }
}

impl<T> Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale(&self, factor: T) -> Vector<T> {
        self.mapv(|&v| v * factor)
    }
}

impl<T> Vector<T>
where
    T: Copy + Add<Output = T>,
{
    /// Componentwise sum; both vectors must live in the same space.
    pub fn try_add(&self, other: &Vector<T>) -> Result<Vector<T>, DimensionError> {
        if self.dim() != other.dim() {
            return Err(DimensionError::Mismatch {
                index: 1,
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a + b)
            .collect())
    }
}

impl<T: Float> Vector<T> {
    /// Euclidean length: the square root of the sum of squared components.
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &v| acc + v * v)
            .sqrt()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
