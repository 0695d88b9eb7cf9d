use std::fmt;
use std::ops::Index;

use serde::Serialize;

use crate::error::DimensionError;
use crate::math::vector::Vector;

/// A toy dataset: each column is one sample vector.
///
/// Columns keep the order they were given in, which downstream plots rely on
/// for labelling (`v1` is column 0, `v2` column 1, ...). Storage is row-major,
/// so row `i` holds coordinate `i` of every sample.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> SampleMatrix<T> {
    /// Stack equal-dimension vectors side by side as columns.
    pub fn from_columns(columns: &[Vector<T>]) -> Result<Self, DimensionError>
    where
        T: Clone,
    {
        let first = columns.first().ok_or(DimensionError::Empty)?;
        let rows = first.dim();
        if let Some((index, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.dim() != rows)
        {
            return Err(DimensionError::Mismatch {
                index,
                expected: rows,
                found: column.dim(),
            });
        }

        let cols = columns.len();
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for column in columns {
                data.push(column[row].clone());
            }
        }
        Ok(Self { data, rows, cols })
    }

    /// Dimension of every sample.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of samples.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    pub fn columns(&self) -> Vec<Vector<T>>
    where
        T: Clone,
    {
        (0..self.cols).map(|col| self.column(col)).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows)
            .map(|row| self.row_slice(row).to_vec())
            .collect()
    }

    /// Copy into an `ndarray::Array2` with the same (rows, cols) layout.
    pub fn to_array2(&self) -> ndarray::Array2<T>
    where
        T: Clone,
    {
        ndarray::Array2::from_shape_fn((self.rows, self.cols), |(row, col)| {
            self[(row, col)].clone()
        })
    }
}

impl<T> Index<(usize, usize)> for SampleMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for SampleMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
