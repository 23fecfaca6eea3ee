use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};
use core::ops::{Index, IndexMut};
use num_traits::{One, Zero};

use crate::linalg::{MatrixError, MatrixInverseOperation};
use crate::{RoundHalfUp, Scalar};

/// A dense, row-major matrix with dimensions fixed at construction.
///
/// The matrix owns its storage; [`Clone`] produces a fully independent copy.
///
/// ```
/// use alpha_beta_estimation::linalg::Matrix;
///
/// let mut m = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]).unwrap();
/// assert_eq!(m.get(0, 1), Ok(7.0));
/// m.set(1, 1, 5.0).unwrap();
/// assert_eq!(m[(1, 1)], 5.0);
/// assert!(m.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    elements: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T> Matrix<T> {
    /// Creates a matrix from a rectangular array of rows.
    ///
    /// ## Errors
    /// Returns [`MatrixError::JaggedRows`] if any row differs in length from the first one.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let mut elements = Vec::with_capacity(rows.len() * columns);

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(MatrixError::JaggedRows {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
            elements.extend_from_slice(row);
        }

        Ok(Self {
            elements,
            rows: rows.len(),
            columns,
        })
    }

    /// Creates a `rows × columns` matrix of zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self {
            elements: vec![T::zero(); rows * columns],
            rows,
            columns,
        }
    }

    /// Creates a `dimensions × dimensions` identity matrix.
    pub fn identity(dimensions: usize) -> Self
    where
        T: Zero + One + Clone,
    {
        let mut matrix = Self::zeros(dimensions, dimensions);
        for diagonal in 0..dimensions {
            matrix[(diagonal, diagonal)] = T::one();
        }
        matrix
    }
}

impl<T> Matrix<T> {
    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize, MatrixError> {
        if row < self.rows && column < self.columns {
            Ok(row * self.columns + column)
        } else {
            Err(MatrixError::IndexOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Gets the value of a cell.
    pub fn get(&self, row: usize, column: usize) -> Result<T, MatrixError>
    where
        T: Copy,
    {
        let offset = self.offset(row, column)?;
        Ok(self.elements[offset])
    }

    /// Sets the value of a cell.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        let offset = self.offset(row, column)?;
        self.elements[offset] = value;
        Ok(())
    }

    /// Gets the cells of a row.
    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }

        let start = row * self.columns;
        Ok(&self.elements[start..start + self.columns])
    }

    /// Iterates all cells in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a copy with every cell rounded half-up to `places` decimal places.
    pub fn rounded(&self, places: usize) -> Self
    where
        T: RoundHalfUp + Copy,
    {
        Self {
            elements: self
                .elements
                .iter()
                .map(|value| value.round_half_up(places))
                .collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Inverts the matrix using the default [`MatrixInverseOperation`] settings.
    ///
    /// The matrix itself is left untouched.
    pub fn inverse(&self) -> Result<Self, MatrixError>
    where
        T: Scalar + RoundHalfUp,
    {
        MatrixInverseOperation::new(self)?.compute()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.offset(row, column) {
            Ok(offset) => &self.elements[offset],
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        match self.offset(row, column) {
            Ok(offset) => &mut self.elements[offset],
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> Display for Matrix<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in self.elements.chunks(self.columns.max(1)) {
            write!(f, "[")?;
            for (index, value) in row.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
