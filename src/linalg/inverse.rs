use log::{debug, warn};

use crate::linalg::{Matrix, MatrixError};
use crate::{RoundHalfUp, Scalar};

/// The number of decimal places inverses are rounded to by default.
pub const DEFAULT_DECIMAL_PLACES: usize = 3;

/// Determines how the inversion treats vanishing pivots.
///
/// The elimination does not swap rows, so a zero on the diagonal stops it
/// even when the matrix is invertible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PivotCheck<T> {
    /// Pivots are used as they are. A zero pivot produces non-finite
    /// values that propagate through the result.
    Unchecked,
    /// The inversion fails with [`MatrixError::Singular`] if the magnitude
    /// of a pivot is not above the threshold.
    Epsilon(T),
}

impl<T> Default for PivotCheck<T> {
    fn default() -> Self {
        PivotCheck::Unchecked
    }
}

/// Inverts a square matrix using Gauss-Jordan elimination.
///
/// Every row operation that reduces the working copy of the source matrix to
/// the identity is mirrored on an augmented identity matrix, which thereby
/// turns into the inverse.
///
/// ```
/// use alpha_beta_estimation::linalg::{Matrix, MatrixInverseOperation};
///
/// let inverse = MatrixInverseOperation::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]])
///     .unwrap()
///     .compute()
///     .unwrap();
///
/// assert_eq!(inverse, Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]).unwrap());
/// ```
pub struct MatrixInverseOperation<T> {
    dimensions: usize,
    /// The source matrix, reduced to the identity.
    working: Matrix<T>,
    /// Starts as the identity, ends as the inverse.
    augmented: Matrix<T>,
    pivot_check: PivotCheck<T>,
    decimal_places: usize,
}

impl<T> MatrixInverseOperation<T> {
    /// Prepares the inversion of a copy of `matrix`.
    ///
    /// ## Errors
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square.
    pub fn new(matrix: &Matrix<T>) -> Result<Self, MatrixError>
    where
        T: Scalar,
    {
        Self::from_matrix(matrix.clone())
    }

    /// Prepares the inversion of a matrix given as a rectangular array of rows.
    ///
    /// ## Errors
    /// Returns [`MatrixError::JaggedRows`] for a non-rectangular array and
    /// [`MatrixError::NotSquare`] if the array is not square.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
        T: Scalar,
    {
        Self::from_matrix(Matrix::from_rows(rows)?)
    }

    fn from_matrix(working: Matrix<T>) -> Result<Self, MatrixError>
    where
        T: Scalar,
    {
        if !working.is_square() {
            return Err(MatrixError::NotSquare {
                rows: working.rows(),
                columns: working.columns(),
            });
        }

        let dimensions = working.rows();
        Ok(Self {
            dimensions,
            working,
            augmented: Matrix::identity(dimensions),
            pivot_check: PivotCheck::default(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
        })
    }

    /// Sets the treatment of vanishing pivots.
    pub fn with_pivot_check(mut self, pivot_check: PivotCheck<T>) -> Self {
        self.pivot_check = pivot_check;
        self
    }

    /// Sets the number of decimal places the result is rounded to.
    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Gets the side length of the matrix.
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }
}

impl<T> MatrixInverseOperation<T>
where
    T: Scalar + RoundHalfUp,
{
    /// Performs the inversion and returns the rounded inverse.
    ///
    /// ## Errors
    /// Returns [`MatrixError::Singular`] if a pivot fails the configured
    /// [`PivotCheck`]; no partial result is produced in that case.
    pub fn compute(mut self) -> Result<Matrix<T>, MatrixError> {
        debug!(
            "inverting {n}x{n} matrix, pivots {checked}",
            n = self.dimensions,
            checked = match self.pivot_check {
                PivotCheck::Unchecked => "unchecked",
                PivotCheck::Epsilon(_) => "checked",
            }
        );

        for diagonal in 0..self.dimensions {
            self.normalize_row(diagonal)?;

            for row in 0..self.dimensions {
                if row != diagonal {
                    self.eliminate(diagonal, row);
                }
            }
        }

        Ok(self.augmented.rounded(self.decimal_places))
    }

    /// Divides the row by its diagonal entry, making that entry one.
    fn normalize_row(&mut self, diagonal: usize) -> Result<(), MatrixError> {
        let pivot = self.working[(diagonal, diagonal)];

        match self.pivot_check {
            PivotCheck::Unchecked => {
                if pivot.is_zero() {
                    warn!("zero pivot at diagonal {diagonal}, the inverse will not be finite");
                }
            }
            PivotCheck::Epsilon(epsilon) => {
                let magnitude = if pivot < T::zero() { -pivot } else { pivot };
                if !(magnitude > epsilon) {
                    return Err(MatrixError::Singular { diagonal });
                }
            }
        }

        for column in 0..self.dimensions {
            self.working[(diagonal, column)] = self.working[(diagonal, column)] / pivot;
            self.augmented[(diagonal, column)] = self.augmented[(diagonal, column)] / pivot;
        }

        Ok(())
    }

    /// Subtracts the normalized diagonal row from `row` such that the row's
    /// entry in the diagonal column becomes zero.
    fn eliminate(&mut self, diagonal: usize, row: usize) {
        let factor = self.working[(row, diagonal)];

        for column in 0..self.dimensions {
            self.working[(row, column)] =
                self.working[(row, column)] - factor * self.working[(diagonal, column)];
            self.augmented[(row, column)] =
                self.augmented[(row, column)] - factor * self.augmented[(diagonal, column)];
        }
    }
}
