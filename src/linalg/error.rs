/// Errors from matrix construction, cell access and inversion.
///
/// ```
/// use alpha_beta_estimation::linalg::{Matrix, MatrixError};
///
/// let wide = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(
///     wide.inverse().unwrap_err(),
///     MatrixError::NotSquare { rows: 2, columns: 3 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix is not square and therefore not invertible.
    NotSquare { rows: usize, columns: usize },
    /// A cell outside the matrix was accessed.
    IndexOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// A row of the source array has a different length than the first row.
    JaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A pivot on the given diagonal index was zero or below the configured threshold.
    Singular { diagonal: usize },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::NotSquare { rows, columns } => {
                write!(f, "a {rows}x{columns} matrix is not square and cannot be inverted")
            }
            MatrixError::IndexOutOfBounds {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "index ({row}, {column}) is out of bounds for a {rows}x{columns} matrix"
            ),
            MatrixError::JaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} columns, but {expected} were expected"
            ),
            MatrixError::Singular { diagonal } => {
                write!(f, "matrix is singular: vanishing pivot at diagonal {diagonal}")
            }
        }
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
