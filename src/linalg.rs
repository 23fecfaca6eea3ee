//! Dense matrices and their inversion by Gauss-Jordan elimination.

mod error;
mod inverse;
mod matrix;

pub use error::MatrixError;
pub use inverse::{MatrixInverseOperation, PivotCheck, DEFAULT_DECIMAL_PLACES};
pub use matrix::Matrix;
