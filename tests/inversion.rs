use alpha_beta_estimation::linalg::{Matrix, MatrixError, MatrixInverseOperation, PivotCheck};
use approx::assert_abs_diff_eq;

#[test]
fn test_inverse_of_array() {
    let inverse = MatrixInverseOperation::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]])
        .and_then(MatrixInverseOperation::compute)
        .expect("matrix is invertible");

    assert_eq!(inverse.get(0, 0), Ok(0.6));
    assert_eq!(inverse.get(0, 1), Ok(-0.7));
    assert_eq!(inverse.get(1, 0), Ok(-0.2));
    assert_eq!(inverse.get(1, 1), Ok(0.4));
}

#[test]
fn test_inverse_times_matrix_is_identity() {
    let m = Matrix::from_rows(&[[2.0_f64, 1.0, 1.0], [1.0, 3.0, 2.0], [1.0, 0.0, 0.0]])
        .expect("rectangular array");
    let inverse = m.inverse().expect("matrix is invertible");

    for row in 0..3 {
        for column in 0..3 {
            let product: f64 = (0..3)
                .map(|k| m[(row, k)] * inverse[(k, column)])
                .sum();
            let expected = if row == column { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(product, expected, epsilon = 1e-2);
        }
    }
}

#[test]
fn test_shape_errors() {
    let wide = Matrix::<f64>::zeros(2, 3);
    assert_eq!(
        wide.inverse(),
        Err(MatrixError::NotSquare {
            rows: 2,
            columns: 3
        })
    );
    assert!(MatrixInverseOperation::new(&wide).is_err());
}

#[test]
fn test_checked_singular() {
    let singular = Matrix::from_rows(&[[1.0_f64, 2.0], [2.0, 4.0]]).expect("rectangular array");
    let result = MatrixInverseOperation::new(&singular)
        .and_then(|op| op.with_pivot_check(PivotCheck::Epsilon(1e-9)).compute());
    assert_eq!(result, Err(MatrixError::Singular { diagonal: 1 }));
}
