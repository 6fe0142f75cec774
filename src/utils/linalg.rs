//! Pseudo-inverse plumbing for the least-squares fits
//!
//! Both least-squares estimators solve overdetermined systems through the
//! Moore-Penrose pseudo-inverse, computed from nalgebra's SVD. The singular
//! value cutoff below drops directions with negligible energy instead of
//! amplifying them, which is what makes the rank-deficient case an error
//! the caller can see rather than a silent blow-up.

use nalgebra::{DMatrix, DVector};

use crate::{Result, SinefitError};

/// Singular value cutoff relative to machine precision
const PINV_EPSILON: f64 = 1e-12;

/// Moore-Penrose pseudo-inverse of a real matrix
///
/// # Errors
/// Returns an error if the SVD fails to converge.
pub fn pseudo_inverse(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    matrix
        .clone()
        .pseudo_inverse(PINV_EPSILON)
        .map_err(|e| SinefitError::Linalg(e.to_string()))
}

/// Solve `matrix * x = rhs` in the least-squares sense
///
/// Equivalent to `pseudo_inverse(matrix) * rhs` but solves through the SVD
/// directly, without forming the inverse.
pub fn solve_least_squares(matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<DVector<f64>> {
    let svd = matrix.clone().svd(true, true);
    svd.solve(rhs, PINV_EPSILON)
        .map_err(|e| SinefitError::Linalg(e.to_string()))
}
