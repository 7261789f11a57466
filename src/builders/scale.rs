use crate::error::{Result, TransformError};
use crate::math::{Matrix3, Matrix4, Vector3, Vector4};
use crate::matrix::TransformMatrix;

/// Builds a 2D non-uniform scaling `diag(sx, sy, 1)`.
///
/// A zero factor collapses that axis onto the origin; a negative factor
/// reflects and scales at once. Neither is an error.
#[must_use]
pub fn scaling2(sx: f64, sy: f64) -> TransformMatrix {
    TransformMatrix::from_matrix3(Matrix3::from_diagonal(&Vector3::new(sx, sy, 1.0)))
}

/// Builds a 3D non-uniform scaling `diag(sx, sy, sz, 1)`.
#[must_use]
pub fn scaling3(sx: f64, sy: f64, sz: f64) -> TransformMatrix {
    TransformMatrix::from_matrix4(Matrix4::from_diagonal(&Vector4::new(sx, sy, sz, 1.0)))
}

/// Builds a scaling whose dimension is taken from the length of `s`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameter`] unless `s` has 2 or 3
/// components.
pub fn scaling(s: &[f64]) -> Result<TransformMatrix> {
    match *s {
        [sx, sy] => Ok(scaling2(sx, sy)),
        [sx, sy, sz] => Ok(scaling3(sx, sy, sz)),
        _ => Err(TransformError::invalid(format!(
            "scaling needs 2 or 3 factors, got {}",
            s.len()
        ))),
    }
}
