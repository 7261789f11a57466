use crate::error::{Result, TransformError};
use crate::math::{Matrix3, Matrix4, Vector3};
use crate::matrix::TransformMatrix;

/// Builds a 2D translation by `(tx, ty)`.
///
/// ```text
/// [1 0 tx]
/// [0 1 ty]
/// [0 0 1 ]
/// ```
#[must_use]
pub fn translation2(tx: f64, ty: f64) -> TransformMatrix {
    let mut m = Matrix3::identity();
    m[(0, 2)] = tx;
    m[(1, 2)] = ty;
    TransformMatrix::from_matrix3(m)
}

/// Builds a 3D translation by `(tx, ty, tz)`.
#[must_use]
pub fn translation3(tx: f64, ty: f64, tz: f64) -> TransformMatrix {
    TransformMatrix::from_matrix4(Matrix4::new_translation(&Vector3::new(tx, ty, tz)))
}

/// Builds a translation whose dimension is taken from the length of `t`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameter`] unless `t` has 2 or 3
/// components.
pub fn translation(t: &[f64]) -> Result<TransformMatrix> {
    match *t {
        [tx, ty] => Ok(translation2(tx, ty)),
        [tx, ty, tz] => Ok(translation3(tx, ty, tz)),
        _ => Err(TransformError::invalid(format!(
            "translation needs 2 or 3 components, got {}",
            t.len()
        ))),
    }
}
