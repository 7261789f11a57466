//! Canonical affine transform matrices.
//!
//! All angles are radians. Every builder returns an affine matrix: the bottom
//! row is `[0, ..., 0, 1]`, so a point's homogeneous coordinate survives
//! application unchanged.

mod reflect;
mod rotate;
mod scale;
mod translate;

pub use reflect::{
    axis_reflection2, axis_reflection3, diagonal_reflection, reflection, Axis2, Mirror,
    MirrorLine, Plane,
};
pub use rotate::{axis_rotation, rotation2, Axis};
pub use scale::{scaling, scaling2, scaling3};
pub use translate::{translation, translation2, translation3};

use crate::error::{Result, TransformError};
use crate::math::Dim;
use crate::matrix::TransformMatrix;

/// A transform request whose dimension is supplied separately, for callers
/// that pick the transform at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformKind {
    /// Offset per axis; must have `dim` components.
    Translation(Vec<f64>),
    /// Factor per axis; must have `dim` components.
    Scaling(Vec<f64>),
    Reflection(Mirror),
    /// `axis` must be `Some` in 3D. In 2D it must be `None` or `Some(Axis::Z)`.
    Rotation { axis: Option<Axis>, angle: f64 },
}

/// Builds the matrix for `kind` in `dim` dimensions.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameter`] if the parameters do not fit
/// `dim`: a component count other than `dim`, a plane mirror in 2D, an axis or
/// diagonal mirror in 3D, a missing 3D rotation axis, or an in-plane 2D
/// rotation axis.
pub fn build_transform(kind: &TransformKind, dim: Dim) -> Result<TransformMatrix> {
    match (kind, dim) {
        (TransformKind::Translation(t), _) => {
            check_arity("translation", t, dim)?;
            translation(t)
        }
        (TransformKind::Scaling(s), _) => {
            check_arity("scaling", s, dim)?;
            scaling(s)
        }
        (TransformKind::Reflection(m @ (Mirror::Axis(_) | Mirror::Line(_))), Dim::Two)
        | (TransformKind::Reflection(m @ Mirror::Plane(_)), Dim::Three) => Ok(reflection(*m)),
        (TransformKind::Reflection(m), _) => Err(TransformError::invalid(format!(
            "{m:?} is not a {dim} mirror"
        ))),
        (TransformKind::Rotation { axis: None | Some(Axis::Z), angle }, Dim::Two) => {
            Ok(rotation2(*angle))
        }
        (TransformKind::Rotation { axis: Some(axis), .. }, Dim::Two) => Err(
            TransformError::invalid(format!("2D rotation cannot turn about the {axis:?} axis")),
        ),
        (TransformKind::Rotation { axis: Some(axis), angle }, Dim::Three) => {
            Ok(axis_rotation(*axis, *angle))
        }
        (TransformKind::Rotation { axis: None, .. }, Dim::Three) => Err(TransformError::invalid(
            "3D rotation requires an axis",
        )),
    }
}

fn check_arity(what: &str, values: &[f64], dim: Dim) -> Result<()> {
    if values.len() == dim.coords() {
        Ok(())
    } else {
        Err(TransformError::invalid(format!(
            "{dim} {what} needs {} components, got {}",
            dim.coords(),
            values.len()
        )))
    }
}
