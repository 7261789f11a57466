use std::str::FromStr;

use crate::error::TransformError;
use crate::math::{Matrix3, Matrix4};
use crate::matrix::TransformMatrix;

/// Rotation axis in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl FromStr for Axis {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            other => Err(TransformError::invalid(format!(
                "unknown rotation axis '{other}'"
            ))),
        }
    }
}

/// Builds a 2D counter-clockwise rotation by `angle` radians about the origin.
#[must_use]
pub fn rotation2(angle: f64) -> TransformMatrix {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
        c,   -s,  0.0,
        s,   c,   0.0,
        0.0, 0.0, 1.0,
    );
    TransformMatrix::from_matrix3(m)
}

/// Builds a 3D rotation by `angle` radians about a coordinate axis.
///
/// Right-hand rule: looking down the positive axis toward the origin, the
/// other two axes turn counter-clockwise. That puts `-sin` above the
/// diagonal for X and Z but below it for Y.
#[must_use]
pub fn axis_rotation(axis: Axis, angle: f64) -> TransformMatrix {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = match axis {
        Axis::X => Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        Axis::Y => Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        Axis::Z => Matrix4::new(
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
    };
    TransformMatrix::from_matrix4(m)
}
