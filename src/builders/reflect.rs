use std::str::FromStr;

use crate::error::TransformError;
use crate::math::{Matrix3, Matrix4};
use crate::matrix::TransformMatrix;

/// Coordinate axis used as a 2D mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis2 {
    X,
    Y,
}

/// Coordinate plane used as a 3D mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

/// Diagonal line used as a 2D mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorLine {
    /// `y = x`
    YEqualsX,
    /// `y = -x`
    YEqualsNegX,
}

/// Any mirror set supported by [`reflection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Axis(Axis2),
    Plane(Plane),
    Line(MirrorLine),
}

impl FromStr for Axis2 {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            other => Err(TransformError::invalid(format!(
                "unknown 2D mirror axis '{other}'"
            ))),
        }
    }
}

impl FromStr for Plane {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xy" => Ok(Self::XY),
            "xz" => Ok(Self::XZ),
            "yz" => Ok(Self::YZ),
            other => Err(TransformError::invalid(format!(
                "unknown mirror plane '{other}'"
            ))),
        }
    }
}

impl FromStr for MirrorLine {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.to_ascii_lowercase().as_str() {
            "y=x" => Ok(Self::YEqualsX),
            "y=-x" => Ok(Self::YEqualsNegX),
            other => Err(TransformError::invalid(format!(
                "unknown mirror line '{other}'"
            ))),
        }
    }
}

impl FromStr for Mirror {
    type Err = TransformError;

    /// Accepts `x`/`y`, `xy`/`xz`/`yz`, or `y=x`/`y=-x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(Self::Axis)
            .or_else(|_| s.parse().map(Self::Plane))
            .or_else(|_| s.parse().map(Self::Line))
            .map_err(|_| TransformError::invalid(format!("unknown mirror '{}'", s.trim())))
    }
}

/// Reflects 2D points over a coordinate axis by negating the other axis.
#[must_use]
pub fn axis_reflection2(axis: Axis2) -> TransformMatrix {
    let mut m = Matrix3::identity();
    match axis {
        Axis2::X => m[(1, 1)] = -1.0,
        Axis2::Y => m[(0, 0)] = -1.0,
    }
    TransformMatrix::from_matrix3(m)
}

/// Reflects 3D points over a coordinate plane by negating the axis
/// orthogonal to it.
#[must_use]
pub fn axis_reflection3(plane: Plane) -> TransformMatrix {
    let mut m = Matrix4::identity();
    match plane {
        Plane::XY => m[(2, 2)] = -1.0,
        Plane::XZ => m[(1, 1)] = -1.0,
        Plane::YZ => m[(0, 0)] = -1.0,
    }
    TransformMatrix::from_matrix4(m)
}

/// Reflects 2D points over `y = x` or `y = -x`.
#[must_use]
pub fn diagonal_reflection(line: MirrorLine) -> TransformMatrix {
    let s = match line {
        MirrorLine::YEqualsX => 1.0,
        MirrorLine::YEqualsNegX => -1.0,
    };
    #[rustfmt::skip]
    let m = Matrix3::new(
        0.0, s,   0.0,
        s,   0.0, 0.0,
        0.0, 0.0, 1.0,
    );
    TransformMatrix::from_matrix3(m)
}

/// Builds the reflection for any [`Mirror`]. The dimension follows from the
/// mirror: axes and lines are 2D, planes are 3D.
#[must_use]
pub fn reflection(mirror: Mirror) -> TransformMatrix {
    match mirror {
        Mirror::Axis(axis) => axis_reflection2(axis),
        Mirror::Plane(plane) => axis_reflection3(plane),
        Mirror::Line(line) => diagonal_reflection(line),
    }
}
