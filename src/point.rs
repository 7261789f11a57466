use crate::error::{Result, TransformError};
use crate::math::{approx_eq, Dim, Vector3, Vector4};

/// Whether a homogeneous vector is a position or a free direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// Homogeneous coordinate 1: affected by translation.
    Point,
    /// Homogeneous coordinate 0: translation-invariant.
    Direction,
}

impl PointKind {
    /// The homogeneous coordinate this kind carries.
    #[must_use]
    pub const fn w(self) -> f64 {
        match self {
            Self::Point => 1.0,
            Self::Direction => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Repr {
    D2(Vector3),
    D3(Vector4),
}

/// A 2D or 3D point (or direction) in homogeneous form.
///
/// The dimension is fixed at construction and the value is immutable:
/// applying a transform produces a new instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomogeneousPoint {
    pub(crate) repr: Repr,
}

impl HomogeneousPoint {
    /// Creates a 2D point `[x, y, 1]`.
    #[must_use]
    pub fn point2(x: f64, y: f64) -> Self {
        Self::planar(x, y, PointKind::Point)
    }

    /// Creates a 2D direction `[x, y, 0]`.
    #[must_use]
    pub fn direction2(x: f64, y: f64) -> Self {
        Self::planar(x, y, PointKind::Direction)
    }

    /// Creates a 3D point `[x, y, z, 1]`.
    #[must_use]
    pub fn point3(x: f64, y: f64, z: f64) -> Self {
        Self::spatial(x, y, z, PointKind::Point)
    }

    /// Creates a 3D direction `[x, y, z, 0]`.
    #[must_use]
    pub fn direction3(x: f64, y: f64, z: f64) -> Self {
        Self::spatial(x, y, z, PointKind::Direction)
    }

    /// Creates a point from a slice of 2 or 3 cartesian coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameter`] if `coords` does not hold
    /// exactly 2 or 3 values.
    pub fn new(coords: &[f64], kind: PointKind) -> Result<Self> {
        match *coords {
            [x, y] => Ok(Self::planar(x, y, kind)),
            [x, y, z] => Ok(Self::spatial(x, y, z, kind)),
            _ => Err(TransformError::invalid(format!(
                "expected 2 or 3 coordinates, got {}",
                coords.len()
            ))),
        }
    }

    fn planar(x: f64, y: f64, kind: PointKind) -> Self {
        Self {
            repr: Repr::D2(Vector3::new(x, y, kind.w())),
        }
    }

    fn spatial(x: f64, y: f64, z: f64, kind: PointKind) -> Self {
        Self {
            repr: Repr::D3(Vector4::new(x, y, z, kind.w())),
        }
    }

    /// Returns the dimensionality of this point.
    #[must_use]
    pub fn dim(&self) -> Dim {
        match self.repr {
            Repr::D2(_) => Dim::Two,
            Repr::D3(_) => Dim::Three,
        }
    }

    /// Returns all homogeneous components, including the trailing `w`.
    #[must_use]
    pub fn homogeneous(&self) -> &[f64] {
        match &self.repr {
            Repr::D2(v) => v.as_slice(),
            Repr::D3(v) => v.as_slice(),
        }
    }

    /// Returns the `dim` cartesian coordinates, without `w`.
    #[must_use]
    pub fn cartesian(&self) -> &[f64] {
        let h = self.homogeneous();
        &h[..h.len() - 1]
    }

    /// Returns the homogeneous coordinate.
    #[must_use]
    pub fn w(&self) -> f64 {
        match &self.repr {
            Repr::D2(v) => v.z,
            Repr::D3(v) => v.w,
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.homogeneous()[0]
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.homogeneous()[1]
    }

    /// Returns the z coordinate, or `None` for 2D points.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        match &self.repr {
            Repr::D2(_) => None,
            Repr::D3(v) => Some(v.z),
        }
    }

    /// Component-wise comparison (including `w`) within `tol`.
    ///
    /// Points of different dimensionality are never equal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.dim() == other.dim()
            && self
                .homogeneous()
                .iter()
                .zip(other.homogeneous())
                .all(|(a, b)| approx_eq(*a, *b, tol))
    }
}
