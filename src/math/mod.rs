use std::fmt;

/// 3x3 homogeneous matrix for 2D transforms.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 homogeneous matrix for 3D transforms.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Homogeneous 3-vector `[x, y, w]`.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Homogeneous 4-vector `[x, y, z, w]`.
pub type Vector4 = nalgebra::Vector4<f64>;

/// Tolerance used when checking structural invariants such as the affine
/// bottom row.
pub const TOLERANCE: f64 = 1e-10;

/// Spatial dimensionality of a point or transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Two,
    Three,
}

impl Dim {
    /// Number of linear (cartesian) coordinates.
    #[must_use]
    pub const fn coords(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Side length of the homogeneous matrix, `coords + 1`.
    #[must_use]
    pub const fn size(self) -> usize {
        self.coords() + 1
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two => f.write_str("2D"),
            Self::Three => f.write_str("3D"),
        }
    }
}

/// Returns `true` if `a` and `b` differ by at most `tol`.
#[must_use]
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_sizes() {
        assert_eq!(Dim::Two.coords(), 2);
        assert_eq!(Dim::Two.size(), 3);
        assert_eq!(Dim::Three.coords(), 3);
        assert_eq!(Dim::Three.size(), 4);
    }

    #[test]
    fn approx_eq_is_inclusive() {
        assert!(approx_eq(1.0, 1.0 + 1e-12, 1e-9));
        assert!(!approx_eq(1.0, 1.1, 1e-9));
    }
}
