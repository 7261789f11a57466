use crate::error::{Result, TransformError};
use crate::math::{approx_eq, Dim, Matrix3, Matrix4, TOLERANCE};
use crate::point::{HomogeneousPoint, Repr};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MatRepr {
    D2(Matrix3),
    D3(Matrix4),
}

/// A square homogeneous transform: 3x3 for 2D, 4x4 for 3D.
///
/// Matrices are values. [`multiply`](Self::multiply) and
/// [`apply`](Self::apply) return new values and never touch their operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrix {
    repr: MatRepr,
}

impl TransformMatrix {
    /// Returns the identity transform of size `dim + 1`.
    #[must_use]
    pub fn identity(dim: Dim) -> Self {
        match dim {
            Dim::Two => Self::from_matrix3(Matrix3::identity()),
            Dim::Three => Self::from_matrix4(Matrix4::identity()),
        }
    }

    /// Wraps a raw 3x3 matrix as a 2D transform.
    #[must_use]
    pub fn from_matrix3(m: Matrix3) -> Self {
        Self {
            repr: MatRepr::D2(m),
        }
    }

    /// Wraps a raw 4x4 matrix as a 3D transform.
    #[must_use]
    pub fn from_matrix4(m: Matrix4) -> Self {
        Self {
            repr: MatRepr::D3(m),
        }
    }

    /// Returns the dimensionality this matrix transforms.
    #[must_use]
    pub fn dim(&self) -> Dim {
        match self.repr {
            MatRepr::D2(_) => Dim::Two,
            MatRepr::D3(_) => Dim::Three,
        }
    }

    /// Returns the underlying 3x3 matrix for 2D transforms.
    #[must_use]
    pub fn as_matrix3(&self) -> Option<&Matrix3> {
        match &self.repr {
            MatRepr::D2(m) => Some(m),
            MatRepr::D3(_) => None,
        }
    }

    /// Returns the underlying 4x4 matrix for 3D transforms.
    #[must_use]
    pub fn as_matrix4(&self) -> Option<&Matrix4> {
        match &self.repr {
            MatRepr::D2(_) => None,
            MatRepr::D3(m) => Some(m),
        }
    }

    /// Returns the entry at (`row`, `col`), or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        match &self.repr {
            MatRepr::D2(m) => m.get((row, col)).copied(),
            MatRepr::D3(m) => m.get((row, col)).copied(),
        }
    }

    /// Returns row `i`, or `None` if out of range.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<Vec<f64>> {
        (i < self.dim().size()).then(|| match &self.repr {
            MatRepr::D2(m) => m.row(i).iter().copied().collect(),
            MatRepr::D3(m) => m.row(i).iter().copied().collect(),
        })
    }

    /// Returns the matrix as a list of rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<f64>> {
        match &self.repr {
            MatRepr::D2(m) => m
                .row_iter()
                .map(|r| r.iter().copied().collect())
                .collect(),
            MatRepr::D3(m) => m
                .row_iter()
                .map(|r| r.iter().copied().collect())
                .collect(),
        }
    }

    /// Computes the product `self * rhs`.
    ///
    /// Applied to a point, the result performs `rhs` first, then `self`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DimensionMismatch`] if the operands differ
    /// in dimension.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        match (&self.repr, &rhs.repr) {
            (MatRepr::D2(a), MatRepr::D2(b)) => Ok(Self::from_matrix3(a * b)),
            (MatRepr::D3(a), MatRepr::D3(b)) => Ok(Self::from_matrix4(a * b)),
            _ => Err(TransformError::DimensionMismatch {
                expected: self.dim(),
                found: rhs.dim(),
            }),
        }
    }

    /// Computes the matrix-vector product `self * point`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DimensionMismatch`] if the point's dimension
    /// differs from the matrix's.
    pub fn apply(&self, point: &HomogeneousPoint) -> Result<HomogeneousPoint> {
        let repr = match (&self.repr, &point.repr) {
            (MatRepr::D2(m), Repr::D2(v)) => Repr::D2(m * v),
            (MatRepr::D3(m), Repr::D3(v)) => Repr::D3(m * v),
            _ => {
                return Err(TransformError::DimensionMismatch {
                    expected: self.dim(),
                    found: point.dim(),
                })
            }
        };
        Ok(HomogeneousPoint { repr })
    }

    /// Returns `true` if the bottom row is `[0, ..., 0, 1]`.
    #[must_use]
    pub fn is_affine(&self) -> bool {
        let n = self.dim().size();
        (0..n).all(|col| {
            let expected = if col == n - 1 { 1.0 } else { 0.0 };
            self.get(n - 1, col)
                .is_some_and(|v| approx_eq(v, expected, TOLERANCE))
        })
    }

    /// Entry-wise comparison within `tol`. Different dimensions are never
    /// equal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        match (&self.repr, &other.repr) {
            (MatRepr::D2(a), MatRepr::D2(b)) => {
                a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, tol))
            }
            (MatRepr::D3(a), MatRepr::D3(b)) => {
                a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, tol))
            }
            _ => false,
        }
    }
}
