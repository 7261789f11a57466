//! Composition of transforms.
//!
//! Two orders appear here and must not be mixed up:
//!
//! * [`compose`] multiplies in written order: `compose([A, B, C]) = A * B * C`,
//!   so `C` is the first to touch a point.
//! * [`compose_and_apply`] and [`Pipeline`] take ops in application order:
//!   the first op listed is applied first, giving `opN * ... * op1 * p`.
//!   Translate-then-rotate therefore rotates the translated point about the
//!   origin.

use crate::error::{Result, TransformError};
use crate::math::Dim;
use crate::matrix::TransformMatrix;
use crate::observe::Observer;
use crate::point::HomogeneousPoint;

/// Multiplies `matrices` left to right. An empty list yields the identity.
///
/// # Errors
///
/// Returns [`TransformError::DimensionMismatch`] if any matrix is not `dim`.
pub fn compose(dim: Dim, matrices: &[TransformMatrix]) -> Result<TransformMatrix> {
    matrices
        .iter()
        .try_fold(TransformMatrix::identity(dim), |acc, m| acc.multiply(m))
}

/// Applies `ops` to `point` in the order listed, each result feeding the
/// next.
///
/// # Errors
///
/// Returns [`TransformError::DimensionMismatch`] if any op's dimension
/// differs from the point's.
pub fn compose_and_apply(
    point: &HomogeneousPoint,
    ops: &[TransformMatrix],
) -> Result<HomogeneousPoint> {
    ops.iter().try_fold(*point, |p, m| m.apply(&p))
}

/// An ordered list of transforms in application order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    dim: Dim,
    ops: Vec<TransformMatrix>,
}

impl Pipeline {
    /// Creates an empty pipeline for `dim`.
    #[must_use]
    pub fn new(dim: Dim) -> Self {
        Self {
            dim,
            ops: Vec::new(),
        }
    }

    /// Builds a pipeline from ops in application order.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DimensionMismatch`] if any op is not `dim`.
    pub fn from_ops(dim: Dim, ops: impl IntoIterator<Item = TransformMatrix>) -> Result<Self> {
        ops.into_iter().try_fold(Self::new(dim), Self::then)
    }

    /// Appends `op`, to be applied after everything already in the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DimensionMismatch`] if `op` is not the
    /// pipeline's dimension.
    pub fn then(mut self, op: TransformMatrix) -> Result<Self> {
        TransformError::check_dim(self.dim, op.dim())?;
        self.ops.push(op);
        Ok(self)
    }

    /// Returns the dimensionality every op shares.
    #[must_use]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Returns the ops in application order.
    #[must_use]
    pub fn ops(&self) -> &[TransformMatrix] {
        &self.ops
    }

    /// Returns the number of ops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the pipeline holds no ops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Collapses the pipeline into one matrix `opN * ... * op1`.
    ///
    /// # Errors
    ///
    /// Cannot fail for a pipeline built through [`then`](Self::then); the
    /// `Result` mirrors [`TransformMatrix::multiply`].
    pub fn matrix(&self) -> Result<TransformMatrix> {
        self.ops
            .iter()
            .try_fold(TransformMatrix::identity(self.dim), |acc, m| m.multiply(&acc))
    }

    /// Applies every op to `point` in order.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DimensionMismatch`] if `point` is not the
    /// pipeline's dimension.
    pub fn apply(&self, point: &HomogeneousPoint) -> Result<HomogeneousPoint> {
        self.apply_observed(point, &mut ())
    }

    /// Like [`apply`](Self::apply), reporting every step to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DimensionMismatch`] if `point` is not the
    /// pipeline's dimension. The observer sees no steps in that case.
    pub fn apply_observed(
        &self,
        point: &HomogeneousPoint,
        observer: &mut dyn Observer,
    ) -> Result<HomogeneousPoint> {
        TransformError::check_dim(self.dim, point.dim())?;
        let mut current = *point;
        for (step, op) in self.ops.iter().enumerate() {
            let next = op.apply(&current)?;
            observer.on_step(step, op, &current, &next);
            current = next;
        }
        Ok(current)
    }
}
