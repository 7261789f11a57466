use thiserror::Error;

use crate::math::Dim;

/// Errors raised by transform construction, composition and application.
///
/// Both variants are programmer errors: they are reported at the call that
/// violates the precondition and never corrected silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: Dim, found: Dim },
}

impl TransformError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Returns `Ok(())` when both dimensions agree.
    pub(crate) fn check_dim(expected: Dim, found: Dim) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::DimensionMismatch { expected, found })
        }
    }
}

/// Convenience type alias for results using [`TransformError`].
pub type Result<T> = std::result::Result<T, TransformError>;
