//! Homogeneous-coordinate affine transforms in 2D (3x3) and 3D (4x4).
//!
//! # Composition order
//!
//! The two composition entry points read their slice in opposite orders:
//!
//! * [`compose_and_apply`] and [`Pipeline`] take ops in **application
//!   order**. The first op listed touches the point first.
//! * [`compose`] multiplies in **written order**: `compose([A, B, C])` is
//!   `A * B * C`, so the *last* matrix touches the point first.
//!
//! Passing the same slice to both gives different results unless the ops
//! commute. To collapse an application-order list into one matrix, use
//! [`Pipeline::matrix`].
//!
//! ```
//! use std::f64::consts::FRAC_PI_2;
//!
//! use homxform::builders::{rotation2, translation2};
//! use homxform::{compose, compose_and_apply, Dim, HomogeneousPoint, Pipeline};
//!
//! let ops = [translation2(1.0, 0.0), rotation2(FRAC_PI_2)];
//! let p = HomogeneousPoint::point2(1.0, 0.0);
//!
//! // Translate to (2, 0), then rotate to (0, 2).
//! let applied = compose_and_apply(&p, &ops)?;
//! assert!(applied.approx_eq(&HomogeneousPoint::point2(0.0, 2.0), 1e-9));
//!
//! // Written order: rotate to (0, 1) first, then translate to (1, 1).
//! let written = compose(Dim::Two, &ops)?.apply(&p)?;
//! assert!(written.approx_eq(&HomogeneousPoint::point2(1.0, 1.0), 1e-9));
//!
//! let collapsed = Pipeline::from_ops(Dim::Two, ops)?.matrix()?.apply(&p)?;
//! assert!(collapsed.approx_eq(&applied, 1e-9));
//! # Ok::<(), homxform::TransformError>(())
//! ```

pub mod builders;
pub mod error;
pub mod math;
pub mod matrix;
pub mod observe;
pub mod pipeline;
pub mod point;

pub use builders::{build_transform, TransformKind};
pub use error::{Result, TransformError};
pub use math::Dim;
pub use matrix::TransformMatrix;
pub use pipeline::{compose, compose_and_apply, Pipeline};
pub use point::{HomogeneousPoint, PointKind};
