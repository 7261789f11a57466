//! Optional observation hooks for transform pipelines.
//!
//! The numeric core never formats or logs anything itself. A presentation
//! layer that wants to narrate a derivation passes an [`Observer`] to
//! [`Pipeline::apply_observed`](crate::pipeline::Pipeline::apply_observed).

use crate::matrix::TransformMatrix;
use crate::point::HomogeneousPoint;

/// Receives each step of a pipeline as it is applied.
pub trait Observer {
    /// Called after `matrix` (the `step`-th op, 0-based) maps `before` to
    /// `after`.
    fn on_step(
        &mut self,
        step: usize,
        matrix: &TransformMatrix,
        before: &HomogeneousPoint,
        after: &HomogeneousPoint,
    ) {
        let _ = (step, matrix, before, after);
    }
}

/// Observer that ignores everything.
impl Observer for () {}

/// One recorded pipeline step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub matrix: TransformMatrix,
    pub before: HomogeneousPoint,
    pub after: HomogeneousPoint,
}

/// Observer that records every step for later display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    pub steps: Vec<Step>,
}

impl Observer for Trace {
    fn on_step(
        &mut self,
        _step: usize,
        matrix: &TransformMatrix,
        before: &HomogeneousPoint,
        after: &HomogeneousPoint,
    ) {
        self.steps.push(Step {
            matrix: *matrix,
            before: *before,
            after: *after,
        });
    }
}

/// Observer that emits one `tracing` debug event per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_step(
        &mut self,
        step: usize,
        matrix: &TransformMatrix,
        before: &HomogeneousPoint,
        after: &HomogeneousPoint,
    ) {
        tracing::debug!(
            target: "homxform::pipeline",
            step,
            dim = %matrix.dim(),
            before = ?before.cartesian(),
            after = ?after.cartesian(),
            "applied transform"
        );
    }
}
