// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::TransformError;

/// Errors raised while running a recipe
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutionError {
    /// The input was rejected before any step ran
    #[error("Recipe input rejected: {0}")]
    InputRejected(TransformError),

    /// A step failed; later steps were not run
    #[error("Step '{step_id}' ({tool}) failed: {source}")]
    StepFailed {
        step_id: String,
        tool: &'static str,
        #[source]
        source: TransformError,
    },
}
