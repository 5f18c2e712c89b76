// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for recipe runs.
//!
//! This module contains message types for logging events related to:
//! * Recipe start and completion
//! * Per-step completion and failure

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::errors::TransformError;
use crate::observability::messages::StructuredLog;
use crate::traits::ToolIntent;

/// Recipe run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use text_forge::observability::messages::recipe::RecipeStarted;
///
/// let msg = RecipeStarted {
///     recipe: "shout",
///     step_count: 3,
///     input_size: 11,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RecipeStarted<'a> {
    pub recipe: &'a str,
    pub step_count: usize,
    pub input_size: usize,
}

impl Display for RecipeStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Recipe '{}' started: {} steps, input={} bytes",
            self.recipe, self.step_count, self.input_size
        )
    }
}

impl StructuredLog for RecipeStarted<'_> {
    fn log(&self) {
        tracing::info!(
            recipe = self.recipe,
            step_count = self.step_count,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            recipe = self.recipe,
            step_count = self.step_count,
        )
    }
}

/// One step finished.
///
/// # Log Level
/// `debug!` - Per-step detail
pub struct StepCompleted<'a> {
    pub step_id: &'a str,
    pub tool: &'a str,
    pub intent: ToolIntent,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for StepCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step '{}' ({}, {:?}) completed: output={} bytes, duration={:?}",
            self.step_id, self.tool, self.intent, self.output_size, self.duration
        )
    }
}

impl StructuredLog for StepCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            step_id = self.step_id,
            tool = self.tool,
            intent = ?self.intent,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            step_id = self.step_id,
            tool = self.tool,
        )
    }
}

/// A step failed and the run stopped.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct StepFailed<'a> {
    pub step_id: &'a str,
    pub tool: &'a str,
    pub error: &'a TransformError,
}

impl Display for StepFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step '{}' ({}) failed: {}",
            self.step_id, self.tool, self.error
        )
    }
}

impl StructuredLog for StepFailed<'_> {
    fn log(&self) {
        tracing::error!(
            step_id = self.step_id,
            tool = self.tool,
            error_kind = self.error.kind(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            step_id = self.step_id,
            tool = self.tool,
        )
    }
}

/// Recipe run finished.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecipeCompleted<'a> {
    pub recipe: &'a str,
    pub steps_executed: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for RecipeCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Recipe '{}' completed: {} steps, output={} bytes, duration={:?}",
            self.recipe, self.steps_executed, self.output_size, self.duration
        )
    }
}

impl StructuredLog for RecipeCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            recipe = self.recipe,
            steps_executed = self.steps_executed,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            recipe = self.recipe,
        )
    }
}
