// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for recipe loading and validation.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;

/// Recipe loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecipeLoaded<'a> {
    pub source: &'a str,
    pub name: Option<&'a str>,
    pub step_count: usize,
}

impl Display for RecipeLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.name {
            Some(name) => write!(
                f,
                "Loaded recipe '{}' from {} ({} steps)",
                name, self.source, self.step_count
            ),
            None => write!(
                f,
                "Loaded recipe from {} ({} steps)",
                self.source, self.step_count
            ),
        }
    }
}

impl StructuredLog for RecipeLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            name = self.name.unwrap_or_default(),
            step_count = self.step_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            source = self.source,
        )
    }
}

/// Recipe failed validation; one line per problem.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use text_forge::errors::ValidationError;
/// use text_forge::observability::messages::validation::RecipeValidationFailed;
///
/// let errors = vec![ValidationError::EmptyRecipe];
/// let msg = RecipeValidationFailed {
///     source: "recipes/empty.yaml",
///     errors: &errors,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Recipe recipes/empty.yaml failed validation with 1 error(s): Recipe has no steps"
/// );
/// ```
pub struct RecipeValidationFailed<'a> {
    pub source: &'a str,
    pub errors: &'a [ValidationError],
}

impl Display for RecipeValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let details = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "Recipe {} failed validation with {} error(s): {}",
            self.source,
            self.errors.len(),
            details
        )
    }
}

impl StructuredLog for RecipeValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            source = self.source,
            error_count = self.errors.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            source = self.source,
            error_count = self.errors.len(),
        )
    }
}
