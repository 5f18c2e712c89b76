// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during recipe validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The recipe declares no steps
    #[error("Recipe has no steps")]
    EmptyRecipe,

    /// Two steps share the same ID
    #[error("Duplicate step ID: '{step_id}'")]
    DuplicateStepId { step_id: String },

    /// A step names a tool that is not registered
    #[error("Step '{step_id}' references unknown tool '{tool}'")]
    UnknownTool { step_id: String, tool: String },

    /// A step names a generator; generators do not consume input
    #[error("Step '{step_id}' uses generator '{tool}', which cannot be chained")]
    GeneratorInRecipe { step_id: String, tool: String },

    /// The configured input cap is outside the allowed bounds
    #[error("Input limit {limit} bytes is outside the allowed range [{min}, {max}]")]
    InputLimitOutOfBounds { limit: usize, min: usize, max: usize },
}

/// Errors raised while loading recipes or instantiating tools from options
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read recipe '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML recipe: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML recipe: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported recipe format '{0}', expected .yaml, .yml or .toml")]
    UnsupportedFormat(String),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Invalid options for tool '{tool}': {reason}")]
    InvalidOptions { tool: String, reason: String },

    #[error("Recipe validation failed:\n{}", join_validation_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
