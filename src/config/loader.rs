// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::consts::{DEFAULT_MAX_INPUT_BYTES, MAX_INPUT_LIMIT_BYTES, MIN_INPUT_LIMIT_BYTES};
use crate::errors::ConfigError;
use crate::observability::messages::validation::{RecipeLoaded, RecipeValidationFailed};
use crate::observability::messages::StructuredLog;
use crate::registry::ToolOptions;

/// A recipe: an ordered chain of tools applied to one input.
///
/// Each step's output is the next step's input. `Analyze` steps leave the
/// text untouched and contribute metadata instead.
///
/// # Example
/// ```yaml
/// name: shout-and-encode
/// limits:
///   max_input_bytes: 65536
/// steps:
///   - id: upper
///     tool: change_text_case_upper
///   - id: shift
///     tool: caesar_encode
///     options:
///       shift: 5
///   - id: stats
///     tool: text_stats
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub limits: LimitsConfig,
    pub steps: Vec<StepConfig>,
}

/// Resource limits applied to a recipe run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    pub max_input_bytes: Option<usize>,
}

impl LimitsConfig {
    /// Get the input cap, using the built-in default if not configured.
    pub fn get_max_input_bytes(&self) -> usize {
        self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES)
    }

    /// Clamp a requested cap to `[MIN_INPUT_LIMIT_BYTES, MAX_INPUT_LIMIT_BYTES]`.
    ///
    /// Validation rejects out-of-range values in recipe files; this is for
    /// callers that take a cap from elsewhere, such as the command line.
    pub fn clamp(requested: usize) -> usize {
        requested.clamp(MIN_INPUT_LIMIT_BYTES, MAX_INPUT_LIMIT_BYTES)
    }
}

/// One step in a recipe.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    pub id: String,
    pub tool: String,
    #[serde(default)]
    pub options: ToolOptions,
}

/// On-disk recipe syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeFormat {
    Yaml,
    Toml,
}

impl RecipeFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(RecipeFormat::Yaml),
            "toml" => Ok(RecipeFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse recipe text in the given format.
pub fn parse_recipe(content: &str, format: RecipeFormat) -> Result<RecipeConfig, ConfigError> {
    let recipe = match format {
        RecipeFormat::Yaml => serde_yaml::from_str(content)?,
        RecipeFormat::Toml => toml::from_str(content)?,
    };
    Ok(recipe)
}

/// Load a recipe from a `.yaml`, `.yml` or `.toml` file.
pub fn load_recipe<P: AsRef<Path>>(path: P) -> Result<RecipeConfig, ConfigError> {
    let path = path.as_ref();
    let format = RecipeFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_recipe(&content, format)
}

/// Load a recipe and check it can be run.
///
/// All validation problems are reported together in
/// `ConfigError::Validation`.
pub fn load_and_validate_recipe<P: AsRef<Path>>(path: P) -> Result<RecipeConfig, ConfigError> {
    let path = path.as_ref();
    let recipe = load_recipe(path)?;

    if let Err(validation_errors) = crate::config::validate_recipe(&recipe) {
        RecipeValidationFailed {
            source: &path.display().to_string(),
            errors: &validation_errors,
        }
        .log();
        return Err(ConfigError::Validation(validation_errors));
    }

    RecipeLoaded {
        source: &path.display().to_string(),
        name: recipe.name.as_deref(),
        step_count: recipe.steps.len(),
    }
    .log();

    Ok(recipe)
}
