// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Recipe validation.
//!
//! Checks run in order and accumulate, so a broken recipe reports every
//! problem at once:
//!
//! 1. the recipe has at least one step
//! 2. step IDs are unique
//! 3. every tool is a registered transform (generators are named separately)
//! 4. the configured input cap is inside the allowed bounds

use std::collections::HashSet;

use crate::config::consts::{MAX_INPUT_LIMIT_BYTES, MIN_INPUT_LIMIT_BYTES};
use crate::config::RecipeConfig;
use crate::errors::ValidationError;
use crate::registry::ToolFactory;

pub fn validate_recipe(recipe: &RecipeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if recipe.steps.is_empty() {
        errors.push(ValidationError::EmptyRecipe);
    }
    errors.extend(validate_unique_step_ids(recipe));
    errors.extend(validate_tools(recipe));
    errors.extend(validate_limits(recipe));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_step_ids(recipe: &RecipeConfig) -> Vec<ValidationError> {
    let mut seen_ids = HashSet::new();
    recipe
        .steps
        .iter()
        .filter(|step| !seen_ids.insert(step.id.as_str()))
        .map(|step| ValidationError::DuplicateStepId {
            step_id: step.id.clone(),
        })
        .collect()
}

fn validate_tools(recipe: &RecipeConfig) -> Vec<ValidationError> {
    recipe
        .steps
        .iter()
        .filter_map(|step| {
            if ToolFactory::is_transform_available(&step.tool) {
                None
            } else if ToolFactory::is_generator_available(&step.tool) {
                Some(ValidationError::GeneratorInRecipe {
                    step_id: step.id.clone(),
                    tool: step.tool.clone(),
                })
            } else {
                Some(ValidationError::UnknownTool {
                    step_id: step.id.clone(),
                    tool: step.tool.clone(),
                })
            }
        })
        .collect()
}

fn validate_limits(recipe: &RecipeConfig) -> Option<ValidationError> {
    let limit = recipe.limits.max_input_bytes?;
    if (MIN_INPUT_LIMIT_BYTES..=MAX_INPUT_LIMIT_BYTES).contains(&limit) {
        None
    } else {
        Some(ValidationError::InputLimitOutOfBounds {
            limit,
            min: MIN_INPUT_LIMIT_BYTES,
            max: MAX_INPUT_LIMIT_BYTES,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_recipe, RecipeFormat};

    fn recipe(yaml: &str) -> RecipeConfig {
        parse_recipe(yaml, RecipeFormat::Yaml).unwrap()
    }

    #[test]
    fn test_valid_recipe() {
        let r = recipe(
            "steps:\n  - id: a\n    tool: slugify\n  - id: b\n    tool: word_frequency\n",
        );
        assert!(validate_recipe(&r).is_ok());
    }

    #[test]
    fn test_single_problem_table_driven() {
        let test_cases = vec![
            ("steps: []\n", ValidationError::EmptyRecipe),
            (
                "steps:\n  - id: x\n    tool: reverse_text\n  - id: x\n    tool: rot13\n",
                ValidationError::DuplicateStepId {
                    step_id: "x".to_string(),
                },
            ),
            (
                "steps:\n  - id: x\n    tool: unicorn\n",
                ValidationError::UnknownTool {
                    step_id: "x".to_string(),
                    tool: "unicorn".to_string(),
                },
            ),
            (
                "steps:\n  - id: pw\n    tool: password\n",
                ValidationError::GeneratorInRecipe {
                    step_id: "pw".to_string(),
                    tool: "password".to_string(),
                },
            ),
            (
                "limits:\n  max_input_bytes: 999999999\nsteps:\n  - id: x\n    tool: rot13\n",
                ValidationError::InputLimitOutOfBounds {
                    limit: 999_999_999,
                    min: MIN_INPUT_LIMIT_BYTES,
                    max: MAX_INPUT_LIMIT_BYTES,
                },
            ),
        ];

        for (yaml, expected) in test_cases {
            assert_eq!(validate_recipe(&recipe(yaml)), Err(vec![expected]), "{}", yaml);
        }
    }

    #[test]
    fn test_limit_bounds_are_inclusive() {
        for limit in [MIN_INPUT_LIMIT_BYTES, MAX_INPUT_LIMIT_BYTES] {
            let yaml = format!(
                "limits:\n  max_input_bytes: {}\nsteps:\n  - id: x\n    tool: rot13\n",
                limit
            );
            assert!(validate_recipe(&recipe(&yaml)).is_ok());
        }
    }
}
