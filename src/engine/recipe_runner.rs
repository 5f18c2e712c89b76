// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::time::Instant;

use crate::config::RecipeConfig;
use crate::errors::{ConfigError, ExecutionError};
use crate::observability::messages::recipe::{
    RecipeCompleted, RecipeStarted, StepCompleted, StepFailed,
};
use crate::observability::messages::StructuredLog;
use crate::registry::ToolFactory;
use crate::session::check_input_size;
use crate::stats::{self, TransformStats};
use crate::traits::{ToolIntent, Transform};

/// Metadata key holding whole-run input/output statistics. A step whose
/// id is `recipe` keeps its own entry instead.
pub const RUN_METADATA_KEY: &str = "recipe";

const UNNAMED_RECIPE: &str = "unnamed";

/// Result of a successful recipe run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeOutcome {
    /// Payload after the last `Transform` step
    pub output: String,
    /// Findings keyed by step id, then by metadata key
    pub metadata: BTreeMap<String, BTreeMap<String, String>>,
    pub steps_executed: usize,
}

impl RecipeOutcome {
    pub fn metadata_for(&self, step_id: &str) -> Option<&BTreeMap<String, String>> {
        self.metadata.get(step_id)
    }
}

/// Runs a validated recipe as a linear chain.
///
/// The runner keeps a single canonical payload. `Transform` steps replace
/// it; `Analyze` steps read it and contribute metadata under their step id
/// while leaving it untouched. The first failing step stops the run.
pub struct RecipeRunner {
    name: String,
    steps: Vec<(String, Box<dyn Transform>)>,
    max_input_bytes: usize,
}

impl RecipeRunner {
    pub fn new(name: impl Into<String>, max_input_bytes: usize) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            max_input_bytes,
        }
    }

    /// Append a step. Used by `from_config` and handy for building chains
    /// in code.
    pub fn with_step(mut self, id: impl Into<String>, tool: Box<dyn Transform>) -> Self {
        self.steps.push((id.into(), tool));
        self
    }

    /// Build every step's tool from the registry.
    ///
    /// The recipe should already have passed `validate_recipe`; an unknown
    /// tool or bad options still surface here as `ConfigError`.
    pub fn from_config(recipe: &RecipeConfig) -> Result<Self, ConfigError> {
        let name = recipe.name.as_deref().unwrap_or(UNNAMED_RECIPE);
        let mut runner = Self::new(name, recipe.limits.get_max_input_bytes());
        for step in &recipe.steps {
            let tool = ToolFactory::create_transform(&step.tool, &step.options)?;
            runner = runner.with_step(step.id.clone(), tool);
        }
        Ok(runner)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    pub fn run(&self, input: &str) -> Result<RecipeOutcome, ExecutionError> {
        check_input_size(input, self.max_input_bytes).map_err(ExecutionError::InputRejected)?;

        let started = Instant::now();
        let start = RecipeStarted {
            recipe: &self.name,
            step_count: self.steps.len(),
            input_size: input.len(),
        };
        start.log();
        let _guard = start.span("recipe_run").entered();

        let mut payload = input.to_string();
        let mut metadata = BTreeMap::new();

        for (step_id, tool) in &self.steps {
            let step_started = Instant::now();
            let intent = tool.declared_intent();

            match tool.apply(&payload) {
                Ok(output) => {
                    match intent {
                        ToolIntent::Analyze => {
                            metadata.insert(step_id.clone(), tool.metadata(&payload));
                        }
                        ToolIntent::Transform | ToolIntent::Generate => payload = output,
                    }
                    StepCompleted {
                        step_id,
                        tool: tool.name(),
                        intent,
                        output_size: payload.len(),
                        duration: step_started.elapsed(),
                    }
                    .log();
                }
                Err(source) => {
                    StepFailed {
                        step_id,
                        tool: tool.name(),
                        error: &source,
                    }
                    .log();
                    return Err(ExecutionError::StepFailed {
                        step_id: step_id.clone(),
                        tool: tool.name(),
                        source,
                    });
                }
            }
        }

        let run_stats: TransformStats = stats::compute(input, &payload);
        metadata
            .entry(RUN_METADATA_KEY.to_string())
            .or_insert_with(|| run_stats.to_metadata());

        RecipeCompleted {
            recipe: &self.name,
            steps_executed: self.steps.len(),
            output_size: payload.len(),
            duration: started.elapsed(),
        }
        .log();

        Ok(RecipeOutcome {
            output: payload,
            metadata,
            steps_executed: self.steps.len(),
        })
    }
}
