// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_recipe, load_recipe, parse_recipe, LimitsConfig, RecipeConfig, RecipeFormat,
    StepConfig,
};
pub use validation::validate_recipe;
