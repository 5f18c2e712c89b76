// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Recipe execution.
//!
//! A recipe is a linear chain of registered transforms sharing one
//! canonical payload. See [`RecipeRunner`].

pub mod recipe_runner;


pub use recipe_runner::{RecipeOutcome, RecipeRunner, RUN_METADATA_KEY};
