// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::TransformResult;

/// What a tool does with its input.
///
/// `Transform` tools replace the text. `Analyze` tools report on it and,
/// when chained in a recipe, pass the text through untouched while their
/// findings are attached as metadata. `Generate` tools ignore input
/// entirely and produce a batch of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolIntent {
    Transform,
    Analyze,
    Generate,
}

/// A pure text transform with its options captured at construction time.
///
/// Implementations must be total: any input string, including the empty
/// string and arbitrary Unicode, yields either an output or a typed
/// failure. Empty input maps to empty output. Implementations must not
/// read or write anything outside their arguments.
pub trait Transform: Send + Sync {
    fn apply(&self, input: &str) -> TransformResult;

    fn name(&self) -> &'static str;

    fn declared_intent(&self) -> ToolIntent {
        ToolIntent::Transform
    }

    /// Findings attached to a recipe run by `Analyze` tools.
    fn metadata(&self, _input: &str) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Default filename offered when the output is downloaded.
    fn download_name(&self) -> String {
        format!("{}.txt", self.name().replace('_', "-"))
    }
}
