// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::TransformResult;
use crate::traits::Transform;

/// Reverse Text tool - reverses the input by Unicode scalar value
pub struct ReverseText;

impl ReverseText {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReverseText {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for ReverseText {
    fn apply(&self, input: &str) -> TransformResult {
        Ok(input.chars().rev().collect())
    }

    fn name(&self) -> &'static str {
        "reverse_text"
    }

    fn download_name(&self) -> String {
        "reversed.txt".to_string()
    }
}
