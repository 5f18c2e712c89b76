// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use crate::errors::{TransformError, TransformResult};
use crate::stats::TextStats;
use crate::traits::{ToolIntent, Transform};

/// Text Stats analyzer - counts characters, words, lines and bytes
pub struct TextStatsAnalyzer;

impl TextStatsAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextStatsAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TextStatsAnalyzer {
    fn apply(&self, input: &str) -> TransformResult {
        if input.is_empty() {
            return Ok(String::new());
        }
        serde_json::to_string(&TextStats::of(input))
            .map_err(|e| TransformError::malformed("json", e.to_string()))
    }

    fn name(&self) -> &'static str {
        "text_stats"
    }

    fn declared_intent(&self) -> ToolIntent {
        ToolIntent::Analyze
    }

    fn metadata(&self, input: &str) -> BTreeMap<String, String> {
        let stats = TextStats::of(input);
        BTreeMap::from([
            ("char_count".to_string(), stats.chars.to_string()),
            ("word_count".to_string(), stats.words.to_string()),
            ("line_count".to_string(), stats.lines.to_string()),
            ("byte_count".to_string(), stats.bytes.to_string()),
        ])
    }

    fn download_name(&self) -> String {
        "text-stats.json".to_string()
    }
}
