// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Size statistics shown next to a tool's input and output.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    /// Unicode scalar values
    pub chars: usize,
    pub words: usize,
    /// Zero for empty text, otherwise newline count plus one
    pub lines: usize,
    pub bytes: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let lines = if text.is_empty() {
            0
        } else {
            text.matches('\n').count() + 1
        };
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
            lines,
            bytes: text.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TransformStats {
    pub input: TextStats,
    pub output: TextStats,
    /// `output.bytes / input.bytes`; `None` when the input is empty
    pub size_ratio: Option<f64>,
}

impl TransformStats {
    /// Flattens the stats into `input_chars`, `output_bytes`, ... pairs.
    pub fn to_metadata(&self) -> BTreeMap<String, String> {
        let mut metadata = BTreeMap::new();
        for (prefix, stats) in [("input", &self.input), ("output", &self.output)] {
            metadata.insert(format!("{}_chars", prefix), stats.chars.to_string());
            metadata.insert(format!("{}_words", prefix), stats.words.to_string());
            metadata.insert(format!("{}_lines", prefix), stats.lines.to_string());
            metadata.insert(format!("{}_bytes", prefix), stats.bytes.to_string());
        }
        if let Some(ratio) = self.size_ratio {
            metadata.insert("size_ratio".to_string(), format!("{:.4}", ratio));
        }
        metadata
    }
}

pub fn compute(input: &str, output: &str) -> TransformStats {
    let input = TextStats::of(input);
    let output = TextStats::of(output);
    let size_ratio = if input.bytes == 0 {
        None
    } else {
        Some(output.bytes as f64 / input.bytes as f64)
    };
    TransformStats {
        input,
        output,
        size_ratio,
    }
}
