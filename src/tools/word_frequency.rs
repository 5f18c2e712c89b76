// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::errors::{TransformError, TransformResult};
use crate::traits::{ToolIntent, Transform};

/// Word Frequency Analyzer - histogram of normalized words
///
/// Words are whitespace-separated tokens with non-alphanumerics removed,
/// lowercased. Output is a JSON object ordered by count descending, then
/// word ascending.
pub struct WordFrequencyAnalyzer;

impl WordFrequencyAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordFrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts normalized words, most frequent first.
pub fn word_frequencies(input: &str) -> Vec<(String, usize)> {
    let mut word_counts: HashMap<String, usize> = HashMap::new();

    for word in input.split_whitespace() {
        let normalized_word = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        if !normalized_word.is_empty() {
            *word_counts.entry(normalized_word).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = word_counts.into_iter().collect();
    ranked.sort_by(|(a_word, a_count), (b_word, b_count)| {
        b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
    });
    ranked
}

impl Transform for WordFrequencyAnalyzer {
    fn apply(&self, input: &str) -> TransformResult {
        let ranked = word_frequencies(input);
        if ranked.is_empty() {
            return Ok(String::new());
        }

        let histogram: Map<String, Value> = ranked
            .into_iter()
            .map(|(word, count)| (word, Value::from(count)))
            .collect();
        serde_json::to_string_pretty(&Value::Object(histogram))
            .map_err(|e| TransformError::malformed("json", e.to_string()))
    }

    fn name(&self) -> &'static str {
        "word_frequency"
    }

    fn declared_intent(&self) -> ToolIntent {
        ToolIntent::Analyze
    }

    fn metadata(&self, input: &str) -> BTreeMap<String, String> {
        let ranked = word_frequencies(input);
        let mut analysis_metadata = BTreeMap::new();
        analysis_metadata.insert("total_unique_words".to_string(), ranked.len().to_string());
        for (word, count) in ranked {
            analysis_metadata.insert(format!("word_freq_{}", word), count.to_string());
        }
        analysis_metadata
    }

    fn download_name(&self) -> String {
        "word-frequency.json".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_order() {
        let ranked = word_frequencies("b a c b. A, b c");
        assert_eq!(
            ranked,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_output_is_ordered_json() {
        let out = WordFrequencyAnalyzer::new().apply("the cat and the hat").unwrap();
        let keys: Vec<&str> = out
            .lines()
            .filter_map(|line| line.trim().split('"').nth(1))
            .collect();
        assert_eq!(keys, vec!["the", "and", "cat", "hat"]);

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["the"], 2);
    }

    #[test]
    fn test_metadata_and_intent() {
        let analyzer = WordFrequencyAnalyzer::new();
        let metadata = analyzer.metadata("Hello hello world");
        assert_eq!(metadata["total_unique_words"], "2");
        assert_eq!(metadata["word_freq_hello"], "2");
        assert_eq!(analyzer.declared_intent(), ToolIntent::Analyze);
    }

    #[test]
    fn test_empty_and_punctuation_only_input() {
        let analyzer = WordFrequencyAnalyzer::new();
        assert_eq!(analyzer.apply("").unwrap(), "");
        assert_eq!(analyzer.apply("-- !! ??").unwrap(), "");
    }
}
