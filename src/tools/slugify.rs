// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::errors::TransformResult;
use crate::traits::Transform;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

fn default_separator() -> String {
    "-".to_string()
}

fn default_lowercase() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SlugifyConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

impl Default for SlugifyConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            lowercase: default_lowercase(),
        }
    }
}

pub struct Slugify {
    config: SlugifyConfig,
}

impl Slugify {
    pub fn new(config: SlugifyConfig) -> Self {
        Self { config }
    }
}

impl Transform for Slugify {
    fn apply(&self, input: &str) -> TransformResult {
        Ok(slugify(input, &self.config))
    }

    fn name(&self) -> &'static str {
        "slugify"
    }
}

/// Builds a URL slug.
///
/// Steps: optional lowercase, NFD, drop combining marks U+0300..=U+036F,
/// drop everything outside ASCII alphanumerics, whitespace, `-` and the
/// separator, then turn each run of whitespace/`-`/separator into a single
/// separator. Breaks at either end are dropped.
pub fn slugify(input: &str, config: &SlugifyConfig) -> String {
    let text = if config.lowercase {
        input.to_lowercase()
    } else {
        input.to_string()
    };

    let is_break = |c: char| c.is_whitespace() || c == '-' || config.separator.contains(c);

    let kept: String = text
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .filter(|c| c.is_ascii_alphanumeric() || is_break(*c))
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut pending_break = false;
    for c in kept.trim().chars() {
        if is_break(c) {
            pending_break = true;
            continue;
        }
        if pending_break && !slug.is_empty() {
            slug.push_str(&config.separator);
        }
        pending_break = false;
        slug.push(c);
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_separator(separator: &str) -> SlugifyConfig {
        SlugifyConfig {
            separator: separator.to_string(),
            ..SlugifyConfig::default()
        }
    }

    #[test]
    fn test_sentence_becomes_slug() {
        assert_eq!(
            slugify("Hello World! This is a test.", &SlugifyConfig::default()),
            "hello-world-this-is-a-test"
        );
    }

    #[test]
    fn test_diacritics_are_stripped() {
        assert_eq!(
            slugify("Crème Brûlée à la carte", &SlugifyConfig::default()),
            "creme-brulee-a-la-carte"
        );
    }

    #[test]
    fn test_repeated_separators_collapse() {
        assert_eq!(slugify("a  -  b---c", &SlugifyConfig::default()), "a-b-c");
        assert_eq!(slugify("one two", &with_separator("_")), "one_two");
        assert_eq!(slugify("one__two - three", &with_separator("_")), "one_two_three");
    }

    #[test]
    fn test_case_is_kept_when_lowercase_disabled() {
        let config = SlugifyConfig {
            lowercase: false,
            ..SlugifyConfig::default()
        };
        assert_eq!(slugify("Hello World", &config), "Hello-World");
    }

    #[test]
    fn test_edge_separators_are_trimmed() {
        let test_cases = vec![
            ("-edge-", "-", "edge"),
            ("Hello -", "-", "hello"),
            ("- Hello", "-", "hello"),
            ("Hello World -- ", "-", "hello-world"),
            ("__a b__", "_", "a_b"),
            ("!!! ---", "-", ""),
        ];

        for (input, separator, expected) in test_cases {
            assert_eq!(slugify(input, &with_separator(separator)), expected, "{:?}", input);
        }
    }

    #[test]
    fn test_output_charset_and_idempotence() {
        // Expected values are for the default `-` separator
        let test_cases = [
            ("Hello World! This is a test.", "hello-world-this-is-a-test"),
            ("  Leading and trailing  ", "leading-and-trailing"),
            ("Ünïcödé — dashes – and “quotes”", "unicode-dashes-and-quotes"),
            ("snake_case and kebab-case", "snakecase-and-kebab-case"),
            ("-edge-", "edge"),
            ("", ""),
        ];
        for separator in ["-", "_", "."] {
            let config = with_separator(separator);
            for (input, expected) in test_cases {
                let once = slugify(input, &config);
                if separator == "-" {
                    assert_eq!(once, expected, "input {:?}", input);
                }
                assert!(
                    once.chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || separator.contains(c)),
                    "unexpected char in {:?}",
                    once
                );
                assert_eq!(slugify(&once, &config), once, "input {:?}", input);
            }
        }
    }
}
