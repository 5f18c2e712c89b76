// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::errors::TransformResult;
use crate::traits::Transform;

/// Words kept lowercase by title case unless they open the text
const TITLE_SMALL_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "in", "on", "at", "to", "for", "of", "with",
    "by", "as", "via",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    #[default]
    Upper,
    Lower,
    Proper,
    Title,
    Sentence,
    Alternating,
    Inverse,
}

impl CaseType {
    fn label(self) -> &'static str {
        match self {
            CaseType::Upper => "upper",
            CaseType::Lower => "lower",
            CaseType::Proper => "proper",
            CaseType::Title => "title",
            CaseType::Sentence => "sentence",
            CaseType::Alternating => "alternating",
            CaseType::Inverse => "inverse",
        }
    }
}

/// Configuration for the Change Text Case tool
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeTextCaseConfig {
    #[serde(default)]
    pub case_type: CaseType,
}

/// Change Text Case tool - converts text to different cases
pub struct ChangeTextCase {
    config: ChangeTextCaseConfig,
}

impl ChangeTextCase {
    pub fn new(config: ChangeTextCaseConfig) -> Self {
        Self { config }
    }

    pub fn with_case(case_type: CaseType) -> Self {
        Self::new(ChangeTextCaseConfig { case_type })
    }

    pub fn upper() -> Self {
        Self::with_case(CaseType::Upper)
    }

    pub fn lower() -> Self {
        Self::with_case(CaseType::Lower)
    }

    pub fn proper() -> Self {
        Self::with_case(CaseType::Proper)
    }

    pub fn title() -> Self {
        Self::with_case(CaseType::Title)
    }
}

impl Transform for ChangeTextCase {
    fn apply(&self, input: &str) -> TransformResult {
        let result = match self.config.case_type {
            CaseType::Upper => input.to_uppercase(),
            CaseType::Lower => input.to_lowercase(),
            CaseType::Proper => map_words(input, |_, word| capitalize(word)),
            CaseType::Title => map_words(input, |index, word| {
                let lower_word = word.to_lowercase();
                if index > 0 && TITLE_SMALL_WORDS.contains(&lower_word.as_str()) {
                    lower_word
                } else {
                    capitalize(word)
                }
            }),
            CaseType::Sentence => sentence_case(input),
            CaseType::Alternating => alternating_case(input),
            CaseType::Inverse => inverse_case(input),
        };

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "change_text_case"
    }

    fn download_name(&self) -> String {
        format!("{}-case.txt", self.config.case_type.label())
    }
}

/// Rewrites each whitespace-delimited word, keeping the original whitespace.
fn map_words<F>(input: &str, mut f: F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    let mut out = String::with_capacity(input.len());
    let mut word_start: Option<usize> = None;
    let mut index = 0;

    for (pos, c) in input.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                out.push_str(&f(index, &input[start..pos]));
                index += 1;
            }
            out.push(c);
        } else if word_start.is_none() {
            word_start = Some(pos);
        }
    }
    if let Some(start) = word_start {
        out.push_str(&f(index, &input[start..]));
    }

    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.to_lowercase().chars() {
        if capitalize_next && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
        if matches!(c, '.' | '!' | '?') {
            capitalize_next = true;
        }
    }

    out
}

fn alternating_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut letter_index = 0usize;

    for c in input.chars() {
        if c.is_alphabetic() {
            if letter_index % 2 == 0 {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            letter_index += 1;
        } else {
            out.push(c);
        }
    }

    out
}

fn inverse_case(input: &str) -> String {
    input
        .chars()
        .flat_map(|c| -> Box<dyn Iterator<Item = char>> {
            if c.is_uppercase() {
                Box::new(c.to_lowercase())
            } else if c.is_lowercase() {
                Box::new(c.to_uppercase())
            } else {
                Box::new(std::iter::once(c))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_types_table_driven() {
        let test_cases = vec![
            (CaseType::Upper, "hello World", "HELLO WORLD"),
            (CaseType::Lower, "HeLLo World", "hello world"),
            (CaseType::Proper, "hello wORLD", "Hello World"),
            (CaseType::Title, "the lord of the rings", "The Lord of the Rings"),
            (CaseType::Sentence, "hello THERE. how are you? fine", "Hello there. How are you? Fine"),
            (CaseType::Alternating, "hello world", "hElLo WoRlD"),
            (CaseType::Inverse, "Hello World", "hELLO wORLD"),
        ];

        for (case_type, input, expected) in test_cases {
            let tool = ChangeTextCase::with_case(case_type);
            assert_eq!(tool.apply(input).unwrap(), expected, "case {:?}", case_type);
        }
    }

    #[test]
    fn test_proper_case_keeps_whitespace_layout() {
        let tool = ChangeTextCase::proper();
        assert_eq!(tool.apply("  one\ttwo\nthree ").unwrap(), "  One\tTwo\nThree ");
    }

    #[test]
    fn test_upper_and_lower_are_idempotent() {
        let test_cases = vec![
            ("upper", ChangeTextCase::upper()),
            ("lower", ChangeTextCase::lower()),
        ];

        for (label, tool) in test_cases {
            for input in ["straße", "mixed Case 123", "ǆ digraph", "", "ÉCOLE", "ΣΊΣΥΦΟΣ"] {
                let once = tool.apply(input).unwrap();
                let twice = tool.apply(&once).unwrap();
                assert_eq!(once, twice, "{} on {:?}", label, input);
            }
        }
    }

    #[test]
    fn test_empty_input_maps_to_empty_output() {
        for case_type in [
            CaseType::Upper,
            CaseType::Lower,
            CaseType::Proper,
            CaseType::Title,
            CaseType::Sentence,
            CaseType::Alternating,
            CaseType::Inverse,
        ] {
            assert_eq!(ChangeTextCase::with_case(case_type).apply("").unwrap(), "");
        }
    }

    #[test]
    fn test_download_name_reflects_case() {
        assert_eq!(ChangeTextCase::title().download_name(), "title-case.txt");
    }
}
