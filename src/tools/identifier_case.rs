// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Programmer-case converters (camelCase, snake_case, ...).
//!
//! Known limitation: converting back from a lowercase form cannot recover
//! acronyms. `parse_http_response` becomes `parseHttpResponse`, never
//! `parseHTTPResponse`, because nothing marks `http` as an acronym.

use serde::{Deserialize, Serialize};

use crate::errors::TransformResult;
use crate::traits::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierCase {
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
}

impl IdentifierCase {
    fn label(self) -> &'static str {
        match self {
            IdentifierCase::Camel => "camel",
            IdentifierCase::Pascal => "pascal",
            IdentifierCase::Snake => "snake",
            IdentifierCase::Kebab => "kebab",
            IdentifierCase::Constant => "constant",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifierCaseConfig {
    pub target: IdentifierCase,
    /// Keep runs of 2+ capitals (HTTP, XML) uppercase in camel and pascal
    /// output; otherwise they are capitalized like any other word
    #[serde(default)]
    pub preserve_acronyms: bool,
}

pub struct IdentifierCaseConverter {
    config: IdentifierCaseConfig,
}

impl IdentifierCaseConverter {
    pub fn new(config: IdentifierCaseConfig) -> Self {
        Self { config }
    }

    pub fn to(target: IdentifierCase) -> Self {
        Self::new(IdentifierCaseConfig {
            target,
            preserve_acronyms: false,
        })
    }
}

impl Transform for IdentifierCaseConverter {
    fn apply(&self, input: &str) -> TransformResult {
        Ok(convert_identifier(
            input,
            self.config.target,
            self.config.preserve_acronyms,
        ))
    }

    fn name(&self) -> &'static str {
        "identifier_case"
    }

    fn download_name(&self) -> String {
        format!("{}-case.txt", self.config.target.label())
    }
}

pub fn convert_identifier(input: &str, target: IdentifierCase, preserve_acronyms: bool) -> String {
    let words = split_words(input);
    let is_acronym =
        |word: &str| preserve_acronyms && word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase());

    match target {
        IdentifierCase::Snake => join_mapped(&words, "_", |w| w.to_lowercase()),
        IdentifierCase::Kebab => join_mapped(&words, "-", |w| w.to_lowercase()),
        IdentifierCase::Constant => join_mapped(&words, "_", |w| w.to_uppercase()),
        IdentifierCase::Camel | IdentifierCase::Pascal => words
            .iter()
            .enumerate()
            .map(|(i, &word)| {
                if i == 0 && target == IdentifierCase::Camel {
                    word.to_lowercase()
                } else if is_acronym(word) {
                    word.to_uppercase()
                } else {
                    capitalize(word)
                }
            })
            .collect(),
    }
}

fn join_mapped<F>(words: &[&str], separator: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    words.iter().map(|&w| f(w)).collect::<Vec<_>>().join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Splits on non-alphanumerics and on case boundaries.
///
/// A capital run stays one word and only breaks before its last letter
/// when that letter starts a lowercase word (`HTTPResponse` gives `HTTP`,
/// `Response`).
fn split_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for run in input.split(|c: char| !c.is_alphanumeric()) {
        if run.is_empty() {
            continue;
        }
        let chars: Vec<(usize, char)> = run.char_indices().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let (pos, c) = chars[i];
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|(_, n)| *n);

            let boundary = if !c.is_uppercase() {
                false
            } else if !prev.is_uppercase() {
                true
            } else {
                next.is_some_and(|n| n.is_lowercase())
            };

            if boundary {
                words.push(&run[start..pos]);
                start = pos;
            }
        }
        words.push(&run[start..]);
    }

    words
}
