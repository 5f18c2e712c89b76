// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::check_batch_count;
use crate::errors::TransformError;
use crate::traits::{Generator, RandomnessClass};

/// Choices given either as a list or as one comma/newline separated string.
///
/// Numbers and booleans are accepted wherever text is, so `choices: 7` or
/// `choices: [1, 2, 3]` read as their text form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged, from = "RawChoices")]
pub enum Choices {
    List(Vec<String>),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoices {
    List(Vec<Scalar>),
    One(Scalar),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(x) => x.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

impl From<RawChoices> for Choices {
    fn from(raw: RawChoices) -> Self {
        match raw {
            RawChoices::List(items) => Choices::List(items.into_iter().map(Scalar::into_text).collect()),
            RawChoices::One(item) => Choices::Text(item.into_text()),
        }
    }
}

impl Choices {
    /// Trimmed, non-empty entries in their given order.
    pub fn entries(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Choices::List(items) => items.iter().map(String::as_str).collect(),
            Choices::Text(text) => text.split([',', '\n']).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RandomChoiceConfig {
    pub choices: Choices,
    #[serde(default = "default_count")]
    pub count: usize,
    /// Draw without replacement
    #[serde(default)]
    pub unique: bool,
}

pub struct RandomChoiceGenerator {
    config: RandomChoiceConfig,
}

impl RandomChoiceGenerator {
    pub fn new(config: RandomChoiceConfig) -> Self {
        Self { config }
    }
}

impl Generator for RandomChoiceGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, TransformError> {
        check_batch_count(self.config.count)?;
        let mut entries = self.config.choices.entries();
        if entries.is_empty() {
            return Err(TransformError::invalid_options("no choices given"));
        }

        if self.config.unique {
            if self.config.count > entries.len() {
                return Err(TransformError::invalid_options(format!(
                    "cannot pick {} unique entries from {} choices",
                    self.config.count,
                    entries.len()
                )));
            }
            entries.shuffle(rng);
            entries.truncate(self.config.count);
            return Ok(entries);
        }

        Ok((0..self.config.count)
            .map(|_| entries[rng.random_range(0..entries.len())].clone())
            .collect())
    }

    fn name(&self) -> &'static str {
        "random_choice"
    }

    fn randomness(&self) -> RandomnessClass {
        RandomnessClass::NonCryptographic
    }
}
