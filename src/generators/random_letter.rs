// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::check_batch_count;
use crate::errors::TransformError;
use crate::traits::{Generator, RandomnessClass};

fn default_count() -> usize {
    1
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RandomLetterConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "enabled")]
    pub uppercase: bool,
    #[serde(default)]
    pub lowercase: bool,
}

impl Default for RandomLetterConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            uppercase: true,
            lowercase: false,
        }
    }
}

/// Single ASCII letters drawn uniformly from the enabled cases.
pub struct RandomLetterGenerator {
    config: RandomLetterConfig,
}

impl RandomLetterGenerator {
    pub fn new(config: RandomLetterConfig) -> Self {
        Self { config }
    }

    fn alphabet(&self) -> Vec<char> {
        let mut letters = Vec::with_capacity(52);
        if self.config.uppercase {
            letters.extend('A'..='Z');
        }
        if self.config.lowercase {
            letters.extend('a'..='z');
        }
        letters
    }
}

impl Generator for RandomLetterGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, TransformError> {
        check_batch_count(self.config.count)?;
        let letters = self.alphabet();
        if letters.is_empty() {
            return Err(TransformError::invalid_options(
                "enable uppercase, lowercase or both",
            ));
        }

        Ok((0..self.config.count)
            .map(|_| letters[rng.random_range(0..letters.len())].to_string())
            .collect())
    }

    fn name(&self) -> &'static str {
        "random_letter"
    }

    fn randomness(&self) -> RandomnessClass {
        RandomnessClass::NonCryptographic
    }
}
