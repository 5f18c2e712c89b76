// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Builder;

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
pub struct UuidConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub uppercase: bool,
    #[serde(default = "enabled")]
    pub hyphens: bool,
}

impl Default for UuidConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            uppercase: false,
            hyphens: true,
        }
    }
}

/// Version 4 UUIDs built from the supplied RNG's bytes.
///
/// Identifiers only: with the fast RNG these are guessable.
pub struct UuidGenerator {
    config: UuidConfig,
}

impl UuidGenerator {
    pub fn new(config: UuidConfig) -> Self {
        Self { config }
    }

    fn render(&self, bytes: [u8; 16]) -> String {
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        let text = if self.config.hyphens {
            uuid.hyphenated().to_string()
        } else {
            uuid.simple().to_string()
        };
        if self.config.uppercase {
            text.to_uppercase()
        } else {
            text
        }
    }
}

impl Generator for UuidGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, TransformError> {
        check_batch_count(self.config.count)?;
        Ok((0..self.config.count)
            .map(|_| {
                let mut bytes = [0u8; 16];
                rng.fill_bytes(&mut bytes);
                self.render(bytes)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "uuid"
    }

    fn randomness(&self) -> RandomnessClass {
        RandomnessClass::NonCryptographic
    }
}
