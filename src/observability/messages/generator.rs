// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for random batch generation.
//!
//! Generated values are never logged, only counts.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::errors::TransformError;
use crate::observability::messages::StructuredLog;
use crate::traits::RandomnessClass;

fn randomness_label(randomness: RandomnessClass) -> &'static str {
    match randomness {
        RandomnessClass::Cryptographic => "cryptographic",
        RandomnessClass::NonCryptographic => "non_cryptographic",
    }
}

/// A generator produced a batch.
///
/// # Log Level
/// `debug!` - Routine event
pub struct BatchGenerated<'a> {
    pub generator: &'a str,
    pub randomness: RandomnessClass,
    pub count: usize,
}

impl Display for BatchGenerated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generator '{}' produced {} values ({} randomness)",
            self.generator,
            self.count,
            randomness_label(self.randomness)
        )
    }
}

impl StructuredLog for BatchGenerated<'_> {
    fn log(&self) {
        tracing::debug!(
            generator = self.generator,
            randomness = randomness_label(self.randomness),
            count = self.count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            generator = self.generator,
            randomness = randomness_label(self.randomness),
        )
    }
}

/// A generator rejected its options.
///
/// # Log Level
/// `info!` - User-correctable
pub struct GenerationFailed<'a> {
    pub generator: &'a str,
    pub error: &'a TransformError,
}

impl Display for GenerationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Generator '{}' failed: {}", self.generator, self.error)
    }
}

impl StructuredLog for GenerationFailed<'_> {
    fn log(&self) {
        tracing::info!(
            generator = self.generator,
            error_kind = self.error.kind(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            generator = self.generator,
        )
    }
}
