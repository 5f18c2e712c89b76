// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rand::RngCore;
use serde::Serialize;

use crate::errors::TransformError;

/// Quality of randomness a generator requires.
///
/// Only `Cryptographic` generators may be used for secrets. Values produced
/// by `NonCryptographic` generators are predictable and must not be used as
/// passwords, tokens or keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomnessClass {
    Cryptographic,
    NonCryptographic,
}

/// Produces one fixed-size batch of random values per call.
///
/// The caller supplies the random source. `generators::generate_batch`
/// picks the source matching `randomness()`; passing a non-cryptographic
/// source to a `Cryptographic` generator is the caller's responsibility.
pub trait Generator: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, TransformError>;

    fn name(&self) -> &'static str;

    fn randomness(&self) -> RandomnessClass;
}
