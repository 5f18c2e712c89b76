// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Random value generators.
//!
//! Every generator draws from a caller-supplied `RngCore`. The entry points
//! here pick the source: `generate_secure` uses the OS-seeded thread RNG
//! (a CSPRNG), `generate_fast` a `SmallRng` seeded from it. `generate_batch`
//! chooses between them from the generator's `RandomnessClass`.

pub mod password;
pub mod random_choice;
pub mod random_ip;
pub mod random_letter;
pub mod random_number;
pub mod uuid_generator;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::consts::MAX_BATCH_SIZE;
use crate::errors::TransformError;
use crate::observability::messages::generator::{BatchGenerated, GenerationFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::{Generator, RandomnessClass};

pub use password::{PasswordConfig, PasswordGenerator};
pub use random_choice::{RandomChoiceConfig, RandomChoiceGenerator};
pub use random_ip::{IpVersion, RandomIpConfig, RandomIpGenerator};
pub use random_letter::{RandomLetterConfig, RandomLetterGenerator};
pub use random_number::{RandomNumberConfig, RandomNumberGenerator};
pub use uuid_generator::{UuidConfig, UuidGenerator};

/// Runs a generator against the thread-local CSPRNG.
pub fn generate_secure(generator: &dyn Generator) -> Result<Vec<String>, TransformError> {
    let mut rng = rand::rng();
    generator.generate(&mut rng)
}

/// Runs a generator against a fast, non-cryptographic RNG.
///
/// Never use this for passwords or tokens.
pub fn generate_fast(generator: &dyn Generator) -> Result<Vec<String>, TransformError> {
    let mut rng = SmallRng::from_rng(&mut rand::rng());
    generator.generate(&mut rng)
}

/// Produces one batch using the random source the generator declares.
pub fn generate_batch(generator: &dyn Generator) -> Result<Vec<String>, TransformError> {
    let randomness = generator.randomness();
    let result = match randomness {
        RandomnessClass::Cryptographic => generate_secure(generator),
        RandomnessClass::NonCryptographic => generate_fast(generator),
    };

    match &result {
        Ok(batch) => BatchGenerated {
            generator: generator.name(),
            randomness,
            count: batch.len(),
        }
        .log(),
        Err(error) => GenerationFailed {
            generator: generator.name(),
            error,
        }
        .log(),
    }
    result
}

pub(crate) fn check_count(count: usize, max: usize) -> Result<(), TransformError> {
    if count == 0 {
        return Err(TransformError::invalid_options("count must be greater than zero"));
    }
    if count > max {
        return Err(TransformError::invalid_options(format!(
            "count must be {} or less",
            max
        )));
    }
    Ok(())
}

pub(crate) fn check_batch_count(count: usize) -> Result<(), TransformError> {
    check_count(count, MAX_BATCH_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_uses_declared_randomness() {
        let password = PasswordGenerator::new(PasswordConfig::default());
        assert_eq!(password.randomness(), RandomnessClass::Cryptographic);
        let batch = generate_batch(&password).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].chars().count(), 16);

        let numbers = RandomNumberGenerator::new(RandomNumberConfig {
            count: 5,
            ..RandomNumberConfig::default()
        });
        assert_eq!(numbers.randomness(), RandomnessClass::NonCryptographic);
        assert_eq!(generate_batch(&numbers).unwrap().len(), 5);
    }

    #[test]
    fn test_batches_are_replaced_not_appended() {
        let letters = RandomLetterGenerator::new(RandomLetterConfig {
            count: 3,
            ..RandomLetterConfig::default()
        });
        let first = generate_fast(&letters).unwrap();
        let second = generate_fast(&letters).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn test_count_bounds() {
        assert!(check_batch_count(1).is_ok());
        assert!(check_batch_count(MAX_BATCH_SIZE).is_ok());
        assert!(matches!(check_batch_count(0), Err(TransformError::InvalidOptions(_))));
        assert!(matches!(
            check_batch_count(MAX_BATCH_SIZE + 1),
            Err(TransformError::InvalidOptions(_))
        ));
    }
}
