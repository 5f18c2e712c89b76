// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::check_batch_count;
use crate::errors::TransformError;
use crate::traits::{Generator, RandomnessClass};

fn default_max() -> i64 {
    100
}

fn default_min() -> i64 {
    1
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RandomNumberConfig {
    #[serde(default = "default_min")]
    pub min: i64,
    /// Inclusive
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default = "default_count")]
    pub count: usize,
    /// No value appears twice in a batch
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub sorted: bool,
}

impl Default for RandomNumberConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            count: default_count(),
            unique: false,
            sorted: false,
        }
    }
}

pub struct RandomNumberGenerator {
    config: RandomNumberConfig,
}

impl RandomNumberGenerator {
    pub fn new(config: RandomNumberConfig) -> Self {
        Self { config }
    }

    fn validate(&self) -> Result<(), TransformError> {
        let RandomNumberConfig {
            min, max, count, unique, ..
        } = self.config;
        check_batch_count(count)?;
        if min > max {
            return Err(TransformError::invalid_options("min cannot exceed max"));
        }
        let span = (max as i128 - min as i128 + 1) as u128;
        if unique && (count as u128) > span {
            return Err(TransformError::invalid_options(format!(
                "cannot draw {} unique values from a range of {}",
                count, span
            )));
        }
        Ok(())
    }
}

impl Generator for RandomNumberGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, TransformError> {
        self.validate()?;
        let RandomNumberConfig {
            min, max, count, unique, sorted,
        } = self.config;

        let mut values: Vec<i64> = if !unique {
            (0..count).map(|_| rng.random_range(min..=max)).collect()
        } else if (max as i128 - min as i128) < (count as i128) * 4 {
            // Dense request: shuffle the whole range and take a prefix.
            let mut pool: Vec<i64> = (min..=max).collect();
            pool.shuffle(rng);
            pool.truncate(count);
            pool
        } else {
            let mut seen = HashSet::with_capacity(count);
            let mut picked = Vec::with_capacity(count);
            while picked.len() < count {
                let value = rng.random_range(min..=max);
                if seen.insert(value) {
                    picked.push(value);
                }
            }
            picked
        };

        if sorted {
            values.sort_unstable();
        }
        Ok(values.iter().map(i64::to_string).collect())
    }

    fn name(&self) -> &'static str {
        "random_number"
    }

    fn randomness(&self) -> RandomnessClass {
        RandomnessClass::NonCryptographic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn generate(config: RandomNumberConfig) -> Result<Vec<i64>, TransformError> {
        let mut rng = SmallRng::seed_from_u64(42);
        RandomNumberGenerator::new(config)
            .generate(&mut rng)
            .map(|batch| batch.iter().map(|v| v.parse().unwrap()).collect())
    }

    #[test]
    fn test_values_stay_in_range() {
        let values = generate(RandomNumberConfig {
            min: -5,
            max: 5,
            count: 200,
            ..RandomNumberConfig::default()
        })
        .unwrap();
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn test_unique_covers_exact_range() {
        let mut values = generate(RandomNumberConfig {
            min: 1,
            max: 10,
            count: 10,
            unique: true,
            ..RandomNumberConfig::default()
        })
        .unwrap();
        values.sort_unstable();
        assert_eq!(values, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_unique_sparse_and_sorted() {
        let values = generate(RandomNumberConfig {
            min: 0,
            max: 1_000_000,
            count: 50,
            unique: true,
            sorted: true,
        })
        .unwrap();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_full_i64_range_does_not_overflow() {
        let values = generate(RandomNumberConfig {
            min: i64::MIN,
            max: i64::MAX,
            count: 3,
            unique: true,
            ..RandomNumberConfig::default()
        })
        .unwrap();
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_invalid_options() {
        let test_cases = vec![
            RandomNumberConfig { min: 10, max: 1, ..RandomNumberConfig::default() },
            RandomNumberConfig { count: 0, ..RandomNumberConfig::default() },
            RandomNumberConfig { count: 1001, ..RandomNumberConfig::default() },
            RandomNumberConfig { min: 1, max: 3, count: 4, unique: true, sorted: false },
        ];

        for config in test_cases {
            assert!(
                matches!(generate(config.clone()), Err(TransformError::InvalidOptions(_))),
                "{:?}",
                config
            );
        }
    }
}
