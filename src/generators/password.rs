// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::check_count;
use crate::config::consts::{MAX_PASSWORD_COUNT, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::errors::TransformError;
use crate::traits::{Generator, RandomnessClass};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/~";
/// Glyphs easily confused with one another in common fonts
const AMBIGUOUS: &str = "Il1O0o|";

fn default_length() -> usize {
    16
}

fn default_count() -> usize {
    1
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordConfig {
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "enabled")]
    pub uppercase: bool,
    #[serde(default = "enabled")]
    pub lowercase: bool,
    #[serde(default = "enabled")]
    pub digits: bool,
    #[serde(default = "enabled")]
    pub symbols: bool,
    #[serde(default)]
    pub exclude_ambiguous: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            count: default_count(),
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

/// Password generator. Declares `Cryptographic` randomness, so
/// `generate_batch` always feeds it the thread CSPRNG.
pub struct PasswordGenerator {
    config: PasswordConfig,
}

impl PasswordGenerator {
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    fn character_classes(&self) -> Vec<Vec<char>> {
        let toggles = [
            (self.config.uppercase, UPPERCASE),
            (self.config.lowercase, LOWERCASE),
            (self.config.digits, DIGITS),
            (self.config.symbols, SYMBOLS),
        ];

        toggles
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, set)| {
                set.chars()
                    .filter(|c| !(self.config.exclude_ambiguous && AMBIGUOUS.contains(*c)))
                    .collect()
            })
            .collect()
    }

    fn validate(&self) -> Result<Vec<Vec<char>>, TransformError> {
        let length = self.config.length;
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(TransformError::invalid_options(format!(
                "length must be between {} and {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            )));
        }
        check_count(self.config.count, MAX_PASSWORD_COUNT)?;

        let classes = self.character_classes();
        if classes.is_empty() {
            return Err(TransformError::invalid_options(
                "at least one character class must be enabled",
            ));
        }
        Ok(classes)
    }

    fn one_password(&self, classes: &[Vec<char>], rng: &mut dyn RngCore) -> String {
        let pool: Vec<char> = classes.iter().flatten().copied().collect();
        let mut chars = Vec::with_capacity(self.config.length);

        // One from each enabled class first; length >= 4 covers all four.
        for class in classes {
            chars.push(class[rng.random_range(0..class.len())]);
        }
        while chars.len() < self.config.length {
            chars.push(pool[rng.random_range(0..pool.len())]);
        }
        chars.shuffle(rng);
        chars.into_iter().collect()
    }
}

impl Generator for PasswordGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, TransformError> {
        let classes = self.validate()?;
        Ok((0..self.config.count)
            .map(|_| self.one_password(&classes, rng))
            .collect())
    }

    fn name(&self) -> &'static str {
        "password"
    }

    fn randomness(&self) -> RandomnessClass {
        RandomnessClass::Cryptographic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_every_enabled_class_is_present() {
        let generator = PasswordGenerator::new(PasswordConfig {
            length: 4,
            count: 50,
            ..PasswordConfig::default()
        });
        let batch = generator.generate(&mut seeded()).unwrap();
        assert_eq!(batch.len(), 50);

        for password in batch {
            assert_eq!(password.chars().count(), 4);
            assert!(password.chars().any(|c| c.is_ascii_uppercase()), "{}", password);
            assert!(password.chars().any(|c| c.is_ascii_lowercase()), "{}", password);
            assert!(password.chars().any(|c| c.is_ascii_digit()), "{}", password);
            assert!(password.chars().any(|c| SYMBOLS.contains(c)), "{}", password);
        }
    }

    #[test]
    fn test_exclude_ambiguous_and_single_class() {
        let generator = PasswordGenerator::new(PasswordConfig {
            length: 64,
            count: 20,
            uppercase: false,
            lowercase: true,
            digits: true,
            symbols: false,
            exclude_ambiguous: true,
        });
        for password in generator.generate(&mut seeded()).unwrap() {
            assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
            assert!(!password.chars().any(|c| AMBIGUOUS.contains(c)), "{}", password);
        }
    }

    #[test]
    fn test_invalid_options() {
        let test_cases = vec![
            PasswordConfig { length: 3, ..PasswordConfig::default() },
            PasswordConfig { length: 257, ..PasswordConfig::default() },
            PasswordConfig { count: 0, ..PasswordConfig::default() },
            PasswordConfig { count: 101, ..PasswordConfig::default() },
            PasswordConfig {
                uppercase: false,
                lowercase: false,
                digits: false,
                symbols: false,
                ..PasswordConfig::default()
            },
        ];

        for config in test_cases {
            let result = PasswordGenerator::new(config.clone()).generate(&mut seeded());
            assert!(
                matches!(result, Err(TransformError::InvalidOptions(_))),
                "{:?}",
                config
            );
        }
    }

    #[test]
    fn test_is_cryptographic() {
        let generator = PasswordGenerator::new(PasswordConfig::default());
        assert_eq!(generator.randomness(), RandomnessClass::Cryptographic);
    }
}
