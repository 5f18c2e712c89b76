// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::errors::TransformResult;
use crate::traits::Transform;

const ALPHABET_LEN: i64 = 26;

fn default_shift() -> i64 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaesarCipherConfig {
    #[serde(default = "default_shift")]
    pub shift: i64,
    #[serde(default)]
    pub direction: Direction,
}

impl Default for CaesarCipherConfig {
    fn default() -> Self {
        Self {
            shift: default_shift(),
            direction: Direction::Encode,
        }
    }
}

/// Caesar cipher over ASCII letters; everything else passes through.
pub struct CaesarCipher {
    config: CaesarCipherConfig,
}

impl CaesarCipher {
    pub fn new(config: CaesarCipherConfig) -> Self {
        Self { config }
    }

    pub fn encoder(shift: i64) -> Self {
        Self::new(CaesarCipherConfig {
            shift,
            direction: Direction::Encode,
        })
    }

    pub fn decoder(shift: i64) -> Self {
        Self::new(CaesarCipherConfig {
            shift,
            direction: Direction::Decode,
        })
    }

    pub fn rot13() -> Self {
        Self::encoder(13)
    }
}

impl Transform for CaesarCipher {
    fn apply(&self, input: &str) -> TransformResult {
        Ok(match self.config.direction {
            Direction::Encode => caesar_encode(input, self.config.shift),
            Direction::Decode => caesar_decode(input, self.config.shift),
        })
    }

    fn name(&self) -> &'static str {
        "caesar_cipher"
    }

    fn download_name(&self) -> String {
        format!("caesar-{}.txt", self.config.direction.past_tense())
    }
}

/// Shifts ASCII letters forward by `shift` (any integer, normalized mod 26).
pub fn caesar_encode(input: &str, shift: i64) -> String {
    shift_letters(input, shift.rem_euclid(ALPHABET_LEN) as u8)
}

/// Inverse of [`caesar_encode`]: shifts by `26 - (shift mod 26)`.
pub fn caesar_decode(input: &str, shift: i64) -> String {
    let normalized = shift.rem_euclid(ALPHABET_LEN);
    shift_letters(input, ((ALPHABET_LEN - normalized) % ALPHABET_LEN) as u8)
}

fn shift_letters(input: &str, shift: u8) -> String {
    input
        .chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a', shift),
            'A'..='Z' => rotate(c, b'A', shift),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8, shift: u8) -> char {
    let offset = (c as u8 - base + shift) % ALPHABET_LEN as u8;
    (base + offset) as char
}
