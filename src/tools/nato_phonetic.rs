// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::errors::TransformResult;
use crate::traits::Transform;

/// ICAO/NATO spelling alphabet, letters then digits
pub static NATO_ALPHABET: &[(char, &str)] = &[
    ('A', "Alfa"),
    ('B', "Bravo"),
    ('C', "Charlie"),
    ('D', "Delta"),
    ('E', "Echo"),
    ('F', "Foxtrot"),
    ('G', "Golf"),
    ('H', "Hotel"),
    ('I', "India"),
    ('J', "Juliett"),
    ('K', "Kilo"),
    ('L', "Lima"),
    ('M', "Mike"),
    ('N', "November"),
    ('O', "Oscar"),
    ('P', "Papa"),
    ('Q', "Quebec"),
    ('R', "Romeo"),
    ('S', "Sierra"),
    ('T', "Tango"),
    ('U', "Uniform"),
    ('V', "Victor"),
    ('W', "Whiskey"),
    ('X', "X-ray"),
    ('Y', "Yankee"),
    ('Z', "Zulu"),
    ('0', "Zero"),
    ('1', "One"),
    ('2', "Two"),
    ('3', "Three"),
    ('4', "Four"),
    ('5', "Five"),
    ('6', "Six"),
    ('7', "Seven"),
    ('8', "Eight"),
    ('9', "Nine"),
];

/// Common alternate spellings accepted when decoding
static NATO_ALIASES: &[(&str, char)] = &[
    ("alpha", 'A'),
    ("juliet", 'J'),
    ("xray", 'X'),
    ("whisky", 'W'),
    ("niner", '9'),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NatoPhoneticConfig {
    #[serde(default)]
    pub direction: Direction,
}

pub struct NatoPhonetic {
    config: NatoPhoneticConfig,
}

impl NatoPhonetic {
    pub fn new(config: NatoPhoneticConfig) -> Self {
        Self { config }
    }

    pub fn encoder() -> Self {
        Self::new(NatoPhoneticConfig {
            direction: Direction::Encode,
        })
    }

    pub fn decoder() -> Self {
        Self::new(NatoPhoneticConfig {
            direction: Direction::Decode,
        })
    }
}

impl Transform for NatoPhonetic {
    fn apply(&self, input: &str) -> TransformResult {
        Ok(match self.config.direction {
            Direction::Encode => nato_encode(input),
            Direction::Decode => nato_decode(input),
        })
    }

    fn name(&self) -> &'static str {
        "nato_phonetic"
    }

    fn download_name(&self) -> String {
        format!("nato-{}.txt", self.config.direction.past_tense())
    }
}

fn code_word(c: char) -> Option<&'static str> {
    NATO_ALPHABET
        .iter()
        .find(|(letter, _)| *letter == c)
        .map(|(_, word)| *word)
}

fn letter_for(token: &str) -> Option<char> {
    NATO_ALPHABET
        .iter()
        .find(|(_, word)| word.eq_ignore_ascii_case(token))
        .map(|(letter, _)| *letter)
        .or_else(|| {
            NATO_ALIASES
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
                .map(|(_, letter)| *letter)
        })
}

/// Spells each letter and digit with its code word; whitespace is dropped
/// and any other character is kept as its own token.
pub fn nato_encode(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            code_word(upper)
                .map(str::to_string)
                .unwrap_or_else(|| c.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps whitespace-separated code words back to characters, ignoring case.
/// Unknown tokens are kept verbatim.
pub fn nato_decode(input: &str) -> String {
    input
        .split_whitespace()
        .map(|token| match letter_for(token) {
            Some(letter) => letter.to_string(),
            None => token.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_mixed_case_with_digits() {
        assert_eq!(nato_encode("Hi 42"), "Hotel India Four Two");
    }

    #[test]
    fn test_encode_keeps_unmapped_symbols() {
        assert_eq!(nato_encode("a-b"), "Alfa - Bravo");
    }

    #[test]
    fn test_decode_is_case_insensitive_and_accepts_aliases() {
        assert_eq!(nato_decode("hotel ECHO lima Lima oscar"), "HELLO");
        assert_eq!(nato_decode("Alpha Juliet Niner"), "AJ9");
    }

    #[test]
    fn test_decode_passes_unknown_tokens_through() {
        assert_eq!(nato_decode("Sierra banana Sierra"), "SbananaS");
    }

    #[test]
    fn test_round_trip_for_alphabet() {
        for sample in ["HELLO", "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "0123456789", "R2D2"] {
            assert_eq!(nato_decode(&nato_encode(sample)), sample);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(nato_encode(""), "");
        assert_eq!(nato_decode("   "), "");
    }
}
