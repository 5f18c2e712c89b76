// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::errors::{TransformError, TransformResult};
use crate::traits::Transform;

const WORD_SEPARATOR: &str = " / ";

/// International Morse code for letters, digits and common punctuation
pub static MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MorseCodeConfig {
    #[serde(default)]
    pub direction: Direction,
}

pub struct MorseCode {
    config: MorseCodeConfig,
}

impl MorseCode {
    pub fn new(config: MorseCodeConfig) -> Self {
        Self { config }
    }

    pub fn encoder() -> Self {
        Self::new(MorseCodeConfig {
            direction: Direction::Encode,
        })
    }

    pub fn decoder() -> Self {
        Self::new(MorseCodeConfig {
            direction: Direction::Decode,
        })
    }
}

impl Transform for MorseCode {
    fn apply(&self, input: &str) -> TransformResult {
        match self.config.direction {
            Direction::Encode => morse_encode(input),
            Direction::Decode => morse_decode(input),
        }
    }

    fn name(&self) -> &'static str {
        "morse_code"
    }

    fn download_name(&self) -> String {
        format!("morse-{}.txt", self.config.direction.past_tense())
    }
}

/// Letters are separated by a space and words by ` / `.
pub fn morse_encode(input: &str) -> TransformResult {
    let mut words = Vec::new();
    for word in input.split_whitespace() {
        let mut codes = Vec::with_capacity(word.len());
        for c in word.chars() {
            let upper = c.to_ascii_uppercase();
            let code = MORSE_TABLE
                .iter()
                .find(|(symbol, _)| *symbol == upper)
                .map(|(_, code)| *code)
                .ok_or_else(|| {
                    TransformError::malformed("morse", format!("'{}' has no Morse code", c))
                })?;
            codes.push(code);
        }
        words.push(codes.join(" "));
    }
    Ok(words.join(WORD_SEPARATOR))
}

/// Reads codes separated by whitespace, with `/` between words.
pub fn morse_decode(input: &str) -> TransformResult {
    let mut words = Vec::new();
    for word in input.split('/') {
        let mut decoded = String::new();
        for code in word.split_whitespace() {
            let symbol = MORSE_TABLE
                .iter()
                .find(|(_, known)| *known == code)
                .map(|(symbol, _)| *symbol)
                .ok_or_else(|| {
                    TransformError::malformed("morse", format!("unknown code '{}'", code))
                })?;
            decoded.push(symbol);
        }
        if !decoded.is_empty() {
            words.push(decoded);
        }
    }
    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sos() {
        assert_eq!(morse_encode("sos").unwrap(), "... --- ...");
    }

    #[test]
    fn test_encode_words() {
        assert_eq!(
            morse_encode("Hello World").unwrap(),
            ".... . .-.. .-.. --- / .-- --- .-. .-.. -.."
        );
    }

    #[test]
    fn test_round_trip_normalizes_to_uppercase() {
        let encoded = morse_encode("Call me at 5, ok?").unwrap();
        assert_eq!(morse_decode(&encoded).unwrap(), "CALL ME AT 5, OK?");
    }

    #[test]
    fn test_unsupported_characters_fail() {
        assert!(matches!(
            morse_encode("naïve").unwrap_err(),
            TransformError::Malformed { format: "morse", .. }
        ));
        assert!(morse_decode("...---...").is_err());
    }

    #[test]
    fn test_decode_tolerates_extra_spacing() {
        assert_eq!(morse_decode("  .-   -...  /  -.-.  ").unwrap(), "AB C");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(morse_encode("").unwrap(), "");
        assert_eq!(morse_decode("").unwrap(), "");
    }
}
