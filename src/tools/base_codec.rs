// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Hex and binary text codecs.
//!
//! Encoding works on UTF-16 code units. Units up to 0xFF use the fixed unit
//! width (2 hex digits, 8 bits); wider units are written with double width
//! and fall outside the round-trippable alphabet. Decoding strips all
//! whitespace, validates the digit set and checks the length is a multiple
//! of the unit width, then reads each unit as a Latin-1 character.

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::errors::{TransformError, TransformResult};
use crate::traits::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Radix {
    Hex,
    Binary,
}

impl Radix {
    fn unit_width(self) -> usize {
        match self {
            Radix::Hex => 2,
            Radix::Binary => 8,
        }
    }

    fn format_name(self) -> &'static str {
        match self {
            Radix::Hex => "hex",
            Radix::Binary => "binary",
        }
    }

    fn is_digit(self, c: char) -> bool {
        match self {
            Radix::Hex => c.is_ascii_hexdigit(),
            Radix::Binary => c == '0' || c == '1',
        }
    }

    fn base(self) -> u32 {
        match self {
            Radix::Hex => 16,
            Radix::Binary => 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BaseCodecConfig {
    pub radix: Radix,
    #[serde(default)]
    pub direction: Direction,
}

pub struct BaseCodec {
    config: BaseCodecConfig,
}

impl BaseCodec {
    pub fn new(config: BaseCodecConfig) -> Self {
        Self { config }
    }

    pub fn hex(direction: Direction) -> Self {
        Self::new(BaseCodecConfig {
            radix: Radix::Hex,
            direction,
        })
    }

    pub fn binary(direction: Direction) -> Self {
        Self::new(BaseCodecConfig {
            radix: Radix::Binary,
            direction,
        })
    }
}

impl Transform for BaseCodec {
    fn apply(&self, input: &str) -> TransformResult {
        match self.config.direction {
            Direction::Encode => Ok(encode_units(input, self.config.radix)),
            Direction::Decode => decode_units(input, self.config.radix),
        }
    }

    fn name(&self) -> &'static str {
        match self.config.radix {
            Radix::Hex => "hex_codec",
            Radix::Binary => "binary_codec",
        }
    }

    fn download_name(&self) -> String {
        format!(
            "{}-{}.txt",
            self.config.radix.format_name(),
            self.config.direction.past_tense()
        )
    }
}

pub fn hex_encode(input: &str) -> String {
    encode_units(input, Radix::Hex)
}

pub fn hex_decode(input: &str) -> TransformResult {
    decode_units(input, Radix::Hex)
}

pub fn binary_encode(input: &str) -> String {
    encode_units(input, Radix::Binary)
}

pub fn binary_decode(input: &str) -> TransformResult {
    decode_units(input, Radix::Binary)
}

fn encode_units(input: &str, radix: Radix) -> String {
    input
        .encode_utf16()
        .map(|unit| {
            let wide = unit > 0xff;
            match (radix, wide) {
                (Radix::Hex, false) => format!("{:02x}", unit),
                (Radix::Hex, true) => format!("{:04x}", unit),
                (Radix::Binary, false) => format!("{:08b}", unit),
                (Radix::Binary, true) => format!("{:016b}", unit),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_units(input: &str, radix: Radix) -> TransformResult {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return Ok(String::new());
    }

    if let Some(bad) = digits.chars().find(|c| !radix.is_digit(*c)) {
        return Err(TransformError::malformed(
            radix.format_name(),
            format!("invalid character '{}'", bad),
        ));
    }

    let width = radix.unit_width();
    if digits.len() % width != 0 {
        return Err(TransformError::malformed(
            radix.format_name(),
            format!("length {} is not a multiple of {}", digits.len(), width),
        ));
    }

    // Only ASCII digits remain, so byte slicing is char-aligned.
    digits
        .as_bytes()
        .chunks(width)
        .map(|chunk| {
            let text = std::str::from_utf8(chunk).map_err(|e| {
                TransformError::malformed(radix.format_name(), e.to_string())
            })?;
            u8::from_str_radix(text, radix.base())
                .map(char::from)
                .map_err(|e| TransformError::malformed(radix.format_name(), e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_encode_hello() {
        assert_eq!(hex_encode("Hello"), "48 65 6c 6c 6f");
    }

    #[test]
    fn test_binary_encode_hi() {
        assert_eq!(binary_encode("Hi"), "01001000 01101001");
    }

    #[test]
    fn test_decode_ignores_whitespace_and_case() {
        assert_eq!(hex_decode("48 65\n6C 6c\t6F").unwrap(), "Hello");
        assert_eq!(hex_decode("48656c6c6f").unwrap(), "Hello");
        assert_eq!(binary_decode(" 01001000\n01101001 ").unwrap(), "Hi");
    }

    #[test]
    fn test_binary_decode_rejects_partial_unit() {
        let err = binary_decode("101").unwrap_err();
        assert!(matches!(err, TransformError::Malformed { format: "binary", .. }));
        assert!(err.to_string().contains("not a multiple of 8"));
    }

    #[test]
    fn test_decode_rejects_invalid_digits() {
        assert!(matches!(
            hex_decode("4g").unwrap_err(),
            TransformError::Malformed { format: "hex", .. }
        ));
        assert!(matches!(
            binary_decode("01201000").unwrap_err(),
            TransformError::Malformed { format: "binary", .. }
        ));
        assert!(hex_decode("abc").is_err());
    }

    #[test]
    fn test_round_trip_for_latin1_text() {
        for sample in ["Hello, World!", "café 100%", "tab\tand\nnewline", "~ÿ"] {
            assert_eq!(hex_decode(&hex_encode(sample)).unwrap(), sample);
            assert_eq!(binary_decode(&binary_encode(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn test_wide_units_use_double_width() {
        assert_eq!(hex_encode("€"), "20ac");
        assert_eq!(binary_encode("€"), "0010000010101100");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(hex_encode(""), "");
        assert_eq!(hex_decode("").unwrap(), "");
        assert_eq!(binary_decode("   ").unwrap(), "");
    }

    #[test]
    fn test_transform_dispatches_on_direction() {
        let encoder = BaseCodec::hex(Direction::Encode);
        let decoder = BaseCodec::hex(Direction::Decode);
        assert_eq!(decoder.apply(&encoder.apply("Rust").unwrap()).unwrap(), "Rust");
        assert_eq!(decoder.download_name(), "hex-decoded.txt");
    }
}
