// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::errors::{TransformError, TransformResult};
use crate::traits::Transform;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UrlCodecConfig {
    #[serde(default)]
    pub direction: Direction,
    /// Treat `+` as a space when decoding form-encoded text
    #[serde(default)]
    pub plus_as_space: bool,
}

/// Percent-encoding of UTF-8 text.
pub struct UrlCodec {
    config: UrlCodecConfig,
}

impl UrlCodec {
    pub fn new(config: UrlCodecConfig) -> Self {
        Self { config }
    }

    pub fn encoder() -> Self {
        Self::new(UrlCodecConfig::default())
    }

    pub fn decoder() -> Self {
        Self::new(UrlCodecConfig {
            direction: Direction::Decode,
            plus_as_space: false,
        })
    }
}

impl Transform for UrlCodec {
    fn apply(&self, input: &str) -> TransformResult {
        match self.config.direction {
            Direction::Encode => Ok(urlencoding::encode(input).into_owned()),
            Direction::Decode => {
                let source = if self.config.plus_as_space {
                    input.replace('+', " ")
                } else {
                    input.to_string()
                };
                urlencoding::decode(&source)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|e| TransformError::malformed("url", e.to_string()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "url_codec"
    }

    fn download_name(&self) -> String {
        format!("url-{}.txt", self.config.direction.past_tense())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reserved_and_unicode() {
        assert_eq!(
            UrlCodec::encoder().apply("a b&c=d/é").unwrap(),
            "a%20b%26c%3Dd%2F%C3%A9"
        );
    }

    #[test]
    fn test_round_trip() {
        let sample = "https://example.com/?q=rust lang&lang=日本";
        let encoded = UrlCodec::encoder().apply(sample).unwrap();
        assert_eq!(UrlCodec::decoder().apply(&encoded).unwrap(), sample);
    }

    #[test]
    fn test_plus_as_space() {
        let decoder = UrlCodec::new(UrlCodecConfig {
            direction: Direction::Decode,
            plus_as_space: true,
        });
        assert_eq!(decoder.apply("hello+world%21").unwrap(), "hello world!");
        assert_eq!(UrlCodec::decoder().apply("hello+world").unwrap(), "hello+world");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8_sequence() {
        let err = UrlCodec::decoder().apply("%FF%FE").unwrap_err();
        assert!(matches!(err, TransformError::Malformed { format: "url", .. }));
    }

    #[test]
    fn test_download_name() {
        assert_eq!(UrlCodec::decoder().download_name(), "url-decoded.txt");
    }
}
