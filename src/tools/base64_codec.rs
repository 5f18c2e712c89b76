// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::Direction;
use crate::errors::{TransformError, TransformResult};
use crate::traits::Transform;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Base64Config {
    #[serde(default)]
    pub direction: Direction,
    /// Use the `-`/`_` alphabet instead of `+`/`/`
    #[serde(default)]
    pub url_safe: bool,
}

/// Base64 over the UTF-8 bytes of the text, padding on.
pub struct Base64Codec {
    config: Base64Config,
}

impl Base64Codec {
    pub fn new(config: Base64Config) -> Self {
        Self { config }
    }

    pub fn encoder() -> Self {
        Self::new(Base64Config::default())
    }

    pub fn decoder() -> Self {
        Self::new(Base64Config {
            direction: Direction::Decode,
            url_safe: false,
        })
    }

    fn engine(&self) -> &'static base64::engine::GeneralPurpose {
        if self.config.url_safe {
            &URL_SAFE
        } else {
            &STANDARD
        }
    }
}

impl Transform for Base64Codec {
    fn apply(&self, input: &str) -> TransformResult {
        match self.config.direction {
            Direction::Encode => Ok(self.engine().encode(input.as_bytes())),
            Direction::Decode => {
                let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
                if compact.is_empty() {
                    return Ok(String::new());
                }
                let bytes = self
                    .engine()
                    .decode(compact.as_bytes())
                    .map_err(|e| TransformError::malformed("base64", e.to_string()))?;
                String::from_utf8(bytes).map_err(|_| {
                    TransformError::malformed("base64", "decoded bytes are not valid UTF-8 text")
                })
            }
        }
    }

    fn name(&self) -> &'static str {
        "base64_codec"
    }

    fn download_name(&self) -> String {
        format!("base64-{}.txt", self.config.direction.past_tense())
    }
}
