// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod base64_codec;
pub mod base_codec;
pub mod caesar_cipher;
pub mod change_text_case;
pub mod csv_json;
pub mod find_replace;
pub mod hash_digest;
pub mod identifier_case;
pub mod morse_code;
pub mod nato_phonetic;
pub mod reverse_text;
pub mod slugify;
pub mod text_stats;
pub mod url_codec;
pub mod word_frequency;

use serde::{Deserialize, Serialize};

pub use base64_codec::{Base64Codec, Base64Config};
pub use base_codec::{BaseCodec, BaseCodecConfig, Radix};
pub use caesar_cipher::{CaesarCipher, CaesarCipherConfig};
pub use change_text_case::{CaseType, ChangeTextCase, ChangeTextCaseConfig};
pub use csv_json::{CsvJsonConfig, CsvJsonConverter, CsvJsonMode, Delimiter};
pub use find_replace::{FindReplace, FindReplaceConfig};
pub use hash_digest::{HashAlgorithm, HashDigest, HashDigestConfig};
pub use identifier_case::{IdentifierCase, IdentifierCaseConfig, IdentifierCaseConverter};
pub use morse_code::{MorseCode, MorseCodeConfig};
pub use nato_phonetic::{NatoPhonetic, NatoPhoneticConfig};
pub use reverse_text::ReverseText;
pub use slugify::{Slugify, SlugifyConfig};
pub use text_stats::TextStatsAnalyzer;
pub use url_codec::{UrlCodec, UrlCodecConfig};
pub use word_frequency::WordFrequencyAnalyzer;

/// Which way a reversible codec runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

impl Direction {
    pub(crate) fn past_tense(self) -> &'static str {
        match self {
            Direction::Encode => "encoded",
            Direction::Decode => "decoded",
        }
    }
}
