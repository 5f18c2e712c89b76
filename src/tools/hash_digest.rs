// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::errors::TransformResult;
use crate::traits::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    fn label(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    fn digest(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => Md5::digest(bytes).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(bytes).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(bytes).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(bytes).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(bytes).to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HashDigestConfig {
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    #[serde(default)]
    pub uppercase: bool,
}

/// Hex digest of the UTF-8 bytes of the input.
///
/// Empty input yields empty output rather than the digest of `""`, the
/// same as every other tool.
pub struct HashDigest {
    config: HashDigestConfig,
}

impl HashDigest {
    pub fn new(config: HashDigestConfig) -> Self {
        Self { config }
    }

    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self::new(HashDigestConfig {
            algorithm,
            uppercase: false,
        })
    }
}

impl Transform for HashDigest {
    fn apply(&self, input: &str) -> TransformResult {
        if input.is_empty() {
            return Ok(String::new());
        }
        let hex = to_hex(&self.config.algorithm.digest(input.as_bytes()));
        Ok(if self.config.uppercase {
            hex.to_uppercase()
        } else {
            hex
        })
    }

    fn name(&self) -> &'static str {
        "hash_digest"
    }

    fn download_name(&self) -> String {
        format!("{}-hash.txt", self.config.algorithm.label())
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        let test_cases = vec![
            (HashAlgorithm::Md5, "900150983cd24fb0d6963f7d28e17f72"),
            (HashAlgorithm::Sha1, "a9993e364706816aba3e25717850c26c9cd0d89d"),
            (
                HashAlgorithm::Sha256,
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
        ];

        for (algorithm, expected) in test_cases {
            assert_eq!(
                HashDigest::with_algorithm(algorithm).apply("abc").unwrap(),
                expected,
                "{:?}",
                algorithm
            );
        }
    }

    #[test]
    fn test_digest_lengths() {
        let test_cases = vec![
            (HashAlgorithm::Sha384, 96),
            (HashAlgorithm::Sha512, 128),
        ];

        for (algorithm, hex_len) in test_cases {
            let out = HashDigest::with_algorithm(algorithm).apply("text-forge").unwrap();
            assert_eq!(out.len(), hex_len);
            assert!(out.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_uppercase_option() {
        let hasher = HashDigest::new(HashDigestConfig {
            algorithm: HashAlgorithm::Md5,
            uppercase: true,
        });
        assert_eq!(hasher.apply("abc").unwrap(), "900150983CD24FB0D6963F7D28E17F72");
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert_eq!(HashDigest::with_algorithm(HashAlgorithm::Sha256).apply("").unwrap(), "");
    }

    #[test]
    fn test_download_name() {
        assert_eq!(
            HashDigest::with_algorithm(HashAlgorithm::Sha1).download_name(),
            "sha1-hash.txt"
        );
    }
}
