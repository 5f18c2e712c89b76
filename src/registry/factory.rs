// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::errors::ConfigError;
use crate::generators::{
    PasswordGenerator, RandomChoiceGenerator, RandomIpGenerator, RandomLetterGenerator,
    RandomNumberGenerator, UuidGenerator,
};
use crate::tools::{
    Base64Codec, BaseCodec, CaesarCipher, ChangeTextCase, CsvJsonConverter, FindReplace,
    HashDigest, IdentifierCaseConverter, MorseCode, NatoPhonetic, ReverseText, Slugify,
    TextStatsAnalyzer, UrlCodec, WordFrequencyAnalyzer,
};
use crate::traits::{Generator, Transform};

/// Free-form tool options as they appear in a recipe or on the command line.
pub type ToolOptions = HashMap<String, Value>;

const TRANSFORMS: &[&str] = &[
    "change_text_case",
    "change_text_case_upper",
    "change_text_case_lower",
    "change_text_case_proper",
    "change_text_case_title",
    "change_text_case_sentence",
    "change_text_case_alternating",
    "change_text_case_inverse",
    "caesar_cipher",
    "caesar_encode",
    "caesar_decode",
    "rot13",
    "slugify",
    "base_codec",
    "hex_encode",
    "hex_decode",
    "binary_encode",
    "binary_decode",
    "base64_encode",
    "base64_decode",
    "url_encode",
    "url_decode",
    "nato_encode",
    "nato_decode",
    "morse_encode",
    "morse_decode",
    "identifier_case",
    "camel_case",
    "pascal_case",
    "snake_case",
    "kebab_case",
    "constant_case",
    "csv_to_json",
    "json_to_csv",
    "hash_digest",
    "hash_md5",
    "hash_sha1",
    "hash_sha256",
    "hash_sha384",
    "hash_sha512",
    "find_replace",
    "reverse_text",
    "word_frequency",
    "text_stats",
];

const GENERATORS: &[&str] = &[
    "password",
    "random_number",
    "random_letter",
    "random_ip",
    "uuid",
    "random_choice",
];

/// Deserialize free-form options into a tool's option record.
///
/// Unknown keys and mistyped values are reported as
/// `ConfigError::InvalidOptions` naming the tool.
pub fn parse_options<T: DeserializeOwned>(tool: &str, options: &ToolOptions) -> Result<T, ConfigError> {
    let mapping: Mapping = options
        .iter()
        .map(|(key, value)| (Value::String(key.clone()), value.clone()))
        .collect();

    serde_yaml::from_value(Value::Mapping(mapping)).map_err(|e| ConfigError::InvalidOptions {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}

/// Parse options for a preset tool name, with some keys pinned by the name.
///
/// `caesar_decode` pins `direction: decode`; passing `direction` yourself is
/// an error rather than a silent override.
fn preset<T: DeserializeOwned>(
    tool: &str,
    options: &ToolOptions,
    pinned: &[(&str, Value)],
) -> Result<T, ConfigError> {
    let mut merged = options.clone();
    for (key, value) in pinned {
        if merged.contains_key(*key) {
            return Err(ConfigError::InvalidOptions {
                tool: tool.to_string(),
                reason: format!("option '{}' is fixed by this tool", key),
            });
        }
        merged.insert(key.to_string(), value.clone());
    }
    parse_options(tool, &merged)
}

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

/// Factory for tool instances, keyed by tool name
pub struct ToolFactory;

impl ToolFactory {
    /// Create a transform from its name and options.
    ///
    /// Names come in two flavours: a base name whose options select the
    /// mode (`change_text_case` with `case_type: title`) and preset names
    /// that pin the mode (`change_text_case_title`, `hex_decode`, `rot13`).
    pub fn create_transform(tool: &str, options: &ToolOptions) -> Result<Box<dyn Transform>, ConfigError> {
        let transform: Box<dyn Transform> = match tool {
            // Text case
            "change_text_case" => Box::new(ChangeTextCase::new(parse_options(tool, options)?)),
            "change_text_case_upper"
            | "change_text_case_lower"
            | "change_text_case_proper"
            | "change_text_case_title"
            | "change_text_case_sentence"
            | "change_text_case_alternating"
            | "change_text_case_inverse" => {
                let case_type = tool.trim_start_matches("change_text_case_");
                Box::new(ChangeTextCase::new(preset(
                    tool,
                    options,
                    &[("case_type", text(case_type))],
                )?))
            }

            // Ciphers and codecs
            "caesar_cipher" => Box::new(CaesarCipher::new(parse_options(tool, options)?)),
            "caesar_encode" => Box::new(CaesarCipher::new(preset(tool, options, &[("direction", text("encode"))])?)),
            "caesar_decode" => Box::new(CaesarCipher::new(preset(tool, options, &[("direction", text("decode"))])?)),
            "rot13" => Box::new(CaesarCipher::new(preset(
                tool,
                options,
                &[("shift", Value::Number(13_i64.into())), ("direction", text("encode"))],
            )?)),
            "slugify" => Box::new(Slugify::new(parse_options(tool, options)?)),
            "base_codec" => Box::new(BaseCodec::new(parse_options(tool, options)?)),
            "hex_encode" | "hex_decode" | "binary_encode" | "binary_decode" => {
                let (radix, direction) = tool.split_once('_').unwrap_or((tool, "encode"));
                Box::new(BaseCodec::new(preset(
                    tool,
                    options,
                    &[("radix", text(radix)), ("direction", text(direction))],
                )?))
            }
            "base64_encode" => Box::new(Base64Codec::new(preset(tool, options, &[("direction", text("encode"))])?)),
            "base64_decode" => Box::new(Base64Codec::new(preset(tool, options, &[("direction", text("decode"))])?)),
            "url_encode" => Box::new(UrlCodec::new(preset(tool, options, &[("direction", text("encode"))])?)),
            "url_decode" => Box::new(UrlCodec::new(preset(tool, options, &[("direction", text("decode"))])?)),
            "nato_encode" => Box::new(NatoPhonetic::new(preset(tool, options, &[("direction", text("encode"))])?)),
            "nato_decode" => Box::new(NatoPhonetic::new(preset(tool, options, &[("direction", text("decode"))])?)),
            "morse_encode" => Box::new(MorseCode::new(preset(tool, options, &[("direction", text("encode"))])?)),
            "morse_decode" => Box::new(MorseCode::new(preset(tool, options, &[("direction", text("decode"))])?)),

            // Programmer cases
            "identifier_case" => Box::new(IdentifierCaseConverter::new(parse_options(tool, options)?)),
            "camel_case" | "pascal_case" | "snake_case" | "kebab_case" | "constant_case" => {
                let target = tool.trim_end_matches("_case");
                Box::new(IdentifierCaseConverter::new(preset(
                    tool,
                    options,
                    &[("target", text(target))],
                )?))
            }

            // Data
            "csv_to_json" => Box::new(CsvJsonConverter::new(preset(tool, options, &[("mode", text("csv_to_json"))])?)),
            "json_to_csv" => Box::new(CsvJsonConverter::new(preset(tool, options, &[("mode", text("json_to_csv"))])?)),
            "hash_digest" => Box::new(HashDigest::new(parse_options(tool, options)?)),
            "hash_md5" | "hash_sha1" | "hash_sha256" | "hash_sha384" | "hash_sha512" => {
                let algorithm = tool.trim_start_matches("hash_");
                Box::new(HashDigest::new(preset(
                    tool,
                    options,
                    &[("algorithm", text(algorithm))],
                )?))
            }
            "find_replace" => Box::new(FindReplace::new(parse_options(tool, options)?)),

            // Option-less tools
            "reverse_text" | "word_frequency" | "text_stats" => {
                if let Some(key) = options.keys().next() {
                    return Err(ConfigError::InvalidOptions {
                        tool: tool.to_string(),
                        reason: format!("unknown option '{}', this tool takes none", key),
                    });
                }
                let plain: Box<dyn Transform> = match tool {
                    "reverse_text" => Box::new(ReverseText::new()),
                    "word_frequency" => Box::new(WordFrequencyAnalyzer::new()),
                    _ => Box::new(TextStatsAnalyzer::new()),
                };
                plain
            }

            _ => return Err(ConfigError::UnknownTool(tool.to_string())),
        };

        Ok(transform)
    }

    /// Create a generator from its name and options.
    pub fn create_generator(tool: &str, options: &ToolOptions) -> Result<Box<dyn Generator>, ConfigError> {
        let generator: Box<dyn Generator> = match tool {
            "password" => Box::new(PasswordGenerator::new(parse_options(tool, options)?)),
            "random_number" => Box::new(RandomNumberGenerator::new(parse_options(tool, options)?)),
            "random_letter" => Box::new(RandomLetterGenerator::new(parse_options(tool, options)?)),
            "random_ip" => Box::new(RandomIpGenerator::new(parse_options(tool, options)?)),
            "uuid" => Box::new(UuidGenerator::new(parse_options(tool, options)?)),
            "random_choice" => Box::new(RandomChoiceGenerator::new(parse_options(tool, options)?)),
            _ => return Err(ConfigError::UnknownTool(tool.to_string())),
        };
        Ok(generator)
    }

    /// List all available transform names
    pub fn list_available_transforms() -> Vec<&'static str> {
        TRANSFORMS.to_vec()
    }

    /// List all available generator names
    pub fn list_available_generators() -> Vec<&'static str> {
        GENERATORS.to_vec()
    }

    pub fn is_transform_available(tool: &str) -> bool {
        TRANSFORMS.contains(&tool)
    }

    pub fn is_generator_available(tool: &str) -> bool {
        GENERATORS.contains(&tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{RandomnessClass, ToolIntent};

    fn options(yaml: &str) -> ToolOptions {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn run(tool: &str, opts: &ToolOptions, input: &str) -> String {
        ToolFactory::create_transform(tool, opts).unwrap().apply(input).unwrap()
    }

    #[test]
    fn test_every_listed_transform_is_creatable() {
        // Tools whose option records have required fields
        let required = HashMap::from([
            ("base_codec", "radix: hex"),
            ("identifier_case", "target: snake"),
            ("find_replace", "find: x"),
        ]);

        for tool in ToolFactory::list_available_transforms() {
            let opts = required
                .get(tool)
                .map(|yaml| options(yaml))
                .unwrap_or_default();
            let transform = ToolFactory::create_transform(tool, &opts)
                .unwrap_or_else(|e| panic!("{} failed: {}", tool, e));
            assert_eq!(transform.apply("").unwrap(), "", "{} on empty input", tool);
        }
    }

    #[test]
    fn test_every_listed_generator_is_creatable() {
        for tool in ToolFactory::list_available_generators() {
            let opts = if tool == "random_choice" {
                options("choices: [a, b]")
            } else {
                ToolOptions::new()
            };
            assert!(ToolFactory::create_generator(tool, &opts).is_ok(), "{}", tool);
        }
    }

    #[test]
    fn test_presets_table_driven() {
        let none = ToolOptions::new();
        let test_cases = vec![
            ("change_text_case_upper", "hello", "HELLO"),
            ("change_text_case_lower", "HeLLo", "hello"),
            ("caesar_encode", "Hello World!", "Khoor Zruog!"),
            ("caesar_decode", "Khoor Zruog!", "Hello World!"),
            ("rot13", "Hello", "Uryyb"),
            ("hex_encode", "Hello", "48 65 6c 6c 6f"),
            ("hex_decode", "48 65 6c 6c 6f", "Hello"),
            ("binary_encode", "A", "01000001"),
            ("base64_encode", "Hello World!", "SGVsbG8gV29ybGQh"),
            ("base64_decode", "SGVsbG8gV29ybGQh", "Hello World!"),
            ("url_encode", "a b", "a%20b"),
            ("nato_encode", "sos", "Sierra Oscar Sierra"),
            ("morse_encode", "sos", "... --- ..."),
            ("snake_case", "helloWorld", "hello_world"),
            ("constant_case", "hello world", "HELLO_WORLD"),
            ("slugify", "Hello World! This is a test.", "hello-world-this-is-a-test"),
            ("reverse_text", "abc", "cba"),
            ("hash_md5", "abc", "900150983cd24fb0d6963f7d28e17f72"),
        ];

        for (tool, input, expected) in test_cases {
            assert_eq!(run(tool, &none, input), expected, "{}", tool);
        }
    }

    #[test]
    fn test_options_are_applied() {
        assert_eq!(run("caesar_encode", &options("shift: 1"), "abc"), "bcd");
        assert_eq!(run("change_text_case", &options("case_type: title"), "the lord of the rings"), "The Lord of the Rings");
        assert_eq!(run("slugify", &options("separator: _"), "Hello World"), "hello_world");
        assert_eq!(run("hash_digest", &options("algorithm: sha1\nuppercase: true"), "abc"), "A9993E364706816ABA3E25717850C26C9CD0D89D");
        assert_eq!(run("json_to_csv", &options("delimiter: semicolon"), r#"[{"a":1,"b":2}]"#), "a;b\n1;2");
    }

    #[test]
    fn test_option_errors() {
        let test_cases = vec![
            ("caesar_encode", "direction: decode"),
            ("caesar_encode", "shift: lots"),
            ("slugify", "colour: blue"),
            ("reverse_text", "anything: 1"),
            ("find_replace", "replace: y"),
        ];

        for (tool, yaml) in test_cases {
            let result = ToolFactory::create_transform(tool, &options(yaml));
            assert!(
                matches!(result, Err(ConfigError::InvalidOptions { .. })),
                "{} with {:?}",
                tool,
                yaml
            );
        }
    }

    #[test]
    fn test_unknown_tools() {
        assert!(matches!(
            ToolFactory::create_transform("password", &ToolOptions::new()),
            Err(ConfigError::UnknownTool(_))
        ));
        assert!(matches!(
            ToolFactory::create_generator("rot13", &ToolOptions::new()),
            Err(ConfigError::UnknownTool(_))
        ));
        assert!(!ToolFactory::is_transform_available("password"));
        assert!(ToolFactory::is_generator_available("password"));
    }

    #[test]
    fn test_intents_and_randomness() {
        let none = ToolOptions::new();
        let analyzer = ToolFactory::create_transform("word_frequency", &none).unwrap();
        assert_eq!(analyzer.declared_intent(), ToolIntent::Analyze);
        let password = ToolFactory::create_generator("password", &none).unwrap();
        assert_eq!(password.randomness(), RandomnessClass::Cryptographic);
        let uuid = ToolFactory::create_generator("uuid", &none).unwrap();
        assert_eq!(uuid.randomness(), RandomnessClass::NonCryptographic);
    }
}
