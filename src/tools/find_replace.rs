// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::{TransformError, TransformResult};
use crate::traits::Transform;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FindReplaceConfig {
    pub find: String,
    #[serde(default)]
    pub replace: String,
    /// Treat `find` as a regular expression; `replace` may then use `$1`, `${name}`
    #[serde(default)]
    pub regex: bool,
    #[serde(default)]
    pub case_insensitive: bool,
}

/// Replaces every match of a literal string or regular expression.
///
/// The pattern is compiled once at construction. A bad pattern is kept as
/// an error and reported on each non-empty `apply`, so a misconfigured
/// tool still maps empty input to empty output.
pub struct FindReplace {
    config: FindReplaceConfig,
    pattern: Result<Option<Regex>, TransformError>,
}

impl FindReplace {
    pub fn new(config: FindReplaceConfig) -> Self {
        let pattern = compile(&config);
        Self { config, pattern }
    }

    pub fn literal(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self::new(FindReplaceConfig {
            find: find.into(),
            replace: replace.into(),
            regex: false,
            case_insensitive: false,
        })
    }
}

fn compile(config: &FindReplaceConfig) -> Result<Option<Regex>, TransformError> {
    if config.find.is_empty() {
        return Ok(None);
    }
    let source = if config.regex {
        config.find.clone()
    } else {
        regex::escape(&config.find)
    };
    RegexBuilder::new(&source)
        .case_insensitive(config.case_insensitive)
        .build()
        .map(Some)
        .map_err(|e| TransformError::InvalidPattern(e.to_string()))
}

impl Transform for FindReplace {
    fn apply(&self, input: &str) -> TransformResult {
        if input.is_empty() {
            return Ok(String::new());
        }
        let regex = match &self.pattern {
            Ok(Some(regex)) => regex,
            Ok(None) => return Ok(input.to_string()),
            Err(e) => return Err(e.clone()),
        };

        let replaced = if self.config.regex {
            regex.replace_all(input, self.config.replace.as_str())
        } else {
            regex.replace_all(input, NoExpand(&self.config.replace))
        };
        Ok(replaced.into_owned())
    }

    fn name(&self) -> &'static str {
        "find_replace"
    }
}
