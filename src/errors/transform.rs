// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors produced at the transform boundary.
//!
//! Malformed input is reported as a typed value, never as text placed in the
//! output. Empty input is not an error for any tool.

use thiserror::Error;

/// Result of applying a single transform.
pub type TransformResult = Result<String, TransformError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Structured input (hex, binary, Base64, JSON, ...) could not be decoded.
    #[error("Malformed {format} input: {reason}")]
    Malformed {
        format: &'static str,
        reason: String,
    },

    /// A find/replace pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// The option record cannot produce a result (e.g. empty character pool).
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Input exceeds the configured size cap.
    #[error("Input of {size} bytes exceeds the {limit} byte limit")]
    InputTooLarge { size: usize, limit: usize },
}

impl TransformError {
    pub fn malformed(format: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            reason: reason.into(),
        }
    }

    pub fn invalid_options(reason: impl Into<String>) -> Self {
        Self::InvalidOptions(reason.into())
    }

    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TransformError::Malformed { .. } => "malformed",
            TransformError::InvalidPattern(_) => "invalid_pattern",
            TransformError::InvalidOptions(_) => "invalid_options",
            TransformError::InputTooLarge { .. } => "input_too_large",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_names_format() {
        let err = TransformError::malformed("binary", "length 3 is not a multiple of 8");
        assert_eq!(
            err.to_string(),
            "Malformed binary input: length 3 is not a multiple of 8"
        );
        assert_eq!(err.kind(), "malformed");
    }

    #[test]
    fn test_input_too_large_display() {
        let err = TransformError::InputTooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "Input of 2048 bytes exceeds the 1024 byte limit"
        );
    }
}
