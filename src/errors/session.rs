// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::TransformError;

/// Errors from a session's copy action
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    /// The clipboard refused the write (permissions, no display, ...)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// There is no output to copy because the tool failed
    #[error("Nothing to copy: {0}")]
    NoOutput(#[from] TransformError),
}
