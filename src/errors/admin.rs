// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors surfaced by a header-script store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    #[error("Header script '{0}' not found")]
    NotFound(String),

    #[error("Header script id must not be empty")]
    EmptyId,

    /// The backing store failed; the message comes from the backend
    #[error("Header script store unavailable: {0}")]
    Backend(String),
}
