// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `tool` - transform execution and session events
//! * `generator` - random batch generation
//! * `recipe` - recipe run lifecycle
//! * `validation` - recipe loading and validation

pub mod generator;
pub mod recipe;
pub mod tool;
pub mod validation;

use tracing::Span;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
