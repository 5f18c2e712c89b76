// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for transform execution and converter sessions.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::errors::TransformError;
use crate::observability::messages::StructuredLog;

/// A transform produced output.
///
/// # Log Level
/// `debug!` - Fires on every keystroke in an interactive session
pub struct ToolApplied<'a> {
    pub tool: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for ToolApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tool '{}' applied: input={} bytes, output={} bytes, duration={:?}",
            self.tool, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ToolApplied<'_> {
    fn log(&self) {
        tracing::debug!(
            tool = self.tool,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            tool = self.tool,
            input_size = self.input_size,
        )
    }
}

/// A transform returned a failure value.
///
/// # Log Level
/// `info!` - Malformed user input is expected, not an operational fault
///
/// # Example
/// ```
/// use text_forge::errors::TransformError;
/// use text_forge::observability::messages::tool::ToolFailed;
///
/// let error = TransformError::malformed("binary", "length 3 is not a multiple of 8");
/// let msg = ToolFailed {
///     tool: "binary_codec",
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("binary_codec"));
/// ```
pub struct ToolFailed<'a> {
    pub tool: &'a str,
    pub error: &'a TransformError,
}

impl Display for ToolFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Tool '{}' failed: {}", self.tool, self.error)
    }
}

impl StructuredLog for ToolFailed<'_> {
    fn log(&self) {
        tracing::info!(
            tool = self.tool,
            error_kind = self.error.kind(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            tool = self.tool,
            error_kind = self.error.kind(),
        )
    }
}

/// Input exceeded the configured size cap and was not processed.
///
/// # Log Level
/// `warn!` - Potential abuse or misconfiguration
pub struct InputRejected {
    pub size: usize,
    pub limit: usize,
}

impl Display for InputRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Input rejected: {} bytes exceeds the {} byte limit",
            self.size, self.limit
        )
    }
}

impl StructuredLog for InputRejected {
    fn log(&self) {
        tracing::warn!(size = self.size, limit = self.limit, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            size = self.size,
            limit = self.limit,
        )
    }
}

/// The clipboard sink refused a copy. Session state is unchanged.
///
/// # Log Level
/// `warn!` - Degraded behavior, non-fatal
pub struct ClipboardWriteFailed<'a> {
    pub tool: &'a str,
    pub reason: &'a str,
}

impl Display for ClipboardWriteFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Copying output of '{}' to the clipboard failed: {}",
            self.tool, self.reason
        )
    }
}

impl StructuredLog for ClipboardWriteFailed<'_> {
    fn log(&self) {
        tracing::warn!(tool = self.tool, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            tool = self.tool,
        )
    }
}

/// A download artifact was written to disk.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DownloadWritten<'a> {
    pub path: &'a std::path::Path,
    pub bytes: usize,
}

impl Display for DownloadWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Wrote {} bytes to {}", self.bytes, self.path.display())
    }
}

impl StructuredLog for DownloadWritten<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            bytes = self.bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            path = %self.path.display(),
        )
    }
}
