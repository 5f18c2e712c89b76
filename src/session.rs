// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Interactive converter state.
//!
//! A `ConverterSession` holds the input text and one tool. Output and
//! stats are derived on every read, so `output == tool(input)` holds after
//! any sequence of edits. A `GeneratorSession` holds the last generated
//! batch, replaced wholesale on each run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::consts::DEFAULT_MAX_INPUT_BYTES;
use crate::errors::{ClipboardError, TransformError, TransformResult};
use crate::generators::generate_batch;
use crate::observability::messages::tool::{
    ClipboardWriteFailed, DownloadWritten, InputRejected, ToolApplied, ToolFailed,
};
use crate::observability::messages::StructuredLog;
use crate::stats::{self, TransformStats};
use crate::traits::{Generator, ToolIntent, Transform};

pub const DOWNLOAD_MIME: &str = "text/plain;charset=utf-8";

/// Destination for the copy action.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A file offered for download: UTF-8 text with a tool-specific name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    pub fn text(filename: impl Into<String>, text: String) -> Self {
        Self {
            filename: filename.into(),
            mime: DOWNLOAD_MIME,
            bytes: text.into_bytes(),
        }
    }

    /// Write the artifact into `dir` under its filename.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes)?;
        DownloadWritten {
            path: &path,
            bytes: self.bytes.len(),
        }
        .log();
        Ok(path)
    }
}

pub struct ConverterSession {
    tool: Box<dyn Transform>,
    input: String,
    download_name: String,
    max_input_bytes: usize,
}

impl ConverterSession {
    pub fn new(tool: Box<dyn Transform>) -> Self {
        let download_name = tool.download_name();
        Self {
            tool,
            input: String::new(),
            download_name,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    pub fn with_download_name(mut self, download_name: impl Into<String>) -> Self {
        self.download_name = download_name.into();
        self
    }

    /// Set the input cap. Input already held that no longer fits is
    /// cleared, so the session never holds text over its cap.
    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        if check_input_size(&self.input, max_input_bytes).is_err() {
            self.input.clear();
        }
        self
    }

    /// Replace the input. Text over the size cap is rejected and the
    /// previous input is kept.
    pub fn set_input(&mut self, text: impl Into<String>) -> Result<(), TransformError> {
        let text = text.into();
        check_input_size(&text, self.max_input_bytes)?;
        self.input = text;
        Ok(())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn tool_name(&self) -> &'static str {
        self.tool.name()
    }

    pub fn intent(&self) -> ToolIntent {
        self.tool.declared_intent()
    }

    pub fn download_name(&self) -> &str {
        &self.download_name
    }

    /// Run the tool on the current input.
    pub fn output(&self) -> TransformResult {
        let start = Instant::now();
        let result = self.tool.apply(&self.input);
        match &result {
            Ok(output) => ToolApplied {
                tool: self.tool.name(),
                input_size: self.input.len(),
                output_size: output.len(),
                duration: start.elapsed(),
            }
            .log(),
            Err(error) => ToolFailed {
                tool: self.tool.name(),
                error,
            }
            .log(),
        }
        result
    }

    /// Stats for the current input and output; `None` while the tool fails.
    pub fn stats(&self) -> Option<TransformStats> {
        self.output()
            .ok()
            .map(|output| stats::compute(&self.input, &output))
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Copy the output (never the input). A refused write leaves the
    /// session untouched.
    pub fn copy_to(&self, sink: &mut dyn ClipboardSink) -> Result<(), ClipboardError> {
        let output = self.output()?;
        sink.write_text(&output).map_err(|error| {
            ClipboardWriteFailed {
                tool: self.tool.name(),
                reason: &error.to_string(),
            }
            .log();
            error
        })
    }

    pub fn download(&self) -> Result<DownloadArtifact, TransformError> {
        Ok(DownloadArtifact::text(self.download_name.clone(), self.output()?))
    }
}

pub(crate) fn check_input_size(text: &str, limit: usize) -> Result<(), TransformError> {
    if text.len() > limit {
        InputRejected {
            size: text.len(),
            limit,
        }
        .log();
        return Err(TransformError::InputTooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(())
}

/// Holds the most recent batch from one generator.
pub struct GeneratorSession {
    generator: Box<dyn Generator>,
    batch: Vec<String>,
}

impl GeneratorSession {
    pub fn new(generator: Box<dyn Generator>) -> Self {
        Self {
            generator,
            batch: Vec::new(),
        }
    }

    /// Generate a fresh batch, replacing the previous one. On failure the
    /// previous batch is kept.
    pub fn generate(&mut self) -> Result<&[String], TransformError> {
        self.batch = generate_batch(self.generator.as_ref())?;
        Ok(&self.batch)
    }

    pub fn batch(&self) -> &[String] {
        &self.batch
    }

    pub fn clear(&mut self) {
        self.batch.clear();
    }

    fn joined(&self) -> String {
        self.batch.join("\n")
    }

    /// Copy the batch, one value per line.
    pub fn copy_to(&self, sink: &mut dyn ClipboardSink) -> Result<(), ClipboardError> {
        sink.write_text(&self.joined())
    }

    pub fn download(&self) -> DownloadArtifact {
        DownloadArtifact::text(
            format!("{}.txt", self.generator.name().replace('_', "-")),
            self.joined(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{RandomLetterConfig, RandomLetterGenerator};
    use crate::tools::{BaseCodec, CaesarCipher, ChangeTextCase, Direction};

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
    }

    impl ClipboardSink for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl ClipboardSink for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("permission denied".to_string()))
        }
    }

    #[test]
    fn test_output_tracks_every_edit() {
        let mut session = ConverterSession::new(Box::new(CaesarCipher::encoder(3)));
        assert_eq!(session.output().unwrap(), "");

        session.set_input("Hello").unwrap();
        assert_eq!(session.output().unwrap(), "Khoor");
        session.set_input("Hello World!").unwrap();
        assert_eq!(session.output().unwrap(), "Khoor Zruog!");

        session.clear();
        assert_eq!(session.input(), "");
        assert_eq!(session.output().unwrap(), "");
    }

    #[test]
    fn test_stats_follow_output() {
        let mut session = ConverterSession::new(Box::new(BaseCodec::hex(Direction::Encode)));
        session.set_input("Hello").unwrap();
        let stats = session.stats().unwrap();
        assert_eq!(stats.input.bytes, 5);
        assert_eq!(stats.output.bytes, 14);

        let mut failing = ConverterSession::new(Box::new(BaseCodec::binary(Direction::Decode)));
        failing.set_input("101").unwrap();
        assert!(failing.output().is_err());
        assert!(failing.stats().is_none());
    }

    #[test]
    fn test_copy_copies_output_not_input() {
        let mut session = ConverterSession::new(Box::new(ChangeTextCase::upper()));
        session.set_input("quiet").unwrap();

        let mut clipboard = MemoryClipboard::default();
        session.copy_to(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("QUIET"));
    }

    #[test]
    fn test_copy_failure_leaves_state_unchanged() {
        let mut session = ConverterSession::new(Box::new(ChangeTextCase::upper()));
        session.set_input("quiet").unwrap();

        let result = session.copy_to(&mut DeniedClipboard);
        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
        assert_eq!(session.input(), "quiet");
        assert_eq!(session.output().unwrap(), "QUIET");
    }

    #[test]
    fn test_copy_with_failing_tool_reports_no_output() {
        let mut session = ConverterSession::new(Box::new(BaseCodec::binary(Direction::Decode)));
        session.set_input("101").unwrap();
        let mut clipboard = MemoryClipboard::default();
        assert!(matches!(
            session.copy_to(&mut clipboard),
            Err(ClipboardError::NoOutput(TransformError::Malformed { .. }))
        ));
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_input_cap() {
        let mut session = ConverterSession::new(Box::new(ChangeTextCase::lower())).with_max_input_bytes(8);
        session.set_input("FITS").unwrap();

        let err = session.set_input("WAY TOO LONG").unwrap_err();
        assert_eq!(err, TransformError::InputTooLarge { size: 12, limit: 8 });
        assert_eq!(session.input(), "FITS");
    }

    #[test]
    fn test_lowering_cap_drops_input_that_no_longer_fits() {
        let mut session = ConverterSession::new(Box::new(ChangeTextCase::upper()));
        session.set_input("twelve bytes").unwrap();

        let session = session.with_max_input_bytes(4);
        assert_eq!(session.input(), "");
        assert_eq!(session.output().unwrap(), "");

        let mut roomy = ConverterSession::new(Box::new(ChangeTextCase::upper()));
        roomy.set_input("abc").unwrap();
        assert_eq!(roomy.with_max_input_bytes(4).input(), "abc");
    }

    #[test]
    fn test_download_artifact() {
        let mut session = ConverterSession::new(Box::new(CaesarCipher::encoder(3)));
        session.set_input("abc").unwrap();

        let artifact = session.download().unwrap();
        assert_eq!(artifact.filename, "caesar-encoded.txt");
        assert_eq!(artifact.mime, "text/plain;charset=utf-8");
        assert_eq!(artifact.bytes, b"def".to_vec());

        let renamed = ConverterSession::new(Box::new(CaesarCipher::encoder(3)))
            .with_download_name("secret.txt");
        assert_eq!(renamed.download().unwrap().filename, "secret.txt");
    }

    #[test]
    fn test_download_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = DownloadArtifact::text("out.txt", "héllo".to_string());
        let path = artifact.write_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("out.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "héllo");
    }

    #[test]
    fn test_generator_session_replaces_batch() {
        let mut session = GeneratorSession::new(Box::new(RandomLetterGenerator::new(
            RandomLetterConfig {
                count: 4,
                ..RandomLetterConfig::default()
            },
        )));
        assert!(session.batch().is_empty());
        assert_eq!(session.generate().unwrap().len(), 4);
        assert_eq!(session.generate().unwrap().len(), 4);
        assert_eq!(session.batch().len(), 4);

        let artifact = session.download();
        assert_eq!(artifact.filename, "random-letter.txt");
        assert_eq!(artifact.bytes.len(), 4 + 3);

        session.clear();
        assert!(session.batch().is_empty());
    }
}
