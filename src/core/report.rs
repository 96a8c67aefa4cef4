// src/core/report.rs

use std::fmt;

/// Separator between the relation findings, the scalar-relation block and
/// the primality summary of a finished report.
pub const DIVIDER: &str = "==================";

/// Append-only buffer of human-readable findings.
///
/// Each search section writes into its own sink; the driver merges the
/// sinks in section order once every section has finished, so no two
/// writers ever interleave inside a line. The merged buffer is the result
/// of the whole search.
#[derive(Debug, Default)]
pub struct ReportSink {
    buffer: String,
}

impl ReportSink {
    pub fn new() -> Self {
        ReportSink {
            buffer: String::new(),
        }
    }

    /// Appends one finding, newline-terminated.
    pub fn line<S: AsRef<str>>(&mut self, text: S) {
        self.buffer.push_str(text.as_ref());
        self.buffer.push('\n');
    }

    /// Appends an empty line, closing off a multi-line finding block.
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Appends everything `other` collected, consuming it.
    pub fn merge(&mut self, other: ReportSink) {
        self.buffer.push_str(&other.buffer);
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Write for ReportSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}
