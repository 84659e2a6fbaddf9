//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Log Types** - Attempt activity log shown in the logs panel
//! - **Artifact Types** - Text returned by the extraction service

use serde::{Deserialize, Serialize};

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
    /// Debug message (verbose)
    Debug,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
            LogLevel::Debug => "log-debug",
        }
    }
}

/// A single entry of the activity log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position in the log; never reused, even after old entries are dropped
    pub seq: u64,
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Build an entry stamped with the current local time.
    pub fn now(seq: u64, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            seq,
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// Artifact Types
// =============================================================================

/// Extracted text returned by the service on success.
///
/// The body is kept as raw bytes: the service sends `text/plain`, but the
/// client only ever hands it back to the user as a download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionArtifact {
    bytes: Vec<u8>,
    file_name: String,
    content_type: Option<String>,
}

impl ExtractionArtifact {
    pub fn new(
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            content_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Suggested filename for the download.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type for the blob; falls back to opaque binary.
    pub fn content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or("application/octet-stream")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_serialization() {
        let entry = LogEntry {
            seq: 7,
            level: LogLevel::Success,
            message: "Processing complete!".to_string(),
            timestamp: "12:00:01".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"level\":\"Success\""));

        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.level.css_class(), "log-success");
    }

    #[test]
    fn test_log_entry_timestamp_format() {
        let entry = LogEntry::now(1, LogLevel::Info, "hello");
        assert_eq!(entry.timestamp.len(), 8);
        assert_eq!(entry.timestamp.matches(':').count(), 2);
    }

    #[test]
    fn test_artifact_content_type_fallback() {
        let artifact = ExtractionArtifact::new(b"hello world".to_vec(), "extracted_text.txt", None);
        assert_eq!(artifact.content_type(), "application/octet-stream");
        assert_eq!(artifact.len(), 11);

        let artifact = ExtractionArtifact::new(
            Vec::new(),
            "extracted_text.txt",
            Some("text/plain; charset=utf-8".to_string()),
        );
        assert_eq!(artifact.content_type(), "text/plain; charset=utf-8");
        assert!(artifact.is_empty());
    }
}
