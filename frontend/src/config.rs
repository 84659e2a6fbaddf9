//! Application configuration.
//!
//! Centralized configuration for the PDF Text Extract frontend.
//! The extraction service is served from the same origin as the page,
//! so the endpoint is a relative path.

/// Upload endpoint of the extraction service.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field carrying the PDF binary.
pub const UPLOAD_FIELD: &str = "file";

/// Application name, shown in the document title.
pub const APP_NAME: &str = "PDF Text Extract";

/// Maximum file size for upload (in bytes).
///
/// 1024 MiB, the limit enforced by the extraction service.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Accepted file extension (compared case-insensitively, without the dot).
pub const ACCEPTED_EXTENSION: &str = "pdf";

/// Suggested filename for the downloaded text.
pub const DOWNLOAD_FILE_NAME: &str = "extracted_text.txt";

/// Elapsed-time tick interval, in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 1_000;

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Window event that releases the timer and the artifact URL.
///
/// `beforeunload` also fires for `<a download>` clicks and cancelled
/// navigations, which would revoke the link while the page is still open.
pub const UNLOAD_EVENT: &str = "pagehide";

/// Runtime knobs for the upload orchestrator.
///
/// Defaults mirror the constants above; tests build smaller limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    /// Largest accepted payload, in bytes.
    pub max_file_size: u64,
    /// Accepted extension, lowercase, without the dot.
    pub accepted_extension: String,
    /// Filename offered for the extracted text.
    pub download_file_name: String,
    /// Activity log capacity.
    pub max_log_entries: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            accepted_extension: ACCEPTED_EXTENSION.to_string(),
            download_file_name: DOWNLOAD_FILE_NAME.to_string(),
            max_log_entries: MAX_LOG_ENTRIES,
        }
    }
}
