//! Error types for the upload flow.
//!
//! Every failure the user can hit while submitting a PDF ends up as an
//! [`UploadError`]. Its `Display` output is the exact text shown in the
//! status line, so messages are written for people, not for logs.
//!
//! - Local validation: [`UploadError::NoFileSelected`],
//!   [`UploadError::InvalidFileType`], [`UploadError::FileTooLarge`]
//! - Server answered with a non-success status: [`UploadError::UploadRejected`]
//! - Network or body read failure: [`UploadError::TransferFailed`]

use thiserror::Error;

/// Coarse classification of an [`UploadError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Submit pressed with an empty file picker.
    NoFileSelected,
    /// Selected file does not carry the accepted extension.
    InvalidFileType,
    /// Selected file exceeds the upload limit.
    FileTooLarge,
    /// Server answered with a non-success HTTP status.
    UploadRejected,
    /// Connection dropped, request could not be sent, or the body could not be read.
    TransferFailed,
}

/// Failure of a single upload attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select a PDF file")]
    NoFileSelected,

    #[error("Invalid file type: \"{0}\" is not a PDF. Please upload a PDF.")]
    InvalidFileType(String),

    #[error("File is too large: {} exceeds the {} limit", format_size(*.size), format_size(*.limit))]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Upload failed: {}", status_line(.status, .status_text))]
    UploadRejected { status: u16, status_text: String },

    #[error("Transfer failed: {0}")]
    TransferFailed(String),
}

impl UploadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UploadError::NoFileSelected => ErrorKind::NoFileSelected,
            UploadError::InvalidFileType(_) => ErrorKind::InvalidFileType,
            UploadError::FileTooLarge { .. } => ErrorKind::FileTooLarge,
            UploadError::UploadRejected { .. } => ErrorKind::UploadRejected,
            UploadError::TransferFailed(_) => ErrorKind::TransferFailed,
        }
    }
}

fn status_line(status: &u16, status_text: &str) -> String {
    let status_text = status_text.trim();
    if status_text.is_empty() {
        format!("server responded with status {}", status)
    } else {
        format!("server responded with status {} {}", status, status_text)
    }
}

/// Human-readable byte count (`512 B`, `2.0 MiB`, `1.0 GiB`).
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let value = bytes as f64;
    if value >= GIB {
        format!("{:.1} GiB", value / GIB)
    } else if value >= MIB {
        format!("{:.1} MiB", value / MIB)
    } else if value >= KIB {
        format!("{:.1} KiB", value / KIB)
    } else {
        format!("{} B", bytes)
    }
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_mentions_upload_failed() {
        let err = UploadError::UploadRejected {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upload failed: server responded with status 500 Internal Server Error"
        );
        assert_eq!(err.kind(), ErrorKind::UploadRejected);
    }

    #[test]
    fn test_rejected_message_without_status_text() {
        let err = UploadError::UploadRejected {
            status: 413,
            status_text: "  ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upload failed: server responded with status 413"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(UploadError::NoFileSelected.kind(), ErrorKind::NoFileSelected);
        assert_eq!(
            UploadError::InvalidFileType("a.txt".into()).kind(),
            ErrorKind::InvalidFileType
        );
        assert_eq!(
            UploadError::TransferFailed("offline".into()).kind(),
            ErrorKind::TransferFailed
        );
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2 * 1024 * 1024), "2.0 MiB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GiB");

        let err = UploadError::FileTooLarge {
            size: 3 * 1024 * 1024,
            limit: 1024 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "File is too large: 3.0 MiB exceeds the 1.0 MiB limit"
        );
    }
}
