//! UI Components for the PDF Text Extract application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF picker, submit button and status line
//! - [`ProgressSection`] - Progress bar, elapsed time and spinner
//! - [`DownloadLink`] - Download of the extracted text
//! - [`LogsPanel`] - Attempt activity log

mod hero;
mod upload;
mod progress;
mod download;
mod footer;
mod logs;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use download::*;
pub use footer::*;
pub use logs::*;
