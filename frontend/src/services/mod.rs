//! Browser services.
//!
//! # Services
//!
//! - [`upload`] - PDF upload to the extraction service
//! - [`download`] - Blob object URLs for the extracted text
//! - [`timer`] - Elapsed-time interval

pub mod upload;
pub mod download;
pub mod timer;

pub use upload::*;
pub use download::*;
pub use timer::*;
