//! HTTP service posting the selected PDF to the extraction service.
//!
//! The request is split in two stages so the caller can react to the status
//! line before the (possibly large) body has been read:
//!
//! 1. [`send_pdf`] posts the multipart form and resolves once headers arrive.
//! 2. [`PendingResponse::into_outcome`] reads the body into an artifact.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::error::{UploadError, UploadResult};
use crate::orchestrator::{PdfPayload, ResponseStatus, UploadOutcome};
use crate::types::ExtractionArtifact;

impl PdfPayload for File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn size_bytes(&self) -> u64 {
        self.size() as u64
    }
}

/// Response whose headers arrived but whose body is still pending.
pub struct PendingResponse {
    response: Response,
}

impl PendingResponse {
    pub fn status(&self) -> ResponseStatus {
        ResponseStatus::new(self.response.status(), self.response.status_text())
    }

    /// Read the whole body as the extracted text artifact.
    pub async fn into_outcome(self, file_name: &str) -> UploadOutcome {
        let content_type = self.response.headers().get("content-type");
        match self.response.binary().await {
            Ok(bytes) => {
                log::debug!("Received {} bytes of extracted text", bytes.len());
                UploadOutcome::Success(ExtractionArtifact::new(bytes, file_name, content_type))
            }
            Err(e) => UploadOutcome::Failure(UploadError::TransferFailed(format!(
                "Failed to read response body: {}",
                e
            ))),
        }
    }
}

/// Upload a PDF file to the extraction service.
pub async fn send_pdf(file: &File, endpoint: &str) -> UploadResult<PendingResponse> {
    let form_data = FormData::new()
        .map_err(|e| UploadError::TransferFailed(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| UploadError::TransferFailed(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| UploadError::TransferFailed(format!("Failed to build request: {}", e)))?;

    log::info!("POST {} ({} bytes)", endpoint, file.size_bytes());

    let response = request
        .send()
        .await
        .map_err(|e| UploadError::TransferFailed(e.to_string()))?;

    Ok(PendingResponse { response })
}
