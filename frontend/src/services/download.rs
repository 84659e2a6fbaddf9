//! Blob object URLs for the extracted text.
//!
//! An [`ObjectUrl`] revokes itself when dropped, so holding at most one of
//! them at a time is enough to never leak blobs across attempts.

use web_sys::{Blob, BlobPropertyBag, Url};

use crate::types::ExtractionArtifact;

#[derive(Debug)]
pub struct ObjectUrl {
    href: String,
}

impl ObjectUrl {
    /// Copy the artifact into a blob and mint a `blob:` URL for it.
    pub fn from_artifact(artifact: &ExtractionArtifact) -> Result<Self, String> {
        let bytes = js_sys::Uint8Array::from(artifact.bytes());
        let parts = js_sys::Array::of1(&bytes);

        let options = BlobPropertyBag::new();
        options.set_type(artifact.content_type());

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| format!("Failed to create Blob: {:?}", e))?;
        let href = Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

        log::debug!("Created object URL {} ({} bytes)", href, artifact.len());
        Ok(Self { href })
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.href) {
            log::warn!("Failed to revoke object URL {}: {:?}", self.href, e);
        } else {
            log::debug!("Revoked object URL {}", self.href);
        }
    }
}
