// SPDX-License-Identifier: MPL-2.0
//! Image payloads as exchanged with the enhancement service.
//!
//! Bytes are held in memory behind an `Arc` so the controller, the comparator
//! and an in-flight request can share the same image without copying. On the
//! wire a payload is a base64 string plus a MIME type.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::sync::Arc;

/// MIME type assumed when a data URL header does not name one.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Errors raised while building a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("image payload is empty")]
    Empty,
    #[error("invalid base64 image data: {0}")]
    InvalidBase64(String),
    #[error("malformed data URL")]
    MalformedDataUrl,
}

/// Raw image bytes plus their MIME type. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Arc<[u8]>,
    mime_type: String,
}

impl ImagePayload {
    /// Wraps raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Empty`] when `bytes` is empty.
    pub fn new(bytes: impl Into<Arc<[u8]>>, mime_type: impl Into<String>) -> Result<Self, PayloadError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(PayloadError::Empty);
        }
        Ok(Self {
            bytes,
            mime_type: mime_type.into(),
        })
    }

    /// Decodes a base64 string (standard alphabet, padded).
    ///
    /// # Errors
    ///
    /// Returns an error when the data is not valid base64 or decodes to nothing.
    pub fn from_base64(data: &str, mime_type: impl Into<String>) -> Result<Self, PayloadError> {
        let bytes = STANDARD
            .decode(data.trim())
            .map_err(|e| PayloadError::InvalidBase64(e.to_string()))?;
        Self::new(bytes, mime_type)
    }

    /// Parses a `data:<mime>;base64,<data>` URL.
    ///
    /// The MIME type falls back to [`DEFAULT_MIME_TYPE`] when the header does
    /// not contain one.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MalformedDataUrl`] when there is no `,`
    /// separator, or a base64 error for the data part.
    pub fn from_data_url(url: &str) -> Result<Self, PayloadError> {
        let (header, data) = url
            .trim()
            .split_once(',')
            .ok_or(PayloadError::MalformedDataUrl)?;
        Self::from_base64(data, mime_from_header(header))
    }

    /// Encodes the bytes for the wire.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a shared handle on the bytes.
    #[must_use]
    pub fn bytes_arc(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn is_png(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case("image/png")
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Extracts the MIME type from a data URL header such as `data:image/png;base64`.
fn mime_from_header(header: &str) -> &str {
    header
        .split_once(':')
        .and_then(|(_, rest)| rest.split_once(';'))
        .map(|(mime, _)| mime.trim())
        .filter(|mime| !mime.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
}
