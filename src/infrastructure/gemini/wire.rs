// SPDX-License-Identifier: MPL-2.0
//! JSON shapes of the `generateContent` endpoint and response classification.
//!
//! Only the fields this application reads or writes are modelled; unknown
//! fields in responses are ignored by serde.

use crate::application::port::EnhanceError;
use crate::domain::enhancement::{EnhancementRequest, ImagePayload};
use serde::{Deserialize, Serialize};

/// MIME type assumed for returned images that do not declare one.
const RESPONSE_DEFAULT_MIME: &str = "image/png";

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<&'static str>,
}

impl GenerateContentRequest {
    /// Builds the body for one enhancement: the image first, then the instruction.
    #[must_use]
    pub fn from_request(request: &EnhancementRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: request.payload.mime_type().to_string(),
                            data: request.payload.to_base64(),
                        }),
                    },
                    Part {
                        text: Some(request.instruction().to_string()),
                        inline_data: None,
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE", "TEXT"],
            },
        }
    }
}

// =============================================================================
// Shared
// =============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub data: String,
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Parts of the first candidate, or nothing.
    fn parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
    }
}

/// Picks the result out of a response.
///
/// The first part carrying image data wins. Without one, the first non-empty
/// text part becomes [`EnhanceError::UnexpectedTextResponse`]; with neither,
/// the result is [`EnhanceError::NoImageReturned`]. Image data that is not
/// valid base64 is treated as a broken response from the service.
///
/// # Errors
///
/// See above.
pub fn extract_image(response: &GenerateContentResponse) -> Result<ImagePayload, EnhanceError> {
    let parts = response.parts();

    if let Some(inline) = parts.iter().find_map(|part| part.inline_data.as_ref()) {
        let mime = if inline.mime_type.is_empty() {
            RESPONSE_DEFAULT_MIME
        } else {
            inline.mime_type.as_str()
        };
        return ImagePayload::from_base64(&inline.data, mime)
            .map_err(|e| EnhanceError::ServiceUnavailable(e.to_string()));
    }

    if let Some(text) = parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .find(|text| !text.is_empty())
    {
        return Err(EnhanceError::UnexpectedTextResponse(text.to_string()));
    }

    Err(EnhanceError::NoImageReturned)
}
