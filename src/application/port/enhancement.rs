// SPDX-License-Identifier: MPL-2.0
//! Image enhancement port definition.
//!
//! This module defines the [`EnhancementService`] trait for sending an image
//! and an instruction to a generative model and getting an image back.
//!
//! # Design Notes
//!
//! - One call is one attempt; retry policy belongs to the caller
//! - Errors are classified once, by the adapter; callers only display them

use crate::domain::enhancement::{EnhancementRequest, ImagePayload};
use futures_util::future::BoxFuture;

// =============================================================================
// EnhanceError
// =============================================================================

/// Errors that can occur while enhancing an image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnhanceError {
    /// The call itself failed (network, authentication, quota, bad response).
    ///
    /// The detail is kept for logs only; users see a generic message.
    #[error("Failed to communicate with the AI enhancement service. Please try again later.")]
    ServiceUnavailable(String),

    /// The service answered with text instead of an image, usually a refusal.
    #[error("API returned text instead of an image: {0}")]
    UnexpectedTextResponse(String),

    /// The service answered with neither an image nor text.
    #[error("Image enhancement failed: No image data received from the API.")]
    NoImageReturned,
}

impl EnhanceError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EnhanceError::ServiceUnavailable(_) => "error-service-unavailable",
            EnhanceError::UnexpectedTextResponse(_) => "error-unexpected-text",
            EnhanceError::NoImageReturned => "error-no-image-returned",
        }
    }

    /// Text returned by the service, if any. Always shown to the user verbatim.
    #[must_use]
    pub fn service_text(&self) -> Option<&str> {
        match self {
            EnhanceError::UnexpectedTextResponse(text) => Some(text),
            _ => None,
        }
    }
}

// =============================================================================
// EnhancementService Trait
// =============================================================================

/// Port for remote image enhancement.
///
/// # Example
///
/// ```ignore
/// use iced_enhancer::application::port::{EnhanceError, EnhancementService};
/// use iced_enhancer::domain::enhancement::{EnhancementMode, EnhancementRequest};
///
/// async fn run(service: &dyn EnhancementService, request: EnhancementRequest) {
///     match service.enhance(request).await {
///         Ok(image) => println!("got {} bytes", image.len()),
///         Err(EnhanceError::UnexpectedTextResponse(text)) => println!("refused: {text}"),
///         Err(err) => println!("{err}"),
///     }
/// }
/// ```
pub trait EnhancementService: Send + Sync {
    /// Sends the request and resolves to the first image the service returns.
    ///
    /// The returned future owns everything it needs, so it can be handed to
    /// an executor without borrowing the service.
    fn enhance(
        &self,
        request: EnhancementRequest,
    ) -> BoxFuture<'static, Result<ImagePayload, EnhanceError>>;
}
