// SPDX-License-Identifier: MPL-2.0
//! Enhancement domain types.
//!
//! This module contains the vocabulary shared by the controller and the
//! enhancement service adapters.

pub mod mode;
pub mod payload;

pub use mode::EnhancementMode;
pub use payload::{ImagePayload, PayloadError, DEFAULT_MIME_TYPE};

/// A single enhancement job: one image and the style to apply to it.
///
/// Produced when the user triggers enhancement and consumed exactly once by
/// an [`EnhancementService`](crate::application::port::EnhancementService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementRequest {
    pub payload: ImagePayload,
    pub mode: EnhancementMode,
}

impl EnhancementRequest {
    #[must_use]
    pub fn new(payload: ImagePayload, mode: EnhancementMode) -> Self {
        Self { payload, mode }
    }

    /// Instruction text sent alongside the image.
    #[must_use]
    pub fn instruction(&self) -> &'static str {
        self.mode.instruction()
    }
}
