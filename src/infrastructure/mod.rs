// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like HTTP
//! clients.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Image enhancement via the Gemini API (implements [`EnhancementService`])
//!
//! [`EnhancementService`]: crate::application::port::EnhancementService

pub mod gemini;

// Re-export main types for convenience
pub use gemini::{GeminiClient, GeminiConfig};
