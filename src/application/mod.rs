// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between orchestration and adapters.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`app`, `ui`) only sees the traits, so tests can swap
//!   in fakes for the remote enhancement service
//!
//! # Example
//!
//! ```ignore
//! use iced_enhancer::application::port::EnhancementService;
//! use iced_enhancer::infrastructure::gemini::GeminiClient;
//! use std::sync::Arc;
//!
//! let service: Arc<dyn EnhancementService> = Arc::new(GeminiClient::new(config)?);
//! ```

pub mod port;
