// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`enhancement`]: Remote image enhancement
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so a single instance can be shared with tasks
//! - Async work is returned as a boxed future and driven by Iced's `Task::perform`

pub mod enhancement;

// Re-export main types for convenience
pub use enhancement::{EnhanceError, EnhancementService};
