// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types and business rules.
//!
//! This module contains pure domain types with no knowledge of the GUI or
//! the network. Besides `std` it only relies on `base64` (the wire encoding
//! of image payloads) and `thiserror`.
//!
//! # Modules
//!
//! - [`enhancement`]: Enhancement types ([`EnhancementMode`](enhancement::EnhancementMode),
//!   [`ImagePayload`](enhancement::ImagePayload), [`EnhancementRequest`](enhancement::EnhancementRequest))
//! - [`ui`]: UI value objects ([`SliderPosition`](ui::newtypes::SliderPosition))

pub mod enhancement;
pub mod ui;
