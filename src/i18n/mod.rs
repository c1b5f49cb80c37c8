// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files live in `assets/i18n/` and are embedded in the binary.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Fallback to `en-US` for unknown locales and missing messages
//! - Message arguments via [`fluent::I18n::tr_with_args`]

pub mod fluent;
