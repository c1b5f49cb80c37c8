// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Enhancement**: Remote service endpoint, model and request timeout
//! - **Loading**: Status message rotation and spinner animation

// ==========================================================================
// Enhancement Defaults
// ==========================================================================

/// Base URL of the Gemini REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Image-capable model used for enhancement.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Default request timeout (in seconds). Image generation is slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 5;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Default interval between loading status messages (in milliseconds).
pub const DEFAULT_STATUS_INTERVAL_MS: u64 = 2000;

/// Minimum status rotation interval (in milliseconds).
pub const MIN_STATUS_INTERVAL_MS: u64 = 250;

/// Maximum status rotation interval (in milliseconds).
pub const MAX_STATUS_INTERVAL_MS: u64 = 10_000;

/// Spinner animation frame interval (in milliseconds).
pub const SPINNER_TICK_MS: u64 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_bounds_are_consistent() {
        assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
        assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    }

    #[test]
    fn status_interval_bounds_are_consistent() {
        assert!(MIN_STATUS_INTERVAL_MS <= DEFAULT_STATUS_INTERVAL_MS);
        assert!(DEFAULT_STATUS_INTERVAL_MS <= MAX_STATUS_INTERVAL_MS);
        assert!(SPINNER_TICK_MS < MIN_STATUS_INTERVAL_MS);
    }

    #[test]
    fn endpoint_has_no_trailing_slash() {
        assert!(!DEFAULT_ENDPOINT.ends_with('/'));
    }
}
