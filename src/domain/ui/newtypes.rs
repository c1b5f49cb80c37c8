// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Slider Bounds
// =============================================================================

/// Comparator split-point bounds (0% to 100%).
pub mod slider_bounds {
    /// Leftmost position.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Rightmost position.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Position used for every new comparison.
    pub const DEFAULT_PERCENT: f32 = 50.0;
}

// =============================================================================
// SliderPosition
// =============================================================================

/// Split point of the before/after comparator, guaranteed to be within 0%–100%.
///
/// Everything left of the position shows the original image, everything
/// right of it shows the enhanced one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPosition(f32);

impl SliderPosition {
    /// Creates a new position, clamping the value to the valid range.
    /// Non-finite input falls back to the default position.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(slider_bounds::MIN_PERCENT, slider_bounds::MAX_PERCENT))
    }

    /// Maps a horizontal pointer coordinate onto the widget's span.
    ///
    /// `x` is clamped to `[left, left + width]` first, so pointers far outside
    /// the widget pin the slider to an edge. Returns `None` when the widget
    /// has no usable width or any input is not finite.
    #[must_use]
    pub fn from_pointer(x: f32, left: f32, width: f32) -> Option<Self> {
        if !(x.is_finite() && left.is_finite() && width.is_finite()) || width <= 0.0 {
            return None;
        }
        let offset = (x - left).clamp(0.0, width);
        Some(Self::new(offset / width * slider_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction (e.g., 50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / slider_bounds::MAX_PERCENT
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self(slider_bounds::DEFAULT_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_centered() {
        assert_eq!(SliderPosition::default().value(), 50.0);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        assert_eq!(SliderPosition::new(-20.0).value(), 0.0);
        assert_eq!(SliderPosition::new(250.0).value(), 100.0);
        assert_eq!(SliderPosition::new(f32::INFINITY).value(), 100.0);
        assert_eq!(SliderPosition::new(f32::NAN).value(), 50.0);
    }

    #[test]
    fn pointer_maps_linearly_inside_bounds() {
        let pos = SliderPosition::from_pointer(150.0, 100.0, 200.0).unwrap();
        assert!((pos.value() - 25.0).abs() < f32::EPSILON);
        assert!((pos.as_fraction() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn pointer_outside_bounds_pins_to_edges() {
        for x in [-10_000.0, -1.0, 0.0, 99.9] {
            let pos = SliderPosition::from_pointer(x, 100.0, 200.0).unwrap();
            assert_eq!(pos.value(), 0.0, "x = {x}");
        }
        for x in [300.0, 300.1, 5_000.0, f32::MAX] {
            let pos = SliderPosition::from_pointer(x, 100.0, 200.0).unwrap();
            assert_eq!(pos.value(), 100.0, "x = {x}");
        }
    }

    #[test]
    fn zero_or_negative_width_is_rejected() {
        assert!(SliderPosition::from_pointer(10.0, 0.0, 0.0).is_none());
        assert!(SliderPosition::from_pointer(10.0, 0.0, -5.0).is_none());
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(SliderPosition::from_pointer(f32::NAN, 0.0, 100.0).is_none());
        assert!(SliderPosition::from_pointer(10.0, f32::INFINITY, 100.0).is_none());
        assert!(SliderPosition::from_pointer(10.0, 0.0, f32::NAN).is_none());
    }
}
