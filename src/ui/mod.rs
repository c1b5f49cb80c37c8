// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! module exposes a `view` taking a small context struct, and the stateful
//! ones ([`comparator`], [`loading`]) own a `State` the application updates.
//!
//! - [`header`], [`upload`], [`mode_selector`], [`action_panel`] - page sections
//! - [`comparator`] - before/after split view
//! - [`loading`] - spinner and rotating status text
//! - [`error_banner`] - failure and warning banners
//! - [`widgets`], [`styles`], [`design_tokens`], [`theming`] - shared infrastructure

pub mod action_panel;
pub mod comparator;
pub mod design_tokens;
pub mod error_banner;
pub mod header;
pub mod loading;
pub mod mode_selector;
pub mod styles;
pub mod theming;
pub mod upload;
pub mod widgets;
