// SPDX-License-Identifier: MPL-2.0
//! `iced_enhancer` is a desktop photo enhancer built with the Iced GUI framework.
//!
//! A photo is sent to a generative image service together with an instruction
//! for the chosen enhancement style; the result is shown next to the original
//! in a draggable before/after comparator and can be saved as PNG.
//!
//! # Layers
//!
//! - [`domain`] - image payloads, enhancement modes, UI newtypes
//! - [`application`] - the enhancement port
//! - [`infrastructure`] - the Gemini REST adapter
//! - [`app`] - controller state machine, configuration, update loop
//! - [`ui`] - components and styles
//! - [`media`], [`i18n`], [`error`] - file I/O, localization, errors

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
