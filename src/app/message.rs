// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::config::Config;
use crate::application::port::EnhanceError;
use crate::domain::enhancement::ImagePayload;
use crate::error::Error;
use crate::ui::{action_panel, comparator, mode_selector, upload};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Component messages are
/// wrapped so there is a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(upload::Message),
    ModeSelector(mode_selector::Message),
    Actions(action_panel::Message),
    Comparator(comparator::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    ImageLoaded(Result<ImagePayload, Error>),
    /// Outcome of a request, tagged with the generation that started it.
    EnhanceCompleted {
        generation: u64,
        result: Result<ImagePayload, EnhanceError>,
    },
    /// Result from the save dialog.
    SaveDialogResult(Option<PathBuf>),
    DownloadCompleted(Result<PathBuf, Error>),
    /// Rotates the loading message.
    StatusTick,
    /// Advances the spinner animation.
    SpinnerTick,
    DismissNotice,
}

/// Runtime flags passed from `main` into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image path or `data:` URL to preload.
    pub file_path: Option<String>,
    pub config: Config,
    /// I18n key of a problem hit while loading the settings file.
    pub config_warning: Option<String>,
}
