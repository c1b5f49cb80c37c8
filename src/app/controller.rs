// SPDX-License-Identifier: MPL-2.0
//! Application state machine.
//!
//! The controller owns everything the screen shows: the uploaded image, the
//! selected mode, the latest result or error, and the loading status. It is
//! synchronous and free of I/O; the update loop performs the actual request
//! with the [`PendingEnhancement`] it hands out and reports back through
//! [`Controller::complete`].
//!
//! Every request is tagged with a generation number. Uploading a new image
//! or starting over bumps the generation, so an answer that arrives for an
//! image the user has already replaced is dropped.

use crate::application::port::EnhanceError;
use crate::domain::enhancement::{EnhancementMode, EnhancementRequest, ImagePayload};
use crate::error::Error;

/// I18n keys of the rotating loading messages, in display order.
pub const STATUS_MESSAGE_KEYS: [&str; 6] = [
    "loading-status-1",
    "loading-status-2",
    "loading-status-3",
    "loading-status-4",
    "loading-status-5",
    "loading-status-6",
];

/// Coarse screen state, derived from the controller fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image uploaded.
    Empty,
    /// Image present, nothing in flight, no outcome yet.
    Ready,
    /// A request is outstanding.
    Loading,
    /// The last request finished, with a result or an error.
    Done,
}

/// Error shown in the banner.
#[derive(Debug, Clone)]
pub enum Failure {
    /// The uploaded file could not be used.
    Upload(Error),
    /// The enhancement request failed.
    Enhance(EnhanceError),
}

impl Failure {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Failure::Upload(err) => err.i18n_key(),
            Failure::Enhance(err) => err.i18n_key(),
        }
    }

    /// Text to display verbatim after the localized message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Failure::Upload(_) => None,
            Failure::Enhance(err) => err.service_text(),
        }
    }
}

/// A request the caller must run, tagged with the generation it belongs to.
#[derive(Debug, Clone)]
pub struct PendingEnhancement {
    pub generation: u64,
    pub request: EnhancementRequest,
}

#[derive(Debug, Default)]
pub struct Controller {
    original: Option<ImagePayload>,
    mode: Option<EnhancementMode>,
    result: Option<ImagePayload>,
    error: Option<Failure>,
    loading: bool,
    attempted: bool,
    status_index: usize,
    generation: u64,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.original.is_none() {
            Phase::Empty
        } else if self.attempted {
            Phase::Done
        } else {
            Phase::Ready
        }
    }

    /// Replaces the current image and clears everything derived from it,
    /// including the selected mode.
    pub fn upload(&mut self, payload: ImagePayload) {
        tracing::info!(mime = payload.mime_type(), bytes = payload.len(), "image uploaded");
        self.generation = self.generation.wrapping_add(1);
        self.original = Some(payload);
        self.mode = None;
        self.result = None;
        self.error = None;
        self.loading = false;
        self.attempted = false;
        self.status_index = 0;
    }

    /// Records a file that could not be used. The previous image stays.
    ///
    /// Ignored while a request runs; its outcome owns the banner until then.
    pub fn upload_failed(&mut self, error: Error) {
        if self.loading {
            tracing::warn!(%error, "upload rejected while enhancing, ignored");
            return;
        }
        tracing::warn!(%error, "upload rejected");
        self.result = None;
        self.error = Some(Failure::Upload(error));
    }

    /// Selects a mode. Ignored without an image or while a request runs.
    pub fn select_mode(&mut self, mode: EnhancementMode) {
        if matches!(self.phase(), Phase::Empty | Phase::Loading) {
            return;
        }
        self.mode = Some(mode);
    }

    /// Starts a request if the state allows one.
    ///
    /// Returns `None` (and changes nothing) without an image, without a mode,
    /// or while a request is already running. Valid after a previous outcome
    /// so the user can try again.
    pub fn begin_enhance(&mut self) -> Option<PendingEnhancement> {
        if self.loading {
            return None;
        }
        let payload = self.original.clone()?;
        let mode = self.mode?;

        self.loading = true;
        self.result = None;
        self.error = None;
        self.status_index = 0;
        tracing::debug!(generation = self.generation, %mode, "enhancement started");

        Some(PendingEnhancement {
            generation: self.generation,
            request: EnhancementRequest::new(payload, mode),
        })
    }

    /// Applies the outcome of a request.
    ///
    /// Returns `false` when the outcome is stale (an upload or reset happened
    /// since the request started) and was therefore ignored.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<ImagePayload, EnhanceError>,
    ) -> bool {
        if !self.loading || generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "dropping stale enhancement outcome"
            );
            return false;
        }

        self.loading = false;
        self.attempted = true;
        self.status_index = 0;
        match outcome {
            Ok(image) => {
                self.result = Some(image);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(Failure::Enhance(err));
            }
        }
        true
    }

    /// Returns to the empty state.
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    /// Advances the loading message. Ignored when not loading.
    pub fn tick_status(&mut self) {
        if self.loading {
            self.status_index = (self.status_index + 1) % STATUS_MESSAGE_KEYS.len();
        }
    }

    #[must_use]
    pub fn status_index(&self) -> usize {
        self.status_index
    }

    /// I18n key of the loading message currently shown.
    #[must_use]
    pub fn status_key(&self) -> &'static str {
        STATUS_MESSAGE_KEYS[self.status_index % STATUS_MESSAGE_KEYS.len()]
    }

    #[must_use]
    pub fn can_enhance(&self) -> bool {
        !self.loading && self.original.is_some() && self.mode.is_some()
    }

    #[must_use]
    pub fn can_download(&self) -> bool {
        !self.loading && self.result.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn original(&self) -> Option<&ImagePayload> {
        self.original.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> Option<EnhancementMode> {
        self.mode
    }

    #[must_use]
    pub fn result(&self) -> Option<&ImagePayload> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
