// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch, applies the state change through the
//! controller and returns the follow-up task, if any.

use super::controller::Controller;
use super::Message;
use crate::application::port::{EnhanceError, EnhancementService};
use crate::domain::enhancement::ImagePayload;
use crate::error::Error;
use crate::media;
use crate::ui::{action_panel, comparator, loading, mode_selector, upload};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub controller: &'a mut Controller,
    pub comparator: &'a mut comparator::State,
    pub loading: &'a mut loading::State,
    /// Dismissible warning banner (i18n key).
    pub notice: &'a mut Option<String>,
    pub service: &'a Arc<dyn EnhancementService>,
    pub dialog_titles: DialogTitles,
}

/// Localized strings for the native dialogs, resolved before the handler runs.
pub struct DialogTitles {
    pub open: String,
    pub save: String,
    pub filter: String,
}

pub fn handle_upload_message(ctx: &mut UpdateContext<'_>, message: upload::Message) -> Task<Message> {
    match message {
        upload::Message::OpenDialog => open_file_dialog(&ctx.dialog_titles),
    }
}

pub fn handle_mode_selector_message(
    ctx: &mut UpdateContext<'_>,
    message: mode_selector::Message,
) -> Task<Message> {
    match message {
        mode_selector::Message::Selected(mode) => {
            ctx.controller.select_mode(mode);
            Task::none()
        }
    }
}

pub fn handle_action_message(
    ctx: &mut UpdateContext<'_>,
    message: action_panel::Message,
) -> Task<Message> {
    match message {
        action_panel::Message::StartOver => {
            ctx.controller.reset();
            ctx.comparator.reset();
            ctx.loading.reset();
            Task::none()
        }
        action_panel::Message::Enhance => start_enhancement(ctx),
        action_panel::Message::Download => save_file_dialog(ctx),
    }
}

pub fn handle_comparator_message(
    ctx: &mut UpdateContext<'_>,
    message: comparator::Message,
) -> Task<Message> {
    match ctx.comparator.handle(message) {
        comparator::Effect::None | comparator::Effect::PositionChanged(_) => Task::none(),
    }
}

fn open_file_dialog(titles: &DialogTitles) -> Task<Message> {
    let title = titles.open.clone();
    let filter = titles.filter.clone();
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter, media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Loads an image from disk. Cancelled dialogs are a no-op.
pub fn handle_open_path(path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    tracing::debug!(path = %path.display(), "loading image");
    Task::perform(
        async move { media::load_payload(&path) },
        Message::ImageLoaded,
    )
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImagePayload, Error>,
) -> Task<Message> {
    match result {
        Ok(payload) => {
            ctx.controller.upload(payload);
            ctx.comparator.reset();
            ctx.loading.reset();
        }
        Err(error) => ctx.controller.upload_failed(error),
    }
    Task::none()
}

fn start_enhancement(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(pending) = ctx.controller.begin_enhance() else {
        return Task::none();
    };
    ctx.loading.reset();

    let generation = pending.generation;
    Task::perform(ctx.service.enhance(pending.request), move |result| {
        Message::EnhanceCompleted { generation, result }
    })
}

pub fn handle_enhance_completed(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<ImagePayload, EnhanceError>,
) -> Task<Message> {
    if let Err(err) = &result {
        tracing::warn!(generation, %err, "enhancement failed");
    }
    if ctx.controller.complete(generation, result) {
        ctx.comparator.reset();
    }
    Task::none()
}

fn save_file_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.controller.can_download() {
        return Task::none();
    }

    let title = ctx.dialog_titles.save.clone();
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_file_name(media::DOWNLOAD_FILE_NAME)
                .add_filter("PNG", &["png"])
                .save_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Writes the current result to `path` as PNG.
///
/// The payload is captured when the dialog closes, so a result replaced in
/// the meantime is not the one written.
pub fn handle_save_path(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let Some(result) = ctx.controller.result().cloned() else {
        return Task::none();
    };

    Task::perform(
        async move { media::save_png(&result, &path).map(|()| path) },
        Message::DownloadCompleted,
    )
}

pub fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => tracing::info!(path = %path.display(), "enhanced image saved"),
        Err(error) => {
            tracing::error!(%error, "failed to save enhanced image");
            *ctx.notice = Some(error.i18n_key().to_string());
        }
    }
    Task::none()
}

pub fn handle_status_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.controller.tick_status();
    Task::none()
}

pub fn handle_spinner_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.controller.is_loading() {
        ctx.loading.tick();
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enhancement::{EnhancementMode, EnhancementRequest};
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;

    struct Unused;

    impl EnhancementService for Unused {
        fn enhance(
            &self,
            _request: EnhancementRequest,
        ) -> BoxFuture<'static, Result<ImagePayload, EnhanceError>> {
            async { Err(EnhanceError::NoImageReturned) }.boxed()
        }
    }

    struct Fixture {
        controller: Controller,
        comparator: comparator::State,
        loading: loading::State,
        notice: Option<String>,
        service: Arc<dyn EnhancementService>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                controller: Controller::new(),
                comparator: comparator::State::new(),
                loading: loading::State::default(),
                notice: None,
                service: Arc::new(Unused),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                controller: &mut self.controller,
                comparator: &mut self.comparator,
                loading: &mut self.loading,
                notice: &mut self.notice,
                service: &self.service,
                dialog_titles: DialogTitles {
                    open: String::new(),
                    save: String::new(),
                    filter: String::new(),
                },
            }
        }
    }

    fn image(tag: u8) -> ImagePayload {
        ImagePayload::new(vec![tag; 4], "image/png").unwrap()
    }

    /// Drags the split to 10% of a 100 px wide comparator and releases it.
    fn drag_split(comparator: &mut comparator::State) {
        comparator.handle(comparator::Message::PointerPressed {
            bounds: iced::Rectangle::new(iced::Point::ORIGIN, iced::Size::new(100.0, 10.0)),
        });
        comparator.handle(comparator::Message::PointerMoved(10.0));
        comparator.handle(comparator::Message::PointerReleased);
        assert_eq!(comparator.position().value(), 10.0);
    }

    #[test]
    fn loaded_image_resets_comparator() {
        let mut fixture = Fixture::new();
        drag_split(&mut fixture.comparator);

        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(1)));
        assert_eq!(fixture.comparator.position().value(), 50.0);
        assert!(fixture.controller.original().is_some());
    }

    #[test]
    fn failed_load_keeps_previous_image() {
        let mut fixture = Fixture::new();
        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(1)));
        let _ = handle_image_loaded(&mut fixture.ctx(), Err(Error::Decode("bad".into())));
        assert_eq!(fixture.controller.original(), Some(&image(1)));
        assert!(fixture.controller.error().is_some());
    }

    #[test]
    fn start_over_clears_everything() {
        let mut fixture = Fixture::new();
        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(1)));
        let _ = handle_mode_selector_message(
            &mut fixture.ctx(),
            mode_selector::Message::Selected(EnhancementMode::General),
        );
        let _ = handle_action_message(&mut fixture.ctx(), action_panel::Message::StartOver);
        assert!(fixture.controller.original().is_none());
        assert!(fixture.controller.mode().is_none());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut fixture = Fixture::new();
        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(1)));
        fixture.controller.select_mode(EnhancementMode::Face);
        let pending = fixture.controller.begin_enhance().unwrap();
        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(2)));

        let _ = handle_enhance_completed(&mut fixture.ctx(), pending.generation, Ok(image(9)));
        assert!(fixture.controller.result().is_none());
        assert_eq!(fixture.controller.original(), Some(&image(2)));
    }

    #[test]
    fn successful_completion_recenters_split() {
        let mut fixture = Fixture::new();
        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(1)));
        fixture.controller.select_mode(EnhancementMode::Face);
        let pending = fixture.controller.begin_enhance().unwrap();
        drag_split(&mut fixture.comparator);

        let _ = handle_enhance_completed(&mut fixture.ctx(), pending.generation, Ok(image(9)));
        assert_eq!(fixture.controller.result(), Some(&image(9)));
        assert_eq!(fixture.comparator.position().value(), 50.0);
        assert!(!fixture.comparator.is_dragging());
    }

    #[test]
    fn stale_completion_leaves_split_alone() {
        let mut fixture = Fixture::new();
        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(1)));
        fixture.controller.select_mode(EnhancementMode::Face);
        let pending = fixture.controller.begin_enhance().unwrap();
        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(2)));
        drag_split(&mut fixture.comparator);

        let _ = handle_enhance_completed(&mut fixture.ctx(), pending.generation, Ok(image(9)));
        assert!(fixture.controller.result().is_none());
        assert_eq!(fixture.comparator.position().value(), 10.0);
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let mut fixture = Fixture::new();
        let _ = handle_spinner_tick(&mut fixture.ctx());
        assert_eq!(fixture.loading.rotation(), 0.0);

        let _ = handle_image_loaded(&mut fixture.ctx(), Ok(image(1)));
        fixture.controller.select_mode(EnhancementMode::Face);
        let _ = fixture.controller.begin_enhance();
        let _ = handle_spinner_tick(&mut fixture.ctx());
        assert!(fixture.loading.rotation() > 0.0);
    }

    #[test]
    fn failed_download_raises_notice() {
        let mut fixture = Fixture::new();
        let _ = handle_download_completed(&mut fixture.ctx(), Err(Error::Io("denied".into())));
        assert_eq!(fixture.notice.as_deref(), Some("error-io"));
    }
}
