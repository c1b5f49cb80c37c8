// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the [`controller::Controller`] state machine to the
//! UI components and to the enhancement service, and translates messages
//! into side effects like file dialogs, image loading and remote calls.

pub mod config;
pub mod controller;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::EnhancementService;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::comparator::{self, ImagePreview};
use crate::ui::loading;
use controller::Controller;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: Controller,
    comparator: comparator::State,
    loading: loading::State,
    original_preview: ImagePreview,
    result_preview: ImagePreview,
    service: Arc<dyn EnhancementService>,
    theme: Theme,
    status_interval: Duration,
    /// Warning banner (i18n key), dismissible.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.controller.phase())
            .field("generation", &self.controller.generation())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, service: Arc<dyn EnhancementService>) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a Fn boot function; the flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, Arc::clone(&service))
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally starts loading the image
    /// passed on the command line.
    pub fn new(flags: Flags, service: Arc<dyn EnhancementService>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &flags.config);

        let app = App {
            i18n,
            controller: Controller::new(),
            comparator: comparator::State::new(),
            loading: loading::State::default(),
            original_preview: ImagePreview::default(),
            result_preview: ImagePreview::default(),
            service,
            theme: flags.config.general.theme_mode.to_theme(),
            status_interval: flags.config.loading.status_interval(),
            notice: flags.config_warning,
        };

        let task = match flags.file_path {
            Some(argument) => Task::perform(
                async move { media::payload_from_argument(&argument) },
                Message::ImageLoaded,
            ),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_file_drop_subscription(),
            subscription::create_loading_subscription(
                self.controller.is_loading(),
                self.status_interval,
            ),
            self.comparator.subscription().map(Message::Comparator),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let dialog_titles = update::DialogTitles {
            open: self.i18n.tr("dialog-open-title"),
            save: self.i18n.tr("dialog-save-title"),
            filter: self.i18n.tr("dialog-filter-images"),
        };
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            comparator: &mut self.comparator,
            loading: &mut self.loading,
            notice: &mut self.notice,
            service: &self.service,
            dialog_titles,
        };

        let task = match message {
            Message::Upload(message) => update::handle_upload_message(&mut ctx, message),
            Message::ModeSelector(message) => {
                update::handle_mode_selector_message(&mut ctx, message)
            }
            Message::Actions(message) => update::handle_action_message(&mut ctx, message),
            Message::Comparator(message) => update::handle_comparator_message(&mut ctx, message),
            Message::OpenFileDialogResult(path) => update::handle_open_path(path),
            Message::FileDropped(path) => update::handle_open_path(Some(path)),
            Message::ImageLoaded(result) => update::handle_image_loaded(&mut ctx, result),
            Message::EnhanceCompleted { generation, result } => {
                update::handle_enhance_completed(&mut ctx, generation, result)
            }
            Message::SaveDialogResult(path) => update::handle_save_path(&mut ctx, path),
            Message::DownloadCompleted(result) => {
                update::handle_download_completed(&mut ctx, result)
            }
            Message::StatusTick => update::handle_status_tick(&mut ctx),
            Message::SpinnerTick => update::handle_spinner_tick(&mut ctx),
            Message::DismissNotice => {
                *ctx.notice = None;
                Task::none()
            }
        };

        self.original_preview.sync(self.controller.original());
        self.result_preview.sync(self.controller.result());

        task
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            comparator: &self.comparator,
            loading: &self.loading,
            original: &self.original_preview,
            enhanced: &self.result_preview,
            notice: self.notice.as_deref(),
        })
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}
