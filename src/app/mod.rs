// SPDX-License-Identifier: MPL-2.0
//! Toast gallery application.
//!
//! The gallery mounts three independent toast sites over one window:
//!
//! - samples: shown imperatively with [`Presenter::show`]
//! - loading: bound to a host-owned boolean with [`Presenter::bind_flag`]
//! - uploads: bound to an optional upload number with [`Presenter::bind`]
//!
//! Each site hands its countdown tasks back to the runtime after every update.

mod message;
mod view;

pub use message::{Flags, Message, Sample};

use crate::config::{self, ToastConfig};
use crate::toast::{
    Metrics, PresentationMode, Presenter, TaskScheduler, ToastDuration, ToastRequest,
};
use iced::{event, window, Subscription, Task};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::path::Path;
use std::rc::Rc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Tap and dismissal counts reported by the site callbacks.
#[derive(Debug, Default, Clone)]
pub struct Counters {
    pub taps: Rc<Cell<u32>>,
    pub dismissals: Rc<Cell<u32>>,
}

impl Counters {
    fn bump(counter: &Rc<Cell<u32>>) -> impl FnMut() + 'static {
        let counter = Rc::clone(counter);
        move || counter.set(counter.get() + 1)
    }
}

/// Root gallery state.
pub struct App {
    config: ToastConfig,
    mode: PresentationMode,
    metrics: Metrics,
    counters: Counters,
    samples: Presenter<(), TaskScheduler>,
    loading: bool,
    loading_site: Presenter<(), TaskScheduler>,
    upload: Option<u32>,
    uploads_started: u32,
    upload_site: Presenter<u32, TaskScheduler>,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("loading", &self.loading)
            .field("upload", &self.upload)
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}

/// Resolves the configuration file and applies command-line overrides.
///
/// Returns the configuration plus a warning when the file could not be used.
pub fn resolve_config(flags: &Flags) -> (ToastConfig, Option<String>) {
    let (config, warning) = match &flags.config_path {
        Some(path) => match config::load_from_path(Path::new(path)) {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!(%path, %err, "using default toast config");
                (config::Config::default(), Some(err.to_string()))
            }
        },
        None => config::load(),
    };

    let mut toast = config.toast;
    if let Some(mode) = flags.mode {
        toast.presentation = mode;
    }
    if let Some(secs) = flags.duration {
        toast.duration = ToastDuration::new(secs);
    }
    if flags.no_tap_dismiss {
        toast.tap_to_dismiss = false;
    }
    (toast, warning)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a reusable boot function; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window_size((WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = resolve_config(&flags);
        tracing::info!(
            mode = %config.presentation,
            duration_secs = config.duration.secs(),
            tap_to_dismiss = config.tap_to_dismiss,
            "starting toast gallery"
        );
        (Self::with_config(config, config_warning), Task::none())
    }

    /// Builds the gallery state for `config` without starting the runtime.
    #[must_use]
    pub fn with_config(config: ToastConfig, config_warning: Option<String>) -> Self {
        let counters = Counters::default();

        let samples = Presenter::new(config, TaskScheduler::new())
            .on_tap(Counters::bump(&counters.taps))
            .on_dismissed(Counters::bump(&counters.dismissals));
        let loading_site = Presenter::new(
            config.with_presentation(PresentationMode::Centered),
            TaskScheduler::new(),
        )
        .on_dismissed(Counters::bump(&counters.dismissals));
        let upload_site = Presenter::new(
            config.with_presentation(PresentationMode::TopDrop),
            TaskScheduler::new(),
        )
        .on_tap(Counters::bump(&counters.taps))
        .on_dismissed(Counters::bump(&counters.dismissals));

        Self {
            config,
            mode: config.presentation,
            metrics: Metrics::for_window(iced::Size::new(
                WINDOW_DEFAULT_WIDTH,
                WINDOW_DEFAULT_HEIGHT,
            )),
            counters,
            samples,
            loading: false,
            loading_site,
            upload: None,
            uploads_started: 0,
            upload_site,
            config_warning,
        }
    }

    fn title(&self) -> String {
        format!("Toast gallery - {}", self.mode)
    }

    /// Applies a message and returns the countdown work it produced.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(sample) => self.samples.show(sample.request(self.mode)),
            Message::ToggleLoading => {
                self.loading = !self.loading;
                self.loading_site.bind_flag(self.loading, || {
                    ToastRequest::loading().title("Working").subtitle("Tap does nothing")
                });
            }
            Message::StartUpload => {
                self.uploads_started += 1;
                self.upload = Some(self.uploads_started);
                self.upload_site.bind(self.upload, |n| {
                    ToastRequest::system_image("arrow.down", None)
                        .title(format!("Upload #{n} finished"))
                });
            }
            Message::ClearUpload => {
                self.upload = None;
                self.upload_site.unbind();
            }
            Message::SelectMode(mode) => self.mode = mode,
            Message::WindowResized(size) => self.metrics = Metrics::for_window(size),
            Message::Flag(message) => self.samples.update(message),
            Message::Loading(message) => self.loading_site.update(message),
            Message::Upload(message) => self.upload_site.update(message),
        }

        self.sync_bindings();

        Task::batch([
            self.samples.take_task().map(Message::Flag),
            self.loading_site.take_task().map(Message::Loading),
            self.upload_site.take_task().map(Message::Upload),
        ])
    }

    /// Clears the upload binding once its toast dismissed itself.
    ///
    /// The loading toast has no countdown and ignores taps, so only the host
    /// ever hides it.
    fn sync_bindings(&mut self) {
        if self.upload.is_some() && !self.upload_site.is_visible() {
            self.upload = None;
            self.upload_site.unbind();
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn counters(&self) -> &Counters {
        &self.counters
    }
}
