// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! A [`Presenter`] is mounted once per toast site and loops through
//! presentation cycles for as long as the site exists:
//!
//! ```text
//!  INERT --activate--> VISIBLE --{countdown | tap | deactivate}--> INERT
//!  VISIBLE --activate--> VISIBLE   (content swapped, countdown restarted)
//! ```
//!
//! Every transition cancels the pending countdown before anything else, so
//! exactly one dismissal path can win a cycle and `on_dismissed` fires once
//! per cycle.
//!
//! The presenter is generic over the bound value `T`. A boolean binding is
//! `T = ()`; an item binding carries the item that was presented.

use super::countdown::{CountdownId, ManualScheduler, Scheduler, TaskScheduler};
use super::duration::ToastDuration;
use super::presentation::{Layout, PresentationMode};
use super::request::ToastRequest;
use crate::config::ToastConfig;
use iced::Task;
use std::fmt;
use std::time::Duration;

type Callback = Box<dyn FnMut()>;

/// Messages routed back to a presenter from its overlay and countdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The toast body was tapped.
    Tapped,
    /// A countdown came due.
    Expired(CountdownId),
}

/// What ended a presentation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Timer,
    Tap,
    /// The host cleared the binding.
    External,
}

struct PendingCountdown<H> {
    id: CountdownId,
    handle: H,
}

/// Settings in force for the current cycle, after content overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CycleSettings {
    duration: ToastDuration,
    tap_to_dismiss: bool,
}

impl CycleSettings {
    fn resolve(config: &ToastConfig, request: &ToastRequest) -> Self {
        if request.kind().is_loading() {
            Self {
                duration: ToastDuration::DISABLED,
                tap_to_dismiss: false,
            }
        } else {
            Self {
                duration: config.duration,
                tap_to_dismiss: config.tap_to_dismiss,
            }
        }
    }
}

struct Session<T, H> {
    current: Option<(T, ToastRequest)>,
    /// Host value last passed to `bind`; edges are detected against it.
    bound: Option<T>,
    settings: CycleSettings,
    pending: Option<PendingCountdown<H>>,
    completion_armed: bool,
}

/// Lifecycle controller for one toast site.
pub struct Presenter<T, S: Scheduler> {
    config: ToastConfig,
    scheduler: S,
    session: Session<T, S::Handle>,
    next_countdown: CountdownId,
    last_dismissal: Option<DismissReason>,
    on_tap: Option<Callback>,
    on_dismissed: Option<Callback>,
}

impl<T, S: Scheduler> Presenter<T, S> {
    /// Mounts an inert toast site.
    pub fn new(config: ToastConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            session: Session {
                current: None,
                bound: None,
                settings: CycleSettings {
                    duration: config.duration,
                    tap_to_dismiss: config.tap_to_dismiss,
                },
                pending: None,
                completion_armed: false,
            },
            next_countdown: CountdownId::first(),
            last_dismissal: None,
            on_tap: None,
            on_dismissed: None,
        }
    }

    /// Called on every tap, before any dismissal.
    #[must_use]
    pub fn on_tap(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    /// Called once at the end of each presentation cycle.
    #[must_use]
    pub fn on_dismissed(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_dismissed = Some(Box::new(callback));
        self
    }

    /// Shows `request` for `item`.
    ///
    /// Activating while visible swaps the content and restarts the
    /// countdown; the current cycle continues and `on_dismissed` does not
    /// fire for the replaced content.
    pub fn activate(&mut self, item: T, request: ToastRequest) {
        self.cancel_pending();

        let settings = CycleSettings::resolve(&self.config, &request);
        let reactivated = self.session.current.is_some();
        self.session.settings = settings;
        self.session.current = Some((item, request));
        self.session.completion_armed = true;

        if let Some(delay) = settings.duration.as_delay() {
            self.start_countdown(delay);
        }

        tracing::debug!(
            reactivated,
            duration_secs = settings.duration.secs(),
            tap_to_dismiss = settings.tap_to_dismiss,
            mode = %self.presentation(),
            "toast activated"
        );
    }

    /// Handles a tap on the toast body. No-op while hidden.
    pub fn handle_tap(&mut self) {
        if self.session.current.is_none() {
            return;
        }

        if let Some(on_tap) = self.on_tap.as_mut() {
            on_tap();
        }

        if self.session.settings.tap_to_dismiss {
            self.dismiss(DismissReason::Tap);
        }
    }

    /// Delivers a countdown. Cancelled or superseded countdowns are ignored.
    pub fn expire(&mut self, countdown: CountdownId) {
        let is_pending = self
            .session
            .pending
            .as_ref()
            .is_some_and(|pending| pending.id == countdown);
        if !is_pending {
            tracing::trace!(%countdown, "ignoring stale countdown");
            return;
        }

        // Already delivered; nothing left to cancel.
        self.session.pending = None;
        self.dismiss(DismissReason::Timer);
    }

    /// Hides the toast because the host cleared its binding. Idempotent.
    pub fn deactivate(&mut self) {
        self.dismiss(DismissReason::External);
    }

    /// Routes an overlay or countdown message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tapped => self.handle_tap(),
            Message::Expired(countdown) => self.expire(countdown),
        }
    }

    fn dismiss(&mut self, reason: DismissReason) {
        self.cancel_pending();

        if self.session.current.take().is_none() {
            return;
        }
        self.last_dismissal = Some(reason);
        tracing::debug!(?reason, "toast dismissed");

        if std::mem::take(&mut self.session.completion_armed) {
            if let Some(on_dismissed) = self.on_dismissed.as_mut() {
                on_dismissed();
            }
        }
    }

    fn start_countdown(&mut self, delay: Duration) {
        let id = self.next_countdown;
        self.next_countdown = id.next();
        let handle = self.scheduler.schedule_after(delay, id);
        tracing::trace!(countdown = %id, ?delay, "countdown scheduled");
        self.session.pending = Some(PendingCountdown { id, handle });
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.session.pending.take() {
            tracing::trace!(countdown = %pending.id, "countdown cancelled");
            self.scheduler.cancel(pending.handle);
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.session.current.is_some()
    }

    /// The presented item, if visible.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.session.current.as_ref().map(|(item, _)| item)
    }

    /// The request being shown, if visible.
    #[must_use]
    pub fn request(&self) -> Option<&ToastRequest> {
        self.session.current.as_ref().map(|(_, request)| request)
    }

    /// Mode of the visible request, falling back to the site's configuration.
    #[must_use]
    pub fn presentation(&self) -> PresentationMode {
        self.request()
            .and_then(ToastRequest::presentation)
            .unwrap_or(self.config.presentation)
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.presentation().layout()
    }

    /// Duration in force for the current cycle.
    #[must_use]
    pub fn effective_duration(&self) -> ToastDuration {
        self.session.settings.duration
    }

    /// Whether a tap dismisses the toast in the current cycle.
    #[must_use]
    pub fn tap_to_dismiss(&self) -> bool {
        self.session.settings.tap_to_dismiss
    }

    /// Whether a countdown is currently pending.
    #[must_use]
    pub fn has_pending_countdown(&self) -> bool {
        self.session.pending.is_some()
    }

    /// What ended the most recent cycle.
    #[must_use]
    pub fn last_dismissal(&self) -> Option<DismissReason> {
        self.last_dismissal
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<T: PartialEq + Clone, S: Scheduler> Presenter<T, S> {
    /// Follows an optional-item binding.
    ///
    /// Only changes of the host value count: `None -> Some` activates,
    /// `Some -> None` deactivates, and a different item re-activates.
    /// Binding the value passed last time does nothing, even when the toast
    /// has since dismissed itself by countdown or tap.
    pub fn bind(&mut self, value: Option<T>, make_request: impl FnOnce(&T) -> ToastRequest) {
        let Some(item) = value else {
            self.unbind();
            return;
        };
        if self.session.bound.as_ref() == Some(&item) {
            return;
        }

        self.session.bound = Some(item.clone());
        let request = make_request(&item);
        self.activate(item, request);
    }

    /// Clears the binding, hiding the toast if it is still visible.
    pub fn unbind(&mut self) {
        if self.session.bound.take().is_some() {
            self.deactivate();
        }
    }
}

impl<S: Scheduler> Presenter<(), S> {
    /// Follows a boolean binding. Only edges change state.
    pub fn bind_flag(&mut self, presented: bool, make_request: impl FnOnce() -> ToastRequest) {
        self.bind(presented.then_some(()), |()| make_request());
    }

    /// Shows `request` on a boolean-bound site.
    pub fn show(&mut self, request: ToastRequest) {
        self.activate((), request);
    }
}

impl<T> Presenter<T, ManualScheduler> {
    /// Advances the virtual clock, delivering countdowns that come due.
    pub fn advance(&mut self, by: Duration) {
        for countdown in self.scheduler.advance(by) {
            self.expire(countdown);
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }
}

impl<T> Presenter<T, TaskScheduler> {
    /// Countdown work to return from the host's `update`.
    pub fn take_task(&mut self) -> Task<Message> {
        self.scheduler.take_task().map(Message::Expired)
    }
}

impl<T: fmt::Debug, S: Scheduler + fmt::Debug> fmt::Debug for Presenter<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("config", &self.config)
            .field("current", &self.session.current)
            .field("bound", &self.session.bound)
            .field("settings", &self.session.settings)
            .field("pending", &self.session.pending.as_ref().map(|p| p.id))
            .field("completion_armed", &self.session.completion_armed)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
