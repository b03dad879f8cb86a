// SPDX-License-Identifier: MPL-2.0
//! Transient toast overlays.
//!
//! A toast is a short, non-blocking message drawn over the host view. It
//! disappears on its own after a configured duration, when tapped, or when
//! the host clears its binding.
//!
//! # Components
//!
//! - [`presentation`] - Presentation modes and their anchor/padding/transition
//! - [`request`] - `ToastRequest` content and styling
//! - [`presenter`] - `Presenter` lifecycle controller, one per toast site
//! - [`countdown`] - Auto-dismiss schedulers
//! - [`placement`] - Resolves a mode against host measurements
//! - [`view`] - Rendering and the overlay widget
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{self, Presenter, TaskScheduler, ToastRequest};
//!
//! // Mount a site
//! let mut site = Presenter::new(ToastConfig::default(), TaskScheduler::new());
//!
//! // In update: show a toast and hand its countdown to the runtime
//! site.show(ToastRequest::complete("Saved"));
//! return site.take_task().map(Message::Toast);
//!
//! // In view
//! toast::overlay(content, &site, &StandardRenderer, &metrics, Message::Toast(toast::Message::Tapped))
//! ```

pub mod countdown;
pub mod duration;
pub mod placement;
pub mod presentation;
pub mod presenter;
pub mod request;
pub mod view;

pub use countdown::{CountdownId, ManualScheduler, Scheduler, TaskScheduler};
pub use duration::ToastDuration;
pub use placement::{place, Metrics, Placement};
pub use presentation::{
    layout_for, Anchor, BannerTransition, EdgePadding, Layout, Motion, PresentationMode, Transition,
};
pub use presenter::{DismissReason, Message, Presenter};
pub use request::{ContentKind, ToastRequest, ToastStyle};
pub use view::{overlay, ContentRenderer, StandardRenderer};
