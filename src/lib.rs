// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient toast overlays (centered alert, top HUD,
//! bottom banner) over Iced views.
//!
//! The [`toast::Presenter`] owns each toast site's lifecycle: it shows a
//! request, schedules the auto-dismiss countdown, cancels it on re-trigger
//! or manual dismissal, and fires the dismissal callback exactly once per
//! presentation.

pub mod app;
pub mod config;
pub mod design_tokens;
pub mod error;
pub mod toast;

#[cfg(test)]
mod test_utils;

pub use config::ToastConfig;
pub use toast::{Presenter, ToastDuration, ToastRequest};
