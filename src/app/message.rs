// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::toast::{self, PresentationMode, ToastRequest};
use iced::Size;

/// Command-line overrides, applied on top of the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Explicit configuration file path (`--config`).
    pub config_path: Option<String>,
    /// Presentation mode override (`--mode`).
    pub mode: Option<PresentationMode>,
    /// Auto-dismiss duration override in seconds (`--duration`).
    pub duration: Option<f64>,
    /// Disables tap-to-dismiss (`--no-tap-dismiss`).
    pub no_tap_dismiss: bool,
}

/// Content kinds the gallery can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Regular,
    Complete,
    Error,
    SystemImage,
    Image,
}

impl Sample {
    pub const ALL: [Sample; 5] = [
        Sample::Regular,
        Sample::Complete,
        Sample::Error,
        Sample::SystemImage,
        Sample::Image,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sample::Regular => "Regular",
            Sample::Complete => "Complete",
            Sample::Error => "Error",
            Sample::SystemImage => "System image",
            Sample::Image => "Image",
        }
    }

    /// Builds the toast shown for this sample in `mode`.
    #[must_use]
    pub fn request(self, mode: PresentationMode) -> ToastRequest {
        let request = match self {
            Sample::Regular => ToastRequest::regular("Copied to clipboard"),
            Sample::Complete => ToastRequest::complete("Saved").subtitle("All changes written"),
            Sample::Error => ToastRequest::error("Upload failed").subtitle("Check your connection"),
            Sample::SystemImage => ToastRequest::system_image("star", None).title("Added to favorites"),
            Sample::Image => ToastRequest::image("assets/toast.png").title("Custom image"),
        };
        request.mode(mode)
    }
}

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a sample on the flag-bound site.
    Show(Sample),
    /// Flip the host-owned loading flag.
    ToggleLoading,
    /// Start the next upload on the item-bound site.
    StartUpload,
    /// Clear the upload binding.
    ClearUpload,
    SelectMode(PresentationMode),
    WindowResized(Size),
    Flag(toast::Message),
    Loading(toast::Message),
    Upload(toast::Message),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_use_the_selected_mode() {
        for sample in Sample::ALL {
            let request = sample.request(PresentationMode::TopDrop);
            assert_eq!(request.presentation(), Some(PresentationMode::TopDrop));
            assert!(!request.kind().is_loading());
        }
    }
}
