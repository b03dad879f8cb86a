// SPDX-License-Identifier: MPL-2.0
//! Content of a single toast.
//!
//! A [`ToastRequest`] is built once and never mutated while shown; showing
//! different content means activating a new request.

use super::presentation::PresentationMode;
use iced::Color;

/// What the toast body shows next to its text.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentKind {
    /// Text only.
    Regular,
    /// Success checkmark.
    Complete { color: Option<Color> },
    /// Error cross.
    Error { color: Option<Color> },
    /// Named glyph from the built-in symbol table.
    SystemImage { name: String, color: Option<Color> },
    /// Image loaded from a file path.
    Image { name: String },
    /// Activity indicator. Never auto-dismisses and ignores taps.
    Loading,
}

impl ContentKind {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentKind::Loading)
    }
}

/// Fonts and colors for a toast. `None` fields use the theme defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToastStyle {
    pub background: Option<Color>,
    pub title_color: Option<Color>,
    pub subtitle_color: Option<Color>,
    pub title_size: Option<f32>,
    pub subtitle_size: Option<f32>,
    /// Color of the loading indicator.
    pub accent: Option<Color>,
}

/// Everything needed to show one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRequest {
    kind: ContentKind,
    title: Option<String>,
    subtitle: Option<String>,
    style: ToastStyle,
    mode: Option<PresentationMode>,
}

impl ToastRequest {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            title: None,
            subtitle: None,
            style: ToastStyle::default(),
            mode: None,
        }
    }

    pub fn regular(title: impl Into<String>) -> Self {
        Self::new(ContentKind::Regular).title(title)
    }

    pub fn complete(title: impl Into<String>) -> Self {
        Self::new(ContentKind::Complete { color: None }).title(title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ContentKind::Error { color: None }).title(title)
    }

    pub fn system_image(name: impl Into<String>, color: Option<Color>) -> Self {
        Self::new(ContentKind::SystemImage {
            name: name.into(),
            color,
        })
    }

    pub fn image(path: impl Into<String>) -> Self {
        Self::new(ContentKind::Image { name: path.into() })
    }

    pub fn loading() -> Self {
        Self::new(ContentKind::Loading)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: ToastStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: PresentationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &ContentKind {
        &self.kind
    }

    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn toast_style(&self) -> &ToastStyle {
        &self.style
    }

    /// Mode requested for this toast; `None` defers to the site's configuration.
    #[must_use]
    pub fn presentation(&self) -> Option<PresentationMode> {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::BannerTransition;

    #[test]
    fn builder_sets_every_field() {
        let style = ToastStyle {
            title_size: Some(18.0),
            ..ToastStyle::default()
        };
        let request = ToastRequest::complete("Saved")
            .subtitle("photo.png")
            .style(style)
            .mode(PresentationMode::BottomBanner(BannerTransition::Slide));

        assert_eq!(request.kind(), &ContentKind::Complete { color: None });
        assert_eq!(request.title_text(), Some("Saved"));
        assert_eq!(request.subtitle_text(), Some("photo.png"));
        assert_eq!(request.toast_style().title_size, Some(18.0));
        assert_eq!(
            request.presentation(),
            Some(PresentationMode::BottomBanner(BannerTransition::Slide))
        );
    }

    #[test]
    fn only_loading_reports_loading() {
        assert!(ToastRequest::loading().kind().is_loading());
        assert!(!ToastRequest::regular("hi").kind().is_loading());
        assert!(!ToastRequest::error("no").kind().is_loading());
    }

    #[test]
    fn image_carries_only_its_path() {
        let request = ToastRequest::image("assets/toast.png");
        assert_eq!(
            request.kind(),
            &ContentKind::Image {
                name: "assets/toast.png".to_string()
            }
        );
    }

    #[test]
    fn mode_is_left_to_the_site_unless_set() {
        assert_eq!(ToastRequest::system_image("info", None).presentation(), None);
    }
}
