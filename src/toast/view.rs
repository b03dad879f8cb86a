// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! The lifecycle never looks inside a toast body. Bodies come from a
//! [`ContentRenderer`]; [`overlay`] only positions the rendered body over the
//! host and turns clicks on it into the host's tap message.

use super::countdown::Scheduler;
use super::placement::{place, Metrics};
use super::presentation::{Anchor, PresentationMode};
use super::presenter::Presenter;
use super::request::{ContentKind, ToastRequest, ToastStyle};
use crate::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, mouse_area, text, Column, Container, Row, Stack};
use iced::{Color, Element, Length, Theme};

/// Produces the visual body of a toast.
pub trait ContentRenderer {
    fn render<'a, M: 'a>(&self, request: &'a ToastRequest, mode: PresentationMode)
        -> Element<'a, M>;
}

/// Built-in renderer: glyph, title and subtitle laid out per presentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRenderer;

impl ContentRenderer for StandardRenderer {
    fn render<'a, M: 'a>(
        &self,
        request: &'a ToastRequest,
        mode: PresentationMode,
    ) -> Element<'a, M> {
        let style = *request.toast_style();
        let glyph_size = match mode {
            PresentationMode::Centered => sizing::GLYPH_ALERT,
            PresentationMode::TopDrop | PresentationMode::BottomBanner(_) => {
                sizing::GLYPH_INLINE
            }
        };
        let glyph = glyph(request.kind(), glyph_size, &style);
        let texts = labels(request, &style, mode);

        match mode {
            PresentationMode::Centered => {
                let mut body = Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center);
                if let Some(glyph) = glyph {
                    body = body.push(glyph);
                }
                let body = body.push(texts);
                Container::new(body)
                    .width(Length::Fixed(sizing::ALERT_MIN))
                    .height(Length::Fixed(sizing::ALERT_MIN))
                    .padding(spacing::MD)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .style(move |theme: &Theme| surface_style(theme, &style, radius::LG))
                    .into()
            }
            PresentationMode::TopDrop => {
                let body = inline_body(glyph, texts, spacing::XS);
                Container::new(body)
                    .max_width(sizing::HUD_MAX_WIDTH)
                    .padding([spacing::XS, spacing::LG])
                    .style(move |theme: &Theme| surface_style(theme, &style, radius::FULL))
                    .into()
            }
            PresentationMode::BottomBanner(_) => {
                let body = inline_body(glyph, texts, spacing::SM);
                Container::new(body)
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(move |theme: &Theme| surface_style(theme, &style, radius::MD))
                    .into()
            }
        }
    }
}

/// Stacks the presenter's toast over `base`.
///
/// Clicks on the toast body emit `on_tap`; route it to
/// [`Presenter::handle_tap`]. A hidden presenter returns `base` unchanged.
pub fn overlay<'a, M, T, S, R>(
    base: impl Into<Element<'a, M>>,
    presenter: &'a Presenter<T, S>,
    renderer: &R,
    metrics: &Metrics,
    on_tap: M,
) -> Element<'a, M>
where
    M: Clone + 'a,
    S: Scheduler,
    R: ContentRenderer,
{
    let Some(request) = presenter.request() else {
        return base.into();
    };

    let mode = presenter.presentation();
    let placement = place(mode, metrics, presenter.config().offset_y);
    let (align_x, align_y) = anchor_alignment(placement.layout.anchor);

    let mut padding = placement.container_padding();
    if let PresentationMode::BottomBanner(_) = mode {
        padding.left += spacing::SM;
        padding.right += spacing::SM;
        padding.bottom += spacing::SM;
    }

    let body = mouse_area(renderer.render(request, mode)).on_press(on_tap);
    let layer = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding)
        .align_x(align_x)
        .align_y(align_y);

    Stack::new().push(base).push(layer).into()
}

/// Container alignment that pins a toast to `anchor`.
#[must_use]
pub fn anchor_alignment(anchor: Anchor) -> (Horizontal, Vertical) {
    match anchor {
        Anchor::Center => (Horizontal::Center, Vertical::Center),
        Anchor::Top => (Horizontal::Center, Vertical::Top),
        Anchor::Bottom => (Horizontal::Center, Vertical::Bottom),
    }
}

/// Maps a system image name to a glyph from the bundled font.
#[must_use]
pub fn symbol_for(name: &str) -> &'static str {
    match name {
        "checkmark" | "checkmark.circle" => "✓",
        "xmark" | "xmark.circle" => "✕",
        "info" | "info.circle" => "ℹ",
        "exclamationmark.triangle" | "warning" => "⚠",
        "star" | "star.fill" => "★",
        "heart" | "heart.fill" => "♥",
        "arrow.down" | "square.and.arrow.down" => "↓",
        _ => "●",
    }
}

const LOADING_GLYPH: &str = "◌";

fn glyph<'a, M: 'a>(
    kind: &'a ContentKind,
    size: f32,
    style: &ToastStyle,
) -> Option<Element<'a, M>> {
    let symbol = |glyph: &'a str, color: Color| -> Element<'a, M> {
        text(glyph).size(size).color(color).into()
    };

    match kind {
        ContentKind::Regular => None,
        ContentKind::Complete { color } => {
            Some(symbol("✓", color.unwrap_or(palette::SUCCESS_500)))
        }
        ContentKind::Error { color } => Some(symbol("✕", color.unwrap_or(palette::ERROR_500))),
        ContentKind::SystemImage { name, color } => Some(symbol(
            symbol_for(name),
            color.unwrap_or(palette::INFO_500),
        )),
        ContentKind::Image { name } => Some(
            image(image::Handle::from_path(name))
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .into(),
        ),
        ContentKind::Loading => Some(symbol(
            LOADING_GLYPH,
            style.accent.unwrap_or(palette::GRAY_400),
        )),
    }
}

fn labels<'a, M: 'a>(
    request: &'a ToastRequest,
    style: &ToastStyle,
    mode: PresentationMode,
) -> Element<'a, M> {
    let (title_size, align) = match mode {
        PresentationMode::Centered => (typography::TITLE, Horizontal::Center),
        PresentationMode::TopDrop | PresentationMode::BottomBanner(_) => {
            (typography::BODY, Horizontal::Left)
        }
    };

    let title = request.title_text().map(|title| {
        let mut label = text(title).size(style.title_size.unwrap_or(title_size));
        if let Some(color) = style.title_color {
            label = label.color(color);
        }
        label
    });
    let subtitle = request.subtitle_text().map(|subtitle| {
        let mut label = text(subtitle).size(style.subtitle_size.unwrap_or(typography::CAPTION));
        if let Some(color) = style.subtitle_color {
            label = label.color(color);
        }
        label
    });

    let mut column = Column::new().spacing(spacing::XXS).align_x(align);
    if let Some(title) = title {
        column = column.push(title);
    }
    if let Some(subtitle) = subtitle {
        column = column.push(subtitle);
    }
    column.into()
}

fn inline_body<'a, M: 'a>(
    glyph: Option<Element<'a, M>>,
    texts: Element<'a, M>,
    gap: f32,
) -> Row<'a, M> {
    let mut row = Row::new().spacing(gap).align_y(Vertical::Center);
    if let Some(glyph) = glyph {
        row = row.push(glyph);
    }
    row.push(texts)
}

fn surface_style(theme: &Theme, style: &ToastStyle, corner_radius: f32) -> container::Style {
    let background = style.background.unwrap_or(Color {
        a: opacity::SURFACE,
        ..theme.extended_palette().background.weak.color
    });

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: corner_radius.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use crate::toast::{BannerTransition, ManualScheduler};

    #[test]
    fn anchors_map_to_container_alignment() {
        assert_eq!(
            anchor_alignment(Anchor::Center),
            (Horizontal::Center, Vertical::Center)
        );
        assert_eq!(
            anchor_alignment(Anchor::Top),
            (Horizontal::Center, Vertical::Top)
        );
        assert_eq!(
            anchor_alignment(Anchor::Bottom),
            (Horizontal::Center, Vertical::Bottom)
        );
    }

    #[test]
    fn unknown_symbols_fall_back_to_a_dot() {
        assert_eq!(symbol_for("checkmark"), "✓");
        assert_eq!(symbol_for("no.such.symbol"), "●");
    }

    #[test]
    fn surface_style_prefers_request_background() {
        let style = ToastStyle {
            background: Some(palette::INFO_500),
            ..ToastStyle::default()
        };
        let surface = surface_style(&Theme::Dark, &style, radius::MD);
        assert_eq!(
            surface.background,
            Some(iced::Background::Color(palette::INFO_500))
        );
    }

    #[test]
    fn every_kind_renders_in_every_mode() {
        let requests = [
            ToastRequest::regular("plain"),
            ToastRequest::complete("done").subtitle("saved"),
            ToastRequest::error("failed"),
            ToastRequest::system_image("star", None).title("starred"),
            ToastRequest::image("missing.png").title("picture"),
            ToastRequest::loading().title("working"),
        ];

        for mode in PresentationMode::ALL {
            for request in &requests {
                let _element: Element<'_, ()> = StandardRenderer.render(request, mode);
            }
        }
    }

    #[test]
    fn overlay_builds_for_visible_and_hidden_sites() {
        let mut presenter: Presenter<(), ManualScheduler> = Presenter::new(
            ToastConfig::default()
                .with_presentation(PresentationMode::BottomBanner(BannerTransition::Slide)),
            ManualScheduler::new(),
        );
        let metrics = Metrics::default();

        {
            let _hidden: Element<'_, ()> =
                overlay(text("host"), &presenter, &StandardRenderer, &metrics, ());
        }

        presenter.show(ToastRequest::regular("visible"));
        let _shown: Element<'_, ()> =
            overlay(text("host"), &presenter, &StandardRenderer, &metrics, ());
    }
}
