// SPDX-License-Identifier: MPL-2.0
//! Concrete placement of a toast inside its host.
//!
//! The presentation policy only says *where* a toast is anchored. Placement
//! resolves that against the measured viewport, the host's rectangle and the
//! platform safe-area insets.

use super::presentation::{layout_for, Anchor, Layout, PresentationMode};
use iced::{Padding, Rectangle, Size};

/// Measurements of the surface a toast is drawn over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Size of the visible window area.
    pub viewport: Size,
    /// Host view bounds, in viewport coordinates.
    pub host: Rectangle,
    /// Insets reserved by the platform (notches, status bars, home indicator).
    pub safe_area: Padding,
}

impl Metrics {
    /// Metrics for a host filling the whole window with no safe-area insets.
    #[must_use]
    pub fn for_window(size: Size) -> Self {
        Self {
            viewport: size,
            host: Rectangle::with_size(size),
            safe_area: Padding::ZERO,
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: Rectangle) -> Self {
        self.host = host;
        self
    }

    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Padding) -> Self {
        self.safe_area = safe_area;
        self
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::for_window(Size::new(800.0, 600.0))
    }
}

/// Where and how a toast is drawn for one presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub layout: Layout,
    /// Safe-area padding kept clear of.
    pub padding: Padding,
    /// Extra distance from the host's top edge, top-drop only.
    pub vertical_offset: f32,
}

impl Placement {
    /// Padding to apply around the toast, offset included.
    #[must_use]
    pub fn container_padding(&self) -> Padding {
        Padding {
            top: self.padding.top + self.vertical_offset,
            ..self.padding
        }
    }
}

/// Places a toast shown in `mode` over the measured host.
///
/// Top-drop toasts follow the visible top of the host: when the host is
/// scrolled above the viewport the HUD moves down with it, and only the
/// part of the top inset that overlaps the host is kept clear. `offset_y`
/// is added on top and the result stays inside the host.
#[must_use]
pub fn place(mode: PresentationMode, metrics: &Metrics, offset_y: f32) -> Placement {
    let layout = layout_for(mode);
    let mut padding = layout.edge_padding.resolve(metrics.safe_area);

    let vertical_offset = match layout.anchor {
        Anchor::Top => {
            let host = metrics.host;
            padding.top = (padding.top - host.y.max(0.0)).max(0.0);
            let hidden_above = (-host.y).max(0.0);
            (hidden_above + offset_y).clamp(0.0, host.height.max(0.0))
        }
        Anchor::Center | Anchor::Bottom => 0.0,
    };

    Placement {
        layout,
        padding,
        vertical_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use crate::toast::BannerTransition;

    fn phone() -> Metrics {
        Metrics::for_window(Size::new(390.0, 844.0)).with_safe_area(Padding {
            top: 47.0,
            right: 0.0,
            bottom: 34.0,
            left: 0.0,
        })
    }

    #[test]
    fn centered_ignores_insets_and_offset() {
        let placement = place(PresentationMode::Centered, &phone(), 25.0);
        assert_eq!(placement.padding, Padding::ZERO);
        assert_abs_diff_eq!(placement.vertical_offset, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn top_drop_clears_the_top_inset() {
        let placement = place(PresentationMode::TopDrop, &phone(), 0.0);
        assert_abs_diff_eq!(placement.padding.top, 47.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(placement.padding.bottom, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn top_drop_adds_configured_offset() {
        let placement = place(PresentationMode::TopDrop, &phone(), 12.0);
        assert_abs_diff_eq!(placement.vertical_offset, 12.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            placement.container_padding().top,
            59.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn top_drop_follows_host_scrolled_above_viewport() {
        let metrics = phone().with_host(Rectangle {
            x: 0.0,
            y: -200.0,
            width: 390.0,
            height: 1200.0,
        });

        let placement = place(PresentationMode::TopDrop, &metrics, 0.0);

        assert_abs_diff_eq!(placement.vertical_offset, 200.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(placement.padding.top, 47.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn top_drop_skips_inset_for_host_below_it() {
        let metrics = phone().with_host(Rectangle {
            x: 0.0,
            y: 100.0,
            width: 390.0,
            height: 300.0,
        });

        let placement = place(PresentationMode::TopDrop, &metrics, 0.0);

        assert_abs_diff_eq!(placement.padding.top, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn top_drop_offset_stays_inside_host() {
        let metrics = phone().with_host(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 390.0,
            height: 40.0,
        });

        let placement = place(PresentationMode::TopDrop, &metrics, 500.0);

        assert_abs_diff_eq!(placement.vertical_offset, 40.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn banners_clear_bottom_and_sides() {
        let metrics = phone().with_safe_area(Padding {
            top: 0.0,
            right: 44.0,
            bottom: 21.0,
            left: 44.0,
        });

        for transition in [BannerTransition::Slide, BannerTransition::Pop] {
            let placement = place(PresentationMode::BottomBanner(transition), &metrics, 30.0);
            assert_abs_diff_eq!(placement.padding.bottom, 21.0, epsilon = F32_EPSILON);
            assert_abs_diff_eq!(placement.padding.left, 44.0, epsilon = F32_EPSILON);
            assert_abs_diff_eq!(placement.vertical_offset, 0.0, epsilon = F32_EPSILON);
        }
    }
}
