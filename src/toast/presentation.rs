// SPDX-License-Identifier: MPL-2.0
//! Presentation modes and the layout facts derived from them.
//!
//! Every toast is shown in one of three presentations. The mapping from a
//! mode to its anchor, edge padding and transition is a pure function with
//! no state, see [`layout_for`].

use crate::config::CENTERED_ENTRY_SCALE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a bottom banner enters and leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerTransition {
    /// Slides in from the bottom while fading.
    Slide,
    /// Moves in from the bottom edge without fading.
    Pop,
}

/// Where a toast is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PresentationMode {
    /// Square alert in the middle of the host.
    #[default]
    Centered,
    /// Capsule HUD dropping from the top edge.
    TopDrop,
    /// Full-width banner along the bottom edge.
    BottomBanner(BannerTransition),
}

/// Point of the host the toast is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    Top,
    Bottom,
}

/// Which safe-area insets the toast keeps clear of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgePadding {
    pub top: bool,
    pub bottom: bool,
    pub horizontal: bool,
}

impl EdgePadding {
    pub const NONE: Self = Self {
        top: false,
        bottom: false,
        horizontal: false,
    };

    pub const TOP: Self = Self {
        top: true,
        bottom: false,
        horizontal: false,
    };

    pub const BOTTOM_AND_HORIZONTAL: Self = Self {
        top: false,
        bottom: true,
        horizontal: true,
    };

    /// Resolves the flags against concrete safe-area insets.
    #[must_use]
    pub fn resolve(self, insets: iced::Padding) -> iced::Padding {
        iced::Padding {
            top: if self.top { insets.top } else { 0.0 },
            bottom: if self.bottom { insets.bottom } else { 0.0 },
            left: if self.horizontal { insets.left } else { 0.0 },
            right: if self.horizontal { insets.right } else { 0.0 },
        }
    }
}

/// Movement part of an enter/exit transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Grows from `from` to full size.
    Scale { from: f32 },
    SlideFromTop,
    SlideFromBottom,
    /// Moves in from just past the bottom edge.
    MoveFromBottomEdge,
}

/// Enter/exit animation class handed to the host's animation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub motion: Motion,
    pub fade: bool,
}

/// Layout facts for one presentation mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub anchor: Anchor,
    pub edge_padding: EdgePadding,
    pub transition: Transition,
}

/// Maps a presentation mode to its layout. Total over every mode.
#[must_use]
pub fn layout_for(mode: PresentationMode) -> Layout {
    match mode {
        PresentationMode::Centered => Layout {
            anchor: Anchor::Center,
            edge_padding: EdgePadding::NONE,
            transition: Transition {
                motion: Motion::Scale {
                    from: CENTERED_ENTRY_SCALE,
                },
                fade: true,
            },
        },
        PresentationMode::TopDrop => Layout {
            anchor: Anchor::Top,
            edge_padding: EdgePadding::TOP,
            transition: Transition {
                motion: Motion::SlideFromTop,
                fade: true,
            },
        },
        PresentationMode::BottomBanner(BannerTransition::Slide) => Layout {
            anchor: Anchor::Bottom,
            edge_padding: EdgePadding::BOTTOM_AND_HORIZONTAL,
            transition: Transition {
                motion: Motion::SlideFromBottom,
                fade: true,
            },
        },
        PresentationMode::BottomBanner(BannerTransition::Pop) => Layout {
            anchor: Anchor::Bottom,
            edge_padding: EdgePadding::BOTTOM_AND_HORIZONTAL,
            transition: Transition {
                motion: Motion::MoveFromBottomEdge,
                fade: false,
            },
        },
    }
}

impl PresentationMode {
    /// All modes, in the order the gallery lists them.
    pub const ALL: [PresentationMode; 4] = [
        PresentationMode::Centered,
        PresentationMode::TopDrop,
        PresentationMode::BottomBanner(BannerTransition::Slide),
        PresentationMode::BottomBanner(BannerTransition::Pop),
    ];

    #[must_use]
    pub fn layout(self) -> Layout {
        layout_for(self)
    }

    /// Kebab-case name used in config files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PresentationMode::Centered => "centered",
            PresentationMode::TopDrop => "top-drop",
            PresentationMode::BottomBanner(BannerTransition::Slide) => "banner-slide",
            PresentationMode::BottomBanner(BannerTransition::Pop) => "banner-pop",
        }
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresentationMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "centered" | "alert" => Ok(PresentationMode::Centered),
            "top-drop" | "hud" => Ok(PresentationMode::TopDrop),
            "banner-slide" | "banner" => Ok(PresentationMode::BottomBanner(BannerTransition::Slide)),
            "banner-pop" => Ok(PresentationMode::BottomBanner(BannerTransition::Pop)),
            other => Err(format!("invalid presentation mode: {}", other)),
        }
    }
}

impl TryFrom<String> for PresentationMode {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<PresentationMode> for String {
    fn from(mode: PresentationMode) -> Self {
        mode.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_scales_and_fades_from_center() {
        let layout = layout_for(PresentationMode::Centered);
        assert_eq!(layout.anchor, Anchor::Center);
        assert_eq!(layout.edge_padding, EdgePadding::NONE);
        assert_eq!(layout.transition.motion, Motion::Scale { from: 0.8 });
        assert!(layout.transition.fade);
    }

    #[test]
    fn top_drop_slides_from_top_with_top_inset() {
        let layout = layout_for(PresentationMode::TopDrop);
        assert_eq!(layout.anchor, Anchor::Top);
        assert_eq!(layout.edge_padding, EdgePadding::TOP);
        assert_eq!(layout.transition.motion, Motion::SlideFromTop);
        assert!(layout.transition.fade);
    }

    #[test]
    fn banners_share_anchor_and_padding() {
        let slide = layout_for(PresentationMode::BottomBanner(BannerTransition::Slide));
        let pop = layout_for(PresentationMode::BottomBanner(BannerTransition::Pop));

        assert_eq!(slide.anchor, Anchor::Bottom);
        assert_eq!(slide.anchor, pop.anchor);
        assert_eq!(slide.edge_padding, pop.edge_padding);
        assert_eq!(slide.edge_padding, EdgePadding::BOTTOM_AND_HORIZONTAL);
    }

    #[test]
    fn only_pop_banner_skips_the_fade() {
        for mode in PresentationMode::ALL {
            let fades = layout_for(mode).transition.fade;
            let is_pop = mode == PresentationMode::BottomBanner(BannerTransition::Pop);
            assert_eq!(fades, !is_pop, "{mode}");
        }
        assert_eq!(
            layout_for(PresentationMode::BottomBanner(BannerTransition::Pop))
                .transition
                .motion,
            Motion::MoveFromBottomEdge
        );
    }

    #[test]
    fn edge_padding_keeps_only_selected_insets() {
        let insets = iced::Padding {
            top: 20.0,
            right: 4.0,
            bottom: 34.0,
            left: 6.0,
        };

        let banner = EdgePadding::BOTTOM_AND_HORIZONTAL.resolve(insets);
        assert_eq!(banner.top, 0.0);
        assert_eq!(banner.bottom, 34.0);
        assert_eq!(banner.left, 6.0);
        assert_eq!(banner.right, 4.0);

        let none = EdgePadding::NONE.resolve(insets);
        assert_eq!(none, iced::Padding::ZERO);
    }

    #[test]
    fn names_parse_back_to_the_same_mode() {
        for mode in PresentationMode::ALL {
            assert_eq!(mode.as_str().parse::<PresentationMode>(), Ok(mode));
        }
        assert_eq!("hud".parse(), Ok(PresentationMode::TopDrop));
        assert!("sideways".parse::<PresentationMode>().is_err());
    }
}
