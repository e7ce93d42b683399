//! Tab bar iconography
//!
//! Pure lookups: the icon for a destination depends on the destination, the
//! focus state, and for a few destinations the experience mode.

use crate::navigation::Destination;
use storage::ExperienceMode;

/// Opacity of an unfocused single-glyph icon
const UNFOCUSED_OPACITY: f32 = 0.8;

/// Icon to draw for a tab
#[derive(Debug, Clone, PartialEq)]
pub enum TabIcon {
    /// A named glyph from the material icon set
    Glyph {
        /// Glyph name
        name: &'static str,
        /// Opacity (0.0 - 1.0)
        opacity: f32,
    },
    /// Three stars arranged in an arc; left, center, right
    Stars {
        /// Per-star opacity
        opacities: [f32; 3],
    },
    /// Mode-specific image with a glyph to use if the image fails to load
    Image {
        /// Image asset path
        source: &'static str,
        /// Glyph used when the asset is unavailable
        fallback: &'static str,
        /// Opacity (0.0 - 1.0)
        opacity: f32,
    },
}

impl TabIcon {
    /// The glyph to draw when images cannot be rendered
    pub fn fallback_glyph(&self) -> Option<TabIcon> {
        match self {
            TabIcon::Image { fallback, opacity, .. } => {
                Some(TabIcon::Glyph { name: fallback, opacity: *opacity })
            }
            _ => None,
        }
    }
}

/// Star opacities for the challenges glyph
pub fn challenge_star_opacities(focused: bool) -> [f32; 3] {
    if focused {
        [1.0, 0.9, 0.8]
    } else {
        [1.0, 0.7, 0.4]
    }
}

/// Avatar image shown on the circles tab for a mode
pub fn circle_image(mode: ExperienceMode) -> &'static str {
    match mode {
        ExperienceMode::Green => "assets/Men.png",
        ExperienceMode::Thread => "assets/Women.png",
    }
}

fn focus_opacity(focused: bool) -> f32 {
    if focused {
        1.0
    } else {
        UNFOCUSED_OPACITY
    }
}

/// Icon for a destination
pub fn tab_icon(destination: Destination, mode: ExperienceMode, focused: bool) -> TabIcon {
    match destination {
        Destination::Feed => TabIcon::Glyph { name: "home", opacity: 1.0 },
        Destination::Search => TabIcon::Glyph { name: "search", opacity: 1.0 },
        Destination::Profile => TabIcon::Glyph { name: "person", opacity: 1.0 },
        Destination::Rooms => {
            TabIcon::Glyph { name: "meeting-room", opacity: focus_opacity(focused) }
        }
        Destination::Challenges => TabIcon::Stars { opacities: challenge_star_opacities(focused) },
        Destination::Circles => TabIcon::Image {
            source: circle_image(mode),
            fallback: "group",
            opacity: focus_opacity(focused),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_opacities_shift_with_focus() {
        assert_eq!(challenge_star_opacities(true), [1.0, 0.9, 0.8]);
        assert_eq!(challenge_star_opacities(false), [1.0, 0.7, 0.4]);
    }

    #[test]
    fn test_circle_image_per_mode() {
        assert_ne!(
            circle_image(ExperienceMode::Green),
            circle_image(ExperienceMode::Thread)
        );
        match tab_icon(Destination::Circles, ExperienceMode::Thread, false) {
            TabIcon::Image { source, fallback, opacity } => {
                assert_eq!(source, "assets/Women.png");
                assert_eq!(fallback, "group");
                assert_eq!(opacity, 0.8);
            }
            other => panic!("unexpected icon {:?}", other),
        }
    }

    #[test]
    fn test_image_fallback_glyph() {
        let icon = tab_icon(Destination::Circles, ExperienceMode::Green, true);
        assert_eq!(
            icon.fallback_glyph(),
            Some(TabIcon::Glyph { name: "group", opacity: 1.0 })
        );
        assert_eq!(tab_icon(Destination::Feed, ExperienceMode::Green, true).fallback_glyph(), None);
    }

    #[test]
    fn test_plain_glyphs_ignore_mode() {
        for dest in [Destination::Feed, Destination::Search, Destination::Profile, Destination::Rooms] {
            for focused in [true, false] {
                assert_eq!(
                    tab_icon(dest, ExperienceMode::Green, focused),
                    tab_icon(dest, ExperienceMode::Thread, focused)
                );
            }
        }
    }

    #[test]
    fn test_rooms_dims_when_unfocused() {
        assert_eq!(
            tab_icon(Destination::Rooms, ExperienceMode::Green, false),
            TabIcon::Glyph { name: "meeting-room", opacity: 0.8 }
        );
    }
}
