//! Header shadow and hero parallax, as pure functions of the scroll offset

/// Header shadow once the page has scrolled past the threshold
pub const HEADER_SHADOW_STRONG: &str = "0 4px 12px rgba(0, 0, 0, 0.15)";
/// Header shadow near the top of the page
pub const HEADER_SHADOW_LIGHT: &str = "0 2px 4px rgba(0, 0, 0, 0.1)";

/// Style changes produced by one scroll event
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEffects {
    pub header_shadow: &'static str,
    /// `None` leaves the hero transform at its last value
    pub hero_transform: Option<String>,
}

pub fn header_shadow(offset: f64, threshold: f64) -> &'static str {
    if offset > threshold {
        HEADER_SHADOW_STRONG
    } else {
        HEADER_SHADOW_LIGHT
    }
}

/// Hero transform while the hero is still within the first viewport
pub fn parallax_transform(offset: f64, viewport_height: f64, factor: f64) -> Option<String> {
    (offset < viewport_height).then(|| format!("translateY({}px)", offset * factor))
}

pub fn scroll_effects(
    offset: f64,
    viewport_height: f64,
    shadow_threshold: f64,
    parallax_factor: f64,
) -> ScrollEffects {
    ScrollEffects {
        header_shadow: header_shadow(offset, shadow_threshold),
        hero_transform: parallax_transform(offset, viewport_height, parallax_factor),
    }
}
