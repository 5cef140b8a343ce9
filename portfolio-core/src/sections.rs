//! Scroll geometry: which section is under the probe line, where a nav link
//! should scroll to, and how the navbar looks at a given offset.

use crate::constants::{
    NAVBAR_BLUR_SCROLLED, NAVBAR_BLUR_TOP, NAVBAR_DARK_SCROLLED, NAVBAR_DARK_TOP,
    NAVBAR_LIGHT_SCROLLED, NAVBAR_LIGHT_TOP,
};
use crate::prefs::Theme;

/// A page section with its vertical extent, captured from layout.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigableSection {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl NavigableSection {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }

    /// The `href` of the nav link that points at this section.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Find the section under `scroll_y + probe_offset`.
///
/// Overlapping sections resolve to the last match in iteration order.
#[must_use]
pub fn active_section(
    sections: &[NavigableSection],
    scroll_y: f64,
    probe_offset: f64,
) -> Option<&NavigableSection> {
    let position = scroll_y + probe_offset;
    sections.iter().rev().find(|s| s.contains(position))
}

/// A parsed navigation link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    href: String,
    id: String,
}

impl NavTarget {
    /// Accepts `#id` and `/#id`. Returns `None` for anything else, including a
    /// bare `#`.
    #[must_use]
    pub fn parse(href: &str) -> Option<Self> {
        let fragment = href.strip_prefix('/').unwrap_or(href);
        let id = fragment.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        Some(Self {
            href: href.to_string(),
            id: id.to_string(),
        })
    }

    /// The link exactly as written; this is what goes into history.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    #[must_use]
    pub fn section_id(&self) -> &str {
        &self.id
    }

    /// Resolve against the known sections. The scroll destination is the
    /// section top minus `nav_offset`.
    #[must_use]
    pub fn scroll_top(&self, sections: &[NavigableSection], nav_offset: f64) -> Option<f64> {
        sections
            .iter()
            .find(|s| s.id == self.id)
            .map(|s| s.top - nav_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

impl NavbarStyle {
    /// Two-level step on `scroll_y > threshold`, crossed with the theme.
    #[must_use]
    pub fn for_scroll(scroll_y: f64, threshold: f64, theme: Theme) -> Self {
        let scrolled = scroll_y > threshold;
        let background = match (theme, scrolled) {
            (Theme::Light, false) => NAVBAR_LIGHT_TOP,
            (Theme::Light, true) => NAVBAR_LIGHT_SCROLLED,
            (Theme::Dark, false) => NAVBAR_DARK_TOP,
            (Theme::Dark, true) => NAVBAR_DARK_SCROLLED,
        };
        let backdrop_filter = if scrolled {
            NAVBAR_BLUR_SCROLLED
        } else {
            NAVBAR_BLUR_TOP
        };
        Self {
            background,
            backdrop_filter,
        }
    }
}
