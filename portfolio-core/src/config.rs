//! Per-variant page configuration.

use crate::constants::{NAVBAR_SOLID_THRESHOLD, NAV_SCROLL_OFFSET, SCROLL_PROBE_OFFSET};
use crate::prefs::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Personal portfolio in English with the decorative effects.
    #[default]
    Portfolio,
    /// Turkish agency-style page without effects.
    Portfolyo,
}

impl PageVariant {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Portfolyo => "portfolyo",
        }
    }

    /// Parse the `data-variant` marker. Unknown or missing values pick the
    /// portfolio variant.
    #[must_use]
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker.map(str::trim) {
            Some("portfolyo") => Self::Portfolyo,
            _ => Self::Portfolio,
        }
    }

    #[must_use]
    pub const fn default_locale(self) -> Locale {
        match self {
            Self::Portfolio => Locale::En,
            Self::Portfolyo => Locale::Tr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub skill_bars: bool,
    pub particles: bool,
    pub typing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub variant: PageVariant,
    pub default_locale: Locale,
    pub scroll_offset: f64,
    pub nav_offset: f64,
    pub navbar_threshold: f64,
    pub reveal_selectors: Vec<String>,
    pub effects: EffectsConfig,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_variant(PageVariant::Portfolio)
    }
}

impl SiteConfig {
    #[must_use]
    pub fn for_variant(variant: PageVariant) -> Self {
        let (selectors, effects): (&[&str], EffectsConfig) = match variant {
            PageVariant::Portfolio => (
                &[".timeline-item", ".project-card", ".skill-category", ".contact-item"],
                EffectsConfig {
                    skill_bars: true,
                    particles: true,
                    typing: true,
                },
            ),
            PageVariant::Portfolyo => (
                &[".pricing-card", ".portfolio-item", ".contact-method", ".trust-item"],
                EffectsConfig::default(),
            ),
        };
        Self {
            variant,
            default_locale: variant.default_locale(),
            scroll_offset: SCROLL_PROBE_OFFSET,
            nav_offset: NAV_SCROLL_OFFSET,
            navbar_threshold: NAVBAR_SOLID_THRESHOLD,
            reveal_selectors: selectors.iter().map(|s| (*s).to_string()).collect(),
            effects,
            log_level: "warn".to_string(),
        }
    }

    /// Parse a JSON config; missing fields take the portfolio defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Comma-joined selector list for `querySelectorAll`.
    #[must_use]
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }

    /// The configured log level, falling back to `warn` when unrecognised.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown config: {0}")]
    Unknown(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
