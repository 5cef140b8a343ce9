//! Theme and language preferences.

use crate::constants::{LANGUAGE_KEY, THEME_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Tr,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Tr];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Attribute carrying this locale's text content, e.g. `data-en`.
    #[must_use]
    pub fn text_attribute(self) -> String {
        format!("data-{}", self.code())
    }

    /// Attribute carrying this locale's input placeholder.
    #[must_use]
    pub fn placeholder_attribute(self) -> String {
        format!("data-{}-placeholder", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Theme,
    Language,
}

impl PreferenceKey {
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Theme => THEME_KEY,
            Self::Language => LANGUAGE_KEY,
        }
    }
}

/// The active theme and locale. DOM and store are projections of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPrefs {
    pub theme: Theme,
    pub locale: Locale,
}

impl UiPrefs {
    /// Derive preferences from raw stored values. Unknown locales fall back to
    /// `default_locale`.
    #[must_use]
    pub fn from_stored(
        theme: Option<&str>,
        language: Option<&str>,
        default_locale: Locale,
    ) -> Self {
        Self {
            theme: Theme::from_stored(theme),
            locale: language
                .and_then(Locale::from_code)
                .unwrap_or(default_locale),
        }
    }
}
