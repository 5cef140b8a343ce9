//! Portfolio page state
//!
//! Platform-agnostic UI state for the portfolio pages: theme and language
//! preferences, scroll-driven navigation highlighting, the mobile menu,
//! one-shot entrance reveals, contact form validation and the notification
//! lifecycle. Rendering goes through [`PageSurface`] and persistence through
//! [`PreferenceStore`], so nothing here depends on a browser.

pub mod config;
pub mod constants;
pub mod contact;
pub mod effects;
pub mod menu;
pub mod notify;
pub mod prefs;
pub mod reveal;
pub mod sections;
pub mod store;
pub mod surface;
pub mod sync;

pub use config::{ConfigError, EffectsConfig, PageVariant, SiteConfig};
pub use contact::{ContactError, FormSubmission, is_valid_email, validate};
pub use effects::{TypingSchedule, TypingStep, particle_animation, particle_delay, particle_pull};
pub use menu::{BarStyle, MenuIcon, MobileMenu};
pub use notify::{
    Notification, NotificationCenter, NotificationId, NotificationPhase, Severity, Transition,
};
pub use prefs::{Locale, PreferenceKey, Theme, UiPrefs};
pub use reveal::{ObserverOptions, RevealTracker, SkillBarReplay};
pub use sections::{NavTarget, NavbarStyle, NavigableSection, active_section};
pub use store::{MemoryStore, PreferenceStore};
pub use surface::PageSurface;
pub use sync::Synchronizer;

/// Trait for loading a named site configuration.
/// Platform-specific implementations decide where the JSON lives.
pub trait ConfigLoader {
    type Error: std::error::Error + 'static;

    /// Load the configuration registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unknown or cannot be parsed.
    fn load_site_config(&self, name: &str) -> Result<SiteConfig, Self::Error>;
}
