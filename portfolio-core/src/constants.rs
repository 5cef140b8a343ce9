//! Layout and timing constants shared by the page variants.
//!
//! The defaults in [`crate::config::SiteConfig`] are derived from these values;
//! the timings of the notification lifecycle and the variant effects are fixed.

// Storage keys -------------------------------------------------------------
pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

// Scroll geometry ----------------------------------------------------------
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;
pub const NAV_SCROLL_OFFSET: f64 = 70.0;
pub const NAVBAR_SOLID_THRESHOLD: f64 = 100.0;

// Navbar looks -------------------------------------------------------------
pub(crate) const NAVBAR_LIGHT_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub(crate) const NAVBAR_LIGHT_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub(crate) const NAVBAR_DARK_TOP: &str = "rgba(15, 23, 42, 0.95)";
pub(crate) const NAVBAR_DARK_SCROLLED: &str = "rgba(15, 23, 42, 0.98)";
pub(crate) const NAVBAR_BLUR_TOP: &str = "blur(10px)";
pub(crate) const NAVBAR_BLUR_SCROLLED: &str = "blur(20px)";

// Notification lifecycle (ms since shown) ----------------------------------
pub const NOTIFICATION_ENTER_MS: u64 = 100;
pub const NOTIFICATION_VISIBLE_MS: u64 = 5_000;
pub const NOTIFICATION_EXIT_MS: u64 = 300;

// Reveal observers ---------------------------------------------------------
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_CLASS: &str = "animate-in";
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;
pub const SKILL_BAR_REPLAY_DELAY_MS: u32 = 100;

// Particles ----------------------------------------------------------------
pub(crate) const PARTICLE_BASE_SECS: f64 = 4.0;
pub(crate) const PARTICLE_STEP_SECS: f64 = 2.0;
pub(crate) const PARTICLE_DELAY_STEP_SECS: f64 = 0.5;
pub(crate) const PARTICLE_REACH_PX: f64 = 100.0;
pub(crate) const PARTICLE_PULL: f64 = 0.1;

// Typing -------------------------------------------------------------------
pub const TYPING_START_DELAY_MS: u32 = 1_000;
pub(crate) const TYPING_CHAR_MS: u32 = 100;
pub(crate) const TYPING_LINE_PAUSE_MS: u32 = 500;
