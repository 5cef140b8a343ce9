//! The page as seen by the synchronizer.
//!
//! Implementations apply state to whatever renders the page. Every method
//! must quietly do nothing when the element it targets is absent.

use crate::menu::MenuIcon;
use crate::notify::{Notification, NotificationId, NotificationPhase};
use crate::prefs::{Locale, Theme};
use crate::sections::{NavbarStyle, NavigableSection};

pub trait PageSurface {
    /// Set or clear the root dark-mode flag.
    fn apply_theme(&mut self, theme: Theme);

    /// Set the root `lang`, mark the matching language button and swap every
    /// localized text and placeholder.
    fn apply_locale(&mut self, locale: Locale);

    /// Mark the nav link pointing at `href` active and every other link
    /// inactive.
    fn highlight_link(&mut self, href: &str);

    fn style_navbar(&mut self, style: NavbarStyle);

    /// Request an animated scroll to `top`.
    fn scroll_to(&mut self, top: f64);

    /// Replace the current history entry with `href`.
    fn replace_history(&mut self, href: &str);

    fn set_menu_open(&mut self, open: bool, icon: MenuIcon);

    /// Add the reveal marker to the observed element at `index`.
    fn mark_revealed(&mut self, index: usize);

    /// Insert a freshly shown notification.
    fn show_notification(&mut self, notification: &Notification);

    /// Remove a notification element, whatever phase it is in.
    fn remove_notification(&mut self, id: NotificationId);

    /// Move a notification to a new phase. `Removed` means take it out.
    fn update_notification(&mut self, id: NotificationId, phase: NotificationPhase);

    fn reset_contact_form(&mut self);

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Sections in document order with their current layout.
    fn sections(&self) -> Vec<NavigableSection>;

    /// Resolve a translation key for the active locale.
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}
