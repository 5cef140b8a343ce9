//! The synchronizer: one context object owning every piece of UI state and
//! projecting it onto a [`PageSurface`] and a [`PreferenceStore`].

use crate::config::SiteConfig;
use crate::contact::{self, ContactError, FormSubmission, SENT_MESSAGE_KEY};
use crate::menu::MobileMenu;
use crate::notify::{
    Notification, NotificationCenter, NotificationId, NotificationPhase, Severity,
};
use crate::prefs::{Locale, PreferenceKey, Theme, UiPrefs};
use crate::reveal::RevealTracker;
use crate::sections::{NavTarget, NavbarStyle, NavigableSection, active_section};
use crate::store::PreferenceStore;
use crate::surface::PageSurface;

pub struct Synchronizer<S, P>
where
    S: PreferenceStore,
    P: PageSurface,
{
    store: S,
    page: P,
    config: SiteConfig,
    prefs: UiPrefs,
    sections: Vec<NavigableSection>,
    menu: MobileMenu,
    reveals: RevealTracker,
    notices: NotificationCenter,
}

impl<S, P> Synchronizer<S, P>
where
    S: PreferenceStore,
    P: PageSurface,
{
    /// Load preferences, apply them, capture section layout and run the
    /// initial scroll pass.
    pub fn boot(store: S, page: P, config: SiteConfig) -> Self {
        let theme = read_or_none(&store, PreferenceKey::Theme);
        let language = read_or_none(&store, PreferenceKey::Language);
        let prefs =
            UiPrefs::from_stored(theme.as_deref(), language.as_deref(), config.default_locale);
        log::debug!("booting {} with {prefs:?}", config.variant.name());

        let mut sync = Self {
            store,
            page,
            config,
            prefs,
            sections: Vec::new(),
            menu: MobileMenu::default(),
            reveals: RevealTracker::default(),
            notices: NotificationCenter::default(),
        };
        sync.set_locale(prefs.locale);
        sync.set_theme(prefs.theme);
        sync.on_scroll();
        sync
    }

    /// Read a preference, falling back to its default.
    #[must_use]
    pub fn load_preference(&self, key: PreferenceKey) -> String {
        let stored = read_or_none(&self.store, key);
        match key {
            PreferenceKey::Theme => Theme::from_stored(stored.as_deref()).as_str().to_string(),
            PreferenceKey::Language => stored
                .as_deref()
                .and_then(Locale::from_code)
                .unwrap_or(self.config.default_locale)
                .code()
                .to_string(),
        }
    }

    #[must_use]
    pub const fn prefs(&self) -> UiPrefs {
        self.prefs
    }

    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    pub const fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn menu(&self) -> MobileMenu {
        self.menu
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notices.current()
    }

    /// Absolute time at which [`Self::advance_notifications`] has work to do.
    #[must_use]
    pub fn next_notification_deadline(&self) -> Option<u64> {
        self.notices.next_deadline()
    }

    /// Apply and persist a theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.page.apply_theme(theme);
        self.persist(PreferenceKey::Theme, theme.as_str());
        self.restyle_navbar();
    }

    /// Flip the theme. The opposite is derived from the tracked state, not
    /// from the page.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.prefs.theme.toggled();
        self.set_theme(next);
        next
    }

    /// Apply and persist a locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.prefs.locale = locale;
        self.page.apply_locale(locale);
        self.persist(PreferenceKey::Language, locale.code());
    }

    /// Language button handler; unknown codes are ignored.
    pub fn select_language(&mut self, code: &str) -> Option<Locale> {
        let locale = Locale::from_code(code)?;
        self.set_locale(locale);
        Some(locale)
    }

    /// Scroll handler: highlight the section under the probe and restyle the
    /// navbar. Section extents are re-read each pass because the layout can
    /// reflow after boot.
    pub fn on_scroll(&mut self) {
        self.refresh_sections();
        let scroll_y = self.page.scroll_y();
        let active = active_section(&self.sections, scroll_y, self.config.scroll_offset);
        if let Some(anchor) = active.map(NavigableSection::anchor) {
            self.page.highlight_link(&anchor);
        }
        self.restyle_navbar();
    }

    /// Re-read section layout from the page.
    pub fn refresh_sections(&mut self) {
        self.sections = self.page.sections();
    }

    /// Nav link handler. Returns `false` when the target does not resolve.
    pub fn navigate(&mut self, href: &str) -> bool {
        self.refresh_sections();
        let resolved = NavTarget::parse(href).and_then(|target| {
            target
                .scroll_top(&self.sections, self.config.nav_offset)
                .map(|top| (target, top))
        });
        let Some((target, top)) = resolved else {
            log::debug!("nav target {href} did not resolve");
            return false;
        };
        self.page.scroll_to(top);
        self.page.replace_history(target.href());
        true
    }

    /// Nav link click: navigate, then close the mobile menu if it is open.
    pub fn follow_link(&mut self, href: &str) -> bool {
        let navigated = self.navigate(href);
        if self.menu.close() {
            self.page.set_menu_open(false, self.menu.icon());
        }
        navigated
    }

    pub fn toggle_menu(&mut self) -> bool {
        let open = self.menu.toggle();
        self.page.set_menu_open(open, self.menu.icon());
        open
    }

    /// Intersection handler for the entrance animations. Returns `true` only
    /// on the first reveal of an element.
    pub fn reveal(&mut self, index: usize) -> bool {
        let first = self.reveals.reveal(index);
        if first {
            self.page.mark_revealed(index);
        }
        first
    }

    /// Validate a submission and raise the matching notification. On success
    /// the form is cleared; on failure it is left as is.
    ///
    /// # Errors
    ///
    /// Returns the validation failure that was shown to the visitor.
    pub fn submit_contact(
        &mut self,
        submission: &FormSubmission,
        now_ms: u64,
    ) -> Result<(), ContactError> {
        match contact::validate(submission) {
            Ok(()) => {
                let text = self.page.translate(SENT_MESSAGE_KEY);
                self.notify(text, Severity::Success, now_ms);
                self.page.reset_contact_form();
                Ok(())
            }
            Err(err) => {
                let text = self.page.translate(err.message_key());
                self.notify(text, Severity::Error, now_ms);
                Err(err)
            }
        }
    }

    /// Show a notification, replacing any that is on screen.
    pub fn notify(
        &mut self,
        text: impl Into<String>,
        severity: Severity,
        now_ms: u64,
    ) -> NotificationId {
        let (notification, replaced) = self.notices.show(text, severity, now_ms);
        if let Some(old) = replaced {
            self.page.remove_notification(old);
        }
        self.page.show_notification(&notification);
        notification.id
    }

    /// Timer handler for the notification lifecycle.
    pub fn advance_notifications(&mut self, now_ms: u64) {
        for transition in self.notices.advance(now_ms) {
            if transition.phase == NotificationPhase::Removed {
                self.page.remove_notification(transition.id);
            } else {
                self.page.update_notification(transition.id, transition.phase);
            }
        }
    }

    fn restyle_navbar(&mut self) {
        let style = NavbarStyle::for_scroll(
            self.page.scroll_y(),
            self.config.navbar_threshold,
            self.prefs.theme,
        );
        self.page.style_navbar(style);
    }

    fn persist(&self, key: PreferenceKey, value: &str) {
        if let Err(err) = self.store.write(key, value) {
            log::warn!("could not persist {}: {err}", key.storage_key());
        }
    }
}

fn read_or_none<S: PreferenceStore>(store: &S, key: PreferenceKey) -> Option<String> {
    store.read(key).unwrap_or_else(|err| {
        log::warn!("could not read {}: {err}", key.storage_key());
        None
    })
}
