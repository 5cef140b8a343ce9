#![allow(dead_code)]

use portfolio_core::{
    FormSubmission, Locale, MenuIcon, NavbarStyle, NavigableSection, Notification, NotificationId,
    NotificationPhase, PageSurface, PreferenceKey, PreferenceStore, Severity, Theme,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct FakeElement {
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub placeholder: String,
}

impl FakeElement {
    pub fn localized(en: &str, tr: &str) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("data-en".to_string(), en.to_string());
        attrs.insert("data-tr".to_string(), tr.to_string());
        Self {
            attrs,
            text: String::new(),
            placeholder: String::new(),
        }
    }

    pub fn placeholder(en: &str, tr: &str) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("data-en-placeholder".to_string(), en.to_string());
        attrs.insert("data-tr-placeholder".to_string(), tr.to_string());
        Self {
            attrs,
            text: String::new(),
            placeholder: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShownNotice {
    pub id: NotificationId,
    pub text: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

#[derive(Debug, Clone, Default)]
pub struct FakePage {
    pub data_theme: Option<String>,
    pub lang: Option<String>,
    pub lang_buttons: Vec<(String, bool)>,
    pub elements: Vec<FakeElement>,
    pub nav_links: Vec<(String, bool)>,
    pub navbar: Option<NavbarStyle>,
    pub scroll: f64,
    pub layout: Vec<NavigableSection>,
    pub scroll_requests: Vec<f64>,
    pub history: Vec<String>,
    pub menu_open: bool,
    pub icon: Option<MenuIcon>,
    pub revealed: Vec<usize>,
    pub notices: Vec<ShownNotice>,
    pub form: FormSubmission,
}

impl FakePage {
    pub fn portfolio() -> Self {
        Self {
            lang_buttons: vec![("en".into(), false), ("tr".into(), false)],
            elements: vec![
                FakeElement::localized("About", "Hakkımda"),
                FakeElement::localized("Contact", "İletişim"),
                FakeElement::placeholder("Your name", "Adınız"),
            ],
            nav_links: vec![
                ("#home".into(), false),
                ("#about".into(), false),
                ("#contact".into(), false),
            ],
            layout: vec![
                NavigableSection::new("home", 0.0, 700.0),
                NavigableSection::new("about", 700.0, 500.0),
                NavigableSection::new("contact", 1200.0, 600.0),
            ],
            ..Self::default()
        }
    }

    pub fn active_links(&self) -> Vec<&str> {
        self.nav_links
            .iter()
            .filter(|(_, active)| *active)
            .map(|(href, _)| href.as_str())
            .collect()
    }

    pub fn active_lang_buttons(&self) -> Vec<&str> {
        self.lang_buttons
            .iter()
            .filter(|(_, active)| *active)
            .map(|(code, _)| code.as_str())
            .collect()
    }
}

impl PageSurface for FakePage {
    fn apply_theme(&mut self, theme: Theme) {
        self.data_theme = theme.is_dark().then(|| "dark".to_string());
    }

    fn apply_locale(&mut self, locale: Locale) {
        self.lang = Some(locale.code().to_string());
        for (code, active) in &mut self.lang_buttons {
            *active = code == locale.code();
        }
        let text_attr = locale.text_attribute();
        let placeholder_attr = locale.placeholder_attribute();
        for element in &mut self.elements {
            if let Some(text) = element.attrs.get(&text_attr) {
                element.text = text.clone();
            }
            if let Some(placeholder) = element.attrs.get(&placeholder_attr) {
                element.placeholder = placeholder.clone();
            }
        }
    }

    fn highlight_link(&mut self, href: &str) {
        for (link, active) in &mut self.nav_links {
            *active = link == href;
        }
    }

    fn style_navbar(&mut self, style: NavbarStyle) {
        self.navbar = Some(style);
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
    }

    fn replace_history(&mut self, href: &str) {
        self.history.push(href.to_string());
    }

    fn set_menu_open(&mut self, open: bool, icon: MenuIcon) {
        self.menu_open = open;
        self.icon = Some(icon);
    }

    fn mark_revealed(&mut self, index: usize) {
        self.revealed.push(index);
    }

    fn show_notification(&mut self, notification: &Notification) {
        self.notices.push(ShownNotice {
            id: notification.id,
            text: notification.text.clone(),
            severity: notification.severity,
            phase: notification.phase,
        });
    }

    fn remove_notification(&mut self, id: NotificationId) {
        self.notices.retain(|n| n.id != id);
    }

    fn update_notification(&mut self, id: NotificationId, phase: NotificationPhase) {
        if let Some(notice) = self.notices.iter_mut().find(|n| n.id == id) {
            notice.phase = phase;
        }
    }

    fn reset_contact_form(&mut self) {
        self.form = FormSubmission::default();
    }

    fn scroll_y(&self) -> f64 {
        self.scroll
    }

    fn sections(&self) -> Vec<NavigableSection> {
        self.layout.clone()
    }

    fn translate(&self, key: &str) -> String {
        format!("{}:{key}", self.lang.as_deref().unwrap_or("?"))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("storage disabled")]
pub struct StorageDisabled;

/// Store whose every read and write fails, like `localStorage` in a locked
/// down private window.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    type Error = StorageDisabled;

    fn read(&self, _key: PreferenceKey) -> Result<Option<String>, Self::Error> {
        Err(StorageDisabled)
    }

    fn write(&self, _key: PreferenceKey, _value: &str) -> Result<(), Self::Error> {
        Err(StorageDisabled)
    }
}
