//! [`PageSurface`] over the live DOM.
//!
//! Element handles are captured once at boot. Every lookup is optional, so a
//! page missing some of the expected markup simply loses that behaviour.

use crate::dom::{self, query, query_all, query_all_html, set_style};
use crate::i18n;
use crate::styles::NOTIFICATION_STYLE;
use portfolio_core::constants::REVEAL_CLASS;
use portfolio_core::{
    FormSubmission, Locale, MenuIcon, NavbarStyle, NavigableSection, Notification, NotificationId,
    NotificationPhase, PageSurface, SiteConfig, Theme,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions, Window,
};

const ACTIVE_CLASS: &str = "active";

pub struct DomSurface {
    window: Window,
    document: Document,
    theme_toggle: Option<Element>,
    lang_buttons: Vec<Element>,
    nav_links: Vec<Element>,
    nav_menu: Option<Element>,
    nav_toggle: Option<Element>,
    toggle_bars: Vec<Element>,
    navbar: Option<Element>,
    contact_form: Option<HtmlFormElement>,
    reveal_targets: Vec<Element>,
    notices: Vec<(NotificationId, HtmlElement)>,
}

impl DomSurface {
    /// Capture the element handles the page offers.
    #[must_use]
    pub fn capture(window: Window, document: Document, config: &SiteConfig) -> Self {
        let nav_toggle = query(&document, ".nav-toggle");
        let toggle_bars = nav_toggle
            .as_ref()
            .and_then(|toggle| toggle.query_selector_all("span").ok())
            .map(|list| {
                (0..list.length())
                    .filter_map(|idx| list.get(idx))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect()
            })
            .unwrap_or_default();
        let contact_form = document
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let reveal_selector = config.reveal_selector();
        let reveal_targets = if reveal_selector.is_empty() {
            Vec::new()
        } else {
            query_all(&document, &reveal_selector)
        };

        let surface = Self {
            theme_toggle: document.get_element_by_id("themeToggle"),
            lang_buttons: query_all(&document, ".lang-btn"),
            nav_links: query_all(&document, ".nav-link"),
            nav_menu: query(&document, ".nav-menu"),
            nav_toggle,
            toggle_bars,
            navbar: query(&document, ".navbar"),
            contact_form,
            reveal_targets,
            notices: Vec::new(),
            window,
            document,
        };
        log::debug!(
            "captured {} nav links, {} language buttons, {} reveal targets",
            surface.nav_links.len(),
            surface.lang_buttons.len(),
            surface.reveal_targets.len()
        );
        surface
    }

    #[must_use]
    pub const fn theme_toggle(&self) -> Option<&Element> {
        self.theme_toggle.as_ref()
    }

    #[must_use]
    pub fn lang_buttons(&self) -> &[Element] {
        &self.lang_buttons
    }

    #[must_use]
    pub fn nav_links(&self) -> &[Element] {
        &self.nav_links
    }

    #[must_use]
    pub const fn nav_toggle(&self) -> Option<&Element> {
        self.nav_toggle.as_ref()
    }

    #[must_use]
    pub const fn contact_form(&self) -> Option<&HtmlFormElement> {
        self.contact_form.as_ref()
    }

    #[must_use]
    pub fn reveal_targets(&self) -> &[Element] {
        &self.reveal_targets
    }

    /// Position of an observed element in the reveal list.
    #[must_use]
    pub fn reveal_index(&self, element: &Element) -> Option<usize> {
        self.reveal_targets.iter().position(|el| el == element)
    }

    /// Snapshot the contact form fields. Missing fields read as empty.
    #[must_use]
    pub fn read_contact_form(&self) -> Option<FormSubmission> {
        let form = self.contact_form.as_ref()?;
        Some(FormSubmission::new(
            field_value(form, "name"),
            field_value(form, "email"),
            field_value(form, "message"),
        ))
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Ok(Some(field)) = form.query_selector(&format!("[name='{name}']")) else {
        return String::new();
    };
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    field
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

impl PageSurface for DomSurface {
    fn apply_theme(&mut self, theme: Theme) {
        let Some(root) = self.root() else {
            return;
        };
        let _ = if theme.is_dark() {
            root.set_attribute("data-theme", theme.as_str())
        } else {
            root.remove_attribute("data-theme")
        };
    }

    fn apply_locale(&mut self, locale: Locale) {
        i18n::set_lang(locale);
        if let Some(root) = self.root() {
            let _ = root.set_attribute("lang", locale.code());
        }
        for button in &self.lang_buttons {
            let matches = button.get_attribute("data-lang").as_deref() == Some(locale.code());
            set_class(button, ACTIVE_CLASS, matches);
        }

        let text_attr = locale.text_attribute();
        for element in query_all(&self.document, &format!("[{text_attr}]")) {
            if let Some(text) = element.get_attribute(&text_attr) {
                element.set_text_content(Some(&text));
            }
        }

        let placeholder_attr = locale.placeholder_attribute();
        for element in query_all(&self.document, &format!("[{placeholder_attr}]")) {
            if let Some(text) = element.get_attribute(&placeholder_attr) {
                let _ = element.set_attribute("placeholder", &text);
            }
        }

        if let Some(toggle) = &self.nav_toggle {
            let open = toggle.class_list().contains(ACTIVE_CLASS);
            let label = i18n::t(if open { "menu.close" } else { "menu.open" });
            let _ = toggle.set_attribute("aria-label", &label);
        }
    }

    fn highlight_link(&mut self, href: &str) {
        for link in &self.nav_links {
            let matches = link.get_attribute("href").as_deref() == Some(href);
            set_class(link, ACTIVE_CLASS, matches);
        }
    }

    fn style_navbar(&mut self, style: NavbarStyle) {
        if let Some(navbar) = &self.navbar {
            set_style(navbar, "background", style.background);
            set_style(navbar, "backdrop-filter", style.backdrop_filter);
        }
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn replace_history(&mut self, href: &str) {
        let result = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(href)));
        if let Err(err) = result {
            log::debug!("history update failed: {}", dom::js_error_message(&err));
        }
    }

    fn set_menu_open(&mut self, open: bool, icon: MenuIcon) {
        if let Some(menu) = &self.nav_menu {
            set_class(menu, ACTIVE_CLASS, open);
        }
        if let Some(toggle) = &self.nav_toggle {
            set_class(toggle, ACTIVE_CLASS, open);
            let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
            let label = i18n::t(if open { "menu.close" } else { "menu.open" });
            let _ = toggle.set_attribute("aria-label", &label);
        }
        for (bar, style) in self.toggle_bars.iter().zip(icon.bars) {
            set_style(bar, "transform", style.transform);
            set_style(bar, "opacity", style.opacity);
        }
    }

    fn mark_revealed(&mut self, index: usize) {
        if let Some(target) = self.reveal_targets.get(index) {
            let _ = target.class_list().add_1(REVEAL_CLASS);
        }
    }

    fn show_notification(&mut self, notification: &Notification) {
        let (Some(body), Ok(element)) = (self.document.body(), self.document.create_element("div"))
        else {
            return;
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        element.set_class_name(&format!("notification {}", notification.severity.class_name()));
        element.set_text_content(Some(&notification.text));
        let _ = element.set_attribute("role", "status");
        let _ = element.set_attribute("aria-live", "polite");
        let style = element.style();
        for (property, value) in NOTIFICATION_STYLE {
            let _ = style.set_property(property, value);
        }
        let _ = style.set_property("background", notification.severity.background());
        let _ = style.set_property("transform", notification.phase.transform());
        if body.append_child(&element).is_ok() {
            self.notices.push((notification.id, element));
        }
    }

    fn remove_notification(&mut self, id: NotificationId) {
        self.notices.retain(|(shown, element)| {
            if *shown == id {
                element.remove();
                false
            } else {
                true
            }
        });
    }

    fn update_notification(&mut self, id: NotificationId, phase: NotificationPhase) {
        if phase == NotificationPhase::Removed {
            self.remove_notification(id);
            return;
        }
        if let Some((_, element)) = self.notices.iter().find(|(shown, _)| *shown == id) {
            let _ = element.style().set_property("transform", phase.transform());
        }
    }

    fn reset_contact_form(&mut self) {
        if let Some(form) = &self.contact_form {
            form.reset();
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn sections(&self) -> Vec<NavigableSection> {
        query_all_html(&self.document, "section")
            .into_iter()
            .filter(|section| !section.id().is_empty())
            .map(|section| {
                NavigableSection::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }

    fn translate(&self, key: &str) -> String {
        i18n::t(key)
    }
}
