mod support;

use portfolio_core::{
    ContactError, FormSubmission, Locale, MemoryStore, NavigableSection, PageVariant,
    PreferenceKey, Severity, SiteConfig, Synchronizer, Theme,
};
use support::FakePage;

fn boot_with(store: MemoryStore, variant: PageVariant) -> Synchronizer<MemoryStore, FakePage> {
    Synchronizer::boot(store, FakePage::portfolio(), SiteConfig::for_variant(variant))
}

fn submit(
    sync: &mut Synchronizer<MemoryStore, FakePage>,
    form: FormSubmission,
    now_ms: u64,
) -> Result<(), ContactError> {
    sync.page_mut().form = form.clone();
    sync.submit_contact(&form, now_ms)
}

#[test]
fn empty_store_boots_light_with_variant_locale() {
    let portfolio = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    assert_eq!(portfolio.prefs().theme, Theme::Light);
    assert_eq!(portfolio.page().lang.as_deref(), Some("en"));
    assert_eq!(portfolio.page().data_theme, None);
    assert_eq!(portfolio.load_preference(PreferenceKey::Theme), "light");

    let portfolyo = boot_with(MemoryStore::default(), PageVariant::Portfolyo);
    assert_eq!(portfolyo.prefs().locale, Locale::Tr);
    assert_eq!(portfolyo.load_preference(PreferenceKey::Language), "tr");
    assert_eq!(portfolyo.page().elements[0].text, "Hakkımda");
}

#[test]
fn stored_preferences_win_over_defaults() {
    let store = MemoryStore::with(&[
        (PreferenceKey::Theme, "dark"),
        (PreferenceKey::Language, "tr"),
    ]);
    let sync = boot_with(store, PageVariant::Portfolio);
    assert_eq!(sync.page().data_theme.as_deref(), Some("dark"));
    assert_eq!(sync.page().lang.as_deref(), Some("tr"));
    let navbar = sync.page().navbar.expect("navbar styled at boot");
    assert_eq!(navbar.background, "rgba(15, 23, 42, 0.95)");
}

#[test]
fn malformed_stored_values_are_not_fatal() {
    let store = MemoryStore::with(&[
        (PreferenceKey::Theme, "purple"),
        (PreferenceKey::Language, "xx"),
    ]);
    let sync = boot_with(store, PageVariant::Portfolyo);
    assert_eq!(sync.prefs().theme, Theme::Light);
    assert_eq!(sync.prefs().locale, Locale::Tr);
}

#[test]
fn theme_toggle_twice_restores_page_and_store() {
    let store = MemoryStore::default();
    let mut sync = boot_with(store.clone(), PageVariant::Portfolio);
    let before_theme = sync.page().data_theme.clone();
    let before_store = store.get(PreferenceKey::Theme);

    assert_eq!(sync.toggle_theme(), Theme::Dark);
    assert_eq!(sync.page().data_theme.as_deref(), Some("dark"));
    assert_eq!(store.get(PreferenceKey::Theme).as_deref(), Some("dark"));

    assert_eq!(sync.toggle_theme(), Theme::Light);
    assert_eq!(sync.page().data_theme, before_theme);
    assert_eq!(store.get(PreferenceKey::Theme), before_store);
}

#[test]
fn theme_toggle_restyles_navbar() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    sync.page_mut().scroll = 400.0;
    sync.toggle_theme();
    let navbar = sync.page().navbar.expect("navbar styled");
    assert_eq!(navbar.background, "rgba(15, 23, 42, 0.98)");
    assert_eq!(navbar.backdrop_filter, "blur(20px)");
}

#[test]
fn every_locale_swaps_text_and_marks_one_button() {
    let store = MemoryStore::default();
    let mut sync = boot_with(store.clone(), PageVariant::Portfolio);
    for locale in Locale::ALL {
        sync.set_locale(locale);
        let page = sync.page();
        let attr = locale.text_attribute();
        for element in &page.elements {
            if let Some(expected) = element.attrs.get(&attr) {
                assert_eq!(&element.text, expected);
            }
        }
        assert_eq!(page.active_lang_buttons(), vec![locale.code()]);
        assert_eq!(page.lang.as_deref(), Some(locale.code()));
        assert_eq!(store.get(PreferenceKey::Language).as_deref(), Some(locale.code()));
    }
}

#[test]
fn placeholders_follow_the_locale() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    assert_eq!(sync.page().elements[2].placeholder, "Your name");
    assert_eq!(sync.select_language("tr"), Some(Locale::Tr));
    assert_eq!(sync.page().elements[2].placeholder, "Adınız");
    assert_eq!(sync.select_language("de"), None);
    assert_eq!(sync.prefs().locale, Locale::Tr);
}

#[test]
fn one_link_is_active_anywhere_inside_a_section() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    let layout = sync.page().layout.clone();
    for section in &layout {
        let mut offset = section.top;
        while offset < section.top + section.height {
            // The probe sits 100px below the viewport top.
            sync.page_mut().scroll = offset - 100.0;
            sync.on_scroll();
            assert_eq!(sync.page().active_links(), vec![section.anchor().as_str()]);
            offset += 50.0;
        }
    }
}

#[test]
fn scrolling_past_every_section_keeps_last_highlight() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    sync.page_mut().scroll = 1_650.0;
    sync.on_scroll();
    assert_eq!(sync.page().active_links(), vec!["#contact"]);
    sync.page_mut().scroll = 5_000.0;
    sync.on_scroll();
    assert_eq!(sync.page().active_links(), vec!["#contact"]);
}

#[test]
fn navigation_scrolls_and_replaces_history() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    assert!(sync.navigate("#about"));
    assert!(sync.navigate("/#contact"));
    assert!(!sync.navigate("#missing"));
    assert!(!sync.navigate("mailto:someone@example.com"));
    assert_eq!(sync.page().scroll_requests, vec![630.0, 1_130.0]);
    assert_eq!(sync.page().history, vec!["#about", "/#contact"]);
}

#[test]
fn reflowed_layout_drives_highlight_and_navigation() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    // Turkish copy is longer and pushes later sections down.
    sync.page_mut().layout = vec![
        NavigableSection::new("home", 0.0, 900.0),
        NavigableSection::new("about", 900.0, 500.0),
        NavigableSection::new("contact", 1_400.0, 600.0),
    ];
    sync.select_language("tr");

    sync.page_mut().scroll = 700.0;
    sync.on_scroll();
    assert_eq!(sync.page().active_links(), vec!["#home"]);

    assert!(sync.navigate("#contact"));
    assert_eq!(sync.page().scroll_requests, vec![1_330.0]);
}

#[test]
fn following_a_link_closes_an_open_menu() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    assert!(sync.toggle_menu());
    assert!(sync.page().menu_open);
    assert_eq!(sync.page().icon.map(|i| i.bars[1].opacity), Some("0"));

    sync.follow_link("#about");
    assert!(!sync.menu().is_open());
    assert!(!sync.page().menu_open);
    assert_eq!(sync.page().icon.map(|i| i.bars[1].opacity), Some("1"));
}

#[test]
fn reveals_fire_once_per_element() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    assert!(sync.reveal(1));
    assert!(!sync.reveal(1));
    assert!(sync.reveal(0));
    assert_eq!(sync.page().revealed, vec![1, 0]);
}

#[test]
fn missing_name_is_rejected_and_form_kept() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    let form = FormSubmission::new("", "a@b.com", "hi");
    assert_eq!(submit(&mut sync, form.clone(), 0), Err(ContactError::MissingFields));
    let notice = &sync.page().notices[0];
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.text, "en:contact.missing_fields");
    assert_eq!(sync.page().form, form);
}

#[test]
fn malformed_email_is_rejected() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolyo);
    let form = FormSubmission::new("A", "not-an-email", "hi");
    assert_eq!(submit(&mut sync, form.clone(), 0), Err(ContactError::InvalidEmail));
    let notice = &sync.page().notices[0];
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.text, "tr:contact.invalid_email");
    assert_eq!(sync.page().form, form);
}

#[test]
fn valid_submission_succeeds_and_clears_fields() {
    let mut sync = boot_with(MemoryStore::default(), PageVariant::Portfolio);
    let form = FormSubmission::new("A", "a@b.com", "hi");
    assert_eq!(submit(&mut sync, form, 0), Ok(()));
    assert_eq!(sync.page().notices.len(), 1);
    assert_eq!(sync.page().notices[0].severity, Severity::Success);
    assert_eq!(sync.page().form, FormSubmission::default());
}
