mod support;

use portfolio_core::{Locale, PageVariant, PreferenceKey, SiteConfig, Synchronizer, Theme};
use support::{FailingStore, FakePage};

fn boot_unpersisted(variant: PageVariant) -> Synchronizer<FailingStore, FakePage> {
    Synchronizer::boot(FailingStore, FakePage::portfolio(), SiteConfig::for_variant(variant))
}

#[test]
fn unreadable_store_boots_with_defaults() {
    let sync = boot_unpersisted(PageVariant::Portfolyo);
    assert_eq!(sync.prefs().theme, Theme::Light);
    assert_eq!(sync.prefs().locale, Locale::Tr);
    assert_eq!(sync.page().data_theme, None);
    assert_eq!(sync.page().lang.as_deref(), Some("tr"));
    assert_eq!(sync.page().active_lang_buttons(), vec!["tr"]);
    assert!(sync.page().navbar.is_some());
}

#[test]
fn rejected_writes_still_update_the_page() {
    let mut sync = boot_unpersisted(PageVariant::Portfolio);
    assert_eq!(sync.toggle_theme(), Theme::Dark);
    assert_eq!(sync.page().data_theme.as_deref(), Some("dark"));
    let navbar = sync.page().navbar.expect("navbar styled");
    assert_eq!(navbar.background, "rgba(15, 23, 42, 0.95)");

    assert_eq!(sync.select_language("tr"), Some(Locale::Tr));
    assert_eq!(sync.page().elements[0].text, "Hakkımda");

    // Nothing was stored, so reads fall back to defaults.
    assert_eq!(sync.load_preference(PreferenceKey::Theme), "light");
    assert_eq!(sync.load_preference(PreferenceKey::Language), "en");
}
