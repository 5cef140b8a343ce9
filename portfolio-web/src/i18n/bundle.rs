use crate::i18n::locales::load_translations;
use portfolio_core::Locale;
use serde_json::Value;
use std::cell::RefCell;

pub(crate) struct I18nBundle {
    pub locale: Locale,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(locale: Locale) -> Option<I18nBundle> {
    let fallback = load_translations(Locale::En)?;
    let translations = load_translations(locale)?;

    Some(I18nBundle {
        locale,
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        locale: Locale::En,
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle(Locale::En).unwrap_or_else(empty_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active translation bundle.
///
/// The document attributes and the stored preference are handled by the
/// page surface; this only affects what [`crate::i18n::t`] returns.
pub fn set_lang(locale: Locale) {
    if let Some(bundle) = build_bundle(locale) {
        CURRENT.with(|cell| cell.replace(bundle));
    } else {
        log::warn!("no translations bundled for {locale}");
    }
}

/// Get the current active locale.
#[must_use]
pub fn current_lang() -> Locale {
    with_bundle(|bundle| bundle.locale)
}
