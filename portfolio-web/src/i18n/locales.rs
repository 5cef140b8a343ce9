use portfolio_core::Locale;
use serde_json::Value;

const LOCALE_TABLE: &[(Locale, &str)] = &[
    (Locale::En, include_str!("../../i18n/en.json")),
    (Locale::Tr, include_str!("../../i18n/tr.json")),
];

/// Parsed translations for `locale`, or the first bundle when missing.
pub fn load_translations(locale: Locale) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == locale).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}
