use crate::i18n::bundle::with_bundle;
use serde_json::Value;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

fn resolve(key: &str) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(Value::as_str)
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(Value::as_str))
            .map(str::to_string)
    })
}

/// Translate a key to the current language
///
/// Falls back to English if the key is missing, and to the key itself if
/// English lacks it too.
#[must_use]
pub fn t(key: &str) -> String {
    resolve(key).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::set_lang;
    use portfolio_core::Locale;

    #[test]
    fn nested_lookup_walks_dotted_keys() {
        let value: Value = serde_json::json!({ "a": { "b": { "c": "deep" } } });
        assert_eq!(get_nested_value(&value, "a.b.c"), Some(&Value::from("deep")));
        assert!(get_nested_value(&value, "a.x").is_none());
    }

    #[test]
    fn unknown_keys_echo_back() {
        set_lang(Locale::Tr);
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t("contact.sent"), "Mesajınız gönderildi! En kısa sürede dönüş yapacağım.");
        set_lang(Locale::En);
        assert_eq!(t("contact.missing_fields"), "Please fill all required fields.");
    }
}
