//! Static translation tables and dotted-key lookup
//!
//! Each locale has a nested JSON document embedded at compile time.
//! Lookups walk `"section.sub.key"` through nested objects and fall back to
//! the key itself, so a missing entry shows up on screen instead of failing.

use std::sync::LazyLock;

use serde_json::Value;

use super::locale::Locale;

static EN: LazyLock<Value> = LazyLock::new(|| parse_table("en", include_str!("../../locales/en.json")));
static PT_BR: LazyLock<Value> =
    LazyLock::new(|| parse_table("pt-BR", include_str!("../../locales/pt-BR.json")));

fn parse_table(tag: &str, source: &str) -> Value {
    serde_json::from_str(source).unwrap_or_else(|e| {
        leptos::logging::warn!("Translation table '{}' is not valid JSON: {}", tag, e);
        Value::Null
    })
}

/// Translation table for a locale
pub fn table(locale: Locale) -> &'static Value {
    match locale {
        Locale::English => &*EN,
        Locale::BrazilianPortuguese => &*PT_BR,
    }
}

/// Resolve a dotted key against an arbitrary nested table.
///
/// Total: a missing segment, a non-object before the last segment, or a
/// non-string leaf all yield `key` unchanged.
pub fn lookup(table: &Value, key: &str) -> String {
    let mut node = table;
    for segment in key.split('.') {
        match node.as_object().and_then(|map| map.get(segment)) {
            Some(next) => node = next,
            None => return key.to_string(),
        }
    }

    match node.as_str() {
        Some(text) => text.to_string(),
        None => key.to_string(),
    }
}

/// Translate `key` into `locale` using the embedded tables
pub fn translate(locale: Locale, key: &str) -> String {
    lookup(table(locale), key)
}
