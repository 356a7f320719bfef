//! Locale model and the pure derivations the resolver is built from
//!
//! Everything here is a plain function over strings so it can be checked
//! without a browser:
//! - tag normalization (`en`, `pt`, `pt-br`)
//! - locale hints carried by the URL path or the `lang` query parameter
//! - inference from the client language preference list
//! - canonical URL for the localized home routes

use derive_more::Display;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Storage key holding the active locale
pub const STORAGE_KEY: &str = "loyaltify_lang";

/// Key used by earlier releases, migrated to [`STORAGE_KEY`] and removed
pub const LEGACY_STORAGE_KEY: &str = "loyaltify-language";

/// Query parameter accepted as a secondary locale hint
pub const LANG_QUERY_PARAM: &str = "lang";

/// Supported display languages
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[display("en")]
    #[serde(rename = "en")]
    English,
    #[display("pt-BR")]
    #[serde(rename = "pt-BR")]
    BrazilianPortuguese,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::BrazilianPortuguese];

    /// Tag written to storage and to the document `lang` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::BrazilianPortuguese => "pt-BR",
        }
    }

    /// Normalize a loosely formatted tag. Unknown values have no opinion.
    pub fn normalize(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::English),
            "pt" | "pt-br" => Some(Locale::BrazilianPortuguese),
            _ => None,
        }
    }

    /// Short label used by the language switcher
    pub fn short_label(&self) -> &'static str {
        match self {
            Locale::English => "EN",
            Locale::BrazilianPortuguese => "PT",
        }
    }

    /// Path of the localized home page for this locale
    pub fn home_path(&self) -> &'static str {
        match self {
            Locale::English => "/en",
            Locale::BrazilianPortuguese => "/",
        }
    }
}

/// Locale carried by the URL, either as a path prefix or as `?lang=`
pub fn locale_from_url(pathname: &str, search: &str) -> Option<Locale> {
    let path = pathname.to_ascii_lowercase();

    if path == "/en" || path.starts_with("/en/") {
        return Some(Locale::English);
    }
    if path == "/pt" || path.starts_with("/pt/") {
        return Some(Locale::BrazilianPortuguese);
    }

    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == LANG_QUERY_PARAM)
        .and_then(|(_, value)| Locale::normalize(&value))
}

/// Locale inferred from the client language preference list.
///
/// Any `pt*` entry selects Portuguese regardless of its position; a non-empty
/// list without one selects English; an empty list has no opinion.
pub fn locale_from_languages<S: AsRef<str>>(languages: &[S]) -> Option<Locale> {
    if languages.is_empty() {
        return None;
    }

    let prefers_portuguese = languages
        .iter()
        .any(|tag| tag.as_ref().to_ascii_lowercase().starts_with("pt"));

    Some(if prefers_portuguese {
        Locale::BrazilianPortuguese
    } else {
        Locale::English
    })
}

/// Whether the path is one of the home routes whose URL follows the locale
pub fn is_localized_home(pathname: &str) -> bool {
    matches!(pathname.to_ascii_lowercase().as_str(), "/" | "/en" | "/pt")
}

/// Remove the `lang` parameter from a query string.
///
/// Returns the input untouched when the parameter is absent, otherwise the
/// re-serialized remainder with a leading `?` (or an empty string).
pub fn strip_lang_param(search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return String::new();
    }

    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if !pairs.iter().any(|(key, _)| key == LANG_QUERY_PARAM) {
        return search.to_string();
    }

    let remaining = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().filter(|(key, _)| key != LANG_QUERY_PARAM))
        .finish();

    if remaining.is_empty() {
        String::new()
    } else {
        format!("?{}", remaining)
    }
}

/// URL the browser should be moved to (with history replacement) so the home
/// route agrees with `locale`. `None` when nothing needs to change.
pub fn canonical_home_url(locale: Locale, pathname: &str, search: &str) -> Option<String> {
    if !is_localized_home(pathname) {
        return None;
    }

    let target_path = locale.home_path();
    let sanitized = strip_lang_param(search);

    if pathname.to_ascii_lowercase() != target_path || sanitized != search {
        Some(format!("{}{}", target_path, sanitized))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_case_insensitive() {
        assert_eq!(Locale::normalize("en"), Some(Locale::English));
        assert_eq!(Locale::normalize("EN"), Some(Locale::English));
        assert_eq!(Locale::normalize("PT"), Some(Locale::BrazilianPortuguese));
        assert_eq!(Locale::normalize("pt-br"), Some(Locale::BrazilianPortuguese));
        assert_eq!(Locale::normalize("pt-BR"), Some(Locale::BrazilianPortuguese));
    }

    #[test]
    fn test_normalize_rejects_unknown() {
        assert_eq!(Locale::normalize("fr"), None);
        assert_eq!(Locale::normalize("pt-PT"), None);
        assert_eq!(Locale::normalize(""), None);
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(Locale::English.to_string(), "en");
        assert_eq!(Locale::BrazilianPortuguese.to_string(), "pt-BR");
        assert_eq!(Locale::BrazilianPortuguese.as_str(), "pt-BR");
    }

    #[test]
    fn test_locale_from_path_prefix() {
        assert_eq!(locale_from_url("/en", ""), Some(Locale::English));
        assert_eq!(locale_from_url("/EN/pricing", ""), Some(Locale::English));
        assert_eq!(locale_from_url("/pt", ""), Some(Locale::BrazilianPortuguese));
        assert_eq!(locale_from_url("/pt/demo", ""), Some(Locale::BrazilianPortuguese));
        assert_eq!(locale_from_url("/entrar", ""), None);
    }

    #[test]
    fn test_locale_from_query() {
        assert_eq!(locale_from_url("/", "?lang=pt"), Some(Locale::BrazilianPortuguese));
        assert_eq!(locale_from_url("/demo", "?utm=x&lang=EN"), Some(Locale::English));
        assert_eq!(locale_from_url("/", "?lang=fr"), None);
        assert_eq!(locale_from_url("/", ""), None);
    }

    #[test]
    fn test_path_wins_over_query() {
        assert_eq!(locale_from_url("/en", "?lang=pt"), Some(Locale::English));
    }

    #[test]
    fn test_locale_from_languages() {
        assert_eq!(
            locale_from_languages(&["fr-FR", "pt-PT"]),
            Some(Locale::BrazilianPortuguese)
        );
        assert_eq!(locale_from_languages(&["de-DE", "en-US"]), Some(Locale::English));
        assert_eq!(locale_from_languages(&["PT-br"]), Some(Locale::BrazilianPortuguese));
        assert_eq!(locale_from_languages::<&str>(&[]), None);
    }

    #[test]
    fn test_is_localized_home() {
        assert!(is_localized_home("/"));
        assert!(is_localized_home("/en"));
        assert!(is_localized_home("/PT"));
        assert!(!is_localized_home("/en/"));
        assert!(!is_localized_home("/privacy-policy"));
    }

    #[test]
    fn test_strip_lang_param() {
        assert_eq!(strip_lang_param(""), "");
        assert_eq!(strip_lang_param("?lang=pt"), "");
        assert_eq!(strip_lang_param("?a=1&lang=pt&b=2"), "?a=1&b=2");
        assert_eq!(strip_lang_param("?a=1"), "?a=1");
    }

    #[test]
    fn test_canonical_home_url() {
        assert_eq!(
            canonical_home_url(Locale::English, "/", ""),
            Some("/en".to_string())
        );
        assert_eq!(canonical_home_url(Locale::BrazilianPortuguese, "/", ""), None);
        assert_eq!(
            canonical_home_url(Locale::BrazilianPortuguese, "/en", "?lang=pt"),
            Some("/".to_string())
        );
        assert_eq!(
            canonical_home_url(Locale::English, "/en", "?lang=en&ref=ad"),
            Some("/en?ref=ad".to_string())
        );
        assert_eq!(canonical_home_url(Locale::English, "/en", ""), None);
        assert_eq!(canonical_home_url(Locale::English, "/privacy-policy", "?lang=pt"), None);
    }
}
