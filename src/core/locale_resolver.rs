//! Active locale for the session
//!
//! The resolver picks the initial locale from storage, the URL, the client
//! language list and finally the English default. Changing the locale runs
//! a two-step transition so the page can fade out before the text is swapped
//! and fade back in afterwards:
//!
//! ```text
//! set_locale ─► transitioning = true
//!            └─ 150 ms ─► swap locale, persist, update <html lang>, fix URL
//!                        └─ 50 ms ─► transitioning = false
//! ```
//!
//! Every call takes a new transition token. Delayed steps from a superseded
//! call see a stale token and do nothing, so only the latest request lands.

use std::sync::{Arc, Mutex};

use super::locale::{
    LEGACY_STORAGE_KEY, Locale, STORAGE_KEY, canonical_home_url, locale_from_languages,
    locale_from_url,
};
use super::observable::Observable;
use super::ports::{
    DocumentLang, Headless, KeyValueStore, LanguagePreferences, Scheduler, UrlState,
};
use super::translations;

/// Delay before the text is swapped, matching the fade-out animation
pub const EXIT_DELAY_MS: u32 = 150;

/// Delay after the swap before the transition flag clears
pub const SETTLE_DELAY_MS: u32 = 50;

/// Browser capabilities the resolver reads and writes
#[derive(Clone)]
pub struct LocalePorts {
    pub storage: Arc<dyn KeyValueStore>,
    pub url: Arc<dyn UrlState>,
    pub document: Arc<dyn DocumentLang>,
    pub languages: Arc<dyn LanguagePreferences>,
    pub scheduler: Arc<dyn Scheduler>,
}

impl LocalePorts {
    /// Ports with no browser behind them
    pub fn headless() -> Self {
        Self {
            storage: Arc::new(Headless),
            url: Arc::new(Headless),
            document: Arc::new(Headless),
            languages: Arc::new(Headless),
            scheduler: Arc::new(Headless),
        }
    }
}

/// Locale remembered in storage, falling back to the legacy key
fn stored_locale(storage: &dyn KeyValueStore) -> Option<Locale> {
    storage
        .get(STORAGE_KEY)
        .and_then(|value| Locale::normalize(&value))
        .or_else(|| {
            storage
                .get(LEGACY_STORAGE_KEY)
                .and_then(|value| Locale::normalize(&value))
        })
}

/// Pick the initial locale: storage, then URL, then client languages, then
/// English. Reads only.
pub fn resolve_initial_locale(
    storage: &dyn KeyValueStore,
    url: &dyn UrlState,
    languages: &dyn LanguagePreferences,
) -> Locale {
    stored_locale(storage)
        .or_else(|| locale_from_url(&url.pathname(), &url.search()))
        .or_else(|| locale_from_languages(&languages.languages()))
        .unwrap_or_default()
}

#[derive(Default)]
struct Transition {
    token: u64,
    /// Destination of the in-flight transition, if any
    target: Option<Locale>,
}

struct Inner {
    ports: LocalePorts,
    locale: Observable<Locale>,
    transitioning: Observable<bool>,
    transition: Mutex<Transition>,
}

/// Owner of the active locale
#[derive(Clone)]
pub struct LocaleResolver {
    inner: Arc<Inner>,
}

impl LocaleResolver {
    /// Resolve the initial locale and bring storage, the document and the URL
    /// in line with it
    pub fn new(ports: LocalePorts) -> Self {
        let initial = resolve_initial_locale(
            ports.storage.as_ref(),
            ports.url.as_ref(),
            ports.languages.as_ref(),
        );

        let resolver = Self {
            inner: Arc::new(Inner {
                ports,
                locale: Observable::new(initial),
                transitioning: Observable::new(false),
                transition: Mutex::new(Transition::default()),
            }),
        };
        resolver.apply(initial);
        resolver
    }

    /// Currently displayed locale
    pub fn locale(&self) -> Locale {
        self.inner.locale.get()
    }

    /// Whether a locale transition is in progress
    pub fn is_transitioning(&self) -> bool {
        self.inner.transitioning.get()
    }

    pub fn locale_state(&self) -> Observable<Locale> {
        self.inner.locale.clone()
    }

    pub fn transitioning_state(&self) -> Observable<bool> {
        self.inner.transitioning.clone()
    }

    /// Translate `key` into the active locale
    pub fn translate(&self, key: &str) -> String {
        translations::translate(self.locale(), key)
    }

    /// Switch to `next` through the fade transition.
    ///
    /// No-op when `next` is already the active locale (or the destination of
    /// the transition in flight).
    pub fn set_locale(&self, next: Locale) {
        let token = {
            let mut transition = match self.inner.transition.lock() {
                Ok(t) => t,
                Err(poisoned) => poisoned.into_inner(),
            };
            let effective = transition.target.unwrap_or_else(|| self.locale());
            if effective == next {
                return;
            }
            transition.token += 1;
            transition.target = Some(next);
            transition.token
        };

        self.inner.transitioning.set(true);

        let resolver = self.clone();
        self.inner.ports.scheduler.schedule(
            EXIT_DELAY_MS,
            Box::new(move || {
                if !resolver.is_current(token) {
                    return;
                }
                resolver.apply(next);

                let settle = resolver.clone();
                resolver.inner.ports.scheduler.schedule(
                    SETTLE_DELAY_MS,
                    Box::new(move || settle.finish(token)),
                );
            }),
        );
    }

    /// Canonicalize the home URL for the active locale. Call again whenever
    /// the router location changes.
    pub fn sync_url(&self) {
        let url = &self.inner.ports.url;
        if let Some(target) = canonical_home_url(self.locale(), &url.pathname(), &url.search()) {
            url.replace(&target);
        }
    }

    fn is_current(&self, token: u64) -> bool {
        self.inner
            .transition
            .lock()
            .map(|t| t.token == token)
            .unwrap_or(false)
    }

    fn finish(&self, token: u64) {
        {
            let Ok(mut transition) = self.inner.transition.lock() else {
                return;
            };
            if transition.token != token {
                return;
            }
            transition.target = None;
        }
        self.inner.transitioning.set(false);
    }

    /// Make `locale` active and propagate it to storage, document and URL
    fn apply(&self, locale: Locale) {
        if self.inner.locale.set(locale) {
            leptos::logging::log!("Locale switched to {}", locale);
        }

        let storage = &self.inner.ports.storage;
        storage.set(STORAGE_KEY, locale.as_str());
        if storage.get(LEGACY_STORAGE_KEY).is_some() {
            storage.remove(LEGACY_STORAGE_KEY);
        }

        self.inner.ports.document.set_lang(locale.as_str());
        self.sync_url();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::{MemoryStore, MemoryUrl, StaticLanguages};

    fn resolve(store: &MemoryStore, url: &MemoryUrl, langs: &[&str]) -> Locale {
        resolve_initial_locale(store, url, &StaticLanguages::new(langs.iter().copied()))
    }

    #[test]
    fn test_stored_values_normalize() {
        let url = MemoryUrl::new("/", "");
        for (raw, expected) in [
            ("en", Locale::English),
            ("EN", Locale::English),
            ("PT", Locale::BrazilianPortuguese),
            ("pt-br", Locale::BrazilianPortuguese),
        ] {
            let store = MemoryStore::with_entries([(STORAGE_KEY, raw)]);
            assert_eq!(resolve(&store, &url, &[]), expected, "stored {:?}", raw);
        }
    }

    #[test]
    fn test_unrecognized_stored_value_falls_through() {
        let store = MemoryStore::with_entries([(STORAGE_KEY, "fr")]);
        let url = MemoryUrl::new("/pt", "");
        assert_eq!(resolve(&store, &url, &[]), Locale::BrazilianPortuguese);
    }

    #[test]
    fn test_legacy_key_is_read() {
        let store = MemoryStore::with_entries([(LEGACY_STORAGE_KEY, "pt-BR")]);
        let url = MemoryUrl::new("/en", "");
        assert_eq!(resolve(&store, &url, &[]), Locale::BrazilianPortuguese);
        // Resolution alone never writes
        assert!(store.ops().is_empty());
    }

    #[test]
    fn test_storage_beats_url() {
        let store = MemoryStore::with_entries([(STORAGE_KEY, "en")]);
        let url = MemoryUrl::new("/pt", "?lang=pt");
        assert_eq!(resolve(&store, &url, &["pt-BR"]), Locale::English);
    }

    #[test]
    fn test_query_hint_used_without_path_prefix() {
        let store = MemoryStore::new();
        let url = MemoryUrl::new("/", "?lang=pt-br");
        assert_eq!(resolve(&store, &url, &["en-US"]), Locale::BrazilianPortuguese);
    }

    #[test]
    fn test_client_languages_prefix_match() {
        let store = MemoryStore::new();
        let url = MemoryUrl::new("/", "");
        assert_eq!(
            resolve(&store, &url, &["fr-FR", "pt-PT"]),
            Locale::BrazilianPortuguese
        );
    }

    #[test]
    fn test_no_signals_defaults_to_english() {
        let store = MemoryStore::new();
        let url = MemoryUrl::new("/demo", "");
        assert_eq!(resolve(&store, &url, &[]), Locale::English);
    }

    #[test]
    fn test_headless_resolves_to_english() {
        let resolver = LocaleResolver::new(LocalePorts::headless());
        assert_eq!(resolver.locale(), Locale::English);
        assert!(!resolver.is_transitioning());
    }
}
