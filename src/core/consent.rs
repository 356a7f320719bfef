//! Cookie consent state and persisted preferences
//!
//! The banner is shown until a consent marker exists in storage. Any explicit
//! choice (accept all, reject all, custom save) writes the marker together
//! with the preference record. Dismissing the banner only hides it for the
//! current session; revoking deletes both entries and shows it again.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::observable::Observable;
use super::ports::{KeyValueStore, ScriptLoader};

/// Storage key of the "consent given" marker
pub const CONSENT_KEY: &str = "loyaltify_cookie_consent";

/// Storage key of the serialized [`CookiePreferences`]
pub const PREFERENCES_KEY: &str = "loyaltify_cookie_preferences";

/// Cookie categories the visitor has allowed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    /// Essential cookies, always enabled
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self::necessary_only()
    }
}

impl CookiePreferences {
    pub fn necessary_only() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
        }
    }

    pub fn all() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
        }
    }

    /// Copy with `necessary` forced on
    pub fn sanitized(self) -> Self {
        Self {
            necessary: true,
            ..self
        }
    }
}

/// Where the visitor stands in the consent flow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentStatus {
    /// No marker stored; the banner is (or will be) shown
    Unprompted,
    /// A choice has been recorded
    Decided,
}

/// Saved preferences, or the defaults when none (or garbage) are stored
fn stored_preferences(storage: &dyn KeyValueStore) -> CookiePreferences {
    storage
        .get(PREFERENCES_KEY)
        .and_then(|raw| match serde_json::from_str::<CookiePreferences>(&raw) {
            Ok(prefs) => Some(prefs.sanitized()),
            Err(e) => {
                leptos::logging::warn!("Ignoring stored cookie preferences: {}", e);
                None
            }
        })
        .unwrap_or_default()
}

/// Owner of the consent state for the session
#[derive(Clone)]
pub struct ConsentManager {
    storage: Arc<dyn KeyValueStore>,
    loader: Arc<dyn ScriptLoader>,
    preferences: Observable<CookiePreferences>,
    banner_visible: Observable<bool>,
}

impl ConsentManager {
    /// Read the marker and the saved preferences from storage.
    ///
    /// Saved preferences are loaded whether or not the marker is present; a
    /// record that fails to parse is ignored. When a choice is already
    /// recorded, the instrumentation it allows is loaded right away.
    pub fn new(storage: Arc<dyn KeyValueStore>, loader: Arc<dyn ScriptLoader>) -> Self {
        let has_marker = storage.get(CONSENT_KEY).is_some();
        let preferences = stored_preferences(storage.as_ref());

        let manager = Self {
            storage,
            loader,
            preferences: Observable::new(preferences),
            banner_visible: Observable::new(!has_marker),
        };

        if manager.status() == ConsentStatus::Decided {
            manager.load_allowed(preferences);
        }

        manager
    }

    fn load_allowed(&self, preferences: CookiePreferences) {
        if preferences.analytics {
            self.loader.load_analytics();
        }
        if preferences.marketing {
            self.loader.load_marketing();
        }
    }

    pub fn preferences(&self) -> CookiePreferences {
        self.preferences.get()
    }

    pub fn is_banner_visible(&self) -> bool {
        self.banner_visible.get()
    }

    pub fn preferences_state(&self) -> Observable<CookiePreferences> {
        self.preferences.clone()
    }

    pub fn banner_state(&self) -> Observable<bool> {
        self.banner_visible.clone()
    }

    /// Whether a choice is currently recorded in storage
    pub fn status(&self) -> ConsentStatus {
        if self.storage.get(CONSENT_KEY).is_some() {
            ConsentStatus::Decided
        } else {
            ConsentStatus::Unprompted
        }
    }

    pub fn accept_all(&self) {
        self.save_preferences(CookiePreferences::all());
    }

    pub fn reject_all(&self) {
        self.save_preferences(CookiePreferences::necessary_only());
    }

    /// Record an explicit choice: persist it, hide the banner and load the
    /// instrumentation it allows
    pub fn save_preferences(&self, preferences: CookiePreferences) {
        let preferences = preferences.sanitized();

        self.storage.set(CONSENT_KEY, "true");
        match serde_json::to_string(&preferences) {
            Ok(json) => self.storage.set(PREFERENCES_KEY, &json),
            Err(e) => leptos::logging::warn!("Failed to serialize cookie preferences: {}", e),
        }

        self.preferences.set(preferences);
        self.banner_visible.set(false);
        self.load_allowed(preferences);
    }

    /// Stage an edit in memory without persisting it
    pub fn update_preferences(&self, preferences: CookiePreferences) {
        self.preferences.set(preferences.sanitized());
    }

    /// Drop edits staged with `update_preferences`
    pub fn discard_changes(&self) {
        self.preferences.set(stored_preferences(self.storage.as_ref()));
    }

    /// Forget the recorded choice and ask again
    pub fn revoke_consent(&self) {
        self.storage.remove(CONSENT_KEY);
        self.storage.remove(PREFERENCES_KEY);
        self.preferences.set(CookiePreferences::default());
        self.banner_visible.set(true);
    }

    /// Hide the banner for this session without recording consent
    pub fn dismiss_banner(&self) {
        self.banner_visible.set(false);
    }

    /// Show the banner again, e.g. from a "cookie settings" link
    pub fn reopen_banner(&self) {
        self.banner_visible.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::{MemoryStore, RecordingLoader, StoreOp};

    fn manager(store: &MemoryStore, loader: &RecordingLoader) -> ConsentManager {
        ConsentManager::new(Arc::new(store.clone()), Arc::new(loader.clone()))
    }

    #[test]
    fn test_fresh_session_shows_banner() {
        let store = MemoryStore::new();
        let consent = manager(&store, &RecordingLoader::default());

        assert!(consent.is_banner_visible());
        assert_eq!(consent.status(), ConsentStatus::Unprompted);
        assert_eq!(consent.preferences(), CookiePreferences::necessary_only());
    }

    #[test]
    fn test_accept_all_persists_and_hides_banner() {
        let store = MemoryStore::new();
        let loader = RecordingLoader::default();
        let consent = manager(&store, &loader);

        consent.accept_all();

        assert!(!consent.is_banner_visible());
        assert_eq!(consent.status(), ConsentStatus::Decided);
        assert_eq!(store.get(CONSENT_KEY), Some("true".to_string()));
        assert_eq!(loader.analytics_loads(), 1);
        assert_eq!(loader.marketing_loads(), 1);

        let next_session = manager(&store, &RecordingLoader::default());
        assert!(!next_session.is_banner_visible());
        assert_eq!(next_session.preferences(), CookiePreferences::all());
    }

    #[test]
    fn test_reject_all_ignores_prior_state() {
        let store = MemoryStore::new();
        let loader = RecordingLoader::default();
        let consent = manager(&store, &loader);

        consent.update_preferences(CookiePreferences::all());
        consent.reject_all();

        assert_eq!(consent.preferences(), CookiePreferences::necessary_only());
        assert_eq!(loader.analytics_loads(), 0);
        assert_eq!(loader.marketing_loads(), 0);
    }

    #[test]
    fn test_necessary_cannot_be_disabled() {
        let store = MemoryStore::new();
        let consent = manager(&store, &RecordingLoader::default());

        consent.save_preferences(CookiePreferences {
            necessary: false,
            analytics: true,
            marketing: false,
        });

        assert!(consent.preferences().necessary);
        let saved: CookiePreferences =
            serde_json::from_str(&store.get(PREFERENCES_KEY).unwrap()).unwrap();
        assert!(saved.necessary);
        assert!(saved.analytics);
    }

    #[test]
    fn test_custom_save_loads_only_allowed_scripts() {
        let store = MemoryStore::new();
        let loader = RecordingLoader::default();
        let consent = manager(&store, &loader);

        consent.save_preferences(CookiePreferences {
            necessary: true,
            analytics: false,
            marketing: true,
        });

        assert_eq!(loader.analytics_loads(), 0);
        assert_eq!(loader.marketing_loads(), 1);
    }

    #[test]
    fn test_revoke_resets_and_shows_banner() {
        let store = MemoryStore::new();
        let consent = manager(&store, &RecordingLoader::default());
        consent.accept_all();

        consent.revoke_consent();

        assert!(consent.is_banner_visible());
        assert_eq!(consent.preferences(), CookiePreferences::default());
        assert_eq!(store.get(CONSENT_KEY), None);
        assert_eq!(store.get(PREFERENCES_KEY), None);

        let next_session = manager(&store, &RecordingLoader::default());
        assert!(next_session.is_banner_visible());
        assert_eq!(next_session.preferences(), CookiePreferences::default());
    }

    #[test]
    fn test_staged_edit_then_dismiss_leaves_storage_untouched() {
        let store = MemoryStore::new();
        let consent = manager(&store, &RecordingLoader::default());

        consent.update_preferences(CookiePreferences::all());
        consent.dismiss_banner();

        assert!(store.ops().is_empty());
        assert!(!consent.is_banner_visible());
        assert_eq!(consent.preferences(), CookiePreferences::all());

        // Dismissal is not consent: the next session asks again
        let next_session = manager(&store, &RecordingLoader::default());
        assert!(next_session.is_banner_visible());
        assert_eq!(next_session.preferences(), CookiePreferences::default());
    }

    #[test]
    fn test_corrupt_preferences_fall_back_to_defaults() {
        let store =
            MemoryStore::with_entries([(CONSENT_KEY, "true"), (PREFERENCES_KEY, "{not json")]);
        let consent = manager(&store, &RecordingLoader::default());

        assert!(!consent.is_banner_visible());
        assert_eq!(consent.preferences(), CookiePreferences::necessary_only());
    }

    #[test]
    fn test_preferences_loaded_without_marker() {
        let store = MemoryStore::with_entries([(
            PREFERENCES_KEY,
            r#"{"necessary":true,"analytics":true,"marketing":false}"#,
        )]);
        let consent = manager(&store, &RecordingLoader::default());

        assert!(consent.is_banner_visible());
        assert!(consent.preferences().analytics);
    }

    #[test]
    fn test_returning_visitor_loads_allowed_scripts() {
        let store = MemoryStore::with_entries([
            (CONSENT_KEY, "true"),
            (
                PREFERENCES_KEY,
                r#"{"necessary":true,"analytics":true,"marketing":true}"#,
            ),
        ]);
        let loader = RecordingLoader::default();
        let consent = manager(&store, &loader);

        assert!(!consent.is_banner_visible());
        assert_eq!(loader.analytics_loads(), 1);
        assert_eq!(loader.marketing_loads(), 1);
        assert!(store.ops().is_empty());
    }

    #[test]
    fn test_returning_visitor_loads_only_granted_categories() {
        let store = MemoryStore::with_entries([
            (CONSENT_KEY, "true"),
            (
                PREFERENCES_KEY,
                r#"{"necessary":true,"analytics":true,"marketing":false}"#,
            ),
        ]);
        let loader = RecordingLoader::default();
        manager(&store, &loader);

        assert_eq!(loader.analytics_loads(), 1);
        assert_eq!(loader.marketing_loads(), 0);
    }

    #[test]
    fn test_stored_record_without_marker_loads_nothing() {
        let store = MemoryStore::with_entries([(
            PREFERENCES_KEY,
            r#"{"necessary":true,"analytics":true,"marketing":true}"#,
        )]);
        let loader = RecordingLoader::default();
        manager(&store, &loader);

        assert_eq!(loader.analytics_loads(), 0);
        assert_eq!(loader.marketing_loads(), 0);
    }

    #[test]
    fn test_reopen_banner_does_not_write() {
        let store = MemoryStore::new();
        let consent = manager(&store, &RecordingLoader::default());
        consent.reject_all();
        store.clear_ops();

        consent.reopen_banner();

        assert!(consent.is_banner_visible());
        assert_eq!(consent.status(), ConsentStatus::Decided);
        assert!(store.ops().is_empty());
    }

    #[test]
    fn test_save_writes_marker_then_record() {
        let store = MemoryStore::new();
        let consent = manager(&store, &RecordingLoader::default());
        consent.reject_all();

        assert_eq!(
            store.ops(),
            vec![
                StoreOp::Set(CONSENT_KEY.to_string(), "true".to_string()),
                StoreOp::Set(
                    PREFERENCES_KEY.to_string(),
                    r#"{"necessary":true,"analytics":false,"marketing":false}"#.to_string()
                ),
            ]
        );
    }
}
