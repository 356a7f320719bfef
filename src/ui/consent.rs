//! Cookie consent context
//!
//! Wraps a client-only [`ConsentManager`]. The banner stays hidden during
//! server rendering and hydration; it appears once the manager has read the
//! stored decision.

use leptos::prelude::*;

use crate::core::consent::{ConsentManager, CookiePreferences};

/// Cookie consent context
#[derive(Clone, Copy)]
pub struct ConsentContext {
    /// Whether the consent banner is shown
    pub banner_visible: RwSignal<bool>,
    /// Current category choices
    pub preferences: RwSignal<CookiePreferences>,
    /// Whether the preferences modal is open
    pub modal_open: RwSignal<bool>,
    manager: StoredValue<Option<ConsentManager>>,
}

impl ConsentContext {
    fn with_manager(&self, action: impl FnOnce(&ConsentManager)) {
        self.manager.with_value(|manager| match manager {
            Some(manager) => action(manager),
            None => leptos::logging::warn!("Consent action before hydration ignored"),
        });
    }

    pub fn accept_all(&self) {
        self.with_manager(ConsentManager::accept_all);
        self.modal_open.set(false);
    }

    pub fn reject_all(&self) {
        self.with_manager(ConsentManager::reject_all);
        self.modal_open.set(false);
    }

    /// Persist the choices currently shown in the modal
    pub fn save_preferences(&self) {
        let preferences = self.preferences.get_untracked();
        self.with_manager(|manager| manager.save_preferences(preferences));
        self.modal_open.set(false);
    }

    /// Toggle choices in the modal without persisting them
    pub fn update_preferences(&self, preferences: CookiePreferences) {
        self.with_manager(|manager| manager.update_preferences(preferences));
    }

    pub fn revoke_consent(&self) {
        self.with_manager(ConsentManager::revoke_consent);
    }

    pub fn dismiss_banner(&self) {
        self.with_manager(ConsentManager::dismiss_banner);
    }

    /// Show the banner again from the footer's "Cookie settings" button
    pub fn reopen_banner(&self) {
        self.with_manager(ConsentManager::reopen_banner);
    }

    pub fn open_modal(&self) {
        self.modal_open.set(true);
    }

    /// Close the modal, discarding unsaved toggles
    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.with_manager(ConsentManager::discard_changes);
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn attach(ctx: ConsentContext, manager: ConsentManager) {
    ctx.preferences.set(manager.preferences());
    ctx.banner_visible.set(manager.is_banner_visible());

    let preferences = ctx.preferences;
    manager
        .preferences_state()
        .subscribe(move |next| preferences.set(*next));

    let banner_visible = ctx.banner_visible;
    manager
        .banner_state()
        .subscribe(move |visible| banner_visible.set(*visible));

    ctx.manager.set_value(Some(manager));
}

/// Provide consent context to the component tree
pub fn provide_consent_context() -> ConsentContext {
    let ctx = ConsentContext {
        banner_visible: RwSignal::new(false),
        preferences: RwSignal::new(CookiePreferences::default()),
        modal_open: RwSignal::new(false),
        manager: StoredValue::new(None),
    };

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;

        use crate::ui::browser::{BrowserStorage, GtagScripts, config_from_document};

        Effect::new(move |_| {
            let config = config_from_document();
            let manager = ConsentManager::new(
                Arc::new(BrowserStorage),
                Arc::new(GtagScripts::new(config.analytics_id)),
            );
            attach(ctx, manager);
        });
    }

    provide_context(ctx);

    ctx
}

/// Use consent context from anywhere in the component tree
pub fn use_consent() -> ConsentContext {
    use_context::<ConsentContext>().expect("ConsentContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::consent::{CONSENT_KEY, PREFERENCES_KEY};
    use crate::core::ports::{KeyValueStore, MemoryStore, RecordingLoader};
    use std::sync::Arc;

    fn attached(store: &MemoryStore, loader: &RecordingLoader) -> ConsentContext {
        let ctx = ConsentContext {
            banner_visible: RwSignal::new(false),
            preferences: RwSignal::new(CookiePreferences::default()),
            modal_open: RwSignal::new(false),
            manager: StoredValue::new(None),
        };
        attach(
            ctx,
            ConsentManager::new(Arc::new(store.clone()), Arc::new(loader.clone())),
        );
        ctx
    }

    #[test]
    fn test_first_visit_shows_banner() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = attached(&MemoryStore::new(), &RecordingLoader::default());
            assert!(ctx.banner_visible.get_untracked());
            assert_eq!(ctx.preferences.get_untracked(), CookiePreferences::default());
        });
    }

    #[test]
    fn test_accept_all_hides_banner_and_closes_modal() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::new();
            let loader = RecordingLoader::default();
            let ctx = attached(&store, &loader);
            ctx.open_modal();

            ctx.accept_all();

            assert!(!ctx.banner_visible.get_untracked());
            assert!(!ctx.modal_open.get_untracked());
            assert_eq!(ctx.preferences.get_untracked(), CookiePreferences::all());
            assert_eq!(store.get(CONSENT_KEY), Some("true".to_string()));
            assert_eq!(loader.analytics_loads(), 1);
        });
    }

    #[test]
    fn test_close_modal_discards_unsaved_toggles() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::new();
            let ctx = attached(&store, &RecordingLoader::default());
            ctx.open_modal();

            ctx.update_preferences(CookiePreferences::all());
            assert!(ctx.preferences.get_untracked().marketing);

            ctx.close_modal();
            assert!(!ctx.preferences.get_untracked().marketing);
            assert_eq!(store.get(PREFERENCES_KEY), None);
        });
    }

    #[test]
    fn test_revoke_shows_banner_again() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::new();
            let ctx = attached(&store, &RecordingLoader::default());
            ctx.reject_all();
            assert!(!ctx.banner_visible.get_untracked());

            ctx.revoke_consent();
            assert!(ctx.banner_visible.get_untracked());
            assert_eq!(store.get(CONSENT_KEY), None);
        });
    }

    #[test]
    fn test_cookie_settings_reopens_banner_with_saved_choice() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::new();
            let ctx = attached(&store, &RecordingLoader::default());
            ctx.reject_all();
            store.clear_ops();

            ctx.reopen_banner();

            assert!(ctx.banner_visible.get_untracked());
            assert!(!ctx.modal_open.get_untracked());
            assert_eq!(ctx.preferences.get_untracked(), CookiePreferences::necessary_only());
            assert!(store.ops().is_empty());
        });
    }
}
