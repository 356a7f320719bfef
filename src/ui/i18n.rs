//! Locale context for the component tree
//!
//! Provides:
//! - I18nContext with the active locale and the transition flag as signals
//! - `t()` lookups that re-render when the locale swaps
//! - A client-only [`LocaleResolver`] wired to the browser and the router
//!
//! Server rendering and the first client render both use the default locale
//! so hydration matches; the resolver takes over right after hydration.

use leptos::prelude::*;

use crate::core::locale::Locale;
use crate::core::locale_resolver::LocaleResolver;
use crate::core::translations;

/// Locale context
#[derive(Clone, Copy)]
pub struct I18nContext {
    /// Locale currently rendered
    pub locale: RwSignal<Locale>,
    /// True while a language switch is fading out and back in
    pub transitioning: RwSignal<bool>,
    resolver: StoredValue<Option<LocaleResolver>>,
}

impl I18nContext {
    /// Translate `key` in the active locale (tracked)
    pub fn t(&self, key: &str) -> String {
        translations::translate(self.locale.get(), key)
    }

    /// Start a language switch
    pub fn set_locale(&self, next: Locale) {
        self.resolver.with_value(|resolver| match resolver {
            Some(resolver) => resolver.set_locale(next),
            None => leptos::logging::warn!("Locale switch before hydration ignored"),
        });
    }

    /// Re-align the address bar after client-side navigation
    pub fn sync_url(&self) {
        self.resolver.with_value(|resolver| {
            if let Some(resolver) = resolver {
                resolver.sync_url();
            }
        });
    }
}

/// Bridge a resolver's observable state into the context signals
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn attach(ctx: I18nContext, resolver: LocaleResolver) {
    ctx.locale.set(resolver.locale());
    ctx.transitioning.set(resolver.is_transitioning());

    let locale = ctx.locale;
    resolver
        .locale_state()
        .subscribe(move |next| locale.set(*next));

    let transitioning = ctx.transitioning;
    resolver
        .transitioning_state()
        .subscribe(move |flag| transitioning.set(*flag));

    ctx.resolver.set_value(Some(resolver));
}

/// Provide locale context to the component tree
pub fn provide_i18n_context() -> I18nContext {
    let ctx = I18nContext {
        locale: RwSignal::new(Locale::default()),
        transitioning: RwSignal::new(false),
        resolver: StoredValue::new(None),
    };

    provide_context(ctx);

    ctx
}

/// Start the browser-backed resolver once hydration is done.
///
/// URL replacements go through the router, so this must run inside
/// `<Router>`.
#[cfg(feature = "hydrate")]
pub fn connect_browser_resolver(ctx: I18nContext) {
    use std::sync::Arc;

    use leptos_router::hooks::use_navigate;

    use crate::core::locale_resolver::LocalePorts;
    use crate::ui::browser::{
        BrowserDocument, BrowserStorage, NavigatorLanguages, RouterUrl, TimeoutScheduler,
    };

    let url = RouterUrl::new(use_navigate());

    // Runs once, after hydration
    Effect::new(move |_| {
        let resolver = LocaleResolver::new(LocalePorts {
            storage: Arc::new(BrowserStorage),
            url: Arc::new(url),
            document: Arc::new(BrowserDocument),
            languages: Arc::new(NavigatorLanguages),
            scheduler: Arc::new(TimeoutScheduler),
        });
        attach(ctx, resolver);
    });
}

/// Use locale context from anywhere in the component tree
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext should be provided")
}
