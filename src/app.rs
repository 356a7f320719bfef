use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::core::config::Config;
use crate::ui::cookie_consent::{CookieBanner, CookiePreferencesModal};
use crate::ui::pages::{DemoPage, HomePage, LegalDocument, LegalPage, NotFoundPage};
use crate::ui::{provide_consent_context, provide_i18n_context, provide_site_context, use_i18n, use_site};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided by the server for every request; the 404 fallback may not have it
    let config = use_context::<Config>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {config
                    .meta_entries()
                    .into_iter()
                    .map(|(name, content)| view! { <meta name=name content=content/> })
                    .collect_view()}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Page view tracking and address bar upkeep on every navigation
#[component]
fn NavigationEffects() -> impl IntoView {
    let location = use_location();
    let i18n = use_i18n();
    let site = use_site();

    #[cfg(feature = "hydrate")]
    crate::ui::i18n::connect_browser_resolver(i18n);

    Effect::new(move |_| {
        let path = location.pathname.get();
        i18n.sync_url();
        site.tracker.with_value(|tracker| tracker.track_page_view(&path));
    });
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site = provide_site_context();
    let i18n = provide_i18n_context();
    provide_consent_context();

    let canonical = site.config.with_value(|config| config.site_url.clone());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/loyaltify.css"/>
        <Title text=move || i18n.t("meta.title")/>
        <Meta name="description" content=move || i18n.t("meta.description")/>
        <Link rel="canonical" href=canonical/>

        <Router>
            <NavigationEffects/>
            // Fades out while the language swaps
            <div
                class="locale-fade"
                class:locale-fade-out=move || i18n.transitioning.get()
            >
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/en") view=HomePage/>
                    <Route path=path!("/pt") view=HomePage/>
                    <Route path=path!("/demo") view=DemoPage/>
                    <Route
                        path=path!("/privacy-policy")
                        view=|| view! { <LegalPage document=LegalDocument::Privacy/> }
                    />
                    <Route
                        path=path!("/terms-of-service")
                        view=|| view! { <LegalPage document=LegalDocument::Terms/> }
                    />
                    <Route
                        path=path!("/politica-cookies")
                        view=|| view! { <LegalPage document=LegalDocument::Cookies/> }
                    />
                </Routes>
            </div>
            <CookieBanner/>
            <CookiePreferencesModal/>
        </Router>
    }
}
