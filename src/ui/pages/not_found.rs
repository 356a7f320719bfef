//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::i18n::use_i18n;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=move || format!("404 | {}", i18n.t("notFound.title"))/>

        <div class="min-h-screen flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-slate-100 rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12"/>
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">{move || i18n.t("notFound.title")}</h2>

                <p class="text-muted mb-8 max-w-md mx-auto">{move || i18n.t("notFound.description")}</p>

                <a
                    href=move || i18n.locale.get().home_path()
                    class="btn-base btn-primary"
                >
                    {move || i18n.t("notFound.goHome")}
                </a>
            </div>
        </div>
    }
}
