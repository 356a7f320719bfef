//! Landing page served at `/`, `/en` and `/pt`

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::i18n::{I18nContext, use_i18n};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{Footer, Header};

/// (translation prefix, icon) of each feature card
const FEATURES: [(&str, &str); 4] = [
    ("features.cashback", icons::COINS),
    ("features.promotions", icons::TAG),
    ("features.subscription", icons::REPEAT),
    ("features.gamification", icons::TROPHY),
];

#[component]
fn Hero(i18n: I18nContext) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container mx-auto px-4 py-24 text-center space-y-8">
                <h1 class="text-4xl md:text-6xl font-bold leading-tight">
                    {move || i18n.t("hero.title")}
                    " "
                    <span class="text-accent">{move || i18n.t("hero.titleHighlight")}</span>
                    " "
                    {move || i18n.t("hero.titleEnd")}
                </h1>
                <p class="text-lg text-muted max-w-2xl mx-auto">{move || i18n.t("hero.subtitle")}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <A href="/demo" attr:class="btn-base btn-primary btn-lg">
                        {move || i18n.t("hero.bookDemo")}
                        <Icon name=icons::ARROW_RIGHT class="icon-btn"/>
                    </A>
                    <a href="#features" class="btn-base btn-outline btn-lg">
                        {move || i18n.t("hero.viewDocs")}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features(i18n: I18nContext) -> impl IntoView {
    view! {
        <section id="features" class="container mx-auto px-4 py-20 space-y-12">
            <div class="text-center max-w-3xl mx-auto space-y-4">
                <h2 class="text-3xl md:text-4xl font-bold">
                    {move || i18n.t("features.title")}
                    " "
                    <span class="text-accent">{move || i18n.t("features.titleHighlight")}</span>
                </h2>
                <p class="text-muted">{move || i18n.t("features.subtitle")}</p>
            </div>

            <div id="solutions" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {FEATURES
                    .into_iter()
                    .map(|(prefix, icon)| {
                        let title = format!("{}.title", prefix);
                        let description = format!("{}.description", prefix);
                        view! {
                            <div class="card p-6 space-y-3">
                                <Icon name=icon class="w-8 h-8"/>
                                <h3 class="text-lg font-semibold">{move || i18n.t(&title)}</h3>
                                <p class="text-sm text-muted">{move || i18n.t(&description)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FinalCta(i18n: I18nContext) -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container mx-auto px-4 py-20 text-center space-y-6">
                <h2 class="text-3xl md:text-4xl font-bold">{move || i18n.t("cta.title")}</h2>
                <p class="text-muted max-w-2xl mx-auto">{move || i18n.t("cta.subtitle")}</p>
                <A href="/demo" attr:class="btn-base btn-primary btn-lg">
                    {move || i18n.t("cta.bookDemo")}
                </A>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Header/>
        <main>
            <Hero i18n=i18n/>
            <Features i18n=i18n/>
            <FinalCta i18n=i18n/>
        </main>
        <Footer/>
    }
}
