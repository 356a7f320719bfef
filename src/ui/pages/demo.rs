//! Demo request page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::demo_form::DemoForm;
use crate::ui::i18n::use_i18n;
use crate::ui::layout::{Footer, Header};

#[component]
pub fn DemoPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Title text=move || format!("{} | Loyaltify", i18n.t("demo.title"))/>

        <Header/>
        <main class="container mx-auto px-4 py-16">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start">
                <div class="space-y-4">
                    <h1 class="text-4xl font-bold">{move || i18n.t("demo.title")}</h1>
                    <p class="text-lg text-muted">{move || i18n.t("demo.subtitle")}</p>
                </div>
                <DemoForm/>
            </div>
        </main>
        <Footer/>
    }
}
