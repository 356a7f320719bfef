//! Header and footer shared by every page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::consent::use_consent;
use crate::ui::i18n::use_i18n;
use crate::ui::language_switcher::LanguageSwitcher;
use crate::ui::site::use_site;

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let home = move || i18n.locale.get().home_path();

    view! {
        <header class="site-header">
            <nav class="container mx-auto flex items-center justify-between gap-6 px-4 py-4">
                <a href=home class="text-xl font-bold">"Loyaltify"</a>

                <div class="hidden md:flex items-center gap-6">
                    <a href=move || format!("{}#features", home()) class="nav-link">
                        {move || i18n.t("header.features")}
                    </a>
                    <a href=move || format!("{}#solutions", home()) class="nav-link">
                        {move || i18n.t("header.solutions")}
                    </a>
                    <a href=move || format!("{}#contact", home()) class="nav-link">
                        {move || i18n.t("header.contact")}
                    </a>
                </div>

                <div class="flex items-center gap-4">
                    <LanguageSwitcher/>
                    <A href="/demo" attr:class="btn-base btn-primary">
                        {move || i18n.t("header.bookDemo")}
                    </A>
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let consent = use_consent();
    let site = use_site();
    let contact_email = site.contact_email();
    let mailto = format!("mailto:{}", contact_email);

    view! {
        <footer id="contact" class="site-footer">
            <div class="container mx-auto px-4 py-12 space-y-8">
                <div class="flex flex-col md:flex-row justify-between gap-6">
                    <div class="max-w-sm space-y-2">
                        <p class="text-xl font-bold">"Loyaltify"</p>
                        <p class="text-sm text-muted">{move || i18n.t("footer.description")}</p>
                    </div>
                    <a href=mailto class="nav-link">{contact_email}</a>
                </div>

                <div class="divider-top pt-6 flex flex-col md:flex-row justify-between gap-4 text-sm text-muted">
                    <p>{move || i18n.t("footer.copyright")}</p>
                    <div class="flex flex-wrap gap-4">
                        <A href="/privacy-policy" attr:class="nav-link">
                            {move || i18n.t("footer.privacyPolicy")}
                        </A>
                        <A href="/terms-of-service" attr:class="nav-link">
                            {move || i18n.t("footer.termsOfService")}
                        </A>
                        <A href="/politica-cookies" attr:class="nav-link">
                            {move || i18n.t("footer.cookiePolicy")}
                        </A>
                        <button type="button" class="nav-link" on:click=move |_| consent.reopen_banner()>
                            {move || i18n.t("footer.cookieSettings")}
                        </button>
                        <button type="button" class="nav-link" on:click=move |_| consent.revoke_consent()>
                            {move || i18n.t("footer.revokeConsent")}
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
