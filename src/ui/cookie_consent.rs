//! Cookie banner and preferences dialog

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::consent::CookiePreferences;
use crate::ui::common::{BaseModal, Button, ButtonVariant, CheckboxField};
use crate::ui::consent::use_consent;
use crate::ui::i18n::use_i18n;
use crate::ui::icon::{Icon, icons};

/// Bottom banner asking for a consent decision
#[component]
pub fn CookieBanner() -> impl IntoView {
    let i18n = use_i18n();
    let consent = use_consent();

    view! {
        <Show when=move || consent.banner_visible.get()>
            <div class="cookie-banner" role="region" aria-label=move || i18n.t("cookies.banner.title")>
                <div class="container mx-auto max-w-6xl card relative p-6 md:p-8">
                    <div class="flex flex-col md:flex-row gap-6 items-start md:items-center justify-between">
                        <div class="flex-1 space-y-3">
                            <h3 class="text-lg font-bold">{move || i18n.t("cookies.banner.title")}</h3>
                            <p class="text-sm text-muted">
                                {move || i18n.t("cookies.banner.description")}
                                " "
                                <A href="/politica-cookies" attr:class="link">
                                    {move || i18n.t("cookies.banner.policyLink")}
                                </A>
                            </p>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-3 w-full md:w-auto">
                            <Button
                                variant=ButtonVariant::Outline
                                on_click=Callback::new(move |_| consent.reject_all())
                            >
                                {move || i18n.t("cookies.banner.rejectAll")}
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                on_click=Callback::new(move |_| consent.open_modal())
                            >
                                {move || i18n.t("cookies.banner.customize")}
                            </Button>
                            <Button on_click=Callback::new(move |_| consent.accept_all())>
                                {move || i18n.t("cookies.banner.acceptAll")}
                            </Button>
                        </div>
                    </div>

                    <button
                        type="button"
                        class="btn-icon absolute top-4 right-4"
                        on:click=move |_| consent.dismiss_banner()
                        aria-label=move || i18n.t("cookies.banner.close")
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Per-category toggles; changes apply only when saved
#[component]
pub fn CookiePreferencesModal() -> impl IntoView {
    let i18n = use_i18n();
    let consent = use_consent();
    let prefs = consent.preferences;

    let toggle = move |apply: fn(&mut CookiePreferences, bool)| {
        Callback::new(move |checked: bool| {
            let mut next = prefs.get_untracked();
            apply(&mut next, checked);
            consent.update_preferences(next);
        })
    };

    view! {
        <BaseModal
            title=Signal::derive(move || i18n.t("cookies.modal.title"))
            subtitle=Signal::derive(move || i18n.t("cookies.modal.description"))
            is_open=consent.modal_open
            on_close=Callback::new(move |_| consent.close_modal())
            close_label=Signal::derive(move || i18n.t("cookies.banner.close"))
        >
            <div class="space-y-5">
                <CheckboxField
                    id="cookies-necessary"
                    label=Signal::derive(move || i18n.t("cookies.modal.necessary.title"))
                    description=Signal::derive(move || i18n.t("cookies.modal.necessary.description"))
                    checked=Signal::derive(|| true)
                    on_change=Callback::new(|_| {})
                    disabled=true
                />
                <CheckboxField
                    id="cookies-analytics"
                    label=Signal::derive(move || i18n.t("cookies.modal.analytics.title"))
                    description=Signal::derive(move || i18n.t("cookies.modal.analytics.description"))
                    checked=Signal::derive(move || prefs.get().analytics)
                    on_change=toggle(|p, on| p.analytics = on)
                />
                <CheckboxField
                    id="cookies-marketing"
                    label=Signal::derive(move || i18n.t("cookies.modal.marketing.title"))
                    description=Signal::derive(move || i18n.t("cookies.modal.marketing.description"))
                    checked=Signal::derive(move || prefs.get().marketing)
                    on_change=toggle(|p, on| p.marketing = on)
                />

                <div class="flex flex-col sm:flex-row justify-end gap-2 divider-top pt-4">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| consent.accept_all())
                    >
                        {move || i18n.t("cookies.modal.allowAll")}
                    </Button>
                    <Button on_click=Callback::new(move |_| consent.save_preferences())>
                        {move || i18n.t("cookies.modal.save")}
                    </Button>
                </div>
            </div>
        </BaseModal>
    }
}
