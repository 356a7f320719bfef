//! Header control for switching between the supported languages

use leptos::prelude::*;

use crate::core::locale::Locale;
use crate::ui::i18n::use_i18n;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div
            class="flex items-center gap-1"
            role="group"
            aria-label=move || i18n.t("header.language")
        >
            <Icon name=icons::GLOBE class="w-4 h-4 text-muted"/>
            {Locale::ALL
                .into_iter()
                .map(|locale| {
                    let is_active = move || i18n.locale.get() == locale;
                    view! {
                        <button
                            type="button"
                            class="lang-option"
                            class:lang-option-active=is_active
                            aria-pressed=move || is_active().to_string()
                            lang=locale.as_str()
                            disabled=move || i18n.transitioning.get()
                            on:click=move |_| i18n.set_locale(locale)
                        >
                            {locale.short_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
