//! Privacy policy, terms of service and cookie policy pages

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::i18n::use_i18n;
use crate::ui::layout::{Footer, Header};

/// Legal documents, keyed by their translation section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDocument {
    Privacy,
    Terms,
    Cookies,
}

impl LegalDocument {
    fn key(&self, leaf: &str) -> String {
        let section = match self {
            LegalDocument::Privacy => "privacy",
            LegalDocument::Terms => "terms",
            LegalDocument::Cookies => "cookies",
        };
        format!("legal.{}.{}", section, leaf)
    }
}

#[component]
pub fn LegalPage(document: LegalDocument) -> impl IntoView {
    let i18n = use_i18n();
    let title_key = document.key("title");
    let body_key = document.key("body");
    let page_title = {
        let title_key = title_key.clone();
        move || format!("{} | Loyaltify", i18n.t(&title_key))
    };

    view! {
        <Title text=page_title/>

        <Header/>
        <main class="container mx-auto max-w-3xl px-4 py-16 space-y-6">
            <h1 class="text-4xl font-bold">{move || i18n.t(&title_key)}</h1>
            <p class="text-sm text-muted">{move || i18n.t("legal.lastUpdated")}</p>
            <p class="leading-relaxed">{move || i18n.t(&body_key)}</p>
        </main>
        <Footer/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::Locale;
    use crate::core::translations::translate;

    #[test]
    fn test_every_document_is_translated() {
        for document in [LegalDocument::Privacy, LegalDocument::Terms, LegalDocument::Cookies] {
            for locale in Locale::ALL {
                for leaf in ["title", "body"] {
                    let key = document.key(leaf);
                    assert_ne!(translate(locale, &key), key);
                }
            }
        }
    }
}
