//! "Request a demo" form
//!
//! Fields validate as the visitor types once touched; a submit validates
//! everything. A valid request is tracked and handed to the visitor's mail
//! client as a `mailto:` link.

use std::collections::HashSet;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::demo_request::{DemoField, DemoRequestForm, LOCATION_OPTIONS};
use crate::core::translations;
use crate::ui::common::{FormField, SelectField};
use crate::ui::i18n::{I18nContext, use_i18n};
use crate::ui::icon::{Icon, icons};
use crate::ui::site::use_site;

fn placeholder_key(field: DemoField) -> &'static str {
    match field {
        DemoField::FirstName => "demo.form.firstNamePlaceholder",
        DemoField::LastName => "demo.form.lastNamePlaceholder",
        DemoField::Email => "demo.form.workEmailPlaceholder",
        DemoField::Company => "demo.form.companyPlaceholder",
        DemoField::Locations => "demo.form.locationsPlaceholder",
    }
}

/// Hand the request to the mail client
fn open_mail_client(link: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = leptos::web_sys::window() {
            if let Err(e) = window.location().set_href(link) {
                leptos::logging::warn!("Failed to open mail client: {:?}", e);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = link;
    }
}

#[derive(Clone, Copy)]
struct FormState {
    form: RwSignal<DemoRequestForm>,
    touched: RwSignal<HashSet<DemoField>>,
}

impl FormState {
    fn value(&self, field: DemoField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    }

    fn update(&self, field: DemoField) -> Callback<String> {
        let state = *self;
        Callback::new(move |value: String| {
            state.form.update(|f| f.set(field, value));
            state.touched.update(|t| {
                t.insert(field);
            });
        })
    }

    fn error(&self, field: DemoField, i18n: I18nContext) -> Signal<Option<String>> {
        let state = *self;
        Signal::derive(move || {
            if !state.touched.with(|t| t.contains(&field)) {
                return None;
            }
            state
                .form
                .with(|f| f.validate_field(field))
                .map(|error| i18n.t(error.message_key()))
        })
    }
}

#[component]
pub fn DemoForm() -> impl IntoView {
    let i18n = use_i18n();
    let site = use_site();

    let state = FormState {
        form: RwSignal::new(DemoRequestForm::default()),
        touched: RwSignal::new(HashSet::new()),
    };
    let sent = RwSignal::new(false);

    let text = move |key: &'static str| Signal::derive(move || i18n.t(key));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match state.form.with_untracked(DemoRequestForm::validate) {
            Ok(request) => {
                site.tracker.with_value(|tracker| tracker.track_demo_request());

                let locale = i18n.locale.get_untracked();
                let link = request.mailto_link(&site.contact_email(), |key| {
                    translations::translate(locale, key)
                });

                state.form.set(DemoRequestForm::default());
                state.touched.set(HashSet::new());
                sent.set(true);
                open_mail_client(&link);
            }
            Err(errors) => {
                leptos::logging::log!("Demo request rejected: {}", errors);
                state
                    .touched
                    .set(errors.0.iter().map(|error| error.field()).collect());
                sent.set(false);
            }
        }
    };

    let text_field = move |field: DemoField, input_type: &'static str, autocomplete: &'static str| {
        view! {
            <FormField
                name=field_name(field)
                label=text(field.label_key())
                input_type=input_type
                autocomplete=autocomplete
                placeholder=text(placeholder_key(field))
                value=state.value(field)
                on_input=state.update(field)
                error=state.error(field, i18n)
            />
        }
    };

    view! {
        <div class="card p-8 shadow-xl">
            <div class="mb-6">
                <h2 class="text-2xl font-bold mb-2">{move || i18n.t("demo.form.title")}</h2>
                <p class="text-sm text-muted">{move || i18n.t("demo.form.subtitle")}</p>
            </div>

            <Show when=move || sent.get()>
                <div class="notice-success mb-5" role="status">
                    <Icon name=icons::CHECK_CIRCLE class="icon-text"/>
                    <div>
                        <p class="font-semibold">{move || i18n.t("demo.form.success.title")}</p>
                        <p class="text-sm">{move || i18n.t("demo.form.success.description")}</p>
                    </div>
                </div>
            </Show>

            <form class="space-y-5" novalidate=true on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {text_field(DemoField::FirstName, "text", "given-name")}
                    {text_field(DemoField::LastName, "text", "family-name")}
                </div>
                {text_field(DemoField::Email, "email", "email")}
                {text_field(DemoField::Company, "text", "organization")}
                <SelectField
                    name=field_name(DemoField::Locations)
                    label=text(DemoField::Locations.label_key())
                    placeholder=text(placeholder_key(DemoField::Locations))
                    value=state.value(DemoField::Locations)
                    on_change=state.update(DemoField::Locations)
                    options=&LOCATION_OPTIONS
                    error=state.error(DemoField::Locations, i18n)
                />

                <button type="submit" class="btn-base btn-primary w-full">
                    {move || i18n.t("demo.form.submit")}
                    <Icon name=icons::ARROW_RIGHT class="icon-btn"/>
                </button>

                <p class="text-xs text-muted text-center">{move || i18n.t("demo.form.compliance")}</p>
            </form>
        </div>
    }
}

fn field_name(field: DemoField) -> &'static str {
    match field {
        DemoField::FirstName => "firstName",
        DemoField::LastName => "lastName",
        DemoField::Email => "email",
        DemoField::Company => "company",
        DemoField::Locations => "locations",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_translated_placeholder() {
        for field in DemoField::ALL {
            for locale in crate::core::locale::Locale::ALL {
                let key = placeholder_key(field);
                assert_ne!(translations::translate(locale, key), key);
            }
        }
    }

    #[test]
    fn test_field_names_are_unique() {
        let names: HashSet<&str> = DemoField::ALL.iter().map(|f| field_name(*f)).collect();
        assert_eq!(names.len(), DemoField::ALL.len());
    }
}
