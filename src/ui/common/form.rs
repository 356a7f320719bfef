use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline validation message under a field
#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="flex items-center gap-1 text-sm text-error" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Labelled text input
#[component]
pub fn FormField(
    /// Input name and id
    name: &'static str,
    /// Field label text
    #[prop(into)]
    label: Signal<String>,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(into)]
    placeholder: Signal<String>,
    /// Browser autofill hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Validation message, if any
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>{move || label.get()}</label>
            <input
                id=name
                name=name
                type=input_type
                autocomplete=autocomplete
                class="input-base"
                class:input-invalid=move || error.get().is_some()
                aria-invalid=move || error.get().is_some().to_string()
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

/// Labelled `<select>` with a disabled placeholder option
#[component]
pub fn SelectField(
    /// Select name and id
    name: &'static str,
    /// Field label text
    #[prop(into)]
    label: Signal<String>,
    /// Text of the empty option
    #[prop(into)]
    placeholder: Signal<String>,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Option values, shown as-is
    options: &'static [&'static str],
    /// Validation message, if any
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>{move || label.get()}</label>
            <select
                id=name
                name=name
                class="select-base"
                class:input-invalid=move || error.get().is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true>{move || placeholder.get()}</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
            <FieldError error=error/>
        </div>
    }
}

/// Checkbox with a title and description
#[component]
pub fn CheckboxField(
    /// Input id
    id: &'static str,
    /// Field label text
    #[prop(into)]
    label: Signal<String>,
    /// Description text below the label
    #[prop(into)]
    description: Signal<String>,
    /// Current checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <input
                id=id
                type="checkbox"
                class="mt-1 w-4 h-4 rounded"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                disabled=disabled
            />
            <div class="flex-1">
                <label class="label cursor-pointer" for=id>{move || label.get()}</label>
                <p class="text-sm text-muted mt-0.5">{move || description.get()}</p>
            </div>
        </div>
    }
}
