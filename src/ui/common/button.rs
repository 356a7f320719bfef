use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Plain `<button>` with the site's variants
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = if class.is_empty() {
        format!("btn-base {}", variant.class())
    } else {
        format!("btn-base {} {}", variant.class(), class)
    };

    view! {
        <button
            type="button"
            class=classes
            on:click=move |_| on_click.run(())
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
