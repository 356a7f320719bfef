use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::{wasm_bindgen::JsCast, web_sys};

/// Dialog shell shared by the site's modals
///
/// The content stays mounted while closed so form state survives reopening.
#[component]
pub fn BaseModal(
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    /// Optional subtitle/description
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Accessible label of the close button
    #[prop(into)]
    close_label: Signal<String>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-2xl)
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop transition-all duration-300"
                } else {
                    "modal-backdrop opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                // Only clicks on the backdrop itself close the dialog
                #[cfg(feature = "hydrate")]
                {
                    if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                        if element.class_list().contains("modal-backdrop") {
                            on_close.run(());
                        }
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("w-full {} card", max_width)>
                <div class="card-header">
                    <div>
                        <h3 class="title-lg">{move || title.get()}</h3>
                        {subtitle.map(|s| view! { <p class="subtitle">{move || s.get()}</p> })}
                    </div>
                    <button
                        type="button"
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        aria-label=move || close_label.get()
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
