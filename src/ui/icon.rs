use leptos::prelude::*;

/// SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon name (file name without .svg)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const GLOBE: &str = "globe";
    pub const COINS: &str = "coins";
    pub const TAG: &str = "tag";
    pub const REPEAT: &str = "repeat";
    pub const TROPHY: &str = "trophy";
}
