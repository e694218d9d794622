use leptos::prelude::*;

/// Small inline spinner for buttons and compact loading states.
#[component]
pub fn InlineSpinner(#[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <div
            class=format!("{class} border-2 border-white border-t-transparent rounded-full animate-spin")
            role="status"
            aria-label="Loading"
        ></div>
    }
}
