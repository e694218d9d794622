//! Reusable inline message components.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Top-level error banner driven by an optional message signal.
#[component]
pub fn ErrorMessage(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|text| view! {
                <p class="mb-4 text-red-400 flex items-center justify-center space-x-1">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4" />
                    <span>{text}</span>
                </p>
            })
        }}
    }
}
