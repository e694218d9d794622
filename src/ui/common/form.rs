use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: RwSignal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional error message to display next to the field
    #[prop(optional)]
    error: Option<RwSignal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-dark-300 mb-2">
                {label}
                {required.then(|| view! { <span class="text-primary-500 ml-0.5">" *"</span> })}
            </label>
            <input
                type=input_type
                class="form-input"
                class:border-red-500=move || error.as_ref().is_some_and(|e| e.get().is_some())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(default = false)] required: bool,
    #[prop(default = "")] placeholder: &'static str,
    value: RwSignal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)] rows: u32,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] error: Option<RwSignal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-dark-300 mb-2">
                {label}
                {required.then(|| view! { <span class="text-primary-500 ml-0.5">" *"</span> })}
            </label>
            <textarea
                class="form-textarea"
                class:border-red-500=move || error.as_ref().is_some_and(|e| e.get().is_some())
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error />
        </div>
    }
}

/// Select/dropdown form field component with a leading placeholder option
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(default = false)] required: bool,
    /// Label for the empty placeholder option
    placeholder: &'static str,
    value: RwSignal<String>,
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] error: Option<RwSignal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-dark-300 mb-2">
                {label}
                {required.then(|| view! { <span class="text-primary-500 ml-0.5">" *"</span> })}
            </label>
            <select
                class="form-input"
                class:border-red-500=move || error.as_ref().is_some_and(|e| e.get().is_some())
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val.clone()>{text}</option>
                    }
                }).collect_view()}
            </select>
            <FieldError error=error />
        </div>
    }
}

/// Per-field error line, rendered under the input it belongs to.
#[component]
fn FieldError(error: Option<RwSignal<Option<String>>>) -> impl IntoView {
    view! {
        {move || {
            error.as_ref().and_then(|e| e.get()).map(|err| view! {
                <p class="mt-1 text-sm text-red-400 flex items-center space-x-1">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4" />
                    <span>{err}</span>
                </p>
            })
        }}
    }
}
