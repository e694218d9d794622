//! Inline SVG icons.
//!
//! Icons are rendered inline (no asset fetches) so they inherit
//! `currentColor` and work before hydration.

use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, see the [`icons`] constants
    name: &'static str,
    /// CSS classes for sizing/coloring
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_shape(name)}
        </svg>
    }
}

fn icon_shape(name: &'static str) -> impl IntoView {
    match name {
        icons::SHIELD => view! {
            <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
        }.into_any(),
        icons::MENU => view! {
            <path d="M4 6h16M4 12h16M4 18h16" />
        }.into_any(),
        icons::X => view! {
            <path d="M18 6 6 18M6 6l12 12" />
        }.into_any(),
        icons::SEND => view! {
            <path d="m22 2-7 20-4-9-9-4Z" />
            <path d="M22 2 11 13" />
        }.into_any(),
        icons::CHECK => view! {
            <path d="M20 6 9 17l-5-5" />
        }.into_any(),
        icons::CHECK_CIRCLE => view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <path d="m9 11 3 3L22 4" />
        }.into_any(),
        icons::ALERT_CIRCLE => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="M12 8v4M12 16h.01" />
        }.into_any(),
        icons::ARROW_RIGHT => view! {
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        }.into_any(),
        icons::BOOK_OPEN => view! {
            <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
            <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
        }.into_any(),
        icons::ZAP => view! {
            <path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z" />
        }.into_any(),
        icons::BRAIN => view! {
            <path d="M9.5 2A2.5 2.5 0 0 1 12 4.5v15a2.5 2.5 0 0 1-4.96.44 2.5 2.5 0 0 1-2.96-3.08 3 3 0 0 1-.34-5.58 2.5 2.5 0 0 1 1.32-4.24 2.5 2.5 0 0 1 1.98-3A2.5 2.5 0 0 1 9.5 2Z" />
            <path d="M14.5 2A2.5 2.5 0 0 0 12 4.5v15a2.5 2.5 0 0 0 4.96.44 2.5 2.5 0 0 0 2.96-3.08 3 3 0 0 0 .34-5.58 2.5 2.5 0 0 0-1.32-4.24 2.5 2.5 0 0 0-1.98-3A2.5 2.5 0 0 0 14.5 2Z" />
        }.into_any(),
        icons::NETWORK => view! {
            <rect x="16" y="16" width="6" height="6" rx="1" />
            <rect x="2" y="16" width="6" height="6" rx="1" />
            <rect x="9" y="2" width="6" height="6" rx="1" />
            <path d="M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3M12 12V8" />
        }.into_any(),
        icons::DATABASE => view! {
            <path d="M12 2C7.58 2 4 3.79 4 6s3.58 4 8 4 8-1.79 8-4-3.58-4-8-4" />
            <path d="M4 6v6c0 2.21 3.58 4 8 4s8-1.79 8-4V6" />
            <path d="M4 12v6c0 2.21 3.58 4 8 4s8-1.79 8-4v-6" />
        }.into_any(),
        icons::LOCK => view! {
            <rect x="3" y="11" width="18" height="11" rx="2" />
            <path d="M7 11V7a5 5 0 0 1 10 0v4" />
        }.into_any(),
        icons::EXTERNAL_LINK => view! {
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        }.into_any(),
        icons::MAIL => view! {
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        }.into_any(),
        icons::USERS => view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75" />
        }.into_any(),
        icons::SERVER => view! {
            <rect x="2" y="2" width="20" height="8" rx="2" />
            <rect x="2" y="14" width="20" height="8" rx="2" />
            <path d="M6 6h.01M6 18h.01" />
        }.into_any(),
        icons::CLOCK => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="M12 6v6l4 2" />
        }.into_any(),
        icons::GLOBE => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="M2 12h20" />
            <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
        }.into_any(),
        icons::TARGET => view! {
            <circle cx="12" cy="12" r="10" />
            <circle cx="12" cy="12" r="6" />
            <circle cx="12" cy="12" r="2" />
        }.into_any(),
        icons::CPU => view! {
            <rect x="4" y="4" width="16" height="16" rx="2" />
            <rect x="9" y="9" width="6" height="6" />
            <path d="M9 2v2M15 2v2M9 20v2M15 20v2M2 9h2M2 15h2M20 9h2M20 15h2" />
        }.into_any(),
        icons::SETTINGS => view! {
            <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" />
            <circle cx="12" cy="12" r="3" />
        }.into_any(),
        icons::LAYERS => view! {
            <path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z" />
            <path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" />
            <path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" />
        }.into_any(),
        icons::ACTIVITY => view! {
            <path d="M22 12h-4l-3 9L9 3l-3 9H2" />
        }.into_any(),
        icons::MONITOR => view! {
            <rect x="2" y="3" width="20" height="14" rx="2" />
            <path d="M8 21h8M12 17v4" />
        }.into_any(),
        icons::CHEVRON_DOWN => view! {
            <path d="m6 9 6 6 6-6" />
        }.into_any(),
        icons::LOADER => view! {
            <path d="M12 2v4M12 18v4M4.93 4.93l2.83 2.83M16.24 16.24l2.83 2.83M2 12h4M18 12h4M4.93 19.07l2.83-2.83M16.24 7.76l2.83-2.83" />
        }.into_any(),
        _ => view! {
            <path d="M13 10V3L4 14h7v7l9-11h-7z" />
        }.into_any(),
    }
}

/// GitHub mark, filled rather than stroked.
#[component]
pub fn GithubIcon(#[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/>
        </svg>
    }
}

/// Icon name constants.
#[allow(dead_code)]
pub mod icons {
    pub const SHIELD: &str = "shield";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const SEND: &str = "send";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BOOK_OPEN: &str = "book-open";
    pub const ZAP: &str = "zap";
    pub const BRAIN: &str = "brain";
    pub const NETWORK: &str = "network";
    pub const DATABASE: &str = "database";
    pub const LOCK: &str = "lock";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const MAIL: &str = "mail";
    pub const USERS: &str = "users";
    pub const SERVER: &str = "server";
    pub const CLOCK: &str = "clock";
    pub const GLOBE: &str = "globe";
    pub const TARGET: &str = "target";
    pub const CPU: &str = "cpu";
    pub const SETTINGS: &str = "settings";
    pub const LAYERS: &str = "layers";
    pub const ACTIVITY: &str = "activity";
    pub const MONITOR: &str = "monitor";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const LOADER: &str = "loader";
}
