//! Fixed page header with anchor navigation.
//!
//! Past 50px of scroll the header gains an opaque backdrop. The scroll
//! listener is attached on the client only and removed on unmount.

use crate::ui::icon::{GithubIcon, Icon, icons};
use leptos::prelude::*;

struct NavItem {
    name: &'static str,
    href: &'static str,
    external: bool,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Features",
        href: "#features",
        external: false,
    },
    NavItem {
        name: "Architecture",
        href: "#architecture",
        external: false,
    },
    NavItem {
        name: "Service",
        href: "#service",
        external: false,
    },
    NavItem {
        name: "Documentation",
        href: "https://docs.adlah.dev/dev/architecture/",
        external: true,
    },
];

const GITHUB_URL: &str = "https://github.com/JohannesLks/ADLAH";

#[component]
pub fn Header() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let mobile_open = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let on_scroll = Closure::<dyn FnMut()>::new(move || {
                if let Some(window) = web_sys::window() {
                    scrolled.set(window.scroll_y().unwrap_or(0.0) > 50.0);
                }
            });
            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            });
        });
    }

    let nav_link = move |item: &'static NavItem, class: &'static str| {
        view! {
            <a
                href=item.href
                target=item.external.then_some("_blank")
                rel=item.external.then_some("noopener noreferrer")
                class=class
                on:click=move |_| mobile_open.set(false)
            >
                <span>{item.name}</span>
                {item.external.then(|| view! { <Icon name=icons::EXTERNAL_LINK class="w-3 h-3" /> })}
            </a>
        }
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if scrolled.get() {
                    "bg-dark-900/95 backdrop-blur-md border-b border-dark-700"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <div class="flex items-center space-x-3">
                        <div class="relative">
                            <Icon name=icons::SHIELD class="w-8 h-8 text-primary-500" />
                            <div class="absolute inset-0 animate-pulse">
                                <Icon name=icons::SHIELD class="w-8 h-8 text-primary-400 opacity-50" />
                            </div>
                        </div>
                        <div>
                            <h1 class="text-xl font-bold gradient-text">"ADLAH"</h1>
                            <p class="text-xs text-dark-400 font-mono">"v2.1.0"</p>
                        </div>
                    </div>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| nav_link(
                                item,
                                "text-dark-300 hover:text-primary-400 transition-colors duration-200 flex items-center space-x-1",
                            ))
                            .collect_view()}
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-primary inline-flex items-center space-x-2"
                        >
                            <GithubIcon class="w-4 h-4" />
                            <span>"GitHub"</span>
                        </a>
                    </nav>

                    // Mobile menu toggle
                    <button
                        class="md:hidden text-white"
                        aria-label="Toggle navigation"
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if mobile_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile navigation
                {move || {
                    mobile_open
                        .get()
                        .then(|| {
                            view! {
                                <div class="md:hidden bg-dark-800 rounded-lg mt-2 p-4 border border-dark-700">
                                    {NAV_ITEMS
                                        .iter()
                                        .map(|item| nav_link(
                                            item,
                                            "py-2 text-dark-300 hover:text-primary-400 transition-colors duration-200 flex items-center space-x-1",
                                        ))
                                        .collect_view()}
                                    <a
                                        href=GITHUB_URL
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="block mt-4 btn-primary text-center"
                                    >
                                        "GitHub"
                                    </a>
                                </div>
                            }
                        })
                }}
            </div>
        </header>
    }
}
