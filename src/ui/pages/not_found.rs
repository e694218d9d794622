//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-dark-950 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-dark-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::SHIELD class="w-12 h-12 text-dark-400" />
                </div>

                <h1 class="text-6xl font-bold gradient-text mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-white mb-2">"Page Not Found"</h2>

                <p class="text-dark-300 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-primary px-6 py-3">
                        "Go Home"
                    </A>
                    <A href="/#service" attr:class="btn-secondary px-6 py-3">
                        "Request a Quote"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-dark-400">"© 2024 ADLAH Project"</p>
            </div>
        </div>
    }
}
