//! Landing page: all sections composed over the animated background.

use leptos::prelude::*;
use leptos_meta::Meta;

use crate::ui::{
    Architecture, Features, Footer, Header, Hero, MatrixBackground, QuoteForm,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Meta
            name="description"
            content="ADLAH - Adaptive Deep Learning Anomaly Detection Honeynet. Real-time threat detection with unsupervised deep learning and reinforcement learning orchestration."
        />

        <div class="min-h-screen bg-dark-950 text-white relative overflow-x-hidden">
            <MatrixBackground />
            <div class="relative z-10">
                <Header />
                <main>
                    <Hero />
                    <Features />
                    <Architecture />
                    <QuoteForm />
                </main>
                <Footer />
            </div>
        </div>
    }
}
