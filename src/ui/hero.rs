//! Landing hero: headline, stats row and primary calls to action.

use crate::ui::icon::{GithubIcon, Icon, icons};
use leptos::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("< 100ms", "First-flight Detection"),
    ("99.7%", "Accuracy Rate"),
    ("Auto-scale", "Adaptive Pods"),
    ("End-to-end", "TLS Security"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-16">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10">
                <div class="max-w-4xl mx-auto">
                    // Badge
                    <div class="inline-flex items-center px-4 py-2 rounded-full bg-primary-900/30 border border-primary-700/50 text-primary-300 text-sm font-medium mb-8">
                        <Icon name=icons::ZAP class="w-4 h-4 mr-2" />
                        "Advanced Deep Learning Honeynet Framework"
                    </div>

                    // Main heading
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight">
                        <span class="gradient-text glitch" data-text="ADLAH">
                            "ADLAH"
                        </span>
                        <br />
                        <span class="text-white">"Adaptive Deep Learning"</span>
                        <br />
                        <span class="text-primary-400">"Anomaly Detection"</span>
                    </h1>

                    // Subtitle
                    <p class="text-xl md:text-2xl text-dark-300 mb-8 max-w-3xl mx-auto leading-relaxed">
                        "Real-time threat detection and dynamic behavior analysis using "
                        <span class="text-primary-400 font-semibold">
                            "unsupervised deep learning"
                        </span> ", "
                        <span class="text-primary-400 font-semibold">
                            "reinforcement learning orchestration"
                        </span> ", and "
                        <span class="text-primary-400 font-semibold">"scalable honeypots"</span>
                        "."
                    </p>

                    // Stats
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-12 max-w-2xl mx-auto">
                        {STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="text-center">
                                        <div class="text-2xl md:text-3xl font-bold text-primary-400 mb-1">
                                            {*value}
                                        </div>
                                        <div class="text-sm text-dark-400 font-medium">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    // CTA buttons
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <a href="#service" class="btn-primary flex items-center space-x-2 text-lg px-8 py-4">
                            <span>"Get Started"</span>
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                        </a>
                        <a
                            href="https://docs.adlah.dev/dev/architecture/"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-secondary flex items-center space-x-2 text-lg px-8 py-4"
                        >
                            <Icon name=icons::BOOK_OPEN class="w-5 h-5" />
                            <span>"Documentation"</span>
                        </a>
                        <a
                            href="https://github.com/JohannesLks/ADLAH"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-dark-300 hover:text-white transition-colors duration-200 flex items-center space-x-2 text-lg px-4 py-2"
                        >
                            <GithubIcon class="w-5 h-5" />
                            <span>"View Source"</span>
                        </a>
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2">
                <div class="w-6 h-10 border-2 border-primary-500 rounded-full flex justify-center animate-bounce">
                    <div class="w-1 h-3 bg-primary-500 rounded-full mt-2"></div>
                </div>
            </div>
        </section>
    }
}
