//! Site footer: brand block, link columns and the status bar.

use crate::ui::icon::{GithubIcon, Icon, icons};
use leptos::prelude::*;

struct FooterLink {
    name: &'static str,
    href: &'static str,
    external: bool,
}

const LINK_COLUMNS: &[(&str, &[FooterLink])] = &[
    (
        "Product",
        &[
            FooterLink { name: "Features", href: "#features", external: false },
            FooterLink { name: "Architecture", href: "#architecture", external: false },
            FooterLink { name: "Service Plans", href: "#service", external: false },
            FooterLink { name: "Pricing", href: "#service", external: false },
        ],
    ),
    (
        "Resources",
        &[
            FooterLink {
                name: "Documentation",
                href: "https://docs.adlah.dev/dev/architecture/",
                external: true,
            },
            FooterLink {
                name: "GitHub Repository",
                href: "https://github.com/JohannesLks/ADLAH",
                external: true,
            },
            FooterLink {
                name: "Installation Guide",
                href: "https://docs.adlah.dev/dev/installation/",
                external: true,
            },
            FooterLink {
                name: "API Reference",
                href: "https://docs.adlah.dev/dev/api/",
                external: true,
            },
        ],
    ),
    (
        "Support",
        &[
            FooterLink { name: "Contact Us", href: "#service", external: false },
            FooterLink {
                name: "Technical Support",
                href: "mailto:support@adlah.dev",
                external: false,
            },
            FooterLink {
                name: "Community",
                href: "https://github.com/JohannesLks/ADLAH/discussions",
                external: true,
            },
            FooterLink {
                name: "Bug Reports",
                href: "https://github.com/JohannesLks/ADLAH/issues",
                external: true,
            },
        ],
    ),
    (
        "Legal",
        &[
            FooterLink { name: "Privacy Policy", href: "/privacy", external: false },
            FooterLink { name: "Terms of Service", href: "/terms", external: false },
            FooterLink {
                name: "License (GPLv3)",
                href: "https://github.com/JohannesLks/ADLAH/blob/main/LICENSE",
                external: true,
            },
            FooterLink { name: "Security Policy", href: "/security", external: false },
        ],
    ),
];

const FOOTER_STATS: &[(&str, &str, &str)] = &[
    (icons::ZAP, "< 100ms", "Detection Speed"),
    (icons::SHIELD, "99.7%", "Accuracy Rate"),
    (icons::USERS, "15+", "Contributors"),
    (icons::ACTIVITY, "2.3k+", "GitHub Stars"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-dark-900 border-t border-dark-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-1 lg:grid-cols-5 gap-12">
                    // Brand block
                    <div class="lg:col-span-2">
                        <div class="mb-6">
                            <div class="flex items-center space-x-3 mb-4">
                                <div class="relative">
                                    <Icon name=icons::SHIELD class="w-10 h-10 text-primary-500" />
                                    <div class="absolute inset-0 animate-pulse">
                                        <Icon
                                            name=icons::SHIELD
                                            class="w-10 h-10 text-primary-400 opacity-50"
                                        />
                                    </div>
                                </div>
                                <div>
                                    <h3 class="text-2xl font-bold gradient-text">"ADLAH"</h3>
                                    <p class="text-sm text-dark-400 font-mono">"v2.1.0"</p>
                                </div>
                            </div>
                            <p class="text-dark-300 mb-6 leading-relaxed">
                                "Adaptive Deep Learning Anomaly Detection Honeynet - \
                                 Advanced threat detection using machine learning, \
                                 reinforcement learning orchestration, and scalable honeypots."
                            </p>

                            // Stats
                            <div class="grid grid-cols-2 gap-4 mb-6">
                                {FOOTER_STATS
                                    .iter()
                                    .map(|(icon, value, label)| {
                                        view! {
                                            <div class="bg-dark-800 rounded-lg p-3 border border-dark-700 hover:border-primary-600/50 transition-colors group">
                                                <div class="flex items-center space-x-2 mb-1">
                                                    <Icon
                                                        name=*icon
                                                        class="w-4 h-4 text-primary-500 group-hover:text-primary-400 transition-colors"
                                                    />
                                                    <span class="text-lg font-bold text-primary-400">
                                                        {*value}
                                                    </span>
                                                </div>
                                                <span class="text-xs text-dark-400">{*label}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            // Social links
                            <div class="flex space-x-4">
                                <a
                                    href="https://github.com/JohannesLks/ADLAH"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="GitHub"
                                    class="w-10 h-10 bg-dark-800 rounded-lg flex items-center justify-center text-dark-400 hover:text-white hover:bg-primary-600 transition-all duration-200"
                                >
                                    <GithubIcon class="w-5 h-5" />
                                </a>
                                <a
                                    href="mailto:contact@adlah.dev"
                                    aria-label="Email"
                                    class="w-10 h-10 bg-dark-800 rounded-lg flex items-center justify-center text-dark-400 hover:text-white hover:bg-primary-600 transition-all duration-200"
                                >
                                    <Icon name=icons::MAIL class="w-5 h-5" />
                                </a>
                                <a
                                    href="https://docs.adlah.dev"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Documentation"
                                    class="w-10 h-10 bg-dark-800 rounded-lg flex items-center justify-center text-dark-400 hover:text-white hover:bg-primary-600 transition-all duration-200"
                                >
                                    <Icon name=icons::BOOK_OPEN class="w-5 h-5" />
                                </a>
                            </div>
                        </div>
                    </div>

                    // Link columns
                    {LINK_COLUMNS
                        .iter()
                        .map(|(category, links)| {
                            view! {
                                <div>
                                    <h4 class="text-lg font-semibold text-white mb-4">
                                        {*category}
                                    </h4>
                                    <ul class="space-y-3">
                                        {links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a
                                                            href=link.href
                                                            target=link.external.then_some("_blank")
                                                            rel=link.external.then_some("noopener noreferrer")
                                                            class="text-dark-300 hover:text-primary-400 transition-colors duration-200 flex items-center space-x-1 group"
                                                        >
                                                            <span>{link.name}</span>
                                                            {link
                                                                .external
                                                                .then(|| {
                                                                    view! {
                                                                        <Icon
                                                                            name=icons::EXTERNAL_LINK
                                                                            class="w-3 h-3 opacity-0 group-hover:opacity-100 transition-opacity"
                                                                        />
                                                                    }
                                                                })}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            // Bottom bar
            <div class="border-t border-dark-800">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6">
                    <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                        <div class="text-dark-400 text-sm">
                            "© 2024 ADLAH Project. Licensed under "
                            <a
                                href="https://github.com/JohannesLks/ADLAH/blob/main/LICENSE"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-primary-400 hover:text-primary-300 transition-colors"
                            >
                                "GPLv3"
                            </a>
                            ". Built with ❤ for cybersecurity."
                        </div>
                        <div class="flex items-center space-x-4 text-sm text-dark-400">
                            <span class="flex items-center space-x-1">
                                <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                                <span>"System Status: Operational"</span>
                            </span>
                            <span>"|"</span>
                            <span>"Last Updated: Dec 2024"</span>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
