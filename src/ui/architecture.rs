//! Architecture section: component grid, pipeline steps and performance
//! specifications.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

struct SystemComponent {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
    details: &'static [&'static str],
}

const COMPONENTS: &[SystemComponent] = &[
    SystemComponent {
        title: "MADCAT Sensor",
        description: "First-flight data capture",
        icon: icons::NETWORK,
        color: "from-green-500 to-teal-600",
        details: &["Network Traffic Analysis", "Real-time Monitoring", "Data Preprocessing"],
    },
    SystemComponent {
        title: "ML Engine",
        description: "Deep learning models",
        icon: icons::BRAIN,
        color: "from-blue-500 to-purple-600",
        details: &["Autoencoder", "LSTM Networks", "Heuristic Fusion"],
    },
    SystemComponent {
        title: "RL Orchestrator",
        description: "Adaptive pod spawning",
        icon: icons::ZAP,
        color: "from-yellow-500 to-orange-600",
        details: &["Reinforcement Learning", "Dynamic Scaling", "Resource Management"],
    },
    SystemComponent {
        title: "Central Hive",
        description: "ELK stack processing",
        icon: icons::DATABASE,
        color: "from-purple-500 to-pink-600",
        details: &["Elasticsearch", "Logstash", "Kibana Dashboard"],
    },
    SystemComponent {
        title: "Honeypot Cluster",
        description: "High-interaction pods",
        icon: icons::SHIELD,
        color: "from-red-500 to-rose-600",
        details: &["Kubernetes Pods", "Container Orchestration", "Threat Interaction"],
    },
    SystemComponent {
        title: "Security Layer",
        description: "TLS & authentication",
        icon: icons::LOCK,
        color: "from-indigo-500 to-blue-600",
        details: &["TLS Encryption", "RBAC", "Audit Logging"],
    },
];

const PIPELINE_STEPS: &[(&str, &str, &str, &str)] = &[
    (
        "01",
        icons::MONITOR,
        "Data Capture",
        "MADCAT sensors capture first-flight network traffic and forward to ML engine for analysis.",
    ),
    (
        "02",
        icons::BRAIN,
        "Anomaly Detection",
        "Deep learning models process data in real-time, generating anomaly scores and threat assessments.",
    ),
    (
        "03",
        icons::LAYERS,
        "Adaptive Response",
        "RL orchestrator spawns honeypot pods based on threat level, while data flows to central hive.",
    ),
];

const PERFORMANCE_SPECS: &[(&str, &str, &str)] = &[
    (icons::ZAP, "< 100ms", "Detection Latency"),
    (icons::SERVER, "10K+ TPS", "Throughput"),
    (icons::SHIELD, "99.7%", "Accuracy"),
    (icons::MONITOR, "99.9%", "Uptime"),
];

#[component]
pub fn Architecture() -> impl IntoView {
    view! {
        <section id="architecture" class="py-20 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                // Section header
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        <span class="gradient-text">"System Architecture"</span>
                    </h2>
                    <p class="text-xl text-dark-300 max-w-3xl mx-auto">
                        "A comprehensive view of ADLAH's modular architecture and data flow, \
                         designed for scalability, security, and real-time threat detection."
                    </p>
                </div>

                // Component grid
                <div class="relative max-w-6xl mx-auto mb-16">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 md:gap-12">
                        {COMPONENTS
                            .iter()
                            .map(|component| {
                                view! {
                                    <div class="relative card-glow group">
                                        <div class=format!(
                                            "w-16 h-16 rounded-xl bg-gradient-to-r {} p-4 mb-4 mx-auto group-hover:scale-110 transition-transform duration-300",
                                            component.color,
                                        )>
                                            <Icon name=component.icon class="w-8 h-8 text-white" />
                                        </div>
                                        <h3 class="text-lg font-bold text-white mb-2 text-center group-hover:text-primary-400 transition-colors">
                                            {component.title}
                                        </h3>
                                        <p class="text-dark-300 text-sm text-center mb-4">
                                            {component.description}
                                        </p>
                                        <div class="space-y-1">
                                            {component
                                                .details
                                                .iter()
                                                .map(|detail| {
                                                    view! {
                                                        <div class="text-xs text-primary-400 bg-dark-800 px-2 py-1 rounded text-center">
                                                            {*detail}
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Pipeline steps
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {PIPELINE_STEPS
                        .iter()
                        .map(|(step, icon, title, description)| {
                            view! {
                                <div class="card group">
                                    <div class="flex items-start space-x-4">
                                        <div class="flex-shrink-0">
                                            <div class="w-12 h-12 bg-primary-600 rounded-lg flex items-center justify-center text-white font-bold text-lg group-hover:bg-primary-500 transition-colors">
                                                {*step}
                                            </div>
                                        </div>
                                        <div>
                                            <div class="flex items-center space-x-2 mb-2">
                                                <Icon name=*icon class="w-5 h-5 text-primary-400" />
                                                <h3 class="text-lg font-semibold text-white group-hover:text-primary-400 transition-colors">
                                                    {*title}
                                                </h3>
                                            </div>
                                            <p class="text-dark-300 text-sm leading-relaxed">
                                                {*description}
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Performance specifications
                <div class="card">
                    <h3 class="text-2xl font-bold text-center mb-8 gradient-text">
                        "Performance Specifications"
                    </h3>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                        {PERFORMANCE_SPECS
                            .iter()
                            .map(|(icon, value, label)| {
                                view! {
                                    <div class="text-center group">
                                        <Icon
                                            name=*icon
                                            class="w-8 h-8 text-primary-500 mx-auto mb-3 group-hover:text-primary-400 transition-colors"
                                        />
                                        <div class="text-2xl font-bold text-primary-400 mb-1">{*value}</div>
                                        <div class="text-sm text-dark-400 font-medium">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // CTA
                <div class="text-center mt-16">
                    <a
                        href="https://docs.adlah.dev/dev/architecture/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-primary inline-flex items-center space-x-2 text-lg px-8 py-4"
                    >
                        <span>"Explore Technical Documentation"</span>
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </a>
                </div>
            </div>
        </section>
    }
}
