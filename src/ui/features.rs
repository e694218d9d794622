//! Capabilities section: key metrics, feature cards and the technical
//! architecture blurb.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    color: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: icons::BRAIN,
        title: "Deep Learning Detection",
        description: "Autoencoder + LSTM models with heuristic fusion for first-flight anomaly detection",
        tech: &["Autoencoder", "LSTM", "Heuristic Scoring"],
        color: "from-blue-500 to-purple-600",
    },
    Feature {
        icon: icons::ZAP,
        title: "Reinforcement Learning",
        description: "Adaptive orchestration with intelligent pod spawning based on threat assessment",
        tech: &["RL Orchestration", "Dynamic Scaling", "Threat Assessment"],
        color: "from-yellow-500 to-orange-600",
    },
    Feature {
        icon: icons::NETWORK,
        title: "MADCAT Sensor",
        description: "First-flight data capture with real-time network traffic analysis",
        tech: &["Network Monitoring", "Traffic Analysis", "Real-time Processing"],
        color: "from-green-500 to-teal-600",
    },
    Feature {
        icon: icons::DATABASE,
        title: "ELK Stack Integration",
        description: "Centralized data processing with Elasticsearch, Logstash, and Kibana",
        tech: &["Elasticsearch", "Logstash", "Kibana"],
        color: "from-purple-500 to-pink-600",
    },
    Feature {
        icon: icons::SHIELD,
        title: "High-Interaction Honeypots",
        description: "Containerized workloads on Kubernetes for scalable threat interaction",
        tech: &["Kubernetes", "Docker", "Container Orchestration"],
        color: "from-red-500 to-rose-600",
    },
    Feature {
        icon: icons::LOCK,
        title: "Security-First Design",
        description: "TLS log forwarding, authentication, role-based access, and audit trails",
        tech: &["TLS Encryption", "RBAC", "Audit Logging"],
        color: "from-indigo-500 to-blue-600",
    },
];

const CAPABILITIES: &[(&str, &str, &str, &str)] = &[
    (
        icons::TARGET,
        "First-Flight Detection",
        "< 100ms",
        "Ultra-fast anomaly detection on first contact",
    ),
    (
        icons::CPU,
        "Processing Power",
        "10K+ TPS",
        "High-throughput transaction processing",
    ),
    (
        icons::GLOBE,
        "Global Coverage",
        "24/7",
        "Continuous monitoring and threat detection",
    ),
    (
        icons::SETTINGS,
        "Adaptability",
        "Auto-tune",
        "Self-optimizing detection algorithms",
    ),
];

const ARCHITECTURE_POINTS: &[(&str, &str, &str)] = &[
    (
        icons::LAYERS,
        "Modular Design",
        "Sensors, Hive (central), and Cluster components work independently \
         for maximum scalability and reliability.",
    ),
    (
        icons::ACTIVITY,
        "Real-time Processing",
        "Sub-100ms detection latency with continuous learning and \
         adaptation to emerging threat patterns.",
    ),
    (
        icons::DATABASE,
        "Centralized Intelligence",
        "ELK stack integration provides comprehensive analytics, \
         visualization, and historical threat intelligence.",
    ),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                // Section header
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        <span class="gradient-text">"Advanced Capabilities"</span>
                    </h2>
                    <p class="text-xl text-dark-300 max-w-3xl mx-auto">
                        "ADLAH combines cutting-edge machine learning with enterprise-grade security \
                         to deliver unparalleled threat detection and response capabilities."
                    </p>
                </div>

                // Key capabilities
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-20">
                    {CAPABILITIES
                        .iter()
                        .map(|(icon, title, value, description)| {
                            view! {
                                <div class="card text-center group hover:scale-105 transition-transform duration-300">
                                    <Icon
                                        name=*icon
                                        class="w-8 h-8 text-primary-500 mx-auto mb-3 group-hover:text-primary-400 transition-colors"
                                    />
                                    <div class="text-2xl font-bold text-primary-400 mb-1">{*value}</div>
                                    <div class="font-semibold text-white mb-2">{*title}</div>
                                    <div class="text-sm text-dark-400">{*description}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Feature cards
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card-glow group">
                                    <div class=format!(
                                        "w-12 h-12 rounded-lg bg-gradient-to-r {} p-3 mb-4 group-hover:scale-110 transition-transform duration-300",
                                        feature.color,
                                    )>
                                        <Icon name=feature.icon class="w-6 h-6 text-white" />
                                    </div>
                                    <h3 class="text-xl font-bold text-white mb-3 group-hover:text-primary-400 transition-colors">
                                        {feature.title}
                                    </h3>
                                    <p class="text-dark-300 mb-4 leading-relaxed">
                                        {feature.description}
                                    </p>
                                    <div class="flex flex-wrap gap-2">
                                        {feature
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-3 py-1 bg-dark-700 text-primary-400 text-xs font-medium rounded-full border border-dark-600">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Technical architecture
                <div class="mt-20 card">
                    <h3 class="text-2xl font-bold text-center mb-8 gradient-text">
                        "Technical Architecture"
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {ARCHITECTURE_POINTS
                            .iter()
                            .map(|(icon, title, description)| {
                                view! {
                                    <div class="text-center">
                                        <Icon
                                            name=*icon
                                            class="w-12 h-12 text-primary-500 mx-auto mb-4"
                                        />
                                        <h4 class="text-lg font-semibold text-white mb-2">{*title}</h4>
                                        <p class="text-dark-300 text-sm">{*description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
