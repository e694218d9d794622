//! Service tiers and the quote request form.
//!
//! Validation lives in [`crate::core::quote`]; this module binds the draft to
//! signals, shows per-field errors after a failed submit and drives the
//! editing / submitting / submitted lifecycle.

use crate::core::quote::{
    Budget, Field, FormPhase, Infrastructure, QuoteDraft, ServiceTier, Timeline,
};
use crate::ui::common::{ErrorMessage, FormField, InlineSpinner, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;
use leptos::task::spawn_local;

struct Tier {
    name: &'static str,
    icon: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    color: &'static str,
    popular: bool,
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Starter",
        icon: icons::SHIELD,
        price: "From $2,500/month",
        features: &[
            "Basic anomaly detection",
            "Up to 5 sensors",
            "Standard reporting",
            "Email support",
            "99.5% uptime SLA",
        ],
        color: "from-green-500 to-teal-600",
        popular: false,
    },
    Tier {
        name: "Professional",
        icon: icons::ZAP,
        price: "From $7,500/month",
        features: &[
            "Advanced ML models",
            "Up to 25 sensors",
            "Real-time dashboards",
            "Priority support",
            "99.9% uptime SLA",
            "Custom integrations",
        ],
        color: "from-blue-500 to-purple-600",
        popular: true,
    },
    Tier {
        name: "Enterprise",
        icon: icons::GLOBE,
        price: "Custom pricing",
        features: &[
            "Full ADLAH deployment",
            "Unlimited sensors",
            "Dedicated infrastructure",
            "24/7 support",
            "99.99% uptime SLA",
            "On-premise options",
            "Custom development",
        ],
        color: "from-red-500 to-rose-600",
        popular: false,
    },
];

const SUPPORT_POINTS: &[(&str, &str, &str)] = &[
    (
        icons::USERS,
        "Expert Support",
        "Dedicated cybersecurity experts and ML engineers",
    ),
    (
        icons::SERVER,
        "Scalable Infrastructure",
        "Auto-scaling cloud infrastructure with global presence",
    ),
    (
        icons::CLOCK,
        "Rapid Deployment",
        "Get up and running in as little as 2 weeks",
    ),
];

/// Sends a validated request to the intake endpoint. Any non-success status
/// or network failure surfaces as `Err`.
#[cfg(not(feature = "ssr"))]
async fn post_quote(request: &crate::core::quote::QuoteRequest) -> Result<(), ()> {
    let response = gloo_net::http::Request::post("/api/quote")
        .json(request)
        .map_err(|_| ())?
        .send()
        .await
        .map_err(|_| ())?;
    if response.ok() { Ok(()) } else { Err(()) }
}

#[component]
pub fn QuoteForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let service_type = RwSignal::new(String::new());
    let infrastructure = RwSignal::new(String::new());
    let timeline = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let requirements = RwSignal::new(String::new());
    let additional_info = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let company_error = RwSignal::new(None::<String>);
    let service_type_error = RwSignal::new(None::<String>);
    let infrastructure_error = RwSignal::new(None::<String>);
    let timeline_error = RwSignal::new(None::<String>);
    let budget_error = RwSignal::new(None::<String>);
    let requirements_error = RwSignal::new(None::<String>);

    let phase = RwSignal::new(FormPhase::default());
    let submit_error = RwSignal::new(None::<String>);

    let submitting = Signal::derive(move || phase.get() == FormPhase::Submitting);

    let current_draft = move || QuoteDraft {
        name: name.get_untracked(),
        email: email.get_untracked(),
        company: company.get_untracked(),
        phone: phone.get_untracked(),
        service_type: service_type.get_untracked(),
        infrastructure: infrastructure.get_untracked(),
        timeline: timeline.get_untracked(),
        budget: budget.get_untracked(),
        requirements: requirements.get_untracked(),
        additional_info: additional_info.get_untracked(),
    };

    let clear_field_errors = move || {
        name_error.set(None);
        email_error.set(None);
        company_error.set(None);
        service_type_error.set(None);
        infrastructure_error.set(None);
        timeline_error.set(None);
        budget_error.set(None);
        requirements_error.set(None);
    };

    let clear_fields = move || {
        name.set(String::new());
        email.set(String::new());
        company.set(String::new());
        phone.set(String::new());
        service_type.set(String::new());
        infrastructure.set(String::new());
        timeline.set(String::new());
        budget.set(String::new());
        requirements.set(String::new());
        additional_info.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if !phase.get_untracked().can_submit() {
            return;
        }

        submit_error.set(None);
        clear_field_errors();

        let draft = current_draft();
        let request = match draft.validate() {
            Ok(request) => request,
            Err(mut errors) => {
                name_error.set(errors.take(Field::Name));
                email_error.set(errors.take(Field::Email));
                company_error.set(errors.take(Field::Company));
                service_type_error.set(errors.take(Field::ServiceType));
                infrastructure_error.set(errors.take(Field::Infrastructure));
                timeline_error.set(errors.take(Field::Timeline));
                budget_error.set(errors.take(Field::Budget));
                requirements_error.set(errors.take(Field::Requirements));
                return;
            }
        };

        phase.set(FormPhase::Submitting);

        spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            let outcome = post_quote(&request).await;
            #[cfg(feature = "ssr")]
            let outcome: Result<(), ()> = {
                let _ = &request;
                Ok(())
            };

            match outcome {
                Ok(()) => {
                    clear_fields();
                    phase.set(FormPhase::Submitted);
                }
                Err(()) => {
                    // Field values stay as typed so the user can retry.
                    submit_error.set(Some("Failed to submit form. Please try again.".to_string()));
                    phase.set(FormPhase::Editing);
                }
            }
        });
    };

    view! {
        <section id="service" class="py-20 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                {move || {
                    if phase.get() == FormPhase::Submitted {
                        view! {
                            <div class="max-w-2xl mx-auto text-center card">
                                <Icon
                                    name=icons::CHECK_CIRCLE
                                    class="w-16 h-16 text-green-500 mx-auto mb-6"
                                />
                                <h2 class="text-3xl font-bold text-white mb-4">"Thank You!"</h2>
                                <p class="text-dark-300 mb-6">
                                    "We've received your request for ADLAH Honeynet as a Service. \
                                     Our team will contact you within 24 hours to discuss your requirements."
                                </p>
                                <button
                                    class="btn-primary"
                                    on:click=move |_| phase.set(FormPhase::Editing)
                                >
                                    "Submit Another Request"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            // Section header
                            <div class="text-center mb-16">
                                <h2 class="text-4xl md:text-5xl font-bold mb-6">
                                    <span class="gradient-text">"Honeynet as a Service"</span>
                                </h2>
                                <p class="text-xl text-dark-300 max-w-3xl mx-auto">
                                    "Deploy ADLAH's advanced threat detection capabilities without the complexity. \
                                     Choose from our managed service tiers or request a custom enterprise solution."
                                </p>
                            </div>

                            // Service tiers
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-16">
                                {TIERS
                                    .iter()
                                    .map(|tier| {
                                        view! {
                                            <div class=format!(
                                                "card-glow relative {}",
                                                if tier.popular { "ring-2 ring-primary-500" } else { "" },
                                            )>
                                                {tier
                                                    .popular
                                                    .then(|| {
                                                        view! {
                                                            <div class="absolute -top-4 left-1/2 transform -translate-x-1/2">
                                                                <span class="bg-primary-600 text-white px-4 py-1 rounded-full text-sm font-medium">
                                                                    "Most Popular"
                                                                </span>
                                                            </div>
                                                        }
                                                    })}
                                                <div class=format!(
                                                    "w-12 h-12 rounded-lg bg-gradient-to-r {} p-3 mb-4",
                                                    tier.color,
                                                )>
                                                    <Icon name=tier.icon class="w-6 h-6 text-white" />
                                                </div>
                                                <h3 class="text-2xl font-bold text-white mb-2">{tier.name}</h3>
                                                <div class="text-3xl font-bold text-primary-400 mb-6">
                                                    {tier.price}
                                                </div>
                                                <ul class="space-y-3 mb-8">
                                                    {tier
                                                        .features
                                                        .iter()
                                                        .map(|feature| {
                                                            view! {
                                                                <li class="flex items-start space-x-3">
                                                                    <Icon
                                                                        name=icons::CHECK_CIRCLE
                                                                        class="w-5 h-5 text-green-500 flex-shrink-0 mt-0.5"
                                                                    />
                                                                    <span class="text-dark-300 text-sm">{*feature}</span>
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

                            // Quote form
                            <div class="max-w-4xl mx-auto">
                                <div class="card">
                                    <h3 class="text-2xl font-bold text-center mb-8 gradient-text">
                                        "Request a Custom Quote"
                                    </h3>
                                    <form on:submit=on_submit class="space-y-6">
                                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                            <FormField
                                                label="Full Name"
                                                required=true
                                                placeholder="John Doe"
                                                value=name
                                                on_input=Callback::new(move |v| {
                                                    name.set(v);
                                                    name_error.set(None);
                                                })
                                                disabled=submitting
                                                error=name_error
                                            />
                                            <FormField
                                                label="Email Address"
                                                required=true
                                                input_type="email"
                                                placeholder="john@company.com"
                                                value=email
                                                on_input=Callback::new(move |v| {
                                                    email.set(v);
                                                    email_error.set(None);
                                                })
                                                disabled=submitting
                                                error=email_error
                                            />
                                            <FormField
                                                label="Company"
                                                required=true
                                                placeholder="Acme Corporation"
                                                value=company
                                                on_input=Callback::new(move |v| {
                                                    company.set(v);
                                                    company_error.set(None);
                                                })
                                                disabled=submitting
                                                error=company_error
                                            />
                                            <FormField
                                                label="Phone Number"
                                                input_type="tel"
                                                placeholder="+1 (555) 123-4567"
                                                value=phone
                                                on_input=Callback::new(move |v| phone.set(v))
                                                disabled=submitting
                                            />
                                            <SelectField
                                                label="Service Tier"
                                                required=true
                                                placeholder="Select a service tier"
                                                value=service_type
                                                on_change=Callback::new(move |v| {
                                                    service_type.set(v);
                                                    service_type_error.set(None);
                                                })
                                                options=ServiceTier::options()
                                                disabled=submitting
                                                error=service_type_error
                                            />
                                            <SelectField
                                                label="Infrastructure Preference"
                                                required=true
                                                placeholder="Select infrastructure"
                                                value=infrastructure
                                                on_change=Callback::new(move |v| {
                                                    infrastructure.set(v);
                                                    infrastructure_error.set(None);
                                                })
                                                options=Infrastructure::options()
                                                disabled=submitting
                                                error=infrastructure_error
                                            />
                                            <SelectField
                                                label="Implementation Timeline"
                                                required=true
                                                placeholder="Select timeline"
                                                value=timeline
                                                on_change=Callback::new(move |v| {
                                                    timeline.set(v);
                                                    timeline_error.set(None);
                                                })
                                                options=Timeline::options()
                                                disabled=submitting
                                                error=timeline_error
                                            />
                                            <SelectField
                                                label="Monthly Budget Range"
                                                required=true
                                                placeholder="Select budget range"
                                                value=budget
                                                on_change=Callback::new(move |v| {
                                                    budget.set(v);
                                                    budget_error.set(None);
                                                })
                                                options=Budget::options()
                                                disabled=submitting
                                                error=budget_error
                                            />
                                        </div>
                                        <TextAreaField
                                            label="Specific Requirements"
                                            required=true
                                            rows=4
                                            placeholder="Please describe your specific security requirements, compliance needs, expected traffic volume, integration requirements, etc."
                                            value=requirements
                                            on_input=Callback::new(move |v| {
                                                    requirements.set(v);
                                                    requirements_error.set(None);
                                                })
                                            disabled=submitting
                                            error=requirements_error
                                        />
                                        <TextAreaField
                                            label="Additional Information"
                                            rows=3
                                            placeholder="Any additional information that would help us provide a better quote..."
                                            value=additional_info
                                            on_input=Callback::new(move |v| additional_info.set(v))
                                            disabled=submitting
                                        />
                                        <div class="text-center">
                                            <ErrorMessage message=submit_error />
                                            <button
                                                type="submit"
                                                disabled=move || submitting.get()
                                                class="btn-primary inline-flex items-center space-x-2 text-lg px-8 py-4 disabled:opacity-75 disabled:cursor-not-allowed"
                                            >
                                                {move || {
                                                    if submitting.get() {
                                                        view! {
                                                            <InlineSpinner />
                                                            <span>"Submitting..."</span>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <Icon name=icons::SEND class="w-5 h-5" />
                                                            <span>"Request Quote"</span>
                                                        }
                                                            .into_any()
                                                    }
                                                }}
                                            </button>
                                        </div>
                                    </form>
                                </div>
                            </div>

                            // Support highlights
                            <div class="mt-16 grid grid-cols-1 md:grid-cols-3 gap-6">
                                {SUPPORT_POINTS
                                    .iter()
                                    .map(|(icon, title, description)| {
                                        view! {
                                            <div class="text-center">
                                                <Icon
                                                    name=*icon
                                                    class="w-12 h-12 text-primary-500 mx-auto mb-4"
                                                />
                                                <h3 class="text-lg font-semibold text-white mb-2">{*title}</h3>
                                                <p class="text-dark-300 text-sm">{*description}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
