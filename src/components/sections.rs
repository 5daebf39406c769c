//! Static page content. Everything in here is hidden and revealed by the
//! reveal engine, so none of these elements carry an inline `style`.

use yew::prelude::*;

use super::demo_form::{DemoForm, FormPlacement};

const PLACEHOLDER: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const PROBLEMS: [Card; 3] = [
    Card {
        icon: "⏱",
        title: "Hours lost to paperwork",
        body: "Inspectors and carers spend up to a third of their week typing up notes they already said out loud.",
    },
    Card {
        icon: "✎",
        title: "Details slip through",
        body: "Notes written hours later miss the specifics that matter when something goes wrong.",
    },
    Card {
        icon: "⚑",
        title: "Reports nobody can search",
        body: "Free text scattered across inboxes and notebooks never makes it into the systems that need it.",
    },
];

const ADVANTAGES: [Card; 3] = [
    Card {
        icon: "◎",
        title: "Works where you work",
        body: "Record on any phone, online or off. Transcripts sync when the signal comes back.",
    },
    Card {
        icon: "⚙",
        title: "Fits your forms",
        body: "VoxEasy fills in the templates you already use instead of inventing new ones.",
    },
    Card {
        icon: "✔",
        title: "Reviewed in seconds",
        body: "Every report comes back structured and highlighted, ready to sign off.",
    },
];

const FEATURES: [Card; 4] = [
    Card {
        icon: "🎙",
        title: "Accurate transcription",
        body: "Tuned for jargon, accents and noisy sites.",
    },
    Card {
        icon: "▦",
        title: "Structured output",
        body: "Speech becomes fields, checklists and action items.",
    },
    Card {
        icon: "⇄",
        title: "Integrations",
        body: "Push reports straight into your case management or CRM.",
    },
    Card {
        icon: "🔍",
        title: "Search everything",
        body: "Find any observation across years of reports instantly.",
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Speak", "Open the app and talk through the visit as you normally would."),
    ("Review", "VoxEasy drafts the report in your template for a quick check."),
    ("Submit", "Approve it and the report lands in the right system automatically."),
];

/// `(data-target, suffix, label)` for the outcome counters.
const STATS: [(&str, &str, &str); 4] = [
    ("70", "%", "less time on documentation"),
    ("3.5", "x", "more detail captured per visit"),
    ("98", "%", "transcription accuracy"),
    ("12", "k+", "reports filed every month"),
];

const SECURITY: [(&str, &str); 4] = [
    ("Encrypted end to end", "Audio and text are encrypted in transit and at rest."),
    ("EU data residency", "Your data never leaves the region you choose."),
    ("Access controls", "Role-based permissions and full audit trails."),
    ("Retention you control", "Recordings are deleted on your schedule."),
];

const CREDENTIALS: [&str; 3] = ["ISO 27001", "GDPR compliant", "SOC 2 Type II"];

struct Plan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Team",
        price: "€19 / user / month",
        features: &["Unlimited recordings", "Standard templates", "Email support"],
        featured: false,
    },
    Plan {
        name: "Organization",
        price: "€39 / user / month",
        features: &["Custom templates", "Integrations", "Priority support"],
        featured: true,
    },
    Plan {
        name: "Enterprise",
        price: "Let's talk",
        features: &["Dedicated hosting", "SSO and SCIM", "Named success manager"],
        featured: false,
    },
];

fn cards(class: &'static str, cards: &[Card]) -> Html {
    cards
        .iter()
        .map(|card| {
            html! {
                <div class={class}>
                    <div class="icon">{card.icon}</div>
                    <h3>{card.title}</h3>
                    <p>{card.body}</p>
                </div>
            }
        })
        .collect()
}

fn section_header(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="section-header">
            <h2 class="section-title">{title.to_string()}</h2>
            <p class="section-subtitle">{subtitle.to_string()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionsProps {
    pub on_submitted: Callback<FormPlacement>,
}

#[function_component(Sections)]
pub fn sections(props: &SectionsProps) -> Html {
    html! {
        <>
            <section id="problem" class="problem">
                <div class="container">
                    { section_header("Documentation is eating your day", "The work gets done. Writing it up is what falls behind.") }
                    <div class="problem-grid">{ cards("problem-card", &PROBLEMS) }</div>
                </div>
            </section>

            <section id="solution" class="solution">
                <div class="container">
                    { section_header("Talk instead of type", "VoxEasy listens, structures and files your notes for you.") }
                    <div class="solution-card">
                        <img class="lazy" src={PLACEHOLDER} data-src="/assets/voxeasy-flow.png" alt="From voice note to report" />
                    </div>
                    <div class="advantages-grid">{ cards("advantage-card", &ADVANTAGES) }</div>
                </div>
            </section>

            <section id="features" class="features">
                <div class="container">
                    { section_header("Everything a report needs", "Built with the teams who write them.") }
                    <div class="features-grid">{ cards("feature-card", &FEATURES) }</div>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <div class="container">
                    { section_header("How it works", "Three steps from conversation to compliance.") }
                    <div class="steps">
                        {
                            STEPS.iter().enumerate().map(|(index, (title, body))| html! {
                                <div class="step-card">
                                    <span class="step-number">{index + 1}</span>
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="outcomes" class="outcomes">
                <div class="container">
                    { section_header("Outcomes our customers measure", "Numbers from teams using VoxEasy for six months or more.") }
                    <div class="stats-grid">
                        {
                            STATS.iter().map(|(target, suffix, label)| html! {
                                <div class="stat-item">
                                    // the engine owns this text once the section is revealed
                                    <span class="stat-number" data-target={*target}>{"0"}</span>
                                    <span class="stat-suffix">{*suffix}</span>
                                    <p class="stat-label">{*label}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="outcome-card">
                        <blockquote>
                            {"\"We got our Friday afternoons back. Reports are filed before the van is back at the depot.\""}
                        </blockquote>
                        <cite>{"Operations lead, regional care provider"}</cite>
                    </div>
                </div>
            </section>

            <section id="security" class="security">
                <div class="container">
                    { section_header("Secure by default", "Built for sectors where records are sensitive.") }
                    <div class="security-grid">
                        {
                            SECURITY.iter().map(|(title, body)| html! {
                                <div class="security-item">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="highlight-card">
                        <div class="credentials">
                            {
                                CREDENTIALS.iter().map(|credential| html! {
                                    <span class="credential-item">{*credential}</span>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </section>

            <section id="pricing" class="pricing">
                <div class="container">
                    { section_header("Simple pricing", "Start small and scale when the team is ready.") }
                    <div class="pricing-grid">
                        {
                            PLANS.iter().map(|plan| html! {
                                <div class={classes!("pricing-card", plan.featured.then_some("featured"))}>
                                    <h3>{plan.name}</h3>
                                    <p class="price">{plan.price}</p>
                                    <ul>
                                        { plan.features.iter().map(|feature| html! { <li>{*feature}</li> }).collect::<Html>() }
                                    </ul>
                                    <a href="#contact" class="btn btn-secondary">{"Get started"}</a>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    { section_header("Request a demo", "Tell us a little about your team and we will set up a walkthrough.") }
                    <DemoForm
                        placement={FormPlacement::Inline}
                        submit_label="Send Request"
                        on_submitted={props.on_submitted.clone()}
                    />
                </div>
            </section>
        </>
    }
}
