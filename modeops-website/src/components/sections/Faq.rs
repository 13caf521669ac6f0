// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::Card::Card;
use crate::components::Section::Section;
use leptos::prelude::*;

const FAQ: [(&str, &str); 4] = [
    ("How soon can we start?", "Within a week after the assessment."),
    (
        "Do you work with nonprofits?",
        "Yes — many of our clients are mission‑driven orgs.",
    ),
    (
        "What about government teams?",
        "We adapt to public sector compliance and procurement needs.",
    ),
    (
        "Do we need technical staff?",
        "No. We handle the setup and training so your team can focus on delivery.",
    ),
];

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <Section id="faq">
            <h2 class="section-title">"FAQ"</h2>
            <div class="grid-2">
                {FAQ
                    .into_iter()
                    .map(|(question, answer)| {
                        view! {
                            <Card>
                                <strong>{question}</strong>
                                <p class="card-body">{answer}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
