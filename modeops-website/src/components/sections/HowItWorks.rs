// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::Card::FeatureCard;
use crate::components::Section::Section;
use leptos::prelude::*;

const STEPS: [(&str, &str); 3] = [
    ("Assess", "Quick session to understand your workflow and growth goals."),
    ("Prototype", "We build a simple automation or copilot in 1–2 weeks."),
    (
        "Measure impact",
        "We check both efficiency gains and new growth capacity.",
    ),
];

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <Section id="how">
            <h2 class="section-title">"How we work"</h2>
            <div class="grid-3">
                {STEPS
                    .into_iter()
                    .map(|(title, description)| {
                        view! { <FeatureCard icon="🔹" title=title description=description/> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
