// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::Section::Section;
use leptos::prelude::*;

const USE_CASES: [&str; 5] = [
    "📥 Intake forms that auto‑sort and route",
    "📝 Document review & error checks",
    "🤝 Volunteer / client onboarding workflows",
    "📊 Dashboards & alerts for program metrics",
    "🚀 Freeing up staff to focus on business growth and community impact",
];

#[component]
pub fn UseCasesSection() -> impl IntoView {
    view! {
        <Section id="use-cases">
            <h2 class="section-title">"Use cases"</h2>
            <div class="grid-2 align-center">
                <ul class="use-case-list">
                    {USE_CASES.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
                <div class="mockup">"[ Example Workflow Mockup ]"</div>
            </div>
        </Section>
    }
}
