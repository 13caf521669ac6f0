// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::CTAButton::CTAButton;
use crate::components::Card::Card;
use crate::components::Section::Section;
use leptos::prelude::*;

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <Section id="pricing">
            <h2 class="section-title">"Pricing"</h2>
            <div class="grid-3">
                <PricingCard
                    title="Free Consultation"
                    description="30–60 minutes. We learn your needs and suggest first steps."
                    button_text="Book now"
                />
                <PricingCard
                    title="Pilot — $3,500 flat"
                    description="2–3 weeks. One workflow automated, clear success metric, weekly check‑ins."
                    button_text="Start pilot"
                />
                <PricingCard
                    title="Ongoing — from $2,000/mo"
                    description="Continuous improvements, monitoring, and support for new use cases."
                    button_text="Talk to us"
                />
            </div>
        </Section>
    }
}

#[component]
fn PricingCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] button_text: String,
    #[prop(default = "#contact".to_string(), into)] button_href: String,
) -> impl IntoView {
    view! {
        <Card>
            <h3 class="card-title">{title}</h3>
            <p>{description}</p>
            <CTAButton href=button_href>{button_text}</CTAButton>
        </Card>
    }
}
