// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::sections::{
    Contact::ContactSection, Faq::FaqSection, HowItWorks::HowItWorksSection,
    Pricing::PricingSection, UseCases::UseCasesSection, ValueProps::ValuePropsSection,
};
use crate::components::{HeroHeader, Page};
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Page>
            <HeroHeader/>
            <ValuePropsSection/>
            <div class="divider"></div>
            <HowItWorksSection/>
            <div class="divider"></div>
            <UseCasesSection/>
            <div class="divider"></div>
            <PricingSection/>
            <div class="divider"></div>
            <FaqSection/>
            <ContactSection/>
        </Page>
    }
}
