// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::CTAButton::{ButtonVariant, CTAButton};
use leptos::prelude::*;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <section id="hero" class="section hero">
            <div class="container hero-inner">
                <h1 class="hero-title">"Work smarter. Save money. Grow faster."</h1>
                <p class="hero-subtitle">
                    "ModeOps helps small businesses, nonprofits, and government teams run more efficiently — and use those gains to grow revenue, serve more people, and stay competitive."
                </p>
                <div class="hero-actions">
                    <CTAButton href="#contact">"Book a free consultation"</CTAButton>
                    <CTAButton href="#how" variant=ButtonVariant::Link>"How it works"</CTAButton>
                </div>
                <div class="mockup">"[ Screenshot / Dashboard preview ]"</div>
            </div>
        </section>
    }
}
