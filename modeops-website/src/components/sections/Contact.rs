// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::Card::Card;
use crate::components::ContactForm::ContactForm;
use crate::components::Section::Section;
use leptos::prelude::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <Section id="contact" class="section-contact">
            <h2 class="section-title">"Let’s talk"</h2>
            <Card>
                <ContactForm/>
            </Card>
        </Section>
    }
}
