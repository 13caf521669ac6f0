// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::Card::FeatureCard;
use crate::components::Section::Section;
use leptos::prelude::*;

const VALUE_PROPS: [(&str, &str); 3] = [
    (
        "Do more with less",
        "Streamline operations so your team achieves more without extra hires.",
    ),
    (
        "Grow your business",
        "Free up capacity to launch new services, win more clients, and scale impact.",
    ),
    (
        "Prove the ROI",
        "Clear metrics so you see cost savings and revenue gains from automation.",
    ),
];

#[component]
pub fn ValuePropsSection() -> impl IntoView {
    view! {
        <Section>
            <div class="grid-3">
                {VALUE_PROPS
                    .into_iter()
                    .map(|(title, description)| {
                        view! { <FeatureCard icon="✨" title=title description=description/> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
