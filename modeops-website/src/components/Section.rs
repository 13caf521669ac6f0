// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::prelude::*;

/// Full-width band with a centered, max-width container inside.
#[component]
pub fn Section(
    children: Children,
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = String::new(), into)] class: String,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section {class}")>
            <div class="container">{children()}</div>
        </section>
    }
}
