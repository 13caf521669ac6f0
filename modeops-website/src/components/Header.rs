// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::BRAND;
use leptos::prelude::*;

const NAV: [(&str, &str); 5] = [
    ("How", "#how"),
    ("Use cases", "#use-cases"),
    ("Pricing", "#pricing"),
    ("FAQ", "#faq"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header-inner">
                <a href="#hero" class="brand">{BRAND}</a>
                <nav class="site-nav">
                    {NAV
                        .into_iter()
                        .map(|(label, href)| view! { <a href=href>{label}</a> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
