// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::pages::Home::*;
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ModeOps - Work smarter. Save money. Grow faster."/>
        <Meta
            name="description"
            content="ModeOps helps small businesses, nonprofits, and government teams run more efficiently and use those gains to grow revenue, serve more people, and stay competitive."
        />
        <Meta
            name="keywords"
            content="workflow automation, operations consulting, nonprofit automation, government automation, AI copilots, small business efficiency"
        />

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="ModeOps"/>
        <Meta property="og:title" content="ModeOps - Work smarter. Save money. Grow faster."/>
        <Meta property="og:description" content="Automation and copilots that free your team to grow."/>

        <Home/>
    }
}
