// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::Footer::*;
use crate::components::Header::*;
use leptos::prelude::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main>{children()}</main>
            <Footer/>
        </div>
    }
}
