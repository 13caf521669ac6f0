// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::BRAND;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="container site-footer-inner">
                <div>{format!("© {year} {BRAND}")}</div>
                <div class="footer-links">
                    <a href="#">"Privacy"</a>
                    <a href="#">"Terms"</a>
                </div>
            </div>
        </footer>
    }
}
