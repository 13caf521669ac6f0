// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::prelude::*;

/// Button variants
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Link,
}

/// Renders an anchor when `href` is set, otherwise a `<button>`.
#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(optional, into)] href: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    let class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Link => "btn btn-link",
    };

    match href {
        Some(href) => view! {
            <a href=href class=class>
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button type=button_type class=class disabled=move || disabled.get()>
                {children()}
            </button>
        }
        .into_any(),
    }
}
