// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Browser tests for the landing page.
//
// Mounts the real App into a scratch container and checks the landmarks a
// visitor would look for, plus the contact form's client-side behavior up
// to (but not including) the network call.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use modeops_contact_client::{
    ContactConfig, ContactError, ContactSubmission, FormTransport, FormspreeClient,
    SubmissionStrategy, TransportResponse,
};
use modeops_website::app::App;
use modeops_website::components::ContactFormWith;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn create_mount_point() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into()
}

fn bubbling(event_type: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(event_type, &init).unwrap()
}

async fn render_app() -> HtmlElement {
    let mount = create_mount_point();
    mount_to(mount.clone(), App).forget();
    TimeoutFuture::new(0).await;
    mount
}

#[wasm_bindgen_test]
async fn every_section_is_rendered() {
    let mount = render_app().await;

    for id in ["hero", "how", "use-cases", "pricing", "faq", "contact"] {
        assert!(
            mount.query_selector(&format!("#{id}")).unwrap().is_some(),
            "missing section #{id}"
        );
    }

    let nav_links = mount.query_selector_all(".site-nav a").unwrap();
    assert_eq!(nav_links.length(), 5);

    let footer = mount.query_selector(".site-footer").unwrap().unwrap();
    assert!(footer.text_content().unwrap_or_default().contains("ModeOps"));
}

#[wasm_bindgen_test]
async fn contact_form_has_required_fields_and_honeypot() {
    let mount = render_app().await;

    for name in ["name", "email", "message"] {
        let field = mount
            .query_selector(&format!("#contact [name={name}]"))
            .unwrap()
            .unwrap_or_else(|| panic!("missing field {name}"));
        assert!(field.has_attribute("required"), "{name} should be required");
    }

    let company = mount.query_selector("#contact [name=company]").unwrap().unwrap();
    assert!(!company.has_attribute("required"));

    let honeypot = mount
        .query_selector("#contact .honeypot [name=company_website]")
        .unwrap();
    assert!(honeypot.is_some());

    let button: HtmlButtonElement = mount
        .query_selector("#contact button[type=submit]")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap_or_default(), "Send");
}

#[wasm_bindgen_test]
async fn submitting_an_incomplete_form_shows_an_alert() {
    let mount = render_app().await;

    let name: HtmlInputElement = mount
        .query_selector("#contact [name=name]")
        .unwrap()
        .unwrap()
        .unchecked_into();
    name.set_value("Ada");
    name.dispatch_event(&bubbling("input")).unwrap();

    // Dispatching directly skips the browser's own required-field checks,
    // so the form's validation has to catch the missing email.
    let form = mount.query_selector("#contact form").unwrap().unwrap();
    form.dispatch_event(&bubbling("submit")).unwrap();
    TimeoutFuture::new(0).await;

    let alert = mount
        .query_selector("#contact [role=alert]")
        .unwrap()
        .expect("error alert should be visible");
    let text = alert.text_content().unwrap_or_default();
    assert!(text.contains("Please enter your email address."), "{text}");
    let contact_email = ContactConfig::from_build_env().contact_email;
    assert!(text.contains(&contact_email), "{text}");
}

/// A transport whose requests never finish, so the form stays `Sending`.
#[derive(Clone)]
struct NeverAnswers;

impl FormTransport for NeverAnswers {
    async fn post_json(
        &self,
        _url: &str,
        _body: Vec<u8>,
    ) -> Result<TransportResponse, ContactError> {
        std::future::pending().await
    }
}

fn fill(mount: &HtmlElement, name: &str, value: &str) {
    let field = mount
        .query_selector(&format!("[name={name}]"))
        .unwrap()
        .unwrap_or_else(|| panic!("missing field {name}"));
    js_sys::Reflect::set(&field, &"value".into(), &value.into()).unwrap();
    field.dispatch_event(&bubbling("input")).unwrap();
}

#[wasm_bindgen_test]
async fn submit_button_is_disabled_while_sending() {
    let mount = create_mount_point();
    mount_to(mount.clone(), || {
        let submission = ContactSubmission::new(SubmissionStrategy::Formspree(
            FormspreeClient::with_transport("https://formspree.invalid", "pending", NeverAnswers),
        ));
        view! { <ContactFormWith submission=submission contact_email="team@modeops.example"/> }
    })
    .forget();
    TimeoutFuture::new(0).await;

    fill(&mount, "name", "Ada");
    fill(&mount, "email", "ada@localhost");
    fill(&mount, "message", "Volunteer onboarding");

    let button: HtmlButtonElement = mount
        .query_selector("button[type=submit]")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert!(!button.disabled());

    let form = mount.query_selector("form").unwrap().unwrap();
    form.dispatch_event(&bubbling("submit")).unwrap();
    TimeoutFuture::new(0).await;

    assert!(button.disabled(), "submit should be disabled while sending");
    assert_eq!(button.text_content().unwrap_or_default(), "Sending…");
    assert!(mount.query_selector("[role=alert]").unwrap().is_none());

    // A second submit while pending leaves the form as it was.
    form.dispatch_event(&bubbling("submit")).unwrap();
    TimeoutFuture::new(0).await;
    assert!(button.disabled());
}
