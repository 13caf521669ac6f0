// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::CTAButton::CTAButton;
use crate::constants::contact_config;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use modeops_contact_client::{
    ContactFormState, ContactSubmission, FormTransport, SubmissionOutcome,
};
use modeops_types::SubmissionStatus;

/// Contact form wired to the build-time [`ContactConfig`](modeops_contact_client::ContactConfig).
#[component]
pub fn ContactForm() -> impl IntoView {
    let config = contact_config();
    view! {
        <ContactFormWith
            submission=ContactSubmission::from_config(&config)
            contact_email=config.contact_email.clone()
        />
    }
}

/// Contact form backed by one [`ContactFormState`] and the given submission.
///
/// Each rendered form owns its own state, and the submit button stays
/// disabled while a request is in flight.
#[component]
pub fn ContactFormWith<T>(
    submission: ContactSubmission<T>,
    #[prop(into)] contact_email: String,
) -> impl IntoView
where
    T: FormTransport + Clone + 'static,
{
    let contact_email = StoredValue::new(contact_email);
    let submission = StoredValue::new_local(submission);
    let form = RwSignal::new(ContactFormState::new());

    let status = Memo::new(move |_| form.with(|state| state.status()));
    let sending = Memo::new(move |_| status.get().is_sending());
    let notice = move || {
        form.with(|state| state.notice().map(str::to_string))
            .unwrap_or_default()
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut pending = None;
        form.update(|state| pending = state.begin_submit().ok());
        let Some(inquiry) = pending else {
            return;
        };

        let submission = submission.get_value();
        spawn_local(async move {
            let result = submission.submit(&inquiry).await;
            if let Ok(SubmissionOutcome::OpenMailClient(url)) = &result {
                open_mail_client(url);
            }
            form.update(|state| state.complete(result));
        });
    };

    view! {
        <Show
            when=move || status.get() == SubmissionStatus::Success
            fallback=move || {
                view! {
                    <form class="contact-form" on:submit=on_submit>
                        <label class="field">
                            <span class="field-label">"Name"</span>
                            <input
                                name="name"
                                autocomplete="name"
                                required
                                prop:value=move || form.with(|s| s.fields.name.clone())
                                on:input=move |ev| {
                                    form.update(|s| s.fields.name = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Email"</span>
                            <input
                                type="email"
                                name="email"
                                autocomplete="email"
                                required
                                prop:value=move || form.with(|s| s.fields.email.clone())
                                on:input=move |ev| {
                                    form.update(|s| s.fields.email = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Company (optional)"</span>
                            <input
                                name="company"
                                autocomplete="organization"
                                prop:value=move || form.with(|s| s.fields.company.clone())
                                on:input=move |ev| {
                                    form.update(|s| s.fields.company = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"What would you like to improve?"</span>
                            <textarea
                                name="message"
                                rows="5"
                                required
                                prop:value=move || form.with(|s| s.fields.message.clone())
                                on:input=move |ev| {
                                    form.update(|s| s.fields.message = event_target_value(&ev))
                                }
                            ></textarea>
                        </label>
                        // Hidden from people, so only bots fill it in.
                        <div class="honeypot" aria-hidden="true">
                            <label>
                                "Website"
                                <input
                                    name="company_website"
                                    tabindex="-1"
                                    autocomplete="off"
                                    prop:value=move || {
                                        form.with(|s| s.fields.company_website.clone())
                                    }
                                    on:input=move |ev| {
                                        form.update(|s| {
                                            s.fields.company_website = event_target_value(&ev)
                                        })
                                    }
                                />
                            </label>
                        </div>
                        <Show when=move || status.get() == SubmissionStatus::Error>
                            <div role="alert" class="form-error">
                                <p>{notice}</p>
                                <p class="form-fallback">
                                    "You can also email us at "
                                    <a href=move || {
                                        format!("mailto:{}", contact_email.get_value())
                                    }>{move || contact_email.get_value()}</a>
                                </p>
                            </div>
                        </Show>
                        <div>
                            <CTAButton button_type="submit" disabled=sending>
                                {move || if sending.get() { "Sending…" } else { "Send" }}
                            </CTAButton>
                        </div>
                    </form>
                }
            }
        >
            <div class="form-success" role="status">
                <p>{notice}</p>
                <button
                    type="button"
                    class="btn btn-link"
                    on:click=move |_| form.update(ContactFormState::reset)
                >
                    "Send another message"
                </button>
            </div>
        </Show>
    }
}

fn open_mail_client(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to open the mail client from");
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::warn!("could not open mail client: {e:?}");
    }
}
