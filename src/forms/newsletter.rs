use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::forms::common;
use crate::forms::rules::{self, FieldErrors, FieldSpec, Rule};

fn email_field() -> FieldSpec {
    FieldSpec {
        id: "newsletter-email",
        label: Some("email"),
        required: true,
        rules: vec![Rule::email()],
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let sending = use_state(|| false);
    let success = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let errors = errors.clone();
        let sending = sending.clone();
        let success = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let spec = email_field();
            let report = rules::validate_form(&[spec], |_| (*email).clone());
            if !report.is_ok() {
                errors.set(FieldErrors::from_report(&report));
                return;
            }
            errors.set(FieldErrors::default());

            let address = (*email).trim().to_string();
            sending.set(true);
            let email = email.clone();
            let sending = sending.clone();
            let success = success.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config::NEWSLETTER_SUBMIT_DELAY_MS).await;
                log!("Newsletter email:", address);

                email.set(String::new());
                sending.set(false);
                success.set(Some("Successfully subscribed to our newsletter!".to_string()));

                let success = success.clone();
                Timeout::new(config::BANNER_DISMISS_MS, move || success.set(None)).forget();
            });
        })
    };

    html! {
        <form id="newsletterForm" class="newsletter-form" onsubmit={onsubmit} novalidate=true>
            {
                if let Some(text) = (*success).as_ref() {
                    html! { <div class="alert alert-success" role="alert">{text}</div> }
                } else {
                    html! {}
                }
            }
            <div class="newsletter-row">
                <input
                    id="newsletter-email"
                    type="email"
                    placeholder="Your email address"
                    class={common::control_class("form-control", &errors, "newsletter-email")}
                    value={(*email).clone()}
                    oninput={common::bind_input(email.clone(), errors.clone(), "newsletter-email")}
                    onblur={common::bind_blur(email_field(), email.clone(), errors.clone())}
                />
                <button type="submit" class="btn-primary" disabled={*sending}>
                    { if *sending { "..." } else { "Subscribe" } }
                </button>
            </div>
            { common::field_error(&errors, "newsletter-email") }
        </form>
    }
}
