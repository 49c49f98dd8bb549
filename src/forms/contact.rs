use gloo_console::log;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::forms::common;
use crate::forms::rules::{self, FieldErrors, FieldSpec, Rule};
use crate::scroll::effects;

#[derive(Serialize)]
struct ContactPayload {
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
}

pub fn fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            id: "name",
            label: Some("name"),
            required: true,
            rules: vec![Rule::MinLength(2), Rule::person_name()],
        },
        FieldSpec { id: "email", label: Some("email"), required: true, rules: vec![Rule::email()] },
        FieldSpec {
            id: "phone",
            label: Some("phone number"),
            required: true,
            rules: vec![Rule::phone()],
        },
        FieldSpec { id: "subject", label: None, required: false, rules: vec![Rule::MinLength(5)] },
        FieldSpec {
            id: "message",
            label: Some("message"),
            required: true,
            rules: vec![Rule::MinLength(10)],
        },
    ]
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let sending = use_state(|| false);
    let success = use_state(|| None::<String>);

    let specs = fields();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let subject = subject.clone();
        let message = message.clone();
        let errors = errors.clone();
        let sending = sending.clone();
        let success = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let report = rules::validate_form(&fields(), |id| match id {
                "name" => (*name).clone(),
                "email" => (*email).clone(),
                "phone" => (*phone).clone(),
                "subject" => (*subject).clone(),
                "message" => (*message).clone(),
                _ => String::new(),
            });
            if !report.is_ok() {
                errors.set(FieldErrors::from_report(&report));
                if let Some(first) = report.first_invalid() {
                    effects::scroll_to_element(first, 100.0);
                }
                return;
            }
            errors.set(FieldErrors::default());

            let payload = ContactPayload {
                name: (*name).trim().to_string(),
                email: (*email).trim().to_string(),
                phone: (*phone).trim().to_string(),
                subject: (*subject).trim().to_string(),
                message: (*message).trim().to_string(),
            };

            sending.set(true);
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let subject = subject.clone();
            let message = message.clone();
            let sending = sending.clone();
            let success = success.clone();
            spawn_local(async move {
                // Simulated submission; a real backend replaces this delay.
                gloo_timers::future::TimeoutFuture::new(config::CONTACT_SUBMIT_DELAY_MS).await;
                log!("Contact form data:", serde_json::to_string(&payload).unwrap_or_default());

                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                subject.set(String::new());
                message.set(String::new());
                sending.set(false);
                success.set(Some(
                    "Thank you! Your message has been sent successfully. We will get back to you soon."
                        .to_string(),
                ));
                effects::scroll_to_element("contactForm", 100.0);

                let success = success.clone();
                Timeout::new(config::BANNER_DISMISS_MS, move || success.set(None)).forget();
            });
        })
    };

    html! {
        <form id="contactForm" class="site-form" onsubmit={onsubmit} novalidate=true>
            {
                if let Some(text) = (*success).as_ref() {
                    html! { <div class="alert alert-success" role="alert">{text}</div> }
                } else {
                    html! {}
                }
            }
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    type="text"
                    class={common::control_class("form-control", &errors, "name")}
                    value={(*name).clone()}
                    oninput={common::bind_input(name.clone(), errors.clone(), "name")}
                    onblur={common::bind_blur(specs[0].clone(), name.clone(), errors.clone())}
                />
                { common::field_error(&errors, "name") }
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    class={common::control_class("form-control", &errors, "email")}
                    value={(*email).clone()}
                    oninput={common::bind_input(email.clone(), errors.clone(), "email")}
                    onblur={common::bind_blur(specs[1].clone(), email.clone(), errors.clone())}
                />
                { common::field_error(&errors, "email") }
            </div>
            <div class="form-group">
                <label for="phone">{"Phone"}</label>
                <input
                    id="phone"
                    type="tel"
                    class={common::control_class("form-control", &errors, "phone")}
                    value={(*phone).clone()}
                    oninput={common::bind_phone_input(phone.clone(), errors.clone(), "phone")}
                    onblur={common::bind_blur(specs[2].clone(), phone.clone(), errors.clone())}
                />
                { common::field_error(&errors, "phone") }
            </div>
            <div class="form-group">
                <label for="subject">{"Subject (optional)"}</label>
                <input
                    id="subject"
                    type="text"
                    class={common::control_class("form-control", &errors, "subject")}
                    value={(*subject).clone()}
                    oninput={common::bind_input(subject.clone(), errors.clone(), "subject")}
                    onblur={common::bind_blur(specs[3].clone(), subject.clone(), errors.clone())}
                />
                { common::field_error(&errors, "subject") }
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    rows="5"
                    class={common::control_class("form-control", &errors, "message")}
                    value={(*message).clone()}
                    oninput={common::bind_textarea(message.clone(), errors.clone(), "message")}
                    onblur={common::bind_blur(specs[4].clone(), message.clone(), errors.clone())}
                />
                { common::field_error(&errors, "message") }
            </div>
            <button type="submit" class="btn-primary" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::rules::{validate_form, Outcome};

    // Empty name, valid email and phone, short message: exactly the name
    // (required) and message (length) fields fail, nothing else.
    #[test]
    fn short_message_and_missing_name_are_the_only_failures() {
        let report = validate_form(&fields(), |id| {
            match id {
                "name" => "",
                "email" => "a@b.co",
                "phone" => "9876543210",
                "subject" => "",
                "message" => "hello",
                _ => "",
            }
            .to_string()
        });
        assert!(!report.is_ok());
        assert_eq!(report.invalid_count(), 2);
        assert_eq!(report.first_invalid(), Some("name"));
        assert!(!report.outcome_for("name").unwrap().is_valid());
        assert!(!report.outcome_for("message").unwrap().is_valid());
        assert_eq!(report.outcome_for("email"), Some(&Outcome::Valid));
        assert_eq!(report.outcome_for("phone"), Some(&Outcome::Valid));
        assert_eq!(report.outcome_for("subject"), Some(&Outcome::Valid));
    }

    #[test]
    fn complete_submission_is_accepted() {
        let report = validate_form(&fields(), |id| {
            match id {
                "name" => "Asha Rao",
                "email" => "asha@example.com",
                "phone" => "9876543210",
                "subject" => "",
                "message" => "I would like to join the morning batch.",
                _ => "",
            }
            .to_string()
        });
        assert!(report.is_ok());
        assert_eq!(report.first_invalid(), None);
    }
}
