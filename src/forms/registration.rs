use gloo_console::log;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::forms::common;
use crate::forms::rules::{self, FieldErrors, FieldSpec, Rule};
use crate::scroll::effects;

const LOCATIONS: [&str; 3] = ["City Center", "Lakeside", "Old Town"];

#[derive(Serialize)]
struct RegistrationPayload {
    name: String,
    email: String,
    phone: String,
    age: String,
    website: String,
    location: String,
}

pub fn fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            id: "reg-name",
            label: Some("name"),
            required: true,
            rules: vec![Rule::MinLength(2), Rule::person_name()],
        },
        FieldSpec {
            id: "reg-email",
            label: Some("email"),
            required: true,
            rules: vec![Rule::email()],
        },
        FieldSpec {
            id: "reg-phone",
            label: Some("phone number"),
            required: true,
            rules: vec![Rule::phone()],
        },
        FieldSpec {
            id: "reg-age",
            label: None,
            required: false,
            rules: vec![Rule::Range { min: Some(5.0), max: Some(100.0) }],
        },
        FieldSpec { id: "reg-website", label: None, required: false, rules: vec![Rule::url()] },
        FieldSpec { id: "reg-location", label: None, required: true, rules: vec![Rule::NonEmpty] },
    ]
}

#[function_component(RegistrationForm)]
pub fn registration_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let age = use_state(String::new);
    let website = use_state(String::new);
    let location = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let sending = use_state(|| false);
    let success = use_state(|| None::<String>);

    let specs = fields();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let age = age.clone();
        let website = website.clone();
        let location = location.clone();
        let errors = errors.clone();
        let sending = sending.clone();
        let success = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let report = rules::validate_form(&fields(), |id| match id {
                "reg-name" => (*name).clone(),
                "reg-email" => (*email).clone(),
                "reg-phone" => (*phone).clone(),
                "reg-age" => (*age).clone(),
                "reg-website" => (*website).clone(),
                "reg-location" => (*location).clone(),
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

            let payload = RegistrationPayload {
                name: (*name).trim().to_string(),
                email: (*email).trim().to_string(),
                phone: (*phone).trim().to_string(),
                age: (*age).trim().to_string(),
                website: (*website).trim().to_string(),
                location: (*location).clone(),
            };

            sending.set(true);
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let age = age.clone();
            let website = website.clone();
            let location = location.clone();
            let sending = sending.clone();
            let success = success.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config::REGISTRATION_SUBMIT_DELAY_MS).await;
                log!(
                    "Registration data:",
                    serde_json::to_string(&payload).unwrap_or_default()
                );

                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                age.set(String::new());
                website.set(String::new());
                location.set(String::new());
                sending.set(false);
                success.set(Some(
                    "Registration successful! We will contact you shortly with more details."
                        .to_string(),
                ));
                effects::scroll_to_element("registrationForm", 100.0);

                let success = success.clone();
                Timeout::new(config::BANNER_DISMISS_MS, move || success.set(None)).forget();
            });
        })
    };

    html! {
        <form id="registrationForm" class="site-form" onsubmit={onsubmit} novalidate=true>
            {
                if let Some(text) = (*success).as_ref() {
                    html! { <div class="alert alert-success" role="alert">{text}</div> }
                } else {
                    html! {}
                }
            }
            <div class="form-row">
                <div class="form-group">
                    <label for="reg-name">{"Name"}</label>
                    <input
                        id="reg-name"
                        type="text"
                        class={common::control_class("form-control", &errors, "reg-name")}
                        value={(*name).clone()}
                        oninput={common::bind_input(name.clone(), errors.clone(), "reg-name")}
                        onblur={common::bind_blur(specs[0].clone(), name.clone(), errors.clone())}
                    />
                    { common::field_error(&errors, "reg-name") }
                </div>
                <div class="form-group">
                    <label for="reg-email">{"Email"}</label>
                    <input
                        id="reg-email"
                        type="email"
                        class={common::control_class("form-control", &errors, "reg-email")}
                        value={(*email).clone()}
                        oninput={common::bind_input(email.clone(), errors.clone(), "reg-email")}
                        onblur={common::bind_blur(specs[1].clone(), email.clone(), errors.clone())}
                    />
                    { common::field_error(&errors, "reg-email") }
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="reg-phone">{"Phone"}</label>
                    <input
                        id="reg-phone"
                        type="tel"
                        class={common::control_class("form-control", &errors, "reg-phone")}
                        value={(*phone).clone()}
                        oninput={common::bind_phone_input(phone.clone(), errors.clone(), "reg-phone")}
                        onblur={common::bind_blur(specs[2].clone(), phone.clone(), errors.clone())}
                    />
                    { common::field_error(&errors, "reg-phone") }
                </div>
                <div class="form-group">
                    <label for="reg-age">{"Age (optional)"}</label>
                    <input
                        id="reg-age"
                        type="number"
                        min="5"
                        max="100"
                        class={common::control_class("form-control", &errors, "reg-age")}
                        value={(*age).clone()}
                        oninput={common::bind_input(age.clone(), errors.clone(), "reg-age")}
                        onblur={common::bind_blur(specs[3].clone(), age.clone(), errors.clone())}
                    />
                    { common::field_error(&errors, "reg-age") }
                </div>
            </div>
            <div class="form-group">
                <label for="reg-website">{"Website or social profile (optional)"}</label>
                <input
                    id="reg-website"
                    type="url"
                    placeholder="https://"
                    class={common::control_class("form-control", &errors, "reg-website")}
                    value={(*website).clone()}
                    oninput={common::bind_input(website.clone(), errors.clone(), "reg-website")}
                    onblur={common::bind_blur(specs[4].clone(), website.clone(), errors.clone())}
                />
                { common::field_error(&errors, "reg-website") }
            </div>
            <div class="form-group">
                <label for="reg-location">{"Studio location"}</label>
                <select
                    id="reg-location"
                    class={common::control_class("form-control", &errors, "reg-location")}
                    value={(*location).clone()}
                    onchange={common::bind_select(location.clone(), errors.clone(), "reg-location")}
                >
                    <option value="" selected={location.is_empty()}>{"Select a location"}</option>
                    {
                        LOCATIONS.iter().map(|name| html! {
                            <option value={*name} selected={*location == *name}>{name}</option>
                        }).collect::<Html>()
                    }
                </select>
                { common::field_error(&errors, "reg-location") }
            </div>
            <button type="submit" class="btn-primary" disabled={*sending}>
                { if *sending { "Submitting..." } else { "Register" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::rules::validate_form;

    #[test]
    fn age_outside_range_is_rejected_with_bound() {
        let report = validate_form(&fields(), |id| {
            match id {
                "reg-name" => "Ira",
                "reg-email" => "ira@example.com",
                "reg-phone" => "7876543210",
                "reg-age" => "3",
                "reg-location" => "Lakeside",
                _ => "",
            }
            .to_string()
        });
        assert!(!report.is_ok());
        assert_eq!(report.first_invalid(), Some("reg-age"));
    }

    #[test]
    fn malformed_website_is_rejected_but_optional() {
        let value_of = |id: &'static str| {
            match id {
                "reg-name" => "Ira Joshi",
                "reg-email" => "ira@example.com",
                "reg-phone" => "7876543210",
                "reg-website" => "not a website",
                "reg-location" => "Lakeside",
                _ => "",
            }
            .to_string()
        };
        let report = validate_form(&fields(), &value_of);
        assert_eq!(report.first_invalid(), Some("reg-website"));

        let report = validate_form(&fields(), |id| {
            if id == "reg-website" { String::new() } else { value_of(id) }
        });
        assert!(report.is_ok());
    }

    #[test]
    fn missing_location_is_required() {
        let report = validate_form(&fields(), |id| {
            match id {
                "reg-name" => "Ira Joshi",
                "reg-email" => "ira@example.com",
                "reg-phone" => "7876543210",
                "reg-age" => "",
                "reg-location" => "",
                _ => "",
            }
            .to_string()
        });
        assert!(!report.is_ok());
        assert_eq!(report.invalid_count(), 1);
        assert_eq!(report.first_invalid(), Some("reg-location"));
    }
}
