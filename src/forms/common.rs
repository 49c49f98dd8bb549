//! Shared wiring between form components and the validation rules.
//!
//! Per-field lifecycle: blur re-validates the field, any edit clears its
//! error without re-validating, submit validates the whole set.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::rules::{self, FieldErrors, FieldSpec, Outcome};

pub fn bind_input(
    value: UseStateHandle<String>,
    errors: UseStateHandle<FieldErrors>,
    id: &'static str,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        value.set(input.value());
        clear_error(&errors, id);
    })
}

pub fn bind_textarea(
    value: UseStateHandle<String>,
    errors: UseStateHandle<FieldErrors>,
    id: &'static str,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        value.set(input.value());
        clear_error(&errors, id);
    })
}

pub fn bind_select(
    value: UseStateHandle<String>,
    errors: UseStateHandle<FieldErrors>,
    id: &'static str,
) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        value.set(select.value());
        clear_error(&errors, id);
    })
}

/// Phone inputs filter as typed: digits only, truncated to 10. The filtered
/// value is written back into the control.
pub fn bind_phone_input(
    value: UseStateHandle<String>,
    errors: UseStateHandle<FieldErrors>,
    id: &'static str,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let filtered = rules::digits_only(&input.value(), rules::PHONE_MAX_DIGITS);
        input.set_value(&filtered);
        value.set(filtered);
        clear_error(&errors, id);
    })
}

/// Re-validate one field on blur, replacing or clearing its inline error.
pub fn bind_blur(
    spec: FieldSpec,
    value: UseStateHandle<String>,
    errors: UseStateHandle<FieldErrors>,
) -> Callback<FocusEvent> {
    Callback::from(move |_: FocusEvent| {
        let mut next = (*errors).clone();
        match rules::validate(&spec, &value) {
            Outcome::Valid => next.clear(spec.id),
            Outcome::Invalid(message) => next.set(spec.id, message),
        }
        errors.set(next);
    })
}

fn clear_error(errors: &UseStateHandle<FieldErrors>, id: &'static str) {
    if errors.get(id).is_some() {
        let mut next = (**errors).clone();
        next.clear(id);
        errors.set(next);
    }
}

pub fn control_class(base: &'static str, errors: &FieldErrors, id: &str) -> Classes {
    classes!(base, errors.get(id).map(|_| "is-invalid"))
}

pub fn field_error(errors: &FieldErrors, id: &str) -> Html {
    match errors.get(id) {
        Some(message) => html! { <div class="invalid-feedback">{message}</div> },
        None => html! {},
    }
}
