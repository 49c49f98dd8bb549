//! Form field validation.
//!
//! Fields are described by [`FieldSpec`] records and checked by pure
//! functions, so every rule here is testable without a document. Components
//! own the DOM side: rendering inline errors and clearing them on edit.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

pub const PHONE_MAX_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$").unwrap());
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

/// One validation rule. Rules run in declaration order and the first
/// failure wins, so a field shows a single error at a time.
#[derive(Clone)]
pub enum Rule {
    NonEmpty,
    /// Only enforced on a non-empty trimmed value; a blank optional field
    /// never fails a length check.
    MinLength(usize),
    Pattern { re: &'static Regex, message: &'static str },
    /// A value that does not parse as a number passes; a malformed bound in
    /// markup is treated as no constraint.
    Range { min: Option<f64>, max: Option<f64> },
}

impl Rule {
    pub fn email() -> Rule {
        Rule::Pattern { re: &EMAIL_RE, message: "Please enter a valid email address" }
    }

    /// 10 digits, leading digit 6-9 (regional mobile convention).
    pub fn phone() -> Rule {
        Rule::Pattern { re: &PHONE_RE, message: "Please enter a valid 10-digit phone number" }
    }

    pub fn url() -> Rule {
        Rule::Pattern { re: &URL_RE, message: "Please enter a valid URL" }
    }

    pub fn person_name() -> Rule {
        Rule::Pattern { re: &NAME_RE, message: "Name can only contain letters and spaces" }
    }

    fn check(&self, value: &str) -> Option<String> {
        match self {
            Rule::NonEmpty => value.is_empty().then(|| "This field is required".to_string()),
            Rule::MinLength(n) => (value.chars().count() < *n)
                .then(|| format!("Must be at least {} characters", n)),
            Rule::Pattern { re, message } => (!re.is_match(value)).then(|| (*message).to_string()),
            Rule::Range { min, max } => {
                let n: f64 = match value.parse() {
                    Ok(n) => n,
                    Err(_) => return None,
                };
                if let Some(min) = min {
                    if n < *min {
                        return Some(format!("Value must be at least {}", min));
                    }
                }
                if let Some(max) = max {
                    if n > *max {
                        return Some(format!("Value must not exceed {}", max));
                    }
                }
                None
            }
        }
    }
}

#[derive(Clone)]
pub struct FieldSpec {
    pub id: &'static str,
    /// Used for the required-field message ("Please enter your {label}").
    pub label: Option<&'static str>,
    pub required: bool,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    fn required_message(&self) -> String {
        match self.label {
            Some(label) => format!("Please enter your {}", label),
            None => "This field is required".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Valid,
    Invalid(String),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

/// Validate a single field value against its spec.
///
/// The value is trimmed first. The required check runs before any rule;
/// an optional field left blank is valid and no rule runs against it.
pub fn validate(spec: &FieldSpec, value: &str) -> Outcome {
    let value = value.trim();
    if value.is_empty() {
        if spec.required {
            return Outcome::Invalid(spec.required_message());
        }
        return Outcome::Valid;
    }
    for rule in &spec.rules {
        if let Some(message) = rule.check(value) {
            return Outcome::Invalid(message);
        }
    }
    Outcome::Valid
}

/// Aggregate result of validating a whole form, in field declaration order.
pub struct FormReport {
    outcomes: Vec<(&'static str, Outcome)>,
}

impl FormReport {
    pub fn is_ok(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_valid())
    }

    /// First invalid field in declaration (document) order, for
    /// scroll-into-view.
    pub fn first_invalid(&self) -> Option<&'static str> {
        self.outcomes
            .iter()
            .find(|(_, outcome)| !outcome.is_valid())
            .map(|(id, _)| *id)
    }

    pub fn invalid_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| !outcome.is_valid()).count()
    }

    pub fn outcome_for(&self, id: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|(field, _)| *field == id).map(|(_, outcome)| outcome)
    }
}

/// Run [`validate`] over every descriptor, reading values through the
/// accessor. The form is acceptable iff the report [`FormReport::is_ok`].
pub fn validate_form<F>(specs: &[FieldSpec], value_of: F) -> FormReport
where
    F: Fn(&'static str) -> String,
{
    let outcomes = specs
        .iter()
        .map(|spec| (spec.id, validate(spec, &value_of(spec.id))))
        .collect();
    FormReport { outcomes }
}

/// Live input filter for phone fields: strip non-digits and truncate.
/// A formatting side effect, independent of validation.
pub fn digits_only(value: &str, max_digits: usize) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(max_digits).collect()
}

/// Inline error text per field id. Clearing an absent entry is a no-op, so
/// the edit path can clear unconditionally.
#[derive(Clone, Default, PartialEq)]
pub struct FieldErrors(HashMap<&'static str, String>);

impl FieldErrors {
    pub fn from_report(report: &FormReport) -> Self {
        let mut errors = FieldErrors::default();
        for (id, outcome) in &report.outcomes {
            if let Outcome::Invalid(message) = outcome {
                errors.set(id, message.clone());
            }
        }
        errors
    }

    pub fn set(&mut self, id: &'static str, message: String) {
        self.0.insert(id, message);
    }

    pub fn clear(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(required: bool, rules: Vec<Rule>) -> FieldSpec {
        FieldSpec { id: "field", label: None, required, rules }
    }

    #[test]
    fn email_rule_vectors() {
        let email = spec(true, vec![Rule::email()]);
        assert_eq!(validate(&email, "a@b.co"), Outcome::Valid);
        assert!(!validate(&email, "a@b").is_valid());
        assert!(!validate(&email, "a b@c.co").is_valid());
    }

    #[test]
    fn phone_rule_vectors() {
        let phone = spec(true, vec![Rule::phone()]);
        assert_eq!(validate(&phone, "9876543210"), Outcome::Valid);
        assert!(!validate(&phone, "1234567890").is_valid());
        assert!(!validate(&phone, "98765432").is_valid());
        assert!(!validate(&phone, "98765432101").is_valid());
    }

    #[test]
    fn url_rule_vectors() {
        let url = spec(false, vec![Rule::url()]);
        assert_eq!(validate(&url, "https://example.com"), Outcome::Valid);
        assert_eq!(validate(&url, "example.com/path"), Outcome::Valid);
        assert!(!validate(&url, "no spaces in hostnames").is_valid());
    }

    #[test]
    fn required_message_uses_label() {
        let named = FieldSpec { id: "name", label: Some("name"), required: true, rules: vec![] };
        assert_eq!(validate(&named, "   "), Outcome::Invalid("Please enter your name".into()));
        let bare = spec(true, vec![]);
        assert_eq!(validate(&bare, ""), Outcome::Invalid("This field is required".into()));
    }

    #[test]
    fn min_length_skips_blank_optional_fields() {
        let subject = spec(false, vec![Rule::MinLength(5)]);
        assert_eq!(validate(&subject, ""), Outcome::Valid);
        assert_eq!(validate(&subject, "   "), Outcome::Valid);
        assert!(!validate(&subject, "hi").is_valid());
        assert_eq!(validate(&subject, "hello there"), Outcome::Valid);
    }

    #[test]
    fn rules_stop_at_first_failure() {
        let field = spec(true, vec![Rule::MinLength(2), Rule::person_name()]);
        // Fails both rules; only the length message surfaces.
        assert_eq!(
            validate(&field, "7"),
            Outcome::Invalid("Must be at least 2 characters".into())
        );
    }

    #[test]
    fn range_names_the_offending_bound() {
        let age = spec(false, vec![Rule::Range { min: Some(5.0), max: Some(100.0) }]);
        assert_eq!(validate(&age, "4"), Outcome::Invalid("Value must be at least 5".into()));
        assert_eq!(validate(&age, "101"), Outcome::Invalid("Value must not exceed 100".into()));
        assert_eq!(validate(&age, "42"), Outcome::Valid);
        // Non-numeric input falls through the range check entirely.
        assert_eq!(validate(&age, "abc"), Outcome::Valid);
    }

    #[test]
    fn validate_form_reports_first_invalid_in_order() {
        let specs = vec![
            FieldSpec { id: "a", label: None, required: false, rules: vec![Rule::email()] },
            FieldSpec { id: "b", label: None, required: true, rules: vec![] },
            FieldSpec { id: "c", label: None, required: true, rules: vec![] },
        ];
        let report = validate_form(&specs, |id| match id {
            "a" => "not-an-email".to_string(),
            _ => String::new(),
        });
        assert!(!report.is_ok());
        assert_eq!(report.invalid_count(), 3);
        assert_eq!(report.first_invalid(), Some("a"));
    }

    #[test]
    fn digit_filter_strips_and_truncates() {
        assert_eq!(digits_only("98-765 432 10x99", PHONE_MAX_DIGITS), "9876543210");
        assert_eq!(digits_only("abc", PHONE_MAX_DIGITS), "");
        assert_eq!(digits_only("987", PHONE_MAX_DIGITS), "987");
    }

    #[test]
    fn clearing_an_absent_error_is_a_noop() {
        let mut errors = FieldErrors::default();
        errors.clear("name");
        assert!(errors.is_empty());
        errors.set("name", "Please enter your name".into());
        errors.clear("name");
        errors.clear("name");
        assert!(errors.is_empty());
    }
}
