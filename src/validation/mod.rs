//! Field and form validation
//!
//! [`validate_field`] interprets a [`ValidationRule`] against a value. Checks
//! run in a fixed order and the first failure is the one reported.

mod rules;

pub use rules::{rule_for, Format, ValidationRule};

use crate::state::FieldName;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number format";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid format";
pub const INVALID_VALUE_MESSAGE: &str = "Invalid value";

/// Accepted digit count for a phone number
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,}$").expect("phone regex"));

/// Outcome of checking one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

/// Per-field results of a form validation
pub type ValidationResults = BTreeMap<FieldName, ValidationResult>;

/// Check `value` against `rule`
pub fn validate_field(value: &str, rule: &ValidationRule) -> ValidationResult {
    let value = value.trim();

    if value.is_empty() {
        return if rule.required {
            ValidationResult::invalid(REQUIRED_MESSAGE)
        } else {
            ValidationResult::valid()
        };
    }

    let length = value.chars().count();
    if let Some(min) = rule.min_length {
        if length < min {
            return ValidationResult::invalid(format!("Must be at least {min} characters long"));
        }
    }
    if let Some(max) = rule.max_length {
        if length > max {
            return ValidationResult::invalid(format!(
                "Must be no more than {max} characters long"
            ));
        }
    }

    let format_error = match rule.format {
        Some(Format::Email) => email_error(value, rule),
        Some(Format::Phone) => phone_error(value, rule),
        None => None,
    };
    if let Some(error) = format_error {
        return ValidationResult::invalid(error);
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            return ValidationResult::invalid(rule.message.unwrap_or(INVALID_FORMAT_MESSAGE));
        }
    }

    if let Some(custom) = rule.custom {
        if !custom(value) {
            return ValidationResult::invalid(rule.message.unwrap_or(INVALID_VALUE_MESSAGE));
        }
    }

    ValidationResult::valid()
}

fn email_error(value: &str, rule: &ValidationRule) -> Option<&'static str> {
    if !EMAIL_SHAPE.is_match(value) {
        return Some(rule.message.unwrap_or(INVALID_EMAIL_MESSAGE));
    }
    if value.contains("..") || value.starts_with('.') || value.ends_with('.') {
        return Some(INVALID_EMAIL_MESSAGE);
    }
    None
}

fn phone_error(value: &str, rule: &ValidationRule) -> Option<&'static str> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !PHONE_SHAPE.is_match(value) || !PHONE_DIGITS.contains(&digits) {
        return Some(rule.message.unwrap_or(INVALID_PHONE_MESSAGE));
    }
    None
}

/// Validate the given `(field name, value)` pairs against the rule table.
///
/// Only the fields present are checked, so partial data is fine. Names with
/// no rule are skipped.
pub fn validate_form<I, K, V>(entries: I) -> ValidationResults
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut results = ValidationResults::new();
    for (name, value) in entries {
        let Ok(field) = name.as_ref().parse::<FieldName>() else {
            tracing::debug!(field = name.as_ref(), "no validation rule, skipping");
            continue;
        };
        if let Some(rule) = rule_for(field) {
            results.insert(field, validate_field(value.as_ref(), rule));
        }
    }
    results
}

/// True iff every result passed
pub fn is_form_valid(results: &ValidationResults) -> bool {
    results.values().all(|result| result.is_valid)
}
