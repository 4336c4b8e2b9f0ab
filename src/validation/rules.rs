//! Declarative validation rules and the contact form rule table

use crate::state::FieldName;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Named value formats with dedicated checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Phone,
}

/// What a single field must satisfy.
///
/// Rules are plain data; [`super::validate_field`] interprets any of them.
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
    pub pattern: Option<Regex>,
    pub custom: Option<fn(&str) -> bool>,
    /// Message reported by format, pattern and custom checks
    pub message: Option<&'static str>,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("format", &self.format)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .field("message", &self.message)
            .finish()
    }
}

/// Letters, whitespace, apostrophes, hyphens and periods
static PERSON_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'.\-]+$").expect("person text regex"));

static RULES: Lazy<BTreeMap<FieldName, ValidationRule>> = Lazy::new(|| {
    BTreeMap::from([
        (
            FieldName::Name,
            ValidationRule {
                required: true,
                min_length: Some(2),
                max_length: Some(100),
                pattern: Some(PERSON_TEXT.clone()),
                message: Some(
                    "Name must contain only letters, spaces, hyphens, apostrophes, and periods",
                ),
                ..Default::default()
            },
        ),
        (
            FieldName::Email,
            ValidationRule {
                required: true,
                max_length: Some(254),
                format: Some(Format::Email),
                message: Some("Please enter a valid email address"),
                ..Default::default()
            },
        ),
        (
            FieldName::Phone,
            ValidationRule {
                required: true,
                format: Some(Format::Phone),
                message: Some("Please enter a valid phone number"),
                ..Default::default()
            },
        ),
        (
            FieldName::Department,
            ValidationRule {
                required: false,
                max_length: Some(100),
                pattern: Some(PERSON_TEXT.clone()),
                message: Some(
                    "Department must contain only letters, spaces, hyphens, apostrophes, and periods",
                ),
                ..Default::default()
            },
        ),
        (
            FieldName::Subject,
            ValidationRule {
                required: true,
                message: Some("Please select a subject"),
                ..Default::default()
            },
        ),
        (
            FieldName::Message,
            ValidationRule {
                required: true,
                min_length: Some(10),
                max_length: Some(2000),
                message: Some("Message must be between 10 and 2000 characters"),
                ..Default::default()
            },
        ),
    ])
});

/// The full rule table, one entry per contact form field
pub fn validation_rules() -> &'static BTreeMap<FieldName, ValidationRule> {
    &RULES
}

pub fn rule_for(field: FieldName) -> Option<&'static ValidationRule> {
    validation_rules().get(&field)
}
