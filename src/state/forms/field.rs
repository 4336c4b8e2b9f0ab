//! Form field value objects

use crate::i18n::Translations;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six named slots of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Department,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Department,
        FieldName::Subject,
        FieldName::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a contact form field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Inquiry types offered by the subject selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    General,
    Technical,
    Integration,
    Training,
    Demo,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::General,
        Subject::Technical,
        Subject::Integration,
        Subject::Training,
        Subject::Demo,
        Subject::Other,
    ];

    /// Value submitted for this option
    pub fn value(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technical => "technical",
            Self::Integration => "integration",
            Self::Training => "training",
            Self::Demo => "demo",
            Self::Other => "other",
        }
    }

    fn index(&self) -> usize {
        Subject::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

/// Raw input held by an on-screen field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// `None` is the unselected placeholder
    Choice(Option<Subject>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Input buffer for a single form field.
///
/// This holds exactly what the user typed. The sanitized value that gets
/// validated and submitted lives in the form controller.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new option selector
    pub fn choice(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Choice(None),
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.name.is_multiline()
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// Value handed to the controller on every edit
    pub fn raw_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(subject)) => subject.value().to_string(),
            FieldValue::Choice(None) => String::new(),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            if c == '\n' && !self.name.is_multiline() {
                return;
            }
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(selected) => *selected = None,
        }
    }

    /// Select the next option, wrapping through the placeholder
    pub fn next_choice(&mut self) {
        if let FieldValue::Choice(selected) = &mut self.value {
            *selected = match *selected {
                None => Some(Subject::ALL[0]),
                Some(s) => Subject::ALL.get(s.index() + 1).copied(),
            };
        }
    }

    /// Select the previous option, wrapping through the placeholder
    pub fn prev_choice(&mut self) {
        if let FieldValue::Choice(selected) = &mut self.value {
            *selected = match *selected {
                None => Subject::ALL.last().copied(),
                Some(s) if s.index() == 0 => None,
                Some(s) => Some(Subject::ALL[s.index() - 1]),
            };
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(selected) => *selected = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Choice(selected) => selected.is_none(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, t: &Translations) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(subject)) => t.subject(*subject).to_string(),
            FieldValue::Choice(None) => String::new(),
        }
    }
}
