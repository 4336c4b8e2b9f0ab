//! Form state management: submitted data, errors, touched flags and focus

use super::field::{FieldName, FormField};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current value of every contact form field.
///
/// The struct shape guarantees the six keys are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Department => &self.department,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Department => &mut self.department,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Iterate `(field, value)` pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// Latest error message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FieldName, String>);

impl FormErrors {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: FieldName, error: Option<String>) {
        match error {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear_field(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of fields currently in error
    pub fn count(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(FieldName, String)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Fields the user has left at least once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedState(BTreeSet<FieldName>);

impl TouchedState {
    pub fn touch(&mut self, field: FieldName) {
        self.0.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.0.extend(FieldName::ALL);
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.0.contains(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// On-screen contact form: one input buffer per field plus the submit button
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: [FormField; 6],
    pub active_field_index: usize,
}

impl ContactForm {
    /// Index of the submit button row
    pub const SUBMIT_INDEX: usize = FieldName::ALL.len();

    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.map(|name| match name {
                FieldName::Subject => FormField::choice(name),
                _ => FormField::text(name),
            }),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button is currently focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Name of the focused field, `None` on the submit button
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.get_field(self.active_field_index).map(|f| f.name)
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[Self::index_of(name)]
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[Self::index_of(name)]
    }

    /// Clear every input buffer and return focus to the first field
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }

    fn index_of(name: FieldName) -> usize {
        FieldName::ALL
            .iter()
            .position(|f| *f == name)
            .unwrap_or_default()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_INDEX + 1 // six fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
