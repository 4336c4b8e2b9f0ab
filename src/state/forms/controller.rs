//! Contact form controller: owns the form data and runs the
//! edit / blur / submit lifecycle

use super::field::FieldName;
use super::form_state::{FormData, FormErrors, TouchedState};
use crate::error::SubmitError;
use crate::sanitize::{sanitize_by_field_type, sanitize_form_data};
use crate::submit::{SubmissionReceipt, Submitter};
use crate::validation::{is_form_valid, rule_for, validate_field, validate_form};
use std::ops::{Deref, DerefMut};

/// Reported to the error callback when validation blocks a submit
pub const FORM_INVALID_MESSAGE: &str = "Please correct the errors in the form";

/// How a call to [`FormController::submit`] ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid,
    Sent(SubmissionReceipt),
    Failed(SubmitError),
}

pub struct FormController {
    data: FormData,
    errors: FormErrors,
    touched: TouchedState,
    submitting: bool,
    submitter: Box<dyn Submitter>,
}

impl FormController {
    pub fn new(submitter: Box<dyn Submitter>) -> Self {
        Self {
            data: FormData::default(),
            errors: FormErrors::default(),
            touched: TouchedState::default(),
            submitting: false,
            submitter,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.is_touched(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Store the sanitized value and drop any stale error for the field.
    /// Validation waits for blur or submit.
    pub fn on_input_change(&mut self, field: FieldName, raw: &str) {
        self.data.set(field, sanitize_by_field_type(raw, field));
        self.errors.clear_field(field);
    }

    pub fn on_blur(&mut self, field: FieldName) {
        self.touched.touch(field);
        let Some(rule) = rule_for(field) else {
            return;
        };
        let result = validate_field(self.data.get(field), rule);
        tracing::debug!(%field, valid = result.is_valid, "field blurred");
        self.errors.set(field, result.error);
    }

    /// Validate every field, replace the error map and mark all fields
    /// touched. Returns whether the form is valid.
    pub fn validate_all_fields(&mut self) -> bool {
        let sanitized = sanitize_form_data(&self.data);
        let results = validate_form(
            sanitized
                .entries()
                .map(|(field, value)| (field.as_str(), value)),
        );
        let valid = is_form_valid(&results);
        self.errors = results
            .into_iter()
            .filter_map(|(field, result)| result.error.map(|error| (field, error)))
            .collect();
        self.touched.touch_all();
        tracing::debug!(valid, errors = self.errors.count(), "form validated");
        valid
    }

    /// Error for `field`, only once the user has left it
    pub fn field_error(&self, field: FieldName) -> Option<&str> {
        if self.touched.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Back to an empty, untouched form
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors.clear();
        self.touched.clear();
    }

    /// Validate and hand the sanitized data to the submission service.
    ///
    /// `on_success` receives the data that was sent, after which the form is
    /// reset. `on_error` receives a user-facing message and the entered
    /// values are kept. The submitting flag is set for the duration of the
    /// call and cleared however it ends, including when the future is
    /// dropped mid-await or a callback panics.
    pub async fn submit<S, E>(&mut self, on_success: S, on_error: E) -> SubmitOutcome
    where
        S: FnOnce(FormData),
        E: FnOnce(String),
    {
        let mut this = SubmittingGuard::new(self);

        if !this.validate_all_fields() {
            tracing::warn!(errors = this.errors.count(), "submit blocked by validation");
            on_error(FORM_INVALID_MESSAGE.to_string());
            return SubmitOutcome::Invalid;
        }

        let sanitized = sanitize_form_data(&this.data);
        match this.submitter.submit(&sanitized).await {
            Ok(receipt) => {
                tracing::info!(id = %receipt.id, "submission accepted");
                on_success(sanitized);
                this.reset();
                SubmitOutcome::Sent(receipt)
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                on_error(err.user_message());
                SubmitOutcome::Failed(err)
            }
        }
    }
}

/// Holds the submitting flag for as long as it lives
struct SubmittingGuard<'a>(&'a mut FormController);

impl<'a> SubmittingGuard<'a> {
    fn new(controller: &'a mut FormController) -> Self {
        controller.submitting = true;
        Self(controller)
    }
}

impl Deref for SubmittingGuard<'_> {
    type Target = FormController;

    fn deref(&self) -> &FormController {
        self.0
    }
}

impl DerefMut for SubmittingGuard<'_> {
    fn deref_mut(&mut self) -> &mut FormController {
        self.0
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.submitting = false;
    }
}
