//! Form domain layer
//!
//! Raw on-screen input buffers live in [`ContactForm`]; the sanitized data,
//! errors and touched flags that drive validation live in [`FormController`].

mod controller;
mod field;
mod form_state;

pub use controller::{FormController, SubmitOutcome};
pub use field::{FieldName, FormField, Subject};
pub use form_state::{ContactForm, Form, FormData};

#[cfg(test)]
pub use controller::FORM_INVALID_MESSAGE;
