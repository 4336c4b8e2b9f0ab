//! Application state

use super::forms::ContactForm;
use crate::i18n::Language;
use crate::theme::Theme;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Presentation
    pub theme: Theme,
    pub language: Language,

    // On-screen input buffers and focus
    pub form: ContactForm,

    // UI state
    pub status_message: Option<String>,
    /// Set when a submit was requested; the event loop awaits it after the
    /// next draw so the "sending" label is visible
    pub pending_submit: bool,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            theme,
            language,
            ..Default::default()
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("queued error: {message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
