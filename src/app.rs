//! Application state and core logic

use crate::config::TuiConfig;
use crate::i18n::{Language, Translations};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, ContactForm, Form, FormController, SubmitOutcome};
use crate::submit::{SimulatedSubmitter, Submitter};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Sanitized form data, errors and submission lifecycle
    pub controller: FormController,
    /// Persisted preferences
    config: TuiConfig,
    /// Where preferences are saved; `None` disables saving
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from the user's config file
    pub fn new() -> Self {
        let config = TuiConfig::load_or_default();
        let submitter = SimulatedSubmitter::new(config.submit_delay());
        tracing::debug!(
            delay_ms = submitter.delay().as_millis() as u64,
            "using simulated submission service"
        );
        Self::from_parts(config, TuiConfig::config_path(), Box::new(submitter))
    }

    pub fn from_parts(
        config: TuiConfig,
        config_path: Option<PathBuf>,
        submitter: Box<dyn Submitter>,
    ) -> Self {
        let theme = config.theme.unwrap_or_default();
        let language = config.language.unwrap_or_else(Language::detect);
        Self {
            state: AppState::new(theme, language),
            controller: FormController::new(submitter),
            config,
            config_path,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn translations(&self) -> &'static Translations {
        self.state.language.translations()
    }

    /// True from the submit request until the submission completes
    pub fn is_sending(&self) -> bool {
        self.state.pending_submit || self.controller.is_submitting()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl || key.modifiers.contains(SUBMIT_MODIFIER) => {
                self.request_submit()
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::F(2) => self.toggle_theme(),
            KeyCode::F(3) => self.toggle_language(),
            KeyCode::Tab | KeyCode::Down => self.move_focus(ContactForm::next_field),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(ContactForm::prev_field),
            KeyCode::Enter if self.state.form.is_submit_active() => self.request_submit(),
            _ => self.edit_active_field(key),
        }
    }

    /// Move focus and report a blur for the field that was left
    fn move_focus(&mut self, step: fn(&mut ContactForm)) {
        let left = self.state.form.active_field_name();
        step(&mut self.state.form);
        if let Some(field) = left {
            self.controller.on_blur(field);
        }
    }

    fn edit_active_field(&mut self, key: KeyEvent) {
        let typing = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        let Some(field) = self.state.form.get_active_field_mut() else {
            return;
        };

        let edited = match key.code {
            KeyCode::Left if field.is_choice() => {
                field.prev_choice();
                true
            }
            KeyCode::Right | KeyCode::Char(' ') if field.is_choice() => {
                field.next_choice();
                true
            }
            KeyCode::Char(c) if typing && !field.is_choice() => {
                field.push_char(c);
                true
            }
            // Enter in the message field adds a newline
            KeyCode::Enter if field.is_multiline() => {
                field.push_char('\n');
                true
            }
            KeyCode::Backspace => {
                field.pop_char();
                true
            }
            _ => false,
        };

        if edited {
            let name = field.name;
            let raw = field.raw_value();
            self.controller.on_input_change(name, &raw);
        }
    }

    /// Queue a submission for the event loop. Ignored while one is pending
    /// or in flight.
    fn request_submit(&mut self) {
        if self.is_sending() {
            tracing::debug!("submit ignored, already sending");
            return;
        }
        self.state.pending_submit = true;
    }

    /// Run a queued submission to completion and report the result
    pub async fn run_pending_submit(&mut self) -> Option<SubmitOutcome> {
        if !self.state.pending_submit {
            return None;
        }

        let mut delivered = false;
        let mut failure = None;
        let outcome = self
            .controller
            .submit(|_| delivered = true, |message| failure = Some(message))
            .await;
        self.state.pending_submit = false;

        if delivered {
            self.state.form.clear();
            self.state.status_message = Some(self.translations().form_success.to_string());
        }
        if let Some(message) = failure {
            self.state.push_error(format!("Error: {message}"));
        }
        Some(outcome)
    }

    fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggle();
        self.config.theme = Some(self.state.theme);
        self.persist_config();
    }

    fn toggle_language(&mut self) {
        self.state.language = self.state.language.toggle();
        self.config.language = Some(self.state.language);
        self.persist_config();
    }

    fn persist_config(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(err) = self.config.save_to(path) {
            tracing::warn!("Failed to save config: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::state::{FieldName, FORM_INVALID_MESSAGE};
    use crate::submit::{MockSubmitter, SubmissionReceipt};
    use crate::theme::Theme;

    fn english() -> TuiConfig {
        TuiConfig {
            language: Some(Language::En),
            ..Default::default()
        }
    }

    fn app_with(mock: MockSubmitter) -> App {
        App::from_parts(english(), None, Box::new(mock))
    }

    fn idle_app() -> App {
        let mut mock = MockSubmitter::new();
        mock.expect_submit().never();
        app_with(mock)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill every field through key events, leaving focus on the submit button
    fn fill_valid(app: &mut App) {
        type_text(app, "Jane Doe");
        press(app, KeyCode::Tab);
        type_text(app, " Jane@Example.com");
        press(app, KeyCode::Tab);
        type_text(app, "+60 3-8888 1000");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::Tab);
        type_text(app, "I would like a demo please.");
        press(app, KeyCode::Tab);
    }

    mod editing {
        use super::*;

        #[test]
        fn test_typing_feeds_sanitized_value_to_controller() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, " A@B.COM");
            assert_eq!(app.state.form.field(FieldName::Email).raw_value(), " A@B.COM");
            assert_eq!(app.controller.data().email, "a@b.com");
        }

        #[test]
        fn test_spaces_survive_in_raw_buffer() {
            let mut app = idle_app();
            type_text(&mut app, "Jane ");
            assert_eq!(app.state.form.field(FieldName::Name).raw_value(), "Jane ");
            assert_eq!(app.controller.data().name, "Jane");
            type_text(&mut app, "D");
            assert_eq!(app.controller.data().name, "Jane D");
        }

        #[test]
        fn test_backspace() {
            let mut app = idle_app();
            type_text(&mut app, "Jo");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.controller.data().name, "J");
        }

        #[test]
        fn test_subject_cycles_with_arrows() {
            let mut app = idle_app();
            app.state.form.set_active_field(4);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.controller.data().subject, "general");
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.controller.data().subject, "technical");
            press(&mut app, KeyCode::Left);
            press(&mut app, KeyCode::Left);
            assert_eq!(app.controller.data().subject, "");
        }

        #[test]
        fn test_enter_adds_newline_only_in_message() {
            let mut app = idle_app();
            type_text(&mut app, "Jane");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.field(FieldName::Name).raw_value(), "Jane");

            app.state.form.set_active_field(5);
            type_text(&mut app, "line one");
            press(&mut app, KeyCode::Enter);
            type_text(&mut app, "line two");
            assert_eq!(app.controller.data().message, "line one\nline two");
        }

        #[test]
        fn test_control_chords_are_not_typed() {
            let mut app = idle_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
            assert!(app.state.form.field(FieldName::Name).is_empty());
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_leaving_a_field_blurs_it() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Tab);
            assert!(app.controller.is_touched(FieldName::Name));
            assert_eq!(
                app.controller.field_error(FieldName::Name),
                Some("This field is required")
            );
            assert!(!app.controller.is_touched(FieldName::Email));
        }

        #[test]
        fn test_backtab_wraps_to_submit_button() {
            let mut app = idle_app();
            press(&mut app, KeyCode::BackTab);
            assert!(app.state.form.is_submit_active());
            press(&mut app, KeyCode::Up);
            assert_eq!(app.state.form.active_field_name(), Some(FieldName::Message));
        }

        #[test]
        fn test_leaving_submit_button_touches_nothing() {
            let mut app = idle_app();
            app.state.form.set_active_field(ContactForm::SUBMIT_INDEX);
            press(&mut app, KeyCode::Tab);
            assert!(FieldName::ALL
                .iter()
                .all(|field| !app.controller.is_touched(*field)));
        }
    }

    mod submitting {
        use super::*;

        #[tokio::test]
        async fn test_successful_submit_clears_form_and_reports() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Ok(SubmissionReceipt::new()));
            let mut app = app_with(mock);
            fill_valid(&mut app);

            press(&mut app, KeyCode::Enter);
            assert!(app.state.pending_submit);
            assert!(app.is_sending());

            let outcome = app.run_pending_submit().await;
            assert!(matches!(outcome, Some(SubmitOutcome::Sent(_))));
            assert!(!app.is_sending());
            assert!(app.state.form.fields.iter().all(|field| field.is_empty()));
            assert_eq!(
                app.state.status_message.as_deref(),
                Some(Language::En.translations().form_success)
            );
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_invalid_submit_opens_error_dialog() {
            let mut app = idle_app();
            ctrl(&mut app, 's');
            let outcome = app.run_pending_submit().await;

            assert_eq!(outcome, Some(SubmitOutcome::Invalid));
            assert_eq!(
                app.state.current_error(),
                Some(format!("Error: {FORM_INVALID_MESSAGE}").as_str())
            );
            assert_eq!(app.controller.errors().count(), 5);
        }

        #[tokio::test]
        async fn test_service_failure_keeps_input() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::new("Network down")));
            let mut app = app_with(mock);
            fill_valid(&mut app);

            ctrl(&mut app, 's');
            app.run_pending_submit().await;

            assert_eq!(app.state.current_error(), Some("Error: Network down"));
            assert_eq!(app.state.form.field(FieldName::Name).raw_value(), "Jane Doe");
            assert_eq!(app.controller.data().email, "jane@example.com");
            assert!(app.state.status_message.is_none());
        }

        #[test]
        fn test_repeated_triggers_queue_one_submit() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Ok(SubmissionReceipt::new()));
            let mut app = app_with(mock);
            fill_valid(&mut app);

            press(&mut app, KeyCode::Enter);
            ctrl(&mut app, 's');
            press(&mut app, KeyCode::Enter);

            assert!(tokio_test::block_on(app.run_pending_submit()).is_some());
            assert!(tokio_test::block_on(app.run_pending_submit()).is_none());
        }

        #[test]
        fn test_nothing_pending() {
            let mut app = idle_app();
            assert!(tokio_test::block_on(app.run_pending_submit()).is_none());
        }
    }

    mod dialogs_and_toggles {
        use super::*;

        #[test]
        fn test_error_dialog_is_modal() {
            let mut app = idle_app();
            app.state.push_error("boom");

            type_text(&mut app, "abc");
            assert!(app.state.form.field(FieldName::Name).is_empty());

            press(&mut app, KeyCode::Esc);
            assert!(!app.state.has_errors());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_quit_keys() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());

            let mut app = idle_app();
            ctrl(&mut app, 'c');
            assert!(app.should_quit());
        }

        #[test]
        fn test_theme_and_language_toggle() {
            let mut app = idle_app();
            assert_eq!(app.state.theme, Theme::Light);
            press(&mut app, KeyCode::F(2));
            assert_eq!(app.state.theme, Theme::Dark);

            press(&mut app, KeyCode::F(3));
            assert_eq!(app.state.language, Language::Ms);
            assert_eq!(app.translations().submit, "HANTAR MESEJ");
        }

        #[test]
        fn test_toggles_are_persisted() {
            let dir = std::env::temp_dir().join(format!("sirius-app-{}", uuid::Uuid::new_v4()));
            let path = dir.join("config.json");
            let mut mock = MockSubmitter::new();
            mock.expect_submit().never();
            let mut app = App::from_parts(english(), Some(path.clone()), Box::new(mock));

            press(&mut app, KeyCode::F(2));
            press(&mut app, KeyCode::F(3));

            let saved: TuiConfig =
                serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(saved.theme, Some(Theme::Dark));
            assert_eq!(saved.language, Some(Language::Ms));
            let _ = std::fs::remove_dir_all(dir);
        }

        #[test]
        fn test_key_press_clears_status() {
            let mut app = idle_app();
            app.state.status_message = Some("done".to_string());
            press(&mut app, KeyCode::Tab);
            assert!(app.state.status_message.is_none());
        }
    }
}
