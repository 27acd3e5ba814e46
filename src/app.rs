//! Application state and core logic

use crate::config::ContactConfig;
use crate::display::{apply, ScreenFeedback};
use crate::machine::{reduce, Effect, FormEvent};
use crate::state::{ContactForm, FieldId, FormButton, Phase};
use crate::timer::{TimerKind, TimerService};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Default poll interval when the config does not override it
const DEFAULT_POLL_MS: u64 = 100;
/// Fast poll interval while the shake animation runs (~60fps)
const ANIMATION_POLL_MS: u64 = 16;

/// Application root: form state, visible feedback, and pending timers
pub struct App {
    pub form: ContactForm,
    pub screen: ScreenFeedback,
    pub config: ContactConfig,
    timers: TimerService,
    quit: bool,
}

impl App {
    /// Create the app and the channel on which fired timers arrive
    pub fn new(config: ContactConfig) -> (Self, UnboundedReceiver<TimerKind>) {
        let (timers, timer_rx) = TimerService::new();
        (
            Self {
                form: ContactForm::new(),
                screen: ScreenFeedback::new(),
                config,
                timers,
                quit: false,
            },
            timer_rx,
        )
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// How long the event loop may block waiting for input
    pub fn poll_interval(&self) -> Duration {
        if self.screen.is_shaking() {
            Duration::from_millis(ANIMATION_POLL_MS)
        } else {
            Duration::from_millis(self.config.poll_interval_ms.unwrap_or(DEFAULT_POLL_MS))
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The attachment notice is modal: only dismissal gets through
        if self.screen.notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dispatch(FormEvent::NoticeDismissed);
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            // Tab/BackTab move focus; leaving a field is its blur
            KeyCode::Tab => {
                if let Some(left) = self.form.focus_next() {
                    self.dispatch(FormEvent::Blurred(left));
                }
            }
            KeyCode::BackTab => {
                if let Some(left) = self.form.focus_prev() {
                    self.dispatch(FormEvent::Blurred(left));
                }
            }
            // Submit shortcut (works from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            _ if self.form.is_buttons_row_active() => self.handle_buttons_key(key),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(id) = self.form.active_field() {
                    self.form.field_mut(id).push_char(c);
                    self.dispatch(FormEvent::Edited(id));
                }
            }
            KeyCode::Backspace => {
                if let Some(id) = self.form.active_field() {
                    self.form.field_mut(id).pop_char();
                    self.dispatch(FormEvent::Edited(id));
                }
            }
            KeyCode::Enter => {
                // Enter in the message field adds a newline
                if self.form.active_field() == Some(FieldId::Message) {
                    self.form.message.push_char('\n');
                    self.dispatch(FormEvent::Edited(FieldId::Message));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Keys on the Send/Attach buttons row
    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.form.next_button();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.form.selected_button {
                FormButton::Send => self.submit(),
                FormButton::Attach => self.dispatch(FormEvent::AttachmentRequested),
            },
            _ => {}
        }
    }

    /// A timer delivered on the channel returned by [`App::new`]
    pub fn handle_timer(&mut self, kind: TimerKind) {
        self.timers.mark_fired(kind);
        self.dispatch(FormEvent::TimerFired(kind));
    }

    fn submit(&mut self) {
        self.dispatch(FormEvent::Submitted);
        if self.form.phase == Phase::Accepted {
            // Terminal for the submission: logged, not transmitted
            tracing::info!(
                first_name = %self.form.first_name.value(),
                last_name = %self.form.last_name.value(),
                email = %self.form.email.value(),
                message = %self.form.message.value(),
                "form submission accepted"
            );
        } else {
            tracing::debug!("form submission rejected");
        }
    }

    /// Run one event through the reducer and carry out its effects
    fn dispatch(&mut self, event: FormEvent) {
        let effects = reduce(&mut self.form, event);
        for effect in &effects {
            match effect {
                Effect::Schedule(kind) => self.timers.schedule(*kind),
                Effect::Cancel(kind) => self.timers.cancel(*kind),
                _ => {}
            }
        }
        apply(&effects, &mut self.screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn fill_valid_form(app: &mut App) {
        type_text(app, "John");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Doe");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "x@y.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, &"a".repeat(20));
    }

    #[tokio::test]
    async fn test_tab_blur_marks_empty_field() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        app.handle_key(key(KeyCode::Tab)).unwrap();

        let feedback = app.screen.feedback(FieldId::FirstName).unwrap();
        assert_eq!(feedback.text, "First name is required");
        assert!(app.screen.is_flagged(FieldId::FirstName));
    }

    #[tokio::test]
    async fn test_typing_clears_email_error_when_valid() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        // Focus the email field
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "a@b");
        assert!(app.screen.is_flagged(FieldId::Email));
        type_text(&mut app, ".c");
        assert_eq!(app.screen.feedback(FieldId::Email), None);
    }

    #[tokio::test]
    async fn test_submit_with_missing_first_name_shows_single_error() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        fill_valid_form(&mut app);
        app.form.first_name.clear();

        app.handle_key(ctrl('s')).unwrap();

        assert!(app.screen.is_flagged(FieldId::FirstName));
        for id in [FieldId::LastName, FieldId::Email, FieldId::Message] {
            assert_eq!(app.screen.feedback(id), None);
        }
        assert!(!app.screen.banner_visible());
        assert!(app.screen.is_shaking());
    }

    #[tokio::test]
    async fn test_valid_submit_shows_banner_then_reset_clears_everything() {
        let (mut app, mut rx) = App::new(ContactConfig::default());
        fill_valid_form(&mut app);

        app.handle_key(ctrl('s')).unwrap();
        assert!(app.screen.banner_visible());
        assert_eq!(app.form.phase, Phase::Accepted);

        // The scheduled reset would arrive on the channel after 3s; drive it
        // directly here
        app.handle_timer(TimerKind::SuccessReset);
        assert!(!app.screen.banner_visible());
        for id in FieldId::ALL {
            assert!(app.form.field(id).is_empty());
            assert_eq!(app.screen.feedback(id), None);
        }
        assert_eq!(app.form.phase, Phase::Idle);
        let _ = rx.try_recv();
    }

    #[tokio::test]
    async fn test_enter_on_send_button_submits() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        fill_valid_form(&mut app);
        app.handle_key(key(KeyCode::Tab)).unwrap(); // message -> buttons row
        assert!(app.form.is_buttons_row_active());

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.screen.banner_visible());
    }

    #[tokio::test]
    async fn test_attach_button_shows_modal_notice() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        // Reach the buttons row and select Attach
        app.handle_key(key(KeyCode::BackTab)).unwrap();
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(
            app.screen.notice(),
            Some("File attachment feature coming soon!")
        );

        // Modal: typing is swallowed while the notice is up
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert!(app.form.first_name.is_empty());

        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.screen.notice(), None);
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_esc_quits_outside_modal() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_enter_adds_newline_only_in_message() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.form.first_name.is_empty());

        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
        assert_eq!(app.form.active_field(), Some(FieldId::Message));
        type_text(&mut app, "hello");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.form.message.value(), "hello\n");
    }

    #[tokio::test]
    async fn test_message_counter_appears_without_error_flag() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
        type_text(&mut app, "short");

        let feedback = app.screen.feedback(FieldId::Message).unwrap();
        assert_eq!(feedback.text, "5 more characters needed");
        assert!(!feedback.flagged);
    }

    #[tokio::test]
    async fn test_poll_interval_speeds_up_while_shaking() {
        let (mut app, _rx) = App::new(ContactConfig::default());
        assert_eq!(app.poll_interval(), Duration::from_millis(100));

        app.handle_key(ctrl('s')).unwrap(); // empty form -> rejected, shaking
        assert_eq!(app.poll_interval(), Duration::from_millis(16));

        app.handle_timer(TimerKind::ShakeClear);
        assert_eq!(app.poll_interval(), Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_configured_poll_interval() {
        let config = ContactConfig {
            poll_interval_ms: Some(50),
            ..Default::default()
        };
        let (app, _rx) = App::new(config);
        assert_eq!(app.poll_interval(), Duration::from_millis(50));
    }
}
