//! In-memory feedback surface read by the renderer

use super::FeedbackSink;
use crate::state::FieldId;
use crate::timer::TimerKind;
use crate::validation::Severity;
use std::collections::HashMap;
use std::time::Instant;

/// Feedback line attached to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFeedback {
    pub text: String,
    pub severity: Severity,
    /// Whether the field's group carries the hard error flag. Counter hints
    /// write text without setting this.
    pub flagged: bool,
}

/// Production [`FeedbackSink`]: holds what the screen should currently show
#[derive(Debug, Default)]
pub struct ScreenFeedback {
    feedback: HashMap<FieldId, FieldFeedback>,
    banner_visible: bool,
    shake_started: Option<Instant>,
    notice: Option<String>,
}

impl ScreenFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feedback(&self, field: FieldId) -> Option<&FieldFeedback> {
        self.feedback.get(&field)
    }

    pub fn is_flagged(&self, field: FieldId) -> bool {
        self.feedback.get(&field).is_some_and(|f| f.flagged)
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_started.is_some()
    }

    /// Horizontal offset (in cells) for the shake animation: alternating
    /// left/right with an eased decay over the shake window
    pub fn shake_offset(&self) -> i16 {
        let Some(started) = self.shake_started else {
            return 0;
        };
        let window = TimerKind::ShakeClear.delay();
        let elapsed = started.elapsed();
        if elapsed >= window {
            return 0;
        }
        let progress = elapsed.as_secs_f32() / window.as_secs_f32();
        let amplitude = (1.0 - simple_easing::cubic_out(progress)) * 2.0;
        let amplitude = amplitude.round() as i16;
        // Flip direction every tenth of the window, like the reference
        // keyframes
        if (progress * 10.0) as u32 % 2 == 0 {
            -amplitude
        } else {
            amplitude
        }
    }
}

impl FeedbackSink for ScreenFeedback {
    fn mark_error(&mut self, field: FieldId, message: &str) {
        self.feedback.insert(
            field,
            FieldFeedback {
                text: message.to_string(),
                severity: Severity::Alert,
                flagged: true,
            },
        );
    }

    fn clear_error(&mut self, field: FieldId) {
        self.feedback.remove(&field);
    }

    fn clear_all(&mut self) {
        self.feedback.clear();
    }

    fn set_hint(&mut self, field: FieldId, text: &str, severity: Severity) {
        // The error flag survives a hint write; only the text and color change
        let flagged = self.is_flagged(field);
        self.feedback.insert(
            field,
            FieldFeedback {
                text: text.to_string(),
                severity,
                flagged,
            },
        );
    }

    fn set_banner(&mut self, visible: bool) {
        self.banner_visible = visible;
    }

    fn set_shake(&mut self, active: bool) {
        self.shake_started = if active { Some(Instant::now()) } else { None };
    }

    fn show_notice(&mut self, text: &str) {
        self.notice = Some(text.to_string());
    }

    fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
