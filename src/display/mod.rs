//! Display adapter boundary between the reducer and the renderer

mod screen;

pub use screen::*;

use crate::machine::Effect;
use crate::state::FieldId;
use crate::validation::Severity;

/// Everything the form can do to the visible feedback surface. The
/// production implementation is [`ScreenFeedback`]; tests use a mock.
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackSink {
    /// Flag the field's group as errored and set its feedback text
    fn mark_error(&mut self, field: FieldId, message: &str);

    /// Unflag the field and empty its feedback text. Safe on a clear field.
    fn clear_error(&mut self, field: FieldId);

    /// Clear flags and feedback text across every field
    fn clear_all(&mut self);

    /// Write informational text without touching the error flag
    fn set_hint(&mut self, field: FieldId, text: &str, severity: Severity);

    /// Show or hide the success banner
    fn set_banner(&mut self, visible: bool);

    /// Start or stop the rejection shake
    fn set_shake(&mut self, active: bool);

    /// Show the blocking notice dialog
    fn show_notice(&mut self, text: &str);

    /// Dismiss the blocking notice dialog
    fn dismiss_notice(&mut self);
}

/// Route display effects to a sink. Timer effects (`Schedule`/`Cancel`) are
/// the event loop's concern and are skipped here.
pub fn apply(effects: &[Effect], sink: &mut dyn FeedbackSink) {
    for effect in effects {
        match effect {
            Effect::MarkError(field, message) => sink.mark_error(*field, message),
            Effect::ClearError(field) => sink.clear_error(*field),
            Effect::ClearAllErrors => sink.clear_all(),
            Effect::SetHint(field, text, severity) => sink.set_hint(*field, text, *severity),
            Effect::SetBanner(visible) => sink.set_banner(*visible),
            Effect::SetShake(active) => sink.set_shake(*active),
            Effect::ShowNotice(text) => sink.show_notice(text),
            Effect::DismissNotice => sink.dismiss_notice(),
            Effect::Schedule(_) | Effect::Cancel(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{reduce, FormEvent};
    use crate::state::ContactForm;
    use crate::timer::TimerKind;
    use mockall::predicate::eq;

    #[test]
    fn test_apply_routes_mark_error() {
        let mut sink = MockFeedbackSink::new();
        sink.expect_mark_error()
            .withf(|field, message| *field == FieldId::Email && message == "Email is required")
            .times(1)
            .return_const(());

        apply(
            &[Effect::MarkError(
                FieldId::Email,
                "Email is required".to_string(),
            )],
            &mut sink,
        );
    }

    #[test]
    fn test_apply_skips_timer_effects() {
        // No expectations set: any sink call would panic
        let mut sink = MockFeedbackSink::new();
        apply(
            &[
                Effect::Schedule(TimerKind::SuccessReset),
                Effect::Cancel(TimerKind::ShakeClear),
            ],
            &mut sink,
        );
    }

    #[test]
    fn test_rejected_submit_drives_sink_in_order() {
        let mut form = ContactForm::new();
        let effects = reduce(&mut form, FormEvent::Submitted);

        let mut sink = MockFeedbackSink::new();
        let mut seq = mockall::Sequence::new();
        sink.expect_set_banner()
            .with(eq(false))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_clear_all()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_mark_error()
            .times(4)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_set_shake()
            .with(eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        apply(&effects, &mut sink);
    }
}
