//! Event reducer driving the contact form
//!
//! Every user interaction and timer callback is a [`FormEvent`]; `reduce`
//! updates the [`ContactForm`] and returns the [`Effect`]s the caller must
//! apply (display writes and timer scheduling). Keeping the side effects as
//! data makes the submission state machine testable without a terminal.

use crate::state::{ContactForm, FieldId, Phase};
use crate::timer::TimerKind;
use crate::validation::{email_format_ok, message_counter, Severity};

/// Notice text for the attachment button stub
pub const ATTACHMENT_NOTICE: &str = "File attachment feature coming soon!";

/// Short-form email error shown while typing (blur shows the longer wording)
const EMAIL_FORMAT_HINT: &str = "Please enter a valid email format";

/// An interaction or timer callback fed to the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus left a field
    Blurred(FieldId),
    /// A field's value changed by one keystroke
    Edited(FieldId),
    /// The user asked to send the form
    Submitted,
    /// A scheduled timer fired
    TimerFired(TimerKind),
    /// The attachment button was activated
    AttachmentRequested,
    /// The blocking notice was dismissed
    NoticeDismissed,
}

/// A side effect the caller must carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Flag the field's group as errored and show the message
    MarkError(FieldId, String),
    /// Unflag the field and empty its feedback line
    ClearError(FieldId),
    /// Clear every field's flag and feedback line
    ClearAllErrors,
    /// Write informational text into the field's feedback line without
    /// touching the error flag (the live character counter)
    SetHint(FieldId, String, Severity),
    /// Show or hide the success banner
    SetBanner(bool),
    /// Start or stop the rejection shake
    SetShake(bool),
    /// Show the blocking notice dialog
    ShowNotice(String),
    /// Dismiss the blocking notice dialog
    DismissNotice,
    /// Schedule the timer kind after its fixed delay
    Schedule(TimerKind),
    /// Abort a pending timer of the kind, if any
    Cancel(TimerKind),
}

/// Advance the form by one event, returning the effects to apply in order
pub fn reduce(form: &mut ContactForm, event: FormEvent) -> Vec<Effect> {
    match event {
        FormEvent::Blurred(id) => match id.validate(form.field(id).value()) {
            Some(message) => vec![Effect::MarkError(id, message)],
            None => vec![Effect::ClearError(id)],
        },
        FormEvent::Edited(FieldId::Email) => {
            let value = form.email.value();
            if !value.is_empty() && !email_format_ok(value) {
                vec![Effect::MarkError(
                    FieldId::Email,
                    EMAIL_FORMAT_HINT.to_string(),
                )]
            } else {
                vec![Effect::ClearError(FieldId::Email)]
            }
        }
        FormEvent::Edited(FieldId::Message) => {
            match message_counter(form.message.value()) {
                Some((text, severity)) => {
                    vec![Effect::SetHint(FieldId::Message, text, severity)]
                }
                None => vec![Effect::ClearError(FieldId::Message)],
            }
        }
        FormEvent::Edited(_) => Vec::new(),
        FormEvent::Submitted => submit(form),
        FormEvent::TimerFired(TimerKind::SuccessReset) => {
            // A stale reset (cancelled race, phase already moved on) is ignored
            if form.phase != Phase::Accepted {
                return Vec::new();
            }
            form.clear_fields();
            form.phase = Phase::Idle;
            vec![Effect::SetBanner(false), Effect::ClearAllErrors]
        }
        FormEvent::TimerFired(TimerKind::ShakeClear) => vec![Effect::SetShake(false)],
        FormEvent::AttachmentRequested => {
            vec![Effect::ShowNotice(ATTACHMENT_NOTICE.to_string())]
        }
        FormEvent::NoticeDismissed => vec![Effect::DismissNotice],
    }
}

/// Full-form validation pass. A resubmit always cancels a pending success
/// reset and hides a still-visible banner before re-evaluating, so the
/// previous submission's timer can never wipe the new input.
fn submit(form: &mut ContactForm) -> Vec<Effect> {
    form.phase = Phase::Validating;
    let mut effects = vec![
        Effect::Cancel(TimerKind::SuccessReset),
        Effect::SetBanner(false),
        Effect::ClearAllErrors,
    ];

    let mut all_valid = true;
    for id in FieldId::ALL {
        if let Some(message) = id.validate(form.field(id).value()) {
            effects.push(Effect::MarkError(id, message));
            all_valid = false;
        }
    }

    if all_valid {
        form.phase = Phase::Accepted;
        effects.push(Effect::SetBanner(true));
        effects.push(Effect::Schedule(TimerKind::SuccessReset));
    } else {
        form.phase = Phase::Idle;
        effects.push(Effect::SetShake(true));
        effects.push(Effect::Schedule(TimerKind::ShakeClear));
    }
    effects
}
