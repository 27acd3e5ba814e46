//! Contact form state and focus tracking

use super::field::{ContactField, FieldId};

/// Number of focusable rows: the four fields plus the buttons row
const FOCUS_ROWS: usize = 5;
/// Focus index of the buttons row
const BUTTONS_ROW: usize = 4;

/// Buttons available on the buttons row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Send,
    Attach,
}

/// Submission lifecycle. Validation happens synchronously inside a submit
/// pass and rejection drops straight back to `Idle`, so only the accepted
/// state (banner visible, reset pending) persists between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Accepted,
}

/// The whole contact form: field values plus TUI focus state
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub first_name: ContactField,
    pub last_name: ContactField,
    pub email: ContactField,
    pub message: ContactField,
    pub phase: Phase,
    active_index: usize,
    pub selected_button: FormButton,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, id: FieldId) -> &ContactField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut ContactField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    /// The field currently holding focus, `None` on the buttons row
    pub fn active_field(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_index == BUTTONS_ROW
    }

    /// Move focus forward, returning the field being left (its blur)
    pub fn focus_next(&mut self) -> Option<FieldId> {
        let left = self.active_field();
        self.active_index = (self.active_index + 1) % FOCUS_ROWS;
        left
    }

    /// Move focus backward, returning the field being left (its blur)
    pub fn focus_prev(&mut self) -> Option<FieldId> {
        let left = self.active_field();
        self.active_index = if self.active_index == 0 {
            FOCUS_ROWS - 1
        } else {
            self.active_index - 1
        };
        left
    }

    pub fn next_button(&mut self) {
        self.selected_button = match self.selected_button {
            FormButton::Send => FormButton::Attach,
            FormButton::Attach => FormButton::Send,
        };
    }

    /// Reset every field value to empty
    pub fn clear_fields(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
    }
}
