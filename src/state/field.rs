//! Contact form field value objects

use crate::validation::{validate_email, validate_message, validate_name};

/// Identifier for each field of the contact form, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldId {
    /// All fields in declaration order (the order submit validates in)
    pub const ALL: [FieldId; 4] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Message,
    ];

    /// Human-readable label used in error messages and rendering
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }

    /// Run this field's validator against a raw value
    pub fn validate(self, value: &str) -> Option<String> {
        match self {
            FieldId::FirstName | FieldId::LastName => validate_name(value, self.label()),
            FieldId::Email => validate_email(value),
            FieldId::Message => validate_message(value),
        }
    }
}

/// A single text field of the contact form
#[derive(Debug, Clone, Default)]
pub struct ContactField {
    value: String,
}

impl ContactField {
    /// Current raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a character (user keystroke)
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character (backspace)
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Reset the value to empty
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod field_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_is_declaration_order() {
            assert_eq!(
                FieldId::ALL,
                [
                    FieldId::FirstName,
                    FieldId::LastName,
                    FieldId::Email,
                    FieldId::Message
                ]
            );
        }

        #[test]
        fn test_labels() {
            assert_eq!(FieldId::FirstName.label(), "First name");
            assert_eq!(FieldId::LastName.label(), "Last name");
            assert_eq!(FieldId::Email.label(), "Email");
            assert_eq!(FieldId::Message.label(), "Message");
        }

        #[test]
        fn test_validate_dispatches_name_rules() {
            assert_eq!(
                FieldId::LastName.validate(""),
                Some("Last name is required".to_string())
            );
        }

        #[test]
        fn test_validate_dispatches_email_rules() {
            assert_eq!(
                FieldId::Email.validate("nope"),
                Some("Please enter a valid email address".to_string())
            );
        }

        #[test]
        fn test_validate_dispatches_message_rules() {
            assert_eq!(
                FieldId::Message.validate("short"),
                Some("Message must be at least 10 characters".to_string())
            );
        }
    }

    mod contact_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty() {
            let field = ContactField::default();
            assert!(field.is_empty());
            assert_eq!(field.value(), "");
        }

        #[test]
        fn test_push_and_pop() {
            let mut field = ContactField::default();
            field.push_char('h');
            field.push_char('i');
            assert_eq!(field.value(), "hi");
            field.pop_char();
            assert_eq!(field.value(), "h");
        }

        #[test]
        fn test_pop_on_empty_is_noop() {
            let mut field = ContactField::default();
            field.pop_char();
            assert_eq!(field.value(), "");
        }

        #[test]
        fn test_clear() {
            let mut field = ContactField::default();
            field.push_char('x');
            field.clear();
            assert!(field.is_empty());
        }
    }
}
