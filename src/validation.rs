//! Pure field validation rules and live-feedback helpers

/// Severity of a feedback line shown under a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Soft guidance (e.g. characters still needed)
    Warning,
    /// Hard failure or limit exceeded
    Alert,
}

/// Minimum trimmed length for the message field
pub const MESSAGE_MIN_CHARS: usize = 10;
/// Maximum trimmed length for the message field
pub const MESSAGE_MAX_CHARS: usize = 500;
/// Trimmed length above which the remaining-characters counter appears
pub const MESSAGE_COUNTER_THRESHOLD: usize = 450;

/// Validate a name field. Returns `None` when valid, otherwise the first
/// failing rule's message. The character-class rule deliberately inspects
/// the untrimmed value while the length rule uses the trimmed value.
pub fn validate_name(value: &str, label: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{label} is required"));
    }
    if trimmed.chars().count() < 2 {
        return Some(format!("{label} must be at least 2 characters"));
    }
    if !value.chars().all(is_name_char) {
        return Some(format!("{label} contains invalid characters"));
    }
    None
}

/// Validate the email field. Returns `None` when valid.
pub fn validate_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if !email_format_ok(value) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// Validate the message field. Returns `None` when valid.
pub fn validate_message(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Message is required".to_string());
    }
    let len = trimmed.chars().count();
    if len < MESSAGE_MIN_CHARS {
        return Some(format!(
            "Message must be at least {MESSAGE_MIN_CHARS} characters"
        ));
    }
    if len > MESSAGE_MAX_CHARS {
        return Some(format!(
            "Message must not exceed {MESSAGE_MAX_CHARS} characters"
        ));
    }
    None
}

/// Loose syntactic email check: one-or-more non-space-non-@ characters,
/// "@", same class, ".", same class. Not RFC validation.
pub fn email_format_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side of it
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\''
}

/// Live counter text for the message field, keyed off the trimmed length.
/// Returns `None` when no counter should be shown.
pub fn message_counter(value: &str) -> Option<(String, Severity)> {
    let len = value.trim().chars().count();
    if len > 0 && len < MESSAGE_MIN_CHARS {
        let needed = MESSAGE_MIN_CHARS - len;
        Some((format!("{needed} more characters needed"), Severity::Warning))
    } else if len > MESSAGE_COUNTER_THRESHOLD {
        let remaining = MESSAGE_MAX_CHARS as i64 - len as i64;
        let severity = if len > MESSAGE_MAX_CHARS {
            Severity::Alert
        } else {
            Severity::Warning
        };
        Some((format!("{remaining} characters remaining"), severity))
    } else {
        None
    }
}
