//! Contact form field validation
//!
//! Minimum lengths per field plus a shape check for the email address.
//! Messages are surfaced next to the field on blur and on submit.

/// The four contact form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: &'static [FormField] = &[
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }
}

/// Validate a single field value (trimmed). Returns the error message to show
/// under the field, or None when the value passes.
pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    match field {
        FormField::Name => {
            if value.chars().count() < 2 {
                Some("Name must be at least 2 characters long")
            } else {
                None
            }
        }
        FormField::Email => {
            if is_valid_email(value) {
                None
            } else {
                Some("Please enter a valid email address")
            }
        }
        FormField::Subject => {
            if value.chars().count() < 5 {
                Some("Subject must be at least 5 characters long")
            } else {
                None
            }
        }
        FormField::Message => {
            if value.chars().count() < 10 {
                Some("Message must be at least 10 characters long")
            } else {
                None
            }
        }
    }
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`,
/// non-empty local part, domain containing a dot with non-empty labels
/// around it, no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length() {
        assert!(validate_field(FormField::Name, "A").is_some());
        assert!(validate_field(FormField::Name, "  A  ").is_some());
        assert!(validate_field(FormField::Name, "Al").is_none());
    }

    #[test]
    fn test_subject_and_message_lengths() {
        assert!(validate_field(FormField::Subject, "Hey").is_some());
        assert!(validate_field(FormField::Subject, "Hello").is_none());
        assert!(validate_field(FormField::Message, "Too short").is_some());
        assert!(validate_field(FormField::Message, "Long enough now.").is_none());
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_field(FormField::Email, "me@example.com").is_none());
        assert!(validate_field(FormField::Email, "a.b+c@sub.example.org").is_none());

        assert!(validate_field(FormField::Email, "").is_some());
        assert!(validate_field(FormField::Email, "plainaddress").is_some());
        assert!(validate_field(FormField::Email, "@example.com").is_some());
        assert!(validate_field(FormField::Email, "me@example").is_some());
        assert!(validate_field(FormField::Email, "me@.com").is_some());
        assert!(validate_field(FormField::Email, "me@example.").is_some());
        assert!(validate_field(FormField::Email, "me two@example.com").is_some());
        assert!(validate_field(FormField::Email, "me@ex@ample.com").is_some());
    }
}
