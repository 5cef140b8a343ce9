//! Contact form validation. Submissions are never sent anywhere.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// A snapshot of the contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormSubmission {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("required fields are missing")]
    MissingFields,
    #[error("email address is malformed")]
    InvalidEmail,
}

impl ContactError {
    /// Translation key of the message shown to the visitor.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::MissingFields => "contact.missing_fields",
            Self::InvalidEmail => "contact.invalid_email",
        }
    }
}

pub const SENT_MESSAGE_KEY: &str = "contact.sent";

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Presence first, then email shape.
///
/// # Errors
///
/// Returns [`ContactError::MissingFields`] when any field is empty and
/// [`ContactError::InvalidEmail`] when the email does not look like one.
pub fn validate(submission: &FormSubmission) -> Result<(), ContactError> {
    if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(&submission.email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}
