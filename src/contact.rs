use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// A transient message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Raw field values as entered in the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A contact form that passed validation, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message].map(|f| f.trim());
        if fields.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        let [name, email, subject, message] = fields;
        if !EMAIL_RE.is_match(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }

    /// Validates and turns the result into the notification the visitor sees.
    /// There is no delivery backend; a valid form is only acknowledged.
    pub fn submit(&self) -> Notification {
        match self.validate() {
            Ok(submission) => {
                log::info!("Contact form accepted from {}", submission.email);
                Notification {
                    kind: NotificationKind::Success,
                    message: "Message sent successfully! I'll get back to you soon.".into(),
                }
            }
            Err(e) => Notification {
                kind: NotificationKind::Error,
                message: e.to_string(),
            },
        }
    }
}
