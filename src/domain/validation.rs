use crate::domain::model::ContactSubmission;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_email, validate_min_chars, Validate};
use std::fmt;

pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 3;
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Website,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Website => "website",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Per-field validation messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().map(|e| e.field).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Runs every field rule and collects all failures rather than stopping at
/// the first one. The honeypot is not checked here.
pub fn validate_submission(submission: &ContactSubmission) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !validate_min_chars(&submission.name, NAME_MIN_CHARS) {
        errors.push(Field::Name, "Name must be at least 2 characters");
    }
    if !validate_email(&submission.email) {
        errors.push(Field::Email, "Please enter a valid email address");
    }
    if !validate_min_chars(&submission.subject, SUBJECT_MIN_CHARS) {
        errors.push(Field::Subject, "Subject must be at least 3 characters");
    }
    if !validate_min_chars(&submission.message, MESSAGE_MIN_CHARS) {
        errors.push(Field::Message, "Message must be at least 10 characters");
    }

    errors
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<()> {
        let errors = validate_submission(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PortfolioError::Validation { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Al".to_string(),
            email: "al@example.com".to_string(),
            subject: "Hey".to_string(),
            message: "Ten chars!".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn test_minimum_lengths_pass() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_short_name_fails_only_name() {
        let mut submission = valid();
        submission.name = "A".to_string();

        let errors = validate_submission(&submission);
        assert_eq!(errors.fields(), vec![Field::Name]);
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_all_failures_are_reported() {
        let submission = ContactSubmission::default();
        let errors = validate_submission(&submission);
        assert_eq!(
            errors.fields(),
            vec![Field::Name, Field::Email, Field::Subject, Field::Message]
        );

        match submission.validate() {
            Err(PortfolioError::Validation { errors }) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let mut submission = valid();
        submission.name = "é".to_string();
        assert_eq!(validate_submission(&submission).fields(), vec![Field::Name]);

        submission.name = "Zoë".to_string();
        assert!(validate_submission(&submission).is_empty());
    }

    #[test]
    fn test_bad_email() {
        let mut submission = valid();
        submission.email = "not-an-email".to_string();
        assert_eq!(validate_submission(&submission).fields(), vec![Field::Email]);
    }
}
