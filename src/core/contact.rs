use crate::core::view::Notice;
use crate::domain::model::{ContactRow, ContactSubmission};
use crate::domain::ports::{Clock, ContactStore};
use crate::domain::validation::{validate_submission, Field, FieldErrors};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    /// Honeypot was filled in; nothing was sent.
    SpamDiscarded,
}

/// Honeypot, validation, configuration guard and the single insert.
pub struct ContactService<S: ContactStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: ContactStore, C: Clock> ContactService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitOutcome> {
        if submission.is_spam() {
            tracing::warn!("Honeypot field filled in, discarding submission");
            return Ok(SubmitOutcome::SpamDiscarded);
        }

        submission.validate()?;

        if !self.store.is_configured() {
            tracing::error!("Contact submission rejected: data store is not configured");
            return Err(PortfolioError::not_configured());
        }

        let row = ContactRow::new(submission, self.clock.now());
        self.store.insert_contact(&row).await?;
        tracing::info!("Contact message stored (subject: {})", row.subject);
        Ok(SubmitOutcome::Delivered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Sent,
    Invalid,
    Failed,
    /// A submission was already in flight.
    Ignored,
}

// Clears the in-flight flag when dropped, so a cancelled submit cannot
// leave the form locked.
struct SubmittingGuard<'a>(&'a mut bool);

impl<'a> SubmittingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Contact form state: values, per-field errors, the in-flight flag and
/// the last notice.
pub struct ContactForm<S: ContactStore, C: Clock> {
    service: ContactService<S, C>,
    values: ContactSubmission,
    errors: FieldErrors,
    submitting: bool,
    notice: Option<Notice>,
}

impl<S: ContactStore, C: Clock> ContactForm<S, C> {
    pub fn new(service: ContactService<S, C>) -> Self {
        Self {
            service,
            values: ContactSubmission::default(),
            errors: FieldErrors::new(),
            submitting: false,
            notice: None,
        }
    }

    pub fn values(&self) -> &ContactSubmission {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Updates one input. Once errors are showing, they are re-checked on
    /// every change.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.values.name = value,
            Field::Email => self.values.email = value,
            Field::Subject => self.values.subject = value,
            Field::Message => self.values.message = value,
            Field::Website => self.values.website = value,
        }
        if !self.errors.is_empty() {
            self.errors = validate_submission(&self.values);
        }
    }

    pub fn reset(&mut self) {
        self.values = ContactSubmission::default();
        self.errors = FieldErrors::new();
    }

    pub async fn submit(&mut self) -> SubmitStatus {
        if self.submitting {
            return SubmitStatus::Ignored;
        }

        let result = {
            let _guard = SubmittingGuard::engage(&mut self.submitting);
            self.service.submit(&self.values).await
        };

        match result {
            Ok(_) => {
                self.reset();
                self.notice = Some(Notice::message_sent());
                SubmitStatus::Sent
            }
            Err(PortfolioError::Validation { errors }) => {
                self.errors = errors;
                SubmitStatus::Invalid
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                self.notice = Some(Notice::submission_failed(e.user_friendly_message()));
                SubmitStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::NoticeKind;
    use crate::utils::error::NOT_CONFIGURED_MESSAGE;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::{Arc, Mutex};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
        }
    }

    #[derive(Clone, Default)]
    struct MockStore {
        rows: Arc<Mutex<Vec<ContactRow>>>,
        configured: bool,
        reject_with: Option<Option<String>>,
        stall: bool,
    }

    impl MockStore {
        fn configured() -> Self {
            Self {
                configured: true,
                ..Self::default()
            }
        }

        fn rows(&self) -> Vec<ContactRow> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContactStore for MockStore {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn insert_contact(&self, row: &ContactRow) -> Result<()> {
            if self.stall {
                std::future::pending::<()>().await;
            }
            self.rows.lock().unwrap().push(row.clone());
            match &self.reject_with {
                Some(message) => Err(PortfolioError::remote(message.clone())),
                None => Ok(()),
            }
        }
    }

    fn form(store: MockStore) -> ContactForm<MockStore, FixedClock> {
        ContactForm::new(ContactService::new(store, FixedClock))
    }

    fn fill_valid(form: &mut ContactForm<MockStore, FixedClock>) {
        form.set(Field::Name, "Al");
        form.set(Field::Email, "al@example.com");
        form.set(Field::Subject, "Hey");
        form.set(Field::Message, "Ten chars!");
    }

    #[tokio::test]
    async fn test_valid_submission_is_stored_and_form_cleared() {
        let store = MockStore::configured();
        let mut form = form(store.clone());
        fill_valid(&mut form);

        assert_eq!(form.submit().await, SubmitStatus::Sent);

        let rows = store.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Al");
        assert_eq!(rows[0].created_at, "2025-06-01T09:30:00.000Z");
        assert_eq!(form.values(), &ContactSubmission::default());
        assert_eq!(form.notice(), Some(&Notice::message_sent()));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_honeypot_fakes_success_without_write() {
        let store = MockStore::configured();
        let mut form = form(store.clone());
        form.set(Field::Name, "A");
        form.set(Field::Website, "http://spam.example");

        assert_eq!(form.submit().await, SubmitStatus::Sent);
        assert!(store.rows().is_empty());
        assert_eq!(form.values(), &ContactSubmission::default());
        assert_eq!(form.notice(), Some(&Notice::message_sent()));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_honeypot_skips_configuration_guard() {
        let service = ContactService::new(MockStore::default(), FixedClock);
        let submission = ContactSubmission {
            website: "x".to_string(),
            ..ContactSubmission::default()
        };
        assert_eq!(
            service.submit(&submission).await.unwrap(),
            SubmitOutcome::SpamDiscarded
        );
    }

    #[tokio::test]
    async fn test_invalid_name_annotates_only_name() {
        let store = MockStore::configured();
        let mut form = form(store.clone());
        fill_valid(&mut form);
        form.set(Field::Name, "A");

        assert_eq!(form.submit().await, SubmitStatus::Invalid);
        assert_eq!(form.errors().fields(), vec![Field::Name]);
        assert_eq!(form.values().name, "A");
        assert!(form.notice().is_none());
        assert!(store.rows().is_empty());
        assert!(!form.is_submitting());

        form.set(Field::Name, "Al");
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_store_keeps_values() {
        let store = MockStore::default();
        let mut form = form(store.clone());
        fill_valid(&mut form);

        assert_eq!(form.submit().await, SubmitStatus::Failed);
        assert!(store.rows().is_empty());
        assert_eq!(form.values().email, "al@example.com");

        let notice = form.take_notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(notice.title, "Submission failed");
        assert_eq!(notice.description, NOT_CONFIGURED_MESSAGE);
        assert!(form.notice().is_none());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_configuration_error_variant() {
        let service = ContactService::new(MockStore::default(), FixedClock);
        let submission = ContactSubmission {
            name: "Al".to_string(),
            email: "al@example.com".to_string(),
            subject: "Hey".to_string(),
            message: "Ten chars!".to_string(),
            website: String::new(),
        };
        let err = service.submit(&submission).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_remote_rejection_shows_store_message() {
        let store = MockStore {
            reject_with: Some(Some("permission denied for table contacts".to_string())),
            ..MockStore::configured()
        };
        let mut form = form(store);
        fill_valid(&mut form);

        assert_eq!(form.submit().await, SubmitStatus::Failed);
        assert_eq!(
            form.notice().map(|n| n.description.as_str()),
            Some("permission denied for table contacts")
        );
        assert_eq!(form.values().name, "Al");
    }

    #[tokio::test]
    async fn test_remote_rejection_without_message_uses_fallback() {
        let store = MockStore {
            reject_with: Some(None),
            ..MockStore::configured()
        };
        let mut form = form(store);
        fill_valid(&mut form);

        form.submit().await;
        assert_eq!(
            form.notice().map(|n| n.description.as_str()),
            Some("Please try again later.")
        );
    }

    #[tokio::test]
    async fn test_dropped_submit_unlocks_form() {
        let stalled = MockStore {
            stall: true,
            ..MockStore::configured()
        };
        let mut form = form(stalled);
        fill_valid(&mut form);

        let attempt =
            tokio::time::timeout(std::time::Duration::from_millis(20), form.submit()).await;
        assert!(attempt.is_err());
        assert!(!form.is_submitting());
        assert_eq!(form.values().name, "Al");
        assert!(form.notice().is_none());
    }
}
