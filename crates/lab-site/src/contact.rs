//! Contact form.
//!
//! Submissions are validated and handed to a [`ContactBackend`]. The lab has
//! no message backend, so the only implementation simulates one: it waits,
//! logs a reference number and reports success. Nothing leaves the process.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SiteError, SiteResult};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

const MAX_NAME_LEN: usize = 200;
const MAX_MESSAGE_LEN: usize = 5000;

/// Raw form fields as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Check required fields and trim everything.
    pub fn validate(&self) -> SiteResult<ContactSubmission> {
        let name = self.name.trim();
        let email = self.email.trim();
        let company = self.company.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(SiteError::validation("name", "is required"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(SiteError::validation("name", "is too long"));
        }
        if email.is_empty() {
            return Err(SiteError::validation("email", "is required"));
        }
        if !EMAIL.is_match(email) {
            return Err(SiteError::validation("email", "is not a valid address"));
        }
        if message.is_empty() {
            return Err(SiteError::validation("message", "is required"));
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(SiteError::validation("message", "is too long"));
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            message: message.to_string(),
        })
    }
}

/// A validated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

/// Acknowledgement shown in the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Where validated messages go.
#[async_trait]
pub trait ContactBackend: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> SiteResult<ContactReceipt>;
}

/// Stand-in backend that only pretends to deliver.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ContactBackend for SimulatedBackend {
    async fn submit(&self, submission: &ContactSubmission) -> SiteResult<ContactReceipt> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = ContactReceipt { reference: Uuid::new_v4(), received_at: Utc::now() };
        tracing::info!(
            reference = %receipt.reference,
            has_company = submission.company.is_some(),
            message_chars = submission.message.chars().count(),
            "Contact message accepted (simulated, not delivered)"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: " Ada ".into(),
            email: "ada@example.org".into(),
            company: String::new(),
            message: "Collaboration on fire detection?".into(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let submission = form().validate().unwrap();
        assert_eq!(submission.name, "Ada");
        assert!(submission.company.is_none());
    }

    #[test]
    fn test_missing_required_fields() {
        for field in ["name", "email", "message"] {
            let mut f = form();
            match field {
                "name" => f.name.clear(),
                "email" => f.email = "  ".into(),
                _ => f.message.clear(),
            }
            let err = f.validate().unwrap_err();
            assert!(
                matches!(err, SiteError::Validation { field: ref got, .. } if got == field),
                "wrong error for {field}: {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut f = form();
        f.email = "not-an-email".into();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_overlong_message() {
        let mut f = form();
        f.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert!(f.validate().is_err());
    }

    #[tokio::test]
    async fn test_simulated_backend_returns_receipt() {
        let backend = SimulatedBackend::new(Duration::ZERO);
        let submission = form().validate().unwrap();
        let first = backend.submit(&submission).await.unwrap();
        let second = backend.submit(&submission).await.unwrap();
        assert_ne!(first.reference, second.reference);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_backend_waits() {
        let backend = SimulatedBackend::new(Duration::from_secs(2));
        let submission = form().validate().unwrap();
        let started = tokio::time::Instant::now();
        backend.submit(&submission).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
