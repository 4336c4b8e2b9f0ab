//! Trait abstraction for the submission service to enable mocking in tests

use crate::error::SubmitError;
use crate::state::FormData;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivers sanitized form data somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit the form; the data has already been sanitized and validated
    async fn submit(&self, data: &FormData) -> Result<SubmissionReceipt, SubmitError>;
}
