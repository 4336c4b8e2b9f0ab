//! Stand-in submission service
//!
//! There is no backend yet, so this waits for a fixed delay and accepts
//! every submission.

use super::traits::{SubmissionReceipt, Submitter};
use crate::error::SubmitError;
use crate::state::FormData;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Submitter that sleeps and then accepts
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, data: &FormData) -> Result<SubmissionReceipt, SubmitError> {
        tokio::time::sleep(self.delay).await;
        let receipt = SubmissionReceipt::new();
        tracing::info!(
            id = %receipt.id,
            subject = %data.subject,
            message_chars = data.message.chars().count(),
            "contact form submitted"
        );
        Ok(receipt)
    }
}
