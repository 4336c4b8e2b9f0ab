//! Submission service for completed contact forms

mod client;
mod traits;

pub use client::{SimulatedSubmitter, DEFAULT_SUBMIT_DELAY};
pub use traits::{SubmissionReceipt, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
