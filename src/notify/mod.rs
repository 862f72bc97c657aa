//! Notification sink for the end-of-run drop report.
//!
//! The sink is a single-method capability so the sweep runner never depends
//! on a concrete transport; tests substitute an in-memory fake.

mod smtp;

use async_trait::async_trait;
pub use smtp::SmtpNotifier;
use thiserror::Error;

/// Errors from building or delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build mail message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivery sink for the drop report.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one report body. Invoked at most once per run, and only when
    /// at least one partition was dropped. A delivery failure does not undo
    /// or re-attempt anything.
    async fn notify(&self, body: &str) -> Result<(), NotifyError>;
}
