//! Deduplication ledger for at-least-once trigger re-invocation.
//!
//! The trigger platform may invoke the relay more than once for the same
//! logical change, and a topic send is not idempotent: each call fans out a
//! fresh notification. A ledger records which document revisions have
//! already produced a send, turning at-least-once invocation into
//! exactly-once user-visible delivery.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::errors::RelayError;

#[async_trait]
pub trait NotificationLedger: Send + Sync {
    /// Whether a notification for this document revision was already sent.
    async fn already_notified(&self, revision: &str) -> Result<bool, RelayError>;

    /// Records that a notification for this document revision went out.
    async fn mark_notified(&self, revision: &str) -> Result<(), RelayError>;
}

/// Ledger that never dedupes. Matches the unhardened relay: every
/// invocation sends, platform retries included.
pub struct NoopLedger;

#[async_trait]
impl NotificationLedger for NoopLedger {
    async fn already_notified(&self, _revision: &str) -> Result<bool, RelayError> {
        Ok(false)
    }

    async fn mark_notified(&self, _revision: &str) -> Result<(), RelayError> {
        Ok(())
    }
}

/// Process-local ledger. Sufficient for a single long-lived worker; a
/// multi-instance deployment needs a store-backed implementation instead.
#[derive(Default)]
pub struct InMemoryLedger {
    seen: Mutex<HashSet<String>>,
}

impl InMemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationLedger for InMemoryLedger {
    async fn already_notified(&self, revision: &str) -> Result<bool, RelayError> {
        let seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(seen.contains(revision))
    }

    async fn mark_notified(&self, revision: &str) -> Result<(), RelayError> {
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        seen.insert(revision.to_string());
        Ok(())
    }
}
