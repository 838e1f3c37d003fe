#![allow(clippy::missing_errors_doc)]
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::ledger::{NoopLedger, NotificationLedger};
use crate::core::config::AppConfig;
use crate::core::models::{FirestoreEvent, NotificationPayload, RelayOutcome, SkipReason};
use crate::errors::RelayError;
use crate::messaging::{FcmClient, PushDelivery};

/// Handler for the relay entrypoint. Parses the document change event,
/// validates it, and forwards at most one broadcast notification.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<(), Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!("Relay received document change event: {:?}", event.payload);

    let change: FirestoreEvent =
        serde_json::from_value(event.payload).map_err(RelayError::from)?;

    let delivery = FcmClient::new(&config.project_id, &config.fcm_access_token);
    relay_change(&change, &delivery, &NoopLedger).await?;

    Ok(())
}

/// Relay core, separated from the runtime envelope so tests can drive it
/// with in-process fakes.
///
/// Completes `Ok` for every validated outcome, including a failed send: the
/// source document write already committed before this ran, so surfacing
/// delivery failure as a handler fault would be misleading. Only ledger
/// faults propagate, letting the platform re-invoke.
pub async fn relay_change(
    change: &FirestoreEvent,
    delivery: &dyn PushDelivery,
    ledger: &dyn NotificationLedger,
) -> Result<RelayOutcome, RelayError> {
    let Some(snapshot) = change.post_snapshot() else {
        info!("Document deleted, nothing to announce");
        return Ok(RelayOutcome::Skipped(SkipReason::Deleted));
    };

    let Some(text) = snapshot.text() else {
        info!(
            "Document {} has no announcement text, skipping",
            snapshot.name
        );
        return Ok(RelayOutcome::Skipped(SkipReason::MissingText));
    };

    let revision = snapshot.revision_key();
    if ledger.already_notified(&revision).await? {
        info!(
            "Revision {} already notified, skipping duplicate delivery",
            revision
        );
        return Ok(RelayOutcome::Skipped(SkipReason::AlreadyNotified));
    }

    let payload = NotificationPayload::announcement(text);
    match delivery.send(&payload).await {
        Ok(message_id) => {
            info!("notification sent: {}", message_id);
            if let Err(e) = ledger.mark_notified(&revision).await {
                // The send went out; a missing marker only risks a duplicate
                // on re-invocation, so don't fail the invocation over it.
                warn!("Failed to record notified marker for {}: {}", revision, e);
            }
            Ok(RelayOutcome::Delivered(message_id))
        }
        Err(e) => {
            error!("notification send failed: {}", e);
            Ok(RelayOutcome::DeliveryFailed(e.to_string()))
        }
    }
}

pub use self::function_handler as handler;
