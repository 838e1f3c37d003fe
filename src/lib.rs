/// Announce Relay - forwards announcement document writes into broadcast push notifications.
///
/// This crate implements a single document-triggered notification relay:
/// 1. The document store invokes the handler with a change event for the
///    configured announcements location.
/// 2. The relay validates the post-change snapshot, builds a fixed-topic
///    notification payload from its text field, and submits it once to the
///    push-delivery API.
///
/// # Architecture
///
/// The system uses:
/// - `lambda_runtime` for the serverless trigger entrypoint
/// - reqwest for the outbound FCM topic send
/// - Tokio for async runtime
/// - tracing for structured outcome logging
///
/// The delivery call and the deduplication ledger sit behind traits so the
/// relay core can be exercised against in-process fakes.
// Module declarations
pub mod core;
pub mod errors;
pub mod messaging;
pub mod relay;

/// Configure structured logging with JSON format for serverless environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// the hosting platform's log aggregation. It should be called once, before
/// the trigger handler registers.
///
/// # Example
///
/// ```
/// // Initialize structured logging before the runtime starts
/// announce_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
