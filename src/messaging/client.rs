//! Push-delivery API client module
//!
//! Encapsulates the single-message topic send against the FCM HTTP v1 API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::models::NotificationPayload;
use crate::errors::RelayError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Abstraction over the push-delivery send operation so the relay core can
/// be exercised against a recorder in tests.
#[async_trait]
pub trait PushDelivery: Send + Sync {
    /// Submits one payload to its broadcast topic. Returns the delivery
    /// service's message identifier on acceptance.
    async fn send(&self, payload: &NotificationPayload) -> Result<String, RelayError>;
}

/// Build the JSON body for a `messages:send` call.
#[must_use]
pub fn build_send_request(payload: &NotificationPayload) -> Value {
    json!({ "message": payload })
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    name: Option<String>,
    error: Option<SendErrorBody>,
}

#[derive(Debug, Deserialize)]
struct SendErrorBody {
    message: Option<String>,
}

/// FCM HTTP v1 client, addressing sends by topic rather than device token.
pub struct FcmClient {
    endpoint: String,
    access_token: String,
}

impl FcmClient {
    pub fn new(project_id: &str, access_token: &str) -> Self {
        Self {
            endpoint: format!(
                "https://fcm.googleapis.com/v1/projects/{}/messages:send",
                project_id
            ),
            access_token: access_token.to_string(),
        }
    }
}

#[async_trait]
impl PushDelivery for FcmClient {
    async fn send(&self, payload: &NotificationPayload) -> Result<String, RelayError> {
        let resp = HTTP_CLIENT
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&build_send_request(payload))
            .send()
            .await?;

        let status = resp.status();
        let parsed: SendResponse = resp.json().await?;

        if !status.is_success() {
            let detail = parsed
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(RelayError::DeliveryError(detail));
        }

        // Success responses carry name = projects/{project}/messages/{id}
        parsed.name.ok_or_else(|| {
            RelayError::DeliveryError("send response missing message name".to_string())
        })
    }
}
