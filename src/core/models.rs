//! Wire types for the document change event and the outbound notification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Title shown on every announcement push.
pub const ANNOUNCEMENT_TITLE: &str = "📢 New Announcement";

/// Broadcast topic all subscribed devices listen on.
pub const ANNOUNCEMENT_TOPIC: &str = "announcements";

/// Document field carrying the announcement body.
pub const TEXT_FIELD: &str = "text";

/// Change event delivered by the document store trigger. `value` is the
/// post-change snapshot; it is absent (or empty) when the change was a
/// deletion. `old_value` is carried for deduplication-aware callers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreEvent {
    pub value: Option<FirestoreDocument>,
    pub old_value: Option<FirestoreDocument>,
}

impl FirestoreEvent {
    /// Post-change snapshot, or `None` when the change was a deletion.
    ///
    /// The trigger wire format encodes a deletion as an empty `value`
    /// object rather than omitting the key, so both shapes count as absent.
    pub fn post_snapshot(&self) -> Option<&FirestoreDocument> {
        self.value.as_ref().filter(|doc| !doc.is_blank())
    }
}

/// One document snapshot as the trigger serializes it: a full resource
/// name plus a map of typed field wrappers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirestoreDocument {
    pub name: String,
    pub fields: BTreeMap<String, FirestoreValue>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

impl FirestoreDocument {
    fn is_blank(&self) -> bool {
        self.name.is_empty() && self.fields.is_empty()
    }

    /// The announcement body, if present and non-empty. Non-string values
    /// count as absent.
    pub fn text(&self) -> Option<&str> {
        self.fields
            .get(TEXT_FIELD)
            .and_then(|value| value.string_value.as_deref())
            .filter(|text| !text.is_empty())
    }

    /// Identity of this document revision, used to key "already notified"
    /// markers. The store bumps `update_time` on every overwrite, so the
    /// pair (name, update time) distinguishes logical changes while staying
    /// stable across redundant re-invocations for the same change.
    pub fn revision_key(&self) -> String {
        match self.update_time.as_deref() {
            Some(ts) => format!("{}@{}", self.name, ts),
            None => self.name.clone(),
        }
    }
}

/// Typed field wrapper from the document store wire format. Only string
/// fields matter to the relay; other variants deserialize with
/// `string_value` unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreValue {
    pub string_value: Option<String>,
}

/// Notification contents shown on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// One broadcast push, addressed to the fixed topic. Constructed fresh per
/// event and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub notification: Notification,
    pub topic: String,
}

impl NotificationPayload {
    /// Builds the payload for one announcement body.
    pub fn announcement(body: &str) -> Self {
        Self {
            notification: Notification {
                title: ANNOUNCEMENT_TITLE.to_string(),
                body: body.to_string(),
            },
            topic: ANNOUNCEMENT_TOPIC.to_string(),
        }
    }
}

/// Why an invocation completed without a delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No post-change snapshot: the change was a deletion.
    Deleted,
    /// The text field was missing, empty, or not a string.
    MissingText,
    /// The ledger already holds a marker for this document revision.
    AlreadyNotified,
}

/// Result of one relay invocation. Logged, not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Validation short-circuited; no send was attempted.
    Skipped(SkipReason),
    /// The delivery service accepted the send and returned this identifier.
    Delivered(String),
    /// The send call rejected; the detail was logged and the invocation
    /// still completed.
    DeliveryFailed(String),
}
