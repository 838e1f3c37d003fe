use serde_json::json;

use announce_relay::core::models::{
    ANNOUNCEMENT_TITLE, ANNOUNCEMENT_TOPIC, FirestoreEvent, NotificationPayload,
};

#[test]
fn test_event_parses_full_trigger_shape() {
    // Representative wire shape emitted by the document store trigger,
    // including fields the relay does not read
    let event: FirestoreEvent = serde_json::from_value(json!({
        "value": {
            "name": "projects/demo/databases/(default)/documents/announcements/latest",
            "fields": {
                "text": { "stringValue": "Water outage 3pm-6pm" },
                "author": { "stringValue": "facilities" },
                "priority": { "integerValue": "2" }
            },
            "createTime": "2024-05-01T10:00:00.000000Z",
            "updateTime": "2024-05-01T12:00:00.000000Z"
        },
        "oldValue": {},
        "updateMask": { "fieldPaths": ["text"] }
    }))
    .expect("trigger event should deserialize");

    let snapshot = event.post_snapshot().expect("write should have a snapshot");
    assert_eq!(snapshot.text(), Some("Water outage 3pm-6pm"));
    assert_eq!(
        snapshot.name,
        "projects/demo/databases/(default)/documents/announcements/latest"
    );
}

#[test]
fn test_empty_value_counts_as_deletion() {
    let event: FirestoreEvent = serde_json::from_value(json!({
        "value": {},
        "oldValue": {
            "name": "projects/demo/databases/(default)/documents/announcements/latest",
            "fields": { "text": { "stringValue": "gone" } }
        }
    }))
    .unwrap();

    assert!(event.post_snapshot().is_none());
}

#[test]
fn test_absent_value_counts_as_deletion() {
    let event: FirestoreEvent = serde_json::from_value(json!({ "oldValue": {} })).unwrap();
    assert!(event.post_snapshot().is_none());
}

#[test]
fn test_empty_text_is_absent() {
    let event: FirestoreEvent = serde_json::from_value(json!({
        "value": {
            "name": "projects/demo/databases/(default)/documents/announcements/latest",
            "fields": { "text": { "stringValue": "" } }
        }
    }))
    .unwrap();

    assert_eq!(event.post_snapshot().unwrap().text(), None);
}

#[test]
fn test_revision_key_combines_name_and_update_time() {
    let event: FirestoreEvent = serde_json::from_value(json!({
        "value": {
            "name": "projects/demo/databases/(default)/documents/announcements/latest",
            "fields": { "text": { "stringValue": "hi" } },
            "updateTime": "2024-05-01T12:00:00.000000Z"
        }
    }))
    .unwrap();

    let key = event.post_snapshot().unwrap().revision_key();
    assert_eq!(
        key,
        "projects/demo/databases/(default)/documents/announcements/latest@2024-05-01T12:00:00.000000Z"
    );
}

#[test]
fn test_revision_key_falls_back_to_name() {
    let event: FirestoreEvent = serde_json::from_value(json!({
        "value": {
            "name": "projects/demo/databases/(default)/documents/announcements/latest",
            "fields": { "text": { "stringValue": "hi" } }
        }
    }))
    .unwrap();

    assert_eq!(
        event.post_snapshot().unwrap().revision_key(),
        "projects/demo/databases/(default)/documents/announcements/latest"
    );
}

#[test]
fn test_payload_uses_fixed_title_and_topic() {
    let payload = NotificationPayload::announcement("Water outage 3pm-6pm");

    assert_eq!(payload.notification.title, ANNOUNCEMENT_TITLE);
    assert_eq!(payload.notification.body, "Water outage 3pm-6pm");
    assert_eq!(payload.topic, ANNOUNCEMENT_TOPIC);
}

#[test]
fn test_payload_serializes_to_documented_shape() {
    let payload = NotificationPayload::announcement("Water outage 3pm-6pm");

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "notification": {
                "title": "📢 New Announcement",
                "body": "Water outage 3pm-6pm"
            },
            "topic": "announcements"
        })
    );
}
