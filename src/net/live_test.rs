use super::*;

fn created_text(data: serde_json::Value) -> String {
    serde_json::json!({
        "event": "brt.created",
        "channel": "brts",
        "data": data,
    })
    .to_string()
}

// =============================================================
// Handle lifecycle
// =============================================================

#[test]
fn handle_starts_alive_and_disconnect_is_idempotent() {
    let handle = LiveHandle::new();
    assert!(handle.is_alive());
    handle.disconnect();
    handle.disconnect();
    assert!(!handle.is_alive());
}

#[test]
fn handle_clones_share_the_alive_flag() {
    let handle = LiveHandle::new();
    let clone = handle.clone();
    handle.disconnect();
    assert!(!clone.is_alive());
}

// =============================================================
// Subscription message
// =============================================================

#[test]
fn subscribe_message_is_pusher_shaped() {
    let msg: serde_json::Value = serde_json::from_str(&subscribe_message(CHANNEL)).unwrap();
    assert_eq!(msg["event"], "pusher:subscribe");
    assert_eq!(msg["data"]["channel"], "brts");
}

// =============================================================
// Event parsing
// =============================================================

#[test]
fn parse_created_event_with_inline_object_data() {
    let text = created_text(serde_json::json!({
        "brt_code": "BRT-1",
        "reserved_amount": 50,
        "user": { "name": "Alice" },
    }));
    let event = parse_event(&text).unwrap();
    assert_eq!(
        event,
        BrtEvent::Created {
            code: "BRT-1".to_owned(),
            amount: "50".to_owned(),
            user_name: "Alice".to_owned(),
        }
    );
}

#[test]
fn parse_created_event_with_string_encoded_data() {
    let inner = serde_json::json!({
        "brt_code": "BRT-2",
        "reserved_amount": "20.00",
        "user": { "name": "Bob" },
    })
    .to_string();
    let text = created_text(serde_json::Value::String(inner));
    let event = parse_event(&text).unwrap();
    assert_eq!(
        event,
        BrtEvent::Created {
            code: "BRT-2".to_owned(),
            amount: "20.00".to_owned(),
            user_name: "Bob".to_owned(),
        }
    );
}

#[test]
fn parse_created_event_without_user_falls_back_to_unknown() {
    let text = created_text(serde_json::json!({
        "brt_code": "BRT-3",
        "reserved_amount": "100.00",
    }));
    let BrtEvent::Created { user_name, .. } = parse_event(&text).unwrap() else {
        panic!("expected created event");
    };
    assert_eq!(user_name, "unknown");
}

#[test]
fn parse_updated_and_deleted_events() {
    let updated = serde_json::json!({
        "event": "brt.updated",
        "channel": "brts",
        "data": { "brt_code": "BRT-4" },
    })
    .to_string();
    assert_eq!(
        parse_event(&updated),
        Some(BrtEvent::Updated { code: "BRT-4".to_owned() })
    );

    let deleted = serde_json::json!({
        "event": "brt.deleted",
        "channel": "brts",
        "data": { "brt_code": "BRT-4" },
    })
    .to_string();
    assert_eq!(
        parse_event(&deleted),
        Some(BrtEvent::Deleted { code: "BRT-4".to_owned() })
    );
}

#[test]
fn parse_ignores_protocol_chatter() {
    let text = serde_json::json!({
        "event": "pusher:connection_established",
        "data": "{\"socket_id\":\"1.1\"}",
    })
    .to_string();
    assert_eq!(parse_event(&text), None);
}

#[test]
fn parse_ignores_other_channels() {
    let text = serde_json::json!({
        "event": "brt.created",
        "channel": "presence-users",
        "data": { "brt_code": "BRT-9" },
    })
    .to_string();
    assert_eq!(parse_event(&text), None);
}

#[test]
fn parse_ignores_garbage() {
    assert_eq!(parse_event("not json"), None);
    assert_eq!(parse_event("{}"), None);
}

// =============================================================
// Feed text
// =============================================================

#[test]
fn created_event_feed_text() {
    let event = BrtEvent::Created {
        code: "BRT-1".to_owned(),
        amount: "50".to_owned(),
        user_name: "Alice".to_owned(),
    };
    assert_eq!(event.title(), "New BRT Created");
    assert_eq!(event.message(), "BRT BRT-1 with 50 BLU created by Alice");
}

#[test]
fn updated_and_deleted_feed_text() {
    let updated = BrtEvent::Updated { code: "BRT-2".to_owned() };
    assert_eq!(updated.title(), "BRT Updated");
    assert_eq!(updated.message(), "BRT BRT-2 updated");

    let deleted = BrtEvent::Deleted { code: "BRT-2".to_owned() };
    assert_eq!(deleted.title(), "BRT Deleted");
    assert_eq!(deleted.message(), "BRT BRT-2 deleted");
}
