use super::*;

fn entry(id: u64) -> Notification {
    Notification {
        id,
        title: "New BRT Created".to_owned(),
        message: format!("BRT BRT-{id} with 50 BLU created by Alice"),
        timestamp: "2026-08-30T10:00:00.000Z".to_owned(),
    }
}

#[test]
fn push_prepends_newest_first() {
    let mut state = NotificationsState::default();
    state.push(entry(1));
    state.push(entry(2));
    assert_eq!(state.items[0].id, 2);
    assert_eq!(state.items[1].id, 1);
}

#[test]
fn feed_is_capped_at_max_notifications() {
    let mut state = NotificationsState::default();
    for id in 0..15 {
        state.push(entry(id));
    }
    assert_eq!(state.count(), MAX_NOTIFICATIONS);
    // Newest survive, oldest fall off.
    assert_eq!(state.items[0].id, 14);
    assert_eq!(state.items[MAX_NOTIFICATIONS - 1].id, 5);
}

#[test]
fn count_matches_items() {
    let mut state = NotificationsState::default();
    assert_eq!(state.count(), 0);
    state.push(entry(1));
    assert_eq!(state.count(), 1);
}
