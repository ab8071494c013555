use super::*;

#[test]
fn new_slot_is_empty_and_hidden() {
    let slot = ContentSlot::default();
    assert_eq!(slot.status(), SlotStatus::Empty);
    assert_eq!(slot.text(), "");
    assert_eq!(slot.visible_text(), None);
}

#[test]
fn loading_hides_previous_text() {
    let mut slot = ContentSlot::default();
    slot.resolve("first".to_string());
    assert_eq!(slot.visible_text(), Some("first"));

    slot.begin_loading();
    assert!(slot.is_loading());
    assert_eq!(slot.text(), "");
    assert_eq!(slot.visible_text(), None);
}

#[test]
fn fallback_is_visible() {
    let mut slot = ContentSlot::default();
    slot.begin_loading();
    slot.fall_back("fallback");
    assert_eq!(slot.status(), SlotStatus::FailedWithFallback);
    assert_eq!(slot.visible_text(), Some("fallback"));
}

#[test]
fn only_reassurance_allows_retry() {
    assert!(!SlotKind::Poem.allows_retry());
    assert!(SlotKind::Reassurance.allows_retry());
    assert_eq!(SlotKind::ALL.map(SlotKind::index), [0, 1]);
}

#[test]
fn statuses_serialize_snake_case() {
    let json = serde_json::to_string(&SlotStatus::FailedWithFallback).unwrap();
    assert_eq!(json, "\"failed_with_fallback\"");
}
