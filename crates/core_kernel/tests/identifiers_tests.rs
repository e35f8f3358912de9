//! Tests for the customer identifier type

use core_kernel::CustomerId;
use proptest::prelude::*;
use uuid::Uuid;

#[test]
fn test_new_generates_unique_ids() {
    let id1 = CustomerId::new();
    let id2 = CustomerId::new();
    assert_ne!(id1, id2);
}

#[test]
fn test_new_v7_generates_time_ordered_ids() {
    let id1 = CustomerId::new_v7();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let id2 = CustomerId::new_v7();
    let uuid1: Uuid = id1.into();
    let uuid2: Uuid = id2.into();
    assert!(uuid1 < uuid2);
}

#[test]
fn test_prefix_and_display() {
    assert_eq!(CustomerId::prefix(), "CUS");
    let id = CustomerId::new();
    assert!(id.to_string().starts_with("CUS-"));
}

#[test]
fn test_from_str_without_prefix() {
    let uuid = Uuid::new_v4();
    let parsed: CustomerId = uuid.to_string().parse().unwrap();
    assert_eq!(*parsed.as_uuid(), uuid);
}

#[test]
fn test_from_str_rejects_garbage() {
    let result: Result<CustomerId, _> = "CUS-not-a-uuid".parse();
    assert!(result.is_err());
}

#[test]
fn test_serde_is_transparent() {
    let uuid = Uuid::new_v4();
    let id = CustomerId::from_uuid(uuid);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", uuid));
}

proptest! {
    #[test]
    fn prop_display_parse_preserves_uuid(bytes in any::<[u8; 16]>()) {
        let id = CustomerId::from_uuid(Uuid::from_bytes(bytes));
        let parsed: CustomerId = id.to_string().parse().unwrap();
        prop_assert_eq!(id, parsed);
    }
}
