use crate::PantryItem;

use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn test_pantry_item_without_expiry_never_expires() {
    let item = PantryItem::new(Uuid::new_v4(), Uuid::new_v4());
    assert!(!item.expires_within(Utc::now(), 3));
}

#[test]
fn test_pantry_item_expires_within_window() {
    let now = Utc::now();
    let mut item = PantryItem::new(Uuid::new_v4(), Uuid::new_v4());

    item.expiry_date = Some(now + Duration::days(2));
    assert!(item.expires_within(now, 3));

    item.expiry_date = Some(now + Duration::days(5));
    assert!(!item.expires_within(now, 3));

    item.expiry_date = Some(now - Duration::days(1));
    assert!(item.expires_within(now, 3));
}
