//! Built-in basket commands dispatched end to end.

use serde_json::json;
use storefront::{HandlerError, ProductId};

use crate::support::service;

#[test]
fn add_then_summary() {
    let service = service();

    let added = service
        .dispatch("basket.add", json!({ "product_id": 1, "qty": 2 }), None)
        .unwrap();
    assert_eq!(added.body, json!({ "qty": 2 }));
    assert!(added.persisted);

    let key = added.session_key.as_str();
    service
        .dispatch("basket.add", json!({ "product_id": 2, "qty": 4 }), Some(key))
        .unwrap();

    let summary = service
        .dispatch("basket.summary", json!({}), Some(key))
        .unwrap();
    assert_eq!(summary.body["qty"], 6);
    assert_eq!(summary.body["subtotal"], "254.00");
    assert!(!summary.persisted);

    let items = summary.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let rust = items.iter().find(|i| i["product_id"] == 2).unwrap();
    assert_eq!(rust["title"], "rust in action");
    assert_eq!(rust["price"], "3.50");
    assert_eq!(rust["total_price"], "14.00");
}

#[test]
fn re_add_sets_quantity() {
    let service = service();
    let first = service
        .dispatch("basket.add", json!({ "product_id": 2, "qty": 2 }), None)
        .unwrap();
    let again = service
        .dispatch(
            "basket.add",
            json!({ "product_id": 2, "qty": 5 }),
            Some(&first.session_key),
        )
        .unwrap();
    assert_eq!(again.body, json!({ "qty": 5 }));
    assert!(again.persisted);
}

#[test]
fn update_and_delete_report_subtotal() {
    let service = service();
    let key = service
        .dispatch("basket.add", json!({ "product_id": 2, "qty": 1 }), None)
        .unwrap()
        .session_key;
    service
        .dispatch("basket.add", json!({ "product_id": 1, "qty": 1 }), Some(&key))
        .unwrap();

    let updated = service
        .dispatch("basket.update", json!({ "product_id": 2, "qty": 3 }), Some(&key))
        .unwrap();
    assert_eq!(updated.body, json!({ "qty": 4, "subtotal": "130.50" }));

    let deleted = service
        .dispatch("basket.delete", json!({ "product_id": 1 }), Some(&key))
        .unwrap();
    assert_eq!(deleted.body, json!({ "qty": 3, "subtotal": "10.50" }));
}

#[test]
fn delete_of_absent_line_does_not_persist() {
    let service = service();
    let key = service
        .dispatch("basket.add", json!({ "product_id": 2, "qty": 1 }), None)
        .unwrap()
        .session_key;

    let deleted = service
        .dispatch("basket.delete", json!({ "product_id": 99 }), Some(&key))
        .unwrap();
    assert!(!deleted.persisted);

    let updated = service
        .dispatch("basket.update", json!({ "product_id": 99, "qty": 2 }), Some(&key))
        .unwrap();
    assert!(updated.persisted);
}

#[test]
fn unknown_or_inactive_product_is_not_found() {
    let service = service();
    let missing = service.dispatch("basket.add", json!({ "product_id": 99, "qty": 1 }), None);
    assert!(matches!(missing, Err(HandlerError::NotFound(_))));

    let inactive = service.dispatch("basket.add", json!({ "product_id": 3, "qty": 1 }), None);
    assert!(matches!(inactive, Err(HandlerError::NotFound(_))));
}

#[test]
fn guards_reject_bad_quantities() {
    let service = service();
    for input in [
        json!({ "product_id": 1, "qty": 0 }),
        json!({ "product_id": 1, "qty": -2 }),
        json!({ "product_id": 1, "qty": "two" }),
        json!({ "product_id": 1 }),
    ] {
        let result = service.dispatch("basket.add", input, None);
        assert!(matches!(result, Err(HandlerError::GuardRejected(_))));
    }
}

#[test]
fn orphaned_lines_are_flagged_in_summary() {
    let service = service();
    let key = service
        .dispatch("basket.add", json!({ "product_id": 1, "qty": 1 }), None)
        .unwrap()
        .session_key;
    service.catalog().remove_product(ProductId::new(1)).unwrap();

    let summary = service
        .dispatch("basket.summary", json!({}), Some(&key))
        .unwrap();
    let item = &summary.body["items"][0];
    assert_eq!(item["orphaned"], true);
    assert!(item.get("title").is_none());
    assert_eq!(summary.body["subtotal"], "120.00");
}
