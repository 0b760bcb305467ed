use super::*;
use crate::net::types::{NewProduct, ProductListEnvelope};

// =============================================================
// Helpers
// =============================================================

fn product(id: &str, name: &str, price: i64) -> Product {
    Product { id: id.to_owned(), name: name.to_owned(), explanation: format!("{name} details"), price }
}

fn loaded(items: &[Product]) -> ProductsState {
    let mut state = ProductsState::default();
    state.replace_all(items.to_vec());
    state
}

// =============================================================
// Initial load
// =============================================================

#[test]
fn default_state_is_empty() {
    let state = ProductsState::default();
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
}

#[test]
fn row_count_matches_list_response_length() {
    let envelope: ProductListEnvelope = serde_json::from_str(
        r#"{"products":[
            {"id":"1","name":"A","explanation":"","price":10},
            {"id":"2","name":"B","explanation":"","price":20},
            {"id":"3","name":"C","explanation":"","price":30}
        ]}"#,
    )
    .unwrap();
    let mut state = ProductsState::default();
    state.replace_all(envelope.products);
    assert_eq!(state.len(), 3);
}

#[test]
fn replace_all_discards_previous_items() {
    let mut state = loaded(&[product("1", "A", 1), product("2", "B", 2)]);
    state.replace_all(vec![product("9", "Z", 9)]);
    assert_eq!(state.items, vec![product("9", "Z", 9)]);
}

// =============================================================
// Create
// =============================================================

#[test]
fn created_product_appends_exactly_one_row_with_server_id() {
    let mut state = loaded(&[product("1", "A", 1)]);
    let draft = NewProduct { name: "Lamp".to_owned(), explanation: "LED".to_owned(), price: 45 };
    state.apply_created(Product::with_id("srv-42", draft));

    assert_eq!(state.len(), 2);
    let last = state.items.last().unwrap();
    assert_eq!(last.id, "srv-42");
    assert_eq!(last.name, "Lamp");
    assert_eq!(last.explanation, "LED");
    assert_eq!(last.price, 45);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_removes_only_matching_row() {
    let mut state = loaded(&[product("1", "A", 1), product("2", "B", 2), product("3", "C", 3)]);
    assert!(state.apply_deleted("2"));
    assert_eq!(state.items, vec![product("1", "A", 1), product("3", "C", 3)]);
}

#[test]
fn delete_unknown_id_leaves_list_unchanged() {
    let mut state = loaded(&[product("1", "A", 1)]);
    assert!(!state.apply_deleted("missing"));
    assert_eq!(state.items, vec![product("1", "A", 1)]);
}

#[test]
fn delete_compares_whole_id_not_prefix() {
    let mut state = loaded(&[product("1", "A", 1), product("10", "B", 2)]);
    assert!(state.apply_deleted("1"));
    assert_eq!(state.items, vec![product("10", "B", 2)]);
}

// =============================================================
// Update
// =============================================================

#[test]
fn update_replaces_only_matching_row() {
    let mut state = loaded(&[product("1", "A", 1), product("2", "B", 2)]);
    let edited = Product { id: "2".to_owned(), name: "B2".to_owned(), explanation: "new".to_owned(), price: 99 };
    assert!(state.apply_updated(edited.clone()));
    assert_eq!(state.items, vec![product("1", "A", 1), edited]);
}

#[test]
fn update_keeps_row_position() {
    let mut state = loaded(&[product("1", "A", 1), product("2", "B", 2), product("3", "C", 3)]);
    state.apply_updated(product("2", "Middle", 5));
    let ids: Vec<_> = state.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(state.items[1].name, "Middle");
}

#[test]
fn update_unknown_id_leaves_list_unchanged() {
    let original = [product("1", "A", 1)];
    let mut state = loaded(&original);
    assert!(!state.apply_updated(product("7", "Ghost", 0)));
    assert_eq!(state.items, original.to_vec());
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_returns_product_by_id() {
    let state = loaded(&[product("1", "A", 1), product("2", "B", 2)]);
    assert_eq!(state.find("2").map(|p| p.name.as_str()), Some("B"));
    assert!(state.find("3").is_none());
}

// =============================================================
// Request outcomes
// =============================================================

#[test]
fn failed_create_leaves_list_unchanged() {
    let mut state = loaded(&[product("1", "A", 1)]);
    assert!(!state.apply_create_result(Err("create request failed: 500".to_owned())));
    assert_eq!(state.items, vec![product("1", "A", 1)]);
}

#[test]
fn successful_create_result_appends_row() {
    let mut state = loaded(&[product("1", "A", 1)]);
    assert!(state.apply_create_result(Ok(product("srv-2", "B", 2))));
    assert_eq!(state.items, vec![product("1", "A", 1), product("srv-2", "B", 2)]);
}

#[test]
fn failed_delete_of_existing_id_leaves_list_unchanged() {
    let original = [product("1", "A", 1), product("2", "B", 2)];
    let mut state = loaded(&original);
    assert!(!state.apply_delete_result("1", Err("delete request failed: 500".to_owned())));
    assert_eq!(state.items, original.to_vec());
}

#[test]
fn successful_delete_result_removes_only_that_row() {
    let mut state = loaded(&[product("1", "A", 1), product("2", "B", 2)]);
    assert!(state.apply_delete_result("1", Ok(())));
    assert_eq!(state.items, vec![product("2", "B", 2)]);
}

#[test]
fn failed_update_of_existing_id_leaves_list_unchanged() {
    let original = [product("1", "A", 1), product("2", "B", 2)];
    let mut state = loaded(&original);
    let edited = product("2", "Renamed", 50);
    assert!(!state.apply_update_result(edited, Err("update request failed: 404".to_owned())));
    assert_eq!(state.items, original.to_vec());
}

#[test]
fn successful_update_result_replaces_matching_row() {
    let mut state = loaded(&[product("1", "A", 1), product("2", "B", 2)]);
    let edited = product("2", "Renamed", 50);
    assert!(state.apply_update_result(edited.clone(), Ok(())));
    assert_eq!(state.items, vec![product("1", "A", 1), edited]);
}
