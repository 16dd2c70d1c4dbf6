use super::*;
use crate::util::token_store::MemoryTokenStore;

#[test]
fn logout_returns_token_and_empties_store() {
    let store = MemoryTokenStore::with_token("jwt-123");
    assert_eq!(begin_logout(&store).as_deref(), Some("jwt-123"));
    assert_eq!(store.load(), None);
}

#[test]
fn logout_without_token_leaves_store_empty() {
    let store = MemoryTokenStore::default();
    assert_eq!(begin_logout(&store), None);
    assert_eq!(store.load(), None);
}

#[test]
fn second_logout_has_nothing_to_send() {
    let store = MemoryTokenStore::with_token("jwt-123");
    begin_logout(&store);
    assert_eq!(begin_logout(&store), None);
}

#[test]
fn logout_returns_to_landing_page() {
    assert_eq!(LOGOUT_DESTINATION, "/");
}
