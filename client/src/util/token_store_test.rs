use super::*;

#[test]
fn non_empty_filters_blank_tokens() {
    assert_eq!(non_empty(None), None);
    assert_eq!(non_empty(Some(String::new())), None);
    assert_eq!(non_empty(Some("t".to_owned())), Some("t".to_owned()));
}

#[test]
fn memory_store_round_trips_and_clears() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load(), None);

    store.save("jwt-1");
    assert_eq!(store.load().as_deref(), Some("jwt-1"));

    store.save("jwt-2");
    assert_eq!(store.load().as_deref(), Some("jwt-2"));

    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_ignores_empty_saved_value() {
    let store = MemoryTokenStore::with_token("");
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_is_empty_outside_the_browser() {
    let store = LocalTokenStore;
    store.save("ignored");
    assert_eq!(store.load(), None);
    store.clear();
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_clear_is_quiet_outside_the_browser() {
    LocalTokenStore.save("jwt-1");
    LocalTokenStore.clear();
    assert_eq!(LocalTokenStore.load(), None);
}
