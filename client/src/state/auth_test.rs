use super::*;
use crate::util::token_store::MemoryTokenStore;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_unchecked_without_token() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(!state.checked);
    assert!(!state.is_authenticated());
}

// =============================================================
// from_store
// =============================================================

#[test]
fn from_store_with_token_is_authenticated() {
    let store = MemoryTokenStore::with_token("jwt");
    let state = AuthState::from_store(&store);
    assert_eq!(state, AuthState { token: Some("jwt".to_owned()), checked: true });
    assert!(state.is_authenticated());
}

#[test]
fn from_empty_store_is_checked_but_anonymous() {
    let state = AuthState::from_store(&MemoryTokenStore::default());
    assert!(state.checked);
    assert!(!state.is_authenticated());
}
