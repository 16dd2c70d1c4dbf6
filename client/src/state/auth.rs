//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards to coordinate login/dashboard redirects. Presence of a
//! stored token is taken to mean "signed in"; the token is never validated
//! against the server.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::token_store::TokenStore;

/// Authentication state derived from the stored access token.
///
/// `checked` stays `false` until the browser store has been read, which only
/// happens after hydration. Server renders therefore always see an unchecked
/// state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub checked: bool,
}

impl AuthState {
    /// Snapshot the given store.
    pub fn from_store(store: &impl TokenStore) -> Self {
        Self { token: store.load(), checked: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
