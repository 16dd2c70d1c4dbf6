//! Access-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token returned by `/auth/login` is the only piece of session state the
//! client keeps. Pages read it on mount to decide whether to redirect, the
//! login flow writes it, and logout removes it.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: a missing `window` or a storage quota error
//! behaves like "no token". SSR and native builds always see an empty store so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// Where the access token lives between page loads.
pub trait TokenStore {
    /// Stored token, or `None` when absent or empty.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed store keyed by [`crate::config::TOKEN_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            non_empty(storage.get_item(crate::config::TOKEN_STORAGE_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; access token not persisted");
                return;
            };
            if storage.set_item(crate::config::TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("failed to persist access token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; access token not cleared");
                return;
            };
            if storage.remove_item(crate::config::TOKEN_STORAGE_KEY).is_err() {
                log::warn!("failed to clear access token");
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Treat an empty stored value the same as a missing one.
#[cfg(any(test, feature = "hydrate"))]
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|token| !token.is_empty())
}

/// In-memory store used by tests to observe what the flows persist.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: std::cell::RefCell::new(Some(token.to_owned())) }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        non_empty(self.token.borrow().clone())
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
