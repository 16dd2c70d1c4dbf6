//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: signed-in visitors are
//! bounced from the landing and login pages to the dashboard, anonymous
//! visitors are bounced from the dashboard to login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes;
use crate::state::auth::AuthState;
use crate::util::token_store::LocalTokenStore;

/// Re-read the stored token into `auth` when the calling page mounts.
///
/// Effects do not run during SSR, so the server always renders the unchecked
/// state and the browser fills it in after hydration.
pub fn install_session_check(auth: RwSignal<AuthState>) {
    Effect::new(move || auth.set(AuthState::from_store(&LocalTokenStore)));
}

/// `true` once the store has been read and it held no token.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.checked && !state.is_authenticated()
}

/// `true` once the store has been read and it held a token.
pub fn should_redirect_auth(state: &AuthState) -> bool {
    state.checked && state.is_authenticated()
}

/// Redirect to the login page whenever auth has been checked and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard whenever auth has been checked and a token is present.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_auth(&auth.get()) {
            #[cfg(feature = "hydrate")]
            log::debug!("stored token found; redirecting to {}", routes::DASHBOARD);
            navigate(routes::DASHBOARD, NavigateOptions::default());
        }
    });
}
