//! Signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Target of the landing and login redirects. Presence of a stored token is
//! all it checks; visitors without one are sent to `/login`. Logging out drops
//! the token locally and tells the API, which keeps no session of its own.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::auth::AuthState;
use crate::util::auth::{install_session_check, install_unauth_redirect};
use crate::util::token_store::TokenStore;

/// Where a finished logout sends the browser.
pub const LOGOUT_DESTINATION: &str = routes::HOME;

/// Drop the stored token and hand it back for the `/auth/logout` call.
///
/// The store is empty before any request goes out.
pub fn begin_logout(store: &impl TokenStore) -> Option<String> {
    let token = store.load();
    store.clear();
    token
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_session_check(auth);
    install_unauth_redirect(auth, navigate);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let token = begin_logout(&crate::util::token_store::LocalTokenStore);
            leptos::task::spawn_local(async move {
                if let Some(token) = token {
                    crate::net::api::logout(&token).await;
                }
                if let Some(window) = web_sys::window() {
                    if window.location().set_href(LOGOUT_DESTINATION).is_err() {
                        log::warn!("failed to navigate after logout");
                    }
                }
            });
        }
    };

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="loading-container">
                        <h2>{move || if auth.get().checked { "Redirecting to login..." } else { "Loading..." }}</h2>
                    </div>
                }
            }
        >
            <div class="dashboard-container">
                <h2>"Your Dashboard"</h2>
                <p>"You are signed in. Browse the catalogue or sign out below."</p>
                <div class="button-group">
                    <a class="btn btn-guest" href=routes::MOVIES>"Browse Movies"</a>
                    <button class="btn btn-login" on:click=on_logout>"Log Out"</button>
                </div>
            </div>
        </Show>
    }
}
