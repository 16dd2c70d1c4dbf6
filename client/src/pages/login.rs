//! Login page: username + password exchanged for an access token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts the credentials form-encoded to `/auth/login`, stores the returned
//! token under `access_token` and moves on to the dashboard. Visitors who
//! already hold a token are redirected straight there.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field::{FormError, TextField};
use crate::net::error::ApiError;
use crate::net::types::{LoginForm, TokenResponse};
use crate::routes;
use crate::state::auth::AuthState;
use crate::state::form::{FormStatus, SubmitOutcome};
use crate::util::auth::{install_auth_redirect, install_session_check};
use crate::util::token_store::TokenStore;

/// Shown when the server rejects the login without a `detail`.
pub const LOGIN_FAILED: &str = "Login failed";

/// Persist the token on success and pick the next step.
pub fn finish_login(store: &impl TokenStore, result: Result<TokenResponse, ApiError>) -> SubmitOutcome {
    match result {
        Ok(token) => {
            store.save(&token.access_token);
            SubmitOutcome::Navigate(routes::DASHBOARD)
        }
        Err(err) => SubmitOutcome::Failed(err.user_message(LOGIN_FAILED)),
    }
}

pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Logging in..." } else { "Log In" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_session_check(auth);
    install_auth_redirect(auth, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        status.update(|s| started = s.begin());
        if !started {
            return;
        }
        let form = LoginForm { username: username.get_untracked(), password: password.get_untracked() };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&form).await;
                if let Err(e) = &result {
                    log::warn!("login for {:?} failed: {e}", form.username);
                }
                let outcome = finish_login(&crate::util::token_store::LocalTokenStore, result);
                let mut next = None;
                status.update(|s| next = s.finish(outcome));
                if let Some(path) = next {
                    navigate(path, leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    view! {
        <div class="login-container">
            <h2>"Log In"</h2>

            <form class="login-form" on:submit=on_submit>
                <FormError message=Signal::derive(move || status.get().error)/>
                <TextField label="Username:" name="username" input_type="text" value=username/>
                <TextField label="Password:" name="password" input_type="password" value=password/>
                <button type="submit" disabled=move || status.get().loading>
                    {move || submit_label(status.get().loading)}
                </button>
            </form>

            <p class="redirect">
                "Don't have an account? " <a href=routes::REGISTER>"Register"</a>
            </p>
        </div>
    }
}
