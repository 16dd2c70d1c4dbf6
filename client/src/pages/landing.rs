//! Landing page: marketing copy plus the three ways into the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors with a stored token skip this page entirely and land on the
//! dashboard. Until the browser store has been read (SSR, pre-hydration) a
//! neutral loading placeholder is shown so the buttons never flash for a
//! signed-in visitor.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::auth::AuthState;
use crate::util::auth::{install_auth_redirect, install_session_check};

/// What the landing page renders for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingView {
    /// Store not read yet.
    Loading,
    /// Token found; navigation to the dashboard is under way.
    Redirecting,
    /// Anonymous visitor; show the navigation actions.
    Welcome,
}

pub fn landing_view(state: &AuthState) -> LandingView {
    if !state.checked {
        LandingView::Loading
    } else if state.is_authenticated() {
        LandingView::Redirecting
    } else {
        LandingView::Welcome
    }
}

/// One navigation button on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
}

pub const NAV_ACTIONS: [NavAction; 3] = [
    NavAction { label: "Log In", href: routes::LOGIN, class: "btn btn-login" },
    NavAction { label: "Register", href: routes::REGISTER, class: "btn btn-register" },
    NavAction { label: "Continue as Guest", href: routes::MOVIES, class: "btn btn-guest" },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_session_check(auth);
    install_auth_redirect(auth, navigate);

    move || match landing_view(&auth.get()) {
        LandingView::Loading | LandingView::Redirecting => view! {
            <div class="loading-container">
                <h2>"Loading..."</h2>
            </div>
        }
        .into_any(),
        LandingView::Welcome => {
            let buttons = NAV_ACTIONS
                .into_iter()
                .map(|action| view! { <a class=action.class href=action.href>{action.label}</a> })
                .collect_view();
            view! {
                <div class="homepage-container">
                    <h2>"Welcome to Movie Review Hub"</h2>
                    <p>
                        "Browse popular movies, read authentic reviews, and join our community of film enthusiasts. "
                        "Sign in to access your personalized dashboard, or continue as a guest."
                    </p>
                    <div class="button-group">{buttons}</div>
                </div>
            }
            .into_any()
        }
    }
}
