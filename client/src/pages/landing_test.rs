use super::*;
use crate::util::token_store::MemoryTokenStore;

#[test]
fn stored_token_redirects_without_rendering_actions() {
    let state = AuthState::from_store(&MemoryTokenStore::with_token("jwt"));
    assert_eq!(landing_view(&state), LandingView::Redirecting);
    assert!(crate::util::auth::should_redirect_auth(&state));
}

#[test]
fn missing_token_shows_welcome_without_redirect() {
    let state = AuthState::from_store(&MemoryTokenStore::default());
    assert_eq!(landing_view(&state), LandingView::Welcome);
    assert!(!crate::util::auth::should_redirect_auth(&state));
}

#[test]
fn unchecked_state_shows_loading() {
    assert_eq!(landing_view(&AuthState::default()), LandingView::Loading);
}

#[test]
fn exactly_three_actions_for_login_register_and_guest() {
    assert_eq!(NAV_ACTIONS.len(), 3);
    let targets: Vec<_> = NAV_ACTIONS.iter().map(|a| a.href).collect();
    assert_eq!(targets, [routes::LOGIN, routes::REGISTER, routes::MOVIES]);
    let labels: Vec<_> = NAV_ACTIONS.iter().map(|a| a.label).collect();
    assert_eq!(labels, ["Log In", "Register", "Continue as Guest"]);
}
