//! Registration page: creates an account, then sends the user to log in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::field::{FormError, TextField};
use crate::net::error::ApiError;
use crate::net::types::{RegisterForm, RegisteredUser, Role};
use crate::routes;
use crate::state::form::{FormStatus, SubmitOutcome};

pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTERED_NOTICE: &str = "Registration successful! Please log in.";

/// Pick the next step after `/auth/register` answers. There is no auto-login.
pub fn finish_registration(result: Result<RegisteredUser, ApiError>) -> SubmitOutcome {
    match result {
        Ok(_) => SubmitOutcome::Navigate(routes::LOGIN),
        Err(err) => SubmitOutcome::Failed(err.user_message(REGISTRATION_FAILED)),
    }
}

pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Registering..." } else { "Register" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        status.update(|s| started = s.begin());
        if !started {
            return;
        }
        let form = RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(&form).await;
                match &result {
                    Ok(user) => log::debug!("registered {:?} as {}", user.username, form.role),
                    Err(e) => log::warn!("registration failed: {e}"),
                }
                let mut next = None;
                status.update(|s| next = s.finish(finish_registration(result)));
                if let Some(path) = next {
                    crate::util::browser::notify(REGISTERED_NOTICE);
                    navigate(path, leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    let on_role_change = move |ev: leptos::ev::Event| {
        if let Some(selected) = Role::from_value(&event_target_value(&ev)) {
            role.set(selected);
        }
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
        .collect_view();

    view! {
        <div class="register-container">
            <h2>"Create an Account"</h2>

            <form class="register-form" on:submit=on_submit>
                <FormError message=Signal::derive(move || status.get().error)/>
                <TextField label="Username:" name="username" input_type="text" value=username/>
                <TextField label="Email:" name="email" input_type="email" value=email/>
                <TextField label="Password:" name="password" input_type="password" value=password/>
                <label>
                    "Role:"
                    <select name="role" prop:value=move || role.get().as_str() on:change=on_role_change>
                        {role_options}
                    </select>
                </label>
                <button type="submit" disabled=move || status.get().loading>
                    {move || submit_label(status.get().loading)}
                </button>
            </form>

            <p class="redirect">
                "Already have an account? " <a href=routes::LOGIN>"Log In"</a>
            </p>
        </div>
    }
}
