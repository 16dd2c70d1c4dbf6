//! Fallback page for any path the router does not know.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"404"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <a class="btn btn-login" href=routes::HOME>"Return Home"</a>
        </div>
    }
}
