//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::{SITE_NAME, SiteLayout};
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, movies::MoviesPage,
    not_found::NotFound, register::RegisterPage,
};
use crate::state::auth::AuthState;

pub const SITE_DESCRIPTION: &str = "Discover movies, read reviews, and share your thoughts";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context and sets up client-side routing inside
/// the site chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/moviehub.css"/>
        <Title text=SITE_NAME/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <SiteLayout>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("movies") view=MoviesPage/>
                </Routes>
            </SiteLayout>
        </Router>
    }
}
