//! Site chrome shared by every page: header, main content area, footer.

use leptos::prelude::*;

use crate::util::browser::current_year;

pub const SITE_NAME: &str = "Movie Review Hub";

/// Header, `<main>` wrapper and footer around the routed page.
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="main-content">{children()}</main>
        <SiteFooter/>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🎬 " {SITE_NAME}</h1>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">{footer_text(current_year())}</footer>
    }
}

pub(crate) fn footer_text(year: i32) -> String {
    format!("© {year} {SITE_NAME}")
}
