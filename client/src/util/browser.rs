//! Small browser affordances with deterministic SSR fallbacks.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Current calendar year for the footer.
///
/// Uses the browser clock after hydration and the host clock (UTC) while
/// rendering on the server.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Show a blocking notice. A no-op outside the browser.
pub fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
