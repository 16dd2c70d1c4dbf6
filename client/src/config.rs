//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the API origin is
//! baked in when the crate is compiled. Set `MOVIEHUB_API_URL` while building
//! to point the client at a non-local API.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Local storage key holding the access token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Origin of the movie-review API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base(option_env!("MOVIEHUB_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Absolute URL for an API path such as `/auth/login`.
pub fn api_url(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
