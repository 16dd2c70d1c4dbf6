//! REST helpers for the movie-review API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls fail with [`ApiError::Network`]
//! since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; status interpretation and
//! body decoding live in [`interpret_response`] so they stay testable without
//! a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::MovieList;
use super::types::{LoginForm, Movie, RegisterForm, RegisteredUser, TokenResponse};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const MOVIES_PATH: &str = "/movies/";

#[cfg(feature = "hydrate")]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Map a raw HTTP status + body to the typed success value or an [`ApiError`].
///
/// Non-2xx statuses become [`ApiError::Rejected`]. A 2xx body that does not
/// decode as `T` is reported as [`ApiError::Network`], matching how a broken
/// response is surfaced to the user.
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::rejected(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Network(format!("invalid response body: {e}")))
}

/// Like [`interpret_response`], for a body that may have failed to arrive.
///
/// A body read failure is a transport failure whatever the status said.
pub fn interpret_read<T: DeserializeOwned>(status: u16, body: Result<String, ApiError>) -> Result<T, ApiError> {
    interpret_response(status, &body?)
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    interpret_read(resp.status(), resp.text().await.map_err(transport))
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Exchange credentials for an access token via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for a non-2xx answer and
/// [`ApiError::Network`] when the request or decode fails.
pub async fn login(form: &LoginForm) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::api_url(LOGIN_PATH))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(form.to_form_body())
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for a non-2xx answer (for example a taken
/// username) and [`ApiError::Network`] when the request or decode fails.
pub async fn register(form: &RegisterForm) -> Result<RegisteredUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::api_url(REGISTER_PATH))
            .json(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Tell the API the session is over via `POST /auth/logout`.
///
/// The server keeps no session state, so the outcome is only logged.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&crate::config::api_url(LOGOUT_PATH))
            .header("Authorization", &bearer(token))
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Fetch the public movie catalogue via `GET /movies/`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the body is not a movie list.
pub async fn fetch_movies() -> Result<Vec<Movie>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&crate::config::api_url(MOVIES_PATH))
            .send()
            .await
            .map_err(transport)?;
        let list: MovieList = read_response(resp).await?;
        Ok(list.movies)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
