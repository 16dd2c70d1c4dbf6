//! Wire DTOs for the movie-review REST API.
//!
//! DESIGN
//! ======
//! Request types mirror the form fields one-to-one so serde produces exactly
//! the payloads the auth service expects. Response types are lenient: every
//! field the UI does not strictly need is optional or defaulted, so schema
//! drift on the server side degrades display instead of failing decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH REQUESTS
// =============================================================================

/// Login form contents, sent as `application/x-www-form-urlencoded`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Encode as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

/// Account role offered on the registration form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Critic,
    Moderator,
    Administrator,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Member, Role::Critic, Role::Moderator, Role::Administrator];

    /// Wire value, also used as the `<option value>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Critic => "critic",
            Self::Moderator => "moderator",
            Self::Administrator => "administrator",
        }
    }

    /// Human label for the `<select>` option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Critic => "Critic",
            Self::Moderator => "Moderator",
            Self::Administrator => "Administrator",
        }
    }

    /// Parse a `<select>` value. Unknown values yield `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration form contents, sent as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

// =============================================================================
// AUTH RESPONSES
// =============================================================================

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Successful `POST /auth/register` response. Only the status matters to the
/// registration flow; fields are kept for logging.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub penalties: Vec<serde_json::Value>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// `detail` is a plain message for handled errors and a list of field
/// problems for request validation failures.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
    Other(serde_json::Value),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ValidationIssue {
    pub msg: String,
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
}

impl ErrorDetail {
    /// Collapse the detail to a single displayable line, or `None` if it
    /// carries nothing worth showing.
    pub fn message(&self) -> Option<String> {
        let text = match self {
            Self::Message(text) => text.clone(),
            Self::Validation(issues) => issues
                .iter()
                .map(|issue| issue.msg.as_str())
                .filter(|msg| !msg.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
            Self::Other(_) => String::new(),
        };
        (!text.is_empty()).then_some(text)
    }
}

// =============================================================================
// MOVIES
// =============================================================================

/// `GET /movies/` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MovieList {
    #[serde(default)]
    pub movies: Vec<Movie>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Movie {
    pub id: String,
    pub metadata: MovieMetadata,
}

/// Subset of the catalogue metadata shown on the guest list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieMetadata {
    pub title: String,
    #[serde(default, rename = "movieIMDbRating")]
    pub imdb_rating: Option<f64>,
    #[serde(default)]
    pub movie_genres: Vec<String>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
