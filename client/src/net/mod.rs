//! Networking modules for the movie-review REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the request/response schema.

pub mod api;
pub mod error;
pub mod types;
