//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (redirect guards, submission
//! flow) and delegates markup for fields and chrome to `components`.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod movies;
pub mod not_found;
pub mod register;
