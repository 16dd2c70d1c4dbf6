//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide and provided through context; `form` is instantiated
//! per page for the login and registration forms.

pub mod auth;
pub mod form;
