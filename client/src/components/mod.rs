//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the form controls shared by the
//! auth pages. They hold no state of their own beyond the signals passed in.

pub mod field;
pub mod layout;
