//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the signed-in user for route guards, `login_form` holds the
//! login page's transient form state, and `session` persists the session
//! that links the two.

pub mod auth;
pub mod login_form;
pub mod session;
