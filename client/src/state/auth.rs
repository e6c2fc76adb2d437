//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::load_session;
use crate::net::types::LoginUser;
use crate::util::storage::KeyValueStore;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<LoginUser>,
    pub loading: bool,
}

impl AuthState {
    /// Rebuild state from a session persisted by an earlier login.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        Self { user: load_session(store).map(|s| s.user), loading: false }
    }
}
