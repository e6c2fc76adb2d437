//! Session persistence in client storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! After a successful login the token and the backend user object are written
//! together; other parts of the app read them back. The winning API base is
//! remembered too, unless configuration pins the base.
//!
//! Keys:
//! - `api_base`: last base that accepted a login
//! - `token`: bearer token
//! - `user`: backend user object as compact JSON

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::ApiBaseSource;
use crate::net::auth::Session;
use crate::net::error::AuthError;
use crate::net::types::LoginUser;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const API_BASE_KEY: &str = "api_base";
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Write `session` to `store` and return the normalized user.
///
/// # Errors
///
/// Returns [`AuthError::Storage`] if any write fails. A token is never left
/// behind without its user.
pub fn persist_session(
    store: &impl KeyValueStore,
    config: &impl ApiBaseSource,
    session: &Session,
) -> Result<LoginUser, AuthError> {
    if !config.is_api_base_locked() {
        store.set(API_BASE_KEY, &session.base)?;
    }
    let written = store.set(TOKEN_KEY, &session.token).and_then(|()| save_json(store, USER_KEY, &session.user_json));
    if let Err(e) = written {
        clear_session(store);
        return Err(e.into());
    }
    Ok(session.user.clone())
}

/// A session previously written by [`persist_session`].
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: LoginUser,
}

/// Read the persisted session, if both token and user are present.
pub fn load_session(store: &impl KeyValueStore) -> Option<StoredSession> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let user_json: serde_json::Value = load_json(store, USER_KEY)?;
    if !user_json.is_object() {
        return None;
    }
    Some(StoredSession { token, user: LoginUser::from_user_value(&user_json) })
}

/// Remove the token and user. The remembered API base is kept.
pub fn clear_session(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}
