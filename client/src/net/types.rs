//! Wire DTOs for the `/v1/auth/login` exchange.
//!
//! DESIGN
//! ======
//! The backend's `user` object is kept as raw JSON so it can be persisted
//! exactly as received; only the normalized `LoginUser` is typed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::AuthError;

/// Email + password pair sent as the login request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// JSON request body `{"email": .., "password": ..}`.
    pub fn to_body(&self) -> String {
        serde_json::json!({ "email": self.email, "password": self.password }).to_string()
    }
}

/// Successful login reply: `{ access_token, user }`.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthResponse {
    /// Opaque bearer token.
    pub access_token: String,
    /// The backend user object, verbatim.
    pub user: Value,
}

impl AuthResponse {
    /// Extract the token and user object from a parsed success body.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedResponse`] when `access_token` is not a
    /// string or `user` is not an object.
    pub fn from_value(data: Value) -> Result<Self, AuthError> {
        let Value::Object(mut map) = data else {
            return Err(AuthError::MalformedResponse("body is not an object".to_owned()));
        };
        let access_token = match map.remove("access_token") {
            Some(Value::String(token)) => token,
            _ => return Err(AuthError::MalformedResponse("missing access_token".to_owned())),
        };
        let user = match map.remove("user") {
            Some(user @ Value::Object(_)) => user,
            _ => return Err(AuthError::MalformedResponse("missing user".to_owned())),
        };
        Ok(Self { access_token, user })
    }
}

/// User identifier; the backend sends either an integer or a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
}

/// The normalized user handed to the host application after login.
///
/// Exactly these five fields are forwarded; anything else in the backend
/// user object stays in storage only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_tier: Option<String>,
}

impl LoginUser {
    /// Pick the forwarded fields out of a backend user object.
    ///
    /// Fields with an unexpected JSON type are treated as absent.
    pub fn from_user_value(user: &Value) -> Self {
        let text = |key: &str| user.get(key).and_then(Value::as_str).map(str::to_owned);
        let id = user.get("id").and_then(|v| match v {
            Value::Number(n) => n.as_i64().map(UserId::Int),
            Value::String(s) => Some(UserId::Text(s.clone())),
            _ => None,
        });
        Self {
            id,
            email: text("email"),
            full_name: text("full_name"),
            role: text("role"),
            subscription_tier: text("subscription_tier"),
        }
    }

    /// Best display label: full name, then email, then a placeholder.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("?")
    }
}

/// Error body the backend may send on rejection: `{ detail }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
