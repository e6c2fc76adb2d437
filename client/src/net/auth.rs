//! Credential login against an ordered list of API bases.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend may be reachable under different hosts (local vs hosted), so
//! the configured bases are tried one at a time. The first base that answers
//! with a success status and a JSON body wins and the loop stops there.
//! Otherwise the failure is recorded and the next base is tried; when all
//! fail, the last recorded failure is returned.
//!
//! No timeout is applied per attempt: a request that never settles blocks
//! the remaining candidates.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::api::{login_endpoint, rejection_detail, safe_parse_json};
use super::error::AuthError;
use super::transport::HttpTransport;
use super::types::{AuthResponse, Credentials, LoginUser};
use crate::config::ApiBaseSource;
use crate::util::i18n::{MessageKey, Translate};

/// Account used by the "demo login" shortcut.
pub const DEMO_EMAIL: &str = "demo@kcd-agency.com";
pub const DEMO_PASSWORD: &str = "demo123";

pub fn demo_credentials() -> Credentials {
    Credentials::new(DEMO_EMAIL, DEMO_PASSWORD)
}

/// An authenticated session returned by a successful login.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// The API base that accepted the credentials.
    pub base: String,
    pub token: String,
    /// Backend user object as received.
    pub user_json: Value,
    /// Normalized user record for the host application.
    pub user: LoginUser,
}

impl Session {
    fn from_response(base: String, response: AuthResponse) -> Self {
        let user = LoginUser::from_user_value(&response.user);
        Self { base, token: response.access_token, user_json: response.user, user }
    }
}

/// Runs the candidate-base login loop.
pub struct Authenticator<T, C, L> {
    transport: T,
    config: C,
    i18n: L,
}

impl<T, C, L> Authenticator<T, C, L>
where
    T: HttpTransport,
    C: ApiBaseSource,
    L: Translate,
{
    pub fn new(transport: T, config: C, i18n: L) -> Self {
        Self { transport, config, i18n }
    }

    /// Log in with `credentials`, trying each configured base in order.
    ///
    /// # Errors
    ///
    /// Returns the last candidate's failure when every base fails,
    /// [`AuthError::NoCandidates`] when none is configured, or
    /// [`AuthError::MalformedResponse`] when the winning reply lacks a token
    /// or user.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let body = credentials.to_body();
        let mut last_error = None;

        for base in self.config.api_base_candidates() {
            match self.attempt(&base, &body).await {
                Ok(data) => {
                    leptos::logging::log!("login accepted by {base}");
                    let response = AuthResponse::from_value(data)?;
                    return Ok(Session::from_response(base, response));
                }
                Err(e) => {
                    leptos::logging::warn!("login via {base} failed: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(AuthError::NoCandidates))
    }

    /// Log in with the built-in demo account.
    ///
    /// # Errors
    ///
    /// Same as [`Authenticator::login`].
    pub async fn login_demo(&self) -> Result<Session, AuthError> {
        self.login(&demo_credentials()).await
    }

    async fn attempt(&self, base: &str, body: &str) -> Result<Value, AuthError> {
        let resp = self.transport.post_json(&login_endpoint(base), body).await?;
        let data = safe_parse_json(&resp.body);
        match data {
            Some(data) if resp.ok => Ok(data),
            data => {
                leptos::logging::warn!("login via {base} answered HTTP {} without usable data", resp.status);
                Err(AuthError::Rejected(
                    rejection_detail(data.as_ref()).unwrap_or_else(|| self.i18n.t(MessageKey::InvalidCredentials)),
                ))
            }
        }
    }
}
