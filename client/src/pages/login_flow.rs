//! Login orchestration shared by the form submit and the demo shortcut.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticate, persist the session, and turn any failure into the message
//! the page shows. Nothing is persisted when authentication fails.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use crate::config::ApiBaseSource;
use crate::net::auth::Authenticator;
use crate::net::transport::HttpTransport;
use crate::net::types::{Credentials, LoginUser};
use crate::state::session::persist_session;
use crate::util::i18n::Translate;
use crate::util::login_error::{LoginFlow, login_error_message};
use crate::util::storage::KeyValueStore;

/// What the user asked for: typed credentials or the demo shortcut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginRequest {
    Form(Credentials),
    Demo,
}

impl LoginRequest {
    /// Which flow this request is reported under.
    pub fn flow(&self) -> LoginFlow {
        match self {
            Self::Form(_) => LoginFlow::Form,
            Self::Demo => LoginFlow::Demo,
        }
    }
}

/// Collaborators for one login attempt.
pub struct LoginServices<T, S, C, L> {
    pub transport: T,
    pub store: S,
    pub config: C,
    pub i18n: L,
}

impl<T, S, C, L> LoginServices<T, S, C, L>
where
    T: HttpTransport,
    S: KeyValueStore,
    C: ApiBaseSource,
    L: Translate,
{
    /// Run one login attempt.
    ///
    /// # Errors
    ///
    /// Returns the message to display when authentication or persistence fails.
    pub async fn run(&self, request: LoginRequest) -> Result<LoginUser, String> {
        let flow = request.flow();
        let authenticator = Authenticator::new(&self.transport, &self.config, &self.i18n);
        let outcome = match &request {
            LoginRequest::Form(credentials) => authenticator.login(credentials).await,
            LoginRequest::Demo => authenticator.login_demo().await,
        };
        outcome
            .and_then(|session| persist_session(&self.store, &self.config, &session))
            .map_err(|e| login_error_message(&e, flow, &self.i18n))
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn browser_services() -> LoginServices<
    crate::net::transport::GlooTransport,
    crate::util::storage::LocalStorage,
    crate::config::StoredApiConfig<crate::util::storage::LocalStorage>,
    crate::util::i18n::Catalog,
> {
    use crate::util::storage::LocalStorage;

    LoginServices {
        transport: crate::net::transport::GlooTransport,
        store: LocalStorage,
        config: crate::config::StoredApiConfig::new(crate::config::ApiConfig::from_build_env(), LocalStorage),
        i18n: crate::util::i18n::Catalog::new(crate::util::i18n::Locale::detect()),
    }
}
