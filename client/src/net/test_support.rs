//! In-memory transport used by authenticator and login-flow tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::api::login_endpoint;
use super::error::TransportError;
use super::transport::{HttpTransport, RawResponse};

/// Replies with a fixed outcome per base and records every request.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: HashMap<String, Result<RawResponse, TransportError>>,
    calls: RefCell<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, base: &str, status: u16, body: &str) -> Self {
        self.replies.insert(login_endpoint(base), Ok(RawResponse::new(status, body)));
        self
    }

    pub(crate) fn fail(mut self, base: &str, message: &str) -> Self {
        self.replies.insert(login_endpoint(base), Err(TransportError(message.to_owned())));
        self
    }

    /// URLs requested so far, in order.
    pub(crate) fn urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(url, _)| url.clone()).collect()
    }

    pub(crate) fn bodies(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, body)| body.clone()).collect()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, TransportError> {
        self.calls.borrow_mut().push((url.to_owned(), body.to_owned()));
        self.replies
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError("TypeError: Failed to fetch".to_owned())))
    }
}

/// Fixed list of bases with a lock flag.
pub(crate) struct FixedBases {
    pub(crate) bases: Vec<String>,
    pub(crate) locked: bool,
}

impl FixedBases {
    pub(crate) fn new(bases: &[&str]) -> Self {
        Self { bases: bases.iter().map(|b| (*b).to_owned()).collect(), locked: false }
    }

    pub(crate) fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

impl crate::config::ApiBaseSource for FixedBases {
    fn api_base_candidates(&self) -> Vec<String> {
        self.bases.clone()
    }

    fn is_api_base_locked(&self) -> bool {
        self.locked
    }
}

pub(crate) const SUCCESS_BODY: &str = r#"{"access_token":"t1","user":{"id":1,"email":"e@x.com","full_name":"E","role":"staff","subscription_tier":"gold"}}"#;
