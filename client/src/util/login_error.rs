//! Turn a failed login into the single message shown under the form.
//!
//! The regular form path hides low-level transport failures behind a
//! localized network message. That check only looks at text, so a server
//! `detail` that happens to mention "failed to fetch" is masked as well.
//! The demo shortcut never applies the check.

#[cfg(test)]
#[path = "login_error_test.rs"]
mod login_error_test;

use super::i18n::{MessageKey, Translate};
use crate::net::error::AuthError;

const NETWORK_MARKERS: [&str; 2] = ["failed to fetch", "networkerror"];

/// Which entry point started the attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginFlow {
    /// User-entered credentials from the login form.
    Form,
    /// The hardcoded demo account shortcut.
    Demo,
}

impl LoginFlow {
    fn masks_network_failures(self) -> bool {
        matches!(self, Self::Form)
    }
}

/// Case-insensitive check for browser `fetch` failure text.
pub fn looks_like_network_failure(text: &str) -> bool {
    let lower = text.to_lowercase();
    NETWORK_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Message to display for `err`.
pub fn login_error_message(err: &AuthError, flow: LoginFlow, i18n: &impl Translate) -> String {
    let raw = err.raw_message().unwrap_or_default();
    if flow.masks_network_failures() && looks_like_network_failure(raw) {
        return i18n.t(MessageKey::NetworkError);
    }
    if raw.is_empty() {
        i18n.t(MessageKey::LoginFailed)
    } else {
        raw.to_owned()
    }
}
