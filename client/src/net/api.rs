//! Endpoint and body helpers for the authentication API.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::ErrorBody;

/// Path of the credential login endpoint, relative to an API base.
pub const LOGIN_PATH: &str = "/v1/auth/login";

/// Build `{base}/v1/auth/login`, ignoring trailing slashes on `base`.
pub fn login_endpoint(base: &str) -> String {
    format!("{}{LOGIN_PATH}", base.trim_end_matches('/'))
}

/// Parse a response body as JSON.
///
/// Empty bodies and invalid JSON count as "no data", as do the falsy values
/// `null`, `false`, `0` and `""`.
pub fn safe_parse_json(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    serde_json::from_str::<Value>(text).ok().filter(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Server-supplied rejection reason, when `detail` is a non-empty string.
pub fn rejection_detail(data: Option<&Value>) -> Option<String> {
    let body: ErrorBody = serde_json::from_value(data?.clone()).ok()?;
    body.detail.filter(|d| !d.is_empty())
}
