use super::*;
use crate::util::i18n::{Catalog, Locale};

fn en() -> Catalog {
    Catalog::new(Locale::En)
}

#[test]
fn network_markers_match_case_insensitively() {
    assert!(looks_like_network_failure("TypeError: Failed to fetch"));
    assert!(looks_like_network_failure("NetworkError when attempting to fetch resource."));
    assert!(looks_like_network_failure("networkerror"));
    assert!(!looks_like_network_failure("bad creds"));
    assert!(!looks_like_network_failure(""));
}

#[test]
fn form_flow_masks_transport_failures() {
    let err = AuthError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(login_error_message(&err, LoginFlow::Form, &en()), en().t(MessageKey::NetworkError));
}

#[test]
fn form_flow_shows_server_detail() {
    let err = AuthError::Rejected("bad creds".to_owned());
    assert_eq!(login_error_message(&err, LoginFlow::Form, &en()), "bad creds");
}

#[test]
fn form_flow_masks_detail_that_mentions_fetch_failure() {
    let err = AuthError::Rejected("upstream: failed to fetch profile".to_owned());
    assert_eq!(login_error_message(&err, LoginFlow::Form, &en()), en().t(MessageKey::NetworkError));
}

#[test]
fn demo_flow_shows_raw_transport_text() {
    let err = AuthError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(login_error_message(&err, LoginFlow::Demo, &en()), "TypeError: Failed to fetch");
}

#[test]
fn errors_without_text_fall_back_to_login_failed() {
    for flow in [LoginFlow::Form, LoginFlow::Demo] {
        assert_eq!(login_error_message(&AuthError::NoCandidates, flow, &en()), "Login failed");
        assert_eq!(
            login_error_message(&AuthError::MalformedResponse("missing user".to_owned()), flow, &en()),
            "Login failed"
        );
        assert_eq!(login_error_message(&AuthError::Network(String::new()), flow, &en()), "Login failed");
    }
}
