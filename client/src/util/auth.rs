//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: signed-out users go to
//! `/login`, signed-in users leave `/login` for the home route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// True when a user is signed in.
pub fn should_leave_login(state: &AuthState) -> bool {
    state.user.is_some()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` as soon as a user is signed in.
pub fn install_login_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_leave_login) {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
