//! Signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stand-in for the event app behind the login: shows who is signed in and
//! offers logout. Signed-out visitors are sent to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginUser;
use crate::state::auth::AuthState;
use crate::state::session::clear_session;
use crate::util::auth::install_unauth_redirect;
use crate::util::storage::LocalStorage;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let on_logout = move |_| {
        clear_session(&LocalStorage);
        auth.update(|s| s.user = None);
    };

    view! {
        <div class="home-page">
            <h1 class="login-logo">"ETERNELLES"</h1>
            <p class="home-welcome">
                "Bienvenue, "
                <span>{user_field(auth, |u| Some(u.display_name()))}</span>
            </p>
            <dl class="home-profile">
                <dt>"Email"</dt>
                <dd>{user_field(auth, |u| u.email.as_deref())}</dd>
                <dt>"Rôle"</dt>
                <dd>{user_field(auth, |u| u.role.as_deref())}</dd>
                <dt>"Formule"</dt>
                <dd>{user_field(auth, |u| u.subscription_tier.as_deref())}</dd>
            </dl>
            <button class="login-button" on:click=on_logout>"Se déconnecter"</button>
        </div>
    }
}

/// Reactive text for one field of the signed-in user (empty when signed out).
fn user_field(
    auth: RwSignal<AuthState>,
    pick: fn(&LoginUser) -> Option<&str>,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || auth.with(|s| s.user.as_ref().and_then(pick).unwrap_or_default().to_owned())
}
