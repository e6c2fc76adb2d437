//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::types::LoginUser;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::util::auth::install_login_redirect;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server cannot see localStorage, so auth starts as loading and the
    // persisted session is restored once the app runs in the browser.
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    provide_context(auth);
    Effect::new(move || {
        auth.set(AuthState::restore(&LocalStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/eternelles.css"/>
        <Title text="Eternelles"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("login") view=LoginRoute/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// `/login`: hands the signed-in user to the auth context.
#[component]
fn LoginRoute() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_login_redirect(auth, use_navigate());

    let on_login = Callback::new(move |user: LoginUser| {
        leptos::logging::log!("signed in as {}", user.display_name());
        auth.set(AuthState { user: Some(user), loading: false });
    });

    view! { <LoginPage on_login=on_login/> }
}
