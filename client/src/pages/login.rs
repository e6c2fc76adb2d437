//! Login page: credential form, demo shortcut, and the signup tab.

use leptos::prelude::*;

use crate::components::credentials_panel::CredentialsPanel;
use crate::components::login_tabs::LoginTabs;
use crate::components::signup_form::SignupForm;
use crate::net::types::LoginUser;
use crate::state::login_form::{AuthTab, LoginFormState};
#[cfg(feature = "hydrate")]
use super::login_flow::LoginRequest;

/// Login card. `on_login` receives the normalized user after the session
/// has been persisted.
#[component]
pub fn LoginPage(#[prop(into)] on_login: Callback<LoginUser>) -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(LoginFormState::can_submit) {
            return;
        }
        let credentials = form.with_untracked(LoginFormState::credentials);
        form.update(LoginFormState::begin_attempt);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = super::login_flow::browser_services().run(LoginRequest::Form(credentials)).await;
            form.update(|f| f.finish_attempt(&outcome));
            if let Ok(user) = outcome {
                on_login.run(user);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, on_login);
        }
    };

    // Not guarded by `loading`: a demo login may overlap a form submit.
    let on_demo = move |_| {
        form.update(LoginFormState::begin_attempt);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = super::login_flow::browser_services().run(LoginRequest::Demo).await;
            form.update(|f| f.finish_attempt(&outcome));
            if let Ok(user) = outcome {
                on_login.run(user);
            }
        });
    };

    let tab = Signal::derive(move || form.with(|f| f.tab));
    let on_tab = Callback::new(move |next: AuthTab| form.update(|f| f.tab = next));
    let loading = move || form.with(|f| f.loading);

    view! {
        <div class="login-container">
            <div class="login-background">
                <div class="gradient-bg-login"></div>
                <div class="animated-bg-login"></div>
            </div>
            <div class="login-content">
                <div class="login-box">
                    <div class="login-header">
                        <h1 class="login-logo">"ETERNELLES"</h1>
                        <p class="login-tagline">"Accédez à l'evenement"</p>
                    </div>
                    <LoginTabs tab=tab on_select=on_tab/>
                    <Show when=move || tab.get() == AuthTab::Login>
                        <form class="login-form" on:submit=on_submit>
                            <Show when=move || form.with(|f| !f.error.is_empty())>
                                <div class="error-message">{move || form.with(|f| f.error.clone())}</div>
                            </Show>
                            <div class="form-group">
                                <label for="email">"Email"</label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="email@exemple.com"
                                    required=true
                                    disabled=loading
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label for="password">"Mot de passe"</label>
                                <div class="password-input-wrapper">
                                    <input
                                        id="password"
                                        type=move || form.with(LoginFormState::password_input_type)
                                        placeholder="Mot de passe"
                                        required=true
                                        disabled=loading
                                        prop:value=move || form.with(|f| f.password.clone())
                                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="show-password-btn"
                                        disabled=loading
                                        on:click=move |_| form.update(LoginFormState::toggle_password)
                                    >
                                        {move || if form.with(|f| f.show_password) { "👁️" } else { "👁️‍🗨️" }}
                                    </button>
                                </div>
                            </div>
                            <button
                                type="submit"
                                class="login-button"
                                disabled=move || !form.with(LoginFormState::can_submit)
                            >
                                {move || if loading() { "Connexion..." } else { "Se connecter" }}
                            </button>
                            <button
                                type="button"
                                class="login-button login-button--demo"
                                on:click=on_demo
                            >
                                "Connexion démo"
                            </button>
                        </form>
                    </Show>
                    <Show when=move || tab.get() == AuthTab::Signup>
                        <SignupForm form=form/>
                    </Show>
                    <CredentialsPanel/>
                </div>
            </div>
        </div>
    }
}
